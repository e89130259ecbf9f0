// src/report.rs
// =============================================================================
// Turns an ExtractionResult into what we print on stdout.
//
// Two formats:
// - Text (default):
//     Links found:
//      - /about
//
//     Buttons found:
//      - Go
// - JSON (--json): {"links": [...], "buttons": [...]}
// =============================================================================

use anyhow::Result;
use std::fmt::Write as _;

use crate::extract::ExtractionResult;

// Renders the result in the requested format
pub fn render(result: &ExtractionResult, json: bool) -> Result<String> {
    if json {
        let mut output = serde_json::to_string_pretty(result)?;
        output.push('\n');
        Ok(output)
    } else {
        Ok(render_text(result))
    }
}

// Renders the two labeled lists, links first, separated by a blank line
pub fn render_text(result: &ExtractionResult) -> String {
    let mut output = String::from("Links found:\n");
    for link in &result.links {
        // Writing into a String can't fail
        let _ = writeln!(output, " - {link}");
    }

    output.push_str("\nButtons found:\n");
    for button in &result.buttons {
        let _ = writeln!(output, " - {button}");
    }

    output
}
