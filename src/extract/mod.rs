// src/extract/mod.rs
// =============================================================================
// This module turns a page body into the two lists we report: link targets
// and button labels.
//
// Submodules:
// - pattern: The default flat regex scan over the raw text
// - dom: An opt-in mode that parses the page into a tree first
//
// Both modes produce an ExtractionResult in document order, keeping
// duplicates. Extraction never fails: a body with nothing in it just gives
// two empty lists.
// =============================================================================

mod dom;
mod pattern;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use dom::extract_dom;
pub use pattern::extract_pattern;

// The links and button labels found on one page
//
// #[derive(Serialize)] lets us print it with --json
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// href values of anchor tags, exactly as written in the page
    pub links: Vec<String>,
    /// Text between <button ...> and </button>
    pub buttons: Vec<String>,
}

/// How the page body is scanned
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExtractMode {
    /// Flat regex scan over the raw text (not nesting-aware)
    #[default]
    Pattern,
    /// Parse into an HTML tree and query it with CSS selectors
    Dom,
}

// Runs the extractor selected by `mode` over `body`
pub fn extract(body: &str, mode: ExtractMode) -> ExtractionResult {
    let result = match mode {
        ExtractMode::Pattern => extract_pattern(body),
        ExtractMode::Dom => extract_dom(body),
    };

    tracing::debug!(
        ?mode,
        links = result.links.len(),
        buttons = result.buttons.len(),
        "extraction finished"
    );

    result
}
