// src/extract/pattern.rs
// =============================================================================
// The default extractor: two regular expressions swept over the raw page text.
//
// This is deliberately NOT an HTML parser. It doesn't know about nesting,
// comments or scripts; it just finds text that looks like an anchor with an
// href, or a button with something inside it. That keeps the output stable
// and predictable, including on broken markup.
//
// Rules:
// - Links:   <a ... href="value"> or href='value', case-insensitive
// - Buttons: <button ...>label</button>, case-insensitive, shortest match
//
// Rust concepts:
// - LazyLock: Compile each regex once, the first time it's used
// - captures_iter: Walks every non-overlapping match left to right
// =============================================================================

use regex::Regex;
use std::sync::LazyLock;

use super::ExtractionResult;

// Matches an opening tag starting with "a" that has an href attribute.
// Group 1 is the quoted value.
//
// [^>]* is greedy, so when one tag has several href= attributes
// the last one wins.
#[allow(clippy::expect_used)]
static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a[^>]*href=["']([^"']+)["']"#).expect("valid link regex")
});

// Matches a button and everything up to the NEAREST closing tag.
// Group 1 is the label. The label may not contain a line terminator
// (\n, \r, U+2028, U+2029), so multi-line labels are skipped.
#[allow(clippy::expect_used)]
static BUTTON_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<button[^>]*>([^\n\r\x{2028}\x{2029}]*?)</button>")
        .expect("valid button regex")
});

// Extracts links and button labels with the flat regex scan
//
// Each rule sweeps the whole body on its own, so a button never hides a
// link or the other way around.
//
// Example:
//   body = r#"<a href="/about">About</a><button>Go</button>"#
//   result.links = ["/about"], result.buttons = ["Go"]
pub fn extract_pattern(body: &str) -> ExtractionResult {
    ExtractionResult {
        links: collect_group(&LINK_PATTERN, body),
        buttons: collect_group(&BUTTON_PATTERN, body),
    }
}

// Collects capture group 1 of every match, in order, verbatim
fn collect_group(pattern: &Regex, body: &str) -> Vec<String> {
    pattern
        .captures_iter(body)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does (?i) mean?
//    - It's an inline flag that makes the whole regex case-insensitive
//    - So <A HREF='x'> and <a href="x"> both match
//
// 2. What is *? (lazy) vs * (greedy)?
//    - * grabs as much as possible, then backs off
//    - *? grabs as little as possible
//    - For buttons we want the nearest </button>, so the label uses *?
//
// 3. Why r#"..."# strings?
//    - Raw strings don't process escapes, so \ and " can be written directly
//    - The # lets us put " inside the string
// -----------------------------------------------------------------------------
