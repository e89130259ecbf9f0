// src/extract/dom.rs
// =============================================================================
// The opt-in extractor (--mode dom): parse the page into a tree, then query it.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM the way a browser would (built on html5ever)
// - Supports CSS selectors for finding elements
//
// Unlike the pattern scan this understands nesting, so its output differs on
// nested or malformed markup. For example a <button> inside a <button> is
// split into two sibling buttons by the parser.
// =============================================================================

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use super::ExtractionResult;

#[allow(clippy::expect_used)]
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid anchor selector"));

#[allow(clippy::expect_used)]
static BUTTON_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("button").expect("valid button selector"));

// Extracts links and button labels from the parsed document
//
// Links are the raw href attribute values (no resolution against a base URL).
// Button labels are the button's text nodes joined together, untrimmed.
pub fn extract_dom(body: &str) -> ExtractionResult {
    let document = Html::parse_document(body);

    let links = document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect();

    let buttons = document.select(&BUTTON_SELECTOR).map(label_text).collect();

    ExtractionResult { links, buttons }
}

fn label_text(button: ElementRef<'_>) -> String {
    button.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body() {
        assert_eq!(extract_dom(""), ExtractionResult::default());
    }

    #[test]
    fn test_links_in_document_order() {
        let html = r#"
            <a href="https://rust-lang.org">Rust</a>
            <a href="/docs">Docs</a>
            <a name="anchor-without-href">skip</a>
            <a href="../about">About</a>
        "#;
        let result = extract_dom(html);
        assert_eq!(result.links, vec!["https://rust-lang.org", "/docs", "../about"]);
    }

    #[test]
    fn test_button_label_drops_inner_tags() {
        let html = r#"<button type="submit"><span>Save</span> now</button>"#;
        assert_eq!(extract_dom(html).buttons, vec!["Save now"]);
    }

    #[test]
    fn test_nested_buttons_become_siblings() {
        let result = extract_dom("<button>Outer<button>Inner</button></button>");
        assert_eq!(result.buttons, vec!["Outer", "Inner"]);
    }

    #[test]
    fn test_multiline_button_is_matched() {
        let result = extract_dom("<button>\n  Next\n</button>");
        assert_eq!(result.buttons, vec!["\n  Next\n"]);
    }

    #[test]
    fn test_uppercase_markup() {
        let result = extract_dom(r#"<A HREF='x'>x</A><BUTTON>Go</BUTTON>"#);
        assert_eq!(result.links, vec!["x"]);
        assert_eq!(result.buttons, vec!["Go"]);
    }
}
