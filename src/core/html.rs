// src/core/html.rs
use scraper::{Html, Selector};

use crate::error::{Error, Result};

/// Compile a CSS selector, turning a bad selector into `Error::Parse`.
pub fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Parse(format!("invalid selector {css:?}: {e}")))
}

/// Lenient full-document parse. html5ever never rejects input; broken
/// markup is repaired the way a browser would.
pub fn parse(doc: &str) -> Html {
    Html::parse_document(doc)
}

/// Text of every element matching `selector`, in document order.
/// Each entry is the concatenation of all descendant text nodes, untrimmed.
pub fn select_text(doc: &Html, selector: &Selector) -> Vec<String> {
    doc.select(selector)
        .map(|el| el.text().collect::<String>())
        .collect()
}
