pub mod html;
pub mod tokens;

#[cfg(test)]
mod tests;

use crate::results::Link;
use scraper::Html;

/// A fetched page parsed once into a DOM
pub struct PageDocument {
    doc: Html,
}

impl PageDocument {
    /// Parses raw HTML into a document
    pub fn parse(html: &str) -> Self {
        let doc = Html::parse_document(html);
        if !doc.errors.is_empty() {
            ::log::debug!("HTML parser recovered from {} errors", doc.errors.len());
        }
        Self { doc }
    }

    /// All visible text of the page
    pub fn text(&self) -> String {
        html::extract_text(&self.doc)
    }

    /// Every anchor with a target URL, in document order
    pub fn links(&self) -> Vec<Link> {
        html::extract_links(&self.doc)
    }

    /// Lowercase word tokens of the page text
    pub fn tokens(&self) -> Vec<String> {
        tokens::tokenize(&self.text())
    }
}
