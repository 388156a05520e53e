//! Extraction of the generated HTML document from agent output

use tracing::debug;

mod html;

/// Pattern rules for isolating an HTML document, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionRule {
    /// A fenced code block labeled `html`
    LabeledFence,
    /// An unlabeled fenced code block starting with the doctype
    DoctypeFence,
    /// A doctype-to-`</html>` span anywhere in the text
    BareDocument,
    /// First doctype to the last `</html>`
    DoctypeFallback,
}

impl ExtractionRule {
    /// All rules in the order they are tried
    pub const ALL: [ExtractionRule; 4] = [
        Self::LabeledFence,
        Self::DoctypeFence,
        Self::BareDocument,
        Self::DoctypeFallback,
    ];

    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LabeledFence => "labeled_fence",
            Self::DoctypeFence => "doctype_fence",
            Self::BareDocument => "bare_document",
            Self::DoctypeFallback => "doctype_fallback",
        }
    }

    /// Apply this rule alone to `output`
    pub fn apply(&self, output: &str) -> Option<String> {
        let found = match self {
            Self::LabeledFence => html::labeled_fence(output),
            Self::DoctypeFence => html::doctype_fence(output),
            Self::BareDocument => html::bare_document(output),
            Self::DoctypeFallback => html::doctype_fallback(output),
        };
        found.map(|s| s.trim().to_string())
    }
}

/// Isolate the HTML document in `output`, if any.
///
/// Rules are tried in [`ExtractionRule::ALL`] order and the first match wins.
/// A match that is empty after trimming counts as no document.
pub fn extract_html(output: &str) -> Option<String> {
    let (rule, document) = ExtractionRule::ALL
        .iter()
        .find_map(|rule| rule.apply(output).map(|doc| (*rule, doc)))?;

    debug!("Extracted {} bytes with rule {}", document.len(), rule.as_str());

    if document.is_empty() {
        return None;
    }
    Some(document)
}
