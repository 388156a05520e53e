//! Matchers behind each extraction rule
//!
//! All patterns are case-insensitive and let `.` cross line boundaries.

use once_cell::sync::Lazy;
use regex::Regex;

const DOCTYPE: &str = "<!doctype html>";
const CLOSING_TAG: &str = "</html>";

static LABELED_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)```html\n(.*?)\n```").expect("valid regex"));

static DOCTYPE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)```\n(<!DOCTYPE html>.*?)\n```").expect("valid regex"));

static BARE_DOCUMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)(<!DOCTYPE html>.*?</html>)").expect("valid regex"));

fn first_capture<'a>(pattern: &Regex, output: &'a str) -> Option<&'a str> {
    pattern
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

pub(super) fn labeled_fence(output: &str) -> Option<&str> {
    first_capture(&LABELED_FENCE, output)
}

pub(super) fn doctype_fence(output: &str) -> Option<&str> {
    first_capture(&DOCTYPE_FENCE, output)
}

pub(super) fn bare_document(output: &str) -> Option<&str> {
    first_capture(&BARE_DOCUMENT, output)
}

pub(super) fn doctype_fallback(output: &str) -> Option<&str> {
    // ASCII lowercasing keeps byte offsets aligned with `output`.
    let lower = output.to_ascii_lowercase();
    let start = lower.find(DOCTYPE)?;
    let end = lower.rfind(CLOSING_TAG)? + CLOSING_TAG.len();
    if end <= start {
        return None;
    }
    Some(&output[start..end])
}
