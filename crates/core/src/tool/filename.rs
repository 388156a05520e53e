//! Default output filenames derived from the tool description

use tracing::warn;

/// Maximum number of description words used in a generated filename
pub const MAX_FILENAME_WORDS: usize = 4;

/// Name used when no description word survives filtering
pub const FALLBACK_FILENAME: &str = "untitled.html";

const EXTENSION: &str = ".html";
const TRIMMED_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Generate an `.html` filename from the first words of a description.
///
/// Each of the first four words is stripped of surrounding punctuation and
/// lowercased. Words that are not alphanumeric are dropped unless they carry a
/// hyphen, and words with a path separator are always dropped. Survivors are
/// joined with `-`.
pub fn generate_filename(description: &str) -> String {
    let slug = slug(description);
    if slug.is_empty() {
        warn!(
            "No usable words in description {:?}, using {}",
            description, FALLBACK_FILENAME
        );
        return FALLBACK_FILENAME.to_string();
    }
    format!("{}{}", slug, EXTENSION)
}

fn slug(description: &str) -> String {
    description
        .split_whitespace()
        .take(MAX_FILENAME_WORDS)
        .map(|word| word.trim_matches(TRIMMED_PUNCTUATION).to_lowercase())
        .filter(|word| is_filename_word(word))
        .collect::<Vec<_>>()
        .join("-")
}

fn is_filename_word(word: &str) -> bool {
    if word.is_empty() || word.contains(|c: char| c == '/' || c == '\\') {
        return false;
    }
    word.contains('-') || word.chars().all(char::is_alphanumeric)
}
