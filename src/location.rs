//! Location matching against the campus directory

use crate::config::LocationDirectory;
use crate::text;

/// Resolve the best-matching canonical location name in `input`.
///
/// Aliases match as substrings of the normalized text; patterns match
/// case-insensitively anywhere in it. All candidates compete on the length
/// of their alias or pattern string and the longest wins, earlier entries
/// winning ties. There is only one location per email: even when several
/// independent locations appear in the text, only the single winner is
/// returned. Returns the empty string when nothing matches.
#[must_use]
pub fn match_location(directory: &LocationDirectory, input: &str) -> String {
    let normalized = text::normalize(input);

    let mut canonical = String::new();
    let mut best_len = 0;

    for alias in directory.aliases() {
        if alias.alias.len() > best_len && normalized.contains(&alias.alias) {
            canonical = alias.canonical.clone();
            best_len = alias.alias.len();
        }
    }

    for pattern in directory.patterns() {
        if pattern.pattern.len() > best_len && pattern.regex.is_match(&normalized) {
            canonical = pattern.canonical.clone();
            best_len = pattern.pattern.len();
        }
    }

    canonical
}
