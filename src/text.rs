//! Text normalization shared by every matcher

/// Punctuation removed by [`normalize`]
const PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')', '\'',
];

/// Lowercase `text` and strip the fixed punctuation set.
///
/// Whitespace structure, newlines and digits survive. The apostrophe is part
/// of the set, so contractions and possessives collapse: `"Olive's"` becomes
/// `"olives"`. Total over all strings and idempotent.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !PUNCTUATION.contains(c))
        .collect()
}

/// Uppercase the first character, leaving the rest unchanged
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Tokenize for food matching.
///
/// Commas separate tokens the same way whitespace does, then the remaining
/// punctuation is stripped inside each token, so `"a,b"` yields `["a", "b"]`
/// and `"P.I.Z.Z.A"` yields `["pizza"]`.
#[must_use]
pub fn food_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| c.is_whitespace() || c == ',')
        .map(|token| {
            token
                .chars()
                .filter(|c| !PUNCTUATION.contains(c))
                .collect::<String>()
        })
        .filter(|token| !token.is_empty())
        .collect()
}
