//! List-continuation detection for enumerated offerings
//!
//! Enumerations like "muffins and 123 and bagels" carry elements the lexicon
//! does not know. When a separator-delimited run is bounded by recognized
//! food chunks, the interior elements are taken to be foods as well, purely
//! from their position in the list.

use crate::config::FoodLexicon;
use crate::text;
use regex::Regex;
use std::sync::LazyLock;

/// Punctuation that disqualifies a chunk from being a list element
const CHUNK_PUNCTUATION: &[char] = &[
    '[', '.', ',', '\\', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_',
    '`', '~', '(', ')', ']', '\'', '?', '<', '>', '+',
];

/// No food has this many words
const TOO_LONG_FOR_FOOD: usize = 5;

// Literal separators only; "and" inside a word must not split it
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",| and | or ").unwrap());

/// Recover food items from enumerations in `input`.
///
/// The text is lowercased but not punctuation-stripped, then split on the
/// literal separators `,`, `" and "` and `" or "`. A run starts at a chunk
/// that is itself a known food and extends while chunks stay plausible list
/// elements; interior chunks are emitted verbatim. The chunk before the run
/// contributes its longest known-food token suffix, the chunk closing the
/// run its longest known-food token prefix.
#[must_use]
pub fn list_check(lexicon: &FoodLexicon, input: &str) -> Vec<String> {
    let lowered = input.to_lowercase();
    let chunks: Vec<&str> = SEPARATORS
        .split(&lowered)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect();

    let can_be_food: Vec<bool> = chunks.iter().map(|chunk| plausible(chunk)).collect();
    let is_food: Vec<bool> = chunks
        .iter()
        .map(|chunk| lexicon.is_valid_food(chunk))
        .collect();

    let mut matches = Vec::new();
    let mut run_start: Option<usize> = None;

    for i in 0..chunks.len() {
        if run_start.is_none() && is_food[i] {
            run_start = Some(i);
        }
        let Some(start) = run_start else {
            continue;
        };
        if can_be_food[i] && i != chunks.len() - 1 {
            continue;
        }
        let end = i;

        // Interior chunks are taken verbatim
        for chunk in &chunks[start..end] {
            matches.push(text::capitalize(chunk));
        }

        // Chunk before the run: the food must sit at its end
        if start > 0
            && let Some(food) = trailing_food(lexicon, chunks[start - 1])
        {
            matches.push(food);
        }

        // Chunk closing the run: the food must sit at its start
        if let Some(food) = leading_food(lexicon, chunks[end]) {
            matches.push(food);
        }

        run_start = None;
    }

    matches
}

/// Whether a chunk could plausibly be a food list element
fn plausible(chunk: &str) -> bool {
    !chunk.contains(CHUNK_PUNCTUATION)
        && !chunk.contains('\n')
        && chunk.split_whitespace().count() < TOO_LONG_FOR_FOOD
}

/// Longest token suffix of `chunk` that is a known food, capitalized
fn trailing_food(lexicon: &FoodLexicon, chunk: &str) -> Option<String> {
    let tokens: Vec<&str> = chunk.split_whitespace().collect();
    for skip in 0..tokens.len() {
        let candidate = tokens[skip..].join(" ");
        if lexicon.is_valid_food(&candidate) {
            return Some(text::capitalize(&candidate));
        }
    }
    None
}

/// Longest token prefix of `chunk` that is a known food, capitalized
fn leading_food(lexicon: &FoodLexicon, chunk: &str) -> Option<String> {
    let tokens: Vec<&str> = chunk.split_whitespace().collect();
    for take in (1..=tokens.len()).rev() {
        let candidate = tokens[..take].join(" ");
        if lexicon.is_valid_food(&candidate) {
            return Some(text::capitalize(&candidate));
        }
    }
    None
}
