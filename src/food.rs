//! Food matching over free-text email content

use crate::config::FoodLexicon;
use crate::list;
use crate::text;
use std::collections::HashSet;

/// Find all known foods in `input`.
///
/// Matching is on whole tokens only, never on substrings inside a token, so
/// `"veggie!"` yields `["Veggie"]` and not an `"Egg"` as well. Multi-word
/// terms are matched by lookahead over consecutive tokens, consuming the
/// longest valid phrase at each position. Results are capitalized,
/// deduplicated case-insensitively with the first-seen capitalization kept,
/// and ordered by discovery.
#[must_use]
pub fn match_foods(lexicon: &FoodLexicon, input: &str) -> Vec<String> {
    let tokens = text::food_tokens(input);

    let mut matches = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        if let Some((phrase, consumed)) = phrase_at(lexicon, &tokens, i) {
            matches.push(text::capitalize(&phrase));
            i += consumed;
            continue;
        }

        if lexicon.is_valid_food(&tokens[i]) {
            matches.push(text::capitalize(&tokens[i]));
        }
        i += 1;
    }

    matches.extend(list::list_check(lexicon, input));

    dedup_case_insensitive(matches)
}

/// Longest valid multi-word phrase starting at `start`, with its token count
fn phrase_at(lexicon: &FoodLexicon, tokens: &[String], start: usize) -> Option<(String, usize)> {
    for &len in lexicon.phrase_lengths(&tokens[start]) {
        if start + len > tokens.len() {
            continue;
        }
        let phrase = tokens[start..start + len].join(" ");
        if lexicon.is_valid_food(&phrase) {
            return Some((phrase, len));
        }
    }
    None
}

/// First occurrence wins, compared after case-folding
fn dedup_case_insensitive(matches: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    matches
        .into_iter()
        .filter(|food| seen.insert(food.to_lowercase()))
        .collect()
}
