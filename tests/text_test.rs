use foodmap_extract::{capitalize, normalize};

// --- normalize ---

#[test]
fn test_normalize_lowercases() {
    assert_eq!(normalize("PIZZA Tonight"), "pizza tonight");
}

#[test]
fn test_normalize_strips_punctuation() {
    assert_eq!(normalize("Time for P.I.Z.Z.A"), "time for pizza");
    assert_eq!(normalize("free; food: here!"), "free food here");
    assert_eq!(normalize("half-price (not really)"), "halfprice not really");
}

#[test]
fn test_normalize_collapses_contractions() {
    assert_eq!(normalize("Olive's"), "olives");
    assert_eq!(normalize("They're all gone"), "theyre all gone");
}

#[test]
fn test_normalize_keeps_whitespace_and_digits() {
    assert_eq!(normalize("Lewis 123,\nbring a spoon"), "lewis 123\nbring a spoon");
}

#[test]
fn test_normalize_empty() {
    assert_eq!(normalize(""), "");
}

#[test]
fn test_normalize_idempotent() {
    let cases = [
        "",
        "Olive's",
        "Time for P.I.Z.Z.A",
        "Lewis 123, bring your spoon!",
        "plain text with no punctuation",
    ];
    for case in &cases {
        let once = normalize(case);
        assert_eq!(normalize(&once), once, "normalize should be idempotent on {case:?}");
    }
}

// --- capitalize ---

#[test]
fn test_capitalize_first_character_only() {
    assert_eq!(capitalize("pizza"), "Pizza");
    assert_eq!(capitalize("ice cream"), "Ice cream");
}

#[test]
fn test_capitalize_leaves_rest_unchanged() {
    assert_eq!(capitalize("pAPA johns"), "PAPA johns");
}

#[test]
fn test_capitalize_empty() {
    assert_eq!(capitalize(""), "");
}

#[test]
fn test_capitalize_non_letter() {
    assert_eq!(capitalize("123"), "123");
}
