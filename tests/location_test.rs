use foodmap_extract::{ScraperConfig, match_location};

// --- no match ---

#[test]
fn test_empty_text() {
    let config = ScraperConfig::bundled().unwrap();
    assert_eq!(match_location(&config.locations, ""), "");
}

#[test]
fn test_no_known_location() {
    let config = ScraperConfig::bundled().unwrap();
    assert_eq!(match_location(&config.locations, "xyz"), "");
}

// --- alias resolution ---

#[test]
fn test_alias_resolves_to_canonical_name() {
    let config = ScraperConfig::bundled().unwrap();
    assert_eq!(match_location(&config.locations, "clapp"), "1927 - Clapp Hall");
}

#[test]
fn test_alias_survives_punctuation() {
    let config = ScraperConfig::bundled().unwrap();
    assert_eq!(match_location(&config.locations, "come to dod!"), "Dod Hall");
}

// --- case-insensitive matching ---

#[test]
fn test_mixed_case_aliases() {
    let config = ScraperConfig::bundled().unwrap();
    let cases = [
        ("EQuad has food", "Engineering Quadrangle"),
        ("FRIST HAS FOOD", "Frist Campus Center"),
        ("Pizza at CoLoNiAl", "Colonial Club"),
    ];
    for (text, expected) in &cases {
        assert_eq!(
            match_location(&config.locations, text),
            *expected,
            "wrong location for {text:?}"
        );
    }
}

// --- longest match wins ---

#[test]
fn test_longer_alias_beats_shorter_overlap() {
    let config = ScraperConfig::bundled().unwrap();
    assert_eq!(
        match_location(&config.locations, "Ticket holders to Friend Center"),
        "Friend Center"
    );
}

#[test]
fn test_single_winner_even_with_two_locations() {
    let config = ScraperConfig::bundled().unwrap();
    // Two independent locations appear; only the longest alias is returned
    assert_eq!(
        match_location(&config.locations, "pizza at frist and dod"),
        "Frist Campus Center"
    );
}

// --- room-number patterns ---

#[test]
fn test_building_and_room_number() {
    let config = ScraperConfig::bundled().unwrap();
    assert_eq!(match_location(&config.locations, "Friend 112"), "Friend Center");
}

#[test]
fn test_pattern_survives_trailing_clause() {
    let config = ScraperConfig::bundled().unwrap();
    assert_eq!(
        match_location(&config.locations, "Lewis 123, bring your spoon!"),
        "Lewis Library"
    );
}
