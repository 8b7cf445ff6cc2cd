use foodmap_extract::{RequestType, classify_request};

// --- retractions ---

#[test]
fn test_all_gone() {
    assert_eq!(classify_request("all gone"), RequestType::Delete);
}

#[test]
fn test_all_gone_mixed_case() {
    assert_eq!(classify_request("ALL Gone"), RequestType::Delete);
}

#[test]
fn test_all_gone_with_contraction() {
    assert_eq!(classify_request("They're all gone"), RequestType::Delete);
}

#[test]
fn test_all_gone_with_stray_apostrophe() {
    assert_eq!(classify_request("all' gone"), RequestType::Delete);
}

#[test]
fn test_all_gone_inside_sentence() {
    assert_eq!(
        classify_request("Sorry folks, the cookies are all gone!"),
        RequestType::Delete
    );
}

// --- offerings ---

#[test]
fn test_empty_text_is_an_offering() {
    assert_eq!(classify_request(""), RequestType::Insert);
}

#[test]
fn test_plain_offering() {
    assert_eq!(classify_request("food at frist"), RequestType::Insert);
}

#[test]
fn test_gone_alone_is_not_a_retraction() {
    assert_eq!(classify_request("the event is gone ahead"), RequestType::Insert);
}
