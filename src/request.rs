//! Offering vs retraction classification

use crate::text;
use crate::types::RequestType;

/// Phrases that mark a message as a retraction
const DELETE_PHRASES: &[&str] = &["all gone"];

/// Classify `input` as an offering or a retraction.
///
/// The text is normalized first, so `"They're all gone"` collapses to
/// `"theyre all gone"` and still triggers. Every message that carries no
/// delete phrase is an offering, the empty string included.
#[must_use]
pub fn classify_request(input: &str) -> RequestType {
    let normalized = text::normalize(input);
    if DELETE_PHRASES
        .iter()
        .any(|phrase| normalized.contains(phrase))
    {
        RequestType::Delete
    } else {
        RequestType::Insert
    }
}
