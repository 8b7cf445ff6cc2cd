//! Entry assembly from decoded message fields

use crate::config::ScraperConfig;
use crate::food;
use crate::location;
use crate::request;
use crate::types::{Entry, MimeFields};
use tracing::debug;

/// Combine the matchers with decoded MIME fields into one offering entry.
///
/// Foods and the location are matched over the subject and body together;
/// the request type is decided from the body alone. Pure composition, no
/// I/O. Missing fields arrive here as empty strings, supplied by the
/// MIME-decoding collaborator.
#[must_use]
pub fn format_entry(config: &ScraperConfig, fields: MimeFields) -> Entry {
    let searchable = format!("{}{}", fields.title, fields.body);
    let food = food::match_foods(&config.foods, &searchable);
    let location = location::match_location(&config.locations, &searchable);
    let request_type = request::classify_request(&fields.body);

    debug!(
        "Formatted entry: {:?} ({} foods, location {:?})",
        fields.title,
        food.len(),
        location
    );

    Entry {
        timestamp: fields.timestamp,
        title: fields.title,
        body: fields.body,
        food,
        location,
        image: fields.image,
        thread_id: fields.thread_id,
        request_type,
    }
}
