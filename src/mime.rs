//! Gmail API message payloads and field extraction
//!
//! The scraper receives messages from the Gmail API as structured JSON
//! resources, not raw RFC 5322 bytes. This module models the payload shapes
//! the Free Food listserv actually produces and pulls out the fields the
//! formatter needs: subject, send time, plain-text body, first image
//! attachment and thread id.

use crate::error::{Result, ScrapeError};
use crate::types::{ImageRef, MimeFields};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use chrono::DateTime;
use serde::Deserialize;

/// Listserv footer appended to every message, stripped before matching
const FREEFOOD_FOOTER: &str = "-----\r\nYou are receiving this email because you are subscribed to the Free Food mailing list, operated by the USG. If you have questions or are having difficulties with this listserv, please send an email to usg@princeton.edu.\r\n\r\nIn your message to the freefood listserv, please state what type of food it is, where it is, until when it will be available and how delicious it is.\r\n\r\nTo unsubscribe, please email listserv@princeton.edu the line UNSUBSRIBE FREEFOOD in the body of the message. Please be sure to remove your e-mail signature (if any) before you send that message.\r\n";

/// A Gmail `users.messages.get` resource
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MimeMessage {
    /// Message id
    #[serde(default)]
    pub id: String,

    /// Thread id, matched on retraction
    #[serde(default)]
    pub thread_id: String,

    /// Send time as epoch milliseconds in a decimal string
    #[serde(default)]
    pub internal_date: String,

    /// Root MIME part
    pub payload: MimePart,
}

impl MimeMessage {
    /// Parse a message resource from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ScrapeError::Decode(e.to_string()))
    }
}

/// One part of a message payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MimePart {
    /// Content type, e.g. `text/plain` or `multipart/alternative`
    #[serde(default)]
    pub mime_type: String,

    /// Attachment filename, empty for inline parts
    #[serde(default)]
    pub filename: String,

    /// Part headers
    #[serde(default)]
    pub headers: Vec<Header>,

    /// Part content
    #[serde(default)]
    pub body: PartBody,

    /// Child parts of a multipart container
    #[serde(default)]
    pub parts: Vec<MimePart>,
}

/// Part content: inline base64url data or an attachment reference
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartBody {
    /// URL-safe base64 content for inline parts
    #[serde(default)]
    pub data: Option<String>,

    /// Attachment id for parts stored out of line
    #[serde(default)]
    pub attachment_id: Option<String>,
}

/// A single message header
#[derive(Debug, Clone, Deserialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}

/// The payload shapes the listserv produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    /// Bare `text/plain` body
    TextPlain,

    /// `multipart/alternative` holding plain and HTML renditions
    Alternative,

    /// `multipart/related`, an alternative part plus inline resources
    Related,

    /// `multipart/mixed`, an alternative part plus attachments
    Mixed,

    /// Anything else; yields an empty body
    Other,
}

impl PayloadShape {
    /// Classify a `mimeType` value
    #[must_use]
    pub fn classify(mime_type: &str) -> Self {
        match mime_type {
            "text/plain" => Self::TextPlain,
            "multipart/alternative" => Self::Alternative,
            "multipart/related" => Self::Related,
            "multipart/mixed" => Self::Mixed,
            _ => Self::Other,
        }
    }
}

/// Extract every field the formatter needs from a message resource.
pub fn message_fields(message: &MimeMessage) -> Result<MimeFields> {
    Ok(MimeFields {
        timestamp: timestamp(message)?,
        title: subject(message),
        body: body_text(message)?,
        image: image_ref(message),
        thread_id: message.thread_id.clone(),
    })
}

/// Subject header value, or empty when absent
#[must_use]
pub fn subject(message: &MimeMessage) -> String {
    message
        .payload
        .headers
        .iter()
        .find(|header| header.name == "Subject")
        .map_or_else(String::new, |header| header.value.clone())
}

/// Send time as `YYYY-MM-DD HH:MM:SS` UTC, from epoch milliseconds
pub fn timestamp(message: &MimeMessage) -> Result<String> {
    let millis: i64 = message
        .internal_date
        .parse()
        .map_err(|_| ScrapeError::Timestamp(message.internal_date.clone()))?;
    let when = DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| ScrapeError::Timestamp(message.internal_date.clone()))?;
    Ok(when.format("%Y-%m-%d %H:%M:%S").to_string())
}

/// Plain-text body of a message.
///
/// `text/plain` decodes directly; the multipart shapes search their children
/// for the plain-text rendition. A shape without one, or an unknown shape,
/// yields the empty string. The listserv footer and NUL bytes are stripped.
pub fn body_text(message: &MimeMessage) -> Result<String> {
    let payload = &message.payload;
    let raw = match PayloadShape::classify(&payload.mime_type) {
        PayloadShape::TextPlain => decode_part(payload)?,
        PayloadShape::Alternative => alternative_text(payload)?,
        PayloadShape::Related | PayloadShape::Mixed => {
            match find_part(payload, "multipart/alternative") {
                Some(alternative) => alternative_text(alternative)?,
                None => String::new(),
            }
        }
        PayloadShape::Other => String::new(),
    };

    Ok(raw.replace(FREEFOOD_FOOTER, "").replace('\0', ""))
}

/// First image attachment of a `multipart/mixed` message, if any
#[must_use]
pub fn image_ref(message: &MimeMessage) -> Option<ImageRef> {
    if PayloadShape::classify(&message.payload.mime_type) != PayloadShape::Mixed {
        return None;
    }

    message
        .payload
        .parts
        .iter()
        .find(|part| part.mime_type.starts_with("image/"))
        .and_then(|part| {
            part.body.attachment_id.as_ref().map(|id| ImageRef {
                name: part.filename.clone(),
                attachment_id: id.clone(),
            })
        })
}

/// Plain-text child of a `multipart/alternative` part, or empty
fn alternative_text(part: &MimePart) -> Result<String> {
    find_part(part, "text/plain").map_or_else(|| Ok(String::new()), decode_part)
}

/// First direct child with the given content type
fn find_part<'a>(part: &'a MimePart, mime_type: &str) -> Option<&'a MimePart> {
    part.parts.iter().find(|child| child.mime_type == mime_type)
}

/// Decode a part's inline base64url data; absent data decodes to empty
fn decode_part(part: &MimePart) -> Result<String> {
    let Some(data) = part.body.data.as_deref() else {
        return Ok(String::new());
    };
    let bytes = URL_SAFE
        .decode(data)
        .map_err(|e| ScrapeError::Decode(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ScrapeError::Decode(e.to_string()))
}
