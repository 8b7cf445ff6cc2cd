//! Core types for extracted offerings

use serde::{Deserialize, Serialize};

/// What the persistence collaborator should do with a message
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum RequestType {
    /// New or continuing offering
    #[default]
    Insert,

    /// Retraction of an earlier offering, e.g. "all gone"
    Delete,
}

/// An image attachment carried by a message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageRef {
    /// Attachment filename
    pub name: String,

    /// Attachment id used to fetch the bytes later
    pub attachment_id: String,
}

/// Fields supplied by the MIME-decoding collaborator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MimeFields {
    /// Send time, `YYYY-MM-DD HH:MM:SS` in UTC
    pub timestamp: String,

    /// Message subject
    pub title: String,

    /// Plain-text message body
    pub body: String,

    /// First image attachment, if any
    pub image: Option<ImageRef>,

    /// Thread id, matched on retraction
    pub thread_id: String,
}

/// One structured offering, handed off to the persistence collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Send time, `YYYY-MM-DD HH:MM:SS` in UTC
    pub timestamp: String,

    /// Message subject
    pub title: String,

    /// Plain-text message body
    pub body: String,

    /// Foods in discovery order, deduplicated case-insensitively with the
    /// first-seen capitalization kept
    pub food: Vec<String>,

    /// Canonical location name, or empty when none matched
    pub location: String,

    /// First image attachment, if any
    pub image: Option<ImageRef>,

    /// Thread id, matched on retraction
    pub thread_id: String,

    /// Whether to insert this offering or delete the thread's earlier one
    pub request_type: RequestType,
}
