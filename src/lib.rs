// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Free-Food Offering Extraction
//!
//! Turns free-text campus emails about free food into structured offerings:
//! which foods are on offer, which campus location is meant, and whether the
//! message announces food or retracts it ("all gone").
//!
//! # Features
//!
//! - Whole-token food matching with a simple plural rule
//! - List-continuation recovery for enumerated offerings
//! - Campus location resolution by alias substring and room-number patterns
//! - Offering vs retraction classification
//! - Gmail API payload decoding for the shapes the listserv produces
//!
//! # Example
//!
//! ```rust
//! use foodmap_extract::{ScraperConfig, match_foods, match_location};
//!
//! let config = ScraperConfig::bundled().unwrap();
//!
//! let text = "Free pizza and sushi in Frist!";
//! assert_eq!(match_foods(&config.foods, text), ["Pizza", "Sushi"]);
//! assert_eq!(match_location(&config.locations, text), "Frist Campus Center");
//! ```

mod config;
mod error;
mod food;
mod formatter;
mod list;
mod location;
mod mime;
mod request;
mod text;
mod types;

pub use config::{FoodLexicon, LocationAlias, LocationDirectory, LocationPattern, ScraperConfig};
pub use error::{Result, ScrapeError};
pub use food::match_foods;
pub use formatter::format_entry;
pub use list::list_check;
pub use location::match_location;
pub use mime::{
    Header, MimeMessage, MimePart, PartBody, PayloadShape, body_text, image_ref, message_fields,
    subject, timestamp,
};
pub use request::classify_request;
pub use text::{capitalize, normalize};
pub use types::{Entry, ImageRef, MimeFields, RequestType};
