//! Core domain entities.
//!
//! - [`UrlRecord`] - A shortened URL with its expiry and click counter
//! - [`ShortLink`] - A record paired with its short code

pub mod url_record;

pub use url_record::{ShortLink, UrlRecord};
