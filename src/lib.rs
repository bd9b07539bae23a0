//! Decode WordPress WXR blog exports into a typed record graph.
//!
//! WXR is the RSS-based XML format WordPress uses for content exports.
//! This crate reads one export document and produces typed records for
//! the blog channel, its categories and tags, and every item, so that
//! migration and archival tools get typed access without touching XML.
//!
//! # Example
//!
//! ```
//! let xml = r#"<rss version="2.0">
//!   <channel>
//!     <title>Demo Blog</title>
//!     <item>
//!       <title>Hello</title>
//!       <post_type>post</post_type>
//!     </item>
//!   </channel>
//! </rss>"#;
//!
//! let rss = wxr::decode_str(xml).unwrap();
//! assert_eq!(rss.channel.title, "Demo Blog");
//! assert_eq!(rss.channel.items[0].post_type, "post");
//! ```
//!
//! # Architecture
//!
//! - [`scalar`]: scalar decoder registry and the `pubDate` timestamp
//! - [`schema`]: declarative field bindings and the `Decode` contract
//! - [`engine`]: tree decoder walking a document per the bindings
//! - [`types`]: the decoded record graph (Rss, Channel, Item, ...)
//! - [`document`]: the one-shot decode entry points
//! - [`error`]: error types and Result alias
//! - [`xml`]: roxmltree navigation helpers
//!
//! Fetching archives, decompression, and streaming decode are out of
//! scope: callers hand the decoder already-extracted document bytes.

pub mod document;
pub mod engine;
pub mod error;
pub mod scalar;
pub mod schema;
pub mod types;
pub mod xml;

// Re-export the entry points
pub use document::{decode, decode_str};

// Re-export commonly used items
pub use engine::Decoder;
pub use error::{Result, WxrError};
pub use scalar::{ScalarRegistry, WpTime};
pub use schema::{Binding, BindingKind, Decode, Source};
pub use types::{Category, Channel, Item, ItemCategory, Rss, Tag};
