// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::too_many_arguments)]

//! # Font Oxide
//!
//! Font resolution for PDF consumers: given a parsed font dictionary, this
//! crate determines how character codes map to glyph widths, a display name,
//! an optional embedded binary font program, a character-encoding table, and
//! a Unicode text mapping, and assembles those into one immutable [`Font`].
//!
//! ## Design
//!
//! A font dictionary names five independently-optional, independently-fallible
//! data sources. Resolution degrades gracefully: a missing descriptor, widths
//! array, `/Encoding` entry, or `/ToUnicode` stream reduces the capability of
//! the resolved font instead of failing the document load. Hard failures are
//! reserved for the cases where continuing would be wrong:
//!
//! - an embedded font file whose declared type disagrees with the handler
//!   (invoking the wrong binary parser is unsafe),
//! - an `/Encoding` name with no predefined table,
//! - `/Encoding` shapes with no supported interpretation.
//!
//! The heavy lifting of the surrounding document (indirect-reference
//! resolution, stream filter decoding, binary font parsing, CMap parsing)
//! is consumed through injected trait contracts (see [`document`] and the
//! traits in [`fonts`]), never implemented here.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use font_oxide::fonts::{FontDescriptorResolver, FontHandler, TrueTypeFontHandler};
//!
//! let handler = TrueTypeFontHandler::new(
//!     Arc::clone(&object_parser),
//!     Arc::clone(&filter_provider),
//!     Arc::clone(&cmap_cache),
//!     Arc::new(FontDescriptorResolver::new(Arc::clone(&object_parser))),
//!     Arc::clone(&truetype_parser),
//! );
//!
//! let font = handler.generate(&font_dictionary, &mut document_bytes, true)?;
//! println!("resolved {:?}, {} widths", font.name(), font.widths().map_or(0, |w| w.len()));
//! ```
//!
//! ## License
//!
//! Licensed under either of the Apache License, Version 2.0 or the MIT
//! license, at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// PDF object model and document-session contracts
pub mod document;
pub mod object;

// Font resolution
pub mod fonts;

pub use error::{Error, Result};
pub use fonts::Font;
