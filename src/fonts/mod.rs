//! Font resolution.
//!
//! This module turns a parsed font dictionary into an immutable [`Font`]:
//! glyph widths, display name, an optional embedded font program, an optional
//! character-encoding table, and an optional ToUnicode text mapping. The
//! orchestrating [`handler::TrueTypeFontHandler`] composes the per-source
//! resolvers; each of those is independently optional and independently
//! fallible.

pub mod descriptor;
pub mod encodings;
pub mod font;
pub mod font_dict;
pub mod handler;
pub mod program;
pub mod to_unicode;

pub use descriptor::{
    DescriptorResolver, FontDescriptor, FontDescriptorResolver, FontFile, FontFileKind, FontFlags,
};
pub use encodings::{named_encoding, Encoding};
pub use font::Font;
pub use handler::{FontHandler, TrueTypeFontHandler};
pub use program::{FontProgram, FontProgramLoader, FontProgramParser};
pub use to_unicode::{CMap, CMapCache};
