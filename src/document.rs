//! Contracts onto the owning document session.
//!
//! Font resolution never walks the file on its own. Everything it needs from
//! the surrounding document (indirect-reference resolution, stream filter
//! decoding against the shared byte source) comes in through the traits
//! here, injected at handler construction. Implementations live with the
//! document parser, not in this crate.

use std::io::{Read, Seek};

use crate::error::Result;
use crate::object::{Dictionary, Object, ObjectRef};

/// Random-access view of the raw bytes backing the document.
///
/// Resolution is synchronous and blocking; one resolution is one linear call
/// chain over a single source. This crate only threads the source through to
/// collaborators and never reads it directly.
pub trait ByteSource: Read + Seek {}

impl<T: Read + Seek + ?Sized> ByteSource for T {}

/// Resolves indirect references against the document's object graph.
pub trait ObjectParser {
    /// Parse the object behind `reference` out of `source`.
    ///
    /// In lenient mode implementations may substitute recovered or null
    /// objects for malformed ones; a "wrong shape" result is tolerated by
    /// every caller in this crate except the embedded-program type check.
    fn parse(
        &self,
        reference: ObjectRef,
        source: &mut dyn ByteSource,
        lenient: bool,
    ) -> Result<Object>;
}

/// Applies the declared filter chain to raw stream data.
pub trait FilterProvider {
    /// Decode `data` using the filters named in the stream dictionary.
    ///
    /// Failures propagate verbatim to the caller.
    fn decode(&self, data: &[u8], dict: &Dictionary) -> Result<Vec<u8>>;
}
