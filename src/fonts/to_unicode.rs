//! ToUnicode text mapping.
//!
//! The `/ToUnicode` entry references a CMap stream mapping character codes to
//! Unicode text, used for text extraction independent of rendering. The CMap
//! itself is parsed by the injected [`CMapCache`]; this module owns the
//! resolved mapping type and the loading logic around it.

use std::collections::HashMap;

use crate::document::{ByteSource, FilterProvider, ObjectParser};
use crate::error::Result;
use crate::object::{Dictionary, Object};

/// A character map from character codes to Unicode strings.
///
/// Keys are character codes (up to four bytes, hence `u32`); values are the
/// Unicode text a code expands to, which may be more than one `char` for
/// ligatures.
#[derive(Debug, Clone, Default)]
pub struct CMap {
    map: HashMap<u32, String>,
}

impl CMap {
    /// Build a CMap from parsed code-to-text mappings.
    pub fn from_mappings(map: HashMap<u32, String>) -> Self {
        Self { map }
    }

    /// Unicode text for `code`, if mapped.
    pub fn get(&self, code: u32) -> Option<&str> {
        self.map.get(&code).map(String::as_str)
    }

    /// Number of mapped codes.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the map holds no mappings.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over `(code, text)` mappings in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.map.iter().map(|(code, text)| (*code, text.as_str()))
    }
}

impl FromIterator<(u32, String)> for CMap {
    fn from_iter<T: IntoIterator<Item = (u32, String)>>(iter: T) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

/// Parses CMap streams, typically caching results across fonts.
pub trait CMapCache {
    /// Parse decoded CMap bytes. Failures propagate verbatim.
    fn parse(&self, data: &[u8], lenient: bool) -> Result<CMap>;
}

/// Resolve the dictionary's optional `/ToUnicode` stream into a [`CMap`].
///
/// Absence is not an error: a missing entry, an entry that is not an indirect
/// reference, or a reference resolving to a non-stream all yield `Ok(None)`.
/// A decode or parse failure on a present stream, however, aborts the whole
/// resolution. That is stricter than the entry's optionality would suggest,
/// but changing it needs a decision about lenient-mode semantics first.
pub fn load_to_unicode(
    dictionary: &Dictionary,
    object_parser: &dyn ObjectParser,
    filter_provider: &dyn FilterProvider,
    cmap_cache: &dyn CMapCache,
    source: &mut dyn ByteSource,
    lenient: bool,
) -> Result<Option<CMap>> {
    let Some(reference) = dictionary.get("ToUnicode").and_then(Object::as_reference) else {
        return Ok(None);
    };

    let object = object_parser.parse(reference, source, lenient)?;
    match object {
        Object::Stream { dict, data } => {
            let decoded = filter_provider.decode(&data, &dict)?;
            let cmap = cmap_cache.parse(&decoded, lenient)?;
            log::debug!("parsed ToUnicode CMap with {} mappings", cmap.len());
            Ok(Some(cmap))
        }
        other => {
            log::debug!(
                "/ToUnicode {} resolved to {} rather than a stream; ignoring",
                reference,
                other.type_name()
            );
            Ok(None)
        }
    }
}
