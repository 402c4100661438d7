//! Font descriptor resolution.
//!
//! The `/FontDescriptor` entry carries the font's characteristic flags and,
//! when the font is embedded, a reference to the font-file stream. The
//! descriptor is optional: a font without one simply loses the capabilities
//! derived from it (symbolic-encoding detection, embedded program, name
//! fallback).

use std::fmt;
use std::sync::Arc;

use crate::document::{ByteSource, ObjectParser};
use crate::error::{Error, Result};
use crate::object::{Dictionary, Object, ObjectRef};

bitflags::bitflags! {
    /// Font characteristics from the descriptor's `/Flags` entry.
    ///
    /// Bit numbering follows the PDF font descriptor flags table
    /// (ISO 32000-1:2008, Table 123); bit 1 is the lowest bit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FontFlags: u32 {
        /// All glyphs have the same width.
        const FIXED_PITCH = 1 << 0;
        /// Glyphs have serifs.
        const SERIF = 1 << 1;
        /// Font contains glyphs outside the Standard Latin character set.
        const SYMBOLIC = 1 << 2;
        /// Glyphs resemble cursive handwriting.
        const SCRIPT = 1 << 3;
        /// Font uses the Standard Latin character set.
        const NONSYMBOLIC = 1 << 5;
        /// Glyphs have dominant vertical strokes that are slanted.
        const ITALIC = 1 << 6;
        /// Font contains no lowercase letters.
        const ALL_CAP = 1 << 16;
        /// Lowercase glyphs are small capitals.
        const SMALL_CAP = 1 << 17;
        /// Glyphs remain bold at small sizes.
        const FORCE_BOLD = 1 << 18;
    }
}

/// Program type declared for an embedded font file.
///
/// The descriptor key names the type: `/FontFile` holds a Type 1 program,
/// `/FontFile2` a TrueType program, and `/FontFile3` a program whose concrete
/// type is declared by the stream's own `/Subtype` (Type1C, OpenType, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFileKind {
    /// `/FontFile`: Type 1 font program
    Type1,
    /// `/FontFile2`: TrueType font program
    TrueType,
    /// `/FontFile3`: type declared by the stream's `/Subtype`
    FromSubtype,
}

impl fmt::Display for FontFileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontFileKind::Type1 => write!(f, "Type1"),
            FontFileKind::TrueType => write!(f, "TrueType"),
            FontFileKind::FromSubtype => write!(f, "FontFile3 (subtype-declared)"),
        }
    }
}

/// Reference to an embedded font-file stream plus its declared program type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontFile {
    kind: FontFileKind,
    key: ObjectRef,
}

impl FontFile {
    /// Create a font-file reference.
    pub fn new(kind: FontFileKind, key: ObjectRef) -> Self {
        Self { kind, key }
    }

    /// Declared program type.
    pub fn kind(&self) -> FontFileKind {
        self.kind
    }

    /// Indirect reference to the font-file stream.
    pub fn key(&self) -> ObjectRef {
        self.key
    }
}

/// A resolved font descriptor. Immutable; owned by the [`crate::fonts::Font`].
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    font_name: Option<String>,
    flags: FontFlags,
    font_file: Option<FontFile>,
    font_weight: Option<i32>,
    stem_v: Option<f64>,
}

impl FontDescriptor {
    /// Interpret a descriptor dictionary.
    ///
    /// Every entry is optional; unparseable entries degrade to their absent
    /// form rather than failing.
    pub fn from_dict(dict: &Dictionary) -> Self {
        let font_name = dict
            .get("FontName")
            .and_then(Object::as_name)
            .map(str::to_string);

        let flags = dict
            .get("Flags")
            .and_then(Object::as_integer)
            .map(|raw| FontFlags::from_bits_truncate(raw as u32))
            .unwrap_or(FontFlags::empty());

        let font_weight = dict
            .get("FontWeight")
            .and_then(Object::as_integer)
            .map(|w| w as i32);

        let stem_v = dict.get("StemV").and_then(Object::as_number);

        // At most one of the three font-file keys is meaningful; take the
        // first that holds an indirect reference.
        let font_file = [
            ("FontFile", FontFileKind::Type1),
            ("FontFile2", FontFileKind::TrueType),
            ("FontFile3", FontFileKind::FromSubtype),
        ]
        .into_iter()
        .find_map(|(key, kind)| {
            let reference = dict.get(key)?.as_reference()?;
            Some(FontFile::new(kind, reference))
        });

        Self {
            font_name,
            flags,
            font_file,
            font_weight,
            stem_v,
        }
    }

    /// PostScript font name, when the descriptor declares one.
    pub fn font_name(&self) -> Option<&str> {
        self.font_name.as_deref()
    }

    /// Characteristic flags.
    pub fn flags(&self) -> FontFlags {
        self.flags
    }

    /// Whether the font's codes fall outside standard printable-text encoding.
    pub fn is_symbolic(&self) -> bool {
        self.flags.contains(FontFlags::SYMBOLIC)
    }

    /// Embedded font-file reference, when the font is embedded.
    pub fn font_file(&self) -> Option<&FontFile> {
        self.font_file.as_ref()
    }

    /// `/FontWeight` (400 = normal, 700 = bold).
    pub fn font_weight(&self) -> Option<i32> {
        self.font_weight
    }

    /// `/StemV` vertical stem thickness.
    pub fn stem_v(&self) -> Option<f64> {
        self.stem_v
    }
}

/// Resolves a font dictionary's `/FontDescriptor` entry.
pub trait DescriptorResolver {
    /// Resolve the descriptor, returning `None` when the entry is absent.
    fn get_font_descriptor(
        &self,
        dictionary: &Dictionary,
        source: &mut dyn ByteSource,
        lenient: bool,
    ) -> Result<Option<FontDescriptor>>;
}

/// Default descriptor resolver: follows an indirect or inline descriptor
/// dictionary through the injected object parser.
pub struct FontDescriptorResolver {
    object_parser: Arc<dyn ObjectParser>,
}

impl FontDescriptorResolver {
    /// Create a resolver backed by the given object parser.
    pub fn new(object_parser: Arc<dyn ObjectParser>) -> Self {
        Self { object_parser }
    }
}

impl DescriptorResolver for FontDescriptorResolver {
    fn get_font_descriptor(
        &self,
        dictionary: &Dictionary,
        source: &mut dyn ByteSource,
        lenient: bool,
    ) -> Result<Option<FontDescriptor>> {
        let Some(entry) = dictionary.get("FontDescriptor") else {
            return Ok(None);
        };

        let value = match entry {
            Object::Reference(reference) => self.object_parser.parse(*reference, source, lenient)?,
            other => other.clone(),
        };

        match value.as_dict() {
            Some(dict) => Ok(Some(FontDescriptor::from_dict(dict))),
            None if lenient => {
                log::warn!(
                    "/FontDescriptor resolved to {} rather than a dictionary; continuing without one",
                    value.type_name()
                );
                Ok(None)
            }
            None => Err(Error::InvalidObjectType {
                expected: "Dictionary".to_string(),
                found: value.type_name().to_string(),
            }),
        }
    }
}
