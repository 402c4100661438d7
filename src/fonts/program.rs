//! Embedded font program loading.
//!
//! A descriptor may reference a font-file stream holding the binary font
//! program. Loading is tolerant of absence and of malformed cross-references,
//! with one hard rule: the declared program type must match the type the
//! requesting handler is specialized for, because handing the bytes to the
//! wrong binary parser is never safe, not even in lenient mode.

use std::sync::Arc;

use crate::document::{ByteSource, FilterProvider, ObjectParser};
use crate::error::{Error, Result};
use crate::fonts::descriptor::{FontDescriptor, FontFileKind};
use crate::object::Object;

/// A parsed embedded font program.
///
/// Produced by the injected [`FontProgramParser`]; this crate treats the
/// contents as opaque and stores the program on the assembled font. The
/// payload sits behind an `Arc` so clones of the font stay cheap.
#[derive(Debug, Clone)]
pub struct FontProgram {
    kind: FontFileKind,
    data: Arc<Vec<u8>>,
}

impl FontProgram {
    /// Wrap a parsed program of the given kind.
    pub fn new(kind: FontFileKind, data: Vec<u8>) -> Self {
        Self {
            kind,
            data: Arc::new(data),
        }
    }

    /// Program type this was parsed as.
    pub fn kind(&self) -> FontFileKind {
        self.kind
    }

    /// The program bytes after filter decoding.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Length of the program bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the program carries no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Parses the decoded bytes of an embedded font file.
pub trait FontProgramParser {
    /// Parse a binary font program. Failures propagate verbatim.
    fn parse(&self, data: &[u8]) -> Result<FontProgram>;
}

/// Loads the embedded font program referenced by a descriptor.
///
/// Specialized for a single expected [`FontFileKind`] at construction.
pub struct FontProgramLoader {
    expected: FontFileKind,
    object_parser: Arc<dyn ObjectParser>,
    filter_provider: Arc<dyn FilterProvider>,
    program_parser: Arc<dyn FontProgramParser>,
}

impl FontProgramLoader {
    /// Create a loader for `expected`-typed font files.
    pub fn new(
        expected: FontFileKind,
        object_parser: Arc<dyn ObjectParser>,
        filter_provider: Arc<dyn FilterProvider>,
        program_parser: Arc<dyn FontProgramParser>,
    ) -> Self {
        Self {
            expected,
            object_parser,
            filter_provider,
            program_parser,
        }
    }

    /// Program type this loader accepts.
    pub fn expected_kind(&self) -> FontFileKind {
        self.expected
    }

    /// Resolve the descriptor's font file into a parsed program.
    ///
    /// Absent descriptor or absent font file is `Ok(None)`; substitute
    /// rendering fonts are someone else's concern. A declared type other
    /// than the expected one fails unconditionally. A font-file reference
    /// resolving to something that is not a stream is tolerated as `None`.
    pub fn load(
        &self,
        descriptor: Option<&FontDescriptor>,
        source: &mut dyn ByteSource,
        lenient: bool,
    ) -> Result<Option<FontProgram>> {
        let Some(font_file) = descriptor.and_then(FontDescriptor::font_file) else {
            return Ok(None);
        };

        if font_file.kind() != self.expected {
            return Err(Error::FontFileMismatch {
                expected: self.expected,
                found: font_file.kind(),
            });
        }

        let object = self.object_parser.parse(font_file.key(), source, lenient)?;
        match object {
            Object::Stream { dict, data } => {
                let decoded = self.filter_provider.decode(&data, &dict)?;
                let program = self.program_parser.parse(&decoded)?;
                log::debug!(
                    "loaded embedded {} font program ({} bytes)",
                    program.kind(),
                    program.len()
                );
                Ok(Some(program))
            }
            other => {
                log::debug!(
                    "font file {} resolved to {} rather than a stream; no embedded program",
                    font_file.key(),
                    other.type_name()
                );
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Dictionary, ObjectRef};
    use std::io::Cursor;

    struct StubParser {
        object: Object,
    }

    impl ObjectParser for StubParser {
        fn parse(
            &self,
            _reference: ObjectRef,
            _source: &mut dyn ByteSource,
            _lenient: bool,
        ) -> Result<Object> {
            Ok(self.object.clone())
        }
    }

    struct PassThroughFilters;

    impl FilterProvider for PassThroughFilters {
        fn decode(&self, data: &[u8], _dict: &Dictionary) -> Result<Vec<u8>> {
            Ok(data.to_vec())
        }
    }

    struct StubProgramParser;

    impl FontProgramParser for StubProgramParser {
        fn parse(&self, data: &[u8]) -> Result<FontProgram> {
            Ok(FontProgram::new(FontFileKind::TrueType, data.to_vec()))
        }
    }

    fn loader(resolved: Object) -> FontProgramLoader {
        FontProgramLoader::new(
            FontFileKind::TrueType,
            Arc::new(StubParser { object: resolved }),
            Arc::new(PassThroughFilters),
            Arc::new(StubProgramParser),
        )
    }

    fn descriptor_with_file(key: &str) -> FontDescriptor {
        let dict: Dictionary = [(
            key.to_string(),
            Object::Reference(ObjectRef::new(9, 0)),
        )]
        .into_iter()
        .collect();
        FontDescriptor::from_dict(&dict)
    }

    #[test]
    fn test_no_descriptor_is_none() {
        let loader = loader(Object::Null);
        let mut source = Cursor::new(Vec::new());
        assert!(loader.load(None, &mut source, false).unwrap().is_none());
    }

    #[test]
    fn test_descriptor_without_font_file_is_none() {
        let loader = loader(Object::Null);
        let descriptor = FontDescriptor::from_dict(&Dictionary::new());
        let mut source = Cursor::new(Vec::new());
        assert!(loader
            .load(Some(&descriptor), &mut source, false)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_kind_mismatch_fails_regardless_of_lenient() {
        let loader = loader(Object::Null);
        let descriptor = descriptor_with_file("FontFile");
        let mut source = Cursor::new(Vec::new());

        for lenient in [false, true] {
            let result = loader.load(Some(&descriptor), &mut source, lenient);
            match result {
                Err(Error::FontFileMismatch { expected, found }) => {
                    assert_eq!(expected, FontFileKind::TrueType);
                    assert_eq!(found, FontFileKind::Type1);
                }
                other => panic!("expected FontFileMismatch, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_non_stream_resolution_is_none() {
        let loader = loader(Object::Integer(12));
        let descriptor = descriptor_with_file("FontFile2");
        let mut source = Cursor::new(Vec::new());

        assert!(loader
            .load(Some(&descriptor), &mut source, true)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_stream_is_decoded_and_parsed() {
        let loader = loader(Object::Stream {
            dict: Dictionary::new(),
            data: bytes::Bytes::from_static(b"\x00\x01\x00\x00"),
        });
        let descriptor = descriptor_with_file("FontFile2");
        let mut source = Cursor::new(Vec::new());

        let program = loader
            .load(Some(&descriptor), &mut source, false)
            .unwrap()
            .unwrap();
        assert_eq!(program.kind(), FontFileKind::TrueType);
        assert_eq!(program.data(), b"\x00\x01\x00\x00");
    }
}
