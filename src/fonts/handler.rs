//! Font handlers.
//!
//! A handler orchestrates one resolution: dictionary in, immutable
//! [`Font`] out. Each of the five data sources (character range and widths,
//! descriptor, embedded program, ToUnicode mapping, encoding) is resolved
//! independently through the injected collaborators; absence of any of them
//! reduces the font instead of failing it. See the crate docs for the hard
//! failure cases.

use std::sync::Arc;

use crate::document::{ByteSource, FilterProvider, ObjectParser};
use crate::error::Result;
use crate::fonts::descriptor::{DescriptorResolver, FontDescriptor, FontFileKind};
use crate::fonts::encodings;
use crate::fonts::font::Font;
use crate::fonts::font_dict;
use crate::fonts::program::{FontProgramLoader, FontProgramParser};
use crate::fonts::to_unicode::{self, CMapCache};
use crate::object::Dictionary;

/// Turns a font dictionary into a resolved [`Font`].
pub trait FontHandler {
    /// Resolve `dictionary` against the document behind `source`.
    ///
    /// Fails only on a hard error: an embedded font file of the wrong type,
    /// an unusable `/Encoding` entry, or a propagated collaborator failure.
    /// There is no partial result; any hard failure aborts the resolution.
    fn generate(
        &self,
        dictionary: &Dictionary,
        source: &mut dyn ByteSource,
        lenient: bool,
    ) -> Result<Font>;
}

/// Handler for simple TrueType fonts.
///
/// Holds the injected collaborators for one document session; retains no
/// state across [`FontHandler::generate`] calls, so a single handler serves
/// every TrueType font dictionary in the document.
pub struct TrueTypeFontHandler {
    object_parser: Arc<dyn ObjectParser>,
    filter_provider: Arc<dyn FilterProvider>,
    cmap_cache: Arc<dyn CMapCache>,
    descriptor_resolver: Arc<dyn DescriptorResolver>,
    program_loader: FontProgramLoader,
}

impl TrueTypeFontHandler {
    /// Create a handler from the document session's collaborators.
    pub fn new(
        object_parser: Arc<dyn ObjectParser>,
        filter_provider: Arc<dyn FilterProvider>,
        cmap_cache: Arc<dyn CMapCache>,
        descriptor_resolver: Arc<dyn DescriptorResolver>,
        program_parser: Arc<dyn FontProgramParser>,
    ) -> Self {
        let program_loader = FontProgramLoader::new(
            FontFileKind::TrueType,
            Arc::clone(&object_parser),
            Arc::clone(&filter_provider),
            program_parser,
        );
        Self {
            object_parser,
            filter_provider,
            cmap_cache,
            descriptor_resolver,
            program_loader,
        }
    }
}

impl FontHandler for TrueTypeFontHandler {
    fn generate(
        &self,
        dictionary: &Dictionary,
        source: &mut dyn ByteSource,
        lenient: bool,
    ) -> Result<Font> {
        let first_char = font_dict::first_character(dictionary);
        let last_char = font_dict::last_character(dictionary);

        let widths = font_dict::widths(&*self.object_parser, dictionary, source, lenient)?;

        let descriptor =
            self.descriptor_resolver
                .get_font_descriptor(dictionary, source, lenient)?;

        let program = self.program_loader.load(descriptor.as_ref(), source, lenient)?;

        let name = font_dict::display_name(dictionary, descriptor.as_ref());

        let to_unicode = to_unicode::load_to_unicode(
            dictionary,
            &*self.object_parser,
            &*self.filter_provider,
            &*self.cmap_cache,
            source,
            lenient,
        )?;

        let symbolic = descriptor.as_ref().is_some_and(FontDescriptor::is_symbolic);
        let encoding = encodings::resolve_encoding(dictionary.get("Encoding"), symbolic)?;

        if let (Some(first), Some(last), Some(widths)) = (first_char, last_char, widths.as_ref()) {
            let declared = (last - first + 1).max(0) as usize;
            if widths.len() != declared {
                log::warn!(
                    "font {}: {} widths for declared character range {}..={}",
                    name.as_deref().unwrap_or("(unnamed)"),
                    widths.len(),
                    first,
                    last
                );
            }
        }

        Ok(Font::new(
            name, first_char, last_char, widths, descriptor, program, encoding, to_unicode,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::fonts::descriptor::FontDescriptorResolver;
    use crate::fonts::program::FontProgram;
    use crate::fonts::to_unicode::CMap;
    use crate::object::{Object, ObjectRef};
    use std::collections::HashMap;
    use std::io::Cursor;

    struct MapParser {
        objects: HashMap<ObjectRef, Object>,
    }

    impl ObjectParser for MapParser {
        fn parse(
            &self,
            reference: ObjectRef,
            _source: &mut dyn ByteSource,
            _lenient: bool,
        ) -> Result<Object> {
            self.objects
                .get(&reference)
                .cloned()
                .ok_or(Error::ObjectNotFound(reference.id, reference.gen))
        }
    }

    struct PassThroughFilters;

    impl FilterProvider for PassThroughFilters {
        fn decode(&self, data: &[u8], _dict: &Dictionary) -> Result<Vec<u8>> {
            Ok(data.to_vec())
        }
    }

    struct CannedCMaps;

    impl CMapCache for CannedCMaps {
        fn parse(&self, _data: &[u8], _lenient: bool) -> Result<CMap> {
            Ok(CMap::default())
        }
    }

    struct StubProgramParser;

    impl FontProgramParser for StubProgramParser {
        fn parse(&self, data: &[u8]) -> Result<FontProgram> {
            Ok(FontProgram::new(FontFileKind::TrueType, data.to_vec()))
        }
    }

    fn handler(objects: HashMap<ObjectRef, Object>) -> TrueTypeFontHandler {
        let parser: Arc<dyn ObjectParser> = Arc::new(MapParser { objects });
        TrueTypeFontHandler::new(
            Arc::clone(&parser),
            Arc::new(PassThroughFilters),
            Arc::new(CannedCMaps),
            Arc::new(FontDescriptorResolver::new(Arc::clone(&parser))),
            Arc::new(StubProgramParser),
        )
    }

    fn dict(entries: Vec<(&str, Object)>) -> Dictionary {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn test_generate_minimal_dictionary() {
        let d = dict(vec![
            ("FirstChar", Object::Integer(32)),
            ("LastChar", Object::Integer(34)),
            (
                "Widths",
                Object::Array(vec![
                    Object::Integer(278),
                    Object::Integer(278),
                    Object::Integer(355),
                ]),
            ),
        ]);
        let mut source = Cursor::new(Vec::new());

        let font = handler(HashMap::new()).generate(&d, &mut source, false).unwrap();
        assert_eq!(font.first_char(), Some(32));
        assert_eq!(font.last_char(), Some(34));
        assert_eq!(font.widths(), Some(&[278.0, 278.0, 355.0][..]));
        assert!(font.descriptor().is_none());
        assert!(font.encoding().is_none());
        assert!(font.to_unicode().is_none());
        assert!(font.program().is_none());
    }

    #[test]
    fn test_generate_empty_dictionary_succeeds() {
        let mut source = Cursor::new(Vec::new());
        let font = handler(HashMap::new())
            .generate(&Dictionary::new(), &mut source, false)
            .unwrap();
        assert!(font.name().is_none());
        assert!(font.widths().is_none());
    }

    #[test]
    fn test_generate_rejects_bogus_encoding_name() {
        let d = dict(vec![(
            "Encoding",
            Object::Name("BogusEncodingXYZ".to_string()),
        )]);
        let mut source = Cursor::new(Vec::new());

        let err = handler(HashMap::new())
            .generate(&d, &mut source, true)
            .unwrap_err();
        assert!(matches!(err, Error::UnrecognizedEncoding(_)));
    }

    #[test]
    fn test_generate_rejects_type1_font_file() {
        let descriptor = dict(vec![(
            "FontFile",
            Object::Reference(ObjectRef::new(8, 0)),
        )]);
        let d = dict(vec![("FontDescriptor", Object::Dictionary(descriptor))]);
        let mut source = Cursor::new(Vec::new());

        let err = handler(HashMap::new())
            .generate(&d, &mut source, true)
            .unwrap_err();
        assert!(matches!(err, Error::FontFileMismatch { .. }));
    }
}
