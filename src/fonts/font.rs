//! The resolved font record.

use crate::fonts::descriptor::FontDescriptor;
use crate::fonts::encodings::Encoding;
use crate::fonts::program::FontProgram;
use crate::fonts::to_unicode::CMap;

/// A fully resolved font, assembled once per dictionary lookup.
///
/// Every field except the width bookkeeping is independently optional:
/// absence of a data source during resolution reduces the font's capability
/// instead of failing it. The record is immutable after construction and
/// freely shareable for the lifetime of the owning document session.
#[derive(Debug, Clone)]
pub struct Font {
    name: Option<String>,
    first_char: Option<i32>,
    last_char: Option<i32>,
    widths: Option<Vec<f64>>,
    descriptor: Option<FontDescriptor>,
    program: Option<FontProgram>,
    encoding: Option<&'static Encoding>,
    to_unicode: Option<CMap>,
}

impl Font {
    pub(crate) fn new(
        name: Option<String>,
        first_char: Option<i32>,
        last_char: Option<i32>,
        widths: Option<Vec<f64>>,
        descriptor: Option<FontDescriptor>,
        program: Option<FontProgram>,
        encoding: Option<&'static Encoding>,
        to_unicode: Option<CMap>,
    ) -> Self {
        Self {
            name,
            first_char,
            last_char,
            widths,
            descriptor,
            program,
            encoding,
            to_unicode,
        }
    }

    /// Display name, from `/BaseFont` or the descriptor's font name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// First character code covered by the widths array.
    pub fn first_char(&self) -> Option<i32> {
        self.first_char
    }

    /// Last character code covered by the widths array.
    pub fn last_char(&self) -> Option<i32> {
        self.last_char
    }

    /// Glyph widths in 1000ths of an em, indexed by `code - first_char`.
    pub fn widths(&self) -> Option<&[f64]> {
        self.widths.as_deref()
    }

    /// The resolved font descriptor.
    pub fn descriptor(&self) -> Option<&FontDescriptor> {
        self.descriptor.as_ref()
    }

    /// The embedded font program, when one was present and parseable.
    pub fn program(&self) -> Option<&FontProgram> {
        self.program.as_ref()
    }

    /// The selected character-encoding table.
    pub fn encoding(&self) -> Option<&'static Encoding> {
        self.encoding
    }

    /// The ToUnicode text mapping.
    pub fn to_unicode(&self) -> Option<&CMap> {
        self.to_unicode.as_ref()
    }

    /// Width of the glyph for `code`, in 1000ths of an em.
    ///
    /// `None` when the font carries no widths, the code falls outside the
    /// `first_char..=last_char` range, or the widths array is shorter than
    /// the declared range.
    pub fn width_for(&self, code: i32) -> Option<f64> {
        let widths = self.widths.as_ref()?;
        let first = self.first_char?;
        let index = code.checked_sub(first)?;
        if index < 0 {
            return None;
        }
        widths.get(index as usize).copied()
    }
}
