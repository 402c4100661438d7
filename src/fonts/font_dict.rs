//! Font dictionary access helpers.
//!
//! Small readers over the font dictionary itself: character range, widths
//! array, display name. All of them treat a missing or wrong-shaped entry as
//! absence; the only failures that escape are collaborator errors while
//! resolving an indirect widths array.

use crate::document::{ByteSource, ObjectParser};
use crate::error::Result;
use crate::fonts::descriptor::FontDescriptor;
use crate::object::{Dictionary, Object};

/// `/FirstChar`, when present and an integer.
pub fn first_character(dictionary: &Dictionary) -> Option<i32> {
    dictionary
        .get("FirstChar")
        .and_then(Object::as_integer)
        .map(|i| i as i32)
}

/// `/LastChar`, when present and an integer.
pub fn last_character(dictionary: &Dictionary) -> Option<i32> {
    dictionary
        .get("LastChar")
        .and_then(Object::as_integer)
        .map(|i| i as i32)
}

/// The `/Widths` array, resolved through the object parser when indirect.
///
/// Width entries may be integers or reals; non-numeric elements are skipped.
/// A `/Widths` entry of the wrong shape degrades to `None`.
pub fn widths(
    object_parser: &dyn ObjectParser,
    dictionary: &Dictionary,
    source: &mut dyn ByteSource,
    lenient: bool,
) -> Result<Option<Vec<f64>>> {
    let Some(entry) = dictionary.get("Widths") else {
        return Ok(None);
    };

    let value = match entry {
        Object::Reference(reference) => object_parser.parse(*reference, source, lenient)?,
        other => other.clone(),
    };

    let Some(array) = value.as_array() else {
        log::debug!(
            "/Widths resolved to {} rather than an array; ignoring",
            value.type_name()
        );
        return Ok(None);
    };

    let widths: Vec<f64> = array.iter().filter_map(Object::as_number).collect();
    log::debug!("parsed {} widths", widths.len());
    Ok(Some(widths))
}

/// Display name: `/BaseFont`, falling back to the descriptor's font name.
pub fn display_name(dictionary: &Dictionary, descriptor: Option<&FontDescriptor>) -> Option<String> {
    dictionary
        .get("BaseFont")
        .and_then(Object::as_name)
        .map(str::to_string)
        .or_else(|| {
            descriptor
                .and_then(FontDescriptor::font_name)
                .map(str::to_string)
        })
}
