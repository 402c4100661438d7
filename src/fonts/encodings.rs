//! Character encodings.
//!
//! An [`Encoding`] is a read-only table from single-byte character codes to
//! glyph names. The predefined tables (Standard, WinAnsi, MacRoman) are
//! process-wide statics; a resolved font holds at most one of them, selected
//! by [`resolve_encoding`] from the dictionary's `/Encoding` entry and the
//! descriptor's symbolic flag.
//!
//! Code values in the tables below are octal, as the PDF specification's
//! encoding annex lists them (ISO 32000-1:2008, Annex D).

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::object::{Dictionary, Object};

/// A character-code to glyph-name table.
///
/// Selected once per font and shared read-only afterwards; predefined tables
/// are `&'static` and never mutated.
#[derive(Debug)]
pub struct Encoding {
    name: &'static str,
    code_to_name: HashMap<u8, &'static str>,
}

impl Encoding {
    fn from_pairs(name: &'static str, pairs: &[(u8, &'static str)]) -> Self {
        Self {
            name,
            code_to_name: pairs.iter().copied().collect(),
        }
    }

    /// Name of this encoding table, e.g. `"WinAnsiEncoding"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Glyph name assigned to `code`, if any.
    pub fn glyph_name(&self, code: u8) -> Option<&'static str> {
        self.code_to_name.get(&code).copied()
    }

    /// Number of codes with an assigned glyph name.
    pub fn len(&self) -> usize {
        self.code_to_name.len()
    }

    /// Whether the table assigns no glyph names at all.
    pub fn is_empty(&self) -> bool {
        self.code_to_name.is_empty()
    }
}

/// Look up a predefined encoding table by its `/Encoding` name.
pub fn named_encoding(name: &str) -> Option<&'static Encoding> {
    match name {
        "StandardEncoding" => Some(standard_encoding()),
        "WinAnsiEncoding" => Some(win_ansi_encoding()),
        "MacRomanEncoding" => Some(mac_roman_encoding()),
        _ => None,
    }
}

/// Adobe StandardEncoding; also the tentative default for symbolic fonts.
pub fn standard_encoding() -> &'static Encoding {
    &STANDARD_ENCODING
}

/// WinAnsiEncoding (Windows code page 1252 glyph set).
pub fn win_ansi_encoding() -> &'static Encoding {
    &WIN_ANSI_ENCODING
}

/// MacRomanEncoding (classic Mac OS Roman glyph set).
pub fn mac_roman_encoding() -> &'static Encoding {
    &MAC_ROMAN_ENCODING
}

/// Shape of a font dictionary's `/Encoding` entry, decided once at the
/// boundary so resolution can match on it exhaustively.
enum EncodingEntry<'a> {
    /// A predefined encoding name, e.g. `/WinAnsiEncoding`
    Name(&'a str),
    /// An encoding dictionary (BaseEncoding + Differences)
    Dictionary(&'a Dictionary),
    /// Anything else; carries the offending type name
    Other(&'static str),
}

impl<'a> From<&'a Object> for EncodingEntry<'a> {
    fn from(value: &'a Object) -> Self {
        match value {
            Object::Name(name) => EncodingEntry::Name(name),
            Object::Dictionary(dict) => EncodingEntry::Dictionary(dict),
            other => EncodingEntry::Other(other.type_name()),
        }
    }
}

/// Decide the encoding table for a font.
///
/// Resolution order:
///
/// 1. No `/Encoding` entry: `None`; the caller falls back to the font
///    program's built-in encoding, which is not this crate's concern. No
///    default is invented, symbolic or not.
/// 2. Entry present on a symbolic font: the standard table is the tentative
///    default. Every shape below either replaces it (a recognized name) or
///    fails outright, so the default itself never reaches the caller.
/// 3. A name: predefined-table lookup. An unrecognized name is a hard
///    failure naming the offending value.
/// 4. An encoding dictionary (`/Differences`): unsupported, hard failure.
/// 5. Any other shape: unsupported, hard failure.
pub fn resolve_encoding(
    entry: Option<&Object>,
    symbolic: bool,
) -> Result<Option<&'static Encoding>> {
    let Some(value) = entry else {
        return Ok(None);
    };

    if symbolic {
        log::debug!("symbolic font carries an /Encoding entry; standard encoding is the tentative default");
    }

    match EncodingEntry::from(value) {
        EncodingEntry::Name(name) => match named_encoding(name) {
            Some(encoding) => {
                log::debug!("resolved /Encoding name {} ({} codes)", name, encoding.len());
                Ok(Some(encoding))
            }
            None => Err(Error::UnrecognizedEncoding(name.to_string())),
        },
        EncodingEntry::Dictionary(_) => Err(Error::UnsupportedEncoding(
            "encoding dictionaries (Differences) are not supported yet".to_string(),
        )),
        EncodingEntry::Other(type_name) => Err(Error::UnsupportedEncoding(format!(
            "{} encoding entry",
            type_name
        ))),
    }
}

lazy_static::lazy_static! {
    static ref STANDARD_ENCODING: Encoding =
        Encoding::from_pairs("StandardEncoding", STANDARD_PAIRS);
    static ref WIN_ANSI_ENCODING: Encoding =
        Encoding::from_pairs("WinAnsiEncoding", WIN_ANSI_PAIRS);
    static ref MAC_ROMAN_ENCODING: Encoding =
        Encoding::from_pairs("MacRomanEncoding", MAC_ROMAN_PAIRS);
}

const STANDARD_PAIRS: &[(u8, &str)] = &[
    (0o40, "space"), (0o41, "exclam"), (0o42, "quotedbl"), (0o43, "numbersign"),
    (0o44, "dollar"), (0o45, "percent"), (0o46, "ampersand"), (0o47, "quoteright"),
    (0o50, "parenleft"), (0o51, "parenright"), (0o52, "asterisk"), (0o53, "plus"),
    (0o54, "comma"), (0o55, "hyphen"), (0o56, "period"), (0o57, "slash"),
    (0o60, "zero"), (0o61, "one"), (0o62, "two"), (0o63, "three"),
    (0o64, "four"), (0o65, "five"), (0o66, "six"), (0o67, "seven"),
    (0o70, "eight"), (0o71, "nine"), (0o72, "colon"), (0o73, "semicolon"),
    (0o74, "less"), (0o75, "equal"), (0o76, "greater"), (0o77, "question"),
    (0o100, "at"), (0o101, "A"), (0o102, "B"), (0o103, "C"),
    (0o104, "D"), (0o105, "E"), (0o106, "F"), (0o107, "G"),
    (0o110, "H"), (0o111, "I"), (0o112, "J"), (0o113, "K"),
    (0o114, "L"), (0o115, "M"), (0o116, "N"), (0o117, "O"),
    (0o120, "P"), (0o121, "Q"), (0o122, "R"), (0o123, "S"),
    (0o124, "T"), (0o125, "U"), (0o126, "V"), (0o127, "W"),
    (0o130, "X"), (0o131, "Y"), (0o132, "Z"), (0o133, "bracketleft"),
    (0o134, "backslash"), (0o135, "bracketright"), (0o136, "asciicircum"), (0o137, "underscore"),
    (0o140, "quoteleft"), (0o141, "a"), (0o142, "b"), (0o143, "c"),
    (0o144, "d"), (0o145, "e"), (0o146, "f"), (0o147, "g"),
    (0o150, "h"), (0o151, "i"), (0o152, "j"), (0o153, "k"),
    (0o154, "l"), (0o155, "m"), (0o156, "n"), (0o157, "o"),
    (0o160, "p"), (0o161, "q"), (0o162, "r"), (0o163, "s"),
    (0o164, "t"), (0o165, "u"), (0o166, "v"), (0o167, "w"),
    (0o170, "x"), (0o171, "y"), (0o172, "z"), (0o173, "braceleft"),
    (0o174, "bar"), (0o175, "braceright"), (0o176, "asciitilde"),
    (0o241, "exclamdown"), (0o242, "cent"), (0o243, "sterling"), (0o244, "fraction"),
    (0o245, "yen"), (0o246, "florin"), (0o247, "section"), (0o250, "currency"),
    (0o251, "quotesingle"), (0o252, "quotedblleft"), (0o253, "guillemotleft"), (0o254, "guilsinglleft"),
    (0o255, "guilsinglright"), (0o256, "fi"), (0o257, "fl"), (0o261, "endash"),
    (0o262, "dagger"), (0o263, "daggerdbl"), (0o264, "periodcentered"), (0o266, "paragraph"),
    (0o267, "bullet"), (0o270, "quotesinglbase"), (0o271, "quotedblbase"), (0o272, "quotedblright"),
    (0o273, "guillemotright"), (0o274, "ellipsis"), (0o275, "perthousand"), (0o277, "questiondown"),
    (0o301, "grave"), (0o302, "acute"), (0o303, "circumflex"), (0o304, "tilde"),
    (0o305, "macron"), (0o306, "breve"), (0o307, "dotaccent"), (0o310, "dieresis"),
    (0o312, "ring"), (0o313, "cedilla"), (0o315, "hungarumlaut"), (0o316, "ogonek"),
    (0o317, "caron"), (0o320, "emdash"), (0o341, "AE"), (0o343, "ordfeminine"),
    (0o350, "Lslash"), (0o351, "Oslash"), (0o352, "OE"), (0o353, "ordmasculine"),
    (0o361, "ae"), (0o365, "dotlessi"), (0o370, "lslash"), (0o371, "oslash"),
    (0o372, "oe"), (0o373, "germandbls"),
];

const WIN_ANSI_PAIRS: &[(u8, &str)] = &[
    (0o40, "space"), (0o41, "exclam"), (0o42, "quotedbl"), (0o43, "numbersign"),
    (0o44, "dollar"), (0o45, "percent"), (0o46, "ampersand"), (0o47, "quotesingle"),
    (0o50, "parenleft"), (0o51, "parenright"), (0o52, "asterisk"), (0o53, "plus"),
    (0o54, "comma"), (0o55, "hyphen"), (0o56, "period"), (0o57, "slash"),
    (0o60, "zero"), (0o61, "one"), (0o62, "two"), (0o63, "three"),
    (0o64, "four"), (0o65, "five"), (0o66, "six"), (0o67, "seven"),
    (0o70, "eight"), (0o71, "nine"), (0o72, "colon"), (0o73, "semicolon"),
    (0o74, "less"), (0o75, "equal"), (0o76, "greater"), (0o77, "question"),
    (0o100, "at"), (0o101, "A"), (0o102, "B"), (0o103, "C"),
    (0o104, "D"), (0o105, "E"), (0o106, "F"), (0o107, "G"),
    (0o110, "H"), (0o111, "I"), (0o112, "J"), (0o113, "K"),
    (0o114, "L"), (0o115, "M"), (0o116, "N"), (0o117, "O"),
    (0o120, "P"), (0o121, "Q"), (0o122, "R"), (0o123, "S"),
    (0o124, "T"), (0o125, "U"), (0o126, "V"), (0o127, "W"),
    (0o130, "X"), (0o131, "Y"), (0o132, "Z"), (0o133, "bracketleft"),
    (0o134, "backslash"), (0o135, "bracketright"), (0o136, "asciicircum"), (0o137, "underscore"),
    (0o140, "grave"), (0o141, "a"), (0o142, "b"), (0o143, "c"),
    (0o144, "d"), (0o145, "e"), (0o146, "f"), (0o147, "g"),
    (0o150, "h"), (0o151, "i"), (0o152, "j"), (0o153, "k"),
    (0o154, "l"), (0o155, "m"), (0o156, "n"), (0o157, "o"),
    (0o160, "p"), (0o161, "q"), (0o162, "r"), (0o163, "s"),
    (0o164, "t"), (0o165, "u"), (0o166, "v"), (0o167, "w"),
    (0o170, "x"), (0o171, "y"), (0o172, "z"), (0o173, "braceleft"),
    (0o174, "bar"), (0o175, "braceright"), (0o176, "asciitilde"),
    (0o200, "Euro"), (0o202, "quotesinglbase"), (0o203, "florin"), (0o204, "quotedblbase"),
    (0o205, "ellipsis"), (0o206, "dagger"), (0o207, "daggerdbl"), (0o210, "circumflex"),
    (0o211, "perthousand"), (0o212, "Scaron"), (0o213, "guilsinglleft"), (0o214, "OE"),
    (0o216, "Zcaron"), (0o221, "quoteleft"), (0o222, "quoteright"), (0o223, "quotedblleft"),
    (0o224, "quotedblright"), (0o225, "bullet"), (0o226, "endash"), (0o227, "emdash"),
    (0o230, "tilde"), (0o231, "trademark"), (0o232, "scaron"), (0o233, "guilsinglright"),
    (0o234, "oe"), (0o236, "zcaron"), (0o237, "Ydieresis"), (0o240, "space"),
    (0o241, "exclamdown"), (0o242, "cent"), (0o243, "sterling"), (0o244, "currency"),
    (0o245, "yen"), (0o246, "brokenbar"), (0o247, "section"), (0o250, "dieresis"),
    (0o251, "copyright"), (0o252, "ordfeminine"), (0o253, "guillemotleft"), (0o254, "logicalnot"),
    (0o255, "hyphen"), (0o256, "registered"), (0o257, "macron"), (0o260, "degree"),
    (0o261, "plusminus"), (0o262, "twosuperior"), (0o263, "threesuperior"), (0o264, "acute"),
    (0o265, "mu"), (0o266, "paragraph"), (0o267, "periodcentered"), (0o270, "cedilla"),
    (0o271, "onesuperior"), (0o272, "ordmasculine"), (0o273, "guillemotright"), (0o274, "onequarter"),
    (0o275, "onehalf"), (0o276, "threequarters"), (0o277, "questiondown"), (0o300, "Agrave"),
    (0o301, "Aacute"), (0o302, "Acircumflex"), (0o303, "Atilde"), (0o304, "Adieresis"),
    (0o305, "Aring"), (0o306, "AE"), (0o307, "Ccedilla"), (0o310, "Egrave"),
    (0o311, "Eacute"), (0o312, "Ecircumflex"), (0o313, "Edieresis"), (0o314, "Igrave"),
    (0o315, "Iacute"), (0o316, "Icircumflex"), (0o317, "Idieresis"), (0o320, "Eth"),
    (0o321, "Ntilde"), (0o322, "Ograve"), (0o323, "Oacute"), (0o324, "Ocircumflex"),
    (0o325, "Otilde"), (0o326, "Odieresis"), (0o327, "multiply"), (0o330, "Oslash"),
    (0o331, "Ugrave"), (0o332, "Uacute"), (0o333, "Ucircumflex"), (0o334, "Udieresis"),
    (0o335, "Yacute"), (0o336, "Thorn"), (0o337, "germandbls"), (0o340, "agrave"),
    (0o341, "aacute"), (0o342, "acircumflex"), (0o343, "atilde"), (0o344, "adieresis"),
    (0o345, "aring"), (0o346, "ae"), (0o347, "ccedilla"), (0o350, "egrave"),
    (0o351, "eacute"), (0o352, "ecircumflex"), (0o353, "edieresis"), (0o354, "igrave"),
    (0o355, "iacute"), (0o356, "icircumflex"), (0o357, "idieresis"), (0o360, "eth"),
    (0o361, "ntilde"), (0o362, "ograve"), (0o363, "oacute"), (0o364, "ocircumflex"),
    (0o365, "otilde"), (0o366, "odieresis"), (0o367, "divide"), (0o370, "oslash"),
    (0o371, "ugrave"), (0o372, "uacute"), (0o373, "ucircumflex"), (0o374, "udieresis"),
    (0o375, "yacute"), (0o376, "thorn"), (0o377, "ydieresis"),
];

const MAC_ROMAN_PAIRS: &[(u8, &str)] = &[
    (0o40, "space"), (0o41, "exclam"), (0o42, "quotedbl"), (0o43, "numbersign"),
    (0o44, "dollar"), (0o45, "percent"), (0o46, "ampersand"), (0o47, "quotesingle"),
    (0o50, "parenleft"), (0o51, "parenright"), (0o52, "asterisk"), (0o53, "plus"),
    (0o54, "comma"), (0o55, "hyphen"), (0o56, "period"), (0o57, "slash"),
    (0o60, "zero"), (0o61, "one"), (0o62, "two"), (0o63, "three"),
    (0o64, "four"), (0o65, "five"), (0o66, "six"), (0o67, "seven"),
    (0o70, "eight"), (0o71, "nine"), (0o72, "colon"), (0o73, "semicolon"),
    (0o74, "less"), (0o75, "equal"), (0o76, "greater"), (0o77, "question"),
    (0o100, "at"), (0o101, "A"), (0o102, "B"), (0o103, "C"),
    (0o104, "D"), (0o105, "E"), (0o106, "F"), (0o107, "G"),
    (0o110, "H"), (0o111, "I"), (0o112, "J"), (0o113, "K"),
    (0o114, "L"), (0o115, "M"), (0o116, "N"), (0o117, "O"),
    (0o120, "P"), (0o121, "Q"), (0o122, "R"), (0o123, "S"),
    (0o124, "T"), (0o125, "U"), (0o126, "V"), (0o127, "W"),
    (0o130, "X"), (0o131, "Y"), (0o132, "Z"), (0o133, "bracketleft"),
    (0o134, "backslash"), (0o135, "bracketright"), (0o136, "asciicircum"), (0o137, "underscore"),
    (0o140, "grave"), (0o141, "a"), (0o142, "b"), (0o143, "c"),
    (0o144, "d"), (0o145, "e"), (0o146, "f"), (0o147, "g"),
    (0o150, "h"), (0o151, "i"), (0o152, "j"), (0o153, "k"),
    (0o154, "l"), (0o155, "m"), (0o156, "n"), (0o157, "o"),
    (0o160, "p"), (0o161, "q"), (0o162, "r"), (0o163, "s"),
    (0o164, "t"), (0o165, "u"), (0o166, "v"), (0o167, "w"),
    (0o170, "x"), (0o171, "y"), (0o172, "z"), (0o173, "braceleft"),
    (0o174, "bar"), (0o175, "braceright"), (0o176, "asciitilde"),
    (0o200, "Adieresis"), (0o201, "Aring"), (0o202, "Ccedilla"), (0o203, "Eacute"),
    (0o204, "Ntilde"), (0o205, "Odieresis"), (0o206, "Udieresis"), (0o207, "aacute"),
    (0o210, "agrave"), (0o211, "acircumflex"), (0o212, "adieresis"), (0o213, "atilde"),
    (0o214, "aring"), (0o215, "ccedilla"), (0o216, "eacute"), (0o217, "egrave"),
    (0o220, "ecircumflex"), (0o221, "edieresis"), (0o222, "iacute"), (0o223, "igrave"),
    (0o224, "icircumflex"), (0o225, "idieresis"), (0o226, "ntilde"), (0o227, "oacute"),
    (0o230, "ograve"), (0o231, "ocircumflex"), (0o232, "odieresis"), (0o233, "otilde"),
    (0o234, "uacute"), (0o235, "ugrave"), (0o236, "ucircumflex"), (0o237, "udieresis"),
    (0o240, "dagger"), (0o241, "degree"), (0o242, "cent"), (0o243, "sterling"),
    (0o244, "section"), (0o245, "bullet"), (0o246, "paragraph"), (0o247, "germandbls"),
    (0o250, "registered"), (0o251, "copyright"), (0o252, "trademark"), (0o253, "acute"),
    (0o254, "dieresis"), (0o255, "notequal"), (0o256, "AE"), (0o257, "Oslash"),
    (0o260, "infinity"), (0o261, "plusminus"), (0o262, "lessequal"), (0o263, "greaterequal"),
    (0o264, "yen"), (0o265, "mu"), (0o266, "partialdiff"), (0o267, "summation"),
    (0o270, "product"), (0o271, "pi"), (0o272, "integral"), (0o273, "ordfeminine"),
    (0o274, "ordmasculine"), (0o275, "Omega"), (0o276, "ae"), (0o277, "oslash"),
    (0o300, "questiondown"), (0o301, "exclamdown"), (0o302, "logicalnot"), (0o303, "radical"),
    (0o304, "florin"), (0o305, "approxequal"), (0o306, "Delta"), (0o307, "guillemotleft"),
    (0o310, "guillemotright"), (0o311, "ellipsis"), (0o312, "space"), (0o313, "Agrave"),
    (0o314, "Atilde"), (0o315, "Otilde"), (0o316, "OE"), (0o317, "oe"),
    (0o320, "endash"), (0o321, "emdash"), (0o322, "quotedblleft"), (0o323, "quotedblright"),
    (0o324, "quoteleft"), (0o325, "quoteright"), (0o326, "divide"), (0o327, "lozenge"),
    (0o330, "ydieresis"), (0o331, "Ydieresis"), (0o332, "fraction"), (0o333, "currency"),
    (0o334, "guilsinglleft"), (0o335, "guilsinglright"), (0o336, "fi"), (0o337, "fl"),
    (0o340, "daggerdbl"), (0o341, "periodcentered"), (0o342, "quotesinglbase"), (0o343, "quotedblbase"),
    (0o344, "perthousand"), (0o345, "Acircumflex"), (0o346, "Ecircumflex"), (0o347, "Aacute"),
    (0o350, "Edieresis"), (0o351, "Egrave"), (0o352, "Iacute"), (0o353, "Icircumflex"),
    (0o354, "Idieresis"), (0o355, "Igrave"), (0o356, "Oacute"), (0o357, "Ocircumflex"),
    (0o360, "apple"), (0o361, "Ograve"), (0o362, "Uacute"), (0o363, "Ucircumflex"),
    (0o364, "Ugrave"), (0o365, "dotlessi"), (0o366, "circumflex"), (0o367, "tilde"),
    (0o370, "macron"), (0o371, "breve"), (0o372, "dotaccent"), (0o373, "ring"),
    (0o374, "cedilla"), (0o375, "hungarumlaut"), (0o376, "ogonek"), (0o377, "caron"),
];
