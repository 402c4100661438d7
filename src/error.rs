//! Error types for font resolution.
//!
//! Absence of an optional data source (descriptor, embedded file, encoding,
//! ToUnicode) is never an error; those cases surface as `None`. The variants
//! here are the hard failures that abort a resolution, plus the failures
//! propagated verbatim from the injected collaborators.

use crate::fonts::descriptor::FontFileKind;

/// Result type alias for font resolution operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while resolving a font.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The embedded font file declares a different program type than the
    /// handler expects. Always fatal, in lenient mode too: handing the bytes
    /// to the wrong binary parser is never recoverable.
    #[error("Expected a {expected} font program in the descriptor font file, instead it was {found}")]
    FontFileMismatch {
        /// Program type the requesting handler is specialized for
        expected: FontFileKind,
        /// Program type the descriptor declared
        found: FontFileKind,
    },

    /// An `/Encoding` name with no predefined encoding table
    #[error("Unrecognized encoding name: {0}")]
    UnrecognizedEncoding(String),

    /// An `/Encoding` entry of a shape this crate does not interpret
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// Object has wrong type
    #[error("Invalid object type: expected {expected}, found {found}")]
    InvalidObjectType {
        /// Expected object type
        expected: String,
        /// Actual object type found
        found: String,
    },

    /// Referenced object not found by the object parser
    #[error("Object not found: {0} {1} R")]
    ObjectNotFound(u32, u16),

    /// Stream decoding error from the filter provider
    #[error("Stream decoding error: {0}")]
    Decode(String),

    /// Embedded font program parse error
    #[error("Font program error: {0}")]
    FontProgram(String),

    /// ToUnicode CMap parse error
    #[error("CMap error: {0}")]
    CMap(String),

    /// IO error from the document byte source
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_file_mismatch_error() {
        let err = Error::FontFileMismatch {
            expected: FontFileKind::TrueType,
            found: FontFileKind::Type1,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("TrueType"));
        assert!(msg.contains("Type1"));
    }

    #[test]
    fn test_unrecognized_encoding_error() {
        let err = Error::UnrecognizedEncoding("BogusEncodingXYZ".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Unrecognized encoding name"));
        assert!(msg.contains("BogusEncodingXYZ"));
    }

    #[test]
    fn test_unsupported_encoding_error() {
        let err = Error::UnsupportedEncoding("Integer encoding entry".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Unsupported encoding"));
        assert!(msg.contains("Integer"));
    }

    #[test]
    fn test_object_not_found_error() {
        let err = Error::ObjectNotFound(10, 0);
        let msg = format!("{}", err);
        assert!(msg.contains("10 0 R"));
    }

    #[test]
    fn test_invalid_object_type_error() {
        let err = Error::InvalidObjectType {
            expected: "Dictionary".to_string(),
            found: "Array".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Dictionary"));
        assert!(msg.contains("Array"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
