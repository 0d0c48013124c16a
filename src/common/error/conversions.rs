//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from internal
//! and third-party error types to the unified Error type.

use super::types::Error;

impl From<crate::ooxml::OoxmlError> for Error {
    fn from(err: crate::ooxml::OoxmlError) -> Self {
        match err {
            crate::ooxml::OoxmlError::Io(e) => Error::Io(e),
            other => Error::Export(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Content(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::OoxmlError;

    #[test]
    fn test_ooxml_io_error_stays_io() {
        let err: Error = OoxmlError::Io(std::io::Error::other("disk full")).into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_ooxml_xml_error_becomes_export() {
        let err: Error = OoxmlError::Xml("bad part".to_string()).into();
        assert!(matches!(err, Error::Export(ref msg) if msg.contains("bad part")));
    }

    #[test]
    fn test_json_error_becomes_content() {
        let err: Error = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, Error::Content(_)));
    }
}
