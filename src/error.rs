//! Error types for the launch constructor

use crate::config::ConfigError;
use crate::form::FieldName;
use thiserror::Error;

/// Result type alias for launch constructor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the launch constructor
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("'{value}' is not an option of field {field}")]
    InvalidOption { field: FieldName, value: String },

    #[error("Field {0} is multi-select and takes a device list")]
    MultiSelectField(FieldName),

    #[error("Field {0} is disabled")]
    DisabledField(FieldName),

    #[error("Form is incomplete, missing: {}", format_fields(.0))]
    IncompleteForm(Vec<FieldName>),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn format_fields(fields: &[FieldName]) -> String {
    fields
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sources_convert_into_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "terminal closed");
        assert!(matches!(Error::from(io), Error::Io(_)));

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(Error::from(json), Error::Serialization(_)));
    }

    #[test]
    fn test_incomplete_form_lists_field_names() {
        let error = Error::IncompleteForm(vec![FieldName::Devices, FieldName::NoProxy]);
        assert_eq!(error.to_string(), "Form is incomplete, missing: devices, noProxy");
    }
}
