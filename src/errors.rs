use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

use zip::result::ZipError;

/// Custom error type for the Path Mapper application
#[derive(Debug)]
pub enum Error {
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error related to JSON document serialization
    Serialization {
        source: serde_json::Error,
        detail: String,
    },
    /// Error related to archive creation
    Archive { source: ZipError, path: PathBuf },
    /// Error related to configuration parsing
    ConfigParsing {
        source: Box<dyn StdError + Send + Sync>,
        detail: String,
    },
    /// Error when a required configuration field is empty or absent
    MissingField { field: String },
    /// Error when the variant count is not a positive integer
    InvalidVariantCount { group: String },
    /// Error when a group selects no races
    NoRacesSelected { group: String },
    /// Error when a race label is not present in the race table
    UnknownRace { label: String },
    /// Error when a referenced local file does not exist
    MissingLocalFile { path: PathBuf, option: String },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::Serialization { detail, .. } => {
                write!(f, "Failed to serialize document: {detail}")
            }
            Error::Archive { path, .. } => {
                write!(f, "Failed to build archive: {}", path.display())
            }
            Error::ConfigParsing { detail, .. } => {
                write!(f, "Configuration parsing error: {detail}")
            }
            Error::MissingField { field } => {
                write!(f, "Required field is missing or empty: {field}")
            }
            Error::InvalidVariantCount { group } => {
                write!(
                    f,
                    "Number of variants must be a positive integer in group '{group}'"
                )
            }
            Error::NoRacesSelected { group } => {
                write!(f, "No races selected in group '{group}'")
            }
            Error::UnknownRace { label } => {
                write!(f, "Unknown race label: {label}")
            }
            Error::MissingLocalFile { path, option } => {
                write!(
                    f,
                    "Local file for option '{}' not found: {}",
                    option,
                    path.display()
                )
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::Serialization { source, .. } => Some(source),
            Error::Archive { source, .. } => Some(source),
            Error::ConfigParsing { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::FileOperation {
            source: err,
            path: PathBuf::new(),
            operation: "perform operation on".to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization {
            source: err,
            detail: String::new(),
        }
    }
}

impl From<ZipError> for Error {
    fn from(err: ZipError) -> Self {
        Error::Archive {
            source: err,
            path: PathBuf::new(),
        }
    }
}

/// Custom Result type for the Path Mapper application
///
/// This type alias simplifies error handling throughout the application by
/// using the custom Error type. It's used as the return type for most functions
/// that can fail.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a serialization error
pub fn serialization_error(err: serde_json::Error, detail: &str) -> Error {
    Error::Serialization {
        source: err,
        detail: detail.to_string(),
    }
}

/// Helper function to create an archive error
pub fn archive_error(err: ZipError, path: PathBuf) -> Error {
    Error::Archive { source: err, path }
}

/// Helper function to create a config parsing error
pub fn config_parsing_error<E: StdError + Send + Sync + 'static>(err: E, detail: &str) -> Error {
    Error::ConfigParsing {
        source: Box::new(err),
        detail: detail.to_string(),
    }
}

/// Helper function to create a missing field error
pub fn missing_field_error(field: &str) -> Error {
    Error::MissingField {
        field: field.to_string(),
    }
}

/// Helper function to create an invalid variant count error
pub fn invalid_variant_count_error(group: &str) -> Error {
    Error::InvalidVariantCount {
        group: group.to_string(),
    }
}

/// Helper function to create a no-races-selected error
pub fn no_races_selected_error(group: &str) -> Error {
    Error::NoRacesSelected {
        group: group.to_string(),
    }
}

/// Helper function to create an unknown race error
pub fn unknown_race_error(label: &str) -> Error {
    Error::UnknownRace {
        label: label.to_string(),
    }
}

/// Helper function to create a missing local file error
pub fn missing_local_file_error(path: PathBuf, option: &str) -> Error {
    Error::MissingLocalFile {
        path,
        option: option.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
