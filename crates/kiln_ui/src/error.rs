//! Error types for kiln_ui

use std::path::PathBuf;

use thiserror::Error;

use crate::components::input::FieldKind;

/// Errors raised by the component library
#[derive(Error, Debug)]
pub enum KilnError {
    /// A verification code needs at least one cell
    #[error("verification code length must be at least 1")]
    InvalidLength,

    /// Cell index outside the verification buffer
    #[error("cell index {index} is out of range for a {length}-cell code")]
    CellOutOfRange { index: usize, length: usize },

    /// The operation only applies to another field family
    #[error("{operation} is not supported by {kind} fields")]
    Unsupported {
        operation: &'static str,
        kind: FieldKind,
    },

    /// Unrecognised name for a closed enumeration
    #[error("unknown {what}: {name:?}")]
    UnknownName { what: &'static str, name: String },

    /// Failed to read a configuration file
    #[error("failed to read {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a configuration document
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Failed to serialize a configuration document
    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// Result type for kiln_ui operations
pub type Result<T> = std::result::Result<T, KilnError>;
