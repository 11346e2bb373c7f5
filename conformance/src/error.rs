//! Fatal errors. Any of these aborts the run before a report is produced.

use std::path::PathBuf;

use thiserror::Error;

use crate::space::AddressSpace;

/// A fatal input error.
#[derive(Error, Debug)]
pub enum Error {
    /// The document could not be read from disk.
    #[error("Failed to load JSON: {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The document is not valid JSON.
    #[error("Failed to load JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A container that must be an object (or array) has another shape.
    #[error("'{path}' must be {expected}")]
    WrongShape {
        /// Dotted path of the container inside the document.
        path: String,
        /// What the container should have been ("an object", "an array").
        expected: &'static str,
    },

    /// A `meta` parameter is not a positive integer.
    #[error("meta.{field} must be a positive integer (got {value})")]
    InvalidMeta {
        /// Field name inside `meta`.
        field: &'static str,
        /// Raw JSON of the offending value.
        value: String,
    },

    /// A used-address value is not an integer.
    #[error("{space}.{key} must be an integer address (got {found})")]
    NotAnInteger {
        /// Space the entry belongs to.
        space: AddressSpace,
        /// Symbolic key of the entry.
        key: String,
        /// JSON type of the value that was found.
        found: &'static str,
    },

    /// The queue stride helper is present but is not a positive integer.
    #[error("{space}.TARGET_QUEUE_STRIDE must be positive integer (got {found})")]
    InvalidStride {
        /// Space the helper belongs to.
        space: AddressSpace,
        /// Raw JSON of the offending value.
        found: String,
    },

    /// Expanding an entry runs past the representable address range.
    #[error("{space}.{key} expands beyond the addressable range")]
    AddressOverflow {
        /// Space the entry belongs to.
        space: AddressSpace,
        /// Symbolic key of the entry.
        key: String,
    },

    /// A reserved item lacks `start` or `end`.
    #[error("reserved.{space} item missing 'start' or 'end': {item}")]
    ReservedMissingBound {
        /// Space the item belongs to.
        space: AddressSpace,
        /// Raw JSON of the item.
        item: String,
    },

    /// A reserved item has a non-integer `start` or `end`.
    #[error("reserved.{space} 'start'/'end' must be ints: {item}")]
    ReservedNotInteger {
        /// Space the item belongs to.
        space: AddressSpace,
        /// Raw JSON of the item.
        item: String,
    },

    /// A reserved item has `end < start`.
    #[error("reserved.{space} range end<start: {item}")]
    ReservedInverted {
        /// Space the item belongs to.
        space: AddressSpace,
        /// Raw JSON of the item.
        item: String,
    },

    /// The queue was left unexpanded and strict mode is on.
    #[error("{space}.TARGET_QUEUE_BASE is open-ended; pass --max-queue N to expand its range for conflict checking.")]
    QueueNotExpanded {
        /// Space declaring the queue base.
        space: AddressSpace,
    },
}

/// Result alias for fallible conformance operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Returns the JSON type name of a value, for diagnostics.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
