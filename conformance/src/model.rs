//! Address map document model.
//!
//! The document is loaded as a [`serde_json::Value`] and picked apart by
//! hand so that every type error can name the key or raw item that caused it.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::space::AddressSpace;

/// Default number of axes in a pose block.
pub const DEFAULT_POSE_AXES: i64 = 6;

/// Default number of 16-bit words per float32 axis value.
pub const DEFAULT_FLOAT32_WORDS_PER_AXIS: i64 = 2;

/// Address map schema version the controller firmware understands.
pub const SUPPORTED_SCHEMA: i64 = 3;

/// An inclusive address interval with a human-readable label.
///
/// Labels are annotations only; they never take part in overlap decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConcreteRange {
    /// First address (inclusive).
    pub start: i64,
    /// Last address (inclusive). Always `>= start`.
    pub end: i64,
    /// Annotation used in diagnostics.
    pub label: String,
}

impl ConcreteRange {
    /// Creates a range covering `start..=end`.
    pub fn new(start: i64, end: i64, label: impl Into<String>) -> Self {
        debug_assert!(end >= start);
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    /// Creates a single-address range.
    pub fn single(address: i64, label: impl Into<String>) -> Self {
        Self::new(address, address, label)
    }

    /// Number of addresses covered, saturating at `i64::MAX`.
    pub fn len(&self) -> i64 {
        self.end.saturating_sub(self.start).saturating_add(1)
    }

    /// Always false; ranges cover at least one address.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Closed-interval overlap test. Touching boundaries overlap.
    pub fn overlaps(&self, other: &ConcreteRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl fmt::Display for ConcreteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, '{}')", self.start, self.end, self.label)
    }
}

/// An author-declared off-limits interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservedEntry {
    /// First address (inclusive).
    pub start: i64,
    /// Last address (inclusive).
    pub end: i64,
    /// Why the interval is reserved; may be empty.
    pub purpose: String,
}

impl ReservedEntry {
    /// Converts to a range labelled `reserved:<purpose>` for sweeping.
    pub fn to_range(&self) -> ConcreteRange {
        ConcreteRange::new(self.start, self.end, format!("reserved:{}", self.purpose))
    }
}

/// Document-wide expansion parameters from the `meta` object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meta {
    /// Axes per pose block.
    pub pose_axes: i64,
    /// Words per float32 axis.
    pub float32_words_per_axis: i64,
    /// Declared schema version, kept raw so mismatches can be echoed back.
    pub schema: Option<Value>,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            pose_axes: DEFAULT_POSE_AXES,
            float32_words_per_axis: DEFAULT_FLOAT32_WORDS_PER_AXIS,
            schema: None,
        }
    }
}

impl Meta {
    /// Reads `meta`, applying defaults for absent fields.
    ///
    /// # Errors
    ///
    /// Returns an error if `meta` is not an object or an expansion parameter
    /// is not a positive integer.
    pub fn from_value(value: Option<&Value>) -> Result<Self> {
        let mut meta = Meta::default();
        let Some(value) = value else {
            return Ok(meta);
        };
        let object = value.as_object().ok_or(Error::WrongShape {
            path: "meta".to_string(),
            expected: "an object",
        })?;

        if let Some(v) = object.get("pose_axes") {
            meta.pose_axes = positive_int("pose_axes", v)?;
        }
        if let Some(v) = object.get("float32_words_per_axis") {
            meta.float32_words_per_axis = positive_int("float32_words_per_axis", v)?;
        }
        meta.schema = object.get("schema").cloned();
        Ok(meta)
    }

    /// Words occupied by one pose block.
    pub fn pose_words(&self) -> i64 {
        self.pose_axes.saturating_mul(self.float32_words_per_axis)
    }

    /// Returns the declared schema if it differs from [`SUPPORTED_SCHEMA`].
    pub fn schema_mismatch(&self) -> Option<&Value> {
        self.schema
            .as_ref()
            .filter(|v| v.as_i64() != Some(SUPPORTED_SCHEMA))
    }
}

fn positive_int(field: &'static str, value: &Value) -> Result<i64> {
    match value.as_i64() {
        Some(n) if n > 0 => Ok(n),
        _ => Err(Error::InvalidMeta {
            field,
            value: value.to_string(),
        }),
    }
}

/// A loaded address map: per-space symbolic entries and raw reserved items.
#[derive(Debug, Clone, Default)]
pub struct AddressMap {
    /// Expansion parameters.
    pub meta: Meta,
    spaces: [Map<String, Value>; 4],
    reserved: [Vec<Value>; 4],
}

impl AddressMap {
    /// Reads and parses an address map file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a well-formed
    /// address map.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse()
    }

    /// Builds an address map from an already-parsed JSON document.
    ///
    /// Absent spaces are empty. Present spaces must be objects; present,
    /// non-empty reserved lists must be arrays.
    ///
    /// # Errors
    ///
    /// Returns an error if a container has the wrong shape or `meta` is invalid.
    pub fn from_value(document: Value) -> Result<Self> {
        let Value::Object(mut root) = document else {
            return Err(Error::WrongShape {
                path: "<root>".to_string(),
                expected: "an object",
            });
        };

        let meta = Meta::from_value(root.get("meta"))?;

        let mut spaces: [Map<String, Value>; 4] = Default::default();
        for space in AddressSpace::ALL {
            let entries = match root.remove(space.key()) {
                None => Map::new(),
                Some(Value::Object(entries)) => entries,
                Some(_) => {
                    return Err(Error::WrongShape {
                        path: space.key().to_string(),
                        expected: "an object",
                    })
                }
            };
            spaces[space.index()] = entries;
        }

        let reserved_root = match root.remove("reserved") {
            None => Map::new(),
            Some(Value::Object(r)) => r,
            Some(_) => {
                return Err(Error::WrongShape {
                    path: "reserved".to_string(),
                    expected: "an object",
                })
            }
        };
        let mut reserved: [Vec<Value>; 4] = Default::default();
        for space in AddressSpace::ALL {
            let items = match reserved_root.get(space.key()) {
                Some(Value::Array(items)) => items.clone(),
                Some(v) if is_falsy(v) => Vec::new(),
                None => Vec::new(),
                Some(_) => {
                    return Err(Error::WrongShape {
                        path: format!("reserved.{}", space.key()),
                        expected: "an array",
                    })
                }
            };
            reserved[space.index()] = items;
        }

        Ok(Self {
            meta,
            spaces,
            reserved,
        })
    }

    /// Symbolic entries declared for a space.
    pub fn entries(&self, space: AddressSpace) -> &Map<String, Value> {
        &self.spaces[space.index()]
    }

    /// Raw reserved items declared for a space.
    pub fn reserved_items(&self, space: AddressSpace) -> &[Value] {
        &self.reserved[space.index()]
    }
}

impl FromStr for AddressMap {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(s)?;
        Self::from_value(document)
    }
}

/// Empty containers, `null`, `false`, `0` and `""` all mean "no reserved ranges".
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
