//! Reserved range normalization.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::ReservedEntry;
use crate::space::AddressSpace;

/// Validates raw reserved items and converts them to [`ReservedEntry`] values.
///
/// Each item needs integer `start` and `end` with `end >= start`; `purpose`
/// is optional and defaults to empty.
///
/// # Errors
///
/// Returns an error naming the raw item if a bound is missing, not an
/// integer, or inverted.
pub fn normalize(space: AddressSpace, items: &[Value]) -> Result<Vec<ReservedEntry>> {
    items.iter().map(|item| normalize_item(space, item)).collect()
}

fn normalize_item(space: AddressSpace, item: &Value) -> Result<ReservedEntry> {
    let raw = || item.to_string();
    let field = |name: &str| item.get(name).filter(|v| !v.is_null());

    let (Some(start), Some(end)) = (field("start"), field("end")) else {
        return Err(Error::ReservedMissingBound { space, item: raw() });
    };
    let (Some(start), Some(end)) = (start.as_i64(), end.as_i64()) else {
        return Err(Error::ReservedNotInteger { space, item: raw() });
    };
    if end < start {
        return Err(Error::ReservedInverted { space, item: raw() });
    }

    let purpose = match item.get("purpose") {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => String::new(),
        Some(other) => other.to_string(),
    };
    Ok(ReservedEntry {
        start,
        end,
        purpose,
    })
}
