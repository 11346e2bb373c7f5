//! Range expansion: symbolic entries to concrete address ranges.
//!
//! Coils and discrete inputs are always single addresses. In the register
//! spaces a key's [`KeyKind`] decides how many words it occupies:
//!
//! | Kind | Words |
//! |------|-------|
//! | `Pose` | `pose_axes * float32_words_per_axis` (default 12) |
//! | `Tick` | 2 (one u32 counter) |
//! | `QueueBase` | `stride * max_queue`, or the base address alone when `max_queue == 0` |
//! | `Plain` | 1 |
//!
//! The stride helper is never emitted as a range of its own.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::classify::{classify, KeyKind, QUEUE_STRIDE_KEY};
use crate::error::{json_type_name, Error, Result};
use crate::model::{ConcreteRange, Meta};
use crate::space::AddressSpace;

/// Words occupied by a tick counter.
pub const TICK_WORDS: i64 = 2;

/// The concrete ranges of one space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expansion {
    /// Used ranges, one per emitted key, in key order.
    pub ranges: Vec<ConcreteRange>,
    /// True if a queue base was found but left unexpanded.
    pub open_queue: bool,
}

/// Expands every entry of `space` into concrete ranges.
///
/// # Errors
///
/// Returns an error on the first entry whose value is not an integer (other
/// than the stride helper), on an invalid stride, or if an expansion does
/// not fit in the address type.
pub fn expand_space(
    space: AddressSpace,
    entries: &Map<String, Value>,
    meta: &Meta,
    max_queue: u32,
) -> Result<Expansion> {
    let mut expansion = Expansion::default();

    for (key, value) in entries {
        let kind = if space.is_bit_space() {
            KeyKind::Plain
        } else {
            classify(key)
        };
        if kind == KeyKind::QueueStride {
            continue;
        }
        let base = address(space, key, value)?;
        trace!(%space, key = key.as_str(), ?kind, base, "expanding entry");

        let range = match kind {
            KeyKind::Pose => words_from(space, key, base, meta.pose_words())?,
            KeyKind::Tick => words_from(space, key, base, TICK_WORDS)?,
            KeyKind::QueueBase => {
                let stride = queue_stride(space, entries, meta)?;
                if max_queue > 0 {
                    let words = stride
                        .checked_mul(i64::from(max_queue))
                        .ok_or_else(|| overflow(space, key))?;
                    let end = last_word(space, key, base, words)?;
                    ConcreteRange::new(
                        base,
                        end,
                        format!("{}[0..{}] (stride {})", key, max_queue - 1, stride),
                    )
                } else {
                    expansion.open_queue = true;
                    ConcreteRange::single(
                        base,
                        format!("{} (open-ended; use --max-queue to expand)", key),
                    )
                }
            }
            KeyKind::Plain | KeyKind::QueueStride => ConcreteRange::single(base, key.as_str()),
        };
        expansion.ranges.push(range);
    }

    debug!(
        %space,
        ranges = expansion.ranges.len(),
        open_queue = expansion.open_queue,
        "expanded space"
    );
    Ok(expansion)
}

/// Reads an entry value as an address.
fn address(space: AddressSpace, key: &str, value: &Value) -> Result<i64> {
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    match value {
        // Integral but outside i64.
        Value::Number(n) if !n.is_f64() => Err(overflow(space, key)),
        _ => Err(Error::NotAnInteger {
            space,
            key: key.to_string(),
            found: json_type_name(value),
        }),
    }
}

/// Stride for queue slots: the helper key if present, else one pose block.
fn queue_stride(space: AddressSpace, entries: &Map<String, Value>, meta: &Meta) -> Result<i64> {
    match entries.get(QUEUE_STRIDE_KEY) {
        None => Ok(meta.pose_words()),
        Some(value) => match value.as_i64() {
            Some(stride) if stride > 0 => Ok(stride),
            _ => Err(Error::InvalidStride {
                space,
                found: value.to_string(),
            }),
        },
    }
}

fn words_from(space: AddressSpace, key: &str, base: i64, words: i64) -> Result<ConcreteRange> {
    if words <= 1 {
        return Ok(ConcreteRange::single(base, key));
    }
    let end = last_word(space, key, base, words)?;
    Ok(ConcreteRange::new(base, end, format!("{} ({} words)", key, words)))
}

fn last_word(space: AddressSpace, key: &str, base: i64, words: i64) -> Result<i64> {
    base.checked_add(words - 1)
        .ok_or_else(|| overflow(space, key))
}

fn overflow(space: AddressSpace, key: &str) -> Error {
    Error::AddressOverflow {
        space,
        key: key.to_string(),
    }
}
