//! Modbus address map conformance checks.
//!
//! An address map assigns symbolic names to coils, discrete inputs, holding
//! registers and input registers. Some names stand for multi-word blocks (pose
//! bases, tick counters, the target queue). This crate expands every entry to
//! a concrete inclusive address range and reports overlaps:
//!
//! | Check | Scope |
//! |-------|-------|
//! | `used/used` | used ranges within one space |
//! | `reserved/reserved` | declared reserved ranges within one space |
//! | `used/reserved` | every used range against every reserved range |
//! | `gaps` | unused holes between used ranges (optional, informational) |
//!
//! The four spaces are independent; nothing is compared across spaces.
//!
//! # Entry Point
//!
//! ```no_run
//! use addrmap_conformance::{validate_file, Options};
//! use std::path::Path;
//!
//! let options = Options { max_queue: 4, ..Options::default() };
//! let report = validate_file(Path::new("AddressMap.json"), &options)
//!     .expect("address map is well-formed");
//! assert!(report.all_passed());
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod classify;
pub mod error;
pub mod expand;
pub mod model;
pub mod overlap;
pub mod report;
pub mod reserved;
pub mod space;
pub mod tests;
pub mod validators;

use std::path::Path;

use tracing::debug;

pub use error::{Error, Result};
pub use model::{AddressMap, ConcreteRange, Meta, ReservedEntry};
pub use report::{Finding, Severity, SpaceSummary, ValidationReport};
pub use space::AddressSpace;

/// Run parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Number of queue slots to expand `TARGET_QUEUE_BASE` into. Zero leaves
    /// the queue open-ended: only its base address is checked.
    pub max_queue: u32,
    /// Turn the open-ended queue warning into a fatal error.
    pub strict: bool,
    /// Report unused holes between used ranges.
    pub report_gaps: bool,
}

/// Check identifier for the open-ended queue advisory.
pub const QUEUE_CHECK: &str = "queue";

/// Check identifier for the schema version advisory.
pub const META_CHECK: &str = "meta";

/// Loads an address map from `path` and runs all checks on it.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or for any fatal
/// condition reported by [`run_all`].
pub fn validate_file(path: &Path, options: &Options) -> Result<ValidationReport> {
    let map = AddressMap::load(path)?;
    run_all(&map, options)
}

/// Runs all checks and returns the aggregated report.
///
/// Checks are run in this order:
/// 1. Range expansion for every space (fails fast)
/// 2. Reserved range normalization for every space (fails fast)
/// 3. Open-ended queue advisory (fatal under `strict`)
/// 4. Schema version advisory
/// 5. Used-vs-used overlaps, every space
/// 6. Reserved-vs-reserved overlaps, every space
/// 7. Used-vs-reserved overlaps, every space
/// 8. Gaps, every space (only with `report_gaps`)
///
/// # Errors
///
/// Returns an error on the first malformed entry or reserved item, or if the
/// queue is left unexpanded under `strict`. Conflicts are never errors; they
/// are collected in the report.
pub fn run_all(map: &AddressMap, options: &Options) -> Result<ValidationReport> {
    let mut used = Vec::with_capacity(AddressSpace::ALL.len());
    let mut open_queues = Vec::new();
    for space in AddressSpace::ALL {
        let expansion =
            expand::expand_space(space, map.entries(space), &map.meta, options.max_queue)?;
        if expansion.open_queue {
            open_queues.push(space);
        }
        used.push(expansion.ranges);
    }

    let mut reserved = Vec::with_capacity(AddressSpace::ALL.len());
    for space in AddressSpace::ALL {
        reserved.push(reserved::normalize(space, map.reserved_items(space))?);
    }

    let mut report = ValidationReport::new();

    for space in open_queues {
        let advisory = Error::QueueNotExpanded { space };
        if options.strict {
            return Err(advisory);
        }
        report.push(Finding::warn(QUEUE_CHECK, Some(space), advisory.to_string()));
    }

    if let Some(schema) = map.meta.schema_mismatch() {
        report.push(Finding::warn(
            META_CHECK,
            None,
            format!(
                "meta.schema is {} but controllers expect schema {}",
                schema,
                model::SUPPORTED_SCHEMA
            ),
        ));
    }

    for space in AddressSpace::ALL {
        report.extend(validators::used::validate(space, &used[space.index()]));
    }
    for space in AddressSpace::ALL {
        report.extend(validators::reserved::validate(space, &reserved[space.index()]));
    }
    for space in AddressSpace::ALL {
        report.extend(validators::cross::validate(
            space,
            &used[space.index()],
            &reserved[space.index()],
        ));
    }
    if options.report_gaps {
        for space in AddressSpace::ALL {
            report.extend(validators::gaps::validate(space, &used[space.index()]));
        }
    }

    for space in AddressSpace::ALL {
        let ranges = &used[space.index()];
        let bounds = overlap::bounds(ranges);
        report.summaries.push(SpaceSummary {
            space,
            used: ranges.len(),
            reserved: reserved[space.index()].len(),
            min: bounds.map(|(min, _)| min),
            max: bounds.map(|(_, max)| max),
        });
    }

    debug!(
        conflicts = report.conflict_count(),
        warnings = report.warning_count(),
        "validation finished"
    );
    Ok(report)
}
