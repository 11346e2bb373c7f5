//! Reserved-vs-reserved overlap check.

use crate::model::{ConcreteRange, ReservedEntry};
use crate::overlap::find_overlaps;
use crate::report::{Finding, ValidationReport};
use crate::space::AddressSpace;

/// Check identifier.
pub const CHECK: &str = "reserved/reserved";

/// Reports one conflict group if any reserved ranges of `space` overlap.
pub fn validate(space: AddressSpace, reserved: &[ReservedEntry]) -> ValidationReport {
    let mut report = ValidationReport::new();

    let ranges: Vec<ConcreteRange> = reserved.iter().map(ReservedEntry::to_range).collect();
    let overlaps = find_overlaps(&ranges);
    if !overlaps.is_empty() {
        let details = overlaps
            .iter()
            .map(|o| format!("{}: {}  <-->  {}", space, o.first, o.second))
            .collect();
        report.push(Finding::conflict_with_details(
            CHECK,
            space,
            format!("Reserved ranges overlap in {}", space),
            details,
        ));
    }

    report
}
