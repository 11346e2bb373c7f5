//! Used-vs-reserved check. Every intersecting pair is its own conflict group.

use crate::model::{ConcreteRange, ReservedEntry};
use crate::overlap::cross_overlaps;
use crate::report::{Finding, ValidationReport};
use crate::space::AddressSpace;

/// Check identifier.
pub const CHECK: &str = "used/reserved";

/// Reports a conflict for each used range that intersects a reserved range.
pub fn validate(
    space: AddressSpace,
    used: &[ConcreteRange],
    reserved: &[ReservedEntry],
) -> ValidationReport {
    let mut report = ValidationReport::new();

    for hit in cross_overlaps(used, reserved) {
        report.push(Finding::conflict(
            CHECK,
            space,
            format!(
                "{} used range {} overlaps reserved {}-{} ({})",
                space, hit.used, hit.reserved.start, hit.reserved.end, hit.reserved.purpose
            ),
        ));
    }

    report
}
