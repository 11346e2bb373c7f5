//! Used-vs-used overlap check.

use crate::model::ConcreteRange;
use crate::overlap::find_overlaps;
use crate::report::{Finding, ValidationReport};
use crate::space::AddressSpace;

/// Check identifier.
pub const CHECK: &str = "used/used";

/// Reports one conflict group if any used ranges of `space` overlap.
pub fn validate(space: AddressSpace, used: &[ConcreteRange]) -> ValidationReport {
    let mut report = ValidationReport::new();

    let overlaps = find_overlaps(used);
    if !overlaps.is_empty() {
        let details = overlaps
            .iter()
            .map(|o| format!("{}: {}  <-->  {}", space, o.first, o.second))
            .collect();
        report.push(Finding::conflict_with_details(
            CHECK,
            space,
            format!("Overlaps in {}", space),
            details,
        ));
    }

    report
}
