//! Unused address holes between used ranges. Informational only.

use crate::model::ConcreteRange;
use crate::overlap::{gaps, span_len};
use crate::report::{Finding, ValidationReport};
use crate::space::AddressSpace;

/// Check identifier.
pub const CHECK: &str = "gaps";

/// Reports the holes inside the used span of `space`, if there are any.
pub fn validate(space: AddressSpace, used: &[ConcreteRange]) -> ValidationReport {
    let mut report = ValidationReport::new();

    let holes = gaps(used);
    if holes.is_empty() {
        return report;
    }
    let free: u128 = holes.iter().map(|&(s, e)| span_len(s, e)).sum();
    let mut finding = Finding::info(
        CHECK,
        Some(space),
        format!(
            "{}: {} gap(s), {} unused address(es) between used ranges",
            space,
            holes.len(),
            free
        ),
    );
    finding.details = holes
        .iter()
        .map(|(s, e)| {
            if s == e {
                format!("{}: free {}", space, s)
            } else {
                format!("{}: free {}-{}", space, s, e)
            }
        })
        .collect();
    report.push(finding);

    report
}
