//! Validation report types: findings, severity levels, and report aggregation.

use serde::Serialize;

use crate::space::AddressSpace;

/// Severity level of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational only.
    Info,
    /// Advisory; never changes the exit code.
    Warning,
    /// One conflict group; any conflict fails the run.
    Conflict,
}

/// A single finding produced by one check.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// Short identifier of the check that produced this finding.
    pub check: String,
    /// Space the finding concerns, if any.
    pub space: Option<AddressSpace>,
    /// Human-readable message.
    pub message: String,
    /// Severity of the finding.
    pub severity: Severity,
    /// Additional detail lines (one per conflicting pair, gap, etc.).
    pub details: Vec<String>,
}

impl Finding {
    /// Creates an informational finding.
    pub fn info(
        check: impl Into<String>,
        space: Option<AddressSpace>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(check, space, message, Severity::Info, Vec::new())
    }

    /// Creates a warning.
    pub fn warn(
        check: impl Into<String>,
        space: Option<AddressSpace>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(check, space, message, Severity::Warning, Vec::new())
    }

    /// Creates a conflict group with no detail lines.
    pub fn conflict(check: impl Into<String>, space: AddressSpace, message: impl Into<String>) -> Self {
        Self::new(check, Some(space), message, Severity::Conflict, Vec::new())
    }

    /// Creates a conflict group with detail lines.
    pub fn conflict_with_details(
        check: impl Into<String>,
        space: AddressSpace,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self::new(check, Some(space), message, Severity::Conflict, details)
    }

    fn new(
        check: impl Into<String>,
        space: Option<AddressSpace>,
        message: impl Into<String>,
        severity: Severity,
        details: Vec<String>,
    ) -> Self {
        Self {
            check: check.into(),
            space,
            message: message.into(),
            severity,
            details,
        }
    }

    /// Returns true if this finding is a conflict.
    pub fn is_conflict(&self) -> bool {
        self.severity == Severity::Conflict
    }
}

/// Range counts for one space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpaceSummary {
    /// The space summarized.
    pub space: AddressSpace,
    /// Number of used ranges.
    pub used: usize,
    /// Number of reserved ranges.
    pub reserved: usize,
    /// Lowest used address, if any.
    pub min: Option<i64>,
    /// Highest used address, if any.
    pub max: Option<i64>,
}

/// Aggregated report from all checks.
#[derive(Debug, Default, Serialize)]
pub struct ValidationReport {
    /// All findings, in the order the checks produced them.
    pub findings: Vec<Finding>,
    /// One summary per space, in [`AddressSpace::ALL`] order.
    pub summaries: Vec<SpaceSummary>,
}

impl ValidationReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a finding.
    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Extends this report with the findings and summaries of another.
    pub fn extend(&mut self, other: ValidationReport) {
        self.findings.extend(other.findings);
        self.summaries.extend(other.summaries);
    }

    /// Returns the number of conflict groups.
    pub fn conflict_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_conflict()).count()
    }

    /// Returns the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }

    /// Returns the findings of one severity.
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }

    /// Returns true if no conflicts were found.
    pub fn all_passed(&self) -> bool {
        self.conflict_count() == 0
    }

    /// Process exit code: 0 when clean, 2 when any conflict was found.
    pub fn exit_code(&self) -> u8 {
        if self.all_passed() {
            0
        } else {
            2
        }
    }
}
