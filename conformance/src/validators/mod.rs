//! Per-space conformance checks. Each check takes the expanded ranges of one
//! space and returns the findings it produced.

pub mod cross;
pub mod gaps;
pub mod reserved;
pub mod used;
