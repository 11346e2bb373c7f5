//! Interval overlap detection.
//!
//! [`find_overlaps`] is a single sort-and-sweep over one list of ranges. The
//! sweep keeps a running merged extent; every range that starts inside it is
//! reported against that extent. A cluster of three or more mutually
//! overlapping ranges therefore yields one pair per extra member, each paired
//! with the cluster's first range, not every pairwise combination.
//!
//! [`cross_overlaps`] compares every used range against every reserved range.

use serde::Serialize;
use tracing::debug;

use crate::model::{ConcreteRange, ReservedEntry};

/// Two ranges found to share at least one address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overlap {
    /// The running merged extent at the time of detection. Its label is the
    /// first range of the cluster; its end may have been extended.
    pub first: ConcreteRange,
    /// The range that started inside `first`.
    pub second: ConcreteRange,
}

/// A used range that intersects a reserved range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservedHit {
    /// The used range.
    pub used: ConcreteRange,
    /// The reserved range it intersects.
    pub reserved: ReservedEntry,
}

/// Sorts ranges by `(start, end)`, with the label as a final tiebreak so the
/// result never depends on input order.
pub fn sorted(ranges: &[ConcreteRange]) -> Vec<&ConcreteRange> {
    let mut sorted: Vec<&ConcreteRange> = ranges.iter().collect();
    sorted.sort_by(|a, b| (a.start, a.end, &a.label).cmp(&(b.start, b.end, &b.label)));
    sorted
}

/// Returns the overlapping pairs found by sweeping the sorted ranges.
pub fn find_overlaps(ranges: &[ConcreteRange]) -> Vec<Overlap> {
    let mut overlaps = Vec::new();
    let mut iter = sorted(ranges).into_iter();
    let Some(first) = iter.next() else {
        return overlaps;
    };

    let mut tail = first.clone();
    for current in iter {
        if current.start <= tail.end {
            overlaps.push(Overlap {
                first: tail.clone(),
                second: current.clone(),
            });
            if current.end > tail.end {
                tail.end = current.end;
            }
        } else {
            tail = current.clone();
        }
    }
    debug!(ranges = ranges.len(), overlaps = overlaps.len(), "swept ranges");
    overlaps
}

/// Returns every (used, reserved) pair whose closed intervals intersect.
pub fn cross_overlaps(used: &[ConcreteRange], reserved: &[ReservedEntry]) -> Vec<ReservedHit> {
    let mut reserved_sorted: Vec<&ReservedEntry> = reserved.iter().collect();
    reserved_sorted.sort_by(|a, b| (a.start, a.end, &a.purpose).cmp(&(b.start, b.end, &b.purpose)));

    let mut hits = Vec::new();
    for u in sorted(used) {
        for r in &reserved_sorted {
            if u.start <= r.end && r.start <= u.end {
                hits.push(ReservedHit {
                    used: u.clone(),
                    reserved: (*r).clone(),
                });
            }
        }
    }
    debug!(
        used = used.len(),
        reserved = reserved.len(),
        hits = hits.len(),
        "compared used against reserved"
    );
    hits
}

/// Merges ranges into disjoint `(start, end)` extents, ascending.
pub fn merged_extents(ranges: &[ConcreteRange]) -> Vec<(i64, i64)> {
    let mut extents: Vec<(i64, i64)> = Vec::new();
    for r in sorted(ranges) {
        match extents.last_mut() {
            Some((_, end)) if r.start <= *end => *end = (*end).max(r.end),
            _ => extents.push((r.start, r.end)),
        }
    }
    extents
}

/// Returns the unused `(start, end)` holes between the merged extents.
pub fn gaps(ranges: &[ConcreteRange]) -> Vec<(i64, i64)> {
    merged_extents(ranges)
        .windows(2)
        .filter_map(|w| {
            let (_, prev_end) = w[0];
            let (next_start, _) = w[1];
            let first_free = prev_end.checked_add(1)?;
            (next_start > first_free).then_some((first_free, next_start - 1))
        })
        .collect()
}

/// Number of addresses in the inclusive span `start..=end`.
///
/// Widened to `u128`: a span across the whole `i64` domain has 2^64 addresses.
pub fn span_len(start: i64, end: i64) -> u128 {
    (i128::from(end) - i128::from(start) + 1).unsigned_abs()
}

/// Returns the lowest start and highest end, if any ranges exist.
pub fn bounds(ranges: &[ConcreteRange]) -> Option<(i64, i64)> {
    let min = ranges.iter().map(|r| r.start).min()?;
    let max = ranges.iter().map(|r| r.end).max()?;
    Some((min, max))
}
