//! Punch normalization and the overnight-shift heuristic.
//!
//! Device exports keep punches in capture order, which disagrees with
//! chronological order often enough (pasted corrections, double-entry fixes)
//! that naive first/last bracketing would produce 00:00 or negative
//! durations. Normalization reorders punches, treating times numerically
//! smaller than the first punch as next-day times when the record looks like
//! an overnight shift.

use crate::models::{MINUTES_PER_DAY, TimeOfDay};

/// Entries at or after 18:00 count as late entries for wrap detection.
pub const LATE_ENTRY_MIN: u32 = 18 * 60;

/// A punch spread wider than 12 hours suggests the smaller times belong to
/// the next day.
pub const WIDE_SPAN_MIN: u32 = 12 * 60;

/// The outcome of punch normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPunches {
    /// The punches in chronological order on the shift timeline.
    pub times: Vec<TimeOfDay>,
    /// True when the output order differs from the capture order.
    pub reordered: bool,
}

/// Normalizes a capture-order punch list for consistent calculations.
///
/// A wrap past midnight is assumed when the first punch is a late entry
/// (>= 18:00) and some later punch is numerically smaller, or when a smaller
/// punch exists and the whole spread exceeds 12 hours. Punches smaller than
/// the first one then get a +24h ordering adjustment before the stable sort;
/// the emitted values themselves are unchanged.
///
/// The wrap rule is a heuristic inferred from operational punch patterns,
/// not a proof of an overnight shift: a daytime record with one wildly
/// mis-captured punch can trigger it. It is kept behind this function (with
/// [`LATE_ENTRY_MIN`] and [`WIDE_SPAN_MIN`] as its only tuning points) so a
/// stricter policy, such as an explicit shift-type flag, could replace it
/// without touching the rest of the engine.
///
/// # Example
///
/// ```
/// use timeclock_engine::calculation::normalize_punches;
/// use timeclock_engine::models::extract_punches;
///
/// // Overnight shift: 02:00 and 06:00 belong to the next day and the
/// // capture order is already chronological on the shift timeline.
/// let punches = extract_punches("22:00 02:00 06:00");
/// let normalized = normalize_punches(&punches);
/// assert!(!normalized.reordered);
/// assert_eq!(normalized.times, punches);
/// ```
pub fn normalize_punches(punches: &[TimeOfDay]) -> NormalizedPunches {
    if punches.len() < 2 {
        return NormalizedPunches {
            times: punches.to_vec(),
            reordered: false,
        };
    }

    let mins: Vec<u32> = punches.iter().map(|t| t.minute_of_day()).collect();
    let entry_min = mins[0];
    let has_smaller = mins[1..].iter().any(|&m| m < entry_min);
    let span = mins.iter().max().unwrap() - mins.iter().min().unwrap();

    let wrap_likely =
        (entry_min >= LATE_ENTRY_MIN && has_smaller) || (has_smaller && span > WIDE_SPAN_MIN);

    // The +24h adjustment orders next-day punches after the entry; the
    // original index breaks ties deterministically.
    let mut adjusted: Vec<(u32, usize, TimeOfDay)> = punches
        .iter()
        .zip(&mins)
        .enumerate()
        .map(|(idx, (&t, &m))| {
            let adj = if wrap_likely && m < entry_min {
                m + MINUTES_PER_DAY
            } else {
                m
            };
            (adj, idx, t)
        })
        .collect();
    adjusted.sort_by_key(|&(adj, idx, _)| (adj, idx));

    let times: Vec<TimeOfDay> = adjusted.into_iter().map(|(_, _, t)| t).collect();
    let reordered = times != punches;
    if reordered {
        tracing::debug!(count = times.len(), wrap_likely, "reordered out-of-order punches");
    }

    NormalizedPunches { times, reordered }
}
