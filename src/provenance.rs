//! Split-cell provenance aggregation core.
//!
//! After a geometric filter runs, each output cell carries the id of the
//! input cell it came from. Aggregating those ids answers two questions:
//! how many output fragments trace back to each input cell (occurrences),
//! and how many input cells split into exactly K fragments (binning).

use crate::group::count_runs;

/// Identifier of an upstream input cell. Non-negative in all observed
/// inputs; not guaranteed distinct within a sequence.
pub type OriginId = u64;

/// Sentinel meaning "no provenance recorded" in VisIt-exported data.
pub const NO_PROVENANCE: OriginId = 0;

/// How to treat the `0` sentinel before aggregation.
///
/// Filter-derived provenance arrays carry valid ids only; VisIt dumps use
/// `0` for cells with no recorded origin. The caller states which input
/// source it has, the policy is never inferred.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SentinelPolicy {
    /// Aggregate every id as-is.
    KeepAll,
    /// Drop `0` entries before aggregating.
    FilterZero,
}

/// Number of output fragments traced back to one input cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OccurrenceRecord {
    /// Input cell id the fragments descended from.
    pub origin: OriginId,
    /// How many output cells carry this origin.
    pub count: u64,
}

/// Number of distinct origins that split into exactly `count` fragments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinRecord {
    /// Fragment count shared by these origins.
    pub count: u64,
    /// How many distinct origin ids have exactly this fragment count.
    pub origins: u64,
}

/// Count how many output cells trace back to each distinct origin id.
///
/// Output is ordered by ascending `origin`, one record per distinct id
/// present in the input; counts sum to `ids.len()`. Duplicate ids are the
/// expected signal (an input cell that produced multiple fragments).
/// Empty input yields empty output, not an error.
pub fn compute_occurrences(ids: &[OriginId]) -> Vec<OccurrenceRecord> {
    count_runs(ids).into_iter().map(|(origin, count)| OccurrenceRecord { origin, count }).collect()
}

/// Bin the occurrence counts: for each distinct count value, how many
/// origins share it.
///
/// Output is ordered by ascending `count`; the `origins` column sums to
/// `records.len()`. Empty input yields empty output.
pub fn compute_binning(records: &[OccurrenceRecord]) -> Vec<BinRecord> {
    let counts: Vec<u64> = records.iter().map(|r| r.count).collect();
    count_runs(&counts).into_iter().map(|(count, origins)| BinRecord { count, origins }).collect()
}

/// Apply the sentinel policy, returning the ids to aggregate.
pub fn apply_sentinel_policy(ids: &[OriginId], policy: SentinelPolicy) -> Vec<OriginId> {
    match policy {
        SentinelPolicy::KeepAll => ids.to_vec(),
        SentinelPolicy::FilterZero => {
            ids.iter().copied().filter(|&id| id != NO_PROVENANCE).collect()
        }
    }
}
