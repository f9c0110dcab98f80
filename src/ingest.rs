//! Ingestion of VisIt-exported legacy VTK text dumps.
//!
//! VisIt records provenance in an `avtOriginalCellNumbers` cell array. In
//! the ASCII dump the array appears after a marker line naming it; data
//! lines then carry whitespace-separated `(domain, cell_id)` integer pairs,
//! of which only the cell-id half is provenance. Malformed data lines are
//! skipped and counted, never silently dropped.
//!
//! Zero cell ids mean "no provenance recorded" in this format; they are
//! kept here and dropped downstream under `SentinelPolicy::FilterZero`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::provenance::OriginId;

/// Marker naming the provenance array in VisIt dumps.
pub const VISIT_MARKER: &str = "avtOriginalCellNumbers";

/// Errors from reading a provenance dump.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// Wrapper for standard I/O errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The marker line was never found
    #[error("marker {0:?} not found")]
    MarkerNotFound(String),
}

/// Origin ids recovered from a dump, plus a skipped-line tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestResult {
    /// One origin id per `(domain, cell_id)` pair, in file order.
    pub ids: Vec<OriginId>,
    /// Data lines dropped because they did not parse as integer pairs.
    pub skipped_lines: usize,
}

/// Read origin ids from the `avtOriginalCellNumbers` section of `path`.
pub fn read_visit_dump(path: &Path) -> Result<IngestResult, IngestError> {
    read_dump_with_marker(path, VISIT_MARKER)
}

/// Read origin ids from the section following `marker` in `path`.
///
/// Lines up to and including the first line containing `marker` are
/// ignored. Each later line is split on whitespace; an even number of
/// tokens that all parse as unsigned integers contributes the second value
/// of each pair as an origin id. Blank lines are ignored; any other line is
/// counted in `skipped_lines` and parsing continues.
pub fn read_dump_with_marker(path: &Path, marker: &str) -> Result<IngestResult, IngestError> {
    let reader = BufReader::new(File::open(path)?);
    let mut in_section = false;
    let mut ids: Vec<OriginId> = Vec::new();
    let mut skipped = 0usize;
    for line in reader.lines() {
        let line = line?;
        if !in_section {
            if line.contains(marker) {
                in_section = true;
            }
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        match parse_pairs(&tokens) {
            Some(pair_ids) => ids.extend(pair_ids),
            None => skipped += 1,
        }
    }
    if !in_section {
        return Err(IngestError::MarkerNotFound(marker.to_string()));
    }
    Ok(IngestResult { ids, skipped_lines: skipped })
}

/// Parse one data line's tokens as `(domain, cell_id)` pairs, keeping the
/// cell ids. Returns `None` if the token count is odd or any token is not
/// an unsigned integer.
fn parse_pairs(tokens: &[&str]) -> Option<Vec<OriginId>> {
    if tokens.len() % 2 != 0 {
        return None;
    }
    let mut out = Vec::with_capacity(tokens.len() / 2);
    for pair in tokens.chunks(2) {
        let _domain: u64 = pair[0].parse().ok()?;
        let cell_id: OriginId = pair[1].parse().ok()?;
        out.push(cell_id);
    }
    Some(out)
}
