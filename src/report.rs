//! CSV writers for the occurrence and binning reports.
//!
//! Two columns separated by `", "`, matching the original trial output.
//! The observed drivers disagreed on whether the occurrence file carries a
//! header row and a constant third label column, so both are configuration
//! on one format rather than two distinct formats. The binning file is
//! headerless two-column in every observed variant and stays so.
//!
//! Errors are bubbled up from the filesystem.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::provenance::{BinRecord, OccurrenceRecord};

/// Occurrence-report formatting options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportCfg {
    /// Write the `cellid, occur[, app]` header row.
    pub header: bool,
    /// Constant descriptive label appended as a third column to every row.
    pub label: Option<String>,
}

impl Default for ReportCfg {
    fn default() -> Self {
        Self { header: true, label: None }
    }
}

/// Write the occurrence report: `origin, count[, label]` per row, ascending
/// origin order as produced by the aggregator.
///
/// Creates or overwrites `path`.
pub fn write_occurrences(
    path: &Path,
    records: &[OccurrenceRecord],
    cfg: &ReportCfg,
) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    if cfg.header {
        match &cfg.label {
            Some(_) => writeln!(file, "cellid, occur, app")?,
            None => writeln!(file, "cellid, occur")?,
        }
    }
    for r in records {
        match &cfg.label {
            Some(label) => writeln!(file, "{}, {}, {}", r.origin, r.count, label)?,
            None => writeln!(file, "{}, {}", r.origin, r.count)?,
        }
    }
    Ok(())
}

/// Write the binning report: `count, origins` per row, no header.
///
/// Creates or overwrites `path`.
pub fn write_binning(path: &Path, bins: &[BinRecord]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    for b in bins {
        writeln!(file, "{}, {}", b.count, b.origins)?;
    }
    Ok(())
}
