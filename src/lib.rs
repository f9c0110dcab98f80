//! Split-cell provenance aggregation.
//!
//! Clipping and iso-surfacing filters tag every output cell with the id of
//! the input cell it descended from. This crate turns that origin-id
//! sequence into two grouped reports: how many fragments each input cell
//! split into, and how many cells split into exactly K fragments.
#![deny(missing_docs)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro, clippy::large_enum_variant)]

pub mod group;
pub mod ingest;
pub mod pipeline;
pub mod provenance;
pub mod report;

/// Returns the crate version string from Cargo metadata.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
