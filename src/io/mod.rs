//! File output helpers.

/// CSV export for the monthly cost series.
pub mod export;
