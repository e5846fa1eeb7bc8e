//! insardate: acquisition date utilities for InSAR time-series analysis
//!
//! Normalizes 6 and 8 digit SAR acquisition dates, gathers the unique dates
//! referenced by interferogram stacks and derives the temporal quantities a
//! time-series viewer needs: temporal baselines, fractional-year vectors,
//! axis windows, display date selection and linear velocity.

pub mod types;
pub mod io;
pub mod core;

#[cfg(feature = "python")]
mod python;

// Re-export main types and functions for easier access
pub use types::{
    DateString, DateList, TemporalBaseline, DateIndex, PairKind, PairRecord,
    DateError, DateResult, DATE12_ATTRIBUTE,
};

pub use io::{DateListReader, PairArchive, PairCollection, PairDateReader};

pub use crate::core::{
    normalize_to_8digit, normalize_list_to_8digit, normalize_to_6digit, normalize_list_to_6digit,
    to_fractional_years, list_to_fractional_years, sort_unique, compute_temporal_baseline,
    compute_date_vectors, date_index, axis_date_limits, parse_date,
    select_display_dates, DateSelection, DisplayDates, linear_velocity, LinearFit,
};

/// Unique, sorted dates listed in a line-oriented date list file
pub fn load_date_list_from_source<P: AsRef<std::path::Path>>(path: P) -> DateResult<DateList> {
    DateListReader::read_date_list_file(path)
}

/// Unique, sorted dates referenced by the `DATE12` attributes of an archive's pairs
pub fn extract_date_list_from_pairs<A: PairArchive + ?Sized>(archive: &A) -> DateResult<DateList> {
    PairDateReader::extract_date_list(archive)
}
