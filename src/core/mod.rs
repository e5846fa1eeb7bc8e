//! Date algebra for InSAR time series

pub mod datetime;
pub mod selection;
pub mod velocity;

// Re-export main functions
pub use datetime::{
    axis_date_limits, compute_date_vectors, compute_temporal_baseline, date_index,
    list_to_fractional_years, normalize_list_to_6digit, normalize_list_to_8digit,
    normalize_to_6digit, normalize_to_8digit, parse_date, sort_unique, to_fractional_years,
};
pub use selection::{select_display_dates, DateSelection, DisplayDates};
pub use velocity::{linear_velocity, LinearFit};
