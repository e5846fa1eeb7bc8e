use crate::core::datetime::{normalize_list_to_8digit, normalize_to_8digit, to_fractional_years};
use crate::types::{DateError, DateList, DateResult};
use serde::{Deserialize, Serialize};

/// Which acquisitions to show in a displacement time series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateSelection {
    /// Earliest date to keep (6 or 8 digits)
    pub min_date: Option<String>,
    /// Latest date to keep (6 or 8 digits)
    pub max_date: Option<String>,
    /// Dates dropped from display
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Date whose displacement is subtracted from every epoch
    pub reference_date: Option<String>,
    /// Use the first displayed date as reference when none is given
    #[serde(default)]
    pub zero_start: bool,
}

/// Outcome of applying a [`DateSelection`] to the available dates
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayDates {
    pub dates: DateList,
    pub excluded: Vec<String>,
    pub reference_date: Option<String>,
    /// Sorted min/max dates that were given, used for the axis window
    pub bounds: DateList,
}

/// Apply a selection to the dates available in a time series
pub fn select_display_dates<S: AsRef<str>>(
    all_dates: &[S],
    selection: &DateSelection,
) -> DateResult<DisplayDates> {
    let mut excluded = normalize_list_to_8digit(&selection.exclude);
    let mut bounds = DateList::new();

    if let Some(min_date) = &selection.min_date {
        let min_date = normalize_to_8digit(min_date);
        let min_years = to_fractional_years(&min_date)?;
        log::info!("Minimum date: {}", min_date);
        for date in all_dates {
            if to_fractional_years(date.as_ref())? < min_years {
                excluded.push(date.as_ref().to_string());
            }
        }
        bounds.push(min_date);
    }

    if let Some(max_date) = &selection.max_date {
        let max_date = normalize_to_8digit(max_date);
        let max_years = to_fractional_years(&max_date)?;
        log::info!("Maximum date: {}", max_date);
        for date in all_dates {
            if to_fractional_years(date.as_ref())? > max_years {
                excluded.push(date.as_ref().to_string());
            }
        }
        bounds.push(max_date);
    }
    bounds.sort();

    let dates: DateList = all_dates
        .iter()
        .map(|d| d.as_ref().to_string())
        .filter(|d| !excluded.contains(d))
        .collect();

    for date in &excluded {
        if !all_dates.iter().any(|d| d.as_ref() == date) {
            log::warn!("Excluded date {} is not in the time series", date);
        }
    }

    if dates.is_empty() {
        return Err(DateError::EmptyInput("display date selection".to_string()));
    }

    let reference_date = match &selection.reference_date {
        Some(reference) => {
            let reference = normalize_to_8digit(reference);
            if !dates.contains(&reference) {
                return Err(DateError::ReferenceDateNotIncluded(reference));
            }
            Some(reference)
        }
        None if selection.zero_start => dates.first().cloned(),
        None => None,
    };

    log::debug!(
        "Showing {} of {} dates, reference {:?}",
        dates.len(),
        all_dates.len(),
        reference_date
    );

    Ok(DisplayDates {
        dates,
        excluded,
        reference_date,
        bounds,
    })
}
