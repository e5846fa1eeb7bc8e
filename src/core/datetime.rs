use crate::types::{DateError, DateIndex, DateList, DateResult, TemporalBaseline};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

/// Year length used for day-of-year fractional years (regression abscissa)
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Expand an abbreviated `YYMMDD` date to `YYYYMMDD`
///
/// Years starting with `9` go to the 1990s, all others to the 2000s.
/// Anything that is not 6 characters long is returned unchanged.
pub fn normalize_to_8digit(date: &str) -> String {
    if date.chars().count() == 6 {
        let century = if date.starts_with('9') { "19" } else { "20" };
        format!("{}{}", century, date)
    } else {
        date.to_string()
    }
}

/// [`normalize_to_8digit`] applied to every date, order preserved
pub fn normalize_list_to_8digit<S: AsRef<str>>(dates: &[S]) -> DateList {
    dates.iter().map(|d| normalize_to_8digit(d.as_ref())).collect()
}

/// Strip the century from a `YYYYMMDD` date
///
/// Anything that is not 8 characters long is returned unchanged.
pub fn normalize_to_6digit(date: &str) -> String {
    if date.chars().count() == 8 {
        date.chars().skip(2).collect()
    } else {
        date.to_string()
    }
}

/// [`normalize_to_6digit`] applied to every date, order preserved
pub fn normalize_list_to_6digit<S: AsRef<str>>(dates: &[S]) -> Vec<String> {
    dates.iter().map(|d| normalize_to_6digit(d.as_ref())).collect()
}

/// Parse a `YYYYMMDD` token into a calendar date
pub fn parse_date(date: &str) -> DateResult<NaiveDate> {
    if date.len() != 8 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::parse(date, "expected 8 digits in YYYYMMDD form"));
    }
    NaiveDate::parse_from_str(date, "%Y%m%d").map_err(|e| DateError::parse(date, e.to_string()))
}

/// Fractional year from day of year: `year + (doy - 1) / 365.25`
pub fn to_fractional_years(date: &str) -> DateResult<f64> {
    let d = parse_date(date)?;
    Ok(d.year() as f64 + d.ordinal0() as f64 / DAYS_PER_YEAR)
}

pub fn list_to_fractional_years<S: AsRef<str>>(dates: &[S]) -> DateResult<Vec<f64>> {
    dates.iter().map(|d| to_fractional_years(d.as_ref())).collect()
}

/// Deduplicated, ascending copy of a date list
pub fn sort_unique<S: AsRef<str>>(dates: &[S]) -> DateList {
    let unique: BTreeSet<&str> = dates.iter().map(|d| d.as_ref()).collect();
    if unique.len() < dates.len() {
        log::debug!("Collapsed {} duplicate dates", dates.len() - unique.len());
    }
    unique.into_iter().map(str::to_string).collect()
}

/// Temporal baseline in days with respect to the first date
///
/// Returns the day counts in list order together with the same values keyed
/// by date. The list is expected to be a sorted [`DateList`]; dates before the
/// first one come out negative.
pub fn compute_temporal_baseline<S: AsRef<str>>(
    dates: &[S],
) -> DateResult<(Vec<i64>, TemporalBaseline)> {
    let first = dates
        .first()
        .ok_or_else(|| DateError::EmptyInput("temporal baseline".to_string()))?;
    let reference = parse_date(first.as_ref())?;

    let mut tbase = Vec::with_capacity(dates.len());
    let mut by_date = TemporalBaseline::new();
    for date in dates {
        let date = date.as_ref();
        let days = (parse_date(date)? - reference).num_days();
        if days < 0 {
            log::warn!("Date {} precedes first date {}; date list is not sorted", date, first.as_ref());
        }
        tbase.push(days);
        by_date.insert(date.to_string(), days);
    }

    log::debug!(
        "Temporal baseline over {} dates spans {} days",
        dates.len(),
        tbase.last().copied().unwrap_or(0)
    );
    Ok((tbase, by_date))
}

/// Calendar dates plus the axis fractional year of each date
///
/// The axis value is `year + (month - 1) / 12 + (day - 1) / 365`, which is not
/// the same as [`to_fractional_years`]. Plot axes were laid out with this one.
pub fn compute_date_vectors<S: AsRef<str>>(dates: &[S]) -> DateResult<(Vec<NaiveDate>, Vec<f64>)> {
    let calendar = dates
        .iter()
        .map(|d| parse_date(d.as_ref()))
        .collect::<DateResult<Vec<_>>>()?;

    let vector = calendar
        .iter()
        .map(|d| d.year() as f64 + d.month0() as f64 / 12.0 + d.day0() as f64 / 365.0)
        .collect();

    Ok((calendar, vector))
}

/// Position of every date in the list
pub fn date_index<S: AsRef<str>>(dates: &[S]) -> DateIndex {
    dates
        .iter()
        .enumerate()
        .map(|(i, d)| (d.as_ref().to_string(), i))
        .collect()
}

/// X-axis window for a time-series plot
///
/// Takes the first and last entries of an axis date vector (see
/// [`compute_date_vectors`]), pads them by 0.2 year before and 0.3 year after,
/// and snaps both to the first day of their month.
pub fn axis_date_limits(datevector: &[f64]) -> DateResult<(NaiveDate, NaiveDate)> {
    let (first, last) = match (datevector.first(), datevector.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Err(DateError::EmptyInput("axis date limits".to_string())),
    };

    let start = month_start(first - 0.2)?;
    let end = month_start(last + 0.3)?;
    log::debug!("Axis date limits: {} to {}", start, end);
    Ok((start, end))
}

fn month_start(years: f64) -> DateResult<NaiveDate> {
    if !years.is_finite() {
        return Err(DateError::parse(&years.to_string(), "not a finite fractional year"));
    }
    let out_of_range = || DateError::parse(&years.to_string(), "outside the supported calendar range");
    if years < NaiveDate::MIN.year() as f64 || years > NaiveDate::MAX.year() as f64 {
        return Err(out_of_range());
    }

    // truncation, not floor
    let mut year = years as i32;
    let mut month = ((years - year as f64) * 12.0) as i32;
    if month > 12 {
        year += 1;
        month = 1;
    }
    if month < 1 {
        year -= 1;
        month = 12;
    }

    NaiveDate::from_ymd_opt(year, month as u32, 1).ok_or_else(out_of_range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_century_rule() {
        assert_eq!(normalize_to_8digit("990101"), "19990101");
        assert_eq!(normalize_to_8digit("010101"), "20010101");
        assert_eq!(normalize_to_8digit("891231"), "20891231");
        assert_eq!(normalize_to_8digit("20060101"), "20060101");
        assert_eq!(normalize_to_8digit("0601"), "0601");
    }

    #[test]
    fn test_truncate_scalar_uses_own_argument() {
        assert_eq!(normalize_to_6digit("20060101"), "060101");
        assert_eq!(normalize_to_6digit("19991231"), "991231");
        assert_eq!(normalize_to_6digit("060101"), "060101");
    }

    #[test]
    fn test_list_normalization_preserves_order() {
        let dates = ["070101", "19990505", "960101"];
        assert_eq!(
            normalize_list_to_8digit(&dates),
            vec!["20070101", "19990505", "19960101"]
        );
        assert_eq!(
            normalize_list_to_6digit(&normalize_list_to_8digit(&dates)),
            vec!["070101", "990505", "960101"]
        );
    }

    #[test]
    fn test_parse_date_rejects_bad_tokens() {
        assert!(parse_date("20060101").is_ok());
        assert!(matches!(parse_date("060101"), Err(DateError::DateParse { .. })));
        assert!(matches!(parse_date("20060230"), Err(DateError::DateParse { .. })));
        assert!(matches!(parse_date("2006011"), Err(DateError::DateParse { .. })));
        assert!(matches!(parse_date("2006-1-1"), Err(DateError::DateParse { .. })));
    }

    #[test]
    fn test_fractional_years_day_of_year() {
        assert_relative_eq!(to_fractional_years("20060101").unwrap(), 2006.0);
        assert_relative_eq!(
            to_fractional_years("20060701").unwrap(),
            2006.0 + 181.0 / 365.25
        );
        // leap year day 366
        assert_relative_eq!(
            to_fractional_years("20081231").unwrap(),
            2008.0 + 365.0 / 365.25
        );
        let years = list_to_fractional_years(&["20060101", "20070101"]).unwrap();
        assert_eq!(years.len(), 2);
        assert!(list_to_fractional_years(&["20060101", "bogus"]).is_err());
    }

    #[test]
    fn test_date_vectors_use_month_formula() {
        let (dates, vector) = compute_date_vectors(&["20060701"]).unwrap();
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2006, 7, 1).unwrap());
        assert_relative_eq!(vector[0], 2006.5);
        assert!((vector[0] - to_fractional_years("20060701").unwrap()).abs() > 1e-3);

        let (dates, vector) = compute_date_vectors::<&str>(&[]).unwrap();
        assert!(dates.is_empty() && vector.is_empty());
    }

    #[test]
    fn test_baseline_requires_dates() {
        assert!(matches!(
            compute_temporal_baseline::<&str>(&[]),
            Err(DateError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_date_index() {
        let index = date_index(&["20060101", "20060201"]);
        assert_eq!(index["20060101"], 0);
        assert_eq!(index["20060201"], 1);
    }

    #[test]
    fn test_axis_limits_roll_back_to_december() {
        let (start, end) = axis_date_limits(&[2006.25, 2007.0]).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2005, 12, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2007, 3, 1).unwrap());
        assert!(axis_date_limits(&[]).is_err());
        assert!(axis_date_limits(&[f64::NAN]).is_err());
    }

    #[test]
    fn test_axis_limits_reject_years_beyond_calendar() {
        for years in [1e12, -1e12, f64::MAX, NaiveDate::MAX.year() as f64 + 0.5] {
            assert!(
                matches!(axis_date_limits(&[years]), Err(DateError::DateParse { .. })),
                "accepted {}",
                years
            );
        }
    }

    #[test]
    fn test_unsorted_baseline_goes_negative() {
        let (tbase, _) = compute_temporal_baseline(&["20060301", "20060101"]).unwrap();
        assert_eq!(tbase, vec![0, -59]);
    }
}
