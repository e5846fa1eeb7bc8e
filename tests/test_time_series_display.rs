use approx::assert_relative_eq;
use insardate::{
    axis_date_limits, compute_date_vectors, linear_velocity, select_display_dates, DateListReader,
    DateSelection,
};
use chrono::NaiveDate;
use std::io::Write;
use tempfile::NamedTempFile;

const ALL_DATES: [&str; 6] = [
    "20060105", "20060310", "20060520", "20060801", "20061015", "20070110",
];

#[test]
fn test_display_dates_with_exclude_file() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut exclude_file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(exclude_file, "060520").unwrap();
    exclude_file.flush().unwrap();

    let selection = DateSelection {
        min_date: Some("060201".to_string()),
        exclude: DateListReader::read_date_list_file(exclude_file.path()).unwrap(),
        zero_start: true,
        ..Default::default()
    };

    let shown = select_display_dates(&ALL_DATES, &selection).unwrap();
    assert_eq!(shown.dates, vec!["20060310", "20060801", "20061015", "20070110"]);
    assert_eq!(shown.reference_date.as_deref(), Some("20060310"));
    assert_eq!(shown.bounds, vec!["20060201"]);

    // axis window follows the min/max bounds when given
    let (_, bound_vector) = compute_date_vectors(&shown.bounds).unwrap();
    let (start, _) = axis_date_limits(&bound_vector).unwrap();
    assert_eq!(start, NaiveDate::from_ymd_opt(2005, 10, 1).unwrap());
}

#[test]
fn test_linear_velocity_over_display_dates() {
    let (_, datevector) = compute_date_vectors(&ALL_DATES).unwrap();

    // 3 cm/yr subsidence starting at the first epoch
    let displacement: Vec<f64> = datevector
        .iter()
        .map(|t| -3.0 * (t - datevector[0]))
        .collect();

    let fit = linear_velocity(&datevector, &displacement).unwrap();
    assert_relative_eq!(fit.slope, -3.0, epsilon = 1e-9);
    assert_relative_eq!(fit.stderr, 0.0, epsilon = 1e-6);
}

#[test]
fn test_max_date_and_reference() {
    let selection = DateSelection {
        max_date: Some("20061231".to_string()),
        reference_date: Some("20060105".to_string()),
        ..Default::default()
    };
    let shown = select_display_dates(&ALL_DATES, &selection).unwrap();
    assert_eq!(shown.dates.len(), 5);
    assert_eq!(shown.excluded, vec!["20070110"]);
    assert_eq!(shown.reference_date.as_deref(), Some("20060105"));
}
