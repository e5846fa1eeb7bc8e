use crate::core::datetime::{normalize_to_8digit, parse_date, sort_unique};
use crate::types::{DateError, DateList, DateResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Pattern of a single date token as written in date list files
pub const DATE_TOKEN_PATTERN: &str = r"^(\d{6}|\d{8})$";

pub(crate) static DATE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(DATE_TOKEN_PATTERN).expect("date token pattern is a valid regex"));

/// Reader for plain-text date lists, one acquisition date per line
pub struct DateListReader;

impl DateListReader {
    /// Read a date list file
    pub fn read_date_list_file<P: AsRef<Path>>(path: P) -> DateResult<DateList> {
        log::info!("Reading date list: {}", path.as_ref().display());

        let content = fs::read_to_string(&path).map_err(|e| DateError::SourceUnavailable {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;

        Self::parse_date_list(&content)
    }

    /// Parse date list content
    ///
    /// Blank lines are skipped. Every other line must be a 6 or 8 digit date;
    /// the result is normalized to 8 digits, sorted and deduplicated.
    pub fn parse_date_list(content: &str) -> DateResult<DateList> {
        let mut dates = Vec::new();
        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if !DATE_TOKEN.is_match(line) {
                return Err(DateError::parse(
                    line,
                    format!("line {} is not a 6 or 8 digit date", line_no + 1),
                ));
            }

            let date = normalize_to_8digit(line);
            parse_date(&date)?;
            dates.push(date);
        }

        let date_list = sort_unique(&dates);
        if date_list.len() < dates.len() {
            log::warn!(
                "Date list contains {} duplicate entries",
                dates.len() - date_list.len()
            );
        }
        log::debug!("Read {} dates", date_list.len());
        Ok(date_list)
    }
}
