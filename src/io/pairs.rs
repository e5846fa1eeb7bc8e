use crate::core::datetime::{normalize_to_8digit, parse_date};
use crate::io::date_list::DATE_TOKEN;
use crate::types::{DateError, DateList, DateResult, PairKind, PairRecord, DATE12_ATTRIBUTE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Archive of pairwise records grouped by kind
///
/// Implemented by whatever holds the interferogram stack (an HDF5 file, a
/// directory of products, an in-memory collection). Only group names and
/// record attributes are needed here.
pub trait PairArchive {
    /// Top-level group names, in archive order
    fn group_names(&self) -> Vec<String>;

    /// All records stored under `group`
    fn pair_records(&self, group: &str) -> DateResult<Vec<PairRecord>>;
}

/// In-memory pair archive
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PairCollection {
    pub groups: Vec<(String, Vec<PairRecord>)>,
}

impl PairCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection with a single group of the given kind
    pub fn of_kind(kind: PairKind, records: Vec<PairRecord>) -> Self {
        Self {
            groups: vec![(kind.group_name().to_string(), records)],
        }
    }

    /// Add a group, replacing any group with the same name
    pub fn insert_group(&mut self, name: impl Into<String>, records: Vec<PairRecord>) {
        let name = name.into();
        match self.groups.iter_mut().find(|(g, _)| *g == name) {
            Some((_, existing)) => *existing = records,
            None => self.groups.push((name, records)),
        }
    }
}

impl PairArchive for PairCollection {
    fn group_names(&self) -> Vec<String> {
        self.groups.iter().map(|(name, _)| name.clone()).collect()
    }

    fn pair_records(&self, group: &str) -> DateResult<Vec<PairRecord>> {
        self.groups
            .iter()
            .find(|(name, _)| name == group)
            .map(|(_, records)| records.clone())
            .ok_or_else(|| DateError::UnsupportedRecordKind(group.to_string()))
    }
}

/// Pick the record group to read dates from
///
/// `interferograms` wins over `coherence`; otherwise the first group is
/// used, which must then be `wrapped` to be accepted.
pub fn resolve_pair_kind<A: PairArchive + ?Sized>(archive: &A) -> DateResult<PairKind> {
    let groups = archive.group_names();

    let group = if groups.iter().any(|g| g == PairKind::Interferograms.group_name()) {
        PairKind::Interferograms.group_name().to_string()
    } else if groups.iter().any(|g| g == PairKind::Coherence.group_name()) {
        PairKind::Coherence.group_name().to_string()
    } else {
        groups
            .first()
            .cloned()
            .ok_or_else(|| DateError::UnsupportedRecordKind("<no groups>".to_string()))?
    };

    PairKind::from_group_name(&group).ok_or(DateError::UnsupportedRecordKind(group))
}

/// Reader for acquisition dates referenced by pairwise records
pub struct PairDateReader;

impl PairDateReader {
    /// Unique, sorted acquisition dates referenced by the archive's pairs
    pub fn extract_date_list<A: PairArchive + ?Sized>(archive: &A) -> DateResult<DateList> {
        let kind = resolve_pair_kind(archive)?;
        log::info!("Reading date list from {} pairs", kind);

        let records = archive.pair_records(kind.group_name())?;

        let mut dates = BTreeSet::new();
        for record in &records {
            let (date1, date2) = Self::split_date12(record)?;
            dates.insert(date1);
            dates.insert(date2);
        }

        log::debug!(
            "Found {} acquisition dates in {} {} pairs",
            dates.len(),
            records.len(),
            kind
        );
        Ok(dates.into_iter().collect())
    }

    /// Both dates of a record's `DATE12` attribute, normalized to 8 digits
    pub fn record_dates(record: &PairRecord) -> DateResult<(String, String)> {
        Self::split_date12(record)
    }

    fn split_date12(record: &PairRecord) -> DateResult<(String, String)> {
        let malformed = |reason: String| DateError::MalformedAttribute {
            record: record.name.clone(),
            reason,
        };

        let date12 = record
            .attribute(DATE12_ATTRIBUTE)
            .ok_or_else(|| malformed(format!("missing {} attribute", DATE12_ATTRIBUTE)))?;

        let parts: Vec<&str> = date12.split('-').map(str::trim).collect();
        let (first, second) = match parts.as_slice() {
            [first, second] if DATE_TOKEN.is_match(first) && DATE_TOKEN.is_match(second) => (*first, *second),
            _ => {
                return Err(malformed(format!(
                    "{} '{}' is not DATE1-DATE2",
                    DATE12_ATTRIBUTE, date12
                )))
            }
        };

        let first = normalize_to_8digit(first);
        let second = normalize_to_8digit(second);
        for date in [&first, &second] {
            parse_date(date).map_err(|e| malformed(e.to_string()))?;
        }
        Ok((first, second))
    }
}
