use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

/// Acquisition date token, `YYYYMMDD` or abbreviated `YYMMDD`
pub type DateString = String;

/// Unique, ascending list of 8-digit acquisition dates
pub type DateList = Vec<DateString>;

/// Days since the first acquisition, keyed by date
pub type TemporalBaseline = BTreeMap<DateString, i64>;

/// Position of each date inside its date list
pub type DateIndex = BTreeMap<DateString, usize>;

/// Attribute holding the `DATE1-DATE2` pair of a pairwise record
pub const DATE12_ATTRIBUTE: &str = "DATE12";

/// Kinds of pairwise record groups that carry a date pair per record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairKind {
    /// Unwrapped interferograms
    Interferograms,
    /// Spatial coherence
    Coherence,
    /// Wrapped phase
    Wrapped,
}

impl PairKind {
    /// Group name used by the archive for this kind
    pub fn group_name(&self) -> &'static str {
        match self {
            PairKind::Interferograms => "interferograms",
            PairKind::Coherence => "coherence",
            PairKind::Wrapped => "wrapped",
        }
    }

    /// Map an archive group name back to its kind
    pub fn from_group_name(name: &str) -> Option<Self> {
        match name {
            "interferograms" => Some(PairKind::Interferograms),
            "coherence" => Some(PairKind::Coherence),
            "wrapped" => Some(PairKind::Wrapped),
            _ => None,
        }
    }
}

impl std::fmt::Display for PairKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.group_name())
    }
}

/// One pairwise record: its name inside the group and its string attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PairRecord {
    pub name: String,
    pub attributes: HashMap<String, String>,
}

impl PairRecord {
    /// Record with only a `DATE12` attribute set
    pub fn with_date12(name: impl Into<String>, date12: impl Into<String>) -> Self {
        let mut attributes = HashMap::new();
        attributes.insert(DATE12_ATTRIBUTE.to_string(), date12.into());
        Self {
            name: name.into(),
            attributes,
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Error types for date handling
#[derive(Debug, thiserror::Error)]
pub enum DateError {
    #[error("Invalid input kind: {0}")]
    InvalidInputKind(String),

    #[error("Cannot parse date '{token}': {reason}")]
    DateParse { token: String, reason: String },

    #[error("Date source unavailable: {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported record kind: {0} (only interferograms / coherence / wrapped are supported)")]
    UnsupportedRecordKind(String),

    #[error("Malformed attribute in record '{record}': {reason}")]
    MalformedAttribute { record: String, reason: String },

    #[error("Empty input: {0} requires at least one date")]
    EmptyInput(String),

    #[error("Reference date {0} is not included in the date list")]
    ReferenceDateNotIncluded(String),

    #[error("Regression error: {0}")]
    Regression(String),
}

impl DateError {
    pub(crate) fn parse(token: &str, reason: impl Into<String>) -> Self {
        DateError::DateParse {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for date operations
pub type DateResult<T> = Result<T, DateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_kind_group_names() {
        for kind in [PairKind::Interferograms, PairKind::Coherence, PairKind::Wrapped] {
            assert_eq!(PairKind::from_group_name(kind.group_name()), Some(kind));
        }
        assert_eq!(PairKind::from_group_name("timeseries"), None);
        assert_eq!(PairKind::Coherence.to_string(), "coherence");
    }

    #[test]
    fn test_record_with_date12() {
        let record = PairRecord::with_date12("filt_060101-060201", "060101-060201");
        assert_eq!(record.attribute(DATE12_ATTRIBUTE), Some("060101-060201"));
        assert_eq!(record.attribute("WIDTH"), None);
    }
}
