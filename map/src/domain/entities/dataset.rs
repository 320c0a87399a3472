//! Dataset domain entities
//!
//! Identifiers for store feeds and what a fetch hands back.

use chrono::{DateTime, Utc};

use crate::error::DatasetError;

/// Identifier selecting one store feed, e.g. `duplicate` or `maimai`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatasetId(String);

impl DatasetId {
    pub fn new(id: &str) -> Result<Self, DatasetError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(DatasetError::Empty);
        }
        if id.starts_with('.') || id.contains(['/', '\\', '?', '#']) {
            return Err(DatasetError::InvalidCharacters(id.to_string()));
        }
        Ok(Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the feed, relative to the feed base
    pub fn file_name(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl std::fmt::Display for DatasetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for DatasetId {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Raw result of fetching a feed, before the body is decoded
#[derive(Debug, Clone)]
pub struct FetchedFeed {
    pub dataset: DatasetId,
    /// Value of the `Last-Modified` header (or file mtime), unparsed
    pub last_modified: Option<String>,
    pub body: String,
}

/// Feed freshness derived from `Last-Modified`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedMetadata {
    pub last_modified: Option<DateTime<Utc>>,
}

impl FeedMetadata {
    /// Parse an HTTP date (`Wed, 01 Jan 2025 03:04:05 GMT`) or RFC 3339 timestamp
    pub fn from_header(value: Option<&str>) -> Self {
        let last_modified = value.map(str::trim).and_then(|v| {
            DateTime::parse_from_rfc2822(v)
                .or_else(|_| DateTime::parse_from_rfc3339(v))
                .ok()
                .map(|dt| dt.with_timezone(&Utc))
        });

        if last_modified.is_none() {
            if let Some(v) = value {
                tracing::debug!("Unparseable Last-Modified value: {:?}", v);
            }
        }

        Self { last_modified }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn dataset_id_accepts_plain_names() {
        let id = DatasetId::new("duplicate").unwrap();
        assert_eq!(id.as_str(), "duplicate");
        assert_eq!(id.file_name(), "duplicate.json");
    }

    #[test]
    fn dataset_id_trims_whitespace() {
        assert_eq!(DatasetId::new(" maimai ").unwrap().as_str(), "maimai");
    }

    #[test]
    fn dataset_id_rejects_empty() {
        assert_eq!(DatasetId::new(""), Err(DatasetError::Empty));
        assert_eq!(DatasetId::new("   "), Err(DatasetError::Empty));
    }

    #[test]
    fn dataset_id_rejects_path_escapes() {
        for bad in ["../secrets", "a/b", "a\\b", ".hidden", "x?y", "x#y"] {
            assert!(
                matches!(DatasetId::new(bad), Err(DatasetError::InvalidCharacters(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn metadata_parses_http_date() {
        let meta = FeedMetadata::from_header(Some("Wed, 01 Jan 2025 03:04:05 GMT"));
        assert_eq!(
            meta.last_modified,
            Some(Utc.with_ymd_and_hms(2025, 1, 1, 3, 4, 5).unwrap())
        );
    }

    #[test]
    fn metadata_parses_rfc3339() {
        let meta = FeedMetadata::from_header(Some("2025-01-01T12:04:05+09:00"));
        assert_eq!(
            meta.last_modified,
            Some(Utc.with_ymd_and_hms(2025, 1, 1, 3, 4, 5).unwrap())
        );
    }

    #[test]
    fn metadata_missing_or_garbage_is_none() {
        assert_eq!(FeedMetadata::from_header(None).last_modified, None);
        assert_eq!(
            FeedMetadata::from_header(Some("yesterday")).last_modified,
            None
        );
    }
}
