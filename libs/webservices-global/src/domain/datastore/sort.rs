use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::application::error::UseCaseError;

#[cfg_attr(feature = "with-utoipa", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Resolve an optional raw `order` value; absent means ascending.
    pub fn resolve(raw: Option<&str>) -> Result<Self, UseCaseError> {
        raw.map_or(Ok(Self::Asc), str::parse)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Apply this direction to an ascending comparison.
    pub fn apply(self, ord: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            Self::Asc => ord,
            Self::Desc => ord.reverse(),
        }
    }
}

/// Comparable value of a sortable field, as stored inside a cursor.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Int(i64),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl From<i64> for SortKey {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<String> for SortKey {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for SortKey {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<DateTime<Utc>> for SortKey {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Timestamp(v)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = UseCaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(UseCaseError::bad_input_with_details(
                format!("unsupported sort order '{s}'"),
                json!({ "field": "order", "allowed": ["asc", "desc"] }),
            )),
        }
    }
}
