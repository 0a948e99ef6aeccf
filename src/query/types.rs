use crate::error::QueryError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::str::FromStr;
use tracing::debug;

/// Page size used by the main listing view
pub const DEFAULT_PAGE_SIZE: i64 = 6;

/// Constraints narrowing a listing collection. Absent fields constrain nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Free text matched against title, location and rental type
    pub search: Option<String>,
    /// Substring of the listing location
    pub location: Option<String>,
    /// Inclusive lower bound on price
    #[serde(default, deserialize_with = "lenient_rent")]
    pub min_rent: Option<f64>,
    /// Inclusive upper bound on price
    #[serde(default, deserialize_with = "lenient_rent")]
    pub max_rent: Option<f64>,
    /// Exact rental category
    pub rental_type: Option<String>,
}

impl FilterSpec {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Accept a number or a numeric string; anything else means no bound
fn lenient_rent<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64().filter(|n| n.is_finite()),
        Some(Value::String(s)) => rent(&Some(s), "rent"),
        Some(other) => {
            debug!(value = %other, "ignoring non-numeric rent bound");
            None
        }
        None => None,
    })
}

/// Filter values exactly as a user typed them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFilterParams {
    pub search: Option<String>,
    pub location: Option<String>,
    pub min_rent: Option<String>,
    pub max_rent: Option<String>,
    pub rental_type: Option<String>,
}

impl RawFilterParams {
    /// Turn untrusted input into a [`FilterSpec`].
    ///
    /// Blank text and rent bounds that are not finite numbers are dropped.
    pub fn normalize(&self) -> FilterSpec {
        FilterSpec {
            search: text(&self.search),
            location: text(&self.location),
            min_rent: rent(&self.min_rent, "minRent"),
            max_rent: rent(&self.max_rent, "maxRent"),
            rental_type: text(&self.rental_type),
        }
    }
}

fn text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn rent(value: &Option<String>, field: &str) -> Option<f64> {
    let raw = text(value)?;
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => {
            debug!(field, value = %raw, "ignoring non-numeric rent bound");
            None
        }
    }
}

/// Field a result set can be ordered by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Price,
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "price" => Ok(SortKey::Price),
            _ => Err(QueryError::UnsupportedSortKey(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl FromStr for SortOrder {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascending" | "asc" => Ok(SortOrder::Ascending),
            "descending" | "desc" => Ok(SortOrder::Descending),
            _ => Err(QueryError::UnsupportedSortOrder(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    #[serde(default)]
    pub key: SortKey,
    #[serde(default)]
    pub order: SortOrder,
}

impl SortSpec {
    pub fn ascending() -> Self {
        Self {
            key: SortKey::Price,
            order: SortOrder::Ascending,
        }
    }

    pub fn descending() -> Self {
        Self {
            key: SortKey::Price,
            order: SortOrder::Descending,
        }
    }

    /// Build from the textual key and order a caller passed in
    pub fn parse(key: &str, order: &str) -> Result<Self, QueryError> {
        Ok(Self {
            key: key.parse()?,
            order: order.parse()?,
        })
    }
}

/// Which page of the result set to return.
///
/// Both fields are signed so out-of-range input can be clamped or rejected
/// instead of failing to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    #[serde(default)]
    pub page_index: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page_index: i64, page_size: i64) -> Self {
        Self {
            page_index,
            page_size,
        }
    }

    /// Page size as a slice length, or an error when it is not positive
    pub fn validated_size(&self) -> Result<usize, QueryError> {
        if self.page_size <= 0 {
            return Err(QueryError::InvalidPageSize(self.page_size));
        }
        usize::try_from(self.page_size).map_err(|_| QueryError::InvalidPageSize(self.page_size))
    }
}

/// One page of an ordered result set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    pub total_pages: usize,
    pub page_index: usize,
    pub page_size: usize,
    pub has_more: bool,
}

/// Filter, sort and page bundled into one request object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    pub filter: FilterSpec,
    #[serde(default)]
    pub sort: SortSpec,
    #[serde(default)]
    pub page: PageRequest,
}
