use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Highest rating a listing can carry
pub const MAX_RATING: f64 = 5.0;

/// Core rental listing data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub location: String,
    pub rental_type: String,
    pub price: f64,
    pub min_price: f64,
    pub rating: f64,
    pub available_rooms: u32,
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Listing record as it arrives from a store, before validation.
///
/// Every field is optional and stores hand over one JSON value per record, so
/// a malformed record is rejected on its own instead of failing the batch.
/// See [`Listing::try_from`] for what makes a record usable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListing {
    pub id: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub rental_type: Option<String>,
    pub price: Option<f64>,
    pub min_price: Option<f64>,
    pub rating: Option<f64>,
    pub available_rooms: Option<u32>,
    pub images: Option<Vec<String>>,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Why a raw record was not accepted as a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Missing(&'static str),
    Blank(&'static str),
    OutOfRange(&'static str),
    /// The record did not decode, e.g. a string where a number belongs
    Malformed(String),
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::Missing(field) => write!(f, "missing field `{field}`"),
            Rejection::Blank(field) => write!(f, "blank field `{field}`"),
            Rejection::OutOfRange(field) => write!(f, "field `{field}` out of range"),
            Rejection::Malformed(reason) => write!(f, "malformed record: {reason}"),
        }
    }
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, Rejection> {
    value.ok_or(Rejection::Missing(field))
}

fn non_blank(value: Option<String>, field: &'static str) -> Result<String, Rejection> {
    let value = required(value, field)?;
    if value.trim().is_empty() {
        return Err(Rejection::Blank(field));
    }
    Ok(value)
}

fn amount(value: Option<f64>, field: &'static str) -> Result<f64, Rejection> {
    let value = required(value, field)?;
    if !value.is_finite() || value < 0.0 {
        return Err(Rejection::OutOfRange(field));
    }
    Ok(value)
}

impl TryFrom<RawListing> for Listing {
    type Error = Rejection;

    fn try_from(raw: RawListing) -> Result<Self, Self::Error> {
        let rating = required(raw.rating, "rating")?;
        if !(0.0..=MAX_RATING).contains(&rating) {
            return Err(Rejection::OutOfRange("rating"));
        }

        let images = required(raw.images, "images")?;
        if images.is_empty() {
            return Err(Rejection::Blank("images"));
        }

        Ok(Listing {
            id: non_blank(raw.id, "id")?,
            title: non_blank(raw.title, "title")?,
            location: non_blank(raw.location, "location")?,
            rental_type: non_blank(raw.rental_type, "rentalType")?,
            price: amount(raw.price, "price")?,
            min_price: amount(raw.min_price, "minPrice")?,
            rating,
            available_rooms: required(raw.available_rooms, "availableRooms")?,
            images,
            description: raw.description,
            created_at: raw.created_at,
        })
    }
}

/// Validated listings from one fetch of a store.
///
/// A snapshot is never mutated after it is built; queries borrow it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSnapshot {
    pub listings: Vec<Listing>,
    pub source: String,
    pub fetched_at: DateTime<Utc>,
    pub rejected: usize,
}

impl RawListing {
    /// Decode one store record, turning type mismatches into a rejection
    pub fn from_value(value: serde_json::Value) -> Result<Self, Rejection> {
        serde_json::from_value(value).map_err(|e| Rejection::Malformed(e.to_string()))
    }
}

impl ListingSnapshot {
    /// Validate raw records, keeping source order and counting the rejects
    pub fn from_raw(source: impl Into<String>, raw: Vec<RawListing>) -> Self {
        Self::build(source.into(), raw.into_iter().map(Ok))
    }

    /// Decode and validate JSON records one by one
    pub fn from_json(source: impl Into<String>, records: Vec<serde_json::Value>) -> Self {
        Self::build(source.into(), records.into_iter().map(RawListing::from_value))
    }

    fn build(source: String, records: impl Iterator<Item = Result<RawListing, Rejection>>) -> Self {
        let mut listings = Vec::new();
        let mut rejected = 0;

        for (index, record) in records.enumerate() {
            let id = record.as_ref().ok().and_then(|r| r.id.clone());
            match record.and_then(Listing::try_from) {
                Ok(listing) => listings.push(listing),
                Err(reason) => {
                    debug!(%source, index, ?id, %reason, "dropping invalid listing");
                    rejected += 1;
                }
            }
        }

        Self {
            listings,
            source,
            fetched_at: Utc::now(),
            rejected,
        }
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
