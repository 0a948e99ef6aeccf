use crate::models::RawListing;
use crate::sources::traits::ListingSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

/// Built-in dataset used when no store is configured
#[derive(Debug, Default)]
pub struct SampleSource;

impl SampleSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ListingSource for SampleSource {
    async fn fetch(&self) -> Result<Vec<Value>> {
        info!("📋 Using built-in sample listings");
        sample_listings()
            .into_iter()
            .map(|record| serde_json::to_value(record).context("Failed to encode sample listing"))
            .collect()
    }

    fn source_name(&self) -> &'static str {
        "sample"
    }
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    title: &str,
    location: &str,
    rental_type: &str,
    price: f64,
    min_price: f64,
    rating: f64,
    available_rooms: u32,
    description: &str,
) -> RawListing {
    RawListing {
        id: Some(id.to_string()),
        title: Some(title.to_string()),
        location: Some(location.to_string()),
        rental_type: Some(rental_type.to_string()),
        price: Some(price),
        min_price: Some(min_price),
        rating: Some(rating),
        available_rooms: Some(available_rooms),
        images: Some(vec![
            format!("/images/{id}/cover.jpg"),
            format!("/images/{id}/interior.jpg"),
        ]),
        description: Some(description.to_string()),
        created_at: None,
    }
}

fn sample_listings() -> Vec<RawListing> {
    vec![
        record(
            "apt-101",
            "Sunny Studio near the Park",
            "Brooklyn, New York",
            "Studio",
            1800.0,
            1650.0,
            4.6,
            1,
            "Bright studio with park views. Laundry in building.",
        ),
        record(
            "apt-102",
            "Harbor View Condo",
            "Boston, Massachusetts",
            "Condo",
            2750.0,
            2500.0,
            4.8,
            2,
            "Two bedroom condo on the waterfront. Parking included.",
        ),
        record(
            "apt-103",
            "Cozy Garden Apartment",
            "Portland, Oregon",
            "Apartment",
            1500.0,
            1400.0,
            4.2,
            1,
            "Ground floor apartment with a shared garden.",
        ),
        record(
            "apt-104",
            "Industrial Loft",
            "Chicago, Illinois",
            "Loft",
            2200.0,
            2100.0,
            4.4,
            1,
            "Open plan loft with exposed brick and high ceilings.",
        ),
        record(
            "apt-105",
            "Family House with Yard",
            "Austin, Texas",
            "House",
            3200.0,
            3000.0,
            4.7,
            3,
            "Three bedroom house with a fenced yard. Pets allowed.",
        ),
        record(
            "apt-106",
            "Downtown Studio",
            "Chicago, Illinois",
            "Studio",
            1500.0,
            1450.0,
            3.9,
            1,
            "Compact studio a short walk from the train.",
        ),
        record(
            "apt-107",
            "Modern Condo with Gym",
            "Austin, Texas",
            "Condo",
            2100.0,
            1950.0,
            4.5,
            2,
            "Condo in a building with gym and rooftop pool.",
        ),
        record(
            "apt-108",
            "Brownstone Apartment",
            "Brooklyn, New York",
            "Apartment",
            2600.0,
            2400.0,
            4.3,
            2,
            "Top floor of a restored brownstone.",
        ),
    ]
}
