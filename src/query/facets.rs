use crate::models::Listing;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Values available to the filter controls for a snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facets {
    pub rental_types: Vec<String>,
    pub locations: Vec<String>,
    pub price_range: Option<PriceRange>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl Facets {
    pub fn from_listings(listings: &[Listing]) -> Self {
        let rental_types: BTreeSet<&str> = listings.iter().map(|l| l.rental_type.as_str()).collect();
        let locations: BTreeSet<&str> = listings.iter().map(|l| l.location.as_str()).collect();

        let price_range = listings.iter().map(|l| l.price).fold(None, |range, price| {
            Some(match range {
                None => PriceRange {
                    min: price,
                    max: price,
                },
                Some(PriceRange { min, max }) => PriceRange {
                    min: min.min(price),
                    max: max.max(price),
                },
            })
        });

        Self {
            rental_types: rental_types.into_iter().map(str::to_string).collect(),
            locations: locations.into_iter().map(str::to_string).collect(),
            price_range,
        }
    }
}
