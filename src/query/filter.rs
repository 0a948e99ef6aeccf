use crate::models::Listing;
use crate::query::types::FilterSpec;

/// Build a predicate that accepts a listing only when every constraint in
/// `spec` holds.
///
/// Needles are lowercased once here; listing text is lowercased at most once
/// per listing, and only when a text constraint is present.
pub fn build_predicate(spec: &FilterSpec) -> impl Fn(&Listing) -> bool {
    let search = needle(&spec.search);
    let location = needle(&spec.location);
    let min_rent = spec.min_rent;
    let max_rent = spec.max_rent.unwrap_or(f64::INFINITY);
    let rental_type = spec.rental_type.clone().filter(|t| !t.is_empty());

    move |listing: &Listing| {
        if let Some(min) = min_rent {
            if listing.price < min {
                return false;
            }
        }

        if listing.price > max_rent {
            return false;
        }

        if let Some(kind) = &rental_type {
            if listing.rental_type != *kind {
                return false;
            }
        }

        if search.is_none() && location.is_none() {
            return true;
        }

        let listing_location = listing.location.to_lowercase();

        if let Some(location) = &location {
            if !listing_location.contains(location.as_str()) {
                return false;
            }
        }

        match &search {
            Some(search) => {
                listing.title.to_lowercase().contains(search.as_str())
                    || listing_location.contains(search.as_str())
                    || listing.rental_type.to_lowercase().contains(search.as_str())
            }
            None => true,
        }
    }
}

/// Listings passing `spec`, borrowed in their original order
pub fn filter_listings<'a>(listings: &'a [Listing], spec: &FilterSpec) -> Vec<&'a Listing> {
    let predicate = build_predicate(spec);
    listings.iter().filter(|l| predicate(l)).collect()
}

fn needle(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}
