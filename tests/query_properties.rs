use proptest::prelude::*;
use proptest::test_runner::Config;
use rental_listings::query::filter::filter_listings;
use rental_listings::query::sort::sort_listings;
use rental_listings::query::{run, Facets, FilterSpec, PageRequest, SortSpec};
use rental_listings::Listing;

const RENTAL_TYPES: [&str; 4] = ["Studio", "Condo", "Apartment", "Loft"];
const LOCATIONS: [&str; 3] = ["Brooklyn, NY", "Austin, TX", "Boston, MA"];

fn listing_strategy() -> impl Strategy<Value = (usize, usize, u32)> {
    (0..RENTAL_TYPES.len(), 0..LOCATIONS.len(), 0_u32..40)
}

fn listings_strategy() -> impl Strategy<Value = Vec<Listing>> {
    prop::collection::vec(listing_strategy(), 0..40).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (kind, place, price))| Listing {
                id: format!("l-{i}"),
                title: format!("Listing {i}"),
                location: LOCATIONS[place].to_string(),
                rental_type: RENTAL_TYPES[kind].to_string(),
                // Coarse prices so ties are common.
                price: f64::from(price * 100),
                min_price: 0.0,
                rating: 3.0,
                available_rooms: 1,
                images: vec![format!("l-{i}.jpg")],
                description: None,
                created_at: None,
            })
            .collect()
    })
}

fn ids<'a>(listings: impl IntoIterator<Item = &'a Listing>) -> Vec<String> {
    listings.into_iter().map(|l| l.id.clone()).collect()
}

fn sorted(listings: &[Listing], spec: SortSpec) -> Vec<String> {
    let mut refs: Vec<&Listing> = listings.iter().collect();
    sort_listings(&mut refs, spec);
    ids(refs)
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn empty_filter_is_identity(listings in listings_strategy()) {
        let kept = filter_listings(&listings, &FilterSpec::default());
        prop_assert_eq!(ids(kept), ids(&listings));
    }

    #[test]
    fn rental_type_filters_partition_the_snapshot(listings in listings_strategy()) {
        let facets = Facets::from_listings(&listings);
        let mut union = Vec::new();

        for kind in &facets.rental_types {
            let spec = FilterSpec { rental_type: Some(kind.clone()), ..Default::default() };
            let kept = filter_listings(&listings, &spec);
            prop_assert!(kept.iter().all(|l| &l.rental_type == kind));
            union.extend(ids(kept));
        }

        let mut expected = ids(&listings);
        union.sort();
        expected.sort();
        prop_assert_eq!(union, expected);
    }

    #[test]
    fn rent_window_is_exact(listings in listings_strategy(), a in 0_u32..4000, b in 0_u32..4000) {
        let (min, max) = (f64::from(a.min(b)), f64::from(a.max(b)));
        let spec = FilterSpec { min_rent: Some(min), max_rent: Some(max), ..Default::default() };

        let expected: Vec<String> = ids(listings.iter().filter(|l| min <= l.price && l.price <= max));
        prop_assert_eq!(ids(filter_listings(&listings, &spec)), expected);
    }

    #[test]
    fn sorting_is_idempotent(listings in listings_strategy()) {
        let once = sorted(&listings, SortSpec::ascending());
        let by_id: Vec<Listing> = once
            .iter()
            .filter_map(|id| listings.iter().find(|l| &l.id == id).cloned())
            .collect();
        prop_assert_eq!(sorted(&by_id, SortSpec::ascending()), once);
    }

    #[test]
    fn ties_stay_in_snapshot_order(listings in listings_strategy()) {
        for spec in [SortSpec::ascending(), SortSpec::descending()] {
            let order = sorted(&listings, spec);
            let position = |id: &str| listings.iter().position(|l| l.id == id);
            for pair in order.windows(2) {
                let (a, b) = (position(&pair[0]).unwrap(), position(&pair[1]).unwrap());
                if listings[a].price == listings[b].price {
                    prop_assert!(a < b);
                }
            }
        }
    }

    #[test]
    fn pages_reconstruct_the_ordered_result(
        listings in listings_strategy(),
        page_size in 1_i64..8,
        descending in any::<bool>(),
    ) {
        let sort = if descending { SortSpec::descending() } else { SortSpec::ascending() };
        let filter = FilterSpec { search: Some("o".to_string()), ..Default::default() };

        let first = run(&listings, &filter, &sort, &PageRequest::new(0, page_size)).unwrap();
        let mut joined = Vec::new();
        for index in 0..first.total_pages {
            let page = run(&listings, &filter, &sort, &PageRequest::new(index as i64, page_size)).unwrap();
            prop_assert!(page.items.len() <= page_size as usize);
            joined.extend(ids(&page.items));
        }

        let mut expected = filter_listings(&listings, &filter);
        sort_listings(&mut expected, sort);
        prop_assert_eq!(joined, ids(expected));
    }

    #[test]
    fn page_count_matches_item_count(listings in listings_strategy(), page_size in 1_i64..10) {
        let page = run(&listings, &FilterSpec::default(), &SortSpec::ascending(), &PageRequest::new(0, page_size)).unwrap();
        let size = page_size as usize;

        prop_assert_eq!(page.total_pages == 0, page.total_items == 0);
        prop_assert_eq!(page.total_pages, page.total_items.div_ceil(size));
    }

    #[test]
    fn runs_are_deterministic(listings in listings_strategy(), index in -3_i64..10) {
        let request = PageRequest::new(index, 4);
        let a = run(&listings, &FilterSpec::default(), &SortSpec::descending(), &request).unwrap();
        let b = run(&listings, &FilterSpec::default(), &SortSpec::descending(), &request).unwrap();
        prop_assert_eq!(a, b);
    }
}

#[test]
fn descending_reverses_ascending_without_ties() {
    let listings: Vec<Listing> = [1800.0, 1500.0, 2400.0, 900.0]
        .iter()
        .enumerate()
        .map(|(i, &price)| Listing {
            id: format!("l-{i}"),
            title: "Flat".to_string(),
            location: "Austin, TX".to_string(),
            rental_type: "Apartment".to_string(),
            price,
            min_price: price,
            rating: 4.0,
            available_rooms: 1,
            images: vec!["flat.jpg".to_string()],
            description: None,
            created_at: None,
        })
        .collect();

    let mut ascending = sorted(&listings, SortSpec::ascending());
    ascending.reverse();
    assert_eq!(sorted(&listings, SortSpec::descending()), ascending);
}
