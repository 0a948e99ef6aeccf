use crate::models::Listing;
use crate::query::types::{SortKey, SortOrder, SortSpec};
use std::cmp::Ordering;

/// Comparator for `spec`. Prices compare with IEEE total ordering.
pub fn comparator(spec: SortSpec) -> impl Fn(&Listing, &Listing) -> Ordering {
    move |a: &Listing, b: &Listing| {
        let ord = match spec.key {
            SortKey::Price => a.price.total_cmp(&b.price),
        };
        match spec.order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    }
}

/// Stable sort of borrowed listings.
///
/// Equal prices keep their incoming order in both directions, so descending
/// is not the mirror image of ascending when ties exist.
pub fn sort_listings(listings: &mut [&Listing], spec: SortSpec) {
    let cmp = comparator(spec);
    listings.sort_by(|a, b| cmp(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::testing::listing;

    fn ids(listings: &[&Listing]) -> Vec<String> {
        listings.iter().map(|l| l.id.clone()).collect()
    }

    #[test]
    fn ascending_and_descending_by_price() {
        let data = vec![
            listing("a", "A", "X", "Studio", 1800.0),
            listing("b", "B", "X", "Studio", 1500.0),
            listing("c", "C", "X", "Studio", 2100.0),
        ];
        let mut refs: Vec<&Listing> = data.iter().collect();

        sort_listings(&mut refs, SortSpec::ascending());
        assert_eq!(ids(&refs), vec!["b", "a", "c"]);

        sort_listings(&mut refs, SortSpec::descending());
        assert_eq!(ids(&refs), vec!["c", "a", "b"]);
    }

    #[test]
    fn ties_keep_input_order_in_both_directions() {
        let data = vec![
            listing("first", "A", "X", "Studio", 1000.0),
            listing("cheap", "B", "X", "Studio", 500.0),
            listing("second", "C", "X", "Studio", 1000.0),
        ];

        let mut asc: Vec<&Listing> = data.iter().collect();
        sort_listings(&mut asc, SortSpec::ascending());
        assert_eq!(ids(&asc), vec!["cheap", "first", "second"]);

        let mut desc: Vec<&Listing> = data.iter().collect();
        sort_listings(&mut desc, SortSpec::descending());
        assert_eq!(ids(&desc), vec!["first", "second", "cheap"]);
    }
}
