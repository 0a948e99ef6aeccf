use crate::error::QueryResult;
use crate::models::{Listing, ListingSnapshot};
use crate::query::filter::filter_listings;
use crate::query::paginate::paginate;
use crate::query::sort::sort_listings;
use crate::query::types::{FilterSpec, ListingQuery, PageRequest, PageResult, SortSpec};
use tracing::debug;

/// Filter, sort and paginate a listing snapshot.
///
/// The input is only borrowed; the returned page owns clones of the listings
/// on it. Every page of the same filter and sort is a slice of one ordering.
pub fn run(
    listings: &[Listing],
    filter: &FilterSpec,
    sort: &SortSpec,
    page: &PageRequest,
) -> QueryResult<PageResult<Listing>> {
    // Fail on caller errors before touching the data.
    page.validated_size()?;

    let mut matched = filter_listings(listings, filter);
    sort_listings(&mut matched, *sort);
    let result = paginate(matched, page)?;

    debug!(
        total = listings.len(),
        matched = result.total_items,
        page = result.page_index,
        pages = result.total_pages,
        "listing query"
    );

    Ok(PageResult {
        items: result.items.into_iter().cloned().collect(),
        total_items: result.total_items,
        total_pages: result.total_pages,
        page_index: result.page_index,
        page_size: result.page_size,
        has_more: result.has_more,
    })
}

/// [`run`] over a snapshot with a bundled query
pub fn run_query(snapshot: &ListingSnapshot, query: &ListingQuery) -> QueryResult<PageResult<Listing>> {
    run(&snapshot.listings, &query.filter, &query.sort, &query.page)
}
