pub mod facets;
pub mod filter;
pub mod paginate;
pub mod pipeline;
pub mod sort;
pub mod types;

pub use facets::{Facets, PriceRange};
pub use pipeline::{run, run_query};
pub use types::{
    FilterSpec, ListingQuery, PageRequest, PageResult, RawFilterParams, SortKey, SortOrder,
    SortSpec, DEFAULT_PAGE_SIZE,
};
