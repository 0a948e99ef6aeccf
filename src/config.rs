use crate::query::{ListingQuery, PageRequest, RawFilterParams, SortSpec, DEFAULT_PAGE_SIZE};
use crate::sources::{HttpSource, JsonFileSource, ListingSource, SampleSource};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Query rental listings from a JSON file, an HTTP endpoint or the sample set
#[derive(Debug, Clone, Parser)]
#[command(name = "rental-listings", version)]
pub struct Config {
    /// JSON file containing an array of listings
    #[arg(long, env = "LISTINGS_FILE", conflicts_with = "url")]
    pub file: Option<PathBuf>,

    /// HTTP endpoint returning an array of listings
    #[arg(long, env = "LISTINGS_URL")]
    pub url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, env = "LISTINGS_HTTP_TIMEOUT", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Free text matched against title, location and rental type
    #[arg(long)]
    pub search: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    /// Lowest rent to include; ignored unless numeric
    #[arg(long)]
    pub min_rent: Option<String>,

    /// Highest rent to include; ignored unless numeric
    #[arg(long)]
    pub max_rent: Option<String>,

    #[arg(long)]
    pub rental_type: Option<String>,

    #[arg(long, default_value = "price")]
    pub sort_by: String,

    /// ascending or descending
    #[arg(long, default_value = "ascending")]
    pub order: String,

    /// Zero-based page index
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub page: i64,

    #[arg(long, env = "LISTINGS_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE, allow_negative_numbers = true)]
    pub page_size: i64,

    /// Write the resulting page as JSON to this path
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Also print the rental types, locations and price range available
    #[arg(long)]
    pub facets: bool,
}

impl Config {
    /// Turn the command line into a query, rejecting bad sort settings
    pub fn query(&self) -> Result<ListingQuery> {
        let filter = RawFilterParams {
            search: self.search.clone(),
            location: self.location.clone(),
            min_rent: self.min_rent.clone(),
            max_rent: self.max_rent.clone(),
            rental_type: self.rental_type.clone(),
        }
        .normalize();

        let sort = SortSpec::parse(&self.sort_by, &self.order).context("Invalid sort settings")?;

        Ok(ListingQuery {
            filter,
            sort,
            page: PageRequest::new(self.page, self.page_size),
        })
    }

    /// The store selected by `--file` / `--url`, defaulting to the sample set
    pub fn source(&self) -> Result<Box<dyn ListingSource>> {
        if let Some(path) = &self.file {
            return Ok(Box::new(JsonFileSource::new(path)));
        }
        if let Some(url) = &self.url {
            let source = HttpSource::with_timeout(url, Duration::from_secs(self.timeout_secs))?;
            return Ok(Box::new(source));
        }
        Ok(Box::new(SampleSource::new()))
    }
}
