use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Common trait for everything that can supply listing records
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch the records as JSON values, undecoded and in source order.
    ///
    /// Only a failure of the whole fetch is an error; bad records are
    /// rejected later, one at a time.
    async fn fetch(&self) -> Result<Vec<Value>>;

    /// Name of the store, recorded on snapshots
    fn source_name(&self) -> &'static str;
}
