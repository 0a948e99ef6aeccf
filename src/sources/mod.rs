pub mod file;
pub mod http;
pub mod sample;
pub mod traits;

pub use file::JsonFileSource;
pub use http::HttpSource;
pub use sample::SampleSource;
pub use traits::ListingSource;

use crate::models::ListingSnapshot;
use anyhow::Result;
use tracing::{info, warn};

/// Fetch from `source` and validate the records into a snapshot
pub async fn load_snapshot(source: &dyn ListingSource) -> Result<ListingSnapshot> {
    let raw = source.fetch().await?;
    let snapshot = ListingSnapshot::from_json(source.source_name(), raw);

    if snapshot.rejected > 0 {
        warn!(
            "Dropped {} invalid listings from {}",
            snapshot.rejected,
            source.source_name()
        );
    }
    info!(
        "Loaded {} listings from {}",
        snapshot.len(),
        source.source_name()
    );

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Value};

    struct FixedSource(Vec<Value>);

    #[async_trait]
    impl ListingSource for FixedSource {
        async fn fetch(&self) -> Result<Vec<Value>> {
            Ok(self.0.clone())
        }

        fn source_name(&self) -> &'static str {
            "fixed"
        }
    }

    #[tokio::test]
    async fn load_snapshot_validates_records() {
        let valid = json!({
            "id": "x",
            "title": "Loft",
            "location": "Denver",
            "rentalType": "Loft",
            "price": 1000,
            "minPrice": 900,
            "rating": 3,
            "availableRooms": 1,
            "images": ["x.jpg"]
        });
        let mut mistyped = valid.clone();
        mistyped["rating"] = json!("great");
        let source = FixedSource(vec![valid, json!({}), mistyped, json!("not an object")]);

        let snapshot = load_snapshot(&source).await.unwrap();
        assert_eq!(snapshot.source, "fixed");
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.rejected, 3);
    }
}
