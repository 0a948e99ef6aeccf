use clap::Parser;
use rental_listings::config::Config;
use rental_listings::query::{self, Facets};
use rental_listings::sources::load_snapshot;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();

    info!("🏠 Rental Listings");
    info!("==================");

    let listing_query = config.query()?;
    let source = config.source()?;
    let snapshot = load_snapshot(source.as_ref()).await?;

    let page = query::run_query(&snapshot, &listing_query)?;

    info!(
        "✅ {} matching listings, showing page {} of {}",
        page.total_items,
        page.page_index + 1,
        page.total_pages.max(1)
    );

    for (i, listing) in page.items.iter().enumerate() {
        let position = page.page_index * page.page_size + i + 1;
        println!("{}. {} ({:.0}/month)", position, listing.title, listing.price);
        println!("   {} · {}", listing.rental_type, listing.location);
        println!(
            "   Rating {:.1}, {} rooms available",
            listing.rating, listing.available_rooms
        );
        println!("   ID: {}", listing.id);
        println!();
    }

    if page.has_more {
        println!("More results: --page {}", page.page_index + 1);
    }

    if config.facets {
        let facets = Facets::from_listings(&snapshot.listings);
        println!("Rental types: {}", facets.rental_types.join(", "));
        println!("Locations: {}", facets.locations.join(", "));
        if let Some(range) = facets.price_range {
            println!("Price range: {:.0} - {:.0}", range.min, range.max);
        }
    }

    if let Some(path) = &config.output {
        let json = serde_json::to_string_pretty(&page)?;
        tokio::fs::write(path, json).await?;
        info!("💾 Saved page to {}", path.display());
    }

    Ok(())
}
