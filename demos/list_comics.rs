//! List comics by title prefix, one page at a time.
//!
//! ```bash
//! MARVEL_PUBLIC_KEY=... MARVEL_PRIVATE_KEY=... \
//!     cargo run --example list_comics -- avengers 2
//! ```

use marvel_catalog::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut args = std::env::args().skip(1);
    let prefix = args.next().unwrap_or_default();
    let page: u32 = args.next().map(|p| p.parse()).transpose()?.unwrap_or(1);

    let client = CatalogClientBuilder::from_env()?.build()?;
    let query = PageQuery::comics().search(prefix).page(page);
    let comics = client.comics().list(&query).await?;

    println!(
        "comics {}-{} of {}",
        comics.offset + 1,
        comics.offset + comics.count,
        comics.total
    );
    for comic in &comics.results {
        let issue = comic
            .issue_number
            .map(|n| format!("#{n}"))
            .unwrap_or_default();
        println!("  [{}] {} {}", comic.id, comic.title, issue);
    }
    if let Some(next) = comics.next_offset() {
        println!("next page starts at offset {next}");
    }
    Ok(())
}
