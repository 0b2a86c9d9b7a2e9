//! Look up a single character and print what links to it.
//!
//! ```bash
//! cargo run --example character_detail -- 1009368
//! ```

use marvel_catalog::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let id = std::env::args().nth(1).unwrap_or_else(|| "1009368".to_string());
    let client = CatalogClientBuilder::from_env()?.build()?;

    let character = match client.get_character_detail(id.as_str()).await {
        Ok(c) => c,
        Err(e) if e.is_not_found() => {
            println!("{e}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("{} ({})", character.name, character.id);
    if let Some(description) = &character.description {
        println!("{description}");
    }
    println!("thumbnail: {}", character.thumbnail.url());
    println!("comics ({} available):", character.comics.available);
    for name in character.comics.names().take(10) {
        println!("  {name}");
    }
    if let Some(link) = character.outbound_link() {
        println!("more: {link}");
    }
    Ok(())
}
