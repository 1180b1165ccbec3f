use std::path::PathBuf;
use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use crate::config::Config;
use crate::repositories::google_places_repo::{find_place_id, PlacesConfig};

/// Reviews API for the tailoring shop website
#[derive(Parser)]
#[command(name = "tailor-reviews")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub config: Config,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the API server (default)
    Serve,

    /// Look up the Google Place ID of the shop
    FindPlace {
        /// Business name as listed on Google Maps
        #[arg(long)]
        name: String,
        /// Street address of the business
        #[arg(long)]
        address: String,
    },

    /// Write the static sitemap for the website
    Sitemap {
        /// Public URL of the website
        #[arg(long, env = "SITE_URL")]
        site_url: String,
        #[arg(long, default_value = "public/sitemap.xml")]
        output: PathBuf,
    },
}

/// Setup helper: prints the place id to put into `.env`.
pub async fn find_place(
    config: &Config,
    name: &str,
    address: &str,
) -> anyhow::Result<()> {
    let api_key = config
        .places_api_key()
        .ok_or_else(|| anyhow!("GOOGLE_PLACES_API_KEY must be set to look up a place"))?;
    let places_config = PlacesConfig::new(api_key, &config.google_places_base_url);

    println!("Searching for \"{}\" at \"{}\"...", name, address);
    let candidate = find_place_id(&reqwest::Client::new(), &places_config, name, address)
        .await
        .context("Place lookup failed")?;

    match candidate {
        Some(candidate) => {
            println!("Found place:");
            println!("  Name:     {}", candidate.name.as_deref().unwrap_or("-"));
            println!("  Address:  {}", candidate.formatted_address.as_deref().unwrap_or("-"));
            println!("  Place ID: {}", candidate.place_id);
            println!();
            println!("Add the following line to your .env file:");
            println!("GOOGLE_PLACE_ID={}", candidate.place_id);
        }
        None => {
            println!("No place found. Check the business name and address as they appear on Google Maps.");
        }
    }
    Ok(())
}
