use clap::Parser;
use dotenv::dotenv;
use tailor_reviews::cli::{find_place, Cli, Commands};
use tailor_reviews::controller::{serve, AppState};
use tailor_reviews::helpers::sitemap::generate_sitemap;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(AppState::new(cli.config)).await,
        Commands::FindPlace { name, address } => find_place(&cli.config, &name, &address).await,
        Commands::Sitemap { site_url, output } => generate_sitemap(&site_url, &output),
    }
}
