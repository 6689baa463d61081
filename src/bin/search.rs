use anyhow::Result;
use clap::Parser;
use log::info;

use logo_search::catalogs::{
    CatalogClient, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, SIMPLE_ICONS_CDN_URL, SVGL_API_URL,
};
use logo_search::report::{build_brand_report, render_json, render_text};

#[derive(Parser, Debug, Clone)]
#[command(about = "Search and rank brand logo assets", long_about = None)]
struct Args {
    /// Brand names to search
    #[arg(required = true)]
    brands: Vec<String>,

    /// Max candidates per brand (clamped to 1..=10)
    #[arg(long, default_value_t = 3)]
    limit: usize,

    /// Print JSON output instead of the human-readable report
    #[arg(long)]
    json: bool,

    /// Validate the top recommendation's SVG metadata
    #[arg(long)]
    validate: bool,

    /// SVGL search endpoint
    #[arg(long, env = "SVGL_API_URL", default_value = SVGL_API_URL)]
    api_url: String,

    /// Simple Icons CDN base
    #[arg(long, env = "SIMPLE_ICONS_CDN_URL", default_value = SIMPLE_ICONS_CDN_URL)]
    cdn_url: String,

    /// User-Agent header sent with every outbound request
    #[arg(long, env = "LOGO_SEARCH_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let limit = args.limit.clamp(1, 10);
    let client = CatalogClient::new(
        &args.api_url,
        &args.cdn_url,
        &args.user_agent,
        args.timeout_secs,
    )?;

    let mut reports = Vec::with_capacity(args.brands.len());
    for brand in &args.brands {
        info!("searching logo assets for {brand:?} (limit={limit})");
        reports.push(build_brand_report(&client, brand, limit, args.validate).await);
    }

    if args.json {
        println!("{}", render_json(&reports)?);
    } else {
        print!("{}", render_text(&reports));
    }
    Ok(())
}
