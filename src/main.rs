use anyhow::Context;
use route53_catalog::{config::Config, Client};
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let sdk_config = config.sdk_config().await;
    let catalog = config.catalog(Client::new(&sdk_config));

    let zones = catalog
        .hosted_zones()
        .await
        .context("failed to list hosted zones")?;

    println!("Found {} hosted zones\n", zones.len());

    for zone in zones {
        let zone_id = zone.id().to_string();
        let listing = catalog
            .zone_listing(zone)
            .await
            .with_context(|| format!("failed to list records for zone {zone_id}"))?;

        print!("{listing}");
    }

    Ok(())
}
