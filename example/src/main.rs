use aws_config::BehaviorVersion;
use route53_catalog::{catalog::Catalog, Client};
use std::net::{IpAddr, Ipv4Addr};

// This example assumes that the hosted zone "Z1234567890ABC" exists and the default
// credentials are allowed to change its record sets.

const ZONE_ID: &str = "Z1234567890ABC";
const NAME: &str = "test123.example.com";

#[tokio::main]
async fn main() {
    let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let catalog = Catalog::new(Client::new(&config));
    let ip = IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1));

    match catalog.create_address_record(ZONE_ID, NAME, ip, 300).await {
        Ok(()) => println!("Subdomain created successfully"),
        Err(err) => eprintln!("failed to create subdomain: {err}"),
    }

    match catalog.delete_address_record(ZONE_ID, NAME, ip, 300).await {
        Ok(()) => println!("Subdomain deleted successfully"),
        Err(err) => eprintln!("failed to delete subdomain: {err}"),
    }
}
