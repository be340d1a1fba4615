use super::{
    catalog::{Catalog, RecordErrorPolicy},
    client::Route53Client,
    error::Error,
};

use aws_config::{BehaviorVersion, SdkConfig};
use std::num::NonZeroUsize;
use tracing::info;

/// Overrides the Route 53 endpoint, e.g. to point at a local emulator.
pub const ENDPOINT_URL: &str = "ROUTE53_CATALOG_ENDPOINT_URL";

/// Positive page limit for every listing.
pub const MAX_PAGES: &str = "ROUTE53_CATALOG_MAX_PAGES";

/// `skip` or `abort`, see [`RecordErrorPolicy`].
pub const ON_RECORD_ERROR: &str = "ROUTE53_CATALOG_ON_RECORD_ERROR";

/// Settings of the `route53-catalog` binary.
///
/// Credentials and region are not part of it; they are resolved by the default AWS provider chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub endpoint_url: Option<String>,
    pub max_pages: Option<NonZeroUsize>,
    pub on_record_error: RecordErrorPolicy,
}

impl Config {
    /// Read the settings from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the settings through `lookup`, which returns the value of a variable if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let max_pages = lookup(MAX_PAGES)
            .map(|value| match value.trim().parse::<NonZeroUsize>() {
                Ok(max_pages) => Ok(max_pages),
                Err(_) => Err(Error::Config {
                    key: MAX_PAGES,
                    value,
                }),
            })
            .transpose()?;

        let on_record_error = match lookup(ON_RECORD_ERROR) {
            None => RecordErrorPolicy::default(),
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "skip" => RecordErrorPolicy::Skip,
                "abort" => RecordErrorPolicy::Abort,
                _ => {
                    return Err(Error::Config {
                        key: ON_RECORD_ERROR,
                        value,
                    })
                }
            },
        };

        Ok(Self {
            endpoint_url: lookup(ENDPOINT_URL),
            max_pages,
            on_record_error,
        })
    }

    /// Load the AWS SDK config from the default provider chain, applying the endpoint override.
    pub async fn sdk_config(&self) -> SdkConfig {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;

        match self.endpoint_url.as_ref() {
            Some(endpoint_url) => {
                info!("Using Route 53 endpoint {endpoint_url}.");
                config.into_builder().endpoint_url(endpoint_url).build()
            }
            None => config,
        }
    }

    /// Create a [`Catalog`] over `client` with these settings.
    pub fn catalog<Client>(&self, client: Client) -> Catalog<Client>
    where
        Client: Route53Client + 'static,
    {
        let catalog = Catalog::new(client).on_record_error(self.on_record_error);

        match self.max_pages {
            Some(max_pages) => catalog.max_pages(max_pages),
            None => catalog,
        }
    }
}
