mod sources;

use super::{
    client::Route53Client,
    error::Error,
    paginate::{PageSource, Paginator},
    types::{HostedZone, RecordChange, RecordSet, ZoneListing},
};

use std::{net::IpAddr, num::NonZeroUsize};
use tracing::{error, info};

pub use sources::{HostedZones, ResourceRecordSets};

/// What [`Catalog::walk`] does when listing the record sets of one zone fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecordErrorPolicy {
    /// Log the error, keep it in the zone's [`ZoneListing`] and go on with the next zone.
    #[default]
    Skip,
    /// Stop the walk and return the error.
    Abort,
}

/// Hosted zones and record sets reachable through one client.
#[derive(Debug, Clone)]
pub struct Catalog<Client>
where
    Client: Route53Client + 'static,
{
    client: Client,
    max_pages: Option<NonZeroUsize>,
    on_record_error: RecordErrorPolicy,
}

impl<Client> Catalog<Client>
where
    Client: Route53Client + 'static,
{
    pub fn new(client: Client) -> Self {
        Self {
            client,
            max_pages: None,
            on_record_error: RecordErrorPolicy::default(),
        }
    }

    /// Set the page limit applied to every listing.
    pub fn max_pages(self, max_pages: NonZeroUsize) -> Self {
        Self {
            max_pages: Some(max_pages),
            ..self
        }
    }

    /// Set how [`walk`](Catalog::walk) treats a zone whose record sets cannot be listed.
    ///
    /// Setting any policy is optional. If you omit calling this method,
    /// [`RecordErrorPolicy::Skip`] is used as default value.
    pub fn on_record_error(self, on_record_error: RecordErrorPolicy) -> Self {
        Self {
            on_record_error,
            ..self
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    fn paginator<S: PageSource>(&self, source: S) -> Paginator<S> {
        let paginator = Paginator::new(source);

        match self.max_pages {
            Some(max_pages) => paginator.max_pages(max_pages),
            None => paginator,
        }
    }

    /// List every hosted zone of the account.
    pub async fn hosted_zones(&self) -> Result<Vec<HostedZone>, Error> {
        self.paginator(HostedZones::new(self.client.clone()))
            .collect_all()
            .await
    }

    /// List every record set of the zone.
    pub async fn record_sets(&self, zone_id: &str) -> Result<Vec<RecordSet>, Error> {
        self.paginator(ResourceRecordSets::new(self.client.clone(), zone_id))
            .collect_all()
            .await
    }

    /// List every hosted zone, then the record sets of each zone in listing order.
    ///
    /// Failing to list the zones fails the walk. Failing to list the records of one zone is
    /// handled by the configured [`RecordErrorPolicy`].
    pub async fn walk(&self) -> Result<Vec<ZoneListing>, Error> {
        let zones = self.hosted_zones().await?;
        info!("Found {} hosted zones.", zones.len());

        let mut listings: Vec<ZoneListing> = Vec::with_capacity(zones.len());

        for zone in zones {
            listings.push(self.zone_listing(zone).await?);
        }

        Ok(listings)
    }

    /// List the record sets of one zone, applying the configured [`RecordErrorPolicy`].
    ///
    /// Returns `Err` only under [`RecordErrorPolicy::Abort`].
    pub async fn zone_listing(&self, zone: HostedZone) -> Result<ZoneListing, Error> {
        let records = match self.record_sets(zone.id()).await {
            Ok(records) => Ok(records),
            Err(err) if self.on_record_error == RecordErrorPolicy::Abort => return Err(err),
            Err(err) => {
                error!(
                    "Unexpected error during listing records: {err}. Skip {} zone.",
                    zone.id(),
                );
                Err(err)
            }
        };

        Ok(ZoneListing::new(zone, records))
    }

    /// Submit one change to the record sets of the zone.
    pub async fn change(&self, zone_id: &str, change: RecordChange) -> Result<(), Error> {
        info!(
            "Submitting {} of {} record {} to {} zone.",
            change.action().as_str(),
            change.record().record_type().as_str(),
            change.record().name(),
            zone_id,
        );

        self.client.change_resource_record_sets(zone_id, change).await
    }

    /// Create a single-value `A` (IPv4) or `AAAA` (IPv6) record.
    pub async fn create_address_record(
        &self,
        zone_id: &str,
        name: impl Into<String>,
        ip: IpAddr,
        ttl: i64,
    ) -> Result<(), Error> {
        let record = RecordSet::address(name, ip, ttl);
        self.change(zone_id, RecordChange::create(record)).await
    }

    /// Delete a single-value address record.
    ///
    /// Name, address and TTL must match the existing record exactly.
    pub async fn delete_address_record(
        &self,
        zone_id: &str,
        name: impl Into<String>,
        ip: IpAddr,
        ttl: i64,
    ) -> Result<(), Error> {
        let record = RecordSet::address(name, ip, ttl);
        self.change(zone_id, RecordChange::delete(record)).await
    }
}
