use super::{
    error::Error,
    types::{HostedZone, Page, RecordChange, RecordCursor, RecordSet},
};

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_route53::{types::ChangeBatch, Client as Route53SdkClient};

#[derive(Debug, Clone)]
pub struct Client {
    route53: Route53SdkClient,
}

impl Client {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            route53: Route53SdkClient::new(config),
        }
    }
}

impl From<Route53SdkClient> for Client {
    fn from(route53: Route53SdkClient) -> Self {
        Self { route53 }
    }
}

#[async_trait]
pub trait Route53Client: Clone + Send + Sync {
    /// Return one page of hosted zones starting at `marker`.
    async fn list_hosted_zones(
        &self,
        marker: Option<String>,
    ) -> Result<Page<HostedZone, String>, Error>;

    /// Return one page of record sets of the zone starting at `cursor`.
    async fn list_resource_record_sets(
        &self,
        zone_id: &str,
        cursor: Option<RecordCursor>,
    ) -> Result<Page<RecordSet, RecordCursor>, Error>;

    /// Submit a single change to the record sets of the zone.
    async fn change_resource_record_sets(
        &self,
        zone_id: &str,
        change: RecordChange,
    ) -> Result<(), Error>;
}

#[async_trait]
impl Route53Client for Client {
    async fn list_hosted_zones(
        &self,
        marker: Option<String>,
    ) -> Result<Page<HostedZone, String>, Error> {
        self.route53
            .list_hosted_zones()
            .set_marker(marker)
            .send()
            .await
            .map_err(|err| Error::SdkError(Box::new(err)))
            .map(|output| Page {
                items: output
                    .hosted_zones
                    .into_iter()
                    .map(HostedZone::from)
                    .collect(),
                truncated: output.is_truncated,
                next_cursor: output.next_marker.filter(|marker| !marker.is_empty()),
            })
    }

    async fn list_resource_record_sets(
        &self,
        zone_id: &str,
        cursor: Option<RecordCursor>,
    ) -> Result<Page<RecordSet, RecordCursor>, Error> {
        let mut request = self
            .route53
            .list_resource_record_sets()
            .hosted_zone_id(zone_id);

        if let Some(cursor) = cursor {
            request = request
                .start_record_name(cursor.name())
                .start_record_type(cursor.record_type().clone())
                .set_start_record_identifier(cursor.identifier().map(String::from));
        }

        request
            .send()
            .await
            .map_err(|err| Error::SdkError(Box::new(err)))
            .map(|output| Page {
                items: output
                    .resource_record_sets
                    .into_iter()
                    .map(RecordSet::from)
                    .collect(),
                truncated: output.is_truncated,
                next_cursor: RecordCursor::from_parts(
                    output.next_record_name,
                    output.next_record_type,
                    output.next_record_identifier,
                ),
            })
    }

    async fn change_resource_record_sets(
        &self,
        zone_id: &str,
        change: RecordChange,
    ) -> Result<(), Error> {
        let batch = ChangeBatch::builder().changes(change.into_sdk()?).build()?;

        self.route53
            .change_resource_record_sets()
            .hosted_zone_id(zone_id)
            .change_batch(batch)
            .send()
            .await
            .map_err(|err| Error::SdkError(Box::new(err)))?;

        Ok(())
    }
}
