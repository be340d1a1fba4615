use super::super::{
    client::Route53Client,
    error::Error,
    paginate::PageSource,
    types::{HostedZone, Page, RecordCursor, RecordSet},
};

use async_trait::async_trait;

/// Hosted zones of the account, paged by marker.
#[derive(Debug, Clone)]
pub struct HostedZones<Client: Route53Client> {
    client: Client,
}

impl<Client: Route53Client> HostedZones<Client> {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<Client> PageSource for HostedZones<Client>
where
    Client: Route53Client + 'static,
{
    type Item = HostedZone;
    type Cursor = String;

    async fn fetch_page(&self, marker: Option<String>) -> Result<Page<HostedZone, String>, Error> {
        self.client.list_hosted_zones(marker).await
    }
}

/// Record sets of one hosted zone, paged by record name and type.
#[derive(Debug, Clone)]
pub struct ResourceRecordSets<Client: Route53Client> {
    client: Client,
    zone_id: String,
}

impl<Client: Route53Client> ResourceRecordSets<Client> {
    pub fn new(client: Client, zone_id: impl Into<String>) -> Self {
        Self {
            client,
            zone_id: zone_id.into(),
        }
    }

    pub fn zone_id(&self) -> &str {
        self.zone_id.as_str()
    }
}

#[async_trait]
impl<Client> PageSource for ResourceRecordSets<Client>
where
    Client: Route53Client + 'static,
{
    type Item = RecordSet;
    type Cursor = RecordCursor;

    async fn fetch_page(
        &self,
        cursor: Option<RecordCursor>,
    ) -> Result<Page<RecordSet, RecordCursor>, Error> {
        self.client
            .list_resource_record_sets(&self.zone_id, cursor)
            .await
    }
}
