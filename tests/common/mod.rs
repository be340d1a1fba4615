use async_trait::async_trait;
use aws_sdk_route53::types::ChangeAction;
use route53_catalog::{
    error::Error,
    types::{HostedZone, Page, RecordChange, RecordCursor, RecordSet},
    Route53Client,
};
use std::sync::{Arc, Mutex};

/// In-memory Route 53 answering listings in pages of `page_size` items.
#[derive(Clone)]
pub struct FakeRoute53 {
    page_size: usize,
    zones: Arc<Mutex<Vec<(HostedZone, Vec<RecordSet>)>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeRoute53 {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            zones: Arc::new(Mutex::new(vec![])),
            calls: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn with_zone(self, id: &str, name: &str, records: Vec<RecordSet>) -> Self {
        self.zones
            .lock()
            .unwrap()
            .push((HostedZone::new(id, name), records));
        self
    }

    /// Names of the operations called so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn paged<T: Clone, C>(
        &self,
        items: &[T],
        start: usize,
        cursor_at: impl Fn(&T) -> C,
    ) -> Page<T, C> {
        let end = std::cmp::min(items.len(), start + self.page_size);
        let page = items[start..end].to_vec();

        match items.get(end) {
            Some(next) => Page::more(page, Some(cursor_at(next))),
            None => Page::last(page),
        }
    }
}

#[async_trait]
impl Route53Client for FakeRoute53 {
    async fn list_hosted_zones(
        &self,
        marker: Option<String>,
    ) -> Result<Page<HostedZone, String>, Error> {
        self.calls.lock().unwrap().push("ListHostedZones".into());

        let zones = self
            .zones
            .lock()
            .unwrap()
            .iter()
            .map(|(zone, _)| zone.clone())
            .collect::<Vec<HostedZone>>();

        let start = match marker {
            None => 0,
            Some(marker) => zones
                .iter()
                .position(|zone| zone.id() == marker)
                .ok_or_else(|| Error::SdkError(format!("InvalidInput: {marker}").into()))?,
        };

        Ok(self.paged(&zones, start, |zone| zone.id().to_string()))
    }

    async fn list_resource_record_sets(
        &self,
        zone_id: &str,
        cursor: Option<RecordCursor>,
    ) -> Result<Page<RecordSet, RecordCursor>, Error> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("ListResourceRecordSets({zone_id})"));

        let mut records = self
            .zones
            .lock()
            .unwrap()
            .iter()
            .find(|(zone, _)| zone.id() == zone_id)
            .map(|(_, records)| records.clone())
            .ok_or_else(|| Error::SdkError(format!("NoSuchHostedZone: {zone_id}").into()))?;
        records.sort_by(|a, b| {
            (a.name(), a.record_type().as_str()).cmp(&(b.name(), b.record_type().as_str()))
        });

        let start = match cursor {
            None => 0,
            Some(cursor) => records
                .iter()
                .position(|record| {
                    record.name() == cursor.name() && record.record_type() == cursor.record_type()
                })
                .ok_or_else(|| Error::SdkError("InvalidInput: stale cursor".into()))?,
        };

        Ok(self.paged(&records, start, |record| {
            RecordCursor::new(record.name(), record.record_type().clone())
        }))
    }

    async fn change_resource_record_sets(
        &self,
        zone_id: &str,
        change: RecordChange,
    ) -> Result<(), Error> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("ChangeResourceRecordSets({zone_id})"));

        let mut zones = self.zones.lock().unwrap();
        let (_, records) = zones
            .iter_mut()
            .find(|(zone, _)| zone.id() == zone_id)
            .ok_or_else(|| Error::SdkError(format!("NoSuchHostedZone: {zone_id}").into()))?;

        let existing = records.iter().position(|record| {
            record.name() == change.record().name()
                && record.record_type() == change.record().record_type()
        });

        match (change.action(), existing) {
            (ChangeAction::Create, None) => records.push(change.record().clone()),
            (ChangeAction::Delete, Some(index)) if &records[index] == change.record() => {
                records.remove(index);
            }
            _ => return Err(Error::SdkError("InvalidChangeBatch".into())),
        }

        Ok(())
    }
}
