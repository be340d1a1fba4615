use super::super::error::Error;
use super::{HostedZone, RecordSet};

use std::fmt;

/// A hosted zone together with the outcome of listing its record sets.
#[derive(Debug)]
pub struct ZoneListing {
    pub zone: HostedZone,
    pub records: Result<Vec<RecordSet>, Error>,
}

impl ZoneListing {
    pub fn new(zone: HostedZone, records: Result<Vec<RecordSet>, Error>) -> Self {
        Self { zone, records }
    }

    /// Record sets of the zone, empty when listing them failed.
    pub fn record_sets(&self) -> &[RecordSet] {
        self.records.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for ZoneListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.zone)?;
        writeln!(f, "{}", "-".repeat(40))?;

        // A failed zone only shows its header, the failure itself is logged.
        if let Ok(records) = self.records.as_ref() {
            for record in records {
                writeln!(f, "{record}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
