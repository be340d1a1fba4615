use super::RecordSet;

use aws_sdk_route53::types::{Change, ChangeAction};
use aws_smithy_types::error::operation::BuildError;

/// A single mutation of one record set.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordChange {
    action: ChangeAction,
    record: RecordSet,
}

impl RecordChange {
    pub fn create(record: RecordSet) -> Self {
        Self {
            action: ChangeAction::Create,
            record,
        }
    }

    pub fn delete(record: RecordSet) -> Self {
        Self {
            action: ChangeAction::Delete,
            record,
        }
    }

    pub fn action(&self) -> &ChangeAction {
        &self.action
    }

    pub fn record(&self) -> &RecordSet {
        &self.record
    }

    pub(crate) fn into_sdk(self) -> Result<Change, BuildError> {
        Change::builder()
            .action(self.action)
            .resource_record_set(self.record.into_sdk()?)
            .build()
    }
}
