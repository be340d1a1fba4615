mod change;
mod listing;
mod page;
mod record;
mod zone;

pub use change::RecordChange;
pub use listing::ZoneListing;
pub use page::Page;
pub use record::{AliasTarget, RecordCursor, RecordSet};
pub use zone::HostedZone;
