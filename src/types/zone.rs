use aws_sdk_route53 as route53;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedZone {
    id: String,
    name: String,
}

impl HostedZone {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl From<route53::types::HostedZone> for HostedZone {
    fn from(zone: route53::types::HostedZone) -> Self {
        let route53::types::HostedZone { id, name, .. } = zone;
        Self { id, name }
    }
}

impl fmt::Display for HostedZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hosted Zone: {} (ID: {})", self.name, self.id)
    }
}
