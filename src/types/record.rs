use aws_sdk_route53::types::{self as sdk, RrType};
use aws_smithy_types::error::operation::BuildError;
use std::{fmt, net::IpAddr};

/// The DNS target of an alias record set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTarget {
    pub dns_name: String,
    pub hosted_zone_id: String,
    pub evaluate_target_health: bool,
}

impl AliasTarget {
    pub fn new(dns_name: impl Into<String>, hosted_zone_id: impl Into<String>) -> Self {
        Self {
            dns_name: dns_name.into(),
            hosted_zone_id: hosted_zone_id.into(),
            evaluate_target_health: false,
        }
    }

    fn into_sdk(self) -> Result<sdk::AliasTarget, BuildError> {
        sdk::AliasTarget::builder()
            .dns_name(self.dns_name)
            .hosted_zone_id(self.hosted_zone_id)
            .evaluate_target_health(self.evaluate_target_health)
            .build()
    }
}

impl From<sdk::AliasTarget> for AliasTarget {
    fn from(target: sdk::AliasTarget) -> Self {
        let sdk::AliasTarget {
            hosted_zone_id,
            dns_name,
            evaluate_target_health,
            ..
        } = target;

        Self {
            dns_name,
            hosted_zone_id,
            evaluate_target_health,
        }
    }
}

/// A resource record set within a hosted zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    name: String,
    record_type: RrType,
    ttl: Option<i64>,
    values: Vec<String>,
    alias_target: Option<AliasTarget>,
}

impl RecordSet {
    pub fn new(name: impl Into<String>, record_type: RrType) -> Self {
        Self {
            name: name.into(),
            record_type,
            ttl: None,
            values: vec![],
            alias_target: None,
        }
    }

    /// Create a single-value address record: `A` for IPv4, `AAAA` for IPv6.
    pub fn address(name: impl Into<String>, ip: IpAddr, ttl: i64) -> Self {
        let record_type = match ip {
            IpAddr::V4(_) => RrType::A,
            IpAddr::V6(_) => RrType::Aaaa,
        };

        Self::new(name, record_type)
            .with_ttl(Some(ttl))
            .with_values(vec![ip.to_string()])
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn record_type(&self) -> &RrType {
        &self.record_type
    }

    pub fn ttl(&self) -> Option<i64> {
        self.ttl
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn alias_target(&self) -> Option<&AliasTarget> {
        self.alias_target.as_ref()
    }

    pub fn with_ttl(self, ttl: Option<i64>) -> Self {
        Self { ttl, ..self }
    }

    pub fn with_values(self, values: Vec<String>) -> Self {
        Self { values, ..self }
    }

    pub fn with_alias_target(self, alias_target: Option<AliasTarget>) -> Self {
        Self {
            alias_target,
            ..self
        }
    }

    pub(crate) fn into_sdk(self) -> Result<sdk::ResourceRecordSet, BuildError> {
        let mut builder = sdk::ResourceRecordSet::builder()
            .name(self.name)
            .r#type(self.record_type)
            .set_ttl(self.ttl);

        for value in self.values {
            builder = builder.resource_records(sdk::ResourceRecord::builder().value(value).build()?);
        }

        if let Some(alias_target) = self.alias_target {
            builder = builder.alias_target(alias_target.into_sdk()?);
        }

        builder.build()
    }
}

impl From<sdk::ResourceRecordSet> for RecordSet {
    fn from(record: sdk::ResourceRecordSet) -> Self {
        let sdk::ResourceRecordSet {
            name,
            r#type,
            ttl,
            resource_records,
            alias_target,
            ..
        } = record;

        let values = resource_records
            .unwrap_or_default()
            .into_iter()
            .map(|record| record.value)
            .collect();

        Self {
            name,
            record_type: r#type,
            ttl,
            values,
            alias_target: alias_target.map(AliasTarget::from),
        }
    }
}

impl fmt::Display for RecordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Name: {}", self.name)?;
        writeln!(f, "  Type: {}", self.record_type.as_str())?;
        writeln!(f, "  TTL: {}", self.ttl.unwrap_or_default())?;

        for value in self.values.iter() {
            writeln!(f, "    Value: {value}")?;
        }

        if let Some(target) = self.alias_target.as_ref() {
            writeln!(f, "    Alias Target: {}", target.dns_name)?;
        }

        Ok(())
    }
}

/// Position to resume a record set listing from.
///
/// The record name and type always travel together. The identifier is only
/// returned for record sets using a routing policy and must be sent back with
/// them when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordCursor {
    name: String,
    record_type: RrType,
    identifier: Option<String>,
}

impl RecordCursor {
    pub fn new(name: impl Into<String>, record_type: RrType) -> Self {
        Self {
            name: name.into(),
            record_type,
            identifier: None,
        }
    }

    /// Assemble a cursor from the `NextRecord*` response fields.
    ///
    /// Returns `None` unless both the name and the type are present.
    pub fn from_parts(
        name: Option<String>,
        record_type: Option<RrType>,
        identifier: Option<String>,
    ) -> Option<Self> {
        match (name.filter(|name| !name.is_empty()), record_type) {
            (Some(name), Some(record_type)) => Some(Self {
                name,
                record_type,
                identifier: identifier.filter(|id| !id.is_empty()),
            }),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn record_type(&self) -> &RrType {
        &self.record_type
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn with_identifier(self, identifier: impl Into<String>) -> Self {
        Self {
            identifier: Some(identifier.into()),
            ..self
        }
    }
}
