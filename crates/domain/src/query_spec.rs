use super::{DnsClass, DomainError, RecordType};
use std::fmt;
use std::sync::Arc;

pub const IDENTITY_PROBE_NAME: &str = "id.server.";
pub const DEFAULT_EDNS_PAYLOAD: u16 = 4096;
/// RFC 6891 floor for an advertised UDP payload size.
pub const MIN_EDNS_PAYLOAD: u16 = 512;
/// EDNS option code for NSID (RFC 5001).
pub const NSID_OPTION_CODE: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdnsSettings {
    pub enabled: bool,
    pub payload_size: u16,
    pub request_nsid: bool,
}

impl Default for EdnsSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            payload_size: DEFAULT_EDNS_PAYLOAD,
            request_nsid: true,
        }
    }
}

impl EdnsSettings {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn with_payload_size(payload_size: u16) -> Self {
        Self {
            payload_size,
            ..Self::default()
        }
    }
}

/// What gets asked on every exchange of a sweep.
///
/// Identity probing is decided once here: when requested, the queried
/// name, type and class are replaced by `id.server.` / TXT / CH and the
/// caller-supplied values are ignored, including their validity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub record_class: DnsClass,
    pub edns: EdnsSettings,
    pub identity_probe: bool,
}

impl QuerySpec {
    pub fn new(
        name: &str,
        record_type: &str,
        record_class: &str,
        edns: EdnsSettings,
        identity_probe: bool,
    ) -> Result<Self, DomainError> {
        if identity_probe {
            return Ok(Self::identity(edns));
        }

        let record_type = record_type
            .parse::<RecordType>()
            .map_err(DomainError::InvalidQuerySpec)?;
        let record_class = record_class
            .parse::<DnsClass>()
            .map_err(DomainError::InvalidQuerySpec)?;

        if name.trim().is_empty() {
            return Err(DomainError::InvalidQuerySpec(
                "Query name cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            name: Arc::from(name.trim()),
            record_type,
            record_class,
            edns,
            identity_probe: false,
        })
    }

    pub fn identity(edns: EdnsSettings) -> Self {
        Self {
            name: Arc::from(IDENTITY_PROBE_NAME),
            record_type: RecordType::TXT,
            record_class: DnsClass::CH,
            edns,
            identity_probe: true,
        }
    }

    pub fn requests_nsid(&self) -> bool {
        self.edns.enabled && self.edns.request_nsid
    }
}

impl fmt::Display for QuerySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "qname='{}', qtype={}, qclass={}",
            self.name, self.record_type, self.record_class
        )
    }
}
