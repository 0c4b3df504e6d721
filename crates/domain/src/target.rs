use super::DomainError;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

pub const DEFAULT_DNS_PORT: u16 = 53;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressFamily {
    #[default]
    Unspecified,
    V4,
    V6,
}

impl AddressFamily {
    pub fn from_flags(ipv4_only: bool, ipv6_only: bool) -> Result<Self, DomainError> {
        match (ipv4_only, ipv6_only) {
            (true, true) => Err(DomainError::ConfigError(
                "Cannot force both IPv4 and IPv6".to_string(),
            )),
            (true, false) => Ok(AddressFamily::V4),
            (false, true) => Ok(AddressFamily::V6),
            (false, false) => Ok(AddressFamily::Unspecified),
        }
    }

    pub fn matches(&self, ip: &IpAddr) -> bool {
        match self {
            AddressFamily::Unspecified => true,
            AddressFamily::V4 => ip.is_ipv4(),
            AddressFamily::V6 => ip.is_ipv6(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AddressFamily::Unspecified => "IP",
            AddressFamily::V4 => "IPv4",
            AddressFamily::V6 => "IPv6",
        }
    }
}

/// A resolved nameserver address; the host is kept only for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub host: Arc<str>,
    pub ip: IpAddr,
    pub port: u16,
}

impl Target {
    pub fn new(host: impl Into<Arc<str>>, ip: IpAddr, port: u16) -> Self {
        Self {
            host: host.into(),
            ip,
            port,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.ip, self.port)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.as_ref() == self.ip.to_string() {
            write!(f, "{}", self.socket_addr())
        } else {
            write!(f, "{}({}):{}", self.host, self.ip, self.port)
        }
    }
}
