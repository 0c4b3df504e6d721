use async_trait::async_trait;
use nsidenum_domain::{DomainError, QuerySpec, ResponseOptions};
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeReply {
    Responded(ResponseOptions),
    TimedOut,
}

/// One query/response exchange from a fixed source port.
///
/// Implementations send exactly one query and wait at most `timeout` for
/// the reply; the socket bound to `source_port` must be released before
/// the returned future completes. Failures are reported as
/// [`DomainError::Transport`] or [`DomainError::MalformedResponse`].
#[async_trait]
pub trait NsidProbe: Send + Sync {
    async fn probe(
        &self,
        target: SocketAddr,
        source_port: u16,
        timeout: Duration,
    ) -> Result<ProbeReply, DomainError>;

    fn query(&self) -> &QuerySpec;
}
