use super::message_builder::{MessageBuilder, QueryMessage};
use super::response_parser::ResponseParser;
use crate::dns::transport::{TransportReply, UdpTransport};
use async_trait::async_trait;
use nsidenum_application::ports::{NsidProbe, ProbeReply};
use nsidenum_domain::{DomainError, QuerySpec};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

/// [`NsidProbe`] over plain UDP: build, exchange, interpret.
pub struct UdpNsidProbe {
    spec: QuerySpec,
    template: QueryMessage,
}

impl UdpNsidProbe {
    /// Fails with `InvalidQuerySpec` when the query cannot be encoded, before any I/O.
    pub fn new(spec: QuerySpec) -> Result<Self, DomainError> {
        let template = MessageBuilder::build_query(&spec)?;
        template.to_bytes()?;
        Ok(Self { spec, template })
    }
}

#[async_trait]
impl NsidProbe for UdpNsidProbe {
    async fn probe(
        &self,
        target: SocketAddr,
        source_port: u16,
        timeout: Duration,
    ) -> Result<ProbeReply, DomainError> {
        let id = fastrand::u16(..);
        let query_bytes = self.template.to_bytes_with_id(id)?;

        let transport = UdpTransport::new(target);
        match transport.exchange(&query_bytes, source_port, timeout).await? {
            TransportReply::TimedOut => Ok(ProbeReply::TimedOut),
            TransportReply::Datagram(raw) => {
                debug!(sport = source_port, id = id, bytes = raw.len(), "Interpreting response");
                let options = ResponseParser::parse_reply(&raw, id, self.spec.identity_probe)?;
                Ok(ProbeReply::Responded(options))
            }
        }
    }

    fn query(&self) -> &QuerySpec {
        &self.spec
    }
}
