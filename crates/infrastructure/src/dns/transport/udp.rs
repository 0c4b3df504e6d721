//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Every exchange binds its own socket to a caller-chosen source port so the
//! resulting 5-tuple, and therefore the ECMP path, is under our control.

use super::TransportReply;
use nsidenum_domain::DomainError;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, warn};

/// Largest datagram a server may send when we advertise the maximum EDNS payload
const MAX_UDP_RESPONSE_SIZE: usize = 65_535;

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn bind_addr(&self, source_port: u16) -> SocketAddr {
        let unspecified = match self.server_addr.ip() {
            IpAddr::V4(_) => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            IpAddr::V6(_) => IpAddr::V6(Ipv6Addr::UNSPECIFIED),
        };
        SocketAddr::new(unspecified, source_port)
    }

    /// IPv6 flow label and scope id are not part of the peer identity.
    fn is_from_server(&self, from_addr: SocketAddr) -> bool {
        from_addr.ip() == self.server_addr.ip() && from_addr.port() == self.server_addr.port()
    }

    /// Send `message_bytes` once from `source_port` and wait for the reply.
    ///
    /// `timeout` bounds the whole exchange, send included. Datagrams from
    /// other peers are dropped without extending the deadline.
    pub async fn exchange(
        &self,
        message_bytes: &[u8],
        source_port: u16,
        timeout: Duration,
    ) -> Result<TransportReply, DomainError> {
        let deadline = Instant::now() + timeout;

        let socket = UdpSocket::bind(self.bind_addr(source_port))
            .await
            .map_err(|e| transport_error(source_port, format!("Failed to bind UDP socket: {}", e)))?;

        let bytes_sent = match timeout_at(deadline, socket.send_to(message_bytes, self.server_addr))
            .await
        {
            Err(_) => return Ok(TransportReply::TimedOut),
            Ok(sent) => sent.map_err(|e| {
                transport_error(
                    source_port,
                    format!("Failed to send UDP query to {}: {}", self.server_addr, e),
                )
            })?,
        };

        debug!(
            server = %self.server_addr,
            sport = source_port,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        loop {
            let (bytes_received, from_addr) =
                match timeout_at(deadline, socket.recv_from(&mut recv_buf)).await {
                    Err(_) => return Ok(TransportReply::TimedOut),
                    Ok(received) => received.map_err(|e| {
                        transport_error(
                            source_port,
                            format!(
                                "Failed to receive UDP response from {}: {}",
                                self.server_addr, e
                            ),
                        )
                    })?,
                };

            if !self.is_from_server(from_addr) {
                warn!(
                    expected = %self.server_addr,
                    received_from = %from_addr,
                    sport = source_port,
                    "Ignoring UDP datagram from unexpected source"
                );
                continue;
            }

            recv_buf.truncate(bytes_received);

            debug!(
                server = %self.server_addr,
                sport = source_port,
                bytes_received = bytes_received,
                "UDP response received"
            );

            return Ok(TransportReply::Datagram(recv_buf));
        }
    }
}

fn transport_error(port: u16, reason: String) -> DomainError {
    DomainError::Transport { port, reason }
}
