pub mod udp;

pub use udp::UdpTransport;

/// Terminal state of one datagram exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportReply {
    /// Raw bytes of the first datagram received from the target.
    Datagram(Vec<u8>),
    /// Nothing arrived from the target before the deadline.
    TimedOut,
}
