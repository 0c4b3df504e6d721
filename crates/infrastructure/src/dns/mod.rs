pub mod probe;
pub mod transport;

pub use probe::{MessageBuilder, QueryMessage, ResponseParser, UdpNsidProbe};
pub use transport::{TransportReply, UdpTransport};
