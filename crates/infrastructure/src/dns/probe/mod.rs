pub mod message_builder;
pub mod record_type_map;
pub mod response_parser;
pub mod udp_probe;

pub use message_builder::{MessageBuilder, QueryMessage};
pub use record_type_map::RecordTypeMapper;
pub use response_parser::ResponseParser;
pub use udp_probe::UdpNsidProbe;
