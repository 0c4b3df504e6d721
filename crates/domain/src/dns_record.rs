mod dns_class;
mod record_type;

pub use dns_class::DnsClass;
pub use record_type::RecordType;
