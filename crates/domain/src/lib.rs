//! NSID enumerator domain layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod port_range;
pub mod query_spec;
pub mod report;
pub mod sweep;
pub mod target;

pub use config::{CliOverrides, ConfigError, EnumeratorConfig, OutputFormat, Verbosity};
pub use dns_record::{DnsClass, RecordType};
pub use errors::DomainError;
pub use port_range::PortRange;
pub use query_spec::{EdnsSettings, QuerySpec, IDENTITY_PROBE_NAME, NSID_OPTION_CODE};
pub use report::{display_identifier, hex_identifier, QueryStatistics, Report};
pub use sweep::{CorrelationWarning, ExchangeOutcome, ResponseOptions, SweepResult};
pub use target::{AddressFamily, Target};
