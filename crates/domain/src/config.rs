pub mod errors;
pub mod logging;
pub mod output;
pub mod query;
pub mod root;
pub mod sweep;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use output::{OutputConfig, OutputFormat, Verbosity};
pub use query::QueryConfig;
pub use root::{CliOverrides, EnumeratorConfig, NetworkConfig};
pub use sweep::SweepConfig;
