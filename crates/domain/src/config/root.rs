use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::output::{OutputConfig, OutputFormat, Verbosity};
use super::query::QueryConfig;
use super::sweep::SweepConfig;
use crate::query_spec::MIN_EDNS_PAYLOAD;
use crate::{AddressFamily, DomainError, PortRange, QuerySpec};

/// Main configuration structure for an enumeration run
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct EnumeratorConfig {
    /// Nameserver to enumerate (hostname or IP literal)
    pub target: Option<String>,

    /// What to ask on every exchange
    pub query: QueryConfig,

    /// Source-port sweep parameters
    pub sweep: SweepConfig,

    /// Address family selection
    pub network: NetworkConfig,

    /// Report verbosity and format
    pub output: OutputConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub ipv4_only: bool,
    pub ipv6_only: bool,
}

impl EnumeratorConfig {
    /// Load configuration from an optional file, then apply command-line overrides
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(target) = overrides.target {
            self.target = Some(target);
        }
        if let Some(name) = overrides.qname {
            self.query.name = name;
        }
        if let Some(qtype) = overrides.qtype {
            self.query.record_type = qtype;
        }
        if let Some(qclass) = overrides.qclass {
            self.query.record_class = qclass;
        }
        if let Some(identity_probe) = overrides.identity_probe {
            self.query.identity_probe = identity_probe;
        }
        if let Some(edns) = overrides.edns {
            self.query.edns = edns;
        }
        if let Some(payload_size) = overrides.payload_size {
            self.query.payload_size = payload_size;
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.sweep.timeout_secs = timeout;
        }
        if let Some(port) = overrides.source_port {
            self.sweep.source_port = port;
        }
        if let Some(port) = overrides.dest_port {
            self.sweep.dest_port = port;
        }
        if let Some(paths) = overrides.enumerate {
            self.sweep.enumerate = Some(paths);
        }
        if let Some(concurrency) = overrides.concurrency {
            self.sweep.concurrency = concurrency;
        }
        if let Some(v4) = overrides.ipv4_only {
            self.network.ipv4_only = v4;
        }
        if let Some(v6) = overrides.ipv6_only {
            self.network.ipv6_only = v6;
        }
        if let Some(verbose) = overrides.verbose {
            self.output.verbose = verbose;
        }
        if let Some(quiet) = overrides.quiet {
            self.output.quiet = quiet;
        }
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = Some(level);
        }
    }

    /// Validate configuration; nothing here touches the network
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_host().is_err() {
            return Err(ConfigError::Validation(
                "Target cannot be empty".to_string(),
            ));
        }

        let timeout = self.sweep.timeout_secs;
        if !timeout.is_finite() || timeout <= 0.0 || timeout > u32::MAX as f64 {
            return Err(ConfigError::Validation(format!(
                "Timeout must be a positive number of seconds (got {})",
                timeout
            )));
        }

        if self.sweep.dest_port == 0 {
            return Err(ConfigError::Validation(
                "Destination port must be a number between 1 and 65535".to_string(),
            ));
        }

        if self.sweep.concurrency == 0 {
            return Err(ConfigError::Validation(
                "Concurrency must be at least 1".to_string(),
            ));
        }

        if self.query.edns && self.query.payload_size < MIN_EDNS_PAYLOAD {
            return Err(ConfigError::Validation(format!(
                "EDNS payload size must be at least {} (got {})",
                MIN_EDNS_PAYLOAD, self.query.payload_size
            )));
        }

        self.port_range()
            .and(self.verbosity())
            .and(self.address_family())
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        Ok(())
    }

    /// Target from the command line, or from the config file when none was given
    pub fn target_host(&self) -> Result<&str, DomainError> {
        self.target
            .as_deref()
            .map(str::trim)
            .filter(|target| !target.is_empty())
            .ok_or_else(|| DomainError::ConfigError("Target cannot be empty".to_string()))
    }

    pub fn query_spec(&self) -> Result<QuerySpec, DomainError> {
        QuerySpec::new(
            &self.query.name,
            &self.query.record_type,
            &self.query.record_class,
            self.query.edns_settings(),
            self.query.identity_probe,
        )
    }

    pub fn port_range(&self) -> Result<PortRange, DomainError> {
        PortRange::from_enumeration(self.sweep.source_port, self.sweep.enumerate)
    }

    pub fn verbosity(&self) -> Result<Verbosity, DomainError> {
        Verbosity::from_flags(self.output.verbose, self.output.quiet)
    }

    pub fn address_family(&self) -> Result<AddressFamily, DomainError> {
        AddressFamily::from_flags(self.network.ipv4_only, self.network.ipv6_only)
    }

    pub fn log_level(&self) -> String {
        match &self.logging.level {
            Some(level) => level.clone(),
            None => self
                .verbosity()
                .unwrap_or_default()
                .default_log_level()
                .to_string(),
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub target: Option<String>,
    pub qname: Option<String>,
    pub qtype: Option<String>,
    pub qclass: Option<String>,
    pub identity_probe: Option<bool>,
    pub edns: Option<bool>,
    pub payload_size: Option<u16>,
    pub timeout_secs: Option<f64>,
    pub source_port: Option<u16>,
    pub dest_port: Option<u16>,
    pub enumerate: Option<u32>,
    pub concurrency: Option<usize>,
    pub ipv4_only: Option<bool>,
    pub ipv6_only: Option<bool>,
    pub verbose: Option<bool>,
    pub quiet: Option<bool>,
    pub format: Option<OutputFormat>,
    pub log_level: Option<String>,
}
