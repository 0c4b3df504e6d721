use crate::port_range::DEFAULT_SOURCE_PORT;
use crate::target::DEFAULT_DNS_PORT;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Per-exchange timeout in seconds.
    pub timeout_secs: f64,
    pub source_port: u16,
    pub dest_port: u16,
    /// Number of extra paths; `None` runs a single exchange.
    pub enumerate: Option<u32>,
    /// Exchanges allowed in flight at once; 1 keeps the sweep sequential.
    pub concurrency: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 1.0,
            source_port: DEFAULT_SOURCE_PORT,
            dest_port: DEFAULT_DNS_PORT,
            enumerate: None,
            concurrency: 1,
        }
    }
}

impl SweepConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs_f64(self.timeout_secs)
    }
}
