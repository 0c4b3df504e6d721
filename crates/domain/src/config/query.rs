use crate::query_spec::{EdnsSettings, DEFAULT_EDNS_PAYLOAD};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct QueryConfig {
    pub name: String,
    pub record_type: String,
    pub record_class: String,
    /// Replaces name/type/class with `id.server.` CH TXT.
    pub identity_probe: bool,
    pub edns: bool,
    pub payload_size: u16,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            name: ".".to_string(),
            record_type: "A".to_string(),
            record_class: "IN".to_string(),
            identity_probe: false,
            edns: true,
            payload_size: DEFAULT_EDNS_PAYLOAD,
        }
    }
}

impl QueryConfig {
    pub fn edns_settings(&self) -> EdnsSettings {
        if self.edns {
            EdnsSettings::with_payload_size(self.payload_size)
        } else {
            EdnsSettings::disabled()
        }
    }
}
