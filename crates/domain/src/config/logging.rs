use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Explicit level; when unset the level follows `--verbose` / `--quiet`.
    #[serde(default)]
    pub level: Option<String>,
}
