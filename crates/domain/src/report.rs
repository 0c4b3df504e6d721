use super::CorrelationWarning;

#[derive(Debug, Clone, PartialEq)]
pub struct QueryStatistics {
    pub total_queries: u64,
    pub timeouts: u64,
    pub responses: u64,
    pub malformed: u64,
    pub transport_errors: u64,
    pub timeout_percentage: f64,
}

impl QueryStatistics {
    pub fn timeout_percentage(timeouts: u64, total_queries: u64) -> f64 {
        if total_queries == 0 {
            return 0.0;
        }
        timeouts as f64 / total_queries as f64 * 100.0
    }
}

/// Frozen outcome of a sweep, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Byte-lexicographically sorted, no duplicates.
    pub nsids: Vec<Vec<u8>>,
    /// `None` when the identity probe was not requested.
    pub identities: Option<Vec<Vec<u8>>>,
    pub warnings: Vec<CorrelationWarning>,
    pub statistics: QueryStatistics,
    pub cancelled: bool,
}

impl Report {
    pub fn server_count(&self) -> usize {
        self.nsids.len()
    }
}

/// Printable form of an opaque identifier: ASCII kept, everything else `\xNN`-escaped.
pub fn display_identifier(bytes: &[u8]) -> String {
    bytes.escape_ascii().to_string()
}

/// Lowercase hex form of an opaque identifier.
pub fn hex_identifier(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
