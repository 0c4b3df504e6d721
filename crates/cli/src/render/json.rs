use nsidenum_domain::{hex_identifier, CorrelationWarning, QueryStatistics, Report};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct ReportDto {
    servers: usize,
    nsids: Vec<IdentifierDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    identities: Option<Vec<IdentifierDto>>,
    warnings: Vec<WarningDto>,
    statistics: StatisticsDto,
    cancelled: bool,
}

/// Identifiers are opaque bytes: `text` is a lossy UTF-8 view, `hex` is exact.
#[derive(Debug, Serialize)]
struct IdentifierDto {
    text: String,
    hex: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum WarningDto {
    Mismatch {
        source_port: u16,
        nsid: IdentifierDto,
        identity: IdentifierDto,
    },
    Ambiguous {
        source_port: u16,
        identities: Vec<IdentifierDto>,
    },
}

#[derive(Debug, Serialize)]
struct StatisticsDto {
    total_queries: u64,
    timeouts: u64,
    responses: u64,
    malformed: u64,
    transport_errors: u64,
    timeout_percentage: f64,
}

impl IdentifierDto {
    fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            text: String::from_utf8_lossy(bytes).into_owned(),
            hex: hex_identifier(bytes),
        }
    }

    fn list(identifiers: &[Vec<u8>]) -> Vec<Self> {
        identifiers.iter().map(|i| Self::from_bytes(i)).collect()
    }
}

impl From<&CorrelationWarning> for WarningDto {
    fn from(warning: &CorrelationWarning) -> Self {
        match warning {
            CorrelationWarning::Mismatch {
                source_port,
                nsid,
                identity,
            } => WarningDto::Mismatch {
                source_port: *source_port,
                nsid: IdentifierDto::from_bytes(nsid),
                identity: IdentifierDto::from_bytes(identity),
            },
            CorrelationWarning::Ambiguous {
                source_port,
                identities,
            } => WarningDto::Ambiguous {
                source_port: *source_port,
                identities: IdentifierDto::list(identities),
            },
        }
    }
}

impl From<&QueryStatistics> for StatisticsDto {
    fn from(stats: &QueryStatistics) -> Self {
        Self {
            total_queries: stats.total_queries,
            timeouts: stats.timeouts,
            responses: stats.responses,
            malformed: stats.malformed,
            transport_errors: stats.transport_errors,
            timeout_percentage: stats.timeout_percentage,
        }
    }
}

impl From<&Report> for ReportDto {
    fn from(report: &Report) -> Self {
        Self {
            servers: report.server_count(),
            nsids: IdentifierDto::list(&report.nsids),
            identities: report.identities.as_deref().map(IdentifierDto::list),
            warnings: report.warnings.iter().map(WarningDto::from).collect(),
            statistics: StatisticsDto::from(&report.statistics),
            cancelled: report.cancelled,
        }
    }
}

pub fn render(report: &Report, out: &mut impl Write) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &ReportDto::from(report))?;
    writeln!(out)?;
    Ok(())
}
