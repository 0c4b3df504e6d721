use nsidenum_domain::{display_identifier, CorrelationWarning, Report, Verbosity};
use std::io::{self, Write};

/// Human-readable report; quiet mode prints bare NSIDs, one per line.
pub fn render(report: &Report, verbosity: Verbosity, out: &mut impl Write) -> io::Result<()> {
    if verbosity == Verbosity::Quiet {
        for nsid in &report.nsids {
            writeln!(out, "{}", display_identifier(nsid))?;
        }
        return Ok(());
    }

    let hint = if report.server_count() > 0 {
        ""
    } else {
        " (target not supporting NSID?)"
    };
    writeln!(out, "Found {} servers{}", report.server_count(), hint)?;
    if report.cancelled {
        writeln!(out, "Sweep interrupted, results are partial")?;
    }
    write_numbered(out, &report.nsids)?;

    if let Some(identities) = &report.identities {
        writeln!(out)?;
        writeln!(out, "Found {} id.server. identities", identities.len())?;
        write_numbered(out, identities)?;
    }

    if !report.warnings.is_empty() {
        writeln!(out)?;
        writeln!(out, "Warnings:")?;
        for warning in &report.warnings {
            writeln!(out, "  {}", describe_warning(warning))?;
        }
    }

    let stats = &report.statistics;
    writeln!(out)?;
    writeln!(out, "Statistics:")?;
    writeln!(out, "Total DNS queries      : {}", stats.total_queries)?;
    writeln!(out, "Timeouts               : {}", stats.timeouts)?;
    if stats.malformed > 0 {
        writeln!(out, "Malformed responses    : {}", stats.malformed)?;
    }
    if stats.transport_errors > 0 {
        writeln!(out, "Transport errors       : {}", stats.transport_errors)?;
    }
    writeln!(out, "Percent failed queries : {:.2}", stats.timeout_percentage)?;

    Ok(())
}

fn write_numbered(out: &mut impl Write, identifiers: &[Vec<u8>]) -> io::Result<()> {
    for (idx, identifier) in identifiers.iter().enumerate() {
        writeln!(out, "{}) {}", idx + 1, display_identifier(identifier))?;
    }
    Ok(())
}

fn describe_warning(warning: &CorrelationWarning) -> String {
    match warning {
        CorrelationWarning::Mismatch {
            source_port,
            nsid,
            identity,
        } => format!(
            "sport {}: NSID '{}' does not match id.server. '{}'",
            source_port,
            display_identifier(nsid),
            display_identifier(identity)
        ),
        CorrelationWarning::Ambiguous {
            source_port,
            identities,
        } => format!(
            "sport {}: id.server. returned {} different values ({}), not correlated",
            source_port,
            identities.len(),
            identities
                .iter()
                .map(|identity| format!("'{}'", display_identifier(identity)))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}
