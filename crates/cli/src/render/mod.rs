pub mod json;
pub mod text;

use nsidenum_domain::{OutputFormat, Report, Verbosity};
use std::io::Write;

pub fn render(
    report: &Report,
    format: OutputFormat,
    verbosity: Verbosity,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => text::render(report, verbosity, out)?,
        OutputFormat::Json => json::render(report, out)?,
    }
    out.flush()?;
    Ok(())
}
