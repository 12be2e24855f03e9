//! Rendering report sections for the console

use std::io::Write;

use domain_donation::ReportSection;
use crate::config::OutputFormat;
use crate::error::CliError;

/// Renders sections in the requested format
///
/// Text output separates sections with a blank line; JSON output is a
/// pretty-printed array.
pub fn render(sections: &[ReportSection], format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(sections
            .iter()
            .map(|s| format!("\n{}", s))
            .collect::<String>()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(sections)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Writes rendered sections to `out`
pub fn write_report<W: Write>(
    out: &mut W,
    sections: &[ReportSection],
    format: OutputFormat,
) -> Result<(), CliError> {
    out.write_all(render(sections, format)?.as_bytes())?;
    out.flush()?;
    Ok(())
}
