//! Text renderings of a [`Header`] and writing them to an output stream.

use std::io::Write;

use clap::ValueEnum;

use crate::record::Header;

/// How a header is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Single-line `Debug` output.
    #[default]
    Debug,
    /// Multi-line `Debug` output with one field per line.
    Pretty,
    /// Single-line JSON object.
    Json,
}

/// Render `header` in `format`, without a trailing newline.
pub fn render(header: &Header, format: Format) -> Result<String, String> {
    match format {
        Format::Debug => Ok(format!("{header:?}")),
        Format::Pretty => Ok(format!("{header:#?}")),
        Format::Json => {
            serde_json::to_string(header).map_err(|e| format!("failed to encode header: {e}"))
        }
    }
}

/// Write the rendering of `header` plus a newline to `out` and flush it.
pub fn emit<W: Write>(out: &mut W, header: &Header, format: Format) -> Result<(), String> {
    let text = render(header, format)?;
    writeln!(out, "{text}").map_err(|e| format!("failed to write header: {e}"))?;
    out.flush()
        .map_err(|e| format!("failed to flush output: {e}"))?;
    tracing::debug!(bytes = text.len() + 1, ?format, "header written");
    Ok(())
}
