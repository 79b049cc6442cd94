use crate::dataset::Dataset;
use crate::stats::Summary;
use anyhow::{Context, Result};
use std::io::Write;

/// Write the four statistics as labelled lines.
pub fn print_statistics<W: Write>(writer: &mut W, summary: &Summary) -> Result<()> {
    writeln!(writer, "Minimum: {}", summary.minimum)?;
    writeln!(writer, "Maximum: {}", summary.maximum)?;
    writeln!(writer, "Mean: {}", summary.mean)?;
    writeln!(writer, "Median: {}", summary.median)?;
    Ok(())
}

/// Write the summary as pretty-printed JSON followed by a newline.
pub fn print_summary_json<W: Write>(writer: &mut W, summary: &Summary) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, summary).context("failed to serialize summary")?;
    writeln!(writer)?;
    Ok(())
}

/// Write every dataset value as an unsigned decimal followed by a single
/// space, then end the line.
pub fn print_array<W: Write>(writer: &mut W, data: &Dataset) -> Result<()> {
    for &val in data.values() {
        write!(writer, "{val} ")?;
    }
    writeln!(writer)?;
    Ok(())
}
