//! Line-oriented batch conversion
//!
//! Each data line starts with `lon,lat`; any further comma-separated fields
//! are kept as they are. Blank lines and `#` comments pass through.

use std::io::{BufRead, Write};
use log::{debug, warn};

use super::crs::CoordinateSystem;
use super::point::Coordinate;
use super::transform::convert;
use crate::errors::ToolkitResult;

/// Outcome of a batch conversion
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Lines converted
    pub converted: usize,
    /// Data lines that could not be parsed and were copied unchanged
    pub skipped: usize,
}

/// Convert a single line, returning None if it does not start with a coordinate
fn convert_line(line: &str, from: CoordinateSystem, to: CoordinateSystem) -> Option<String> {
    let mut fields = line.splitn(3, ',');
    let lon = fields.next()?;
    let lat = fields.next()?;
    let rest = fields.next();

    let coordinate = Coordinate::from_string(&format!("{},{}", lon, lat)).ok()?;
    let converted = convert(coordinate, from, to);

    Some(match rest {
        Some(rest) => format!("{},{}", converted, rest),
        None => converted.to_string(),
    })
}

/// Convert every coordinate line read from `reader` and write the result to `writer`
pub fn convert_lines<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    from: CoordinateSystem,
    to: CoordinateSystem,
) -> ToolkitResult<ConversionReport> {
    let mut report = ConversionReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            writeln!(writer, "{}", line)?;
            continue;
        }

        match convert_line(trimmed, from, to) {
            Some(converted) => {
                writeln!(writer, "{}", converted)?;
                report.converted += 1;
            },
            None => {
                warn!("Line {}: not a 'lon,lat' record, copied unchanged", index + 1);
                writeln!(writer, "{}", line)?;
                report.skipped += 1;
            }
        }
    }

    debug!("Batch conversion {} -> {}: {} converted, {} skipped",
           from, to, report.converted, report.skipped);
    Ok(report)
}
