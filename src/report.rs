//! Plain-text launch report.

use std::fmt::Write as _;
use std::io::{self, Write};

use launch_geometry::normalize_heading_deg;

use crate::mission::ComputationResult;

/// Decimal places printed for headings.
const HEADING_DECIMALS: i32 = 4;

/// Render the report: azimuth(s), orbital speed, delta-v required, and speed saved.
pub fn render_text(result: &ComputationResult) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Launch azimuth in degrees:");
    let _ = writeln!(out, "{}", format_heading(result.heading_deg));
    if let Some(alternate) = result.alternate_heading_deg {
        let _ = writeln!(out, "{}", format_heading(alternate));
    }
    let _ = writeln!(out, "\nOrbital speed in meters per second:");
    let _ = writeln!(out, "{:.3}", result.orbital_speed);
    let _ = writeln!(out, "\nDelta-v required, less gravity/drag losses:");
    let _ = writeln!(out, "{:.3}", result.boost_speed);
    let _ = writeln!(out, "\nSpeed saved in meters per second:");
    let _ = writeln!(out, "{:.3}", result.delta_v);
    out
}

/// Round to the printed precision first so a heading just below 360 prints as 0.
fn format_heading(heading_deg: f64) -> String {
    let scale = 10f64.powi(HEADING_DECIMALS);
    let rounded = normalize_heading_deg((heading_deg * scale).round() / scale);
    format!("{:.*}", HEADING_DECIMALS as usize, rounded)
}

pub fn write_text(writer: &mut dyn Write, result: &ComputationResult) -> io::Result<()> {
    writer.write_all(render_text(result).as_bytes())?;
    writer.flush()
}
