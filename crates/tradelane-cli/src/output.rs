//! Output formatting for route rendering.
//!
//! This module provides formatters for rendering route summaries
//! in the formats selectable with `--format`.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;
use tradelane_lib::{RouteRenderMode, RouteStep, RouteSummary};

use crate::terminal::{format_km, ColorPalette};

/// Output formats accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Tagged, colourised listing with per-leg distances.
    #[default]
    Text,
    /// Markdown-flavoured listing.
    Rich,
    /// One line per point with `+`/`|`/`-` prefixes.
    Basic,
    /// Pretty-printed JSON summary.
    Json,
    /// GeoJSON `Feature` with a `LineString` geometry.
    Geojson,
}

/// Render a route summary in the requested format to stdout.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_summary(summary: &RouteSummary, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => write_text(&mut out, summary, ColorPalette::detect()),
        OutputFormat::Rich => out.write_all(summary.render(RouteRenderMode::RichText).as_bytes()),
        OutputFormat::Basic => write_basic(&mut out, summary),
        OutputFormat::Json => write_json(&mut out, summary),
        OutputFormat::Geojson => write_json(&mut out, &summary.to_geojson()),
    }
}

/// Write any serialisable value as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    out.write_all(b"\n")
}

/// Human-friendly route view with a tag per point.
pub fn write_text<W: Write>(
    out: &mut W,
    summary: &RouteSummary,
    palette: ColorPalette,
) -> io::Result<()> {
    writeln!(
        out,
        "{} route from {} to {} ({} segments; {}):",
        summary.service, summary.start, summary.goal, summary.segments, summary.outcome
    )?;

    let last = summary.steps.len().saturating_sub(1);
    for step in &summary.steps {
        let (tag_color, tag) = step_tag(step, last, palette);
        write!(out, " {}{}{} ", tag_color, tag, palette.reset)?;
        match &step.name {
            Some(name) => write!(
                out,
                "{}{}{} {}{}{}",
                palette.white_bold, name, palette.reset, palette.gray, step.position, palette.reset
            )?,
            None => write!(out, "{}", step.position)?,
        }
        if step.index > 0 {
            write!(
                out,
                " {}+{}{}",
                palette.green,
                format_km(step.leg_km),
                palette.reset
            )?;
        }
        writeln!(out)?;
    }

    writeln!(out, "\nTotal distance: {}", format_km(summary.distance_km))
}

fn step_tag(step: &RouteStep, last: usize, palette: ColorPalette) -> (&'static str, &'static str) {
    if step.index == 0 {
        (palette.tag_origin, "ORIG")
    } else if step.index == last {
        (palette.tag_dest, "DEST")
    } else if step.name.is_some() {
        (palette.tag_waypoint, "PORT")
    } else {
        (palette.tag_point, " PT ")
    }
}

/// Minimal path format: `+` first, `|` middle, `-` last.
pub fn write_basic<W: Write>(out: &mut W, summary: &RouteSummary) -> io::Result<()> {
    let len = summary.steps.len();
    for (i, step) in summary.steps.iter().enumerate() {
        let prefix = if i == 0 {
            '+'
        } else if i + 1 == len {
            '-'
        } else {
            '|'
        };
        match &step.name {
            Some(name) => writeln!(out, "{} {} {}", prefix, name, step.position)?,
            None => writeln!(out, "{} {}", prefix, step.position)?,
        }
    }
    writeln!(out, "via {} ({})", summary.outcome, format_km(summary.distance_km))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradelane_lib::{default_graph, plan_route, Coordinate, RouteRequest, ServiceType};

    fn summary() -> RouteSummary {
        let plan = plan_route(
            default_graph(),
            &RouteRequest::new(
                ServiceType::Sea,
                Coordinate::new(35.5138, 35.78),
                Coordinate::new(33.89, 35.50),
            ),
        );
        RouteSummary::from_plan(&plan).expect("summary")
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buffer = Vec::new();
        f(&mut buffer).expect("render");
        String::from_utf8(buffer).expect("utf8")
    }

    #[test]
    fn text_tags_endpoints_and_ports() {
        let summary = summary();
        let text = render(|out| write_text(out, &summary, ColorPalette::plain()));
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("sea route from 35.5138,35.7800 to 33.8900,35.5000"));
        assert!(lines[1].starts_with(" ORIG 35.5138,35.7800"));
        assert!(lines[2].starts_with(" PORT latakia"));
        assert!(text.contains(" DEST 33.8900,35.5000"));
        assert!(text.contains("Total distance:"));
    }

    #[test]
    fn basic_uses_path_prefixes() {
        let summary = summary();
        let text = render(|out| write_basic(out, &summary));
        assert!(text.starts_with("+ 35.5138,35.7800\n| latakia"));
        assert!(text.contains("- 33.8900,35.5000\nvia graph"));
    }

    #[test]
    fn json_round_trips_through_serde() {
        let summary = summary();
        let text = render(|out| write_json(out, &summary));
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(value["service"], "sea");
        assert_eq!(value["outcome"], "graph");
    }
}
