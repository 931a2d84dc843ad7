//! Output formatting for route and trail listings.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use squallywood_lib::RouteSummary;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Write a route summary to `out`.
    pub fn write_route(self, out: &mut impl Write, summary: &RouteSummary) -> io::Result<()> {
        match self {
            OutputFormat::Text => out.write_all(summary.render_plain().as_bytes()),
            OutputFormat::Json => write_json(out, summary),
        }
    }

    /// Write a list of trail names to `out`.
    pub fn write_trails(self, out: &mut impl Write, names: &[String]) -> io::Result<()> {
        match self {
            OutputFormat::Text => {
                for name in names {
                    writeln!(out, "{name}")?;
                }
                Ok(())
            }
            OutputFormat::Json => write_json(out, names),
        }
    }
}

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::from)?;
    writeln!(out)
}
