//! The conversion command.

use std::io::Write;

use anyhow::{Context, Result};
use edtf_temper::{EdtfToTemper, Temper};
use tracing::{debug, info_span};

/// Converts `datestr` and writes the TEMPER string, one line, to `out`.
///
/// Unconvertible dates are written as the unavailable sentinel; only a
/// failed write is an error.
pub fn run<W: Write>(datestr: &str, out: &mut W) -> Result<Temper> {
    let span = info_span!("convert", datestr);
    let _guard = span.enter();

    let converted = EdtfToTemper::new(datestr);
    debug!(edtf = converted.edtf(), temper = %converted.temper(), "converted");

    writeln!(out, "{}", converted.temper()).context("write TEMPER date")?;
    out.flush().context("flush output")?;
    Ok(converted.into_temper())
}
