use std::io::{self, Write};

use accum::{Rational, add};
use anyhow::Result;

/// Write the demonstration accumulations to `out`, one per line.
fn run(mut out: impl Write) -> Result<()> {
    let a = add!(2, 3, 4);
    tracing::debug!(a, "Accumulated three integers");
    writeln!(out, "{a}")?;

    let b = add!(2, 5);
    tracing::debug!(b, "Accumulated two integers");
    writeln!(out, "{b}")?;

    let r = add!(Rational::new(3, 4), Rational::new(4, 4), Rational::new(5, 4));
    tracing::debug!(%r, "Accumulated three rationals");
    writeln!(out, "{}/{}", r.numerator(), r.denominator())?;

    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .try_init()
        .map_err(anyhow::Error::msg)?;

    run(io::stdout().lock())
}
