//! Glue used by [entry!][crate::entry] to run a solver.

mod error;
mod output_eq;
mod stderr_logger;

#[cfg(test)]
mod tests;

use core::fmt;
use core::time::Duration;
use std::io::{self, Write};

use anyhow::{anyhow, bail, Result};

pub use self::error::{error_context, LineCol};
pub use self::output_eq::OutputEq;

static STDERR_LOGGER: stderr_logger::StderrLogger = stderr_logger::StderrLogger;

/// Install the logger.
///
/// Logs go to stderr, since stdout is reserved for answers.
pub fn init() -> Result<()> {
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    log::set_max_level(level);
    log::set_logger(&STDERR_LOGGER).map_err(|error| anyhow!("failed to set log: {error}"))?;
    Ok(())
}

/// Answers produced by a solver, written one per line.
pub trait Parts {
    /// Write answers to the given output.
    fn write_parts(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl<A, B> Parts for (A, B)
where
    A: fmt::Display,
    B: fmt::Display,
{
    fn write_parts(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.0)?;
        writeln!(out, "{}", self.1)?;
        Ok(())
    }
}

/// Compare answers with the expected ones.
pub fn check<O, C>(value: &O, expected: &C) -> Result<()>
where
    O: fmt::Debug + OutputEq<C>,
    C: fmt::Debug,
{
    if !value.output_eq(expected) {
        bail!("{value:?} (value) != {expected:?} (expected)");
    }

    Ok(())
}

#[doc(hidden)]
pub fn solved(path: &'static str, elapsed: Duration) {
    log::info!("{path}: solved in {elapsed:?}");
}

/// Print answers to stdout.
pub fn emit<O>(value: &O) -> Result<()>
where
    O: Parts,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    value.write_parts(&mut out)?;
    out.flush()?;
    Ok(())
}
