use core::ops::Range;

use anyhow::{anyhow, Context, Result};

use crate::cli::LineCol;
use crate::input::{IStr, NL};

/// A byte offset into the input.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Size(usize);

impl Size {
    /// Default zero value.
    pub(crate) const ZERO: Self = Self(0);

    #[inline]
    pub(crate) fn new(n: usize) -> Self {
        Self(n)
    }

    #[inline]
    pub(crate) fn checked_add(self, b: Size) -> Option<Self> {
        Some(Self(self.0.checked_add(b.0)?))
    }

    #[inline]
    pub(crate) fn saturating_add(self, n: Size) -> Self {
        Self(self.0.saturating_add(n.0))
    }
}

/// Get the line and column at which the given span starts.
pub(crate) fn pos_from(data: &[u8], span: Range<Size>) -> Option<LineCol> {
    let start = span.start.0.min(data.len());
    let head = data.get(..start)?;

    let line = memchr::memchr_iter(NL, head).count();
    let line_start = memchr::memrchr(NL, head).map_or(0, |n| n + 1);

    Some(LineCol::new(line, start - line_start))
}

/// Read the input at `read_path`.
///
/// The buffer is leaked, since it's needed for the remainder of the process
/// anyway.
#[inline]
pub fn input(path: &'static str, read_path: &str) -> Result<IStr> {
    let data = std::fs::read(read_path).with_context(|| anyhow!(path))?;
    Ok(IStr::new(data.leak(), Size::ZERO))
}

/// Prepare an input processor, evaluating to the input and its display path.
#[macro_export]
macro_rules! input {
    ($path:literal) => {{
        let path = concat!("inputs/", $path);
        let read_path = concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path);
        ($crate::env::input(path, read_path)?, path)
    }};
}
