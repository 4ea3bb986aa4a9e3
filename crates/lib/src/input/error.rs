use core::ops::Range;

use bstr::BStr;
use thiserror::Error;

use crate::env::Size;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("not an integer or integer overflow `{0}`")]
    NotInteger(&'static BStr),
    #[error("unexpected eof")]
    UnexpectedEof,
    #[error("{0}")]
    Boxed(anyhow::Error),
}

/// Error raised through string processing.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct IStrError {
    pub(crate) span: Range<Size>,
    pub(crate) kind: ErrorKind,
}

impl IStrError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<Size>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// Wrap an error raised while converting a parsed value.
    #[inline]
    pub fn boxed(span: Range<Size>, error: anyhow::Error) -> Self {
        Self::new(span, ErrorKind::Boxed(error))
    }

    /// The kind of the error.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}
