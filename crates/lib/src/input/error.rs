use core::fmt;
use core::ops::Range;

use crate::env::Size;

/// What went wrong while parsing input.
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    NotInteger(&'static str),
    NotUtf8,
    ExpectedLine,
    /// A pair or split tuple with the wrong number of elements.
    ExpectedTuple(usize),
    UnexpectedEof,
    /// Error raised by a custom parser, see [from_input!][crate::from_input].
    Boxed(anyhow::Error),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotInteger(n) => write!(f, "`{n}` is not an integer, or it overflows"),
            ErrorKind::NotUtf8 => write!(f, "input is not utf-8"),
            ErrorKind::ExpectedLine => write!(f, "expected another line"),
            ErrorKind::ExpectedTuple(n) => write!(f, "expected {n} elements"),
            ErrorKind::UnexpectedEof => write!(f, "unexpected end of input"),
            ErrorKind::Boxed(error) => error.fmt(f),
        }
    }
}

/// A parse error together with the span of input it covers.
#[derive(Debug)]
pub struct IStrError {
    pub(crate) span: Range<Size>,
    kind: ErrorKind,
}

impl IStrError {
    #[inline]
    pub fn new(span: Range<Size>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for IStrError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for IStrError {}
