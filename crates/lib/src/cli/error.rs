use core::fmt;
use core::ops::Range;

use crate::env::Size;
use crate::input::{IStr, IStrError};

/// Used by the entry macro to associate the input position with an error.
///
/// The position is taken from the first [IStrError] in the error chain, or
/// the start of the input if there is none.
#[doc(hidden)]
pub fn error_context<E>(path: &'static str, data: IStr, error: E) -> anyhow::Error
where
    anyhow::Error: From<E>,
{
    let error = anyhow::Error::from(error);
    let span = find_range(&error);
    let pos = crate::env::pos_from(data.as_data(), span);
    error.context(ErrorContext { path, pos })
}

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    pub(crate) const EMPTY: Self = Self::new(0, 0);

    pub(crate) const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Need to be able to unwrap an error fully in case it's threaded through
/// multiple layers of processing.
fn find_range(error: &anyhow::Error) -> Range<Size> {
    error
        .chain()
        .find_map(|e| e.downcast_ref::<IStrError>())
        .map(|e| e.span.clone())
        .unwrap_or(Size::ZERO..Size::ZERO)
}

#[derive(Debug)]
struct ErrorContext {
    path: &'static str,
    pos: LineCol,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{path}:{pos}", path = self.path, pos = self.pos)
    }
}
