//! Input environment which reads inputs at runtime and tracks positions, so
//! that parse errors can be reported as `path:line:column`.

use core::ops::Range;
use std::fs::File;
use std::io::Read;

use anyhow::{anyhow, Context};

use crate::cli::LineCol;
use crate::input::{IStr, NL};

/// A byte offset into the input being processed.
#[repr(transparent)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Size(usize);

impl Size {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub(crate) fn advance(&mut self, n: usize) {
        self.0 = self.0.saturating_add(n);
    }

    #[inline]
    pub(crate) fn offset(self, n: usize) -> Self {
        Self(self.0.saturating_add(n))
    }
}

/// Get the current input position based on the given span.
pub(crate) fn pos_from(data: &[u8], span: Range<Size>) -> LineCol {
    let start = span.start.0;

    let Some(d) = data.get(..start) else {
        return LineCol::EMPTY;
    };

    let (line, last) = memchr::memchr_iter(NL, d)
        .enumerate()
        .last()
        .map(|(line, n)| (line + 1, n + 1))
        .unwrap_or_default();

    LineCol::new(line, start.saturating_sub(last))
}

/// Read the input at `read_path` into process-lifetime storage.
#[inline]
pub fn input(
    path: &'static str,
    read_path: &str,
    storage: &'static mut Vec<u8>,
) -> anyhow::Result<IStr> {
    return inner(read_path, storage).with_context(|| anyhow!(path));

    #[inline]
    fn inner(read_path: &str, storage: &'static mut Vec<u8>) -> anyhow::Result<IStr> {
        let mut file = File::open(read_path)?;
        let mut buf = Vec::with_capacity(4096);
        file.read_to_end(&mut buf)?;
        *storage = buf;
        Ok(IStr::new(storage, Size::ZERO))
    }
}

/// Prepare an input processor.
///
/// This declares static storage for the processed input because it's much
/// easier to deal with than lifetimes and memory for it will be freed once the
/// process exists *anyway*.
#[macro_export]
macro_rules! input {
    ($path:literal) => {{
        static mut STORAGE: Vec<u8> = Vec::new();
        let path = concat!("inputs/", $path);
        let read_path = concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path);

        (
            // SAFETY: the storage is only ever handed out once, from `main`.
            $crate::env::input(path, read_path, unsafe { &mut *core::ptr::addr_of_mut!(STORAGE) })?,
            path,
        )
    }};
}

#[cfg(test)]
mod tests {
    use super::{pos_from, Size};

    #[test]
    fn test_pos_from() {
        let data = b"12 34\n56 x8\n";
        let pos = pos_from(data, Size::ZERO.offset(9)..Size::ZERO.offset(11));
        assert_eq!(pos.to_string(), "2:4");

        let pos = pos_from(data, Size::ZERO..Size::ZERO.offset(2));
        assert_eq!(pos.to_string(), "1:1");
    }
}
