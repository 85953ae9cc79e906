//! Zero-copy scanning of puzzle input.
//!
//! An [IStr] is a window into the static input which remembers where it
//! starts, so errors raised while parsing it can point back into the file.

mod error;
mod iter;
#[cfg(test)]
mod tests;

use core::iter::from_fn;
use std::str::from_utf8;

pub use self::error::{ErrorKind, IStrError};
pub use self::iter::Iter;

use crate::env::Size;

type Result<T, E = IStrError> = core::result::Result<T, E>;

pub(crate) const NL: u8 = b'\n';

/// A window into the input being parsed.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(prod, repr(transparent))]
pub struct IStr {
    data: &'static [u8],
    /// Offset of `data` into the whole input.
    index: Size,
}

impl IStr {
    #[inline]
    pub fn new(data: &'static [u8], index: Size) -> Self {
        Self { data, index }
    }

    /// Construct an input over static data, starting at offset zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let mut input = IStr::from_static(b"1 2\n3 4\n");
    /// assert_eq!(input.next::<(u32, u32)>().unwrap(), (1, 2));
    /// assert_eq!(input.line::<(u32, u32)>().unwrap(), (3, 4));
    /// ```
    #[inline]
    pub const fn from_static(data: &'static [u8]) -> Self {
        Self {
            data,
            index: Size::ZERO,
        }
    }

    /// Offset of the remaining input.
    #[inline]
    pub fn index(&self) -> Size {
        self.index
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The remaining input.
    #[inline]
    pub fn as_data(&self) -> &'static [u8] {
        self.data
    }

    /// Iterate over values of type `T` until the input runs out.
    #[inline]
    pub fn iter<T>(&mut self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Parse the next value as `T`.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        T::from_input(self)
    }

    /// Parse the next value as `T`, or `None` if there is nothing left to
    /// parse.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        T::try_from_input(self)
    }

    /// Parse the next line as `T`. It's an error for there to be no more
    /// lines.
    #[inline]
    pub fn line<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        let at = *self;

        match self.try_line()? {
            Some(value) => Ok(value),
            None => Err(at.error(ErrorKind::ExpectedLine)),
        }
    }

    /// Parse the next line as `T`, or `None` if the input is exhausted or the
    /// line holds no value.
    #[inline]
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        match self.split_once(NL) {
            Some(mut line) => line.try_next(),
            None => Ok(None),
        }
    }

    /// Construct an error covering the remaining input.
    fn error(&self, kind: ErrorKind) -> IStrError {
        let end = self.index.offset(self.data.len());
        IStrError::new(self.index..end, kind)
    }

    /// Split off the first `n` bytes.
    fn take(&mut self, n: usize) -> IStr {
        let (head, tail) = self.data.split_at(n.min(self.data.len()));
        let taken = IStr::new(head, self.index);
        self.data = tail;
        self.index.advance(head.len());
        taken
    }

    /// Split off everything up until `byte`, consuming the byte itself.
    fn split_once(&mut self, byte: u8) -> Option<IStr> {
        if self.data.is_empty() {
            return None;
        }

        let Some(at) = memchr::memchr(byte, self.data) else {
            return Some(self.take(self.data.len()));
        };

        let head = self.take(at);
        self.take(1);
        Some(head)
    }

    /// Chunks separated by `byte`.
    fn chunks(&mut self, byte: u8) -> impl Iterator<Item = IStr> + '_ {
        from_fn(move || self.split_once(byte))
    }

    /// Split off the next word, skipping leading whitespace. The input is
    /// left untouched if it only contains whitespace.
    fn word(&mut self) -> Option<IStr> {
        let start = self.data.iter().position(|b| !b.is_ascii_whitespace())?;
        self.take(start);

        let len = self
            .data
            .iter()
            .position(u8::is_ascii_whitespace)
            .unwrap_or(self.data.len());

        Some(self.take(len))
    }
}

/// A value that can be parsed from input.
pub trait FromInput: Sized {
    /// The error raised by [FromInput::from_input] if there's no value.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Try to parse a value, returning `None` if there is none.
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>>;

    /// Parse a value, which must be present.
    #[inline]
    fn from_input(p: &mut IStr) -> Result<Self> {
        let at = *p;

        match Self::try_from_input(p)? {
            Some(value) => Ok(value),
            None => Err(at.error(Self::error_kind())),
        }
    }
}

/// A value that can be parsed from separate chunks of input, see [Split].
pub trait FromInputIter: Sized {
    fn from_input_iter<I>(chunks: I) -> Result<Option<Self>>
    where
        I: Iterator<Item = IStr>;
}

macro_rules! integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromInput for $ty {
                #[inline]
                fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                    let Some(word) = p.word() else {
                        return Ok(None);
                    };

                    let Ok(text) = from_utf8(word.data) else {
                        return Err(word.error(ErrorKind::NotUtf8));
                    };

                    match text.parse() {
                        Ok(n) => Ok(Some(n)),
                        Err(_) => Err(word.error(ErrorKind::NotInteger(text))),
                    }
                }
            }
        )*
    };
}

integer!(u32, i32);

/// Whitespace-separated pair. A pair which is only half present is an
/// error.
impl<T, U> FromInput for (T, U)
where
    T: FromInput,
    U: FromInput,
{
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::ExpectedTuple(2)
    }

    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let at = *p;

        let Some(a) = T::try_from_input(p)? else {
            return Ok(None);
        };

        let Some(b) = U::try_from_input(p)? else {
            return Err(at.error(Self::error_kind()));
        };

        Ok(Some((a, b)))
    }
}

impl<T, U> FromInputIter for (T, U)
where
    T: FromInput,
    U: FromInput,
{
    #[inline]
    fn from_input_iter<I>(mut chunks: I) -> Result<Option<Self>>
    where
        I: Iterator<Item = IStr>,
    {
        let Some(mut a) = chunks.next() else {
            return Ok(None);
        };

        let (Some(mut b), None) = (chunks.next(), chunks.next()) else {
            return Err(a.error(ErrorKind::ExpectedTuple(2)));
        };

        Ok(Some((T::from_input(&mut a)?, U::from_input(&mut b)?)))
    }
}

/// A value which might be missing, such as a blank line between two
/// sections of input.
impl<T> FromInput for Option<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        Ok(Some(T::try_from_input(p)?))
    }
}

/// Every value up until the input is exhausted, which might be none.
impl<T> FromInput for Vec<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let mut values = Vec::new();

        while let Some(value) = T::try_from_input(p)? {
            values.push(value);
        }

        Ok(Some(values))
    }
}

/// One value out of every chunk.
impl<T> FromInputIter for Vec<T>
where
    T: FromInput,
{
    #[inline]
    fn from_input_iter<I>(chunks: I) -> Result<Option<Self>>
    where
        I: Iterator<Item = IStr>,
    {
        let values = chunks
            .map(|mut chunk| T::from_input(&mut chunk))
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(values))
    }
}

/// Split on the character `D` and parse the chunks as `T`.
///
/// # Examples
///
/// ```
/// use lib::prelude::*;
///
/// let mut input = IStr::from_static(b"47|53\n75,47,61\n");
/// let Split((a, b)) = input.line::<Split<'|', (u32, u32)>>().unwrap();
/// assert_eq!((a, b), (47, 53));
///
/// let Split(pages) = input.line::<Split<',', Vec<u32>>>().unwrap();
/// assert_eq!(pages, [75, 47, 61]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<const D: char, T>(pub T);

impl<const D: char, T> FromInput for Split<D, T>
where
    T: FromInputIter,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        Ok(T::from_input_iter(p.chunks(D as u8))?.map(Split))
    }
}

/// A single byte.
pub struct B(pub u8);

impl FromInput for B {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let Some(&b) = p.data.first() else {
            return Ok(None);
        };

        p.take(1);
        Ok(Some(B(b)))
    }
}
