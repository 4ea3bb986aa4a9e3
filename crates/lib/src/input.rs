//! Input parser.

mod error;
mod iter;

#[cfg(test)]
mod tests;

use core::fmt;
use core::mem;
use core::ops;

use bstr::BStr;

pub use self::error::{ErrorKind, IStrError};
pub use self::iter::Lines;

pub(self) type Result<T> = std::result::Result<T, IStrError>;
use crate::env::Size;

pub(crate) const NL: u8 = b'\n';

/// Helper to parse input.
#[derive(Clone, Copy)]
#[cfg_attr(prod, repr(transparent))]
pub struct IStr {
    /// The data being parsed.
    data: &'static [u8],
    /// Offset of `data` in the original input.
    index: Size,
}

impl IStr {
    /// Construct a new input processor.
    #[inline]
    pub fn new(data: &'static [u8], index: Size) -> Self {
        Self { data, index }
    }

    /// Construct an input processor over a static string, like an example
    /// input embedded in a test.
    #[inline]
    pub fn from_static(data: &'static str) -> Self {
        Self::new(data.as_bytes(), Size::ZERO)
    }

    /// Access index of input string.
    #[inline]
    pub fn index(&self) -> Size {
        self.index
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the length of the current input.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Get input being processed.
    #[inline]
    pub fn as_data(&self) -> &'static [u8] {
        self.data
    }

    /// Get remaining binary string of the input.
    #[inline]
    pub fn as_bstr(&self) -> &'static BStr {
        BStr::new(self.data)
    }

    /// Construct an iterator parsing one `T` per line.
    ///
    /// Blank lines produce nothing for most types, which ends iteration. Parse
    /// lines as `Option<T>` to step over them instead.
    #[inline]
    pub fn lines<T>(&mut self) -> Lines<'_, T> {
        Lines::new(self)
    }

    /// Parse the next value as T.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        T::from_input(self)
    }

    /// Try parse the next value as `T`, returns `None` if there is no more
    /// non-whitespace data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        T::try_from_input(self)
    }

    /// Parse the next line as `T`, errors with `Err(IStrError)` if the line is
    /// not a valid value of type `T`, returns `Ok(None)` if there are no more
    /// lines or the line doesn't contain a `T`.
    #[inline]
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        let Some(mut line) = self.split_once(NL) else {
            return Ok(None);
        };

        line.try_next()
    }

    /// Try to parse the next whitespace-separated word.
    ///
    /// Returns the offset at which the word starts relative to the current
    /// position.
    pub fn try_next_word<T>(&mut self) -> Result<Option<(Size, T)>>
    where
        T: FromInput,
    {
        let s = self.find(0, |b| !u8::is_ascii_whitespace(b));
        let n = self.find(s, u8::is_ascii_whitespace);

        if s == n {
            return Ok(None);
        }

        let Some(mut input) = self.slice(s..n) else {
            return Ok(None);
        };

        let Some(value) = T::try_from_input(&mut input)? else {
            return Ok(None);
        };

        self.advance(n);
        Ok(Some((Size::new(s), value)))
    }

    /// Split once at the given byte or until the end of string, returning the
    /// part before it.
    fn split_once(&mut self, b: u8) -> Option<IStr> {
        if self.data.is_empty() {
            return None;
        }

        let index = self.index;

        let Some(at) = memchr::memchr(b, self.data) else {
            let data = mem::take(&mut self.data);
            self.index = self.index.saturating_add(Size::new(data.len()));
            return Some(IStr::new(data, index));
        };

        let data = self.data.get(..at)?;
        self.advance(at.checked_add(1)?);
        Some(IStr::new(data, index))
    }

    /// Find by predicate.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        self.data = self.data.get(n..).unwrap_or_default();
        self.index = self.index.saturating_add(Size::new(n));
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, range: ops::Range<usize>) -> Option<IStr> {
        let index = self.index.checked_add(Size::new(range.start))?;

        Some(Self {
            data: self.data.get(range)?,
            index,
        })
    }
}

impl fmt::Debug for IStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IStr")
            .field("data", &self.as_bstr())
            .field("index", &self.index)
            .finish()
    }
}

/// A value that can be parsed from input.
pub trait FromInput: Sized {
    /// Custom error kind to use.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Try to parse a value, ignoring leading whitespace. Returns `Ok(None)`
    /// if there is nothing to parse.
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut IStr) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(IStrError::new(index..p.index, Self::error_kind()));
        };

        Ok(value)
    }
}

macro_rules! integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromInput for $ty {
                #[inline]
                fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                    let index = p.index;

                    let Some((n, word)) = p.try_next_word::<&'static BStr>()? else {
                        return Ok(None);
                    };

                    let Some(value) = parse_word::<$ty>(word) else {
                        let span = index.saturating_add(n)..p.index;
                        return Err(IStrError::new(span, ErrorKind::NotInteger(word)));
                    };

                    Ok(Some(value))
                }
            }
        )*
    };
}

integer!(usize, isize, u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

#[inline]
fn parse_word<T>(word: &BStr) -> Option<T>
where
    T: core::str::FromStr,
{
    use bstr::ByteSlice;

    word.to_str().ok()?.parse().ok()
}

impl FromInput for IStr {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        Ok(Some(*p))
    }
}

impl FromInput for &BStr {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        Ok(Some(BStr::new(mem::take(&mut p.data))))
    }
}

/// Parses to `None` where `T` finds nothing to parse, like on a blank line.
impl<T> FromInput for Option<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        Ok(Some(T::try_from_input(p)?))
    }
}

/// Parses one or more values of `T`.
impl<T> FromInput for Vec<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let mut output = Vec::new();

        while let Some(element) = T::try_from_input(p)? {
            output.push(element);
        }

        if output.is_empty() {
            return Ok(None);
        }

        Ok(Some(output))
    }
}

/// The first and the last word of the input parsed as `T`, with the words in
/// between skipped unparsed. A lone word is both first and last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ends<T>(pub T, pub T);

impl<T> FromInput for Ends<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let Some((_, mut first)) = p.try_next_word::<IStr>()? else {
            return Ok(None);
        };

        let mut last = first;

        while let Some((_, word)) = p.try_next_word::<IStr>()? {
            last = word;
        }

        Ok(Some(Self(first.next()?, last.next()?)))
    }
}
