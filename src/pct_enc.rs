//! Percent-encoded string slices.

use ref_cast::{ref_cast_custom, RefCastCustom};
use std::{borrow::Cow, cmp::Ordering, hash, iter::FusedIterator, str};

/// A percent-encoded string slice, as found in a normalized URL component.
///
/// The URL normalizer does not reject stray `'%'` characters, so an `EStr`
/// may contain a `'%'` that is not followed by two hexadecimal digits.
/// Decoding keeps such a `'%'` as is.
///
/// # Comparison
///
/// `EStr` slices are compared [lexicographically](Ord#lexicographical-comparison)
/// by their byte values. Normalization is **not** performed prior to comparison.
///
/// # Examples
///
/// ```
/// use absolute_uri::AbsoluteUri;
///
/// let uri: AbsoluteUri = "http://example.com/foo#%E7%B4%A0%E7%89%87".parse()?;
/// let fragment = uri.raw_fragment();
/// assert_eq!(fragment, "%E7%B4%A0%E7%89%87");
/// assert_eq!(fragment.decode().to_string_lossy(), "素片");
/// # Ok::<_, absolute_uri::ParseError>(())
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct EStr {
    inner: str,
}

impl EStr {
    #[ref_cast_custom]
    pub(crate) const fn new_validated(s: &str) -> &Self;

    /// An empty `EStr` slice.
    pub const EMPTY: &'static Self = Self::new_validated("");

    /// Yields the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns the length of the `EStr` slice in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Checks whether the `EStr` slice is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator used to decode the `EStr` slice.
    ///
    /// Always **split before decoding**, as otherwise the data may be
    /// mistaken for component delimiters.
    ///
    /// Note that the iterator will **not** decode `U+002B` (+) as `0x20` (space).
    ///
    /// # Examples
    ///
    /// ```
    /// use absolute_uri::AbsoluteUri;
    ///
    /// let uri: AbsoluteUri = "http://example.com/#%C2%A1Hola%21%3".parse()?;
    /// let dec = uri.raw_fragment().decode();
    /// assert_eq!(*dec.clone().to_bytes(), *b"\xc2\xa1Hola!%3");
    /// assert_eq!(dec.to_string_lossy(), "¡Hola!%3");
    /// # Ok::<_, absolute_uri::ParseError>(())
    /// ```
    pub fn decode(&self) -> Decode<'_> {
        Decode::new(&self.inner)
    }

    /// Returns an iterator over subslices of the `EStr` slice separated by the given delimiter.
    pub fn split(&self, delim: char) -> Split<'_> {
        Split {
            inner: self.inner.split(delim),
        }
    }

    /// Splits the `EStr` slice on the first occurrence of the given delimiter and
    /// returns prefix before delimiter and suffix after delimiter.
    ///
    /// Returns `None` if the delimiter is not found.
    #[must_use]
    pub fn split_once(&self, delim: char) -> Option<(&Self, &Self)> {
        self.inner
            .split_once(delim)
            .map(|(a, b)| (Self::new_validated(a), Self::new_validated(b)))
    }

    /// Returns an iterator over the path segments, separated by `'/'`.
    ///
    /// Returns `None` if the path does not start with `'/'`.
    /// The empty string before the leading `'/'` is not a segment,
    /// and neither is the empty string after a lone `"/"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use absolute_uri::AbsoluteUri;
    ///
    /// let uri: AbsoluteUri = "file:///path/to//dir/".parse()?;
    /// let segments = uri.raw_path().segments_if_absolute().unwrap();
    /// assert!(segments.eq(["path", "to", "", "dir", ""]));
    ///
    /// let uri: AbsoluteUri = "http://example.com".parse()?;
    /// assert_eq!(uri.raw_path(), "/");
    /// assert_eq!(uri.raw_path().segments_if_absolute().unwrap().count(), 0);
    ///
    /// let uri: AbsoluteUri = "urn:ietf:rfc:2648".parse()?;
    /// assert!(uri.raw_path().segments_if_absolute().is_none());
    /// # Ok::<_, absolute_uri::ParseError>(())
    /// ```
    #[must_use]
    pub fn segments_if_absolute(&self) -> Option<Split<'_>> {
        let rem = self.inner.strip_prefix('/')?;
        let mut split = Self::new_validated(rem).split('/');
        if rem.is_empty() {
            split.next();
        }
        Some(split)
    }
}

impl AsRef<Self> for EStr {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl AsRef<str> for EStr {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl PartialEq for EStr {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl PartialEq<str> for EStr {
    fn eq(&self, other: &str) -> bool {
        &self.inner == other
    }
}

impl PartialEq<EStr> for str {
    fn eq(&self, other: &EStr) -> bool {
        self == &other.inner
    }
}

impl Eq for EStr {}

impl hash::Hash for EStr {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl PartialOrd for EStr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EStr {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}

impl Default for &EStr {
    /// Creates an empty `EStr` slice.
    fn default() -> Self {
        EStr::EMPTY
    }
}

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    let mut out = [0xff; 256];
    let shift = if hi { 4 } else { 0 };

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

const OCTET_TABLE_HI: &[u8; 256] = &gen_octet_table(true);
const OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

/// Decodes a percent-encoded octet, returning `None` if either byte is not hexadecimal.
fn decode_octet(hi: u8, lo: u8) -> Option<u8> {
    let (hi, lo) = (OCTET_TABLE_HI[hi as usize], OCTET_TABLE_LO[lo as usize]);
    if hi == 0xff || lo == 0xff {
        None
    } else {
        Some(hi | lo)
    }
}

/// An iterator used to decode an [`EStr`] slice.
///
/// This struct is created by [`EStr::decode`]. Normally you'll use the methods below
/// instead of iterating over a `Decode` manually, unless you need precise control
/// over allocation.
///
/// See the [`DecodedChunk`] type for documentation of the items yielded by this iterator.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Decode<'a> {
    source: &'a str,
}

/// An item returned by the [`Decode`] iterator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodedChunk<'a> {
    /// An unencoded subslice.
    ///
    /// A `'%'` that does not start a valid triplet is yielded as part of one.
    Unencoded(&'a str),
    /// A percent-encoded octet, decoded (for example, `"%20"` decoded as `0x20`).
    PctDecoded(u8),
}

impl<'a> Decode<'a> {
    fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Decodes the triplet at the start of the remaining source, if any.
    fn triplet(&self) -> Option<u8> {
        match self.source.as_bytes() {
            [b'%', hi, lo, ..] => decode_octet(*hi, *lo),
            _ => None,
        }
    }

    fn next_if_unencoded(&mut self) -> Option<&'a str> {
        let bytes = self.source.as_bytes();
        // A stray '%' at the front is plain data.
        let from = usize::from(bytes.first() == Some(&b'%') && self.triplet().is_none());

        let mut i = from;
        while i < bytes.len() {
            if bytes[i] == b'%' && Decode::new(&self.source[i..]).triplet().is_some() {
                break;
            }
            i += 1;
        }

        if i == 0 {
            None
        } else {
            let s;
            (s, self.source) = self.source.split_at(i);
            Some(s)
        }
    }

    fn decoded_len(&self) -> usize {
        self.clone()
            .map(|chunk| match chunk {
                DecodedChunk::Unencoded(s) => s.len(),
                DecodedChunk::PctDecoded(_) => 1,
            })
            .sum()
    }

    fn borrow_all_or_prep_buf(&mut self) -> Result<&'a str, Vec<u8>> {
        if let Some(s) = self.next_if_unencoded() {
            if self.source.is_empty() {
                return Ok(s);
            }
            let mut buf = Vec::with_capacity(s.len() + self.decoded_len());
            buf.extend_from_slice(s.as_bytes());
            Err(buf)
        } else {
            Err(Vec::with_capacity(self.decoded_len()))
        }
    }

    /// Decodes the slice to bytes.
    ///
    /// This method allocates only when the slice contains any percent-encoded octet.
    #[must_use]
    pub fn to_bytes(mut self) -> Cow<'a, [u8]> {
        if self.source.is_empty() {
            return Cow::Borrowed(&[]);
        }

        let mut buf = match self.borrow_all_or_prep_buf() {
            Ok(s) => return Cow::Borrowed(s.as_bytes()),
            Err(buf) => buf,
        };

        for chunk in self {
            match chunk {
                DecodedChunk::Unencoded(s) => buf.extend_from_slice(s.as_bytes()),
                DecodedChunk::PctDecoded(x) => buf.push(x),
            }
        }
        Cow::Owned(buf)
    }

    /// Attempts to decode the slice to a string.
    ///
    /// This method allocates only when the slice contains any percent-encoded octet.
    ///
    /// # Errors
    ///
    /// Returns `Err` containing the decoded bytes if they are not valid UTF-8.
    pub fn to_string(self) -> Result<Cow<'a, str>, Vec<u8>> {
        match self.to_bytes() {
            Cow::Borrowed(bytes) => match str::from_utf8(bytes) {
                Ok(s) => Ok(Cow::Borrowed(s)),
                Err(_) => Err(bytes.to_vec()),
            },
            Cow::Owned(bytes) => String::from_utf8(bytes)
                .map(Cow::Owned)
                .map_err(|e| e.into_bytes()),
        }
    }

    /// Decodes the slice to a string, replacing any invalid UTF-8 sequences with
    /// [`U+FFFD REPLACEMENT CHARACTER`][U+FFFD].
    ///
    /// [U+FFFD]: char::REPLACEMENT_CHARACTER
    ///
    /// This method allocates only when the slice contains any percent-encoded octet.
    #[must_use]
    pub fn to_string_lossy(self) -> Cow<'a, str> {
        match self.to_bytes() {
            Cow::Borrowed(bytes) => String::from_utf8_lossy(bytes),
            Cow::Owned(bytes) => match String::from_utf8(bytes) {
                Ok(s) => Cow::Owned(s),
                Err(e) => Cow::Owned(String::from_utf8_lossy(e.as_bytes()).into_owned()),
            },
        }
    }
}

impl<'a> Iterator for Decode<'a> {
    type Item = DecodedChunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.source.is_empty() {
            None
        } else if let Some(s) = self.next_if_unencoded() {
            Some(DecodedChunk::Unencoded(s))
        } else {
            let x = self.triplet()?;
            self.source = &self.source[3..];
            Some(DecodedChunk::PctDecoded(x))
        }
    }
}

impl FusedIterator for Decode<'_> {}

/// An iterator over subslices of an [`EStr`] slice separated by a delimiter.
///
/// This struct is created by [`EStr::split`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Split<'a> {
    inner: str::Split<'a, char>,
}

impl<'a> Iterator for Split<'a> {
    type Item = &'a EStr;

    fn next(&mut self) -> Option<&'a EStr> {
        self.inner.next().map(EStr::new_validated)
    }
}

impl FusedIterator for Split<'_> {}
