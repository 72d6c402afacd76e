//! Error types.

/// An error occurred when constructing an [`AbsoluteUri`] from input
/// that does not denote an absolute URL.
///
/// [`AbsoluteUri`]: crate::AbsoluteUri
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{input:?} is not an absolute URL: {kind}")]
pub struct ParseError {
    input: String,
    #[source]
    kind: url::ParseError,
}

impl ParseError {
    pub(crate) fn new(input: &str, kind: url::ParseError) -> Self {
        Self {
            input: input.into(),
            kind,
        }
    }

    /// Returns the detailed cause of the error, as reported by the URL parser.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> url::ParseError {
        self.kind
    }

    /// Checks whether the input was rejected for being a relative reference.
    #[inline]
    #[must_use]
    pub fn is_relative(&self) -> bool {
        self.kind == url::ParseError::RelativeUrlWithoutBase
    }

    /// Recovers the input that was attempted to parse into an [`AbsoluteUri`].
    ///
    /// [`AbsoluteUri`]: crate::AbsoluteUri
    #[inline]
    #[must_use]
    pub fn into_input(self) -> String {
        self.input
    }
}

/// An internal inconsistency detected while decoding a host.
///
/// Hosts taken from a normalized [`AbsoluteUri`] are produced by a conformant
/// IDNA encoder, so none of these errors is expected on that path. Seeing one
/// means the input was not what the decoder was written for; it should be
/// propagated, not retried.
///
/// [`AbsoluteUri`]: crate::AbsoluteUri
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The digits of a Punycode label ran out in the middle of a
    /// variable-length integer.
    #[error("punycode label {label:?} ends in the middle of an integer")]
    TruncatedLabel {
        /// The label after the `xn--` prefix.
        label: String,
    },
    /// A byte outside `[0-9a-z]` was found after the last delimiter.
    #[error("invalid punycode digit {digit:?} in label {label:?}")]
    InvalidDigit {
        /// The label after the `xn--` prefix.
        label: String,
        /// The offending character.
        digit: char,
    },
    /// An intermediate value overflowed, or the decoded value is not
    /// a Unicode scalar value.
    #[error("punycode label {label:?} decodes out of range")]
    Overflow {
        /// The label after the `xn--` prefix.
        label: String,
    },
    /// Re-encoding the decoded host did not reproduce the raw host.
    #[error("decoded host {decoded:?} encodes to {reencoded:?}, not {raw:?}")]
    HostMismatch {
        /// The ASCII host as found in the URL.
        raw: String,
        /// The Unicode host produced by decoding `raw`.
        decoded: String,
        /// What the URL normalizer made of `decoded`,
        /// or `None` if it rejected it.
        reencoded: Option<String>,
    },
}
