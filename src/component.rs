//! URL components and the scheme tables they are classified by.

use ref_cast::{ref_cast_custom, RefCastCustom};

/// The [special schemes] of the URL Standard.
///
/// [special schemes]: https://url.spec.whatwg.org/#special-scheme
const SPECIAL_SCHEMES: [&str; 6] = ["file", "ftp", "http", "https", "ws", "wss"];

/// Schemes whose URLs have a tuple origin. Every other scheme,
/// `file` included, is treated as having an opaque origin.
const TUPLE_ORIGIN_SCHEMES: [&str; 6] = ["blob", "ftp", "http", "https", "ws", "wss"];

const DEFAULT_PORTS: [(&str, u16); 5] = [
    ("ftp", 21),
    ("http", 80),
    ("https", 443),
    ("ws", 80),
    ("wss", 443),
];

/// A [scheme] component, lowercase and without the trailing `':'`.
///
/// [scheme]: https://url.spec.whatwg.org/#concept-url-scheme
///
/// # Comparison
///
/// `Scheme`s are compared case-insensitively, though a scheme obtained from
/// an [`AbsoluteUri`] is always lowercase.
///
/// [`AbsoluteUri`]: crate::AbsoluteUri
///
/// # Examples
///
/// ```
/// use absolute_uri::AbsoluteUri;
///
/// let uri: AbsoluteUri = "HTTP://EXAMPLE.COM/".parse()?;
/// let scheme = uri.scheme();
/// assert_eq!(scheme.as_str(), "http");
/// assert!(scheme.is_special());
/// assert_eq!(scheme.default_port(), Some(80));
/// # Ok::<_, absolute_uri::ParseError>(())
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Scheme {
    inner: str,
}

impl Scheme {
    #[ref_cast_custom]
    #[inline]
    pub(crate) const fn new_validated(scheme: &str) -> &Scheme;

    /// Returns the scheme component as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Checks whether the scheme is one of the special schemes:
    /// `file`, `ftp`, `http`, `https`, `ws`, `wss`.
    ///
    /// Special schemes always have a hierarchical path.
    #[must_use]
    pub fn is_special(&self) -> bool {
        SPECIAL_SCHEMES.contains(&self.as_str())
    }

    /// Returns the default port of the scheme.
    ///
    /// | scheme  | port  |
    /// | :------ | ----: |
    /// | `ftp`   | `21`  |
    /// | `http`  | `80`  |
    /// | `https` | `443` |
    /// | `ws`    | `80`  |
    /// | `wss`   | `443` |
    ///
    /// Returns `None` for any other scheme, `file` included.
    #[must_use]
    pub fn default_port(&self) -> Option<u16> {
        DEFAULT_PORTS
            .iter()
            .find(|(scheme, _)| *scheme == self.as_str())
            .map(|&(_, port)| port)
    }

    /// Checks whether URLs with this scheme have a tuple origin:
    /// `blob`, `ftp`, `http`, `https`, `ws`, `wss`.
    #[must_use]
    pub fn has_tuple_origin(&self) -> bool {
        TUPLE_ORIGIN_SCHEMES.contains(&self.as_str())
    }
}

impl PartialEq for Scheme {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq_ignore_ascii_case(&other.inner)
    }
}

impl PartialEq<str> for Scheme {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.inner.eq_ignore_ascii_case(other)
    }
}

impl Eq for Scheme {}

impl AsRef<str> for Scheme {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

/// The [origin] of an [`AbsoluteUri`].
///
/// [origin]: https://url.spec.whatwg.org/#origin
/// [`AbsoluteUri`]: crate::AbsoluteUri
///
/// An opaque origin is never equal to any origin, itself included,
/// when compared with [`AbsoluteUri::origin_equals`]. The derived
/// `PartialEq` compares representations and does not follow that rule.
///
/// [`AbsoluteUri::origin_equals`]: crate::AbsoluteUri::origin_equals
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Origin {
    /// An opaque origin, serialized as `"null"`.
    Opaque,
    /// A tuple origin, serialized as `scheme://host[:port]` with the port
    /// omitted when it is the default port of the scheme.
    Tuple(String),
}

impl Origin {
    /// The serialization of an opaque origin.
    pub const NULL: &'static str = "null";

    /// Checks whether the origin is opaque.
    #[inline]
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        matches!(self, Origin::Opaque)
    }

    /// Returns the serialized origin.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Origin::Opaque => Self::NULL,
            Origin::Tuple(s) => s,
        }
    }

    pub(crate) fn of(scheme: &Scheme, url: &url::Url) -> Self {
        if !scheme.has_tuple_origin() {
            return Origin::Opaque;
        }
        match url.origin() {
            origin @ url::Origin::Tuple(..) => Origin::Tuple(origin.ascii_serialization()),
            url::Origin::Opaque(_) => Origin::Opaque,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_tables() {
        let s = Scheme::new_validated;
        assert!(s("file").is_special());
        assert!(!s("blob").is_special());
        assert_eq!(s("file").default_port(), None);
        assert_eq!(s("wss").default_port(), Some(443));
        assert_eq!(s("gopher").default_port(), None);
        assert!(s("blob").has_tuple_origin());
        assert!(!s("file").has_tuple_origin());
        assert!(s("HTTP") == s("http"));
    }

    #[test]
    fn origin_serialization() {
        assert_eq!(Origin::Opaque.as_str(), "null");
        assert!(Origin::Opaque.is_opaque());
        let o = Origin::Tuple("https://example.com".into());
        assert_eq!(o.as_str(), "https://example.com");
        assert!(!o.is_opaque());
    }
}
