#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]

//! An immutable, normalized absolute URL as defined by the [URL Standard],
//! with raw and decoded views of its components.
//!
//! [URL Standard]: https://url.spec.whatwg.org/
//!
//! See the documentation of [`AbsoluteUri`] for more details.
//!
//! Normalization is delegated to the [`url`] crate. On top of it, this crate
//! provides a [Punycode decoder](punycode) and a [host decoder](host) that
//! turn IDNA-encoded hosts back into Unicode, verifying the result by
//! re-encoding it.
//!
//! # Logging
//!
//! Events are emitted through [`tracing`]: a `debug` event when input is
//! rejected, a `trace` event per decoded ACE label or when credentials are
//! removed from a URL that cannot carry them, and an `error` event when a
//! decoded host fails to encode back to the original.
//!
//! # Feature flags
//!
//! All features are disabled by default.
//!
//! - `serde`: Enables [`serde`] support for [`AbsoluteUri`], which serializes
//!   to its string form and deserializes by parsing a string.
//!
//! [`serde`]: https://docs.rs/serde

pub mod component;
mod error;
pub mod host;
pub mod pct_enc;
pub mod punycode;
mod uri;

pub use error::{DecodeError, ParseError};
pub use uri::{AbsoluteUri, Credentials, QueryParameter, Source};
pub use url::Url;
