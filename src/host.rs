//! Decoding of IDNA-encoded hosts into their Unicode form.

use crate::{error::DecodeError, punycode};
use url::Url;

const ACE_PREFIX: &str = "xn--";

/// Decodes every ACE label of an ASCII host, leaving other labels untouched.
///
/// Labels are separated by `'.'`. A label is an ACE label iff it starts with
/// the lowercase prefix `xn--`, which is how the URL normalizer emits them.
///
/// The result is **not** verified. Use [`AbsoluteUri::host`] to get a host
/// that is checked to encode back to the raw one.
///
/// [`AbsoluteUri::host`]: crate::AbsoluteUri::host
///
/// # Errors
///
/// Returns `Err` if an ACE label fails to decode, see [`punycode::decode`].
///
/// # Examples
///
/// ```
/// use absolute_uri::host;
///
/// assert_eq!(host::decode_labels("xn--eckwd4c7cu47r2wf.jp")?, "ドメイン名例.jp");
/// assert_eq!(host::decode_labels("example.com")?, "example.com");
/// # Ok::<_, absolute_uri::DecodeError>(())
/// ```
pub fn decode_labels(raw_host: &str) -> Result<String, DecodeError> {
    let mut out = String::with_capacity(raw_host.len());
    for (i, label) in raw_host.split('.').enumerate() {
        if i > 0 {
            out.push('.');
        }
        match label.strip_prefix(ACE_PREFIX) {
            Some(encoded) => {
                let decoded = punycode::decode(encoded)?;
                tracing::trace!(label, decoded = %decoded, "decoded ACE label");
                out.push_str(&decoded);
            }
            None => out.push_str(label),
        }
    }
    Ok(out)
}

/// Decodes the host of a normalized URL and verifies the result.
///
/// The decoded host is assigned to a throwaway copy of `url`, so that the
/// normalizer re-encodes it under the same scheme rules, and the outcome must
/// equal the original host exactly.
pub(crate) fn decode(url: &Url) -> Result<String, DecodeError> {
    let raw = match url.host_str() {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(String::new()),
    };

    let decoded = decode_labels(raw)?;

    let mut probe = url.clone();
    let reencoded = match probe.set_host(Some(&decoded)) {
        Ok(()) => probe.host_str(),
        Err(_) => None,
    };
    if reencoded == Some(raw) {
        return Ok(decoded);
    }

    tracing::error!(
        raw,
        decoded = %decoded,
        reencoded = ?reencoded,
        "decoded host does not encode back to the raw host"
    );
    Err(DecodeError::HostMismatch {
        raw: raw.into(),
        reencoded: reencoded.map(Into::into),
        decoded,
    })
}
