//! Punycode decoding as specified in [RFC 3492].
//!
//! Only the decoder is provided. It is meant for ACE labels taken from a host
//! that has already gone through IDNA to-ASCII, so it skips the overflow
//! bookkeeping of the reference algorithm and instead fails with
//! [`DecodeError::Overflow`] whenever `u32` arithmetic would wrap. Callers
//! verify the result by re-encoding it, see [`host`](crate::host).
//!
//! [RFC 3492]: https://datatracker.ietf.org/doc/html/rfc3492

use crate::error::DecodeError;

// https://datatracker.ietf.org/doc/html/rfc3492#section-5
const BASE: u32 = 36;
const T_MIN: u32 = 1;
const T_MAX: u32 = 26;
const SKEW: u32 = 38;
const DAMP: u32 = 700;
const INITIAL_BIAS: u32 = 72;
const INITIAL_N: u32 = 128;

const DELIMITER: char = '-';

/// Bias adaptation, see [Section 6.1 of RFC 3492][adapt].
///
/// [adapt]: https://datatracker.ietf.org/doc/html/rfc3492#section-6.1
fn adapt(mut delta: u32, num_points: u32, first_time: bool) -> u32 {
    delta /= if first_time { DAMP } else { 2 };
    delta += delta / num_points;

    let mut k = 0;
    while delta > ((BASE - T_MIN) * T_MAX) / 2 {
        delta /= BASE - T_MIN;
        k += BASE;
    }
    k + ((BASE - T_MIN + 1) * delta) / (delta + SKEW)
}

fn threshold(k: u32, bias: u32) -> u32 {
    if k <= bias {
        T_MIN
    } else if k >= bias + T_MAX {
        T_MAX
    } else {
        k - bias
    }
}

/// Maps a basic code point to its digit value.
///
/// Uppercase letters are never emitted by a conformant encoder
/// and are rejected along with everything else outside `[0-9a-z]`.
fn digit_value(x: u8) -> Option<u32> {
    match x {
        b'a'..=b'z' => Some(u32::from(x - b'a')),
        b'0'..=b'9' => Some(u32::from(x - b'0') + 26),
        _ => None,
    }
}

/// An iterator over the bytes of the extended string,
/// each paired with whether it is the final one.
#[derive(Clone, Debug)]
struct Digits<'a> {
    rem: &'a [u8],
}

impl<'a> Digits<'a> {
    fn new(extended: &'a str) -> Self {
        Self {
            rem: extended.as_bytes(),
        }
    }
}

impl Iterator for Digits<'_> {
    type Item = (u8, bool);

    fn next(&mut self) -> Option<(u8, bool)> {
        if let [x, rem @ ..] = self.rem {
            self.rem = rem;
            Some((*x, rem.is_empty()))
        } else {
            None
        }
    }
}

/// Decodes a Punycode label into a Unicode string.
///
/// The input is the part of an ACE label following the `xn--` prefix.
/// Everything before the last `'-'` is copied to the output as is;
/// the digits after it are decoded as in [Section 6.2 of RFC 3492][decode].
///
/// [decode]: https://datatracker.ietf.org/doc/html/rfc3492#section-6.2
///
/// # Errors
///
/// Returns `Err` if the label was not produced by a conformant encoder:
/// the digits run out in the middle of an integer, a digit is not in
/// `[0-9a-z]`, or the decoded values fall out of range.
///
/// # Examples
///
/// ```
/// use absolute_uri::punycode;
///
/// assert_eq!(punycode::decode("eckwd4c7cu47r2wf")?, "ドメイン名例");
/// assert_eq!(punycode::decode("de-jg4avhby1noc0d")?, "パフィーdeルンバ");
/// # Ok::<_, absolute_uri::DecodeError>(())
/// ```
pub fn decode(label: &str) -> Result<String, DecodeError> {
    let (basic, extended) = match label.rfind(DELIMITER) {
        Some(i) => (&label[..i], &label[i + 1..]),
        None => ("", label),
    };
    let overflow = || DecodeError::Overflow {
        label: label.into(),
    };

    let mut output: Vec<char> = basic.chars().collect();
    let mut n = INITIAL_N;
    let mut i: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut first = true;

    let mut digits = Digits::new(extended);
    let mut exhausted = extended.is_empty();

    while !exhausted {
        let old_i = i;
        let mut w: u32 = 1;
        let mut k = BASE;

        loop {
            let (x, is_last) = digits.next().ok_or_else(|| DecodeError::TruncatedLabel {
                label: label.into(),
            })?;
            exhausted = is_last;

            let digit = digit_value(x).ok_or_else(|| DecodeError::InvalidDigit {
                label: label.into(),
                digit: char::from(x),
            })?;

            i = digit
                .checked_mul(w)
                .and_then(|x| i.checked_add(x))
                .ok_or_else(overflow)?;

            let t = threshold(k, bias);
            if digit < t {
                break;
            }
            w = w.checked_mul(BASE - t).ok_or_else(overflow)?;
            k += BASE;
        }

        let pos = u32::try_from(output.len() + 1).map_err(|_| overflow())?;
        bias = adapt(i - old_i, pos, first);
        first = false;

        n = n.checked_add(i / pos).ok_or_else(overflow)?;
        i %= pos;

        let ch = char::from_u32(n).ok_or_else(overflow)?;
        output.insert(i as usize, ch);
        i += 1;
    }

    Ok(output.into_iter().collect())
}
