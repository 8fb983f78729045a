//! Decimal-prefix sequences of mathematical constants.

use tracing::debug;

use crate::search::{Hit, Search, first_exceeding};

/// Leading digits of π used for the Pi sequence.
pub const PI_DIGITS: &str = "3141592653";

/// Leading digits of e used for the Euler sequence.
pub const EULER_DIGITS: &str = "2718281828";

/// Successive prefixes of `digits` read as integers: `3, 31, 314, ...`.
///
/// Non-digit bytes are skipped.
pub fn prefixes(digits: &'static str) -> impl Iterator<Item = i64> {
    digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .scan(0_i64, |acc, b| {
            *acc = acc.checked_mul(10)?.checked_add(i64::from(b - b'0'))?;
            Some(*acc)
        })
}

/// First prefix of `digits` greater than `n`.
///
/// The prefix sequence is finite. When `n` is at least the full-length
/// value, the full-length value is returned with the ordinal of the last
/// prefix; `None` only for an empty digit string.
pub fn digit_prefix_after(digits: &'static str, n: i64) -> Option<Hit> {
    match first_exceeding(prefixes(digits), n) {
        Search::Found(hit) => Some(hit),
        Search::Exhausted(last) => {
            debug!(digits, n, "digit prefixes exhausted, using last prefix");
            last
        }
    }
}

/// First prefix of π's digits greater than `n`.
pub fn pi_after(n: i64) -> Option<Hit> {
    digit_prefix_after(PI_DIGITS, n)
}

/// First prefix of e's digits greater than `n`.
pub fn euler_after(n: i64) -> Option<Hit> {
    digit_prefix_after(EULER_DIGITS, n)
}
