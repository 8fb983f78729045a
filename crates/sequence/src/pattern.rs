//! Digit-pattern sequences: repdigits and round numbers.

use crate::search::{Hit, Search, first_exceeding};

/// Returns `true` if `value` is positive and all its decimal digits are equal.
///
/// ```
/// use carpe_sequence::is_repdigit;
///
/// assert!(is_repdigit(7));
/// assert!(is_repdigit(4444));
/// assert!(!is_repdigit(4445));
/// ```
pub fn is_repdigit(value: i64) -> bool {
    if value <= 0 {
        return false;
    }
    let digit = value % 10;
    let mut rest = value / 10;
    while rest > 0 {
        if rest % 10 != digit {
            return false;
        }
        rest /= 10;
    }
    true
}

/// Returns `true` if `value` is a single non-zero digit followed by one or
/// more zeros (10, 20, ..., 90, 100, 200, ...).
///
/// ```
/// use carpe_sequence::is_round;
///
/// assert!(is_round(20_000));
/// assert!(!is_round(9));
/// assert!(!is_round(110));
/// ```
pub fn is_round(value: i64) -> bool {
    if value < 10 {
        return false;
    }
    let mut rest = value;
    while rest % 10 == 0 {
        rest /= 10;
    }
    rest < 10
}

/// Multiplies each unit by the leading digits 1 through 9, stopping where
/// the product overflows.
fn by_leading_digit(units: impl Iterator<Item = i64>) -> impl Iterator<Item = i64> {
    units.flat_map(|unit| (1..=9).map_while(move |digit: i64| unit.checked_mul(digit)))
}

/// Every repdigit representable as `i64`, ascending: 1..9, 11..99, 111, ...
///
/// Each digit count contributes `digit * 11..1`, so reaching a value `v`
/// takes `O(log v)` steps.
pub fn repdigits() -> impl Iterator<Item = i64> {
    let repunits = std::iter::successors(Some(1_i64), |r| r.checked_mul(10)?.checked_add(1));
    by_leading_digit(repunits)
}

/// Every round number representable as `i64`, ascending: 10..90, 100..900, ...
pub fn round_numbers() -> impl Iterator<Item = i64> {
    let powers = std::iter::successors(Some(10_i64), |p| p.checked_mul(10));
    by_leading_digit(powers)
}

fn hit_after(values: impl Iterator<Item = i64>, n: i64) -> Option<Hit> {
    match first_exceeding(values, n) {
        Search::Found(hit) => Some(hit),
        Search::Exhausted(_) => None,
    }
}

/// First repdigit greater than `n`, with its 1-based position among repdigits.
///
/// `None` only above the largest `i64` repdigit, 8888888888888888888.
pub fn repdigit_after(n: i64) -> Option<Hit> {
    hit_after(repdigits(), n)
}

/// First round number greater than `n`, with its 1-based position among
/// round numbers.
pub fn round_after(n: i64) -> Option<Hit> {
    hit_after(round_numbers(), n)
}
