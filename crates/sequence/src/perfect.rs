//! Perfect numbers.

use tracing::debug;

use crate::search::{Hit, Search, first_exceeding};

/// The first five perfect numbers.
pub const PERFECT_NUMBERS: [i64; 5] = [6, 28, 496, 8128, 33_550_336];

/// First perfect number greater than `n`.
///
/// Unlike the other generators the ordinal is the **0-based** index into
/// [`PERFECT_NUMBERS`]: 6 has ordinal 0, 8128 has ordinal 3.
///
/// Returns `None` once `n` reaches the last tabulated perfect number.
pub fn perfect_after(n: i64) -> Option<Hit> {
    match first_exceeding(PERFECT_NUMBERS, n) {
        Search::Found(hit) => Some(Hit::new(hit.value(), hit.ordinal() - 1)),
        Search::Exhausted(_) => {
            debug!(n, "no tabulated perfect number exceeds threshold");
            None
        }
    }
}
