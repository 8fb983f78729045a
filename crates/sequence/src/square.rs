//! Perfect squares.

use crate::search::Hit;

/// First square `i²` (with `i >= 1`) greater than `n`; the ordinal is `i`.
///
/// Returns `None` only if the square would overflow `i64`.
pub fn square_after(n: i64) -> Option<Hit> {
    let root = if n < 0 { 1 } else { n.isqrt() + 1 };
    let value = root.checked_mul(root)?;
    Some(Hit::new(value, root as u64))
}
