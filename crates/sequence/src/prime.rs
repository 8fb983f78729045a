//! Primes from an incrementally extended sieve of Eratosthenes.

use tracing::trace;

use crate::search::{Hit, Search, first_exceeding};

/// Smallest number of entries added when the sieve grows.
const MIN_SEGMENT: usize = 64;

/// Iterator over the primes `2, 3, 5, 7, ...`.
///
/// The composite-marking array only covers the numbers examined so far. When
/// the iterator reaches the end of the array it grows by a segment and every
/// known prime marks its multiples inside the new segment, so the array never
/// extends much past the largest prime yielded.
#[derive(Debug, Clone)]
pub struct Primes {
    composite: Vec<bool>,
    primes: Vec<usize>,
    next: usize,
}

impl Default for Primes {
    fn default() -> Self {
        Self::new()
    }
}

impl Primes {
    /// Creates a sieve with a small initial array.
    pub fn new() -> Self {
        Self::with_limit(MIN_SEGMENT)
    }

    /// Creates a sieve whose initial array covers `0..limit`.
    ///
    /// `limit` is only a sizing hint; the iterator extends past it on demand.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            composite: vec![false; limit.max(3)],
            primes: Vec::new(),
            next: 2,
        }
    }

    /// Number of integers currently covered by the marking array.
    pub fn frontier(&self) -> usize {
        self.composite.len()
    }

    fn extend(&mut self) {
        let old_len = self.composite.len();
        let new_len = old_len.saturating_add((old_len / 8).max(MIN_SEGMENT));
        self.composite.resize(new_len, false);
        for &p in &self.primes {
            let Some(square) = p.checked_mul(p) else {
                break;
            };
            if square >= new_len {
                break;
            }
            let mut multiple = square.max(old_len.div_ceil(p) * p);
            while multiple < new_len {
                self.composite[multiple] = true;
                multiple += p;
            }
        }
        trace!(old_len, new_len, "extended prime sieve");
    }

    fn mark_from_square(&mut self, p: usize) {
        let Some(mut multiple) = p.checked_mul(p) else {
            return;
        };
        while multiple < self.composite.len() {
            self.composite[multiple] = true;
            multiple += p;
        }
    }
}

impl Iterator for Primes {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        loop {
            let candidate = self.next;
            if candidate >= self.composite.len() {
                if self.composite.len() == usize::MAX {
                    return None;
                }
                self.extend();
            }
            self.next += 1;
            if !self.composite[candidate] {
                self.primes.push(candidate);
                self.mark_from_square(candidate);
                return i64::try_from(candidate).ok();
            }
        }
    }
}

/// First prime greater than `n`, with the count of primes up to and
/// including it (so 2 has ordinal 1).
///
/// The sieve is sized to just past `n` and extended only if the next prime
/// lies beyond it.
pub fn prime_after(n: i64) -> Option<Hit> {
    let hint = usize::try_from(n.max(0))
        .ok()?
        .saturating_add(MIN_SEGMENT);
    match first_exceeding(Primes::with_limit(hint), n) {
        Search::Found(hit) => Some(hit),
        Search::Exhausted(_) => None,
    }
}
