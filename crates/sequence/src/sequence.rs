//! The set of sequence generators.

use std::fmt;

use crate::digits::{euler_after, pi_after};
use crate::pattern::{repdigit_after, round_after};
use crate::perfect::perfect_after;
use crate::prime::prime_after;
use crate::search::Hit;
use crate::square::square_after;

/// One of the seven search-based milestone sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sequence {
    /// Decimal prefixes of π.
    Pi,
    /// Decimal prefixes of e.
    Euler,
    /// Tabulated perfect numbers (0-based ordinal).
    Perfect,
    /// Primes.
    Prime,
    /// Perfect squares.
    Square,
    /// Numbers whose digits are all the same.
    Repdigit,
    /// One non-zero digit followed by zeros.
    Round,
}

impl Sequence {
    /// All generators in evaluation order.
    pub const ALL: [Sequence; 7] = [
        Sequence::Pi,
        Sequence::Euler,
        Sequence::Perfect,
        Sequence::Prime,
        Sequence::Square,
        Sequence::Repdigit,
        Sequence::Round,
    ];

    /// Label used in milestone records.
    pub fn name(self) -> &'static str {
        match self {
            Sequence::Pi => "Pi",
            Sequence::Euler => "Euler",
            Sequence::Perfect => "Perfect",
            Sequence::Prime => "Prime",
            Sequence::Square => "Square",
            Sequence::Repdigit => "Repdigit",
            Sequence::Round => "Round",
        }
    }

    /// `true` for sequences defined by how the number looks in decimal
    /// rather than by an arithmetic property.
    pub fn is_aesthetic(self) -> bool {
        matches!(self, Sequence::Repdigit | Sequence::Round)
    }

    /// First element of this sequence greater than `n`.
    ///
    /// `None` means the sequence has no such element (Perfect beyond its
    /// table) or the value would overflow `i64`.
    pub fn next_after(self, n: i64) -> Option<Hit> {
        match self {
            Sequence::Pi => pi_after(n),
            Sequence::Euler => euler_after(n),
            Sequence::Perfect => perfect_after(n),
            Sequence::Prime => prime_after(n),
            Sequence::Square => square_after(n),
            Sequence::Repdigit => repdigit_after(n),
            Sequence::Round => round_after(n),
        }
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
