//! Threshold searches over notable integer sequences.
//!
//! Every generator answers the same question: given a day count `n`, which
//! is the first element of the sequence strictly greater than `n`, and how
//! many-th element is it?
//!
//! | Sequence | Elements | Ordinal |
//! |----------|----------|---------|
//! | Pi | prefixes of `3141592653` | 1-based, finite (last prefix when exhausted) |
//! | Euler | prefixes of `2718281828` | 1-based, finite (last prefix when exhausted) |
//! | Perfect | 6, 28, 496, 8128, 33550336 | **0-based**, `None` past the table |
//! | Prime | 2, 3, 5, 7, ... | 1-based prime count |
//! | Square | 1, 4, 9, ... | 1-based root |
//! | Repdigit | 1..9, 11, 22, ..., 111, ... | 1-based |
//! | Round | 10, 20, ..., 90, 100, 200, ... | 1-based |
//!
//! # Quick start
//!
//! ```
//! use carpe_sequence::{Sequence, square_after};
//!
//! let hit = square_after(15871).unwrap();
//! assert_eq!(hit.value(), 15876);
//! assert_eq!(hit.ordinal(), 126);
//! assert_eq!(hit.days_after(15871), 5);
//!
//! let perfect = Sequence::Perfect.next_after(5000).unwrap();
//! assert_eq!((perfect.value(), perfect.ordinal()), (8128, 3));
//! ```
//!
//! # Cost
//!
//! Searches stop at the first qualifying element and never build more of a
//! sequence than that. Repdigit and Round list their members by digit count
//! and leading digit, so they take `O(log n)` steps. Prime sieves every
//! integer up to the result, so it is linear in `n`: instant for human ages
//! (`n` around 10⁴–10⁵), still well under a second at 10⁷, and slow beyond
//! roughly 10⁹.

pub mod digits;
pub mod pattern;
pub mod perfect;
pub mod prime;
pub mod search;
pub mod sequence;

pub(crate) mod square;

pub use digits::{EULER_DIGITS, PI_DIGITS, digit_prefix_after, euler_after, pi_after, prefixes};
pub use pattern::{is_repdigit, is_round, repdigit_after, repdigits, round_after, round_numbers};
pub use perfect::{PERFECT_NUMBERS, perfect_after};
pub use prime::{Primes, prime_after};
pub use search::Hit;
pub use sequence::Sequence;
pub use square::square_after;
