//! Threshold search shared by the sequence generators.

/// An element of a sequence together with its ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hit {
    value: i64,
    ordinal: u64,
}

impl Hit {
    /// Creates a hit for `value` at position `ordinal`.
    pub fn new(value: i64, ordinal: u64) -> Self {
        Self { value, ordinal }
    }

    /// The sequence element.
    pub fn value(self) -> i64 {
        self.value
    }

    /// Position of the element; 1-based for every generator except
    /// [`perfect_after`](crate::perfect_after).
    pub fn ordinal(self) -> u64 {
        self.ordinal
    }

    /// Days from `elapsed` to this element, i.e. `value - elapsed`.
    pub fn days_after(self, elapsed: i64) -> i64 {
        self.value.saturating_sub(elapsed)
    }
}

/// Outcome of scanning a sequence for the first element above a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Search {
    /// An element strictly greater than the threshold.
    Found(Hit),
    /// The sequence ended first; carries its last element, if any.
    Exhausted(Option<Hit>),
}

/// Scans `values` in order and stops at the first element `> threshold`.
///
/// Ordinals count the elements consumed, starting at 1. Nothing past the
/// returned element is pulled from the iterator.
pub(crate) fn first_exceeding<I>(values: I, threshold: i64) -> Search
where
    I: IntoIterator<Item = i64>,
{
    let mut last = None;
    for (idx, value) in values.into_iter().enumerate() {
        let hit = Hit::new(value, idx as u64 + 1);
        if value > threshold {
            return Search::Found(hit);
        }
        last = Some(hit);
    }
    Search::Exhausted(last)
}
