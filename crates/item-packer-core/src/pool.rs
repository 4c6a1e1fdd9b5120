use crate::error::{PackerError, Result};
use std::collections::BTreeMap;

/// Multiset of item sizes waiting to be packed.
///
/// Sizes whose count drops to zero are removed, so a zero count and an absent
/// size are the same state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPool {
    counts: BTreeMap<u32, usize>,
    len: usize,
}

impl ItemPool {
    /// Tallies `items` per distinct size. Fails on a zero size.
    pub fn new<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = u32>,
    {
        let mut pool = Self::default();
        for size in items {
            if size == 0 {
                return Err(PackerError::InvalidItem { size });
            }
            *pool.counts.entry(size).or_insert(0) += 1;
            pool.len += 1;
        }
        Ok(pool)
    }

    /// Remaining instances of `size` (0 if absent).
    pub fn count(&self, size: u32) -> usize {
        self.counts.get(&size).copied().unwrap_or(0)
    }

    /// Takes one instance of `size` out of the pool.
    pub fn remove(&mut self, size: u32) -> Result<()> {
        match self.counts.get_mut(&size) {
            Some(n) if *n > 1 => *n -= 1,
            Some(_) => {
                self.counts.remove(&size);
            }
            None => return Err(PackerError::Underflow { size }),
        }
        self.len -= 1;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total remaining items, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of distinct sizes still present.
    pub fn distinct_sizes(&self) -> usize {
        self.counts.len()
    }

    /// Largest remaining size.
    pub fn largest(&self) -> Option<u32> {
        self.counts.keys().next_back().copied()
    }

    /// `(size, count)` pairs in ascending size order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (u32, usize)> + '_ {
        self.counts.iter().map(|(&s, &n)| (s, n))
    }

    /// Present sizes no larger than `max`, largest first.
    pub(crate) fn descending_up_to(&self, max: u32) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.counts.range(..=max).rev().map(|(&s, &n)| (s, n))
    }
}
