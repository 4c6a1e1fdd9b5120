use crate::config::PackerConfig;
use crate::error::{PackerError, Result};
use crate::model::Bin;
use crate::pool::ItemPool;
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;
use tracing::{error, trace};

/// Whether a packer can still produce bins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PackerState {
    /// Items remain in the pool.
    Active,
    /// The pool is empty. Terminal.
    Exhausted,
}

/// Greedy descending-fit packer.
///
/// Owns its [`ItemPool`] and drains it one bin per pull. Each bin is filled by
/// repeatedly taking the largest remaining size that still fits, so sizes
/// within a bin never increase. The result depends only on the multiset of
/// sizes and the capacity, not on input order.
///
/// Bins can be pulled with [`Packer::next_bin`], which fails with
/// [`PackerError::Exhausted`] once the pool is empty, or through the
/// `Iterator` impl, which yields `None` instead.
#[derive(Debug, Clone)]
pub struct Packer {
    pool: ItemPool,
    capacity: u32,
    produced: usize,
}

impl Packer {
    /// Builds a packer over `items` with bins of `capacity`.
    ///
    /// Fails if `capacity` is zero, any size is zero, or any size exceeds `capacity`.
    pub fn new<I>(items: I, capacity: u32) -> Result<Self>
    where
        I: IntoIterator<Item = u32>,
    {
        if capacity == 0 {
            return Err(PackerError::InvalidCapacity { capacity });
        }
        Self::from_pool(ItemPool::new(items)?, capacity)
    }

    /// Like [`Packer::new`], taking the capacity from a validated config.
    pub fn with_config<I>(items: I, cfg: &PackerConfig) -> Result<Self>
    where
        I: IntoIterator<Item = u32>,
    {
        cfg.validate()?;
        Self::new(items, cfg.capacity)
    }

    /// Wraps an existing pool. The pool is moved in; nothing else can touch it afterwards.
    pub fn from_pool(pool: ItemPool, capacity: u32) -> Result<Self> {
        if capacity == 0 {
            return Err(PackerError::InvalidCapacity { capacity });
        }
        if let Some(size) = pool.largest().filter(|&s| s > capacity) {
            return Err(PackerError::OversizedItem { size, capacity });
        }
        Ok(Self {
            pool,
            capacity,
            produced: 0,
        })
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn state(&self) -> PackerState {
        if self.pool.is_empty() {
            PackerState::Exhausted
        } else {
            PackerState::Active
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.state() == PackerState::Exhausted
    }

    /// Items not yet assigned to a bin.
    pub fn pool(&self) -> &ItemPool {
        &self.pool
    }

    /// Number of bins produced so far.
    pub fn bins_produced(&self) -> usize {
        self.produced
    }

    /// Builds the next bin and removes its items from the pool.
    pub fn next_bin(&mut self) -> Result<Bin> {
        if self.is_exhausted() {
            return Err(PackerError::Exhausted);
        }
        let items = self.plan_bin();
        self.commit(&items)?;
        self.produced += 1;
        trace!(
            bin = self.produced,
            ?items,
            remaining = self.pool.len(),
            "bin committed"
        );
        Ok(Bin::with_items(items))
    }

    /// Removes a planned bin from the pool, all or nothing.
    ///
    /// `items` must be non-increasing, as `plan_bin` produces them. Every run of
    /// equal sizes is checked against the pool before anything is removed, so a
    /// failure leaves the pool untouched.
    fn commit(&mut self, items: &[u32]) -> Result<()> {
        for run in items.chunk_by(|a, b| a == b) {
            if self.pool.count(run[0]) < run.len() {
                return Err(PackerError::Underflow { size: run[0] });
            }
        }
        for &size in items {
            self.pool.remove(size)?;
        }
        Ok(())
    }

    /// Chooses the contents of the next bin without touching the pool.
    fn plan_bin(&self) -> Vec<u32> {
        let mut planned = Vec::new();
        let mut remaining = self.capacity;
        let mut run = Run {
            size: self.capacity,
            len: 0,
        };
        while let Some(size) = self.next_item(run, remaining) {
            if size == run.size {
                run.len += 1;
            } else {
                run = Run { size, len: 1 };
            }
            planned.push(size);
            remaining -= size;
        }
        planned
    }

    /// Largest size `<= remaining` with an instance not already planned for this bin.
    ///
    /// Only sizes present in the pool can qualify, so walking the pool's sizes
    /// downwards from `remaining` picks the same size as trying every value
    /// from `remaining` down to 1. Sizes above the current run were passed over
    /// when the run started, with at least as much room as now, so the walk
    /// starts at the run's size and only that size has planned instances.
    fn next_item(&self, run: Run, remaining: u32) -> Option<u32> {
        self.pool
            .descending_up_to(remaining.min(run.size))
            .find(|&(size, count)| count > run.planned(size))
            .map(|(size, _)| size)
    }
}

/// Trailing run of equal sizes in the bin being planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    size: u32,
    len: usize,
}

impl Run {
    /// Instances of `size` already planned for this bin.
    fn planned(self, size: u32) -> usize {
        if size == self.size { self.len } else { 0 }
    }
}

impl Iterator for Packer {
    type Item = Bin;

    fn next(&mut self) -> Option<Bin> {
        match self.next_bin() {
            Ok(bin) => Some(bin),
            Err(PackerError::Exhausted) => None,
            Err(e) => {
                // Planned items are always present, so commit cannot fail.
                error!(error = %e, "bin commit failed");
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.pool.len();
        (len.min(1), Some(len))
    }
}

impl FusedIterator for Packer {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_counts_only_its_own_size() {
        let run = Run { size: 4, len: 3 };
        assert_eq!(run.planned(4), 3);
        assert_eq!(run.planned(5), 0);
        assert_eq!(run.planned(1), 0);
    }

    #[test]
    fn next_item_skips_a_fully_planned_run() {
        let packer = Packer::new([3, 3, 1, 1], 10).expect("packer");
        let run = Run { size: 3, len: 2 };
        assert_eq!(packer.next_item(run, 4), Some(1));
        let run = Run { size: 3, len: 1 };
        assert_eq!(packer.next_item(run, 7), Some(3));
    }

    #[test]
    fn next_item_never_revisits_sizes_above_the_run() {
        // The single 3 is planned, then a 1; room is left for another 3 but none remains
        let packer = Packer::new([3, 1, 1, 1, 1, 1], 10).expect("packer");
        let run = Run { size: 1, len: 1 };
        assert_eq!(packer.next_item(run, 6), Some(1));
    }

    #[test]
    fn commit_is_all_or_nothing() {
        let mut packer = Packer::new([5, 2, 2], 10).expect("packer");
        let before = packer.pool().clone();
        assert_eq!(
            packer.commit(&[5, 2, 2, 2]),
            Err(PackerError::Underflow { size: 2 })
        );
        assert_eq!(packer.pool(), &before);
        assert_eq!(packer.commit(&[7]), Err(PackerError::Underflow { size: 7 }));
        assert_eq!(packer.pool(), &before);

        packer.commit(&[5, 2, 2]).expect("commit");
        assert!(packer.pool().is_empty());
    }
}
