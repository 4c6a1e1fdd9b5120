use serde::{Deserialize, Serialize};

/// Sum of item sizes. Widened so arbitrary slices cannot overflow.
pub fn items_total(items: &[u32]) -> u64 {
    items.iter().map(|&s| s as u64).sum()
}

/// Items assigned together, in the order they were selected.
///
/// Serialized as a plain array of sizes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Bin {
    items: Vec<u32>,
}

impl Bin {
    pub(crate) fn with_items(items: Vec<u32>) -> Self {
        Self { items }
    }
    /// Item sizes in selection order.
    pub fn items(&self) -> &[u32] {
        &self.items
    }
    /// Total occupied capacity.
    pub fn total(&self) -> u64 {
        items_total(&self.items)
    }
    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, u32> {
        self.items.iter()
    }
    pub fn into_items(self) -> Vec<u32> {
        self.items
    }
}

impl<'a> IntoIterator for &'a Bin {
    type Item = &'a u32;
    type IntoIter = std::slice::Iter<'a, u32>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A completed packing: every bin produced for one input, plus the capacity used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Packing {
    pub capacity: u32,
    pub bins: Vec<Bin>,
}

/// Statistics about packing efficiency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PackStats {
    /// Total number of bins produced.
    pub num_bins: usize,
    /// Total number of items packed.
    pub num_items: usize,
    /// Capacity offered by all bins (`num_bins * capacity`).
    pub total_capacity: u64,
    /// Capacity actually used (sum of all item sizes).
    pub used_capacity: u64,
    /// Occupancy ratio: used_capacity / total_capacity (0.0 to 1.0).
    /// Higher is better (less wasted space).
    pub occupancy: f64,
    /// Largest bin total.
    pub max_bin_total: u64,
    /// Smallest bin total (0 when there are no bins).
    pub min_bin_total: u64,
}

impl Packing {
    /// Computes packing statistics for this result.
    pub fn stats(&self) -> PackStats {
        let num_bins = self.bins.len();
        let mut num_items = 0;
        let mut used_capacity = 0u64;
        let mut max_bin_total = 0u64;
        let mut min_bin_total = u64::MAX;

        for bin in &self.bins {
            let total = bin.total();
            num_items += bin.len();
            used_capacity += total;
            max_bin_total = max_bin_total.max(total);
            min_bin_total = min_bin_total.min(total);
        }
        if num_bins == 0 {
            min_bin_total = 0;
        }

        let total_capacity = num_bins as u64 * self.capacity as u64;
        let occupancy = if total_capacity > 0 {
            used_capacity as f64 / total_capacity as f64
        } else {
            0.0
        };

        PackStats {
            num_bins,
            num_items,
            total_capacity,
            used_capacity,
            occupancy,
            max_bin_total,
            min_bin_total,
        }
    }

    /// All packed items, bin by bin.
    pub fn items(&self) -> impl Iterator<Item = u32> + '_ {
        self.bins.iter().flat_map(|b| b.iter().copied())
    }
}
