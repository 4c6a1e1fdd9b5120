use crate::config::PackerConfig;
use crate::error::Result;
use crate::model::Packing;
use crate::packer::Packer;
use std::time::Instant;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[instrument(skip_all)]
/// Packs `items` into bins of `cfg.capacity` and returns every bin.
///
/// Notes:
/// - Input order does not matter; only the multiset of sizes does.
/// - An empty input yields an empty packing, not an error.
pub fn pack_all<I>(items: I, cfg: &PackerConfig) -> Result<Packing>
where
    I: IntoIterator<Item = u32>,
{
    let start = Instant::now();
    let mut packer = Packer::with_config(items, cfg)?;
    let total = packer.pool().len();

    let mut bins = Vec::new();
    while !packer.is_exhausted() {
        bins.push(packer.next_bin()?);
    }

    debug!(
        items = total,
        bins = bins.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "packed"
    );
    Ok(Packing {
        capacity: cfg.capacity,
        bins,
    })
}

#[instrument(skip_all)]
/// Packs each item list independently. Results keep the order of `batches`.
///
/// With the `parallel` feature the lists are packed on the rayon pool; every
/// list still gets its own `Packer`, so nothing is shared between them.
pub fn pack_batch(batches: Vec<Vec<u32>>, cfg: &PackerConfig) -> Vec<Result<Packing>> {
    #[cfg(feature = "parallel")]
    {
        batches
            .into_par_iter()
            .map(|items| pack_all(items, cfg))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        batches
            .into_iter()
            .map(|items| pack_all(items, cfg))
            .collect()
    }
}
