//! Text form of item sequences and packings.
//!
//! A sequence is a string of digits `1`-`9`, one item per digit. A packing
//! renders each bin as the concatenation of its sizes, with bins joined by the
//! configured separator: `163841689` packs into `91/81/8/64/63` at capacity 10.

use crate::config::PackerConfig;
use crate::error::{PackerError, Result};
use crate::model::{Bin, Packing};
use crate::pipeline::pack_all;
use tracing::instrument;

/// Parses a digit string into item sizes.
///
/// Surrounding whitespace is ignored and an empty string is an empty sequence.
/// A `0` digit is reported as an invalid item; any non-digit character as an
/// invalid sequence.
pub fn parse_sequence(input: &str) -> Result<Vec<u32>> {
    let trimmed = input.trim();
    let mut items = Vec::with_capacity(trimmed.len());
    for (pos, c) in trimmed.char_indices() {
        match c.to_digit(10) {
            Some(0) => return Err(PackerError::InvalidItem { size: 0 }),
            Some(d) => items.push(d),
            None => {
                return Err(PackerError::InvalidSequence {
                    input: input.to_string(),
                    reason: format!("unexpected character {c:?} at position {pos}"),
                });
            }
        }
    }
    Ok(items)
}

/// Concatenates the sizes of one bin.
pub fn render_bin(bin: &Bin) -> String {
    bin.iter().map(|s| s.to_string()).collect()
}

/// Renders every bin and joins them with `separator`.
pub fn render_bins(bins: &[Bin], separator: &str) -> String {
    bins.iter()
        .map(render_bin)
        .collect::<Vec<_>>()
        .join(separator)
}

impl Packing {
    /// Text form of this packing using `separator` between bins.
    pub fn render(&self, separator: &str) -> String {
        render_bins(&self.bins, separator)
    }
}

#[instrument(skip(cfg))]
/// Parses, packs and renders one sequence.
pub fn pack_sequence(input: &str, cfg: &PackerConfig) -> Result<String> {
    let items = parse_sequence(input)?;
    let packing = pack_all(items, cfg)?;
    Ok(packing.render(&cfg.separator))
}
