//! Core library for packing sized items into fixed-capacity bins.
//!
//! - Pool: `ItemPool` keeps the multiset of sizes still waiting for a bin
//! - Packer: `Packer` drains the pool one bin at a time, always taking the largest size that still fits
//! - Pipeline: `pack_all` packs a whole input eagerly; `pack_sequence` works on digit strings like `"163841689"`
//! - Data model is serde-serializable; a JSON report helper is provided for the CLI crate.
//!
//! Quick example:
//! ```
//! use item_packer_core::{Packer, PackerConfig, pack_sequence};
//! # fn main() -> item_packer_core::Result<()> {
//! let mut packer = Packer::new([5, 5, 5, 5], 10)?;
//! assert_eq!(packer.next_bin()?.items(), &[5, 5]);
//! assert_eq!(packer.next_bin()?.items(), &[5, 5]);
//! assert!(packer.is_exhausted());
//!
//! let line = pack_sequence("163841689", &PackerConfig::default())?;
//! assert_eq!(line, "91/81/8/64/63");
//! # Ok(()) }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod packer;
pub mod pipeline;
pub mod pool;
pub mod sequence;

pub use config::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use packer::*;
pub use pipeline::*;
pub use pool::*;
pub use sequence::*;

/// Convenience prelude for common types and functions.
/// Importing `item_packer_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{
        DEFAULT_CAPACITY, DEFAULT_SEPARATOR, OutputFormat, PackerConfig, PackerConfigBuilder,
    };
    pub use crate::error::{PackerError, Result};
    pub use crate::model::{Bin, PackStats, Packing, items_total};
    pub use crate::packer::{Packer, PackerState};
    pub use crate::pool::ItemPool;
    pub use crate::{pack_all, pack_batch, pack_sequence, parse_sequence, render_bins};
}
