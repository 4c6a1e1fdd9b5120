use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Capacity used when the caller does not override it.
pub const DEFAULT_CAPACITY: u32 = 10;

/// Separator placed between rendered bins.
pub const DEFAULT_SEPARATOR: &str = "/";

/// Output formats for rendered packing results.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bins as digit strings joined by the separator, one line per input.
    Text,
    /// One JSON object per input with bins and statistics.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackerConfig {
    /// Maximum total item size a single bin may hold.
    #[serde(default = "default_capacity")]
    pub capacity: u32,
    /// Separator between bins when rendering a packing as text.
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            separator: default_separator(),
            format: default_format(),
        }
    }
}

impl PackerConfig {
    /// Validates the configuration parameters.
    ///
    /// Returns an error if:
    /// - The bin capacity is zero
    /// - The separator is empty (bins could no longer be told apart)
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::PackerError;

        if self.capacity == 0 {
            return Err(PackerError::InvalidCapacity {
                capacity: self.capacity,
            });
        }

        if self.separator.is_empty() {
            return Err(PackerError::InvalidConfig(
                "separator must not be empty".into(),
            ));
        }

        Ok(())
    }
}

fn default_capacity() -> u32 {
    DEFAULT_CAPACITY
}
fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}
fn default_format() -> OutputFormat {
    OutputFormat::Text
}

/// Builder for `PackerConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct PackerConfigBuilder {
    cfg: PackerConfig,
}

impl PackerConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PackerConfig::default(),
        }
    }
    pub fn capacity(mut self, v: u32) -> Self {
        self.cfg.capacity = v;
        self
    }
    pub fn separator(mut self, v: impl Into<String>) -> Self {
        self.cfg.separator = v.into();
        self
    }
    pub fn format(mut self, v: OutputFormat) -> Self {
        self.cfg.format = v;
        self
    }
    pub fn build(self) -> PackerConfig {
        self.cfg
    }
}

impl PackerConfig {
    /// Create a fluent builder for `PackerConfig`.
    pub fn builder() -> PackerConfigBuilder {
        PackerConfigBuilder::new()
    }
}
