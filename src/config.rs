//! Growth policy: when the table expands and to what size.

use crate::error::ConfigError;

/// Default ceiling on `len / table_size` before an insert expands the table.
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 3.0;

/// Default multiplier applied to the bucket count on expansion.
pub const DEFAULT_GROWTH_FACTOR: f64 = 2.0;

/// Load-factor policy of a table. Fixed for the lifetime of the table.
///
/// ```
/// use chain_table::TableConfig;
///
/// let config = TableConfig::default()
///     .with_max_load_factor(1.0)
///     .with_growth_factor(1.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    max_load_factor: f64,
    growth_factor: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl TableConfig {
    pub fn with_max_load_factor(self, max_load_factor: f64) -> Self {
        Self {
            max_load_factor,
            ..self
        }
    }

    pub fn with_growth_factor(self, growth_factor: f64) -> Self {
        Self {
            growth_factor,
            ..self
        }
    }

    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    pub fn growth_factor(&self) -> f64 {
        self.growth_factor
    }

    /// Checks `max_load_factor > 0` and `growth_factor > 1`, both finite.
    /// NaN fails both comparisons and is rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_load_factor.is_finite() && self.max_load_factor > 0.0) {
            return Err(ConfigError::InvalidMaxLoadFactor(self.max_load_factor));
        }
        if !(self.growth_factor.is_finite() && self.growth_factor > 1.0) {
            return Err(ConfigError::InvalidGrowthFactor(self.growth_factor));
        }
        Ok(())
    }

    /// True when holding `len` entries in `table_size` chains is over the limit.
    pub(crate) fn exceeds_max_load(&self, len: usize, table_size: usize) -> bool {
        len as f64 / table_size as f64 > self.max_load_factor
    }

    /// Bucket count after one expansion: `ceil(table_size * growth_factor)`,
    /// and always at least one more than `table_size`.
    pub(crate) fn grown_size(&self, table_size: usize) -> usize {
        // Float-to-int casts saturate, so huge products clamp to usize::MAX.
        let grown = (table_size as f64 * self.growth_factor).ceil() as usize;
        grown.max(table_size.saturating_add(1))
    }
}
