//! Bucket-by-bucket snapshot of a table's keys.

use core::fmt;

/// Keys of every chain, indexed by bucket, in chain order (most recently
/// inserted first). Also records the configuration the table was built with.
///
/// `Display` prints a header and one `Slot:` line per bucket:
///
/// ```text
/// Initial size: 4
/// Max load factor: 1
/// Growth factor: 2
/// Slot:   0 --> 8 --> 4
/// Slot:   1 --> 1
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableDump<K> {
    pub initial_table_size: usize,
    pub max_load_factor: f64,
    pub growth_factor: f64,
    pub buckets: Vec<Vec<K>>,
}

impl<K> TableDump<K> {
    pub fn table_size(&self) -> usize {
        self.buckets.len()
    }

    /// Keys chained at bucket `index`; empty when out of range.
    pub fn bucket(&self, index: usize) -> &[K] {
        self.buckets.get(index).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<K: fmt::Display> fmt::Display for TableDump<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Initial size: {}", self.initial_table_size)?;
        writeln!(f, "Max load factor: {}", self.max_load_factor)?;
        write!(f, "Growth factor: {}", self.growth_factor)?;
        for (i, keys) in self.buckets.iter().enumerate() {
            write!(f, "\nSlot: {:>3}", i)?;
            for k in keys {
                write!(f, " --> {}", k)?;
            }
        }
        Ok(())
    }
}
