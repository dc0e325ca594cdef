//! Unsigned integer keys and their reduction to a bucket index.

use core::fmt;
use core::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width unsigned integer usable as a table key.
///
/// The bucket for a key is `key mod table_size`. There is no mixing step,
/// so keys that share a residue always share a chain. Implemented for
/// `u8`, `u16`, `u32`, `u64` and `usize`; sealed against other types.
pub trait TableKey: Copy + Eq + Hash + fmt::Debug + fmt::Display + sealed::Sealed {
    /// Bucket index of this key in a table of `table_size` chains.
    fn slot(self, table_size: usize) -> usize;
}

macro_rules! impl_table_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl TableKey for $t {
                #[inline]
                fn slot(self, table_size: usize) -> usize {
                    debug_assert!(table_size > 0, "slot of a zero-sized table");
                    // Widening both sides keeps `usize` tables larger than the key type exact.
                    (self as u64 % table_size as u64) as usize
                }
            }
        )*
    };
}

impl_table_key!(u8, u16, u32, u64, usize);
