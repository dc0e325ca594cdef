//! Probe, expansion and allocation counters.
//!
//! Counters are diagnostic only: the table never reads them to make a
//! decision. Probes are counted from `&self` lookups, so they sit in a
//! `Cell`; this keeps the table single-threaded (`!Sync`) without atomics.

use core::cell::Cell;
use core::fmt;

#[derive(Debug, Default)]
pub(crate) struct Counters {
    probes: Cell<u64>,
    expansions: u64,
    allocations: u64,
}

impl Counters {
    #[inline]
    pub(crate) fn add_probes(&self, n: usize) {
        self.probes.set(self.probes.get().saturating_add(n as u64));
    }

    pub(crate) fn record_expansion(&mut self) {
        self.expansions += 1;
    }

    pub(crate) fn record_allocation(&mut self) {
        self.allocations += 1;
    }

    pub(crate) fn snapshot(&self, count: usize, table_size: usize) -> TableStats {
        TableStats {
            count,
            table_size,
            probes: self.probes.get(),
            expansions: self.expansions,
            allocations: self.allocations,
        }
    }
}

/// Point-in-time copy of a table's size and counters.
///
/// `Display` renders the counters one per line:
///
/// ```text
/// Number of probes: 4
/// Number of expansions: 1
/// Items: 5, TableSize: 8
/// Load factor: 0.625
/// Nodes created: 5
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats {
    /// Live entries.
    pub count: usize,
    /// Current number of chains.
    pub table_size: usize,
    /// Chain nodes visited by inserts, removes and lookups.
    pub probes: u64,
    /// Times the table was rebuilt at a larger size.
    pub expansions: u64,
    /// Nodes created by successful inserts.
    pub allocations: u64,
}

impl TableStats {
    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.table_size as f64
    }
}

impl fmt::Display for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of probes: {}", self.probes)?;
        writeln!(f, "Number of expansions: {}", self.expansions)?;
        writeln!(f, "Items: {}, TableSize: {}", self.count, self.table_size)?;
        writeln!(f, "Load factor: {}", significant(self.load_factor(), 3))?;
        write!(f, "Nodes created: {}", self.allocations)
    }
}

/// Rounds to `digits` significant digits and drops trailing zeros, so
/// `0.75` stays `0.75` and `1.0` prints as `1`. Large values keep their
/// integer digits instead of switching to an exponent.
fn significant(value: f64, digits: i32) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (digits - 1 - magnitude).max(0) as usize;
    let mut s = format!("{:.*}", decimals, value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    s
}
