use std::collections::HashMap;

use crate::table::BadCharTable;

/// Bad-character table backed by a map of the units that actually
/// occur in the pattern.
///
/// Covers the full code-unit space with memory proportional to the
/// pattern's alphabet, at the cost of a hash per lookup. Never fails
/// to build.
#[derive(Debug)]
pub struct SparseTable {
    skips: HashMap<char, usize>,
    default: usize,
}

impl SparseTable {
    pub fn build(pattern: &[char]) -> Self {
        let m = pattern.len();

        let mut skips = HashMap::with_capacity(m.saturating_sub(1));
        // Rightmost occurrence wins; final position excluded.
        for (j, &unit) in pattern.iter().enumerate().take(m.saturating_sub(1)) {
            skips.insert(unit, m - j - 1);
        }

        SparseTable { skips, default: m }
    }
}

impl BadCharTable for SparseTable {
    #[inline(always)]
    fn skip(&self, unit: char) -> usize {
        match self.skips.get(&unit) {
            Some(&skip) => skip,
            None => self.default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supports_units_beyond_the_dense_bound() {
        let pattern: Vec<char> = "a🦀🦀b".chars().collect();
        let table = SparseTable::build(&pattern);
        assert_eq!(table.skip('🦀'), 1);
        assert_eq!(table.skip('a'), 3);
        assert_eq!(table.skip('b'), 4);
        assert_eq!(table.skip('z'), 4);
    }
}
