use crate::{
    error::Error,
    table::{BadCharTable, DENSE_ALPHABET_LIMIT},
};

/// Bad-character table backed by a flat array indexed by code point.
///
/// Trades a fixed 64K-entry allocation for branch-free O(1) lookup.
/// Only patterns whose units all lie below [`DENSE_ALPHABET_LIMIT`]
/// can be compiled into it.
pub struct DenseTable {
    skips: Vec<usize>,
    default: usize,
}

impl std::fmt::Debug for DenseTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The 64K skip array is not worth printing; show the entries
        // that differ from the default.
        let occupied = self.skips.iter().filter(|&&s| s != self.default).count();
        f.debug_struct("DenseTable")
            .field("default", &self.default)
            .field("occupied", &occupied)
            .finish_non_exhaustive()
    }
}

impl DenseTable {
    pub fn build(pattern: &[char]) -> Result<Self, Error> {
        let m = pattern.len();

        for &unit in pattern {
            let code = unit as u32;
            if code >= DENSE_ALPHABET_LIMIT {
                return Err(Error::UnsupportedCharacter {
                    unit,
                    code,
                    limit: DENSE_ALPHABET_LIMIT,
                });
            }
        }

        let mut skips = vec![m; DENSE_ALPHABET_LIMIT as usize];
        // Rightmost occurrence wins: later positions overwrite earlier
        // ones. The final position is excluded.
        for (j, &unit) in pattern.iter().enumerate().take(m.saturating_sub(1)) {
            skips[unit as usize] = m - j - 1;
        }

        Ok(DenseTable { skips, default: m })
    }
}

impl BadCharTable for DenseTable {
    #[inline(always)]
    fn skip(&self, unit: char) -> usize {
        // Text units beyond the bound cannot occur in a validated
        // pattern, so the default skip is exact for them.
        match self.skips.get(unit as usize) {
            Some(&skip) => skip,
            None => self.default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_pattern_unit() {
        let pattern: Vec<char> = "a🦀b".chars().collect();
        let err = DenseTable::build(&pattern).unwrap_err();
        assert!(matches!(err, Error::UnsupportedCharacter { unit: '🦀', .. }));
    }

    #[test]
    fn debug_summarizes_instead_of_dumping_the_array() {
        let pattern: Vec<char> = "abc".chars().collect();
        let table = DenseTable::build(&pattern).unwrap();
        // 'a' and 'b' carry non-default skips; the final unit keeps
        // the default.
        assert_eq!(
            format!("{table:?}"),
            "DenseTable { default: 3, occupied: 2, .. }"
        );
    }

    #[test]
    fn out_of_range_text_unit_gets_default_skip() {
        let pattern: Vec<char> = "abc".chars().collect();
        let table = DenseTable::build(&pattern).unwrap();
        assert_eq!(table.skip('🦀'), 3);
    }
}
