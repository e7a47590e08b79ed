pub(crate) mod dense;
pub(crate) mod sparse;

/// Bad-character lookup capability.
///
/// Both table engines answer the same question: given the text unit
/// that caused a mismatch, how far is its rightmost occurrence in the
/// pattern (excluding the final position) from the pattern's end? A
/// unit that never occurs there answers with the full pattern length.
pub(crate) trait BadCharTable: Send + Sync {
    fn skip(&self, unit: char) -> usize;
}

/// Which bad-character table engine backs a searcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Flat array indexed by code point, bounded by
    /// [`DENSE_ALPHABET_LIMIT`]. O(1) lookup, fixed memory cost.
    Dense,
    /// Map from code unit to skip, holding only units that occur in
    /// the pattern. Covers all of Unicode, slightly slower lookup.
    Sparse,
}

/// Upper bound (exclusive) on code points the dense table can index.
///
/// Matches the 64K fixed-width code-unit alphabet of the classical
/// table layout. Text units at or above the bound resolve to the
/// default skip at scan time; pattern units at or above it are
/// rejected when the dense table is built.
pub const DENSE_ALPHABET_LIMIT: u32 = 0x10000;

/// Builds the good-suffix shift table for `pattern`, with `m + 1`
/// entries. Entry `k` is the shift for a mismatch after the suffix
/// starting at pattern position `k` has already matched; entry `0` is
/// the shift applied after a full match.
///
/// Two passes over a border array `f`: the first walks the pattern
/// right to left recording, for each position, the start of the
/// widest border of the suffix beginning there, and charges `j - i`
/// to every border boundary it falls back across. The second
/// propagates the widest border of the whole pattern into entries the
/// first pass left unset, narrowing it each time the index walks past
/// the current border start. The weak-suffix case is covered by the
/// fallback chain; it needs no special handling.
pub(crate) fn good_suffix_table(pattern: &[char]) -> Vec<usize> {
    let m = pattern.len();
    let mut shift = vec![0usize; m + 1];
    let mut f = vec![0usize; m + 1];

    let mut j = m + 1;
    f[m] = j;

    let mut i = m;
    while i > 0 {
        while j <= m && pattern[i - 1] != pattern[j - 1] {
            if shift[j] == 0 {
                shift[j] = j - i;
            }
            j = f[j];
        }
        j -= 1;
        f[i - 1] = j;
        i -= 1;
    }

    let mut p = f[0];
    for (k, entry) in shift.iter_mut().enumerate() {
        if *entry == 0 {
            *entry = p;
        }
        if k == p {
            p = f[p];
        }
    }

    shift
}

/// Shift for a mismatch at pattern position `j` against text unit
/// `unit`, per the max-of-two-skips rule.
///
/// The bad-character term `skip(unit) - m + j + 1` can go non-positive
/// when the rightmost occurrence of `unit` lies at or right of `j`;
/// the good-suffix term is always at least 1, so the max is too.
#[inline(always)]
pub(crate) fn mismatch_shift(
    good: &[usize],
    bad: &dyn BadCharTable,
    m: usize,
    j: usize,
    unit: char,
) -> usize {
    let bad_term = (bad.skip(unit) + j + 1).saturating_sub(m);
    good[j + 1].max(bad_term)
}

/// Shift applied after a full pattern match.
#[inline(always)]
pub(crate) fn match_shift(good: &[usize]) -> usize {
    good[0]
}
