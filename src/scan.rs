use crate::table::{self, BadCharTable};

/// Returned by a match callback to control the scan.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    Continue,
    Stop,
}

/// A single occurrence of the pattern within the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl Occurrence {
    /// Offset of the first matched code unit.
    #[inline(always)]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Offset one past the last matched code unit.
    #[inline(always)]
    pub fn end(&self) -> usize {
        self.end
    }
}

/// Batch scan loop: aligns the pattern's end against the text, compares
/// right to left, and advances by the larger of the two table skips.
///
/// Calls `on_match` once per occurrence, in increasing offset order;
/// `Scan::Stop` abandons the scan between alignments. Returns the
/// number of unit comparisons performed.
pub(crate) fn run(
    pattern: &[char],
    good: &[usize],
    bad: &dyn BadCharTable,
    text: &[char],
    on_match: &mut dyn FnMut(Occurrence) -> Scan,
) -> usize {
    let m = pattern.len();
    let n = text.len();
    let mut comparisons = 0usize;

    if m > n {
        return comparisons;
    }

    let mut i = 0usize;
    while i <= n - m {
        let mut j = m;
        while j > 0 && pattern[j - 1] == text[i + j - 1] {
            comparisons += 1;
            j -= 1;
        }

        let shift = if j == 0 {
            // Off the left edge of the pattern: full match at i.
            if on_match(Occurrence { start: i, end: i + m }) == Scan::Stop {
                return comparisons;
            }
            table::match_shift(good)
        } else {
            comparisons += 1;
            table::mismatch_shift(good, bad, m, j - 1, text[i + j - 1])
        };

        debug_assert!(shift >= 1, "scan must make forward progress");
        i += shift;
    }

    comparisons
}
