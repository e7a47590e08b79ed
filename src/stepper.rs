use crate::{BoyerMoore, table};

/// Result of a single [`Stepper::step`] invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// One unit compared equal; more of the pattern remains.
    Compared,
    /// One unit compared unequal; the pattern was realigned.
    Mismatched,
    /// The final unit compared equal: full match at the given offset.
    Matched(usize),
    /// The alignment has run off the end of the text; nothing happened.
    Finished,
}

// Trace symbols, one cell per text position plus a terminator cell.
const CURSOR: char = '|';
const MATCHED_UNIT: char = '=';
const MISMATCH: char = '≠';
const FOUND: char = '§';
const END: char = '·';

/// The resumable state of a paused scan, owned by the stepper alone.
struct ScanCursor {
    /// Text offset of the pattern's first unit for this alignment.
    alignment: usize,
    /// Pattern index of the next comparison.
    pattern_index: usize,
    /// Text index of the next comparison (`alignment + pattern_index`).
    text_index: usize,
    comparisons: usize,
    matches: Vec<usize>,
    finished: bool,
    trace: Vec<char>,
}

/// Re-exposes the scan loop one comparison at a time.
///
/// Each [`step`](Stepper::step) performs exactly one unit comparison
/// and, when that comparison concludes an alignment, one realignment
/// driven by the same shift arithmetic as the batch scanner. Driving a
/// stepper to completion therefore yields the batch scanner's exact
/// match set and comparison count.
///
/// Purely single-threaded bookkeeping; the searcher's tables are only
/// read.
pub struct Stepper<'a> {
    searcher: &'a BoyerMoore,
    text: Vec<char>,
    cursor: ScanCursor,
}

impl<'a> Stepper<'a> {
    pub(crate) fn new(searcher: &'a BoyerMoore, text: &str) -> Self {
        let text: Vec<char> = text.chars().collect();
        let trace_len = text.len() + 1;
        let mut stepper = Stepper {
            searcher,
            text,
            cursor: ScanCursor {
                alignment: 0,
                pattern_index: 0,
                text_index: 0,
                comparisons: 0,
                matches: Vec::new(),
                finished: false,
                trace: vec![' '; trace_len],
            },
        };
        stepper.reset();
        stepper
    }

    /// Rewinds to the start of the text, discarding prior matches,
    /// comparison counts, and the trace.
    pub fn reset(&mut self) {
        let m = self.searcher.pattern.len();
        let n = self.text.len();
        let cursor = &mut self.cursor;

        cursor.alignment = 0;
        cursor.pattern_index = m - 1;
        cursor.text_index = m - 1;
        cursor.comparisons = 0;
        cursor.matches.clear();
        cursor.trace.fill(' ');

        if cursor.text_index < n {
            cursor.trace[cursor.text_index] = CURSOR;
            cursor.finished = false;
        } else {
            // Text shorter than pattern: nothing to compare, ever.
            cursor.trace[n] = END;
            cursor.finished = true;
        }
    }

    /// Performs exactly one unit comparison, mutating the cursor.
    ///
    /// A no-op returning [`StepOutcome::Finished`] once the alignment
    /// has run off the end of the text.
    pub fn step(&mut self) -> StepOutcome {
        if self.cursor.finished {
            return StepOutcome::Finished;
        }

        self.cursor.comparisons += 1;

        let pattern = self.searcher.pattern.units();
        let pattern_index = self.cursor.pattern_index;
        let text_index = self.cursor.text_index;

        if pattern[pattern_index] == self.text[text_index] {
            if pattern_index == 0 {
                // Off the left edge of the pattern: full match.
                let offset = self.cursor.alignment;
                self.cursor.trace[text_index] = FOUND;
                self.cursor.matches.push(offset);
                self.realign(table::match_shift(&self.searcher.good_suffix));
                StepOutcome::Matched(offset)
            } else {
                self.cursor.trace[text_index] = MATCHED_UNIT;
                self.cursor.pattern_index -= 1;
                self.cursor.text_index -= 1;
                self.cursor.trace[self.cursor.text_index] = CURSOR;
                StepOutcome::Compared
            }
        } else {
            self.cursor.trace[text_index] = MISMATCH;
            let shift = table::mismatch_shift(
                &self.searcher.good_suffix,
                self.searcher.bad_char.as_ref(),
                pattern.len(),
                pattern_index,
                self.text[text_index],
            );
            self.realign(shift);
            StepOutcome::Mismatched
        }
    }

    /// Moves the pattern forward by `shift` and points the cursor back
    /// at its final unit, stopping if that falls past the text's end.
    fn realign(&mut self, shift: usize) {
        debug_assert!(shift >= 1, "realignment must make forward progress");

        let m = self.searcher.pattern.len();
        let n = self.text.len();
        let cursor = &mut self.cursor;

        cursor.pattern_index = m - 1;
        cursor.alignment += shift;
        cursor.text_index = cursor.alignment + cursor.pattern_index;

        if cursor.text_index < n {
            cursor.trace[cursor.text_index] = CURSOR;
        } else {
            cursor.trace[n] = END;
            cursor.finished = true;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.cursor.finished
    }

    /// Offsets of all matches found so far, in increasing order.
    pub fn matches(&self) -> &[usize] {
        &self.cursor.matches
    }

    /// Text offset of the pattern's first unit for the current alignment.
    pub fn alignment(&self) -> usize {
        self.cursor.alignment
    }

    /// Pattern index of the next comparison.
    pub fn pattern_index(&self) -> usize {
        self.cursor.pattern_index
    }

    /// Text index of the next comparison.
    pub fn text_index(&self) -> usize {
        self.cursor.text_index
    }

    /// Unit comparisons performed since the last reset.
    pub fn comparisons(&self) -> usize {
        self.cursor.comparisons
    }

    /// Symbolic view of the scan so far, one cell per text position:
    /// `|` next comparison, `=` unit matched, `≠` mismatch, `§` full
    /// match, `·` end of search.
    pub fn trace(&self) -> String {
        self.cursor.trace.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drained(searcher: &BoyerMoore, text: &str) -> (Vec<usize>, usize) {
        let mut stepper = searcher.stepper(text);
        while stepper.step() != StepOutcome::Finished {}
        (stepper.matches().to_vec(), stepper.comparisons())
    }

    #[test]
    fn agrees_with_batch_scan() {
        for (pattern, text) in [
            ("abcd", "xyzabcdefg"),
            ("GCAGAGAG", "GCATCGCAGAGAGTATACAGTACG"),
            ("aaa", "aaaaa"),
            ("xyz", "abcdef"),
            ("ab", "abababab"),
        ] {
            let searcher = BoyerMoore::new(pattern).unwrap();
            let units: Vec<char> = text.chars().collect();
            let mut batch = Vec::new();
            let batch_comparisons = searcher.scan(&units, |occ| {
                batch.push(occ.start());
                crate::Scan::Continue
            });
            let (stepped, step_comparisons) = drained(&searcher, text);
            assert_eq!(stepped, batch, "matches diverged for {pattern:?} in {text:?}");
            assert_eq!(
                step_comparisons, batch_comparisons,
                "comparison counts diverged for {pattern:?} in {text:?}"
            );
        }
    }

    #[test]
    fn reports_outcomes_per_comparison() {
        let searcher = BoyerMoore::new("ab").unwrap();
        let mut stepper = searcher.stepper("abxy");

        // Alignment 0: 'b' matches at index 1, then 'a' at index 0.
        assert_eq!(stepper.step(), StepOutcome::Compared);
        assert_eq!(stepper.step(), StepOutcome::Matched(0));
        // Realigned by good[0] = 2; 'y' at index 3 mismatches 'b',
        // and the resulting shift runs off the end of the text.
        assert_eq!(stepper.step(), StepOutcome::Mismatched);
        assert!(stepper.is_finished());
        assert_eq!(stepper.step(), StepOutcome::Finished);
        assert_eq!(stepper.comparisons(), 3);
    }

    #[test]
    fn finished_step_is_a_no_op() {
        let searcher = BoyerMoore::new("needle").unwrap();
        let mut stepper = searcher.stepper("hay");
        assert!(stepper.is_finished());
        assert_eq!(stepper.step(), StepOutcome::Finished);
        assert_eq!(stepper.comparisons(), 0);
        assert!(stepper.matches().is_empty());
    }

    #[test]
    fn reset_discards_progress() {
        let searcher = BoyerMoore::new("aa").unwrap();
        let mut stepper = searcher.stepper("aaaa");
        while stepper.step() != StepOutcome::Finished {}
        assert_eq!(stepper.matches(), &[0, 1, 2]);

        stepper.reset();
        assert!(!stepper.is_finished());
        assert!(stepper.matches().is_empty());
        assert_eq!(stepper.comparisons(), 0);
        assert_eq!(stepper.alignment(), 0);
        assert_eq!(stepper.pattern_index(), 1);
        assert_eq!(stepper.text_index(), 1);

        while stepper.step() != StepOutcome::Finished {}
        assert_eq!(stepper.matches(), &[0, 1, 2]);
    }

    #[test]
    fn trace_marks_matches_and_end() {
        let searcher = BoyerMoore::new("abcd").unwrap();
        let mut stepper = searcher.stepper("xyzabcdefg");
        while stepper.step() != StepOutcome::Finished {}

        let trace: Vec<char> = stepper.trace().chars().collect();
        assert_eq!(trace[3], '§');
        assert_eq!(trace[10], '·');
    }
}
