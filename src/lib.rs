use crate::table::{BadCharTable, dense::DenseTable, sparse::SparseTable};

pub mod error;
pub mod pattern;
pub mod scan;
pub mod stepper;
pub mod table;

pub use error::Error;
pub use pattern::Pattern;
pub use scan::{Occurrence, Scan};
pub use stepper::{StepOutcome, Stepper};
pub use table::{DENSE_ALPHABET_LIMIT, TableKind};

/// A single-pattern text searcher built on the Boyer–Moore algorithm,
/// combining the bad-character and good-suffix heuristics and always
/// advancing by the larger of the two skips.
///
/// Both skip tables are computed once, at construction, as a pure
/// function of the pattern; searching never mutates them, so one
/// searcher can serve any number of texts (and threads).
pub struct BoyerMoore {
    pattern: Pattern,
    good_suffix: Vec<usize>,
    bad_char: Box<dyn BadCharTable>,
    kind: TableKind,
}

impl std::fmt::Debug for BoyerMoore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoyerMoore")
            .field("pattern", &self.pattern)
            .field("good_suffix", &self.good_suffix)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl BoyerMoore {
    /// Creates a new `BoyerMoore` searcher for `pattern`, selecting the
    /// bad-character table engine that fits it.
    ///
    /// Patterns whose units all lie below [`DENSE_ALPHABET_LIMIT`] get
    /// the flat array table for O(1) lookup; anything wider falls back
    /// to the map-backed table, which covers all of Unicode.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyPattern`] for a zero-length pattern;
    /// its skip tables would never make forward progress.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bmscan::BoyerMoore;
    ///
    /// let searcher = BoyerMoore::new("abcd")?;
    /// assert_eq!(searcher.search("xyzabcdefg"), vec![3]);
    /// # Ok::<(), bmscan::Error>(())
    /// ```
    pub fn new(pattern: &str) -> Result<Self, Error> {
        let dense = pattern.chars().all(|unit| (unit as u32) < DENSE_ALPHABET_LIMIT);
        let kind = if dense { TableKind::Dense } else { TableKind::Sparse };
        Self::with_table(pattern, kind)
    }

    /// Creates a searcher backed by an explicitly chosen table engine.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyPattern`] for a zero-length pattern,
    /// or [`Error::UnsupportedCharacter`] when [`TableKind::Dense`] is
    /// requested for a pattern with units at or beyond
    /// [`DENSE_ALPHABET_LIMIT`].
    pub fn with_table(pattern: &str, kind: TableKind) -> Result<Self, Error> {
        let pattern = Pattern::new(pattern)?;

        // Both tables are rebuilt together; there is no partial-update
        // path for a changed pattern.
        let bad_char: Box<dyn BadCharTable> = match kind {
            TableKind::Dense => Box::new(DenseTable::build(pattern.units())?),
            TableKind::Sparse => Box::new(SparseTable::build(pattern.units())),
        };
        let good_suffix = table::good_suffix_table(pattern.units());

        log::debug!(
            "built {kind:?} bad-character table for {}-unit pattern",
            pattern.len()
        );

        Ok(BoyerMoore {
            pattern,
            good_suffix,
            bad_char,
            kind,
        })
    }

    /// Returns the offset of every occurrence of the pattern in `text`,
    /// in increasing order. Offsets count code units, not bytes.
    ///
    /// Never fails: a text shorter than the pattern simply yields no
    /// occurrences.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bmscan::BoyerMoore;
    ///
    /// let searcher = BoyerMoore::new("aaa")?;
    /// assert_eq!(searcher.search("aaaaa"), vec![0, 1, 2]);
    /// # Ok::<(), bmscan::Error>(())
    /// ```
    pub fn search(&self, text: &str) -> Vec<usize> {
        let units: Vec<char> = text.chars().collect();
        self.search_units(&units)
    }

    /// [`search`](Self::search) over an already-decoded unit slice.
    pub fn search_units(&self, text: &[char]) -> Vec<usize> {
        let mut found = Vec::new();
        self.scan(text, |occurrence| {
            found.push(occurrence.start());
            Scan::Continue
        });
        found
    }

    /// Scans `text`, invoking `on_match` for each occurrence in
    /// increasing offset order. Returning [`Scan::Stop`] abandons the
    /// scan immediately; returning [`Scan::Continue`] resumes it.
    ///
    /// Returns the number of unit comparisons the scan performed.
    pub fn scan<F>(&self, text: &[char], mut on_match: F) -> usize
    where
        F: FnMut(Occurrence) -> Scan,
    {
        scan::run(
            self.pattern.units(),
            &self.good_suffix,
            self.bad_char.as_ref(),
            text,
            &mut on_match,
        )
    }

    /// Creates a [`Stepper`] that replays the scan over `text` one
    /// comparison at a time, for inspection or visualization.
    pub fn stepper(&self, text: &str) -> Stepper<'_> {
        Stepper::new(self, text)
    }

    /// The pattern this searcher was built for.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The good-suffix shift table, `pattern.len() + 1` entries.
    /// Entry `0` is the shift applied after a full match.
    pub fn good_suffix(&self) -> &[usize] {
        &self.good_suffix
    }

    /// Which bad-character table engine backs this searcher.
    pub fn table_kind(&self) -> TableKind {
        self.kind
    }
}
