use crate::error::Error;

/// A validated search pattern: a non-empty, fixed sequence of code units.
///
/// The skip tables are a pure function of this sequence; changing the
/// pattern means building a new [`BoyerMoore`](crate::BoyerMoore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    units: Vec<char>,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, Error> {
        let units: Vec<char> = pattern.chars().collect();
        if units.is_empty() {
            return Err(Error::EmptyPattern);
        }
        Ok(Pattern { units })
    }

    /// Pattern length in code units (`m`).
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Always false: construction rejects zero-length patterns.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline(always)]
    pub fn units(&self) -> &[char] {
        &self.units
    }
}
