//! Candidate word list with stable, deterministic word ids

/// Index of a word within a [`WordList`]
pub type WordId = usize;

/// A deduplicated candidate word list
///
/// Words are stored sorted, so a `WordId` ordering is also lexicographic word
/// ordering. Tie-breaks in the solver lean on this to stay reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
    glyphs: Vec<Vec<char>>,
}

impl WordList {
    /// Build a word list from pre-collected words (sorts and dedups)
    pub fn new(mut words: Vec<String>) -> Self {
        words.sort();
        words.dedup();
        let glyphs = words.iter().map(|w| w.chars().collect()).collect();
        Self { words, glyphs }
    }

    /// Parse a newline-delimited word list; blank lines are skipped and case
    /// is preserved
    pub fn parse(content: &str) -> Self {
        let words = content
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
        Self::new(words)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The word behind an id
    pub fn word(&self, id: WordId) -> &str {
        &self.words[id]
    }

    /// The word's characters, precomputed for overlap checks
    pub fn glyphs(&self, id: WordId) -> &[char] {
        &self.glyphs[id]
    }

    /// Character count of a word (not byte length)
    pub fn char_len(&self, id: WordId) -> usize {
        self.glyphs[id].len()
    }

    /// All word ids in word order
    pub fn ids(&self) -> impl Iterator<Item = WordId> {
        0..self.words.len()
    }
}
