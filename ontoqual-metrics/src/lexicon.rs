//! The lexical-enrichment boundary.
//!
//! The metrics engine estimates how well labels are "defined" in common
//! usage by asking a synonym provider for each class label and each domain
//! keyword. The provider is an injected dependency behind the [`Lexicon`]
//! trait; this crate ships only the in-memory [`StaticLexicon`], and
//! `ontoqual-api` provides the HTTP-backed client.

use std::collections::HashMap;

use async_trait::async_trait;

/// Error from a lexicon backend. Lookups are I/O against an external
/// service; failures abort the run and are never retried here.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// The backend could not be constructed or reached at all
    #[error("lexicon backend unavailable: {0}")]
    Backend(String),

    /// A single lookup failed
    #[error("synonym lookup for {word:?} failed: {reason}")]
    Lookup { word: String, reason: String },
}

/// A synonym/synset provider.
///
/// `synonyms` returns an ordered sequence of unique lemma strings, empty
/// when the word is unknown. An unknown word is not an error.
#[async_trait]
pub trait Lexicon: Send + Sync {
    async fn synonyms(&self, word: &str) -> Result<Vec<String>, LexiconError>;
}

/// De-duplicate lemmas preserving first-seen order, as the boundary
/// contract promises.
pub fn dedup_lemmas(lemmas: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    lemmas
        .into_iter()
        .filter(|lemma| seen.insert(lemma.clone()))
        .collect()
}

/// In-memory lexicon for tests and offline runs.
///
/// An empty `StaticLexicon` is the null provider: every word is unknown,
/// so lexical scores degrade to 0 without failing the run.
#[derive(Debug, Clone, Default)]
pub struct StaticLexicon {
    entries: HashMap<String, Vec<String>>,
}

impl StaticLexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register lemmas for a word, replacing any previous entry.
    pub fn insert<I, S>(&mut self, word: impl Into<String>, lemmas: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lemmas = dedup_lemmas(lemmas.into_iter().map(Into::into).collect());
        self.entries.insert(word.into(), lemmas);
    }
}

#[async_trait]
impl Lexicon for StaticLexicon {
    async fn synonyms(&self, word: &str) -> Result<Vec<String>, LexiconError> {
        Ok(self.entries.get(word).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_lexicon_knows_nothing() {
        let lexicon = StaticLexicon::new();
        assert!(lexicon.synonyms("pizza").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_dedupes_preserving_order() {
        let mut lexicon = StaticLexicon::new();
        lexicon.insert("pizza", ["pie", "za", "pie"]);
        assert_eq!(lexicon.synonyms("pizza").await.unwrap(), ["pie", "za"]);
    }
}
