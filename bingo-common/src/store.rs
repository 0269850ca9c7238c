//! Phrase storage abstraction
//!
//! Card generation never touches the store; handlers read phrase texts from it
//! and pass them to the generator. The in-memory store backs tests and
//! throwaway runs; the server provides a SQLite implementation.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{next_id, normalize_text, Phrase};
use crate::{Error, Result};

/// Ordered collection of phrases with add/edit/delete by id
#[async_trait]
pub trait PhraseStore: Send + Sync {
    /// All phrases ordered by id
    async fn list(&self) -> Result<Vec<Phrase>>;

    /// Add a phrase, assigning the next id
    ///
    /// Text is trimmed; blank text is `InvalidInput`.
    async fn add(&self, text: &str) -> Result<Phrase>;

    /// Replace the text of an existing phrase, keeping its id
    ///
    /// Blank text is `InvalidInput`, an unknown id is `NotFound`.
    async fn update(&self, id: i64, text: &str) -> Result<Phrase>;

    /// Remove a phrase; an unknown id is `NotFound`
    async fn delete(&self, id: i64) -> Result<()>;

    /// Number of stored phrases
    async fn count(&self) -> Result<usize> {
        Ok(self.list().await?.len())
    }
}

/// Trimmed text, or `InvalidInput` when blank
pub fn require_text(text: &str) -> Result<String> {
    normalize_text(text).ok_or_else(|| Error::InvalidInput("Phrase text is required.".to_string()))
}

/// `NotFound` error for a phrase id
pub fn phrase_not_found(id: i64) -> Error {
    Error::NotFound(format!("Phrase {} not found.", id))
}

/// In-memory phrase store
#[derive(Debug, Default)]
pub struct MemoryPhraseStore {
    phrases: RwLock<Vec<Phrase>>,
}

impl MemoryPhraseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing list, keeping its ids
    pub fn with_phrases(phrases: Vec<Phrase>) -> Self {
        Self {
            phrases: RwLock::new(phrases),
        }
    }
}

#[async_trait]
impl PhraseStore for MemoryPhraseStore {
    async fn list(&self) -> Result<Vec<Phrase>> {
        let mut phrases = self.phrases.read().await.clone();
        phrases.sort_by_key(|p| p.id);
        Ok(phrases)
    }

    async fn add(&self, text: &str) -> Result<Phrase> {
        let text = require_text(text)?;
        let mut phrases = self.phrases.write().await;
        let phrase = Phrase {
            id: next_id(phrases.iter()),
            text,
        };
        phrases.push(phrase.clone());
        Ok(phrase)
    }

    async fn update(&self, id: i64, text: &str) -> Result<Phrase> {
        let text = require_text(text)?;
        let mut phrases = self.phrases.write().await;
        let phrase = phrases
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| phrase_not_found(id))?;
        phrase.text = text;
        Ok(phrase.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut phrases = self.phrases.write().await;
        let before = phrases.len();
        phrases.retain(|p| p.id != id);
        if phrases.len() == before {
            return Err(phrase_not_found(id));
        }
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.phrases.read().await.len())
    }
}
