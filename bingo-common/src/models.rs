//! Phrase records

use serde::{Deserialize, Serialize};

/// A single text entry eligible for placement on a bingo card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    pub id: i64,
    pub text: String,
}

/// Body of phrase add/edit requests
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhraseText {
    #[serde(default)]
    pub text: Option<String>,
}

/// Trim phrase text, rejecting blank input
///
/// Returns `None` when the text is missing or only whitespace.
pub fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Next id for a new phrase: one past the largest existing id, or 1
pub fn next_id<'a>(phrases: impl IntoIterator<Item = &'a Phrase>) -> i64 {
    phrases.into_iter().map(|p| p.id).max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text_trims() {
        assert_eq!(normalize_text("  Coffee spill \n"), Some("Coffee spill".to_string()));
    }

    #[test]
    fn test_normalize_text_rejects_blank() {
        assert_eq!(normalize_text(""), None);
        assert_eq!(normalize_text("   \t"), None);
    }

    #[test]
    fn test_next_id_empty_is_one() {
        assert_eq!(next_id(&Vec::<Phrase>::new()), 1);
    }

    #[test]
    fn test_next_id_uses_max_not_len() {
        let phrases = vec![
            Phrase { id: 3, text: "a".into() },
            Phrase { id: 9, text: "b".into() },
        ];
        assert_eq!(next_id(&phrases), 10);
    }
}
