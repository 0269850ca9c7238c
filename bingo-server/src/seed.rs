//! Initial phrase import
//!
//! A seed file is a JSON array in the `phrases.json` format, either records
//! (`[{"id": 1, "text": "..."}]`) or bare strings. Ids in the file are ignored;
//! the store assigns its own in file order.

use bingo_common::{Error, PhraseStore, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SeedEntry {
    Record { text: String },
    Text(String),
}

impl SeedEntry {
    fn into_text(self) -> String {
        match self {
            SeedEntry::Record { text } | SeedEntry::Text(text) => text,
        }
    }
}

/// Parse seed file contents into phrase texts
pub fn parse_seed(content: &str) -> Result<Vec<String>> {
    let entries: Vec<SeedEntry> = serde_json::from_str(content)
        .map_err(|e| Error::InvalidInput(format!("Invalid seed file: {}", e)))?;
    Ok(entries.into_iter().map(SeedEntry::into_text).collect())
}

/// Add the seed file's phrases when the store is empty
///
/// Returns the number of phrases added. Blank entries are skipped.
pub async fn seed_if_empty(store: &dyn PhraseStore, path: &Path) -> Result<usize> {
    if store.count().await? > 0 {
        info!("Phrase store already populated, skipping seed file");
        return Ok(0);
    }

    let content = tokio::fs::read_to_string(path).await?;
    let mut added = 0;
    for text in parse_seed(&content)? {
        match store.add(&text).await {
            Ok(_) => added += 1,
            Err(Error::InvalidInput(_)) => warn!("Skipping blank seed phrase"),
            Err(e) => return Err(e),
        }
    }

    info!("Seeded {} phrases from {}", added, path.display());
    Ok(added)
}
