//! # Bingo Common Library
//!
//! Shared code for the bingo card service:
//! - Phrase model and the `PhraseStore` abstraction
//! - Card generation (selection resolution and grid layout)
//! - Request/response wire types for card generation
//! - Configuration loading

pub mod card;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use card::{generate_card, BingoGrid, CardError, CardRequest};
pub use error::{Error, Result};
pub use models::Phrase;
pub use store::{MemoryPhraseStore, PhraseStore};
