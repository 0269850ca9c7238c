//! Bingo card generation
//!
//! A card request names which phrases may appear on the card. Generation runs
//! in two steps:
//! 1. Selection resolution turns the request into exactly 24 phrases
//!    (`resolver`), failing before any randomness is consumed.
//! 2. Grid layout shuffles those phrases into a 5×5 grid with a `FREE`
//!    center cell (`grid`).
//!
//! Both steps are pure. Randomness comes from the caller's `Rng`, so tests can
//! pass a seeded generator and concurrent callers never share state.

use rand::Rng;
use thiserror::Error;

mod grid;
mod request;
mod resolver;

pub use grid::{build_grid, BingoGrid};
pub use request::{parse_generate_request, GenerateResponse};
pub use resolver::{resolve_tri_state, CardPhrases, TriState};

/// Rows and columns on a card
pub const GRID_SIZE: usize = 5;

/// Row and column index of the center cell
pub const CENTER: usize = 2;

/// Literal placed in the center cell
pub const FREE_CELL: &str = "FREE";

/// Phrases needed to fill every cell except the center
pub const PHRASES_PER_CARD: usize = GRID_SIZE * GRID_SIZE - 1;

/// Card generation validation failures
///
/// All of these are deterministic input errors: the same input always fails
/// with the same variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// More forced-in phrases than cells
    #[error("You have more than 24 forced-in phrases! ({count} included)")]
    TooManyIncluded { count: usize },

    /// Not enough eligible phrases to reach 24
    #[error("Not enough \"maybe\" phrases to fill the required 24 (need {needed}, have {available})")]
    InsufficientPool { needed: usize, available: usize },

    /// Fixed selection with a count other than 24
    #[error("Exactly 24 phrases must be selected ({count} selected)")]
    WrongCount { count: usize },

    /// Request body is not one of the accepted shapes
    #[error("Invalid request data: {0}")]
    InvalidShape(String),
}

impl CardError {
    /// Stable machine-readable error kind
    pub fn kind(&self) -> &'static str {
        match self {
            CardError::TooManyIncluded { .. } => "TooManyIncluded",
            CardError::InsufficientPool { .. } => "InsufficientPool",
            CardError::WrongCount { .. } => "WrongCount",
            CardError::InvalidShape(_) => "InvalidShape",
        }
    }
}

/// A card generation request in either accepted shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardRequest {
    /// Include/exclude/maybe selection
    TriState(TriState),
    /// Legacy form: exactly 24 phrases chosen by the client
    Fixed(Vec<String>),
}

impl CardRequest {
    /// Short label for logging
    pub fn shape(&self) -> &'static str {
        match self {
            CardRequest::TriState(_) => "tri-state",
            CardRequest::Fixed(_) => "fixed",
        }
    }
}

/// Resolve a request to 24 phrases and lay them out on a card
pub fn generate_card<R: Rng + ?Sized>(
    request: CardRequest,
    rng: &mut R,
) -> Result<BingoGrid, CardError> {
    let phrases = match request {
        CardRequest::TriState(selection) => resolve_tri_state(selection, rng)?,
        CardRequest::Fixed(selected) => CardPhrases::try_from(selected)?,
    };
    Ok(build_grid(phrases, rng))
}

/// `generate_card` using the calling thread's generator
pub fn generate_card_with_thread_rng(request: CardRequest) -> Result<BingoGrid, CardError> {
    generate_card(request, &mut rand::thread_rng())
}
