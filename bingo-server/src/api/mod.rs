//! HTTP API handlers for bingo-server

pub mod generate;
pub mod health;
pub mod phrases;

pub use generate::generate;
pub use health::health_routes;
pub use phrases::{add_phrase, delete_phrase, list_phrases, update_phrase};
