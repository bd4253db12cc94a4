//! Core game logic. Keep this crate free of IO and platform concerns.

pub mod blind;
pub mod cards;
pub mod config;
pub mod content;
pub mod deck;
pub mod events;
pub mod hand;
pub mod inventory;
pub mod joker;
pub mod rng;
pub mod run;
pub mod save;
pub mod scoring;
pub mod shop;
pub mod state;

pub use blind::*;
pub use cards::*;
pub use config::*;
pub use content::*;
pub use deck::*;
pub use events::*;
pub use hand::*;
pub use inventory::*;
pub use joker::*;
pub use rng::*;
pub use run::*;
pub use save::*;
pub use scoring::*;
pub use shop::*;
pub use state::*;
