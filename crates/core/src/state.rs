use crate::{Blind, BlindKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Menu,
    SelectCards,
    Scoring,
    BlindComplete,
    Shop,
    GameOver,
    Win,
}

/// Per-run counters plus the blind currently being fought.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundState {
    pub ante: u8,
    pub blind: BlindKind,
    pub score: i64,
    pub hands_left: u8,
    pub discards_left: u8,
    /// Hands granted at blind start; the Needle compares against this.
    #[serde(default)]
    pub hands_max: u8,
    pub money: i64,
    pub current_blind: Blind,
    pub target: i64,
    #[serde(default)]
    pub owned_vouchers: Vec<String>,
}
