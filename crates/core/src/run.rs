use crate::{
    Card, ConsumableInstance, Deck, HandInfo, HandKind, HandLevels, Inventory, InventoryError,
    Phase, RngState, RoundState, RunConfig, ScoreBreakdown, ShopState, SortMode,
};
use thiserror::Error;

mod blind;
mod consumable;
mod play;
mod select;
mod shop;
mod state;

pub use shop::PurchaseOutcome;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("invalid phase: {0:?}")]
    InvalidPhase(Phase),
    #[error("no cards selected")]
    NoSelection,
    #[error("cannot select more than five cards")]
    SelectionLimit,
    #[error("no hands left")]
    NoHandsLeft,
    #[error("no discards left")]
    NoDiscardsLeft,
    #[error("invalid card index")]
    InvalidCardIndex,
    #[error("{boss} forbids repeating {hand}")]
    HandTypeRepeated { hand: HandKind, boss: String },
    #[error("only {hand} may be played against {boss}")]
    HandTypeLocked { hand: HandKind, boss: String },
    #[error("only one hand may be played against {boss}")]
    SingleHandSpent { boss: String },
    #[error("shop is not open")]
    ShopNotOpen,
    #[error("invalid shop offer index")]
    InvalidOfferIndex,
    #[error("not enough money")]
    NotEnoughMoney,
    #[error("invalid joker index")]
    InvalidJokerIndex,
    #[error("invalid consumable index")]
    InvalidConsumableIndex,
    #[error("nothing to copy")]
    NothingToCopy,
    #[error("inventory error: {0}")]
    Inventory(#[from] InventoryError),
}

/// The whole mutable state of one run. Every engine operation takes this by
/// reference; there is no ambient global state, so tests can hold several
/// runs side by side.
#[derive(Debug)]
pub struct RunState {
    pub config: RunConfig,
    pub rng: RngState,
    pub deck: Deck,
    pub hand: Vec<Card>,
    pub inventory: Inventory,
    pub round: RoundState,
    pub phase: Phase,
    pub sort_mode: SortMode,
    pub hand_levels: HandLevels,
    pub shop: Option<ShopState>,
    /// Live classification of the current selection.
    pub preview: Option<HandInfo>,
    pub last_score: Option<ScoreBreakdown>,
    // Per-blind boss tracking; rebuilt empty on restore.
    pub(crate) played_types: Vec<HandKind>,
    pub(crate) first_hand_type: Option<HandKind>,
    pub(crate) hand_size_reduction: usize,
    pub(crate) last_consumable: Option<ConsumableInstance>,
}
