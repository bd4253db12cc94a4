use crate::{
    BossEffect, Card, Deck, HandLevels, Inventory, Phase, RngState, RoundState, RunConfig,
    RunState, ShopState, SortMode,
};
use serde::{Deserialize, Serialize};

/// Everything needed to resume a run. Ephemeral per-blind tracking (selection
/// preview, boss bookkeeping, last score) is rebuilt on restore, not stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub seed: u64,
    pub deck: Deck,
    pub hand: Vec<Card>,
    pub inventory: Inventory,
    pub round: RoundState,
    pub phase: Phase,
    #[serde(default)]
    pub sort_mode: SortMode,
    #[serde(default)]
    pub hand_levels: HandLevels,
}

impl RunState {
    pub fn snapshot(&self) -> Snapshot {
        let mut hand = self.hand.clone();
        for card in &mut hand {
            card.selected = false;
        }
        Snapshot {
            seed: self.rng.seed(),
            deck: self.deck.clone(),
            hand,
            inventory: self.inventory.clone(),
            round: self.round.clone(),
            phase: self.phase,
            sort_mode: self.sort_mode,
            hand_levels: self.hand_levels.clone(),
        }
    }

    /// Rebuild a run from a snapshot. The rng restarts from the stored seed,
    /// so a restored run is reproducible but not a bit-exact continuation.
    pub fn restore(config: RunConfig, snapshot: Snapshot) -> Self {
        let phase = match snapshot.phase {
            // A run saved mid-score resumes at selection.
            Phase::Scoring => Phase::SelectCards,
            other => other,
        };
        let mut run = Self {
            config,
            rng: RngState::from_seed(snapshot.seed),
            deck: snapshot.deck,
            hand: snapshot.hand,
            inventory: snapshot.inventory,
            round: snapshot.round,
            phase,
            sort_mode: snapshot.sort_mode,
            hand_levels: snapshot.hand_levels,
            shop: None,
            preview: None,
            last_score: None,
            played_types: Vec::new(),
            first_hand_type: None,
            hand_size_reduction: 0,
            last_consumable: None,
        };
        if let Some(BossEffect::ReduceHandSize(n)) = run.round.current_blind.boss {
            run.hand_size_reduction = n as usize;
        }
        if run.phase == Phase::Shop {
            // Shop inventory is not persisted; deal a fresh one.
            let restrictions = run.shop_restrictions();
            run.shop = Some(ShopState::generate(
                &run.config,
                &restrictions,
                &mut run.rng,
            ));
        }
        run
    }
}
