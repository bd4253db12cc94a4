use serde::{Deserialize, Serialize};

/// Tunable run constants. Tests tighten these instead of patching globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub starting_hands: u8,
    pub starting_discards: u8,
    pub starting_money: i64,
    pub hand_size: usize,
    pub max_play: usize,
    pub joker_slots: usize,
    pub consumable_slots: usize,
    /// Completing the boss of this ante wins the run.
    pub max_ante: u8,
    /// $1 of interest per this many dollars held.
    pub interest_step: i64,
    pub interest_cap: i64,
    pub raised_interest_cap: i64,
    pub reroll_cost: i64,
    pub discounted_reroll_cost: i64,
    pub shop_joker_slots: usize,
    pub shop_consumable_slots: usize,
    pub gold_card_payout: i64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            starting_hands: 4,
            starting_discards: 3,
            starting_money: 4,
            hand_size: 8,
            max_play: 5,
            joker_slots: 5,
            consumable_slots: 2,
            max_ante: 8,
            interest_step: 5,
            interest_cap: 5,
            raised_interest_cap: 25,
            reroll_cost: 5,
            discounted_reroll_cost: 3,
            shop_joker_slots: 2,
            shop_consumable_slots: 2,
            gold_card_payout: 3,
        }
    }
}
