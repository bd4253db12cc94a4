use super::*;
use crate::{joker_by_id, sort_hand, Blind, BlindKind, VoucherEffect};

impl RunState {
    pub fn new(config: RunConfig, seed: u64) -> Self {
        let mut rng = RngState::from_seed(seed);
        let mut deck = Deck::standard52();
        deck.shuffle(&mut rng);

        let blind = Blind::generate(1, BlindKind::Small);
        let target = blind.target;
        let mut inventory = Inventory::with_slots(config.joker_slots, config.consumable_slots);
        if let Some(def) = joker_by_id("joker_basic") {
            inventory.jokers.push(def.instantiate());
        }

        let mut run = Self {
            round: RoundState {
                ante: 1,
                blind: BlindKind::Small,
                score: 0,
                hands_left: config.starting_hands,
                discards_left: config.starting_discards,
                hands_max: config.starting_hands,
                money: config.starting_money,
                current_blind: blind,
                target,
                owned_vouchers: Vec::new(),
            },
            config,
            rng,
            deck,
            hand: Vec::new(),
            inventory,
            phase: Phase::SelectCards,
            sort_mode: SortMode::Rank,
            hand_levels: HandLevels::new(),
            shop: None,
            preview: None,
            last_score: None,
            played_types: Vec::new(),
            first_hand_type: None,
            hand_size_reduction: 0,
            last_consumable: None,
        };
        run.draw_to_hand_size();
        run.resort_hand();
        run
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(RunConfig::default(), seed)
    }

    /// Nominal hand size minus any boss reduction, never below one card.
    pub fn effective_hand_size(&self) -> usize {
        self.config
            .hand_size
            .saturating_sub(self.hand_size_reduction)
            .max(1)
    }

    pub(crate) fn draw_to_hand_size(&mut self) {
        let size = self.effective_hand_size();
        while self.hand.len() < size {
            match self.deck.draw_card() {
                Some(card) => self.hand.push(card),
                None => break,
            }
        }
    }

    pub(crate) fn resort_hand(&mut self) {
        sort_hand(&mut self.hand, self.sort_mode);
    }

    /// Rotate None -> Suit -> Rank and re-sort immediately.
    pub fn cycle_sort_mode(&mut self) {
        self.sort_mode = self.sort_mode.next();
        self.resort_hand();
    }

    pub fn owns_voucher(&self, effect: VoucherEffect) -> bool {
        self.round
            .owned_vouchers
            .iter()
            .filter_map(|id| crate::voucher_by_id(id))
            .any(|def| def.effect == effect)
    }

    pub(crate) fn hands_per_blind(&self) -> u8 {
        let extra = self.owns_voucher(VoucherEffect::ExtraHand) as u8;
        self.config.starting_hands + extra
    }

    pub(crate) fn discards_per_blind(&self) -> u8 {
        let extra = self.owns_voucher(VoucherEffect::ExtraDiscard) as u8;
        self.config.starting_discards + extra
    }
}
