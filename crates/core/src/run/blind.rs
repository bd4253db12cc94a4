use super::*;
use crate::{
    gold_earnings, Blind, BlindKind, BossEffect, Event, EventBus, ShopRestrictions, ShopState,
    VoucherEffect,
};

impl RunState {
    /// Settle a cleared blind: pay out, advance the blind cursor (rolling the
    /// ante past boss), deal the next round, and open the shop. Winning the
    /// run happens here, never mid-round.
    pub fn advance_blind(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        if self.phase != Phase::BlindComplete {
            return Err(RunError::InvalidPhase(self.phase));
        }

        let reward = self.round.current_blind.reward;
        let gold = gold_earnings(&self.hand, self.config.gold_card_payout);
        self.round.money += reward + gold;
        self.round.money += self.interest_earned();
        events.push(Event::BlindCleared {
            score: self.round.score,
            reward,
            money: self.round.money,
        });

        let (next_ante, next_blind) = match self.round.blind {
            BlindKind::Small => (self.round.ante, BlindKind::Big),
            BlindKind::Big => (self.round.ante, BlindKind::Boss),
            BlindKind::Boss => (self.round.ante + 1, BlindKind::Small),
        };
        if next_ante > self.config.max_ante {
            self.phase = Phase::Win;
            events.push(Event::RunWon {
                ante: self.round.ante,
            });
            return Ok(());
        }
        self.round.ante = next_ante;
        self.round.blind = next_blind;

        let blind = Blind::generate(next_ante, next_blind);
        self.round.target = blind.target;
        self.round.current_blind = blind;
        self.round.score = 0;
        self.round.hands_left = self.hands_per_blind();
        self.round.discards_left = self.discards_per_blind();
        self.round.hands_max = self.round.hands_left;
        self.played_types.clear();
        self.first_hand_type = None;
        self.hand_size_reduction = 0;
        if let Some(BossEffect::ReduceHandSize(n)) = self.round.current_blind.boss {
            self.hand_size_reduction = n as usize;
        }

        if self.deck.len() < self.config.hand_size {
            self.deck.refresh(&mut self.rng);
        }
        self.hand.clear();
        self.draw_to_hand_size();
        self.resort_hand();
        events.push(Event::BlindStarted {
            ante: self.round.ante,
            blind: self.round.blind,
            target: self.round.target,
        });

        self.open_shop(events);
        Ok(())
    }

    pub(crate) fn open_shop(&mut self, events: &mut EventBus) {
        let shop = ShopState::generate(&self.config, &self.shop_restrictions(), &mut self.rng);
        events.push(Event::ShopEntered {
            reroll_cost: shop.reroll_cost,
        });
        self.shop = Some(shop);
        self.phase = Phase::Shop;
    }

    /// Back to card selection; the shop inventory is discarded.
    pub fn leave_shop(&mut self) -> Result<(), RunError> {
        if self.phase != Phase::Shop {
            return Err(RunError::InvalidPhase(self.phase));
        }
        self.shop = None;
        self.last_score = None;
        self.phase = Phase::SelectCards;
        Ok(())
    }

    pub(crate) fn shop_restrictions(&self) -> ShopRestrictions {
        ShopRestrictions {
            owned_jokers: self
                .inventory
                .jokers
                .iter()
                .map(|joker| joker.id.clone())
                .collect(),
            owned_vouchers: self.round.owned_vouchers.clone(),
        }
    }

    /// $1 per interest step held, up to the (voucher-raisable) cap.
    pub fn interest_earned(&self) -> i64 {
        let cap = if self.owns_voucher(VoucherEffect::InterestCap) {
            self.config.raised_interest_cap
        } else {
            self.config.interest_cap
        };
        (self.round.money / self.config.interest_step).min(cap)
    }
}
