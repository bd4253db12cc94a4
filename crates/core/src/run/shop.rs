use super::*;
use crate::{
    planet_by_id, ConsumableKind, Event, EventBus, VoucherEffect,
};

/// What a consumable purchase resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// Planets apply on the spot.
    PlanetApplied { hand: crate::HandKind, level: u32 },
    /// Tarots go to the held slots.
    TarotHeld { id: String },
}

impl RunState {
    fn shop_open(&self) -> Result<(), RunError> {
        if self.phase != Phase::Shop || self.shop.is_none() {
            return Err(RunError::ShopNotOpen);
        }
        Ok(())
    }

    pub fn buy_joker(&mut self, index: usize, events: &mut EventBus) -> Result<(), RunError> {
        self.shop_open()?;
        let shop = self.shop.as_ref().ok_or(RunError::ShopNotOpen)?;
        let offer = shop.jokers.get(index).ok_or(RunError::InvalidOfferIndex)?;
        if self.round.money < offer.cost {
            return Err(RunError::NotEnoughMoney);
        }
        if self.inventory.empty_joker_slots() == 0 {
            return Err(RunError::Inventory(InventoryError::NoJokerSlots));
        }

        let shop = self.shop.as_mut().ok_or(RunError::ShopNotOpen)?;
        let offer = shop.jokers.remove(index);
        self.round.money -= offer.cost;
        events.push(Event::ShopBought {
            item: offer.joker.id.clone(),
            cost: offer.cost,
            money: self.round.money,
        });
        self.inventory.add_joker(offer.joker)?;
        Ok(())
    }

    pub fn buy_consumable(
        &mut self,
        index: usize,
        events: &mut EventBus,
    ) -> Result<PurchaseOutcome, RunError> {
        self.shop_open()?;
        let shop = self.shop.as_ref().ok_or(RunError::ShopNotOpen)?;
        let offer = shop
            .consumables
            .get(index)
            .ok_or(RunError::InvalidOfferIndex)?
            .clone();
        if self.round.money < offer.cost {
            return Err(RunError::NotEnoughMoney);
        }

        let outcome = match offer.kind {
            ConsumableKind::Planet => {
                let def = planet_by_id(&offer.id).ok_or(RunError::InvalidOfferIndex)?;
                let level = self.hand_levels.raise(def.hand);
                self.last_consumable = Some(ConsumableInstance {
                    kind: ConsumableKind::Planet,
                    id: offer.id.clone(),
                });
                events.push(Event::HandLeveled {
                    hand: def.hand,
                    level,
                });
                PurchaseOutcome::PlanetApplied {
                    hand: def.hand,
                    level,
                }
            }
            ConsumableKind::Tarot => {
                self.inventory.add_consumable(ConsumableInstance {
                    kind: ConsumableKind::Tarot,
                    id: offer.id.clone(),
                })?;
                PurchaseOutcome::TarotHeld {
                    id: offer.id.clone(),
                }
            }
        };

        self.round.money -= offer.cost;
        let shop = self.shop.as_mut().ok_or(RunError::ShopNotOpen)?;
        shop.consumables.remove(index);
        events.push(Event::ShopBought {
            item: offer.id,
            cost: offer.cost,
            money: self.round.money,
        });
        Ok(outcome)
    }

    /// Vouchers are permanent: mark ownership, then apply the effects that
    /// act immediately. The passive ones are consulted where they matter.
    pub fn buy_voucher(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        self.shop_open()?;
        let shop = self.shop.as_ref().ok_or(RunError::ShopNotOpen)?;
        let offer = shop.voucher.clone().ok_or(RunError::InvalidOfferIndex)?;
        if self.round.money < offer.cost {
            return Err(RunError::NotEnoughMoney);
        }

        self.round.money -= offer.cost;
        self.round.owned_vouchers.push(offer.id.clone());
        let effect = crate::voucher_by_id(&offer.id).map(|def| def.effect);
        let shop = self.shop.as_mut().ok_or(RunError::ShopNotOpen)?;
        shop.voucher = None;
        match effect {
            Some(VoucherEffect::CheapReroll) => {
                shop.reroll_cost = self.config.discounted_reroll_cost;
            }
            Some(VoucherEffect::JokerSlot) => {
                self.inventory.joker_slots += 1;
            }
            Some(VoucherEffect::ConsumableSlot) => {
                self.inventory.consumable_slots += 1;
            }
            _ => {}
        }
        events.push(Event::ShopBought {
            item: offer.id,
            cost: offer.cost,
            money: self.round.money,
        });
        Ok(())
    }

    /// Sell a joker for half its rarity cost. Allowed in any phase.
    pub fn sell_joker(&mut self, index: usize, events: &mut EventBus) -> Result<i64, RunError> {
        if index >= self.inventory.jokers.len() {
            return Err(RunError::InvalidJokerIndex);
        }
        let joker = self.inventory.jokers.remove(index);
        let value = joker.sell_value();
        self.round.money += value;
        events.push(Event::JokerSold {
            id: joker.id,
            value,
            money: self.round.money,
        });
        Ok(value)
    }

    /// Re-deal the joker and consumable slots for the shop's reroll price.
    pub fn reroll_shop(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        self.shop_open()?;
        let cost = self
            .shop
            .as_ref()
            .map(|shop| shop.reroll_cost)
            .ok_or(RunError::ShopNotOpen)?;
        if self.round.money < cost {
            return Err(RunError::NotEnoughMoney);
        }
        self.round.money -= cost;
        let restrictions = self.shop_restrictions();
        let config = self.config.clone();
        if let Some(shop) = self.shop.as_mut() {
            shop.reroll(&config, &restrictions, &mut self.rng);
        }
        events.push(Event::ShopRerolled {
            cost,
            money: self.round.money,
        });
        Ok(())
    }
}
