use crate::{
    random_planet, random_tarot, random_voucher, shop_joker_pool, ConsumableKind, JokerInstance,
    JokerRarity, RngState, RunConfig, VoucherEffect,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JokerOffer {
    pub joker: JokerInstance,
    pub cost: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumableOffer {
    pub kind: ConsumableKind,
    pub id: String,
    pub name: String,
    pub cost: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoucherOffer {
    pub id: String,
    pub name: String,
    pub cost: i64,
}

/// One shop visit's inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopState {
    pub jokers: Vec<JokerOffer>,
    pub consumables: Vec<ConsumableOffer>,
    pub voucher: Option<VoucherOffer>,
    pub reroll_cost: i64,
}

/// Ownership facts that restrict what the shop may offer.
#[derive(Debug, Clone, Default)]
pub struct ShopRestrictions {
    pub owned_jokers: HashSet<String>,
    pub owned_vouchers: Vec<String>,
}

impl ShopRestrictions {
    pub fn owns_voucher(&self, effect: VoucherEffect) -> bool {
        self.owned_vouchers
            .iter()
            .filter_map(|id| crate::voucher_by_id(id))
            .any(|def| def.effect == effect)
    }

    fn price(&self, base: i64) -> i64 {
        if self.owns_voucher(VoucherEffect::Discount) {
            base * 3 / 4
        } else {
            base
        }
    }
}

impl ShopState {
    pub fn generate(
        config: &RunConfig,
        restrictions: &ShopRestrictions,
        rng: &mut RngState,
    ) -> Self {
        let reroll_cost = if restrictions.owns_voucher(VoucherEffect::CheapReroll) {
            config.discounted_reroll_cost
        } else {
            config.reroll_cost
        };
        Self {
            jokers: generate_jokers(config, restrictions, rng),
            consumables: generate_consumables(config, restrictions, rng),
            voucher: generate_voucher(restrictions, rng),
            reroll_cost,
        }
    }

    /// Replace the joker and consumable slots; the voucher slot stays.
    pub fn reroll(
        &mut self,
        config: &RunConfig,
        restrictions: &ShopRestrictions,
        rng: &mut RngState,
    ) {
        self.jokers = generate_jokers(config, restrictions, rng);
        self.consumables = generate_consumables(config, restrictions, rng);
    }
}

fn generate_jokers(
    config: &RunConfig,
    restrictions: &ShopRestrictions,
    rng: &mut RngState,
) -> Vec<JokerOffer> {
    let mut slots = config.shop_joker_slots;
    if restrictions.owns_voucher(VoucherEffect::ShopSlot) {
        slots += 1;
    }
    let pool = shop_joker_pool(JokerRarity::Uncommon);
    let mut offers = Vec::with_capacity(slots);
    for _ in 0..slots {
        // One retry when the draw duplicates an owned joker, then the slot
        // stays empty.
        let mut picked = None;
        for _ in 0..2 {
            let def = match rng.pick(&pool) {
                Some(def) => *def,
                None => break,
            };
            if !restrictions.owned_jokers.contains(def.id) {
                picked = Some(def);
                break;
            }
        }
        if let Some(def) = picked {
            offers.push(JokerOffer {
                joker: def.instantiate(),
                cost: restrictions.price(def.cost()),
            });
        }
    }
    offers
}

fn generate_consumables(
    config: &RunConfig,
    restrictions: &ShopRestrictions,
    rng: &mut RngState,
) -> Vec<ConsumableOffer> {
    let planet_weight = if restrictions.owns_voucher(VoucherEffect::PlanetBoost) {
        2
    } else {
        1
    };
    let mut offers = Vec::with_capacity(config.shop_consumable_slots);
    for _ in 0..config.shop_consumable_slots {
        let roll = rng.index(planet_weight + 1);
        if roll < planet_weight {
            let def = random_planet(rng);
            offers.push(ConsumableOffer {
                kind: ConsumableKind::Planet,
                id: def.id.to_string(),
                name: def.name.to_string(),
                cost: restrictions.price(def.cost),
            });
        } else {
            let def = random_tarot(rng);
            offers.push(ConsumableOffer {
                kind: ConsumableKind::Tarot,
                id: def.id.to_string(),
                name: def.name.to_string(),
                cost: restrictions.price(def.cost),
            });
        }
    }
    offers
}

fn generate_voucher(restrictions: &ShopRestrictions, rng: &mut RngState) -> Option<VoucherOffer> {
    random_voucher(&restrictions.owned_vouchers, rng).map(|def| VoucherOffer {
        id: def.id.to_string(),
        name: def.name.to_string(),
        cost: restrictions.price(def.cost),
    })
}
