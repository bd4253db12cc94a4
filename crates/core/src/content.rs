use crate::{Edition, Enhancement, HandKind, RngState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ConsumableKind {
    Tarot,
    Planet,
}

/// A held single-use card. Planets bought in the shop apply immediately and
/// are never held; held planets only come from The Fool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsumableInstance {
    pub kind: ConsumableKind,
    pub id: String,
}

#[derive(Debug, Clone, Copy)]
pub struct PlanetDef {
    pub id: &'static str,
    pub name: &'static str,
    pub hand: HandKind,
    pub cost: i64,
}

pub const PLANETS: [PlanetDef; 9] = [
    PlanetDef {
        id: "mercury",
        name: "Mercury",
        hand: HandKind::HighCard,
        cost: 3,
    },
    PlanetDef {
        id: "venus",
        name: "Venus",
        hand: HandKind::Pair,
        cost: 3,
    },
    PlanetDef {
        id: "earth",
        name: "Earth",
        hand: HandKind::TwoPair,
        cost: 3,
    },
    PlanetDef {
        id: "mars",
        name: "Mars",
        hand: HandKind::Trips,
        cost: 3,
    },
    PlanetDef {
        id: "jupiter",
        name: "Jupiter",
        hand: HandKind::Straight,
        cost: 3,
    },
    PlanetDef {
        id: "saturn",
        name: "Saturn",
        hand: HandKind::Flush,
        cost: 3,
    },
    PlanetDef {
        id: "uranus",
        name: "Uranus",
        hand: HandKind::FullHouse,
        cost: 3,
    },
    PlanetDef {
        id: "neptune",
        name: "Neptune",
        hand: HandKind::Quads,
        cost: 3,
    },
    PlanetDef {
        id: "pluto",
        name: "Pluto",
        hand: HandKind::StraightFlush,
        cost: 3,
    },
];

/// What a tarot does when used; matched exhaustively.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TarotAction {
    /// Set the enhancement of up to `count` selected cards.
    Enhance {
        enhancement: Enhancement,
        count: u8,
    },
    /// Double money, gaining at most `cap`.
    DoubleMoney { cap: i64 },
    /// Raise the rank of up to `count` selected cards by one (King stays).
    IncreaseRank { count: u8 },
    /// First selected card becomes a copy of the second.
    CopyCard,
    /// Duplicate the last tarot or planet used.
    CopyLast,
    /// 1 in 4 chance to put a random edition on a random joker.
    RandomEdition,
}

#[derive(Debug, Clone, Copy)]
pub struct TarotDef {
    pub id: &'static str,
    pub name: &'static str,
    pub desc: &'static str,
    pub cost: i64,
    pub action: TarotAction,
}

pub const TAROTS: [TarotDef; 12] = [
    TarotDef {
        id: "the_fool",
        name: "The Fool",
        desc: "Create a copy of last Tarot/Planet used",
        cost: 3,
        action: TarotAction::CopyLast,
    },
    TarotDef {
        id: "the_magician",
        name: "The Magician",
        desc: "Enhance 1 selected card to Lucky",
        cost: 3,
        action: TarotAction::Enhance {
            enhancement: Enhancement::Lucky,
            count: 1,
        },
    },
    TarotDef {
        id: "the_empress",
        name: "The Empress",
        desc: "Enhance 2 selected cards to Mult",
        cost: 3,
        action: TarotAction::Enhance {
            enhancement: Enhancement::Mult,
            count: 2,
        },
    },
    TarotDef {
        id: "the_hierophant",
        name: "The Hierophant",
        desc: "Enhance 2 selected cards to Bonus",
        cost: 3,
        action: TarotAction::Enhance {
            enhancement: Enhancement::Bonus,
            count: 2,
        },
    },
    TarotDef {
        id: "the_lovers",
        name: "The Lovers",
        desc: "Enhance 1 selected card to Gold",
        cost: 3,
        action: TarotAction::Enhance {
            enhancement: Enhancement::Gold,
            count: 1,
        },
    },
    TarotDef {
        id: "the_chariot",
        name: "The Chariot",
        desc: "Enhance 1 selected card to Steel",
        cost: 3,
        action: TarotAction::Enhance {
            enhancement: Enhancement::Steel,
            count: 1,
        },
    },
    TarotDef {
        id: "justice",
        name: "Justice",
        desc: "Enhance 1 selected card to Glass",
        cost: 3,
        action: TarotAction::Enhance {
            enhancement: Enhancement::Glass,
            count: 1,
        },
    },
    TarotDef {
        id: "the_hermit",
        name: "The Hermit",
        desc: "Double your money (max $20)",
        cost: 3,
        action: TarotAction::DoubleMoney { cap: 20 },
    },
    TarotDef {
        id: "the_wheel",
        name: "Wheel of Fortune",
        desc: "1 in 4 chance to add Foil, Holo, or Poly to a random Joker",
        cost: 3,
        action: TarotAction::RandomEdition,
    },
    TarotDef {
        id: "strength",
        name: "Strength",
        desc: "Increase rank of up to 2 selected cards by 1",
        cost: 3,
        action: TarotAction::IncreaseRank { count: 2 },
    },
    TarotDef {
        id: "the_tower",
        name: "The Tower",
        desc: "Enhance 1 selected card to Stone",
        cost: 3,
        action: TarotAction::Enhance {
            enhancement: Enhancement::Stone,
            count: 1,
        },
    },
    TarotDef {
        id: "death",
        name: "Death",
        desc: "Select 2 cards - left card becomes copy of right card",
        cost: 3,
        action: TarotAction::CopyCard,
    },
];

/// Permanent once-per-run economy upgrades; matched exhaustively wherever a
/// voucher can bend a rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VoucherEffect {
    /// +1 joker slot in the shop.
    ShopSlot,
    /// All shop prices 25% off.
    Discount,
    /// Editions appear more often (the shop rolls none today; inert).
    EditionBoost,
    /// Rerolls cost $3 instead of $5.
    CheapReroll,
    /// +1 held consumable slot.
    ConsumableSlot,
    /// Planets twice as likely in consumable slots.
    PlanetBoost,
    /// +1 hand per round.
    ExtraHand,
    /// +1 discard per round.
    ExtraDiscard,
    /// Interest cap raised to $25.
    InterestCap,
    /// +1 joker slot.
    JokerSlot,
}

#[derive(Debug, Clone, Copy)]
pub struct VoucherDef {
    pub id: &'static str,
    pub name: &'static str,
    pub desc: &'static str,
    pub cost: i64,
    pub effect: VoucherEffect,
}

pub const VOUCHERS: [VoucherDef; 10] = [
    VoucherDef {
        id: "overstock",
        name: "Overstock",
        desc: "+1 card slot in shop",
        cost: 10,
        effect: VoucherEffect::ShopSlot,
    },
    VoucherDef {
        id: "clearance",
        name: "Clearance Sale",
        desc: "All shop items 25% off",
        cost: 10,
        effect: VoucherEffect::Discount,
    },
    VoucherDef {
        id: "hone",
        name: "Hone",
        desc: "Foil/Holo/Poly cards appear 2x more",
        cost: 10,
        effect: VoucherEffect::EditionBoost,
    },
    VoucherDef {
        id: "reroll_surplus",
        name: "Reroll Surplus",
        desc: "Rerolls cost $3 instead of $5",
        cost: 10,
        effect: VoucherEffect::CheapReroll,
    },
    VoucherDef {
        id: "crystal_ball",
        name: "Crystal Ball",
        desc: "+1 consumable slot",
        cost: 10,
        effect: VoucherEffect::ConsumableSlot,
    },
    VoucherDef {
        id: "telescope",
        name: "Telescope",
        desc: "Celestial cards appear 2x more in shop",
        cost: 10,
        effect: VoucherEffect::PlanetBoost,
    },
    VoucherDef {
        id: "grabber",
        name: "Grabber",
        desc: "+1 hand per round",
        cost: 10,
        effect: VoucherEffect::ExtraHand,
    },
    VoucherDef {
        id: "wasteful",
        name: "Wasteful",
        desc: "+1 discard per round",
        cost: 10,
        effect: VoucherEffect::ExtraDiscard,
    },
    VoucherDef {
        id: "seed_money",
        name: "Seed Money",
        desc: "Interest cap goes to $25",
        cost: 10,
        effect: VoucherEffect::InterestCap,
    },
    VoucherDef {
        id: "blank",
        name: "Blank",
        desc: "+1 Joker slot",
        cost: 10,
        effect: VoucherEffect::JokerSlot,
    },
];

pub fn planet_by_id(id: &str) -> Option<&'static PlanetDef> {
    PLANETS.iter().find(|def| def.id == id)
}

pub fn tarot_by_id(id: &str) -> Option<&'static TarotDef> {
    TAROTS.iter().find(|def| def.id == id)
}

pub fn voucher_by_id(id: &str) -> Option<&'static VoucherDef> {
    VOUCHERS.iter().find(|def| def.id == id)
}

pub fn random_planet(rng: &mut RngState) -> &'static PlanetDef {
    &PLANETS[rng.index(PLANETS.len())]
}

pub fn random_tarot(rng: &mut RngState) -> &'static TarotDef {
    &TAROTS[rng.index(TAROTS.len())]
}

pub fn random_edition(rng: &mut RngState) -> Edition {
    const EDITIONS: [Edition; 3] = [Edition::Foil, Edition::Holographic, Edition::Polychrome];
    EDITIONS[rng.index(EDITIONS.len())]
}

/// A voucher not yet owned this run, if any remain.
pub fn random_voucher(owned: &[String], rng: &mut RngState) -> Option<&'static VoucherDef> {
    let available: Vec<&'static VoucherDef> = VOUCHERS
        .iter()
        .filter(|def| !owned.iter().any(|id| id == def.id))
        .collect();
    if available.is_empty() {
        return None;
    }
    Some(available[rng.index(available.len())])
}
