use crate::{Edition, HandKind, Rank, Suit};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JokerRarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl JokerRarity {
    pub fn cost(self) -> i64 {
        match self {
            JokerRarity::Common => 5,
            JokerRarity::Uncommon => 7,
            JokerRarity::Rare => 10,
            JokerRarity::Legendary => 20,
        }
    }
}

/// One variant per effect kind. Scoring matches this exhaustively, so a new
/// effect cannot be silently ignored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum JokerEffect {
    AddChips(i64),
    AddMult(f64),
    /// Flat mult whenever the hand rates at least a Pair.
    MultIfPairOrBetter(f64),
    /// Mult for every played card of the suit.
    MultPerSuit { mult: f64, suit: Suit },
    /// Chips when the hand contains the category (straight/flush conditions
    /// also match their straight-flush upgrades).
    ChipsIfContains { chips: i64, kind: HandKind },
    /// Chips per discard still unspent.
    ChipsPerDiscard(i64),
    /// Chips per card left in the draw pile.
    ChipsPerDeckCard(i64),
    /// Chips for every played card of the rank.
    ChipsPerRank { chips: i64, rank: Rank },
    /// Mult when no more than `max_cards` cards were played.
    MultIfFewCards { mult: f64, max_cards: usize },
    /// Mult once the last discard is spent.
    MultIfNoDiscards(f64),
    /// Mult per joker owned, itself included.
    MultPerJoker(f64),
    /// Re-score the first played card's chip value (and its Mult enhancement).
    RetriggerFirst,
    /// Scale the running mult by 1 + factor per empty joker slot.
    MultPerEmptySlot(f64),
    /// No scoring contribution. Passive jokers never appear in the shop.
    Passive,
}

#[derive(Debug, Clone, Copy)]
pub struct JokerDef {
    pub id: &'static str,
    pub name: &'static str,
    pub desc: &'static str,
    pub rarity: JokerRarity,
    pub effect: JokerEffect,
}

impl JokerDef {
    pub fn cost(&self) -> i64 {
        self.rarity.cost()
    }

    pub fn instantiate(&self) -> JokerInstance {
        JokerInstance {
            id: self.id.to_string(),
            name: self.name.to_string(),
            rarity: self.rarity,
            effect: self.effect,
            edition: None,
            counter: 0,
        }
    }

    pub fn is_passive(&self) -> bool {
        matches!(self.effect, JokerEffect::Passive)
    }
}

/// An owned joker. Application order is the order of ownership.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JokerInstance {
    pub id: String,
    pub name: String,
    pub rarity: JokerRarity,
    pub effect: JokerEffect,
    #[serde(default)]
    pub edition: Option<Edition>,
    #[serde(default)]
    pub counter: u32,
}

impl JokerInstance {
    pub fn cost(&self) -> i64 {
        self.rarity.cost()
    }

    pub fn sell_value(&self) -> i64 {
        self.cost() / 2
    }
}

pub const JOKERS: &[JokerDef] = &[
    JokerDef {
        id: "joker_basic",
        name: "Joker",
        desc: "+4 Mult",
        rarity: JokerRarity::Common,
        effect: JokerEffect::AddMult(4.0),
    },
    JokerDef {
        id: "greedy_joker",
        name: "Greedy Joker",
        desc: "Played Diamonds give +3 Mult each",
        rarity: JokerRarity::Common,
        effect: JokerEffect::MultPerSuit {
            mult: 3.0,
            suit: Suit::Diamonds,
        },
    },
    JokerDef {
        id: "lusty_joker",
        name: "Lusty Joker",
        desc: "Played Hearts give +3 Mult each",
        rarity: JokerRarity::Common,
        effect: JokerEffect::MultPerSuit {
            mult: 3.0,
            suit: Suit::Hearts,
        },
    },
    JokerDef {
        id: "wrathful_joker",
        name: "Wrathful Joker",
        desc: "Played Spades give +3 Mult each",
        rarity: JokerRarity::Common,
        effect: JokerEffect::MultPerSuit {
            mult: 3.0,
            suit: Suit::Spades,
        },
    },
    JokerDef {
        id: "gluttonous_joker",
        name: "Gluttonous Joker",
        desc: "Played Clubs give +3 Mult each",
        rarity: JokerRarity::Common,
        effect: JokerEffect::MultPerSuit {
            mult: 3.0,
            suit: Suit::Clubs,
        },
    },
    JokerDef {
        id: "jolly_joker",
        name: "Jolly Joker",
        desc: "+8 Mult if hand contains a Pair",
        rarity: JokerRarity::Common,
        effect: JokerEffect::MultIfPairOrBetter(8.0),
    },
    JokerDef {
        id: "zany_joker",
        name: "Zany Joker",
        desc: "+12 Mult if hand contains Three of a Kind",
        rarity: JokerRarity::Common,
        effect: JokerEffect::MultIfPairOrBetter(12.0),
    },
    JokerDef {
        id: "mad_joker",
        name: "Mad Joker",
        desc: "+10 Mult if hand contains Two Pair",
        rarity: JokerRarity::Common,
        effect: JokerEffect::MultIfPairOrBetter(10.0),
    },
    JokerDef {
        id: "crazy_joker",
        name: "Crazy Joker",
        desc: "+12 Mult if hand contains Straight",
        rarity: JokerRarity::Common,
        effect: JokerEffect::MultIfPairOrBetter(12.0),
    },
    JokerDef {
        id: "half_joker",
        name: "Half Joker",
        desc: "+20 Mult if hand has 3 or fewer cards",
        rarity: JokerRarity::Common,
        effect: JokerEffect::MultIfFewCards {
            mult: 20.0,
            max_cards: 3,
        },
    },
    JokerDef {
        id: "banner",
        name: "Banner",
        desc: "+30 Chips per discard remaining",
        rarity: JokerRarity::Common,
        effect: JokerEffect::ChipsPerDiscard(30),
    },
    JokerDef {
        id: "mystic_summit",
        name: "Mystic Summit",
        desc: "+15 Mult when 0 discards remain",
        rarity: JokerRarity::Common,
        effect: JokerEffect::MultIfNoDiscards(15.0),
    },
    JokerDef {
        id: "sly_joker",
        name: "Sly Joker",
        desc: "+50 Chips if hand contains a Pair",
        rarity: JokerRarity::Common,
        effect: JokerEffect::ChipsIfContains {
            chips: 50,
            kind: HandKind::Pair,
        },
    },
    JokerDef {
        id: "wily_joker",
        name: "Wily Joker",
        desc: "+100 Chips if hand contains Three of a Kind",
        rarity: JokerRarity::Common,
        effect: JokerEffect::ChipsIfContains {
            chips: 100,
            kind: HandKind::Trips,
        },
    },
    JokerDef {
        id: "clever_joker",
        name: "Clever Joker",
        desc: "+80 Chips if hand contains Two Pair",
        rarity: JokerRarity::Common,
        effect: JokerEffect::ChipsIfContains {
            chips: 80,
            kind: HandKind::TwoPair,
        },
    },
    JokerDef {
        id: "devious_joker",
        name: "Devious Joker",
        desc: "+100 Chips if hand contains Straight",
        rarity: JokerRarity::Common,
        effect: JokerEffect::ChipsIfContains {
            chips: 100,
            kind: HandKind::Straight,
        },
    },
    JokerDef {
        id: "crafty_joker",
        name: "Crafty Joker",
        desc: "+80 Chips if hand contains Flush",
        rarity: JokerRarity::Common,
        effect: JokerEffect::ChipsIfContains {
            chips: 80,
            kind: HandKind::Flush,
        },
    },
    JokerDef {
        id: "stencil",
        name: "Joker Stencil",
        desc: "x1 Mult per empty joker slot",
        rarity: JokerRarity::Uncommon,
        effect: JokerEffect::MultPerEmptySlot(1.0),
    },
    JokerDef {
        id: "four_fingers",
        name: "Four Fingers",
        desc: "Flushes and Straights can be made with 4 cards",
        rarity: JokerRarity::Uncommon,
        effect: JokerEffect::Passive,
    },
    JokerDef {
        id: "mime",
        name: "Mime",
        desc: "Retrigger the first played card",
        rarity: JokerRarity::Uncommon,
        effect: JokerEffect::RetriggerFirst,
    },
    JokerDef {
        id: "steel_joker",
        name: "Steel Joker",
        desc: "+20 Chips",
        rarity: JokerRarity::Uncommon,
        effect: JokerEffect::AddChips(20),
    },
    JokerDef {
        id: "abstract_joker",
        name: "Abstract Joker",
        desc: "+3 Mult for each Joker you have",
        rarity: JokerRarity::Common,
        effect: JokerEffect::MultPerJoker(3.0),
    },
    JokerDef {
        id: "hack",
        name: "Hack",
        desc: "Retrigger the first played card",
        rarity: JokerRarity::Uncommon,
        effect: JokerEffect::RetriggerFirst,
    },
    JokerDef {
        id: "blue_joker",
        name: "Blue Joker",
        desc: "+2 Chips per remaining card in deck",
        rarity: JokerRarity::Common,
        effect: JokerEffect::ChipsPerDeckCard(2),
    },
];

pub fn joker_by_id(id: &str) -> Option<&'static JokerDef> {
    JOKERS.iter().find(|def| def.id == id)
}

/// Shop pool: non-passive jokers at or below the rarity cap.
pub fn shop_joker_pool(max_rarity: JokerRarity) -> Vec<&'static JokerDef> {
    JOKERS
        .iter()
        .filter(|def| def.rarity <= max_rarity && !def.is_passive())
        .collect()
}
