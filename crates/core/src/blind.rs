use crate::{Rank, Suit};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BlindKind {
    Small,
    Big,
    Boss,
}

impl BlindKind {
    /// Cursor position within an ante: 0 = small, 1 = big, 2 = boss.
    pub fn progress(self) -> u8 {
        match self {
            BlindKind::Small => 0,
            BlindKind::Big => 1,
            BlindKind::Boss => 2,
        }
    }
}

/// Boss behavioral descriptors. The round state machine reads these and
/// enforces the ones with rules consequences; the face-down variants only
/// matter to a renderer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BossEffect {
    /// Discard N random held cards after every played hand.
    DiscardRandom(u8),
    /// Playing the rank zeroes the money balance.
    ZeroMoneyOnRank(Rank),
    /// First hand is drawn face down.
    FirstHandFaceDown,
    /// Target is twice the small-blind base.
    DoubleTarget,
    /// One card in `odds` is drawn face down.
    RandomFaceDown { odds: u8 },
    /// A hand type may score at most once this blind.
    NoRepeatHandTypes,
    /// Only the first hand type played may be repeated this blind.
    OneHandType,
    /// Every play or discard is followed by drawing 3 cards.
    DrawThreeAfterAction,
    /// Previously played cards are debuffed.
    DebuffPlayedCards,
    /// Only one hand may be played.
    SingleHand,
    /// Cards of the suit are debuffed.
    DebuffSuit(Suit),
    /// Hand size shrinks by N for the blind.
    ReduceHandSize(u8),
    /// Face cards are drawn face down.
    FaceCardsFaceDown,
}

#[derive(Debug, Clone, Copy)]
pub struct BossDef {
    pub name: &'static str,
    pub desc: &'static str,
    pub effect: BossEffect,
}

pub const BOSSES: [BossDef; 15] = [
    BossDef {
        name: "The Hook",
        desc: "Discards 2 random cards from hand each hand played",
        effect: BossEffect::DiscardRandom(2),
    },
    BossDef {
        name: "The Ox",
        desc: "Playing a #4 sets money to $0",
        effect: BossEffect::ZeroMoneyOnRank(Rank::Four),
    },
    BossDef {
        name: "The House",
        desc: "First hand is drawn face down",
        effect: BossEffect::FirstHandFaceDown,
    },
    BossDef {
        name: "The Wall",
        desc: "2x base score to beat",
        effect: BossEffect::DoubleTarget,
    },
    BossDef {
        name: "The Wheel",
        desc: "1 in 7 cards are drawn face down",
        effect: BossEffect::RandomFaceDown { odds: 7 },
    },
    BossDef {
        name: "The Eye",
        desc: "No repeat hand types this blind",
        effect: BossEffect::NoRepeatHandTypes,
    },
    BossDef {
        name: "The Mouth",
        desc: "Only play 1 hand type this blind",
        effect: BossEffect::OneHandType,
    },
    BossDef {
        name: "The Serpent",
        desc: "After Play or Discard, always draw 3 cards",
        effect: BossEffect::DrawThreeAfterAction,
    },
    BossDef {
        name: "The Pillar",
        desc: "Cards played previously are debuffed",
        effect: BossEffect::DebuffPlayedCards,
    },
    BossDef {
        name: "The Needle",
        desc: "Play only 1 hand",
        effect: BossEffect::SingleHand,
    },
    BossDef {
        name: "The Head",
        desc: "Hearts are debuffed",
        effect: BossEffect::DebuffSuit(Suit::Hearts),
    },
    BossDef {
        name: "The Club",
        desc: "Clubs are debuffed",
        effect: BossEffect::DebuffSuit(Suit::Clubs),
    },
    BossDef {
        name: "The Window",
        desc: "Diamonds are debuffed",
        effect: BossEffect::DebuffSuit(Suit::Diamonds),
    },
    BossDef {
        name: "The Manacle",
        desc: "-1 hand size",
        effect: BossEffect::ReduceHandSize(1),
    },
    BossDef {
        name: "The Mark",
        desc: "All face cards are drawn face down",
        effect: BossEffect::FaceCardsFaceDown,
    },
];

/// A single score-target encounter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Blind {
    pub kind: BlindKind,
    pub name: String,
    pub target: i64,
    pub reward: i64,
    #[serde(default)]
    pub boss: Option<BossEffect>,
}

impl Blind {
    /// Pure blind construction from the ante and slot. The boss catalog is
    /// walked deterministically, one entry per ante.
    pub fn generate(ante: u8, kind: BlindKind) -> Blind {
        let small_target = 300 * ante as i64;
        match kind {
            BlindKind::Small => Blind {
                kind,
                name: "Small Blind".to_string(),
                target: small_target,
                reward: 3 + ante as i64,
                boss: None,
            },
            BlindKind::Big => Blind {
                kind,
                name: "Big Blind".to_string(),
                target: (small_target as f64 * 1.5).floor() as i64,
                reward: 4 + ante as i64,
                boss: None,
            },
            BlindKind::Boss => {
                let def = &BOSSES[(ante as usize).saturating_sub(1) % BOSSES.len()];
                Blind {
                    kind,
                    name: def.name.to_string(),
                    target: small_target * 2,
                    reward: 5 + ante as i64,
                    boss: Some(def.effect),
                }
            }
        }
    }
}
