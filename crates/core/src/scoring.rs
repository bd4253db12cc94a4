use crate::{
    Card, Edition, Enhancement, HandInfo, HandKind, JokerEffect, JokerInstance, RngState,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Score {
    pub chips: i64,
    pub mult: f64,
}

impl Score {
    /// Final value: chips times the floored mult.
    pub fn total(&self) -> i64 {
        self.chips * self.mult.floor() as i64
    }

    pub fn apply(&mut self, effect: &ScoreEffect) {
        match effect {
            ScoreEffect::AddChips(value) => self.chips += value,
            ScoreEffect::AddMult(value) => self.mult += value,
            // Scaling always floors the running mult immediately after.
            ScoreEffect::TimesMult(value) => self.mult = (self.mult * value).floor(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ScoreEffect {
    AddChips(i64),
    AddMult(f64),
    TimesMult(f64),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreTraceStep {
    pub source: String,
    pub effect: ScoreEffect,
    pub before: Score,
    pub after: Score,
}

/// Read-only surroundings a joker may inspect while scoring.
#[derive(Debug, Clone, Copy)]
pub struct ScoreContext {
    pub discards_left: u8,
    pub deck_len: usize,
    pub joker_count: usize,
    pub joker_slots: usize,
}

impl ScoreContext {
    pub fn empty_joker_slots(&self) -> usize {
        self.joker_slots.saturating_sub(self.joker_count)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    pub hand: HandInfo,
    pub score: Score,
    pub steps: Vec<ScoreTraceStep>,
    pub total: i64,
}

struct Accumulator {
    score: Score,
    steps: Vec<ScoreTraceStep>,
}

impl Accumulator {
    fn apply(&mut self, source: impl Into<String>, effect: ScoreEffect) {
        let before = self.score.clone();
        self.score.apply(&effect);
        let after = self.score.clone();
        self.steps.push(ScoreTraceStep {
            source: source.into(),
            effect,
            before,
            after,
        });
    }
}

/// The four-pass scoring pipeline. Pass order is part of the rules: base,
/// additive per-card bonuses, one compounded multiplicative pass, then jokers
/// in ownership order.
pub fn score_hand(
    info: &HandInfo,
    played: &[Card],
    jokers: &[JokerInstance],
    ctx: &ScoreContext,
    rng: &mut RngState,
) -> ScoreBreakdown {
    let mut acc = Accumulator {
        score: info.base.clone(),
        steps: Vec::new(),
    };

    for card in played {
        if card.is_stone() {
            // Stone replaces the rank value entirely.
            acc.apply("Stone", ScoreEffect::AddChips(50));
        } else {
            acc.apply(card.rank.short(), ScoreEffect::AddChips(card.rank.chip_value()));
            match card.enhancement {
                Some(Enhancement::Bonus) => acc.apply("Bonus", ScoreEffect::AddChips(30)),
                Some(Enhancement::Steel) => acc.apply("Steel", ScoreEffect::AddChips(50)),
                _ => {}
            }
        }
        if card.edition == Some(Edition::Foil) {
            acc.apply("Foil", ScoreEffect::AddChips(50));
        }
        match card.enhancement {
            Some(Enhancement::Mult) => acc.apply("Mult", ScoreEffect::AddMult(4.0)),
            Some(Enhancement::Lucky) => {
                if rng.roll(5) {
                    acc.apply("Lucky!", ScoreEffect::AddMult(20.0));
                }
            }
            _ => {}
        }
        if card.edition == Some(Edition::Holographic) {
            acc.apply("Holo", ScoreEffect::AddMult(10.0));
        }
    }

    // Glass and polychrome compound into one multiplier, applied (and the
    // running mult floored) exactly once.
    let mut multiplier = 1.0;
    for card in played {
        if card.enhancement == Some(Enhancement::Glass) {
            multiplier *= 2.0;
        }
        if card.edition == Some(Edition::Polychrome) {
            multiplier *= 1.5;
        }
    }
    if multiplier != 1.0 {
        acc.apply("Glass/Poly", ScoreEffect::TimesMult(multiplier));
    }

    for joker in jokers {
        apply_joker(joker, &mut acc, info, played, ctx);
    }

    let total = acc.score.total();
    ScoreBreakdown {
        hand: info.clone(),
        score: acc.score,
        steps: acc.steps,
        total,
    }
}

fn apply_joker(
    joker: &JokerInstance,
    acc: &mut Accumulator,
    info: &HandInfo,
    played: &[Card],
    ctx: &ScoreContext,
) {
    let name = joker.name.as_str();
    match joker.effect {
        JokerEffect::AddChips(chips) => acc.apply(name, ScoreEffect::AddChips(chips)),
        JokerEffect::AddMult(mult) => acc.apply(name, ScoreEffect::AddMult(mult)),
        JokerEffect::MultIfPairOrBetter(mult) => {
            if info.kind >= HandKind::Pair {
                acc.apply(name, ScoreEffect::AddMult(mult));
            }
        }
        JokerEffect::MultPerSuit { mult, suit } => {
            let count = played.iter().filter(|card| card.suit == suit).count();
            if count > 0 {
                acc.apply(name, ScoreEffect::AddMult(mult * count as f64));
            }
        }
        JokerEffect::ChipsIfContains { chips, kind } => {
            if hand_contains(info.kind, kind) {
                acc.apply(name, ScoreEffect::AddChips(chips));
            }
        }
        JokerEffect::ChipsPerDiscard(chips) => {
            acc.apply(name, ScoreEffect::AddChips(chips * ctx.discards_left as i64));
        }
        JokerEffect::ChipsPerDeckCard(chips) => {
            acc.apply(name, ScoreEffect::AddChips(chips * ctx.deck_len as i64));
        }
        JokerEffect::ChipsPerRank { chips, rank } => {
            let count = played.iter().filter(|card| card.rank == rank).count();
            if count > 0 {
                acc.apply(name, ScoreEffect::AddChips(chips * count as i64));
            }
        }
        JokerEffect::MultIfFewCards { mult, max_cards } => {
            if played.len() <= max_cards {
                acc.apply(name, ScoreEffect::AddMult(mult));
            }
        }
        JokerEffect::MultIfNoDiscards(mult) => {
            if ctx.discards_left == 0 {
                acc.apply(name, ScoreEffect::AddMult(mult));
            }
        }
        JokerEffect::MultPerJoker(mult) => {
            acc.apply(name, ScoreEffect::AddMult(mult * ctx.joker_count as f64));
        }
        JokerEffect::RetriggerFirst => {
            if let Some(card) = played.first() {
                acc.apply(name, ScoreEffect::AddChips(card.chip_value()));
                if card.enhancement == Some(Enhancement::Mult) {
                    acc.apply(name, ScoreEffect::AddMult(4.0));
                }
            }
        }
        JokerEffect::MultPerEmptySlot(factor) => {
            let scale = 1.0 + factor * ctx.empty_joker_slots() as f64;
            if scale > 1.0 {
                acc.apply(name, ScoreEffect::TimesMult(scale));
            }
        }
        JokerEffect::Passive => {}
    }
}

/// Category-containment rules for conditional chip jokers. Straight and flush
/// conditions also match their straight-flush upgrades.
fn hand_contains(kind: HandKind, wanted: HandKind) -> bool {
    match wanted {
        HandKind::Pair => kind >= HandKind::Pair,
        HandKind::Trips => kind >= HandKind::Trips,
        HandKind::TwoPair => kind == HandKind::TwoPair || kind >= HandKind::FullHouse,
        HandKind::Straight => matches!(
            kind,
            HandKind::Straight | HandKind::StraightFlush | HandKind::RoyalFlush
        ),
        HandKind::Flush => matches!(
            kind,
            HandKind::Flush | HandKind::StraightFlush | HandKind::RoyalFlush
        ),
        other => kind == other,
    }
}

/// Count the glass cards among a set of played cards; they shatter once the
/// score is banked.
pub fn glass_shattered(played: &[Card]) -> usize {
    played
        .iter()
        .filter(|card| card.enhancement == Some(Enhancement::Glass))
        .count()
}

/// End-of-round payout for gold cards still held in hand.
pub fn gold_earnings(hand: &[Card], payout: i64) -> i64 {
    let count = hand
        .iter()
        .filter(|card| card.enhancement == Some(Enhancement::Gold))
        .count();
    payout * count as i64
}
