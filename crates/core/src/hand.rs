use crate::{Card, Rank, Score};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum HandKind {
    HighCard,
    Pair,
    TwoPair,
    Trips,
    Straight,
    Flush,
    FullHouse,
    Quads,
    StraightFlush,
    RoyalFlush,
}

impl HandKind {
    pub const ALL: [HandKind; 10] = [
        HandKind::HighCard,
        HandKind::Pair,
        HandKind::TwoPair,
        HandKind::Trips,
        HandKind::Straight,
        HandKind::Flush,
        HandKind::FullHouse,
        HandKind::Quads,
        HandKind::StraightFlush,
        HandKind::RoyalFlush,
    ];

    pub fn id(self) -> &'static str {
        match self {
            HandKind::HighCard => "high_card",
            HandKind::Pair => "pair",
            HandKind::TwoPair => "two_pair",
            HandKind::Trips => "trips",
            HandKind::Straight => "straight",
            HandKind::Flush => "flush",
            HandKind::FullHouse => "full_house",
            HandKind::Quads => "quads",
            HandKind::StraightFlush => "straight_flush",
            HandKind::RoyalFlush => "royal_flush",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            HandKind::HighCard => "High Card",
            HandKind::Pair => "Pair",
            HandKind::TwoPair => "Two Pair",
            HandKind::Trips => "Three of a Kind",
            HandKind::Straight => "Straight",
            HandKind::Flush => "Flush",
            HandKind::FullHouse => "Full House",
            HandKind::Quads => "Four of a Kind",
            HandKind::StraightFlush => "Straight Flush",
            HandKind::RoyalFlush => "Royal Flush",
        }
    }

    pub fn base_values(self) -> (i64, f64) {
        match self {
            HandKind::HighCard => (5, 1.0),
            HandKind::Pair => (10, 2.0),
            HandKind::TwoPair => (20, 2.0),
            HandKind::Trips => (30, 3.0),
            HandKind::Straight => (30, 4.0),
            HandKind::Flush => (35, 4.0),
            HandKind::FullHouse => (40, 4.0),
            HandKind::Quads => (60, 7.0),
            HandKind::StraightFlush | HandKind::RoyalFlush => (100, 8.0),
        }
    }

    /// Chips and mult added per level above 1.
    pub fn level_values(self) -> (i64, f64) {
        match self {
            HandKind::HighCard => (10, 1.0),
            HandKind::Pair => (15, 1.0),
            HandKind::TwoPair => (20, 1.0),
            HandKind::Trips => (20, 2.0),
            HandKind::Straight => (30, 3.0),
            HandKind::Flush => (15, 2.0),
            HandKind::FullHouse => (25, 2.0),
            HandKind::Quads => (30, 3.0),
            HandKind::StraightFlush | HandKind::RoyalFlush => (40, 4.0),
        }
    }
}

impl fmt::Display for HandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Run-global hand levels, raised by planet cards. Every kind starts at 1.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HandLevels {
    levels: HashMap<HandKind, u32>,
}

impl HandLevels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self, kind: HandKind) -> u32 {
        self.levels.get(&kind).copied().unwrap_or(1)
    }

    pub fn raise(&mut self, kind: HandKind) -> u32 {
        let entry = self.levels.entry(kind).or_insert(1);
        *entry = entry.saturating_add(1);
        *entry
    }

    pub fn leveled_base(&self, kind: HandKind) -> Score {
        let level = self.level(kind);
        let (base_chips, base_mult) = kind.base_values();
        let (level_chips, level_mult) = kind.level_values();
        let extra = level.saturating_sub(1) as i64;
        Score {
            chips: base_chips + level_chips * extra,
            mult: base_mult + level_mult * extra as f64,
        }
    }
}

/// A classified selection: the resolved kind plus its leveled base values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HandInfo {
    pub kind: HandKind,
    pub level: u32,
    pub base: Score,
}

impl HandInfo {
    pub fn of(kind: HandKind, levels: &HandLevels) -> Self {
        Self {
            kind,
            level: levels.level(kind),
            base: levels.leveled_base(kind),
        }
    }
}

/// Classify a selection of 1..=5 cards. Exact classification for 5 cards,
/// rank-multiplicity only below that (straights and flushes cannot be seen in
/// a partial hand). Empty selections classify as nothing.
pub fn classify(cards: &[Card], levels: &HandLevels) -> Option<HandInfo> {
    let kind = match cards.len() {
        0 => return None,
        5 => evaluate_five(cards),
        1..=4 => evaluate_partial(cards),
        _ => return None,
    };
    Some(HandInfo::of(kind, levels))
}

/// Exact classification of five cards, checked highest to lowest.
pub fn evaluate_five(cards: &[Card]) -> HandKind {
    debug_assert_eq!(cards.len(), 5);
    let counts = multiplicity(cards);
    let flush = is_flush(cards);
    let straight = is_straight(cards);

    if flush && straight && is_broadway(cards) {
        return HandKind::RoyalFlush;
    }
    if flush && straight {
        return HandKind::StraightFlush;
    }
    if counts.contains(&4) {
        return HandKind::Quads;
    }
    if counts.contains(&3) && counts.contains(&2) {
        return HandKind::FullHouse;
    }
    if flush {
        return HandKind::Flush;
    }
    if straight {
        return HandKind::Straight;
    }
    multiplicity_kind(&counts)
}

/// Partial classification of fewer than five cards by rank multiplicity.
pub fn evaluate_partial(cards: &[Card]) -> HandKind {
    let counts = multiplicity(cards);
    if counts.contains(&4) {
        return HandKind::Quads;
    }
    if counts.contains(&3) && counts.contains(&2) {
        return HandKind::FullHouse;
    }
    multiplicity_kind(&counts)
}

fn multiplicity_kind(counts: &[usize]) -> HandKind {
    if counts.contains(&3) {
        return HandKind::Trips;
    }
    match counts.iter().filter(|&&c| c == 2).count() {
        2 => HandKind::TwoPair,
        1 => HandKind::Pair,
        _ => HandKind::HighCard,
    }
}

fn multiplicity(cards: &[Card]) -> Vec<usize> {
    let mut by_rank: HashMap<Rank, usize> = HashMap::new();
    for card in cards {
        *by_rank.entry(card.rank).or_insert(0) += 1;
    }
    by_rank.into_values().collect()
}

fn is_flush(cards: &[Card]) -> bool {
    match cards.first() {
        Some(first) => cards.iter().all(|card| card.suit == first.suit),
        None => false,
    }
}

fn sorted_values(cards: &[Card]) -> Vec<u8> {
    let mut values: Vec<u8> = cards.iter().map(|card| card.rank.value()).collect();
    values.sort_unstable();
    values
}

/// Five consecutive ranks, the wheel (A-2-3-4-5), or broadway (10-J-Q-K-A).
fn is_straight(cards: &[Card]) -> bool {
    if cards.len() != 5 {
        return false;
    }
    let values = sorted_values(cards);
    if values.windows(2).all(|w| w[1] == w[0] + 1) {
        return true;
    }
    values == [1, 2, 3, 4, 5] || is_broadway_values(&values)
}

fn is_broadway(cards: &[Card]) -> bool {
    is_broadway_values(&sorted_values(cards))
}

fn is_broadway_values(values: &[u8]) -> bool {
    values == [1, 10, 11, 12, 13]
}

#[derive(Debug, Clone)]
pub struct BestPlay {
    pub cards: Vec<Card>,
    pub info: HandInfo,
}

/// Search every 5-card subset of a larger hand and keep the strongest,
/// breaking kind ties by base chips. Hands of 5 or fewer are taken whole.
pub fn best_play(cards: &[Card], levels: &HandLevels) -> Option<BestPlay> {
    if cards.is_empty() {
        return None;
    }
    if cards.len() <= 5 {
        let info = classify(cards, levels)?;
        return Some(BestPlay {
            cards: cards.to_vec(),
            info,
        });
    }

    let mut best: Option<BestPlay> = None;
    let mut combo = Vec::with_capacity(5);
    combinations(cards, 5, &mut combo, &mut |pick| {
        let kind = evaluate_five(pick);
        let info = HandInfo::of(kind, levels);
        let better = match &best {
            None => true,
            Some(current) => {
                info.kind > current.info.kind
                    || (info.kind == current.info.kind && info.base.chips > current.info.base.chips)
            }
        };
        if better {
            best = Some(BestPlay {
                cards: pick.to_vec(),
                info,
            });
        }
    });
    best
}

// Bounded recursion: the hand never exceeds the effective hand size, so the
// subset count stays small (C(8,5) = 56).
fn combinations(rest: &[Card], need: usize, combo: &mut Vec<Card>, visit: &mut impl FnMut(&[Card])) {
    if need == 0 {
        visit(combo);
        return;
    }
    if rest.len() < need {
        return;
    }
    combo.push(rest[0]);
    combinations(&rest[1..], need - 1, combo, visit);
    combo.pop();
    combinations(&rest[1..], need, combo, visit);
}
