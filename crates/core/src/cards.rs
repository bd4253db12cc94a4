use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn index(self) -> u8 {
        match self {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Raw rank value, Ace low (1..=13).
    pub fn value(self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
        }
    }

    /// Sort value treating Ace as highest.
    pub fn sort_value(self) -> u8 {
        match self {
            Rank::Ace => 14,
            other => other.value(),
        }
    }

    /// Chips contributed when the card scores: Ace 11, faces 10, else pips.
    pub fn chip_value(self) -> i64 {
        match self {
            Rank::Ace => 11,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            other => other.value() as i64,
        }
    }

    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ALL.iter().copied().find(|rank| rank.value() == value)
    }

    /// Next rank up, if any. King has no successor.
    pub fn succ(self) -> Option<Rank> {
        Rank::from_value(self.value() + 1)
    }

    pub fn short(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    pub fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Enhancement {
    Bonus,
    Mult,
    Glass,
    Steel,
    Stone,
    Gold,
    Lucky,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Edition {
    Foil,
    Holographic,
    Polychrome,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Seal {
    Red,
    Blue,
    Gold,
    Purple,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    #[serde(default)]
    pub enhancement: Option<Enhancement>,
    #[serde(default)]
    pub edition: Option<Edition>,
    #[serde(default)]
    pub seal: Option<Seal>,
    #[serde(default)]
    pub selected: bool,
    pub id: u32,
}

impl Card {
    pub fn standard(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            enhancement: None,
            edition: None,
            seal: None,
            selected: false,
            id: suit.index() as u32 * 13 + rank.value() as u32,
        }
    }

    pub fn is_stone(&self) -> bool {
        matches!(self.enhancement, Some(Enhancement::Stone))
    }

    /// Standalone chip value of the card: rank chips plus flat enhancement and
    /// edition chip bonuses. Used by retrigger effects.
    pub fn chip_value(&self) -> i64 {
        let mut chips = self.rank.chip_value();
        match self.enhancement {
            Some(Enhancement::Bonus) => chips += 30,
            Some(Enhancement::Steel) | Some(Enhancement::Stone) => chips += 50,
            _ => {}
        }
        if self.edition == Some(Edition::Foil) {
            chips += 50;
        }
        chips
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.short(), self.suit.symbol())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortMode {
    None,
    Suit,
    #[default]
    Rank,
}

impl SortMode {
    /// None -> Suit -> Rank -> None.
    pub fn next(self) -> SortMode {
        match self {
            SortMode::None => SortMode::Suit,
            SortMode::Suit => SortMode::Rank,
            SortMode::Rank => SortMode::None,
        }
    }
}

/// Stable in-place sort of a held hand. Suit order is suit then rank
/// ascending; rank order is descending with Ace high, suit as tie-break.
pub fn sort_hand(cards: &mut [Card], mode: SortMode) {
    match mode {
        SortMode::None => {}
        SortMode::Suit => {
            cards.sort_by(|a, b| {
                a.suit
                    .index()
                    .cmp(&b.suit.index())
                    .then(a.rank.value().cmp(&b.rank.value()))
            });
        }
        SortMode::Rank => {
            cards.sort_by(|a, b| {
                b.rank
                    .sort_value()
                    .cmp(&a.rank.sort_value())
                    .then(a.suit.index().cmp(&b.suit.index()))
            });
        }
    }
}
