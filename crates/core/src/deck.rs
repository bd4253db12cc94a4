use crate::{Card, Rank, RngState, Suit};
use serde::{Deserialize, Serialize};

/// Draw pile. Cards leave from the tail and never return; when the pile runs
/// low at blind start it is replaced with a fresh shuffled 52.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub draw: Vec<Card>,
}

impl Deck {
    pub fn standard52() -> Self {
        let mut draw = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                draw.push(Card::standard(suit, rank));
            }
        }
        Self { draw }
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.draw);
    }

    pub fn len(&self) -> usize {
        self.draw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw.is_empty()
    }

    pub fn draw_card(&mut self) -> Option<Card> {
        self.draw.pop()
    }

    pub fn draw_cards(&mut self, count: usize) -> Vec<Card> {
        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            match self.draw.pop() {
                Some(card) => cards.push(card),
                None => break,
            }
        }
        cards
    }

    /// Discard the remainder and start over from a fresh shuffled 52.
    pub fn refresh(&mut self, rng: &mut RngState) {
        *self = Deck::standard52();
        self.shuffle(rng);
    }
}
