use crate::{BlindKind, HandKind};
use serde::{Deserialize, Serialize};

/// Discrete outcome notifications. Audio and visual collaborators drain the
/// bus; the engine only writes to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    BlindStarted {
        ante: u8,
        blind: BlindKind,
        target: i64,
    },
    HandScored {
        hand: HandKind,
        chips: i64,
        mult: f64,
        total: i64,
    },
    CardsDiscarded {
        count: usize,
    },
    GlassShattered {
        count: usize,
    },
    BossDiscarded {
        count: usize,
    },
    BlindCleared {
        score: i64,
        reward: i64,
        money: i64,
    },
    ShopEntered {
        reroll_cost: i64,
    },
    ShopRerolled {
        cost: i64,
        money: i64,
    },
    ShopBought {
        item: String,
        cost: i64,
        money: i64,
    },
    JokerSold {
        id: String,
        value: i64,
        money: i64,
    },
    ConsumableUsed {
        id: String,
    },
    HandLeveled {
        hand: HandKind,
        level: u32,
    },
    GameOver {
        score: i64,
        target: i64,
    },
    RunWon {
        ante: u8,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
