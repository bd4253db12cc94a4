use crate::{ConsumableInstance, JokerInstance};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Owned jokers (application order = insertion order) and held consumables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    pub joker_slots: usize,
    pub consumable_slots: usize,
    pub jokers: Vec<JokerInstance>,
    pub consumables: Vec<ConsumableInstance>,
}

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("no joker slots")]
    NoJokerSlots,
    #[error("no consumable slots")]
    NoConsumableSlots,
}

impl Inventory {
    pub fn with_slots(joker_slots: usize, consumable_slots: usize) -> Self {
        Self {
            joker_slots,
            consumable_slots,
            jokers: Vec::new(),
            consumables: Vec::new(),
        }
    }

    pub fn empty_joker_slots(&self) -> usize {
        self.joker_slots.saturating_sub(self.jokers.len())
    }

    pub fn add_joker(&mut self, joker: JokerInstance) -> Result<(), InventoryError> {
        if self.jokers.len() >= self.joker_slots {
            return Err(InventoryError::NoJokerSlots);
        }
        self.jokers.push(joker);
        Ok(())
    }

    pub fn add_consumable(&mut self, item: ConsumableInstance) -> Result<(), InventoryError> {
        if self.consumables.len() >= self.consumable_slots {
            return Err(InventoryError::NoConsumableSlots);
        }
        self.consumables.push(item);
        Ok(())
    }

    pub fn owns_joker(&self, id: &str) -> bool {
        self.jokers.iter().any(|joker| joker.id == id)
    }
}
