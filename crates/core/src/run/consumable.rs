use super::*;
use crate::{
    random_edition, tarot_by_id, ConsumableKind, Event, EventBus, TarotAction,
};

impl RunState {
    /// Use a held tarot or planet. Targeted tarots act on the current
    /// selection, so this only runs during card selection. Requirements are
    /// checked before anything is consumed.
    pub fn use_consumable(&mut self, index: usize, events: &mut EventBus) -> Result<(), RunError> {
        if self.phase != Phase::SelectCards {
            return Err(RunError::InvalidPhase(self.phase));
        }
        let item = self
            .inventory
            .consumables
            .get(index)
            .ok_or(RunError::InvalidConsumableIndex)?
            .clone();

        let consumed = match item.kind {
            ConsumableKind::Planet => {
                let def =
                    crate::planet_by_id(&item.id).ok_or(RunError::InvalidConsumableIndex)?;
                let level = self.hand_levels.raise(def.hand);
                events.push(Event::HandLeveled {
                    hand: def.hand,
                    level,
                });
                self.last_consumable = Some(item.clone());
                true
            }
            ConsumableKind::Tarot => {
                let def = tarot_by_id(&item.id).ok_or(RunError::InvalidConsumableIndex)?;
                let consumed = self.apply_tarot(index, def.action)?;
                // The Fool never becomes its own copy target.
                if def.action != TarotAction::CopyLast {
                    self.last_consumable = Some(item.clone());
                }
                consumed
            }
        };

        if consumed {
            self.inventory.consumables.remove(index);
        }
        self.refresh_preview();
        events.push(Event::ConsumableUsed { id: item.id });
        Ok(())
    }

    /// Returns whether the used card's slot should be cleared afterwards.
    /// The Fool reuses its own slot for the copy it creates.
    fn apply_tarot(&mut self, own_index: usize, action: TarotAction) -> Result<bool, RunError> {
        match action {
            TarotAction::Enhance { enhancement, count } => {
                let targets = self.selected_indices();
                if targets.is_empty() {
                    return Err(RunError::NoSelection);
                }
                for &idx in targets.iter().take(count as usize) {
                    self.hand[idx].enhancement = Some(enhancement);
                }
            }
            TarotAction::DoubleMoney { cap } => {
                self.round.money += self.round.money.min(cap);
            }
            TarotAction::IncreaseRank { count } => {
                let targets = self.selected_indices();
                if targets.is_empty() {
                    return Err(RunError::NoSelection);
                }
                for &idx in targets.iter().take(count as usize) {
                    if let Some(next) = self.hand[idx].rank.succ() {
                        self.hand[idx].rank = next;
                    }
                }
            }
            TarotAction::CopyCard => {
                let targets = self.selected_indices();
                if targets.len() != 2 {
                    return Err(RunError::NoSelection);
                }
                let source = self.hand[targets[1]];
                let dest = &mut self.hand[targets[0]];
                dest.suit = source.suit;
                dest.rank = source.rank;
                dest.enhancement = source.enhancement;
                dest.edition = source.edition;
                // Distinct id so the copy is not confused with the original.
                dest.id = source.id + 100;
            }
            TarotAction::CopyLast => {
                let last = self
                    .last_consumable
                    .clone()
                    .ok_or(RunError::NothingToCopy)?;
                self.inventory.consumables[own_index] = last;
                return Ok(false);
            }
            TarotAction::RandomEdition => {
                if !self.inventory.jokers.is_empty() && self.rng.roll(4) {
                    let idx = self.rng.index(self.inventory.jokers.len());
                    let edition = random_edition(&mut self.rng);
                    self.inventory.jokers[idx].edition = Some(edition);
                }
            }
        }
        Ok(true)
    }
}
