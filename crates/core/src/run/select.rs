use super::*;
use crate::classify;

impl RunState {
    /// Flip one card's selected flag. Selecting past the play limit is
    /// refused; the live preview follows every change.
    pub fn toggle_select(&mut self, index: usize) -> Result<(), RunError> {
        if self.phase != Phase::SelectCards {
            return Err(RunError::InvalidPhase(self.phase));
        }
        let selected_count = self.selected_indices().len();
        let card = self
            .hand
            .get_mut(index)
            .ok_or(RunError::InvalidCardIndex)?;
        if card.selected {
            card.selected = false;
        } else {
            if selected_count >= self.config.max_play {
                return Err(RunError::SelectionLimit);
            }
            card.selected = true;
        }
        self.refresh_preview();
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        for card in &mut self.hand {
            card.selected = false;
        }
        self.preview = None;
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.hand
            .iter()
            .enumerate()
            .filter(|(_, card)| card.selected)
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn selected_cards(&self) -> Vec<Card> {
        self.hand
            .iter()
            .filter(|card| card.selected)
            .copied()
            .collect()
    }

    pub(crate) fn refresh_preview(&mut self) {
        let selected = self.selected_cards();
        self.preview = classify(&selected, &self.hand_levels);
    }

    /// Remove the selected cards from hand, preserving order.
    pub(crate) fn take_selected(&mut self) -> Vec<Card> {
        let mut taken = Vec::new();
        self.hand.retain(|card| {
            if card.selected {
                taken.push(*card);
                false
            } else {
                true
            }
        });
        for card in &mut taken {
            card.selected = false;
        }
        taken
    }
}
