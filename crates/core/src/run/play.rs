use super::*;
use crate::{
    classify, glass_shattered, score_hand, BossEffect, Event, EventBus, ScoreContext,
};

impl RunState {
    /// Play the current selection: classify, enforce boss rules, score, and
    /// settle the hand. Rejections happen before any mutation.
    pub fn play_hand(&mut self, events: &mut EventBus) -> Result<ScoreBreakdown, RunError> {
        if self.phase != Phase::SelectCards {
            return Err(RunError::InvalidPhase(self.phase));
        }
        let selected = self.selected_cards();
        if selected.is_empty() {
            return Err(RunError::NoSelection);
        }
        if self.round.hands_left == 0 {
            return Err(RunError::NoHandsLeft);
        }

        let info = classify(&selected, &self.hand_levels).ok_or(RunError::NoSelection)?;
        self.check_boss_rules(info.kind)?;

        if !self.played_types.contains(&info.kind) {
            self.played_types.push(info.kind);
        }
        if self.first_hand_type.is_none() {
            self.first_hand_type = Some(info.kind);
        }

        self.phase = Phase::Scoring;
        let played = self.take_selected();
        let ctx = ScoreContext {
            discards_left: self.round.discards_left,
            deck_len: self.deck.len(),
            joker_count: self.inventory.jokers.len(),
            joker_slots: self.inventory.joker_slots,
        };
        let breakdown = score_hand(&info, &played, &self.inventory.jokers, &ctx, &mut self.rng);

        let shattered = glass_shattered(&played);
        if shattered > 0 {
            events.push(Event::GlassShattered { count: shattered });
        }
        self.apply_boss_discard(events);
        self.draw_to_hand_size();
        self.resort_hand();

        self.round.score += breakdown.total;
        self.round.hands_left -= 1;
        self.preview = None;
        self.last_score = Some(breakdown.clone());
        events.push(Event::HandScored {
            hand: breakdown.hand.kind,
            chips: breakdown.score.chips,
            mult: breakdown.score.mult,
            total: breakdown.total,
        });

        self.phase = if self.round.score >= self.round.target {
            Phase::BlindComplete
        } else if self.round.hands_left == 0 {
            events.push(Event::GameOver {
                score: self.round.score,
                target: self.round.target,
            });
            Phase::GameOver
        } else {
            Phase::SelectCards
        };
        Ok(breakdown)
    }

    /// Discard the selection and redraw. Never touches the score accumulator
    /// or the hands counter.
    pub fn discard(&mut self, events: &mut EventBus) -> Result<usize, RunError> {
        if self.phase != Phase::SelectCards {
            return Err(RunError::InvalidPhase(self.phase));
        }
        if self.selected_cards().is_empty() {
            return Err(RunError::NoSelection);
        }
        if self.round.discards_left == 0 {
            return Err(RunError::NoDiscardsLeft);
        }
        let discarded = self.take_selected();
        self.draw_to_hand_size();
        self.resort_hand();
        self.round.discards_left -= 1;
        self.preview = None;
        events.push(Event::CardsDiscarded {
            count: discarded.len(),
        });
        Ok(discarded.len())
    }

    fn check_boss_rules(&self, kind: HandKind) -> Result<(), RunError> {
        let blind = &self.round.current_blind;
        let boss = match blind.boss {
            Some(boss) => boss,
            None => return Ok(()),
        };
        match boss {
            BossEffect::NoRepeatHandTypes if self.played_types.contains(&kind) => {
                Err(RunError::HandTypeRepeated {
                    hand: kind,
                    boss: blind.name.clone(),
                })
            }
            BossEffect::OneHandType => match self.first_hand_type {
                Some(first) if first != kind => Err(RunError::HandTypeLocked {
                    hand: first,
                    boss: blind.name.clone(),
                }),
                _ => Ok(()),
            },
            BossEffect::SingleHand if self.round.hands_left < self.round.hands_max => {
                Err(RunError::SingleHandSpent {
                    boss: blind.name.clone(),
                })
            }
            _ => Ok(()),
        }
    }

    /// The Hook: lose random held cards after every played hand.
    fn apply_boss_discard(&mut self, events: &mut EventBus) {
        let count = match self.round.current_blind.boss {
            Some(BossEffect::DiscardRandom(count)) => count as usize,
            _ => return,
        };
        let mut lost = 0;
        for _ in 0..count {
            if self.hand.is_empty() {
                break;
            }
            let idx = self.rng.index(self.hand.len());
            self.hand.remove(idx);
            lost += 1;
        }
        if lost > 0 {
            events.push(Event::BossDiscarded { count: lost });
        }
    }
}
