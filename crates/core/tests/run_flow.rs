use anteup_core::{
    joker_by_id, BlindKind, BossEffect, Card, Event, EventBus, JokerOffer, Phase, Rank,
    RunConfig, RunError, RunState, ShopState, Suit, VoucherOffer,
};

fn card(suit: Suit, rank: Rank) -> Card {
    Card::standard(suit, rank)
}

fn pair_hand() -> Vec<Card> {
    vec![
        card(Suit::Hearts, Rank::King),
        card(Suit::Spades, Rank::King),
        card(Suit::Clubs, Rank::Two),
        card(Suit::Diamonds, Rank::Five),
        card(Suit::Hearts, Rank::Nine),
        card(Suit::Spades, Rank::Four),
        card(Suit::Clubs, Rank::Eight),
        card(Suit::Diamonds, Rank::Jack),
    ]
}

fn select(run: &mut RunState, indices: &[usize]) {
    for &idx in indices {
        run.toggle_select(idx).expect("toggle");
    }
}

fn manual_shop(run: &mut RunState) {
    run.phase = Phase::Shop;
    run.shop = Some(ShopState {
        jokers: vec![JokerOffer {
            joker: joker_by_id("banner").expect("banner").instantiate(),
            cost: 5,
        }],
        consumables: Vec::new(),
        voucher: Some(VoucherOffer {
            id: "blank".to_string(),
            name: "Blank".to_string(),
            cost: 10,
        }),
        reroll_cost: 5,
    });
}

#[test]
fn seeded_runs_replay_identically() {
    let mut first = RunState::with_seed(7);
    let mut second = RunState::with_seed(7);
    assert_eq!(first.hand, second.hand);
    assert_eq!(first.deck.draw, second.deck.draw);

    let mut events = EventBus::default();
    select(&mut first, &[0, 1]);
    select(&mut second, &[0, 1]);
    let a = first.play_hand(&mut events).expect("play");
    let b = second.play_hand(&mut events).expect("play");
    assert_eq!(a.total, b.total);
    assert_eq!(first.hand, second.hand);
}

#[test]
fn playing_consumes_a_hand_and_redraws() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    select(&mut run, &[0]);
    let breakdown = run.play_hand(&mut events).expect("play");
    assert!(breakdown.total > 0);
    assert_eq!(run.round.hands_left, 3);
    assert_eq!(run.round.discards_left, 3);
    assert_eq!(run.hand.len(), 8);
    assert_eq!(run.round.score, breakdown.total);
    assert!(events
        .drain()
        .any(|event| matches!(event, Event::HandScored { .. })));
}

#[test]
fn discarding_consumes_a_discard_not_a_hand() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    select(&mut run, &[0, 1, 2]);
    let count = run.discard(&mut events).expect("discard");
    assert_eq!(count, 3);
    assert_eq!(run.round.discards_left, 2);
    assert_eq!(run.round.hands_left, 4);
    assert_eq!(run.round.score, 0);
    assert_eq!(run.hand.len(), 8);
}

#[test]
fn empty_selection_is_rejected() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    assert!(matches!(
        run.play_hand(&mut events),
        Err(RunError::NoSelection)
    ));
    assert!(matches!(
        run.discard(&mut events),
        Err(RunError::NoSelection)
    ));
}

#[test]
fn selection_stops_at_five_cards() {
    let mut run = RunState::with_seed(3);
    select(&mut run, &[0, 1, 2, 3, 4]);
    assert!(matches!(
        run.toggle_select(5),
        Err(RunError::SelectionLimit)
    ));
    assert_eq!(run.selected_indices().len(), 5);
}

#[test]
fn exhausted_discards_are_rejected() {
    let config = RunConfig {
        starting_discards: 0,
        ..RunConfig::default()
    };
    let mut run = RunState::new(config, 3);
    let mut events = EventBus::default();
    select(&mut run, &[0]);
    assert!(matches!(
        run.discard(&mut events),
        Err(RunError::NoDiscardsLeft)
    ));
}

#[test]
fn advancing_requires_a_cleared_blind() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    assert!(matches!(
        run.advance_blind(&mut events),
        Err(RunError::InvalidPhase(Phase::SelectCards))
    ));
}

#[test]
fn blind_cursor_walks_small_big_boss() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();

    run.phase = Phase::BlindComplete;
    run.advance_blind(&mut events).expect("advance");
    assert_eq!(run.round.blind, BlindKind::Big);
    assert_eq!(run.round.ante, 1);
    assert_eq!(run.phase, Phase::Shop);
    assert_eq!(run.round.score, 0);
    assert_eq!(run.round.hands_left, 4);
    // Small blind reward at ante 1 is $4, then $1 interest on the $8 held.
    assert_eq!(run.round.money, 9);

    run.phase = Phase::BlindComplete;
    run.advance_blind(&mut events).expect("advance");
    assert_eq!(run.round.blind, BlindKind::Boss);
    assert!(run.round.current_blind.boss.is_some());
    assert_eq!(run.round.target, 600);

    run.phase = Phase::BlindComplete;
    run.advance_blind(&mut events).expect("advance");
    assert_eq!(run.round.ante, 2);
    assert_eq!(run.round.blind, BlindKind::Small);
}

#[test]
fn clearing_the_final_boss_wins_the_run() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    run.round.ante = 8;
    run.round.blind = BlindKind::Boss;
    run.phase = Phase::BlindComplete;
    run.advance_blind(&mut events).expect("advance");
    assert_eq!(run.phase, Phase::Win);
    assert!(events
        .drain()
        .any(|event| matches!(event, Event::RunWon { ante: 8 })));
}

#[test]
fn failing_the_target_on_the_last_hand_ends_the_run() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    run.round.hands_left = 1;
    run.hand = pair_hand();
    select(&mut run, &[2]);
    run.play_hand(&mut events).expect("play");
    assert_eq!(run.phase, Phase::GameOver);
    assert!(events
        .drain()
        .any(|event| matches!(event, Event::GameOver { .. })));
}

#[test]
fn the_hook_discards_after_every_play() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    run.round.current_blind.boss = Some(BossEffect::DiscardRandom(2));
    let before = run.deck.len();
    select(&mut run, &[0]);
    run.play_hand(&mut events).expect("play");
    // One played card and two boss discards were all redrawn.
    assert_eq!(run.deck.len(), before - 3);
    assert_eq!(run.hand.len(), 8);
    assert!(events
        .drain()
        .any(|event| matches!(event, Event::BossDiscarded { count: 2 })));
}

#[test]
fn no_repeat_boss_rejects_a_repeated_hand_type() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    run.round.current_blind.boss = Some(BossEffect::NoRepeatHandTypes);
    run.round.target = 100_000;
    run.hand = pair_hand();
    select(&mut run, &[0, 1]);
    run.play_hand(&mut events).expect("first pair");

    run.hand = pair_hand();
    select(&mut run, &[0, 1]);
    let err = run.play_hand(&mut events);
    assert!(matches!(err, Err(RunError::HandTypeRepeated { .. })));
    // The rejection must not consume anything.
    assert_eq!(run.round.hands_left, 3);
}

#[test]
fn one_type_boss_locks_in_the_first_hand_type() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    run.round.current_blind.boss = Some(BossEffect::OneHandType);
    run.round.target = 100_000;
    run.hand = pair_hand();
    select(&mut run, &[0, 1]);
    run.play_hand(&mut events).expect("first pair");

    run.hand = pair_hand();
    select(&mut run, &[2]);
    assert!(matches!(
        run.play_hand(&mut events),
        Err(RunError::HandTypeLocked { .. })
    ));

    // Another pair is still allowed.
    run.hand = pair_hand();
    select(&mut run, &[0, 1]);
    run.play_hand(&mut events).expect("second pair");
}

#[test]
fn single_hand_boss_allows_exactly_one_play() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    run.round.current_blind.boss = Some(BossEffect::SingleHand);
    run.round.target = 100_000;
    select(&mut run, &[0]);
    run.play_hand(&mut events).expect("first play");
    select(&mut run, &[0]);
    assert!(matches!(
        run.play_hand(&mut events),
        Err(RunError::SingleHandSpent { .. })
    ));
}

#[test]
fn failed_purchase_leaves_state_unchanged() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    manual_shop(&mut run);
    run.round.money = 0;
    let jokers_before = run.inventory.jokers.len();

    assert!(matches!(
        run.buy_joker(0, &mut events),
        Err(RunError::NotEnoughMoney)
    ));
    assert_eq!(run.round.money, 0);
    assert_eq!(run.inventory.jokers.len(), jokers_before);
    assert_eq!(run.shop.as_ref().map(|shop| shop.jokers.len()), Some(1));

    assert!(matches!(
        run.buy_voucher(&mut events),
        Err(RunError::NotEnoughMoney)
    ));
    assert!(run.round.owned_vouchers.is_empty());
    assert!(matches!(
        run.reroll_shop(&mut events),
        Err(RunError::NotEnoughMoney)
    ));
}

#[test]
fn buying_a_joker_deducts_money_and_fills_a_slot() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    manual_shop(&mut run);
    run.round.money = 10;
    run.buy_joker(0, &mut events).expect("buy");
    assert_eq!(run.round.money, 5);
    assert!(run.inventory.owns_joker("banner"));
    assert!(run.shop.as_ref().map_or(false, |shop| shop.jokers.is_empty()));
}

#[test]
fn buying_with_full_joker_slots_is_rejected() {
    let config = RunConfig {
        joker_slots: 1,
        ..RunConfig::default()
    };
    let mut run = RunState::new(config, 3);
    let mut events = EventBus::default();
    manual_shop(&mut run);
    run.round.money = 10;
    // The starter joker already occupies the only slot.
    assert!(matches!(
        run.buy_joker(0, &mut events),
        Err(RunError::Inventory(_))
    ));
    assert_eq!(run.round.money, 10);
}

#[test]
fn selling_a_joker_refunds_half_its_cost() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    let money = run.round.money;
    let value = run.sell_joker(0, &mut events).expect("sell");
    assert_eq!(value, 2);
    assert_eq!(run.round.money, money + 2);
    assert!(run.inventory.jokers.is_empty());
}

#[test]
fn rerolling_deducts_the_shop_price() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    manual_shop(&mut run);
    run.round.money = 12;
    run.reroll_shop(&mut events).expect("reroll");
    assert_eq!(run.round.money, 7);
}

#[test]
fn voucher_purchase_is_permanent_and_applies_slots() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    manual_shop(&mut run);
    run.round.money = 10;
    let slots = run.inventory.joker_slots;
    run.buy_voucher(&mut events).expect("buy voucher");
    assert_eq!(run.round.money, 0);
    assert_eq!(run.inventory.joker_slots, slots + 1);
    assert!(run.round.owned_vouchers.contains(&"blank".to_string()));
    assert!(run.shop.as_ref().map_or(false, |shop| shop.voucher.is_none()));
}

#[test]
fn interest_is_one_per_step_up_to_the_cap() {
    let mut run = RunState::with_seed(3);
    run.round.money = 23;
    assert_eq!(run.interest_earned(), 4);
    run.round.money = 60;
    assert_eq!(run.interest_earned(), 5);
    run.round.owned_vouchers.push("seed_money".to_string());
    assert_eq!(run.interest_earned(), 12);
}

#[test]
fn extra_hand_voucher_applies_at_blind_start() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    run.round.owned_vouchers.push("grabber".to_string());
    run.phase = Phase::BlindComplete;
    run.advance_blind(&mut events).expect("advance");
    assert_eq!(run.round.hands_left, 5);
}

#[test]
fn leaving_the_shop_returns_to_selection() {
    let mut run = RunState::with_seed(3);
    manual_shop(&mut run);
    run.leave_shop().expect("leave");
    assert_eq!(run.phase, Phase::SelectCards);
    assert!(run.shop.is_none());
}

#[test]
fn snapshot_restore_preserves_progress() {
    let mut run = RunState::with_seed(9);
    run.round.money = 31;
    run.round.ante = 4;
    run.hand_levels.raise(anteup_core::HandKind::Flush);
    let snapshot = run.snapshot();

    let restored = RunState::restore(RunConfig::default(), snapshot);
    assert_eq!(restored.round.money, 31);
    assert_eq!(restored.round.ante, 4);
    assert_eq!(restored.hand.len(), run.hand.len());
    assert_eq!(restored.hand_levels.level(anteup_core::HandKind::Flush), 2);
    assert_eq!(restored.rng.seed(), 9);
}

#[test]
fn snapshots_survive_a_json_round_trip() {
    let mut run = RunState::with_seed(9);
    run.round.money = 17;
    let snapshot = run.snapshot();
    let body = serde_json::to_string(&snapshot).expect("serialize");
    let parsed: anteup_core::Snapshot = serde_json::from_str(&body).expect("deserialize");
    assert_eq!(parsed.seed, 9);
    assert_eq!(parsed.round.money, 17);
    assert_eq!(parsed.hand, snapshot.hand);
    assert_eq!(parsed.deck.draw, snapshot.deck.draw);
}

#[test]
fn restoring_a_shop_phase_reopens_the_shop() {
    let mut run = RunState::with_seed(9);
    manual_shop(&mut run);
    let snapshot = run.snapshot();
    let restored = RunState::restore(RunConfig::default(), snapshot);
    assert_eq!(restored.phase, Phase::Shop);
    assert!(restored.shop.is_some());
}
