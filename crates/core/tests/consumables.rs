use anteup_core::{
    Card, ConsumableInstance, ConsumableKind, ConsumableOffer, Enhancement, EventBus, HandKind,
    Phase, PurchaseOutcome, Rank, RunError, RunState, ShopState, Suit,
};

fn card(suit: Suit, rank: Rank) -> Card {
    Card::standard(suit, rank)
}

fn tarot(id: &str) -> ConsumableInstance {
    ConsumableInstance {
        kind: ConsumableKind::Tarot,
        id: id.to_string(),
    }
}

fn shop_with_items(run: &mut RunState, items: Vec<ConsumableOffer>) {
    run.phase = Phase::Shop;
    run.shop = Some(ShopState {
        jokers: Vec::new(),
        consumables: items,
        voucher: None,
        reroll_cost: 5,
    });
}

fn offer(kind: ConsumableKind, id: &str, name: &str) -> ConsumableOffer {
    ConsumableOffer {
        kind,
        id: id.to_string(),
        name: name.to_string(),
        cost: 3,
    }
}

#[test]
fn planet_purchase_levels_the_hand_immediately() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    shop_with_items(
        &mut run,
        vec![offer(ConsumableKind::Planet, "venus", "Venus")],
    );
    let outcome = run.buy_consumable(0, &mut events).expect("buy");
    assert!(matches!(
        outcome,
        PurchaseOutcome::PlanetApplied {
            hand: HandKind::Pair,
            level: 2,
        }
    ));
    assert_eq!(run.hand_levels.level(HandKind::Pair), 2);
    // Planets never take a held slot.
    assert!(run.inventory.consumables.is_empty());
    assert_eq!(run.round.money, 1);
}

#[test]
fn tarot_purchase_goes_to_held_slots() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    shop_with_items(
        &mut run,
        vec![offer(ConsumableKind::Tarot, "the_empress", "The Empress")],
    );
    let outcome = run.buy_consumable(0, &mut events).expect("buy");
    assert!(matches!(outcome, PurchaseOutcome::TarotHeld { .. }));
    assert_eq!(run.inventory.consumables.len(), 1);
    assert_eq!(run.round.money, 1);
}

#[test]
fn tarot_purchase_with_full_slots_changes_nothing() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    run.inventory.consumables = vec![tarot("justice"), tarot("strength")];
    shop_with_items(
        &mut run,
        vec![offer(ConsumableKind::Tarot, "the_empress", "The Empress")],
    );
    assert!(matches!(
        run.buy_consumable(0, &mut events),
        Err(RunError::Inventory(_))
    ));
    assert_eq!(run.round.money, 4);
    assert_eq!(run.shop.as_ref().map(|shop| shop.consumables.len()), Some(1));
}

#[test]
fn empress_enhances_the_selected_cards() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    run.inventory.consumables.push(tarot("the_empress"));
    run.hand = vec![
        card(Suit::Hearts, Rank::Two),
        card(Suit::Spades, Rank::Five),
        card(Suit::Clubs, Rank::Nine),
    ];
    run.toggle_select(0).expect("toggle");
    run.toggle_select(1).expect("toggle");
    run.use_consumable(0, &mut events).expect("use");
    assert_eq!(run.hand[0].enhancement, Some(Enhancement::Mult));
    assert_eq!(run.hand[1].enhancement, Some(Enhancement::Mult));
    assert_eq!(run.hand[2].enhancement, None);
    assert!(run.inventory.consumables.is_empty());
}

#[test]
fn magician_enhances_only_one_card() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    run.inventory.consumables.push(tarot("the_magician"));
    run.hand = vec![
        card(Suit::Hearts, Rank::Two),
        card(Suit::Spades, Rank::Five),
    ];
    run.toggle_select(0).expect("toggle");
    run.toggle_select(1).expect("toggle");
    run.use_consumable(0, &mut events).expect("use");
    assert_eq!(run.hand[0].enhancement, Some(Enhancement::Lucky));
    assert_eq!(run.hand[1].enhancement, None);
}

#[test]
fn targeted_tarot_requires_a_selection() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    run.inventory.consumables.push(tarot("the_empress"));
    assert!(matches!(
        run.use_consumable(0, &mut events),
        Err(RunError::NoSelection)
    ));
    // Nothing was consumed.
    assert_eq!(run.inventory.consumables.len(), 1);
}

#[test]
fn hermit_doubles_money_up_to_the_cap() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    run.inventory.consumables.push(tarot("the_hermit"));
    run.round.money = 12;
    run.use_consumable(0, &mut events).expect("use");
    assert_eq!(run.round.money, 24);

    run.inventory.consumables.push(tarot("the_hermit"));
    run.round.money = 50;
    run.use_consumable(0, &mut events).expect("use");
    assert_eq!(run.round.money, 70);
}

#[test]
fn strength_raises_ranks_and_king_stays() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    run.inventory.consumables.push(tarot("strength"));
    run.hand = vec![
        card(Suit::Hearts, Rank::Two),
        card(Suit::Spades, Rank::King),
    ];
    run.toggle_select(0).expect("toggle");
    run.toggle_select(1).expect("toggle");
    run.use_consumable(0, &mut events).expect("use");
    assert_eq!(run.hand[0].rank, Rank::Three);
    assert_eq!(run.hand[1].rank, Rank::King);
}

#[test]
fn death_copies_the_right_card_onto_the_left() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    run.inventory.consumables.push(tarot("death"));
    run.hand = vec![
        card(Suit::Hearts, Rank::Two),
        card(Suit::Spades, Rank::King),
    ];
    run.toggle_select(0).expect("toggle");
    run.toggle_select(1).expect("toggle");
    run.use_consumable(0, &mut events).expect("use");
    assert_eq!(run.hand[0].rank, Rank::King);
    assert_eq!(run.hand[0].suit, Suit::Spades);
    // The copy keeps a distinct id.
    assert_ne!(run.hand[0].id, run.hand[1].id);
}

#[test]
fn death_requires_exactly_two_cards() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    run.inventory.consumables.push(tarot("death"));
    run.hand = vec![card(Suit::Hearts, Rank::Two)];
    run.toggle_select(0).expect("toggle");
    assert!(matches!(
        run.use_consumable(0, &mut events),
        Err(RunError::NoSelection)
    ));
}

#[test]
fn the_fool_copies_the_last_used_consumable() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    run.hand = vec![card(Suit::Hearts, Rank::Two)];
    run.inventory.consumables.push(tarot("the_magician"));
    run.toggle_select(0).expect("toggle");
    run.use_consumable(0, &mut events).expect("use magician");

    run.inventory.consumables.push(tarot("the_fool"));
    run.use_consumable(0, &mut events).expect("use fool");
    assert_eq!(run.inventory.consumables.len(), 1);
    assert_eq!(run.inventory.consumables[0].id, "the_magician");
}

#[test]
fn the_fool_with_nothing_to_copy_is_rejected() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    run.inventory.consumables.push(tarot("the_fool"));
    assert!(matches!(
        run.use_consumable(0, &mut events),
        Err(RunError::NothingToCopy)
    ));
    assert_eq!(run.inventory.consumables.len(), 1);
}

#[test]
fn a_held_planet_levels_on_use() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    run.inventory.consumables.push(ConsumableInstance {
        kind: ConsumableKind::Planet,
        id: "mars".to_string(),
    });
    run.use_consumable(0, &mut events).expect("use");
    assert_eq!(run.hand_levels.level(HandKind::Trips), 2);
    assert!(run.inventory.consumables.is_empty());
}

#[test]
fn consumables_only_work_during_selection() {
    let mut run = RunState::with_seed(3);
    let mut events = EventBus::default();
    run.inventory.consumables.push(tarot("the_hermit"));
    run.phase = Phase::Shop;
    assert!(matches!(
        run.use_consumable(0, &mut events),
        Err(RunError::InvalidPhase(Phase::Shop))
    ));
}
