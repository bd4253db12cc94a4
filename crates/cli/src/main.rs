mod persistence;

use anteup_core::{
    Event, EventBus, Phase, PurchaseOutcome, RunConfig, RunState, ScoreBreakdown,
};
use anyhow::Result;
use std::io::{self, Write};
use std::path::PathBuf;

const DEFAULT_RUN_SEED: u64 = 0xC0FFEE;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let seed = parse_seed(&args).unwrap_or(DEFAULT_RUN_SEED);
    let mut run = RunState::new(RunConfig::default(), seed);
    let mut events = EventBus::default();

    println!("anteup (seed {seed})");
    print_help();
    print_state(&run);

    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");
        let args: Vec<&str> = parts.collect();
        match cmd {
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => break,
            "state" | "s" => print_state(&run),
            "hand" | "h" => print_hand(&run),
            "inv" | "jokers" => print_inventory(&run),
            "levels" => print_levels(&run),
            "shop" | "sh" => print_shop(&run),
            "trace" => print_trace(&run),
            "select" | "t" => {
                for arg in &args {
                    match arg.parse::<usize>() {
                        Ok(idx) => {
                            if let Err(err) = run.toggle_select(idx) {
                                println!("error: {err}");
                            }
                        }
                        Err(_) => println!("invalid index '{arg}'"),
                    }
                }
                print_hand(&run);
            }
            "clear" => {
                run.clear_selection();
                print_hand(&run);
            }
            "sort" => {
                run.cycle_sort_mode();
                println!("sort: {:?}", run.sort_mode);
                print_hand(&run);
            }
            "play" | "p" => match run.play_hand(&mut events) {
                Ok(breakdown) => {
                    print_breakdown(&breakdown);
                    drain_events(&mut events);
                    print_state(&run);
                }
                Err(err) => println!("error: {err}"),
            },
            "discard" | "x" => match run.discard(&mut events) {
                Ok(count) => {
                    println!("discarded {count}");
                    drain_events(&mut events);
                    print_hand(&run);
                }
                Err(err) => println!("error: {err}"),
            },
            "use" | "u" => match parse_index(&args) {
                Some(idx) => match run.use_consumable(idx, &mut events) {
                    Ok(()) => drain_events(&mut events),
                    Err(err) => println!("error: {err}"),
                },
                None => println!("usage: use <index>"),
            },
            "buy" | "b" => handle_buy(&mut run, &mut events, &args),
            "sell" => match parse_index(&args) {
                Some(idx) => match run.sell_joker(idx, &mut events) {
                    Ok(value) => {
                        println!("sold for ${value}");
                        drain_events(&mut events);
                    }
                    Err(err) => println!("error: {err}"),
                },
                None => println!("usage: sell <index>"),
            },
            "reroll" | "r" => match run.reroll_shop(&mut events) {
                Ok(()) => {
                    drain_events(&mut events);
                    print_shop(&run);
                }
                Err(err) => println!("error: {err}"),
            },
            "next" | "n" => match run.advance_blind(&mut events) {
                Ok(()) => {
                    drain_events(&mut events);
                    print_state(&run);
                }
                Err(err) => println!("error: {err}"),
            },
            "leave" | "l" => match run.leave_shop() {
                Ok(()) => print_state(&run),
                Err(err) => println!("error: {err}"),
            },
            "save" => match parse_path(&args) {
                Some(path) => match persistence::save_run_file(&run.snapshot(), &path) {
                    Ok(()) => println!("saved to {}", path.display()),
                    Err(err) => println!("error: {err}"),
                },
                None => println!("save path unavailable"),
            },
            "load" => match parse_path(&args) {
                Some(path) => match persistence::load_run_file(&path) {
                    Ok(snapshot) => {
                        run = RunState::restore(RunConfig::default(), snapshot);
                        println!("loaded {}", path.display());
                        print_state(&run);
                    }
                    Err(err) => println!("error: {err}"),
                },
                None => println!("save path unavailable"),
            },
            other => println!("unknown command '{other}' (try help)"),
        }
        if matches!(run.phase, Phase::GameOver | Phase::Win) {
            print_state(&run);
            break;
        }
    }
    Ok(())
}

fn parse_seed(args: &[String]) -> Option<u64> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--seed" {
            return iter.next().and_then(|value| value.parse().ok());
        }
    }
    None
}

fn parse_index(args: &[&str]) -> Option<usize> {
    args.first().and_then(|arg| arg.parse().ok())
}

fn parse_path(args: &[&str]) -> Option<PathBuf> {
    args.first()
        .map(PathBuf::from)
        .or_else(persistence::default_state_path)
}

fn handle_buy(run: &mut RunState, events: &mut EventBus, args: &[&str]) {
    let usage = || println!("usage: buy joker|item <index> | buy voucher");
    match args.first().copied() {
        Some("joker") => match parse_index(&args[1..]) {
            Some(idx) => match run.buy_joker(idx, events) {
                Ok(()) => drain_events(events),
                Err(err) => println!("error: {err}"),
            },
            None => usage(),
        },
        Some("item") => match parse_index(&args[1..]) {
            Some(idx) => match run.buy_consumable(idx, events) {
                Ok(PurchaseOutcome::PlanetApplied { hand, level }) => {
                    println!("{hand} is now level {level}");
                    drain_events(events);
                }
                Ok(PurchaseOutcome::TarotHeld { id }) => {
                    println!("{id} added to inventory");
                    drain_events(events);
                }
                Err(err) => println!("error: {err}"),
            },
            None => usage(),
        },
        Some("voucher") => match run.buy_voucher(events) {
            Ok(()) => drain_events(events),
            Err(err) => println!("error: {err}"),
        },
        _ => usage(),
    }
}

fn print_help() {
    println!("commands:");
    println!("  state|s  hand|h  inv  levels  shop|sh  trace");
    println!("  select|t <idx..>  clear  sort");
    println!("  play|p  discard|x  use <idx>");
    println!("  buy joker|item <idx>  buy voucher  sell <idx>  reroll  leave  next");
    println!("  save [path]  load [path]  quit");
}

fn print_state(run: &RunState) {
    let round = &run.round;
    println!(
        "ante {} | {} (target {}) | score {} | hands {} discards {} | ${} | {:?}",
        round.ante,
        round.current_blind.name,
        round.target,
        round.score,
        round.hands_left,
        round.discards_left,
        round.money,
        run.phase,
    );
    if let Some(boss) = &round.current_blind.boss {
        println!("boss effect: {boss:?}");
    }
}

fn print_hand(run: &RunState) {
    for (idx, card) in run.hand.iter().enumerate() {
        let mark = if card.selected { "*" } else { " " };
        let mut extras = String::new();
        if let Some(enhancement) = card.enhancement {
            extras.push_str(&format!(" [{enhancement:?}]"));
        }
        if let Some(edition) = card.edition {
            extras.push_str(&format!(" [{edition:?}]"));
        }
        println!("{mark}{idx:>2}: {card}{extras}");
    }
    match &run.preview {
        Some(info) => println!(
            "preview: {} (lv{}) {} x {}",
            info.kind, info.level, info.base.chips, info.base.mult
        ),
        None => println!("preview: -"),
    }
}

fn print_inventory(run: &RunState) {
    println!(
        "jokers ({}/{}):",
        run.inventory.jokers.len(),
        run.inventory.joker_slots
    );
    for (idx, joker) in run.inventory.jokers.iter().enumerate() {
        let edition = joker
            .edition
            .map(|edition| format!(" [{edition:?}]"))
            .unwrap_or_default();
        println!(
            "  {idx}: {} ({:?}){edition} sell ${}",
            joker.name,
            joker.rarity,
            joker.sell_value()
        );
    }
    println!(
        "consumables ({}/{}):",
        run.inventory.consumables.len(),
        run.inventory.consumable_slots
    );
    for (idx, item) in run.inventory.consumables.iter().enumerate() {
        println!("  {idx}: {} ({:?})", item.id, item.kind);
    }
}

fn print_levels(run: &RunState) {
    for kind in anteup_core::HandKind::ALL {
        let level = run.hand_levels.level(kind);
        if level > 1 {
            println!("{kind}: level {level}");
        }
    }
}

fn print_shop(run: &RunState) {
    let Some(shop) = &run.shop else {
        println!("shop is closed");
        return;
    };
    println!("jokers:");
    for (idx, offer) in shop.jokers.iter().enumerate() {
        println!(
            "  {idx}: {} (${}) - {}",
            offer.joker.name, offer.cost, offer.joker.id
        );
    }
    println!("items:");
    for (idx, offer) in shop.consumables.iter().enumerate() {
        println!("  {idx}: {} ({:?}) ${}", offer.name, offer.kind, offer.cost);
    }
    match &shop.voucher {
        Some(offer) => println!("voucher: {} (${})", offer.name, offer.cost),
        None => println!("voucher: -"),
    }
    println!("reroll: ${}", shop.reroll_cost);
}

fn print_breakdown(breakdown: &ScoreBreakdown) {
    println!(
        "{} (lv{}): {} x {} = {}",
        breakdown.hand.kind,
        breakdown.hand.level,
        breakdown.score.chips,
        breakdown.score.mult,
        breakdown.total
    );
    for step in &breakdown.steps {
        println!(
            "  {}: {:?} -> {} x {}",
            step.source, step.effect, step.after.chips, step.after.mult
        );
    }
}

fn print_trace(run: &RunState) {
    match &run.last_score {
        Some(breakdown) => print_breakdown(breakdown),
        None => println!("no hand scored yet"),
    }
}

fn drain_events(events: &mut EventBus) {
    for event in events.drain() {
        match event {
            Event::BlindStarted {
                ante,
                blind,
                target,
            } => println!("= ante {ante} {blind:?} blind, target {target}"),
            Event::HandScored {
                hand,
                chips,
                mult,
                total,
            } => println!("= scored {hand}: {chips} x {mult} = {total}"),
            Event::CardsDiscarded { count } => println!("= discarded {count}"),
            Event::GlassShattered { count } => println!("= {count} glass card(s) shattered"),
            Event::BossDiscarded { count } => println!("= boss discarded {count} card(s)"),
            Event::BlindCleared {
                score,
                reward,
                money,
            } => println!("= blind cleared at {score}, +${reward}, now ${money}"),
            Event::ShopEntered { reroll_cost } => {
                println!("= shop open (reroll ${reroll_cost})")
            }
            Event::ShopRerolled { cost, money } => {
                println!("= rerolled for ${cost}, now ${money}")
            }
            Event::ShopBought { item, cost, money } => {
                println!("= bought {item} for ${cost}, now ${money}")
            }
            Event::JokerSold { id, value, money } => {
                println!("= sold {id} for ${value}, now ${money}")
            }
            Event::ConsumableUsed { id } => println!("= used {id}"),
            Event::HandLeveled { hand, level } => println!("= {hand} leveled to {level}"),
            Event::GameOver { score, target } => {
                println!("= game over: {score} / {target}")
            }
            Event::RunWon { ante } => println!("= run won at ante {ante}!"),
        }
    }
}
