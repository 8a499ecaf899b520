//! CLI Go Fish example.

#![allow(clippy::missing_docs_in_private_items)]

use std::env;
use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use gofish::{
    Actor, Card, Game, GameEvent, GameOptions, GameState, HumanSelector, RandomSelector,
    SelectionError, Suit, TurnError,
};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() {
    init_logging();

    println!("Welcome to the game of Go Fish!");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    println!("Dealing hands...");
    match game.deal() {
        Ok(events) => events.iter().for_each(narrate),
        Err(err) => {
            println!("Deal error: {err}");
            return;
        }
    }

    let mut human = HumanSelector::new(io::stdin().lock(), io::stdout());
    let mut cpu = RandomSelector;

    while let Some(actor) = game.active() {
        match actor {
            Actor::Player => {
                println!("\n--Your Turn--");
                print_table(&game);
            }
            Actor::Cpu => println!("\n--Computer's Turn--"),
        }

        match game.play_turn(&mut human, &mut cpu) {
            Ok(report) => report.events.iter().for_each(narrate),
            Err(TurnError::InvalidSelection(SelectionError::Exhausted)) => {
                println!("\nGoodbye.");
                return;
            }
            Err(err) => {
                println!("\n--There was an error--\n{err}");
                return;
            }
        }
    }

    if game.state() == GameState::GameOver {
        print_scores(&game);
    }
}

fn init_logging() {
    let level = env::var("GOFISH_LOG")
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn narrate(event: &GameEvent) {
    match event {
        GameEvent::Dealt { actor, count } => println!("Dealt {count} cards to the {actor}."),
        GameEvent::PairsFound { actor, pairs } => {
            println!("\nChecking {} pairs...", possessive(*actor));
            for (first, second) in pairs {
                println!(
                    "Found a pair: {} and {}",
                    format_card(first),
                    format_card(second)
                );
            }
        }
        GameEvent::NoPairs { actor } => {
            println!("\nChecking {} pairs... None found.", possessive(*actor));
        }
        GameEvent::Asked { actor, rank } => match actor {
            Actor::Player => println!("Asking the CPU for: {rank}"),
            Actor::Cpu => println!("\nCPU is asking you for: {rank}"),
        },
        GameEvent::Received { actor, card } => match actor {
            Actor::Player => println!("\nYou got it! ({})", format_card(card)),
            Actor::Cpu => println!("\nThank you! (you handed over {})", format_card(card)),
        },
        GameEvent::GoFish { actor } => match actor {
            Actor::Player => println!("\nGo fish! Going fishing..."),
            Actor::Cpu => println!("\nGo fish! The CPU is going fishing..."),
        },
        GameEvent::Fished { actor, card } => match (actor, card) {
            (_, None) => println!("No cards left in the deck..."),
            (Actor::Player, Some(card)) => println!("You drew the {}.", format_card(card)),
            (Actor::Cpu, Some(_)) => println!("The CPU drew a card."),
        },
        GameEvent::Replenished { actor, count } => match actor {
            Actor::Player => println!("\nYou ran out of cards and drew {count} more..."),
            Actor::Cpu => println!("\nCPU ran out of cards and drew {count} more..."),
        },
        GameEvent::TurnPassed { .. } => {}
        GameEvent::Skipped { actor } => match actor {
            Actor::Player => {
                println!("You have no cards in your hand and none to draw. It is now my turn.");
            }
            Actor::Cpu => {
                println!("I have no cards in my hand and none to draw. It is now your turn.");
            }
        },
        GameEvent::GameOver(result) => {
            println!("\nGame Over...");
            println!("\n--{}--", result.outcome);
        }
    }
}

fn possessive(actor: Actor) -> &'static str {
    match actor {
        Actor::Player => "your",
        Actor::Cpu => "the CPU's",
    }
}

fn print_table(game: &Game) {
    print_scores(game);

    let remaining = game.cards_remaining();
    let cpu_cards = game.hand(Actor::Cpu).len();
    println!("\n{remaining} {} remaining in the deck.", plural(remaining));
    println!("{cpu_cards} {} remaining in the CPU's hand.", plural(cpu_cards));

    println!("\nYour hand:");
    for (number, card) in game.hand(Actor::Player).cards().iter().enumerate() {
        println!("{}: {}", number + 1, format_card(card));
    }
}

fn print_scores(game: &Game) {
    println!("\n{:<15} {}", "Your Score:", game.score(Actor::Player));
    println!("{:<15} {}", "CPU Score:", game.score(Actor::Cpu));
}

const fn plural(count: usize) -> &'static str {
    if count == 1 { "card" } else { "cards" }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
