use gofish::{
    Actor, Card, Game, GameEvent, GameOptions, GameState, MatchResult, Outcome, RandomSelector,
    TurnReport,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game = Game::new(GameOptions::default(), seed as u64);
    }

    pub fn deal(&mut self) -> Result<JsValue, JsValue> {
        let events = self.game.deal().map_err(js_err)?;
        let events: Vec<JsEvent> = events.iter().map(JsEvent::from).collect();
        to_js_value(&events)
    }

    /// Asks with the player's card at a zero-based `index`.
    pub fn ask(&mut self, index: u32) -> Result<JsValue, JsValue> {
        if self.game.state() != GameState::PlayerTurn {
            return Err(JsValue::from_str("it is not the player's turn"));
        }
        let report = self.game.ask(index as usize).map_err(js_err)?;
        to_js_value(&JsTurn::from(&report))
    }

    pub fn cpu_turn(&mut self) -> Result<JsValue, JsValue> {
        if self.game.state() != GameState::CpuTurn {
            return Err(JsValue::from_str("it is not the cpu's turn"));
        }
        let report = self
            .game
            .play_turn(&mut RandomSelector, &mut RandomSelector)
            .map_err(js_err)?;
        to_js_value(&JsTurn::from(&report))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            state: state_to_str(self.game.state()),
            hand: self
                .game
                .hand(Actor::Player)
                .cards()
                .iter()
                .copied()
                .map(card_to_js)
                .collect(),
            cpu_cards: self.game.hand(Actor::Cpu).len() as u32,
            cards_remaining: self.game.cards_remaining() as u32,
            player_score: self.game.score(Actor::Player) as u32,
            cpu_score: self.game.score(Actor::Cpu) as u32,
        };
        to_js_value(&snapshot)
    }

    pub fn result(&self) -> Result<JsValue, JsValue> {
        let result = self.game.result().map_err(js_err)?;
        to_js_value(&JsResult::from(result))
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    hand: Vec<JsCard>,
    cpu_cards: u32,
    cards_remaining: u32,
    player_score: u32,
    cpu_score: u32,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
}

#[derive(Serialize)]
struct JsTurn {
    actor: &'static str,
    rank: &'static str,
    received: bool,
    events: Vec<JsEvent>,
}

impl From<&TurnReport> for JsTurn {
    fn from(report: &TurnReport) -> Self {
        Self {
            actor: actor_to_str(report.actor),
            rank: report.rank.name(),
            received: report.received,
            events: report.events.iter().map(JsEvent::from).collect(),
        }
    }
}

#[derive(Serialize)]
struct JsEvent {
    kind: &'static str,
    actor: Option<&'static str>,
    rank: Option<&'static str>,
    cards: Vec<JsCard>,
    count: Option<u32>,
    result: Option<JsResult>,
}

impl JsEvent {
    fn new(kind: &'static str, actor: Option<Actor>) -> Self {
        Self {
            kind,
            actor: actor.map(actor_to_str),
            rank: None,
            cards: Vec::new(),
            count: None,
            result: None,
        }
    }
}

impl From<&GameEvent> for JsEvent {
    fn from(event: &GameEvent) -> Self {
        match event {
            GameEvent::Dealt { actor, count } => Self {
                count: Some(*count as u32),
                ..Self::new("Dealt", Some(*actor))
            },
            GameEvent::PairsFound { actor, pairs } => Self {
                cards: pairs
                    .iter()
                    .flat_map(|(first, second)| [card_to_js(*first), card_to_js(*second)])
                    .collect(),
                count: Some(pairs.len() as u32),
                ..Self::new("PairsFound", Some(*actor))
            },
            GameEvent::NoPairs { actor } => Self::new("NoPairs", Some(*actor)),
            GameEvent::Asked { actor, rank } => Self {
                rank: Some(rank.name()),
                ..Self::new("Asked", Some(*actor))
            },
            GameEvent::Received { actor, card } => Self {
                cards: vec![card_to_js(*card)],
                ..Self::new("Received", Some(*actor))
            },
            GameEvent::GoFish { actor } => Self::new("GoFish", Some(*actor)),
            GameEvent::Fished { actor, card } => {
                let mut event = Self::new("Fished", Some(*actor));
                // The cpu's catch stays hidden from the page.
                if *actor == Actor::Player {
                    event.cards = card.iter().copied().map(card_to_js).collect();
                }
                event.count = Some(u32::from(card.is_some()));
                event
            }
            GameEvent::Replenished { actor, count } => Self {
                count: Some(*count as u32),
                ..Self::new("Replenished", Some(*actor))
            },
            GameEvent::TurnPassed { to } => Self::new("TurnPassed", Some(*to)),
            GameEvent::Skipped { actor } => Self::new("Skipped", Some(*actor)),
            GameEvent::GameOver(result) => Self {
                result: Some(JsResult::from(*result)),
                ..Self::new("GameOver", None)
            },
        }
    }
}

#[derive(Serialize)]
struct JsResult {
    player_score: u32,
    cpu_score: u32,
    outcome: &'static str,
    message: String,
}

impl From<MatchResult> for JsResult {
    fn from(result: MatchResult) -> Self {
        Self {
            player_score: result.player_score as u32,
            cpu_score: result.cpu_score as u32,
            outcome: outcome_to_str(result.outcome),
            message: result.outcome.to_string(),
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: card.suit.name(),
        rank: card.rank.name(),
    }
}

fn actor_to_str(actor: Actor) -> &'static str {
    match actor {
        Actor::Player => "player",
        Actor::Cpu => "cpu",
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::Dealing => "Dealing",
        GameState::PlayerTurn => "PlayerTurn",
        GameState::CpuTurn => "CpuTurn",
        GameState::GameOver => "GameOver",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerWins => "PlayerWins",
        Outcome::CpuWins => "CpuWins",
        Outcome::Tie => "Tie",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
