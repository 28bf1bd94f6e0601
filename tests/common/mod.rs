//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use pinochle::cards::{Card, CardId, Suit};
use pinochle::players::{suggest_meld, PlayerState};
use pinochle::{CoinFace, Game, GameConfig, Seat, Stage};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Cards from space separated short codes, with ids `first_id..`.
pub fn cards(codes: &str, first_id: u32) -> Vec<Card> {
    codes
        .split_whitespace()
        .zip(first_id..)
        .map(|(code, id)| {
            let ghost = Card::parse_short(code).unwrap();
            Card::new(CardId(id), ghost.rank, ghost.suit)
        })
        .collect()
}

/// A player holding `codes`, ids starting at 0.
pub fn player(codes: &str, trump: Suit) -> PlayerState {
    let mut player = PlayerState::new(trump);
    for card in cards(codes, 0) {
        player.take_card(card);
    }
    player
}

/// A seeded game with the opening lead decided.
pub fn decided_game(seed: u64) -> Game {
    init_logging();
    let mut game = Game::new(GameConfig::new().with_seed(seed)).unwrap();
    if game.needs_coin_toss() {
        game.toss_coin(CoinFace::Heads).unwrap();
    }
    game
}

/// Take one step for whoever must act. The human throws its first card and
/// plays its best meld.
pub fn step(game: &mut Game) {
    match (game.stage(), game.turn()) {
        (_, None) => {
            game.toss_coin(CoinFace::Tails).unwrap();
        }
        (Stage::LeadCard, Some(Seat::Human)) => game.human_throws_lead(Some(0)).unwrap(),
        (Stage::ChaseCard, Some(Seat::Human)) => game.human_throws_chase(Some(0)).unwrap(),
        (Stage::Meld, Some(Seat::Human)) => {
            let player = game.player(Seat::Human);
            let meld = suggest_meld(player).value.unwrap();
            let positions: Vec<usize> = meld.cards().iter().filter_map(|c| player.position_of(c)).collect();
            game.human_plays_meld(&positions).unwrap();
        }
        _ => game.advance().unwrap(),
    }
}

/// Step until `stage` is reached, with a generous cap.
pub fn play_until(game: &mut Game, stage: Stage) {
    for _ in 0..2000 {
        if game.stage() == stage {
            return;
        }
        step(game);
    }
    panic!("never reached the {stage} stage");
}
