//! The game model: rounds, turns and the state machine that drives them.
//!
//! ## Flow
//!
//! A round deals `deal_packets` packets of `packet_size` cards to the human
//! and then the computer, and turns the next stock card face up as trump.
//! Each turn then runs
//!
//! ```text
//! LeadCard -> ChaseCard -> Intermission -> Meld -> Intermission -> LeadCard
//! ```
//!
//! until a hand runs dry (`OutOfCards`), after which the round scores are
//! folded into the game scores (`RoundEnd`).
//!
//! ## Driving the model
//!
//! The human acts through `human_throws_lead`, `human_throws_chase` and
//! `human_plays_meld`. Everything else (computer moves, turn resolution,
//! drawing from the stock, ending the round) happens one step per `advance`
//! call, so a presentation layer can show each step before moving on.
//!
//! Rejected input returns an error, leaves the model untouched and stores the
//! error text as the acting seat's message.

use std::cmp::Ordering;

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::coin::CoinFace;
use super::stage::Stage;
use crate::cards::{Card, CardCollection, Deck, Suit};
use crate::core::{GameConfig, GameRng, Seat, SeatMap};
use crate::error::{ConfigError, GameError, SaveError};
use crate::melds::MeldInstance;
use crate::players::{strategy_for, PlayerState};
use crate::rules::resolve_turn;
use crate::serialization::{decode_players, encode_player, take_from_pool, SaveData, SeatRecord};

/// The meld slot of the current turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeldPlay {
    Played(MeldInstance),
    /// The seat had no meld to play.
    Skipped,
}

/// One resolved lead/chase pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub round: u32,
    pub leader: Seat,
    pub lead: Card,
    pub chase: Card,
    pub winner: Seat,
    pub points: u32,
}

/// A two-seat Pinochle game.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    rng: GameRng,

    round_number: u32,
    players: SeatMap<PlayerState>,
    round_scores: SeatMap<u32>,
    game_scores: SeatMap<u32>,

    stock: Deck,
    /// Face-up trump card, until it is dealt out with the last stock card.
    trump_card: Option<Card>,
    trump_suit: Suit,

    /// Seat expected to act. `None` while a coin toss is pending.
    turn: Option<Seat>,
    lead_thrower: Option<Seat>,
    lead_card: Option<Card>,
    chase_card: Option<Card>,
    current_meld: Option<MeldPlay>,
    stage: Stage,

    messages: SeatMap<String>,
    history: Vector<TurnRecord>,
}

impl Game {
    /// Start a new game: round 1, both scores at zero, cards dealt.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let mut game = Self {
            config,
            rng,
            round_number: 1,
            players: SeatMap::new(|_| PlayerState::new(Suit::Clubs)),
            round_scores: SeatMap::default(),
            game_scores: SeatMap::default(),
            stock: Deck::new(),
            trump_card: None,
            trump_suit: Suit::Clubs,
            turn: None,
            lead_thrower: None,
            lead_card: None,
            chase_card: None,
            current_meld: None,
            stage: Stage::RoundEnd,
            messages: SeatMap::default(),
            history: Vector::new(),
        };
        game.start_new_game()?;
        Ok(game)
    }

    /// Reset to round 1 with zero scores and deal.
    pub fn start_new_game(&mut self) -> Result<(), GameError> {
        self.round_number = 1;
        self.game_scores = SeatMap::default();
        self.history = Vector::new();
        self.set_up_new_round()
    }

    /// Shuffle, deal and turn up the trump card.
    ///
    /// The seat ahead on game points leads. On a tie the turn stays undecided
    /// until `toss_coin`.
    pub fn set_up_new_round(&mut self) -> Result<(), GameError> {
        let mut stock = Deck::standard(self.config.copies_per_card);
        stock.shuffle(&mut self.rng);

        let mut dealt: SeatMap<Vec<Card>> = SeatMap::default();
        for _ in 0..self.config.deal_packets {
            for seat in [Seat::Human, Seat::Computer] {
                for _ in 0..self.config.packet_size {
                    let card = stock.take_one_from_top().ok_or_else(|| short_deck(&self.config))?;
                    dealt[seat].push(card);
                }
            }
        }
        let trump_card = stock.take_one_from_top().ok_or_else(|| short_deck(&self.config))?;
        let trump_suit = trump_card.suit;

        self.players = dealt.map(|_, cards| {
            let mut player = PlayerState::new(trump_suit);
            for &card in cards {
                player.take_card(card);
            }
            player
        });
        self.stock = stock;
        self.trump_card = Some(trump_card);
        self.trump_suit = trump_suit;
        self.round_scores = SeatMap::default();
        self.messages = SeatMap::default();
        self.lead_card = None;
        self.chase_card = None;
        self.current_meld = None;
        self.turn = self.game_leader();
        self.lead_thrower = self.turn;
        self.stage = Stage::LeadCard;

        info!(
            round = self.round_number,
            trump = %trump_card,
            stock = self.stock.len(),
            leader = ?self.turn,
            "round set up"
        );
        self.urge_next_move();
        Ok(())
    }

    /// Decide the opening lead of a tied round. The human leads when the
    /// prediction matches the toss.
    pub fn toss_coin(&mut self, prediction: CoinFace) -> Result<CoinFace, GameError> {
        if self.turn.is_some() || self.stage != Stage::LeadCard {
            return Err(GameError::WrongStage {
                action: "toss the coin",
                stage: self.stage,
            });
        }
        let result = CoinFace::toss(&mut self.rng);
        let leader = if prediction == result { Seat::Human } else { Seat::Computer };
        info!(%prediction, %result, %leader, "coin toss");

        self.turn = Some(leader);
        self.lead_thrower = Some(leader);
        self.urge_next_move();
        Ok(result)
    }

    /// Whether the round is waiting on a coin toss.
    #[must_use]
    pub fn needs_coin_toss(&self) -> bool {
        self.stage == Stage::LeadCard && self.turn.is_none()
    }

    // === Human moves ===

    /// Throw the card at `position` as the human's lead card.
    pub fn human_throws_lead(&mut self, position: Option<usize>) -> Result<(), GameError> {
        let result = self
            .expect_turn("throw a lead card", Stage::LeadCard, Seat::Human)
            .and_then(|()| self.throw_lead(Seat::Human, position));
        self.note_rejection(Seat::Human, result)
    }

    /// Throw the card at `position` as the human's chase card.
    pub fn human_throws_chase(&mut self, position: Option<usize>) -> Result<(), GameError> {
        let result = self
            .expect_turn("throw a chase card", Stage::ChaseCard, Seat::Human)
            .and_then(|()| self.throw_chase(Seat::Human, position));
        self.note_rejection(Seat::Human, result)
    }

    /// Play the cards at `positions` as the human's meld.
    pub fn human_plays_meld(&mut self, positions: &[usize]) -> Result<(), GameError> {
        let result = self
            .expect_turn("play a meld", Stage::Meld, Seat::Human)
            .and_then(|()| self.play_meld(Seat::Human, positions));
        self.note_rejection(Seat::Human, result)
    }

    /// Recommend a move to the human and store it as the human's message.
    ///
    /// `None` when it is not the human's move.
    pub fn generate_hint(&mut self) -> Option<String> {
        if self.turn != Some(Seat::Human) {
            return None;
        }
        let player = &self.players[Seat::Human];
        let strategy = strategy_for(Seat::Human);
        let hint = match self.stage {
            Stage::LeadCard if self.lead_card.is_none() => strategy.hint_lead(player),
            Stage::ChaseCard => self
                .lead_card
                .as_ref()
                .and_then(|lead| strategy.hint_chase(player, lead)),
            Stage::Meld if self.current_meld.is_none() => strategy.hint_meld(player),
            _ => None,
        }?;
        self.messages[Seat::Human] = hint.clone();
        Some(hint)
    }

    // === Stepping ===

    /// Take the next automatic step: a computer move, turn resolution, the
    /// draw after a meld, or closing the round.
    ///
    /// Fails with `NotYourTurn(Computer)` when the human must act first.
    pub fn advance(&mut self) -> Result<(), GameError> {
        match (self.stage, self.turn) {
            (Stage::Intermission, _) => {
                self.resolve_intermission();
                Ok(())
            }
            (Stage::OutOfCards, _) => {
                self.end_round();
                Ok(())
            }
            (Stage::RoundEnd, _) => Err(GameError::WrongStage {
                action: "advance",
                stage: self.stage,
            }),
            (_, None) => Err(GameError::TurnUndecided),
            (_, Some(Seat::Human)) => Err(GameError::NotYourTurn(Seat::Computer)),
            (Stage::LeadCard, Some(Seat::Computer)) => self.throw_lead(Seat::Computer, None),
            (Stage::ChaseCard, Some(Seat::Computer)) => self.throw_chase(Seat::Computer, None),
            (Stage::Meld, Some(Seat::Computer)) => self.play_meld(Seat::Computer, &[]),
        }
    }

    fn expect_turn(&self, action: &'static str, stage: Stage, seat: Seat) -> Result<(), GameError> {
        if self.stage != stage {
            return Err(GameError::WrongStage {
                action,
                stage: self.stage,
            });
        }
        match self.turn {
            None => Err(GameError::TurnUndecided),
            Some(turn) if turn != seat => Err(GameError::NotYourTurn(seat)),
            Some(_) => Ok(()),
        }
    }

    fn note_rejection(&mut self, seat: Seat, result: Result<(), GameError>) -> Result<(), GameError> {
        if let Err(err) = &result {
            warn!(%seat, error = %err, "move rejected");
            self.messages[seat] = err.to_string();
        }
        result
    }

    fn throw_lead(&mut self, seat: Seat, selected: Option<usize>) -> Result<(), GameError> {
        let play = strategy_for(seat).apply_lead(&mut self.players[seat], selected)?;
        debug!(%seat, card = %play.value, "lead card thrown");

        self.messages[seat] = play.message;
        self.lead_card = Some(play.value);
        self.turn = Some(seat.other());
        self.stage = Stage::ChaseCard;
        self.urge_next_move();
        Ok(())
    }

    fn throw_chase(&mut self, seat: Seat, selected: Option<usize>) -> Result<(), GameError> {
        let lead = self.lead_card.ok_or(GameError::WrongStage {
            action: "throw a chase card",
            stage: self.stage,
        })?;
        let play = strategy_for(seat).apply_chase(&mut self.players[seat], &lead, selected)?;
        debug!(%seat, card = %play.value, "chase card thrown");

        self.messages[seat] = play.message;
        self.chase_card = Some(play.value);
        self.stage = Stage::Intermission;
        Ok(())
    }

    fn play_meld(&mut self, seat: Seat, selected: &[usize]) -> Result<(), GameError> {
        let play = strategy_for(seat).apply_meld(&mut self.players[seat], selected)?;
        let points = play.value.points();
        let earned = match seat {
            Seat::Human => "You won",
            Seat::Computer => "It won",
        };
        info!(%seat, kind = ?play.value.kind(), points, "meld played");

        self.round_scores[seat] += points;
        self.messages[seat] = format!("{} {earned} {points} points for it.", play.message);
        self.current_meld = Some(MeldPlay::Played(play.value));
        self.stage = Stage::Intermission;
        Ok(())
    }

    fn resolve_intermission(&mut self) {
        if let (Some(lead), Some(chase)) = (self.lead_card, self.chase_card) {
            let verdict = self.decide_turn_winner(lead, chase);
            self.stage = Stage::Meld;
            self.urge_next_move();
            if let Some((winner, verdict)) = verdict {
                let prompt = std::mem::take(&mut self.messages[winner]);
                self.messages[winner] = format!("{verdict} {prompt}");
            }
        } else if self.current_meld.take().is_some() {
            self.next_turn();
        }
    }

    /// Award the pair on the table. Returns the winner and the verdict text.
    fn decide_turn_winner(&mut self, lead: Card, chase: Card) -> Option<(Seat, String)> {
        let Some(leader) = self.lead_thrower else {
            warn!("cards on the table without a lead thrower");
            return None;
        };
        let outcome = resolve_turn(&lead, &chase, self.trump_suit);
        let winner = outcome.winner(leader);
        let points = outcome.points;
        info!(%lead, %chase, %winner, points, "turn resolved");

        self.round_scores[winner] += points;
        self.players[winner].add_to_capture_pile(lead, chase);
        self.history.push_back(TurnRecord {
            round: self.round_number,
            leader,
            lead,
            chase,
            winner,
            points,
        });
        self.messages[winner.other()].clear();
        self.turn = Some(winner);
        self.lead_thrower = Some(winner);
        self.lead_card = None;
        self.chase_card = None;

        let verdict = format!(
            "The {}'s {} card has won this turn. The {} wins {points} points this turn.",
            winner.noun(),
            outcome.winning_throw.name(),
            winner.noun()
        );
        Some((winner, verdict))
    }

    /// Refill hands from the stock, winner first, then start the next turn.
    ///
    /// When the stock runs out on the second draw, the face-up trump card is
    /// dealt instead.
    fn next_turn(&mut self) {
        if let Some(first) = self.turn {
            if let Some(card) = self.stock.take_one_from_top() {
                self.players[first].take_card(card);
                if let Some(card) = self.stock.take_one_from_top().or_else(|| self.trump_card.take()) {
                    self.players[first.other()].take_card(card);
                }
            }
        }

        self.stage = if self.players.iter().any(|(_, player)| player.hand_size() == 0) {
            Stage::OutOfCards
        } else {
            Stage::LeadCard
        };
        debug!(stage = %self.stage, stock = self.stock.len(), "next turn");
        self.urge_next_move();
    }

    fn end_round(&mut self) {
        for seat in Seat::ALL {
            self.game_scores[seat] += self.round_scores[seat];
        }
        info!(
            round = self.round_number,
            computer = self.game_scores[Seat::Computer],
            human = self.game_scores[Seat::Human],
            "round over"
        );
        self.round_number += 1;
        self.stage = Stage::RoundEnd;
    }

    /// Prompt the seat that must act. A seat with no meld to play is skipped.
    fn urge_next_move(&mut self) {
        match self.stage {
            Stage::LeadCard | Stage::ChaseCard => {
                if let Some(seat) = self.turn {
                    self.messages[seat] = format!("It is the {}'s turn to throw a {}.", seat.noun(), self.stage);
                }
            }
            Stage::Meld => {
                let Some(seat) = self.turn else { return };
                if self.players[seat].is_meld_possible() {
                    self.messages[seat] = format!("It is the {}'s turn to play a meld.", seat.noun());
                } else {
                    debug!(%seat, "no meld possible, skipping");
                    self.messages[seat] = format!("The {} has no possible melds in hand.", seat.noun());
                    self.current_meld = Some(MeldPlay::Skipped);
                    self.stage = Stage::Intermission;
                }
            }
            Stage::OutOfCards => {
                self.messages[Seat::Human] = "There are no more cards left to play.".to_string();
                self.messages[Seat::Computer].clear();
            }
            Stage::Intermission | Stage::RoundEnd => {}
        }
    }

    // === Save files ===

    /// Write the game as save-file text.
    ///
    /// The file has no stage field and always loads into the lead-card stage,
    /// so saving is only allowed there, with the next leader decided. Any
    /// other stage returns `GameError::WrongStage`, and an undecided turn
    /// returns `GameError::TurnUndecided`.
    pub fn generate_save_data(&self) -> Result<String, GameError> {
        if self.stage != Stage::LeadCard {
            return Err(GameError::WrongStage {
                action: "save the game",
                stage: self.stage,
            });
        }
        let next_player = self.turn.ok_or(GameError::TurnUndecided)?;
        let data = SaveData {
            round: self.round_number,
            seats: SeatMap::new(|seat| SeatRecord {
                game_score: self.game_scores[seat],
                round_score: self.round_scores[seat],
                cards: encode_player(&self.players[seat]),
            }),
            trump_card: self.trump_card,
            trump_suit: self.trump_suit,
            stock: self.stock.top_down().copied().collect(),
            next_player,
        };
        info!(round = self.round_number, "game saved");
        Ok(data.to_string())
    }

    /// Replace the game with one read from save-file text.
    ///
    /// Every card is drawn from a fresh deck. The model is only changed when
    /// the whole file parses and every named card exists.
    pub fn load_game(&mut self, text: &str) -> Result<(), GameError> {
        self.restore(text).map_err(|err| {
            warn!(error = %err, "save file rejected");
            GameError::from(err)
        })
    }

    fn restore(&mut self, text: &str) -> Result<(), SaveError> {
        let data = SaveData::parse(text)?;
        let mut pool: CardCollection = Deck::standard(self.config.copies_per_card)
            .cards()
            .iter()
            .copied()
            .collect();

        let mut stock = Deck::new();
        for ghost in data.stock.iter().rev() {
            stock.put_card_at_top(take_from_pool(&mut pool, ghost)?);
        }
        let trump_card = match &data.trump_card {
            Some(ghost) => Some(take_from_pool(&mut pool, ghost)?),
            None => None,
        };
        let records = data.seats.map(|_, record| record.cards.clone());
        let players = decode_players(&records, &mut pool, data.trump_suit)?;

        self.round_number = data.round;
        self.round_scores = data.seats.map(|_, record| record.round_score);
        self.game_scores = data.seats.map(|_, record| record.game_score);
        self.players = players;
        self.stock = stock;
        self.trump_card = trump_card;
        self.trump_suit = data.trump_suit;
        self.turn = Some(data.next_player);
        self.lead_thrower = self.turn;
        self.lead_card = None;
        self.chase_card = None;
        self.current_meld = None;
        self.messages = SeatMap::default();
        self.history = Vector::new();
        self.stage = if self.players.iter().any(|(_, player)| player.hand_size() == 0) {
            Stage::OutOfCards
        } else {
            Stage::LeadCard
        };

        info!(round = self.round_number, next = %data.next_player, "game loaded");
        self.urge_next_move();
        Ok(())
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Seat expected to act, `None` while a coin toss is pending.
    #[must_use]
    pub fn turn(&self) -> Option<Seat> {
        self.turn
    }

    #[must_use]
    pub fn is_humans_turn(&self) -> Option<bool> {
        self.turn.map(|seat| seat == Seat::Human)
    }

    #[must_use]
    pub fn lead_thrower(&self) -> Option<Seat> {
        self.lead_thrower
    }

    #[must_use]
    pub fn player(&self, seat: Seat) -> &PlayerState {
        &self.players[seat]
    }

    #[must_use]
    pub fn stock(&self) -> &Deck {
        &self.stock
    }

    #[must_use]
    pub fn trump_card(&self) -> Option<&Card> {
        self.trump_card.as_ref()
    }

    #[must_use]
    pub fn trump_suit(&self) -> Suit {
        self.trump_suit
    }

    /// The trump card's short code, or just the suit letter once it is dealt.
    #[must_use]
    pub fn trump_card_string(&self) -> String {
        match &self.trump_card {
            Some(card) => card.short_code(),
            None => self.trump_suit.code().to_string(),
        }
    }

    #[must_use]
    pub fn lead_card(&self) -> Option<&Card> {
        self.lead_card.as_ref()
    }

    #[must_use]
    pub fn chase_card(&self) -> Option<&Card> {
        self.chase_card.as_ref()
    }

    #[must_use]
    pub fn current_meld(&self) -> Option<&MeldPlay> {
        self.current_meld.as_ref()
    }

    #[must_use]
    pub fn game_score(&self, seat: Seat) -> u32 {
        self.game_scores[seat]
    }

    #[must_use]
    pub fn round_score(&self, seat: Seat) -> u32 {
        self.round_scores[seat]
    }

    /// Latest message for a seat.
    #[must_use]
    pub fn message(&self, seat: Seat) -> &str {
        &self.messages[seat]
    }

    /// Every resolved turn since the game started or was loaded.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Seat ahead on round points. `None` on a tie.
    #[must_use]
    pub fn round_leader(&self) -> Option<Seat> {
        leader_by(&self.round_scores)
    }

    /// Seat ahead on game points. `None` on a tie.
    #[must_use]
    pub fn game_leader(&self) -> Option<Seat> {
        leader_by(&self.game_scores)
    }

    #[must_use]
    pub fn hand_codes(&self, seat: Seat) -> Vec<String> {
        self.players[seat].hand().short_codes()
    }

    #[must_use]
    pub fn capture_pile_codes(&self, seat: Seat) -> Vec<String> {
        self.players[seat].capture_pile().short_codes()
    }

    /// Confirmed melds, one list of codes per meld, in ledger order.
    #[must_use]
    pub fn meld_codes(&self, seat: Seat) -> Vec<Vec<String>> {
        self.players[seat].ledger().iter().map(MeldInstance::short_codes).collect()
    }

    /// Stock codes, bottom to top.
    #[must_use]
    pub fn stock_codes(&self) -> Vec<String> {
        self.stock.cards().iter().map(Card::short_code).collect()
    }
}

fn leader_by(scores: &SeatMap<u32>) -> Option<Seat> {
    match scores[Seat::Computer].cmp(&scores[Seat::Human]) {
        Ordering::Greater => Some(Seat::Computer),
        Ordering::Less => Some(Seat::Human),
        Ordering::Equal => None,
    }
}

fn short_deck(config: &GameConfig) -> GameError {
    ConfigError::DealTooLarge {
        needed: config.hand_size() * 2 + 1,
        deck_size: config.deck_size(),
    }
    .into()
}
