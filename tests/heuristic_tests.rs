//! Heuristic suggestions and the strategies built on them.

mod common;

use common::{cards, init_logging, player};
use pinochle::cards::Suit;
use pinochle::melds::MeldKind;
use pinochle::players::heuristics::{
    CHASE_FORCED_TRUMP, LEAD_BALANCED, LEAD_PREFERS_TRUMP, LEAD_PRESERVES_MELDS, MELD_HIGHEST, MELD_NONE,
};
use pinochle::players::{suggest_chase, suggest_lead, suggest_meld, Strategy, COMPUTER, HUMAN};

#[test]
fn test_lead_keeps_meld_cards() {
    init_logging();
    let player = player("KS QS 9C", Suit::Spades);

    let suggestion = suggest_lead(&player).unwrap();
    assert_eq!(suggestion.value.short_code(), "9C");
    assert_eq!(suggestion.reasoning, LEAD_PRESERVES_MELDS);
}

#[test]
fn test_lead_tie_prefers_highest_rank() {
    let player = player("KS QS JD 9C AH", Suit::Spades);

    let suggestion = suggest_lead(&player).unwrap();
    assert_eq!(suggestion.value.short_code(), "AH");
    assert_eq!(suggestion.reasoning, LEAD_BALANCED);
}

#[test]
fn test_lead_tie_prefers_trump() {
    let player = player("9C XS JH", Suit::Spades);

    let suggestion = suggest_lead(&player).unwrap();
    assert_eq!(suggestion.value.short_code(), "XS");
    assert_eq!(suggestion.reasoning, LEAD_PREFERS_TRUMP);
}

#[test]
fn test_empty_hand_has_no_suggestion() {
    let player = player("", Suit::Spades);
    let lead = cards("AS", 40)[0];

    assert!(suggest_lead(&player).is_none());
    assert!(suggest_chase(&player, &lead).is_none());
    assert_eq!(suggest_meld(&player).reasoning, MELD_NONE);
}

#[test]
fn test_chase_forced_trump() {
    let player = player("9C 9S KS", Suit::Spades);
    let lead = cards("AH", 40)[0];

    let suggestion = suggest_chase(&player, &lead).unwrap();
    assert_eq!(suggestion.value.short_code(), "9S");
    assert_eq!(suggestion.reasoning, CHASE_FORCED_TRUMP);
}

#[test]
fn test_meld_prefers_points() {
    let player = player("AS XS KS QS JS JD 9S", Suit::Spades);

    let suggestion = suggest_meld(&player);
    let meld = suggestion.value.unwrap();
    assert_eq!(meld.kind(), Some(MeldKind::Flush));
    assert_eq!(meld.points(), 150);
    assert_eq!(suggestion.reasoning, MELD_HIGHEST);
}

#[test]
fn test_human_hint_names_positions() {
    let player = player("KS QS 9C", Suit::Spades);

    let hint = HUMAN.hint_lead(&player).unwrap();
    assert_eq!(
        hint,
        format!("Hint: I recommend that you present 9C(2) as your lead card because {LEAD_PRESERVES_MELDS}.")
    );
}

#[test]
fn test_computer_plays_its_suggestion() {
    let mut player = player("KS QS 9C", Suit::Spades);

    let play = COMPUTER.apply_lead(&mut player, Some(0)).unwrap();
    assert_eq!(play.value.short_code(), "9C");
    assert_eq!(
        play.message,
        format!("The computer chose to play 9C as its lead card because {LEAD_PRESERVES_MELDS}.")
    );
    assert_eq!(player.hand_size(), 2);
}
