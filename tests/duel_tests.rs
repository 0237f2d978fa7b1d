//! Дуэль по одной карте: по две карты из колоды, старшая по value выигрывает.

use std::cmp::Ordering;

use poker_hand_eval::domain::card::{cards_from, Card};
use poker_hand_eval::domain::Deck;
use poker_hand_eval::eval::{high_card_duel, play_duels, DuelWinner};
use poker_hand_eval::infra::DeterministicRng;

fn c(s: &str) -> Card {
    s.parse().unwrap()
}

//
// ===== ТЕСТ 1: сравнение одиночных карт =====
//
#[test]
fn higher_value_wins_single_card() {
    // туз пик старше всех, трефовый туз старше пикового короля
    assert_eq!(high_card_duel(&c("p1"), &c("h1")), Ordering::Greater);
    assert_eq!(high_card_duel(&c("t1"), &c("p13")), Ordering::Greater);
    assert_eq!(high_card_duel(&c("t2"), &c("c2")), Ordering::Less);
    // при равном ранге решает масть: ♠ > ♥ > ♦ > ♣
    assert_eq!(high_card_duel(&c("h9"), &c("c9")), Ordering::Greater);
    assert_eq!(high_card_duel(&c("p5"), &c("p5")), Ordering::Equal);
}

//
// ===== ТЕСТ 2: розыгрыш до конца колоды =====
//
#[test]
fn full_deck_gives_26_duels() {
    let mut deck = Deck::standard_52();
    deck.shuffle(&mut DeterministicRng::from_seed(2024));

    let outcomes = play_duels(&mut deck);
    assert_eq!(outcomes.len(), 26);
    assert!(deck.is_empty());

    for (i, o) in outcomes.iter().enumerate() {
        assert_eq!(o.round, i + 1);
        assert_ne!(o.winner, DuelWinner::Tie);
        let (winner, loser) = match o.winner {
            DuelWinner::First => (o.first, o.second),
            _ => (o.second, o.first),
        };
        assert!(winner.value() > loser.value());
        assert_eq!(o.winning_card(), Some(winner));
    }
}

#[test]
fn cards_are_taken_from_the_top_in_pairs() {
    let mut deck = Deck::from_cards(cards_from(["h2", "p13", "t1", "c1", "p3"]).unwrap());
    let outcomes = play_duels(&mut deck);

    assert_eq!(outcomes.len(), 2);
    assert_eq!((outcomes[0].first, outcomes[0].second), (c("h2"), c("p13")));
    assert_eq!(outcomes[0].winner, DuelWinner::Second);
    assert_eq!((outcomes[1].first, outcomes[1].second), (c("t1"), c("c1")));
    assert_eq!(outcomes[1].winner, DuelWinner::Second);

    // нечётная карта остаётся в колоде
    assert_eq!(deck.cards(), &[c("p3")]);
}

#[test]
fn same_seed_same_duels() {
    let run = |seed| {
        let mut deck = Deck::standard_52();
        deck.shuffle(&mut DeterministicRng::from_seed(seed));
        play_duels(&mut deck)
    };
    assert_eq!(run(5), run(5));
    assert!(play_duels(&mut Deck::empty()).is_empty());
}
