//! Showdown тесты: кто сильнее между игроками.
//!
//! - разные категории на общем борде;
//! - кикер решает при равной паре;
//! - сплит, когда играет борд;
//! - ошибки контракта (пустой список игроков, пустой набор карт).

use poker_hand_eval::domain::card::{cards_from, Card};
use poker_hand_eval::eval::{
    evaluate_players, resolve_winners, showdown, EvalError, HandCategory,
};

fn h(cards: &[&str]) -> Vec<Card> {
    cards_from(cards.iter().copied()).expect("валидные карты")
}

/// Набор игрока: карманные + борд.
fn seat(hole: &[&str], board: &[&str]) -> Vec<Card> {
    let mut all = h(hole);
    all.extend(h(board));
    all
}

//
// ============= ТЕСТ 1: straight flush > стрит ============
//
#[test]
fn straight_flush_beats_straight() {
    let board = ["t9", "t10", "t11", "t12", "c2"];
    let players = vec![
        (1, seat(&["t8", "t13"], &board)),
        (2, seat(&["c13", "h13"], &board)),
    ];

    let result = showdown(&players).unwrap();
    assert_eq!(result.winners, vec![1]);
    assert_eq!(result.category, HandCategory::StraightFlush);
}

//
// ============= ТЕСТ 2: кикер ============
//
#[test]
fn kicker_decides_equal_pairs() {
    let board = ["p9", "h9", "c5", "t3", "h12"];
    let players = vec![
        (1, seat(&["t1", "c11"], &board)),
        (2, seat(&["c13", "t11"], &board)),
    ];

    let summaries = evaluate_players(&players).unwrap();
    assert_eq!(summaries[0].best.tie_value, 63_000 + 49 + 43 + 38);
    assert_eq!(summaries[1].best.tie_value, 63_000 + 46 + 43 + 37);

    let result = resolve_winners(&summaries).unwrap();
    assert_eq!(result.winners, vec![1]);
    assert_eq!(result.category, HandCategory::OnePair);
}

//
// ============= ТЕСТ 3: wheel проигрывает стриту до шестёрки ============
//
#[test]
fn wheel_loses_to_six_high_straight() {
    let board = ["h2", "c3", "t4", "p9", "h13"];
    let players = vec![
        (1, seat(&["p1", "c5"], &board)),
        (2, seat(&["t5", "h6"], &board)),
    ];

    let summaries = evaluate_players(&players).unwrap();
    assert_eq!(summaries[0].best.category, HandCategory::Straight);
    assert_eq!(summaries[0].best.tie_value, 36);
    assert_eq!(summaries[1].best.tie_value, 50);

    assert_eq!(resolve_winners(&summaries).unwrap().winners, vec![2]);
}

//
// ============= ТЕСТ 4: сплит – играет борд ============
//
#[test]
fn board_royal_flush_splits() {
    let board = ["p10", "p11", "p12", "p13", "p1"];
    let players = vec![
        (10, seat(&["h2", "c3"], &board)),
        (20, seat(&["t4", "h5"], &board)),
        (30, seat(&["c7", "t8"], &board)),
    ];

    let result = showdown(&players).unwrap();
    assert_eq!(result.winners, vec![10, 20, 30]);
    assert!(result.is_split());
    assert_eq!(result.category, HandCategory::RoyalFlush);
    assert_eq!(result.tie_value, 220);
}

#[test]
fn two_of_three_tie_for_first() {
    // у 1 и 3 одинаковая лучшая пятёрка с борда (стрит 5-9), у 2 – стрит до десятки
    let board = ["p5", "h6", "c7", "t8", "p9"];
    let players = vec![
        (1, seat(&["h2", "c3"], &board)),
        (2, seat(&["t10", "h4"], &board)),
        (3, seat(&["c2", "t3"], &board)),
    ];
    let result = showdown(&players).unwrap();
    assert_eq!(result.winners, vec![2]);

    let players = vec![
        (1, seat(&["h2", "c3"], &board)),
        (3, seat(&["c2", "t3"], &board)),
    ];
    let result = showdown(&players).unwrap();
    assert_eq!(result.winners, vec![1, 3]);
    assert_eq!(result.category, HandCategory::Straight);
}

//
// ============= Ошибки контракта ============
//
#[test]
fn empty_player_list_is_rejected() {
    assert_eq!(resolve_winners(&[]), Err(EvalError::NoPlayers));
}

#[test]
fn player_without_cards_is_rejected() {
    let players = vec![(1, h(&["p1", "h1"])), (2, Vec::new())];
    assert_eq!(showdown(&players), Err(EvalError::EmptyCardSet));
}

#[test]
fn empty_list_fails_for_showdown_too() {
    assert_eq!(showdown(&[]), Err(EvalError::NoPlayers));
}

#[test]
fn single_player_wins_alone() {
    let result = showdown(&[(7, h(&["p1", "h1"]))]).unwrap();
    assert_eq!(result.winners, vec![7]);
    assert_eq!(result.category, HandCategory::OnePair);
    assert!(!result.is_split());
}
