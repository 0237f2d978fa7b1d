//! Дуэль по одной карте: из колоды тянут по две карты,
//! старшая по `value()` забирает розыгрыш.

use std::cmp::Ordering;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::deck::Deck;

/// Сравнить две одиночные карты по `value()`.
pub fn high_card_duel(a: &Card, b: &Card) -> Ordering {
    a.value().cmp(&b.value())
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DuelWinner {
    First,
    Second,
    /// Только для одной и той же карты, из колоды без повторов не бывает.
    Tie,
}

/// Итог одного розыгрыша.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DuelOutcome {
    /// Номер розыгрыша, с 1.
    pub round: usize,
    pub first: Card,
    pub second: Card,
    pub winner: DuelWinner,
}

impl DuelOutcome {
    pub fn winning_card(&self) -> Option<Card> {
        match self.winner {
            DuelWinner::First => Some(self.first),
            DuelWinner::Second => Some(self.second),
            DuelWinner::Tie => None,
        }
    }
}

/// Тянуть по две карты сверху, пока колода не опустеет.
/// При нечётном числе последняя карта остаётся в колоде.
pub fn play_duels(deck: &mut Deck) -> Vec<DuelOutcome> {
    let mut outcomes = Vec::with_capacity(deck.len() / 2);

    while let Some((first, second)) = deck.draw_pair() {
        let winner = match high_card_duel(&first, &second) {
            Ordering::Greater => DuelWinner::First,
            Ordering::Less => DuelWinner::Second,
            Ordering::Equal => DuelWinner::Tie,
        };
        let outcome = DuelOutcome {
            round: outcomes.len() + 1,
            first,
            second,
            winner,
        };
        debug!("дуэль #{}: {first} vs {second} -> {winner:?}", outcome.round);
        outcomes.push(outcome);
    }

    outcomes
}
