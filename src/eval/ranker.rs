use log::debug;

use crate::domain::card::Card;

use super::classifier::classify;
use super::combinations::{combinations, hand_size};
use super::errors::EvalError;
use super::hand_rank::HandEvaluation;

/// Главная функция: лучшая комбинация из всех карт игрока.
///
/// Перебираем все C(n, min(5, n)) подмножеств, лучшее заменяется только
/// строго более сильным кандидатом.
pub fn best_hand(cards: &[Card]) -> Result<HandEvaluation, EvalError> {
    if cards.is_empty() {
        return Err(EvalError::EmptyCardSet);
    }
    ensure_unique(cards)?;

    let subsets = combinations(cards, hand_size(cards.len()))?;
    let best = select_best(subsets.iter().map(|subset| classify(subset)))
        .ok_or(EvalError::EmptyCardSet)?;
    debug!(
        "best_hand из {} карт: {:?} ({})",
        cards.len(),
        best.category,
        best.tie_value
    );
    Ok(best)
}

/// Проход с «текущим лучшим»: кандидат заменяет лучшего только если
/// строго сильнее, так что при равной силе остаётся первый по порядку.
pub fn select_best(
    candidates: impl IntoIterator<Item = HandEvaluation>,
) -> Option<HandEvaluation> {
    let mut best: Option<HandEvaluation> = None;
    for candidate in candidates {
        if best.as_ref().map_or(true, |b| candidate.beats(b)) {
            best = Some(candidate);
        }
    }
    best
}

/// Лучшая рука из карманных карт + борда.
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> Result<HandEvaluation, EvalError> {
    let mut all_cards = Vec::with_capacity(hole.len() + board.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(board);
    best_hand(&all_cards)
}

fn ensure_unique(cards: &[Card]) -> Result<(), EvalError> {
    for (i, card) in cards.iter().enumerate() {
        if cards[..i].contains(card) {
            return Err(EvalError::DuplicateCard(*card));
        }
    }
    Ok(())
}
