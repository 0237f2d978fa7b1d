use std::collections::BTreeMap;

use log::trace;

use crate::domain::card::Card;

use super::combinations::HAND_SIZE;
use super::hand_rank::{HandCategory, HandEvaluation};
use super::straight::{detect_straight, StraightKind};

/// Вес старшей группы (пара/сет) в tie_value.
/// Любая сумма трёх кикеров меньше, поэтому группа всегда решает первой.
pub const GROUP_WEIGHT: u32 = 1000;

/// Поправка для wheel: туз в A-2-3-4-5 считается младшей картой.
pub const WHEEL_ACE_CORRECTION: u32 = 48;

/// Оценка одной комбинации (5 карт или меньше).
///
/// Порядок проверок: royal flush, straight flush, flush, straight,
/// затем категории по кратности рангов. Вход не изменяется.
pub fn classify(cards: &[Card]) -> HandEvaluation {
    let full = cards.len() == HAND_SIZE;

    // Подсчёт мастей.
    let mut suit_counts = [0u8; 4];
    for card in cards {
        suit_counts[card.suit().index() as usize] += 1;
    }

    let is_flush = full && suit_counts.iter().any(|&c| c as usize >= HAND_SIZE);
    let straight = if full { detect_straight(cards) } else { None };
    let total = value_sum(cards);

    let (category, tie_value) = match (is_flush, straight) {
        (true, Some(StraightKind::Broadway)) => (HandCategory::RoyalFlush, total),
        (true, Some(kind)) => (HandCategory::StraightFlush, straight_value(total, kind)),
        (true, None) => (HandCategory::Flush, total),
        (false, Some(kind)) => (HandCategory::Straight, straight_value(total, kind)),
        (false, None) => classify_by_kind(cards, total),
    };

    trace!(
        "classify {:?} -> {:?} ({})",
        cards.iter().map(Card::to_string).collect::<Vec<_>>(),
        category,
        tie_value
    );

    HandEvaluation {
        cards: cards.to_vec(),
        category,
        tie_value,
    }
}

fn value_sum(cards: &[Card]) -> u32 {
    cards.iter().map(Card::value).sum()
}

fn straight_value(total: u32, kind: StraightKind) -> u32 {
    match kind {
        StraightKind::Wheel => total - WHEEL_ACE_CORRECTION,
        StraightKind::Regular | StraightKind::Broadway => total,
    }
}

/// Категории по кратности рангов: каре, фулл-хаус, сет, две пары, пара, старшая карта.
fn classify_by_kind(cards: &[Card], total: u32) -> (HandCategory, u32) {
    let mut rank_counts: BTreeMap<u8, u8> = BTreeMap::new();
    for card in cards {
        *rank_counts.entry(card.rank()).or_insert(0) += 1;
    }

    let has = |n: u8| rank_counts.values().any(|&c| c == n);
    let pairs = rank_counts.values().filter(|&&c| c == 2).count();

    if has(4) {
        (HandCategory::FourKind, total)
    } else if has(3) && has(2) {
        (HandCategory::FullHouse, total)
    } else if has(3) {
        (HandCategory::ThreeKind, grouped_value(cards, &rank_counts, 3))
    } else if pairs == 2 {
        (HandCategory::TwoPair, grouped_value(cards, &rank_counts, 2))
    } else if pairs == 1 {
        (HandCategory::OnePair, grouped_value(cards, &rank_counts, 2))
    } else {
        (HandCategory::HighCard, total)
    }
}

/// Карты из групп размера `group` идут с весом `GROUP_WEIGHT`, кикеры – с весом 1.
fn grouped_value(cards: &[Card], rank_counts: &BTreeMap<u8, u8>, group: u8) -> u32 {
    cards
        .iter()
        .map(|card| {
            if rank_counts.get(&card.rank()) == Some(&group) {
                card.value() * GROUP_WEIGHT
            } else {
                card.value()
            }
        })
        .sum()
}
