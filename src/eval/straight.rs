use crate::domain::card::Card;

use super::combinations::HAND_SIZE;

/// Битовая маска рангов.
///
/// Используем 13 бит (от туза до короля):
/// бит 0 = туз, бит 12 = король.
pub type RankMask = u16;

/// Разновидность стрита.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StraightKind {
    /// A-2-3-4-5, туз играет снизу.
    Wheel,
    /// Пять подряд без туза.
    Regular,
    /// 10-J-Q-K-A, туз играет сверху.
    Broadway,
}

/// Маски всех возможных стритов (5 подряд).
///
/// Индексы:
///   0: A2345 (wheel)
///   1: 23456
///   ...
///   8: 9TJQK
///   9: TJQKA (broadway)
pub const STRAIGHT_MASKS: [RankMask; 10] = [
    mask_from_ranks(&[1, 2, 3, 4, 5]),
    mask_from_ranks(&[2, 3, 4, 5, 6]),
    mask_from_ranks(&[3, 4, 5, 6, 7]),
    mask_from_ranks(&[4, 5, 6, 7, 8]),
    mask_from_ranks(&[5, 6, 7, 8, 9]),
    mask_from_ranks(&[6, 7, 8, 9, 10]),
    mask_from_ranks(&[7, 8, 9, 10, 11]),
    mask_from_ranks(&[8, 9, 10, 11, 12]),
    mask_from_ranks(&[9, 10, 11, 12, 13]),
    mask_from_ranks(&[10, 11, 12, 13, 1]),
];

/// Получить битовую маску для одного ранга (1..=13).
pub const fn rank_to_bit(rank: u8) -> RankMask {
    1 << (rank.saturating_sub(1))
}

/// Построить маску из списка рангов.
pub const fn mask_from_ranks(ranks: &[u8]) -> RankMask {
    let mut mask: RankMask = 0;
    let mut i = 0;
    while i < ranks.len() {
        mask |= rank_to_bit(ranks[i]);
        i += 1;
    }
    mask
}

pub fn mask_from_cards(cards: &[Card]) -> RankMask {
    cards
        .iter()
        .fold(0, |mask, card| mask | rank_to_bit(card.rank()))
}

/// Стрит ли ровно эти пять карт.
///
/// Маска должна совпасть с одной из `STRAIGHT_MASKS`: пара даёт
/// меньше пяти бит и стритом не считается.
pub fn detect_straight(cards: &[Card]) -> Option<StraightKind> {
    if cards.len() != HAND_SIZE {
        return None;
    }
    let mask = mask_from_cards(cards);
    let i = STRAIGHT_MASKS.iter().position(|&sm| sm == mask)?;
    Some(match i {
        0 => StraightKind::Wheel,
        9 => StraightKind::Broadway,
        _ => StraightKind::Regular,
    })
}
