use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Категория покерной руки по силе.
///
/// Порядок задаётся таблицей `stage()`, а не порядком вариантов.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HandCategory {
    HighCard,
    OnePair,
    TwoPair,
    ThreeKind,
    Straight,
    Flush,
    FullHouse,
    FourKind,
    StraightFlush,
    RoyalFlush,
}

impl HandCategory {
    /// Все категории от слабой к сильной.
    pub const ALL: [HandCategory; 10] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    /// Числовая ступень категории для межкатегорийного сравнения.
    pub const fn stage(self) -> u8 {
        match self {
            HandCategory::HighCard => 0,
            HandCategory::OnePair => 92,
            HandCategory::TwoPair => 93,
            HandCategory::ThreeKind => 94,
            HandCategory::Straight => 95,
            HandCategory::Flush => 96,
            HandCategory::FullHouse => 97,
            HandCategory::FourKind => 98,
            HandCategory::StraightFlush => 99,
            HandCategory::RoyalFlush => 100,
        }
    }
}

impl Ord for HandCategory {
    fn cmp(&self, other: &Self) -> Ordering {
        self.stage().cmp(&other.stage())
    }
}

impl PartialOrd for HandCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Результат оценки одной комбинации (до 5 карт).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvaluation {
    pub cards: Vec<Card>,
    pub category: HandCategory,
    /// Сила внутри категории. Сравнима только при равной категории.
    pub tie_value: u32,
}

impl HandEvaluation {
    /// Ключ сравнения: (ступень категории, tie_value).
    pub fn strength(&self) -> (u8, u32) {
        (self.category.stage(), self.tie_value)
    }

    pub fn cmp_strength(&self, other: &HandEvaluation) -> Ordering {
        self.strength().cmp(&other.strength())
    }

    /// Строго сильнее.
    pub fn beats(&self, other: &HandEvaluation) -> bool {
        self.cmp_strength(other) == Ordering::Greater
    }

    pub fn ties_with(&self, other: &HandEvaluation) -> bool {
        self.cmp_strength(other) == Ordering::Equal
    }
}

/// Человеческое описание руки по категории.
pub fn describe_hand(category: HandCategory) -> &'static str {
    match category {
        HandCategory::HighCard => "High card",
        HandCategory::OnePair => "One pair",
        HandCategory::TwoPair => "Two pair",
        HandCategory::ThreeKind => "Three of a kind",
        HandCategory::Straight => "Straight",
        HandCategory::Flush => "Flush",
        HandCategory::FullHouse => "Full house",
        HandCategory::FourKind => "Four of a kind",
        HandCategory::StraightFlush => "Straight flush",
        HandCategory::RoyalFlush => "Royal flush",
    }
}
