use core::fmt;
use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Смещение для вычисления `value` карты.
/// При D = 4 младшая карта колоды – 2♣ (value = 1), старшая – A♠ (value = 52).
pub const VALUE_DISPLACEMENT: i32 = 4;

/// Минимальный и максимальный ранг (1 = туз).
pub const MIN_RANK: u8 = 1;
pub const MAX_RANK: u8 = 13;

/// Ошибки создания карты.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("Неизвестная масть: {0}")]
    InvalidSuit(String),

    #[error("Ранг должен быть в диапазоне 1..=13, получено {0}")]
    InvalidRank(i64),

    #[error("Неверный формат карты: {0:?} (ожидается \"p5\", \"t13\" или \"♠5\")")]
    Malformed(String),
}

// `Card` -> `Card` не может упасть.
impl From<Infallible> for CardError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Масть карты. Порядок вариантов = `suit_index` в формуле value.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Spade,   // ♠ p
    Heart,   // ♥ h
    Diamond, // ♦ c
    Club,    // ♣ t
}

/// Цвет масти.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Буквенное обозначение: p / h / c / t.
    pub const fn letter(self) -> char {
        match self {
            Suit::Spade => 'p',
            Suit::Heart => 'h',
            Suit::Diamond => 'c',
            Suit::Club => 't',
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Suit::Spade => '♠',
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Suit::Spade | Suit::Club => Color::Black,
            Suit::Heart | Suit::Diamond => Color::Red,
        }
    }

    /// Разбор масти по букве или символу.
    pub fn from_symbol(ch: char) -> Result<Self, CardError> {
        match ch {
            'p' | 'P' | '♠' => Ok(Suit::Spade),
            'h' | 'H' | '♥' => Ok(Suit::Heart),
            'c' | 'C' | '♦' => Ok(Suit::Diamond),
            't' | 'T' | '♣' => Ok(Suit::Club),
            other => Err(CardError::InvalidSuit(other.to_string())),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Игральная карта из стандартной 52-карточной колоды.
///
/// Поля приватные: карта создаётся только через `Card::new`,
/// поэтому ядро оценки всегда получает валидный ранг.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "RawCard", into = "RawCard")]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    pub fn new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if !(MIN_RANK..=MAX_RANK).contains(&rank) {
            return Err(CardError::InvalidRank(rank as i64));
        }
        Ok(Self { suit, rank })
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn is_ace(&self) -> bool {
        self.rank == 1
    }

    /// Порядковая "ценность" карты (1..=52).
    ///
    /// `rank*4 - suit_index - D`, при неположительном результате
    /// прибавляем `48 + D` – туз уходит наверх шкалы.
    /// Это НЕ сила покерной руки, а только порядок одиночных карт.
    pub fn value(&self) -> u32 {
        let raw = self.rank as i32 * 4 - self.suit.index() as i32 - VALUE_DISPLACEMENT;
        let wrapped = if raw <= 0 {
            raw + 48 + VALUE_DISPLACEMENT
        } else {
            raw
        };
        wrapped as u32
    }

    /// Текстовая форма в буквенной нотации: `p10`, `t1`.
    pub fn text(&self) -> String {
        format!("{}{}", self.suit.letter(), self.rank)
    }
}

impl fmt::Display for Card {
    /// Формат вида `♠10`, `♥1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit, self.rank)
    }
}

/// Парсинг строки вида "p5", "t13", "♠5".
impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit_ch = chars
            .next()
            .ok_or_else(|| CardError::Malformed(s.to_string()))?;
        let suit = Suit::from_symbol(suit_ch)?;

        let rank_str = chars.as_str();
        if rank_str.is_empty() {
            return Err(CardError::Malformed(s.to_string()));
        }
        let rank: i64 = rank_str
            .parse()
            .map_err(|_| CardError::Malformed(s.to_string()))?;
        if !(MIN_RANK as i64..=MAX_RANK as i64).contains(&rank) {
            return Err(CardError::InvalidRank(rank));
        }
        Card::new(suit, rank as u8)
    }
}

impl TryFrom<(Suit, u8)> for Card {
    type Error = CardError;

    fn try_from((suit, rank): (Suit, u8)) -> Result<Self, Self::Error> {
        Card::new(suit, rank)
    }
}

impl TryFrom<&str> for Card {
    type Error = CardError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Нормализация входа на границе: `Card`, строки и пары `(Suit, u8)` → `Card`.
pub fn cards_from<T>(items: impl IntoIterator<Item = T>) -> Result<Vec<Card>, CardError>
where
    T: TryInto<Card>,
    CardError: From<T::Error>,
{
    items
        .into_iter()
        .map(|item| item.try_into().map_err(CardError::from))
        .collect()
}

/// Сериализованная форма карты – с валидацией ранга при чтении.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct RawCard {
    suit: Suit,
    rank: u8,
}

impl TryFrom<RawCard> for Card {
    type Error = CardError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Card::new(raw.suit, raw.rank)
    }
}

impl From<Card> for RawCard {
    fn from(card: Card) -> Self {
        RawCard {
            suit: card.suit,
            rank: card.rank,
        }
    }
}
