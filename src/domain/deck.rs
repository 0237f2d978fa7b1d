use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::card::{cards_from, Card, CardError, Suit, MAX_RANK, MIN_RANK};
use crate::engine::RandomSource;

/// С какой стороны колоды тянуть карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DrawFrom {
    /// Начало списка.
    #[default]
    Top,
    /// Конец списка.
    Bottom,
}

/// Набор карт без повторов: колода, рука или борд.
/// Перемешивание делается через `RandomSource` из engine/infra.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Стандартная 52-карточная колода в порядке:
    /// ♠ 1..13, ♥ 1..13, ♦ 1..13, ♣ 1..13.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in MIN_RANK..=MAX_RANK {
                // ранг заведомо в диапазоне
                if let Ok(card) = Card::new(suit, rank) {
                    cards.push(card);
                }
            }
        }
        Deck { cards }
    }

    /// Собрать набор из произвольных карт; повторы отбрасываются.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut deck = Deck::empty();
        deck.push_unique(cards);
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Взять до `n` карт с выбранной стороны. Если карт не хватает – отдаём сколько есть.
    pub fn draw(&mut self, n: usize, from: DrawFrom) -> Vec<Card> {
        let n = n.min(self.cards.len());
        match from {
            DrawFrom::Top => self.cards.drain(..n).collect(),
            DrawFrom::Bottom => {
                let start = self.cards.len() - n;
                self.cards.drain(start..).rev().collect()
            }
        }
    }

    /// Взять одну карту сверху.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.draw(1, DrawFrom::Top).pop()
    }

    /// Две карты сверху для дуэли. `None`, если осталось меньше двух.
    pub fn draw_pair(&mut self) -> Option<(Card, Card)> {
        if self.cards.len() < 2 {
            return None;
        }
        let mut pair = self.cards.drain(..2);
        Some((pair.next()?, pair.next()?))
    }

    /// Вытащить конкретную карту, если она есть в колоде.
    pub fn draw_specific(&mut self, card: &Card) -> Option<Card> {
        let pos = self.cards.iter().position(|c| c == card)?;
        Some(self.cards.remove(pos))
    }

    /// Добавить карты, пропуская уже имеющиеся. Возвращает число добавленных.
    ///
    /// Принимает `Card`, строки вида `"p5"` / `"♠5"` и пары `(Suit, u8)`.
    /// Если хоть один элемент не распознан, набор не меняется.
    pub fn add<T>(&mut self, items: impl IntoIterator<Item = T>) -> Result<usize, CardError>
    where
        T: TryInto<Card>,
        CardError: From<T::Error>,
    {
        let cards = cards_from(items)?;
        Ok(self.push_unique(cards))
    }

    fn push_unique(&mut self, cards: impl IntoIterator<Item = Card>) -> usize {
        let mut added = 0;
        for card in cards {
            if self.cards.contains(&card) {
                debug!("{card} уже есть в наборе, пропускаем");
                continue;
            }
            self.cards.push(card);
            added += 1;
        }
        added
    }

    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
    }

    /// Содержимое в виде строк `♠10`, `♥1`, ...
    pub fn content(&self) -> Vec<String> {
        self.cards.iter().map(Card::to_string).collect()
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}
