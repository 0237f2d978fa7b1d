use thiserror::Error;

use crate::domain::card::Card;

/// Ошибки оценки рук. Все они – нарушение контракта вызывающей стороной.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Пустой набор карт: нечего оценивать")]
    EmptyCardSet,

    #[error("Нельзя выбрать {k} карт из {n}")]
    SubsetTooLarge { k: usize, n: usize },

    #[error("Карта {0} встречается в наборе дважды")]
    DuplicateCard(Card),

    #[error("Нет ни одного игрока для шоудауна")]
    NoPlayers,
}
