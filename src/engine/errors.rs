use crate::config::ConfigError;
use crate::domain::PlayerId;
use crate::eval::EvalError;

use thiserror::Error;

/// Ошибки раздачи.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Неверная конфигурация: {0}")]
    Config(#[from] ConfigError),

    #[error("Ошибка оценки рук: {0}")]
    Eval(#[from] EvalError),

    #[error("Игрок {0} не найден в раздаче")]
    PlayerNotFound(PlayerId),

    #[error("Недостаточно активных игроков")]
    NotEnoughPlayers,

    #[error("Раздача уже дошла до шоудауна")]
    RoundFinished,

    #[error("В колоде не хватает карт: нужно {needed}, осталось {left}")]
    DeckExhausted { needed: usize, left: usize },
}
