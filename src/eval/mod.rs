//! Модуль оценки силы покерных рук.
//!
//! Цепочка: `combinations` → `classify` → `best_hand` (на игрока)
//! → `resolve_winners` (между игроками).
//! Отдельно `duel`: сравнение одиночных карт по `value()`.

pub mod classifier;
pub mod combinations;
pub mod duel;
pub mod errors;
pub mod hand_rank;
pub mod ranker;
pub mod showdown;
pub mod straight;

pub use classifier::classify;
pub use combinations::{binomial, combinations, hand_size, HAND_SIZE};
pub use duel::{high_card_duel, play_duels, DuelOutcome, DuelWinner};
pub use errors::EvalError;
pub use hand_rank::{describe_hand, HandCategory, HandEvaluation};
pub use ranker::{best_hand, evaluate_best_hand, select_best};
pub use showdown::{evaluate_players, resolve_winners, showdown, PlayerHandSummary, ShowdownResult};
pub use straight::StraightKind;
