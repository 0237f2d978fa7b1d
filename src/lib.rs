//! Оценка покерных рук для холдема.
//!
//! Из карманных и общих карт перебираем все 5-карточные комбинации,
//! определяем категорию и tie_value каждой, выбираем лучшую для игрока
//! и находим победителей (включая сплит) между игроками.
//!
//! Основной вход: `eval::best_hand`, `eval::resolve_winners`.

pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
