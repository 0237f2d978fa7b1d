//! Доменная модель: карты, колода, игроки и улицы раздачи.

pub mod card;
pub mod deck;
pub mod hand;
pub mod player;

pub type PlayerId = u64;
pub type HandId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
