//! Инфраструктура вокруг движка:
//! - генерация ID;
//! - RNG-реализации для перемешивания колоды.

pub mod ids;
pub mod rng;

pub use ids::*;
pub use rng::*;
