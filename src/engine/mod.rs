//! Раздача холдема вокруг ядра оценки: сдача карт, открытие улиц,
//! текущие лидеры после каждой улицы.
//!
//! Ставок и банков здесь нет.

pub mod errors;
pub mod round;

pub use errors::EngineError;
pub use round::HoldemRound;

/// RNG интерфейс для engine.
/// Реализации – в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
