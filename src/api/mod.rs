//! Внешнее представление результатов.
//!
//! - DTO (dto.rs) — сериализуемые структуры для CLI/фронта;
//! - запросы (queries.rs) — сборка DTO из раздачи, только чтение.

pub mod dto;
pub mod queries;

pub use dto::*;
pub use queries::*;
