use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::PlayerId;

/// Статус игрока в текущей раздаче.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Игрок участвует в раздаче.
    Active,
    /// Игрок сфолдил и в шоудауне не участвует.
    Folded,
}

/// Игрок в раздаче: id, статус, карманные карты.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerInHand {
    pub player_id: PlayerId,
    pub status: PlayerStatus,
    /// Карманные карты (2 для холдема).
    pub hole_cards: Vec<Card>,
}

impl PlayerInHand {
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            status: PlayerStatus::Active,
            hole_cards: Vec::new(),
        }
    }

    pub fn is_in_hand(&self) -> bool {
        matches!(self.status, PlayerStatus::Active)
    }

    /// Набор карт игрока для оценки: карманные + борд (копия).
    pub fn card_set(&self, board: &[Card]) -> Vec<Card> {
        let mut all = Vec::with_capacity(self.hole_cards.len() + board.len());
        all.extend_from_slice(&self.hole_cards);
        all.extend_from_slice(board);
        all
    }
}
