use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::Street;
use crate::domain::PlayerId;
use crate::eval::{describe_hand, DuelOutcome, DuelWinner, HandCategory, HandEvaluation};

/// DTO карты: буквенная и символьная форма + value.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDto {
    pub text: String,
    pub glyph: String,
    pub value: u32,
}

impl From<&Card> for CardDto {
    fn from(card: &Card) -> Self {
        Self {
            text: card.text(),
            glyph: card.to_string(),
            value: card.value(),
        }
    }
}

/// DTO лучшей комбинации игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvaluationDto {
    pub cards: Vec<CardDto>,
    pub category: HandCategory,
    pub description: String,
    pub tie_value: u32,
}

impl From<&HandEvaluation> for HandEvaluationDto {
    fn from(eval: &HandEvaluation) -> Self {
        Self {
            cards: eval.cards.iter().map(CardDto::from).collect(),
            category: eval.category,
            description: describe_hand(eval.category).to_string(),
            tie_value: eval.tie_value,
        }
    }
}

/// DTO игрока в отчёте по улице.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerReportDto {
    pub player_id: PlayerId,
    pub hole_cards: Vec<CardDto>,
    pub best: HandEvaluationDto,
}

/// DTO итога шоудауна (или текущего лидерства).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowdownDto {
    pub winners: Vec<PlayerId>,
    pub category: HandCategory,
    pub description: String,
    pub tie_value: u32,
}

/// Отчёт после открытия улицы.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreetReportDto {
    pub hand_id: u64,
    pub street: Street,
    pub board: Vec<CardDto>,
    pub players: Vec<PlayerReportDto>,
    pub leaders: ShowdownDto,
}

/// DTO одного розыгрыша дуэли по одной карте.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DuelDto {
    pub round: usize,
    pub first: CardDto,
    pub second: CardDto,
    pub winner: DuelWinner,
}

impl From<&DuelOutcome> for DuelDto {
    fn from(outcome: &DuelOutcome) -> Self {
        Self {
            round: outcome.round,
            first: CardDto::from(&outcome.first),
            second: CardDto::from(&outcome.second),
            winner: outcome.winner,
        }
    }
}
