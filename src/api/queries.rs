use crate::domain::PlayerId;
use crate::engine::{EngineError, HoldemRound};
use crate::eval::{describe_hand, ShowdownResult};

use super::dto::{CardDto, HandEvaluationDto, PlayerReportDto, ShowdownDto, StreetReportDto};

/// Собрать отчёт по текущей улице: руки активных игроков и лидеры.
pub fn build_street_report(round: &HoldemRound) -> Result<StreetReportDto, EngineError> {
    let hands = round.player_hands()?;
    let leaders = round.leaders()?;

    let players = hands
        .iter()
        .map(|summary| PlayerReportDto {
            player_id: summary.player_id,
            hole_cards: hole_cards_dto(round, summary.player_id),
            best: HandEvaluationDto::from(&summary.best),
        })
        .collect();

    Ok(StreetReportDto {
        hand_id: round.hand_id(),
        street: round.street(),
        board: round.board().iter().map(CardDto::from).collect(),
        players,
        leaders: build_showdown_dto(&leaders),
    })
}

pub fn build_showdown_dto(result: &ShowdownResult) -> ShowdownDto {
    ShowdownDto {
        winners: result.winners.clone(),
        category: result.category,
        description: describe_hand(result.category).to_string(),
        tie_value: result.tie_value,
    }
}

fn hole_cards_dto(round: &HoldemRound, player_id: PlayerId) -> Vec<CardDto> {
    round
        .players()
        .iter()
        .find(|p| p.player_id == player_id)
        .map(|p| p.hole_cards.iter().map(CardDto::from).collect())
        .unwrap_or_default()
}
