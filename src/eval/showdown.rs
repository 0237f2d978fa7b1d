use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::PlayerId;

use super::errors::EvalError;
use super::hand_rank::{HandCategory, HandEvaluation};
use super::ranker::best_hand;

/// Лучшая рука одного игрока на текущий момент.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerHandSummary {
    pub player_id: PlayerId,
    pub best: HandEvaluation,
}

/// Итог сравнения рук: победитель (или несколько при сплите).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowdownResult {
    pub winners: Vec<PlayerId>,
    pub category: HandCategory,
    pub tie_value: u32,
}

impl ShowdownResult {
    pub fn is_split(&self) -> bool {
        self.winners.len() > 1
    }
}

/// Найти всех игроков с максимальной парой (категория, tie_value).
pub fn resolve_winners(summaries: &[PlayerHandSummary]) -> Result<ShowdownResult, EvalError> {
    let mut best: Option<&HandEvaluation> = None;
    let mut winners: Vec<PlayerId> = Vec::new();

    for summary in summaries {
        let hand = &summary.best;
        match best {
            None => {
                best = Some(hand);
                winners.clear();
                winners.push(summary.player_id);
            }
            Some(br) => {
                if hand.beats(br) {
                    best = Some(hand);
                    winners.clear();
                    winners.push(summary.player_id);
                } else if hand.ties_with(br) {
                    winners.push(summary.player_id);
                }
            }
        }
    }

    let best = best.ok_or(EvalError::NoPlayers)?;
    debug!(
        "resolve_winners: {:?} с {:?} ({})",
        winners, best.category, best.tie_value
    );

    Ok(ShowdownResult {
        winners,
        category: best.category,
        tie_value: best.tie_value,
    })
}

/// Посчитать лучшую руку каждого игрока.
pub fn evaluate_players(
    players: &[(PlayerId, Vec<Card>)],
) -> Result<Vec<PlayerHandSummary>, EvalError> {
    players
        .iter()
        .map(|(player_id, cards)| {
            Ok(PlayerHandSummary {
                player_id: *player_id,
                best: best_hand(cards)?,
            })
        })
        .collect()
}

/// Ranker + resolver за один вызов.
pub fn showdown(players: &[(PlayerId, Vec<Card>)]) -> Result<ShowdownResult, EvalError> {
    if players.is_empty() {
        return Err(EvalError::NoPlayers);
    }
    resolve_winners(&evaluate_players(players)?)
}
