use log::info;

use crate::config::RoundConfig;
use crate::domain::{Card, Deck, DrawFrom, HandId, PlayerId, PlayerInHand, PlayerStatus, Street};
use crate::eval::{evaluate_players, resolve_winners, PlayerHandSummary, ShowdownResult};
use crate::infra::IdGenerator;

use super::errors::EngineError;
use super::RandomSource;

/// Сколько карманных карт у игрока.
pub const HOLE_CARDS: usize = 2;

/// Одна раздача: колода, борд, игроки и текущая улица.
#[derive(Clone, Debug)]
pub struct HoldemRound {
    hand_id: HandId,
    deck: Deck,
    board: Vec<Card>,
    street: Street,
    players: Vec<PlayerInHand>,
}

impl HoldemRound {
    /// Перемешать колоду, посадить игроков и раздать карманные карты.
    pub fn new<R: RandomSource>(
        config: &RoundConfig,
        ids: &IdGenerator,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        config.validate()?;

        let mut deck = Deck::standard_52();
        deck.shuffle(rng);

        let mut players: Vec<PlayerInHand> = (0..config.players)
            .map(|_| PlayerInHand::new(ids.next_player_id()))
            .collect();

        // Сдаём по одной карте по кругу.
        for _ in 0..HOLE_CARDS {
            for p in players.iter_mut() {
                let card = deck.draw_one().ok_or(EngineError::DeckExhausted {
                    needed: 1,
                    left: 0,
                })?;
                p.hole_cards.push(card);
            }
        }

        let hand_id = ids.next_hand_id();
        info!("Раздача {hand_id}: {} игроков", players.len());

        Ok(Self {
            hand_id,
            deck,
            board: Vec::new(),
            street: Street::Preflop,
            players,
        })
    }

    pub fn hand_id(&self) -> HandId {
        self.hand_id
    }

    pub fn street(&self) -> Street {
        self.street
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn players(&self) -> &[PlayerInHand] {
        &self.players
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Открыть следующую улицу (+3, +1, +1, затем шоудаун).
    pub fn advance(&mut self) -> Result<Street, EngineError> {
        let (next, reveal) = self.street.next().ok_or(EngineError::RoundFinished)?;

        if self.deck.len() < reveal {
            return Err(EngineError::DeckExhausted {
                needed: reveal,
                left: self.deck.len(),
            });
        }
        let cards = self.deck.draw(reveal, DrawFrom::Top);
        self.board.extend(cards);
        self.street = next;

        info!(
            "Раздача {}: {:?}, борд {:?}",
            self.hand_id,
            self.street,
            self.board.iter().map(Card::to_string).collect::<Vec<_>>()
        );
        Ok(next)
    }

    /// Игрок сбрасывает карты. Последний активный игрок сфолдить не может.
    pub fn fold(&mut self, player_id: PlayerId) -> Result<(), EngineError> {
        let active = self.players.iter().filter(|p| p.is_in_hand()).count();

        let player = self
            .players
            .iter_mut()
            .find(|p| p.player_id == player_id)
            .ok_or(EngineError::PlayerNotFound(player_id))?;

        if !player.is_in_hand() {
            return Ok(());
        }
        if active <= 1 {
            return Err(EngineError::NotEnoughPlayers);
        }
        player.status = PlayerStatus::Folded;
        info!("Раздача {}: игрок {player_id} сфолдил", self.hand_id);
        Ok(())
    }

    /// Лучшие руки всех активных игроков на текущем борде.
    pub fn player_hands(&self) -> Result<Vec<PlayerHandSummary>, EngineError> {
        let sets: Vec<(PlayerId, Vec<Card>)> = self
            .players
            .iter()
            .filter(|p| p.is_in_hand())
            .map(|p| (p.player_id, p.card_set(&self.board)))
            .collect();
        Ok(evaluate_players(&sets)?)
    }

    /// Текущие лидеры. Каждый вызов пересчитывает всё с нуля.
    pub fn leaders(&self) -> Result<ShowdownResult, EngineError> {
        let hands = self.player_hands()?;
        let result = resolve_winners(&hands)?;
        info!(
            "Раздача {}: лидеры на {:?} – {:?} ({:?})",
            self.hand_id, self.street, result.winners, result.category
        );
        Ok(result)
    }
}
