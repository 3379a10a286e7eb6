use crate::error::TurnError;
use crate::result::TurnResult;

use super::state::next_player;
use super::{Board, Game};

impl Game {
    /// Turns the card at `index` for `player`.
    ///
    /// The first pick of a round flips a card face-up. The second pick
    /// compares both cards: a match removes the pair, scores it, and lets the
    /// player go again; a miss passes the turn to the other player. Finding
    /// the last pair ends the game and makes the finder the winner.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not `player`'s turn, `index` is outside the
    /// board, the card has been removed, or the card is already face-up. A
    /// failed turn leaves the game unchanged.
    pub fn turn_card(&self, index: usize, player: u8) -> Result<TurnResult, TurnError> {
        let outcome = self.board.with(|board| board.turn(index, player));

        match &outcome {
            Ok(result) if result.game_over => {
                log::info!("player {player} found the last pair and wins");
            }
            Ok(result) if result.turn_complete => {
                log::debug!(
                    "player {player} completed a round at {index}, match: {}, next: {}",
                    result.match_found,
                    result.next_turn_player
                );
            }
            Ok(result) => log::trace!("player {player} flipped {} at {index}", result.card),
            Err(err) => log::debug!("player {player} pick at {index} rejected: {err}"),
        }

        outcome
    }
}

impl Board {
    fn turn(&mut self, index: usize, player: u8) -> Result<TurnResult, TurnError> {
        if player != self.current_player {
            return Err(TurnError::NotYourTurn);
        }

        let face = self
            .cards
            .get(index)
            .ok_or(TurnError::InvalidIndex)?
            .clone()
            .ok_or(TurnError::AlreadyRemoved)?;

        if self.turned == Some(index) {
            return Err(TurnError::AlreadyTurned);
        }

        let seat = usize::from(player);
        let mut result = TurnResult {
            player,
            next_turn_player: player,
            turn_complete: false,
            match_found: false,
            new_score: self.scores[seat],
            card: face,
            game_over: false,
            winner: None,
        };

        let Some(first) = self.turned.replace(index) else {
            return Ok(result);
        };
        self.turned = None;
        result.turn_complete = true;

        if self.cards[first].as_ref() == Some(&result.card) {
            self.solved[first] = self.cards[first].take();
            self.solved[index] = self.cards[index].take();
            self.scores[seat] += 1;
            self.pairs_left -= 1;

            result.match_found = true;
            result.new_score = self.scores[seat];
            if self.pairs_left == 0 {
                self.winner = Some(player);
                result.game_over = true;
                result.winner = Some(player);
            }
        } else {
            self.current_player = next_player(player);
        }

        result.next_turn_player = self.current_player;
        Ok(result)
    }
}
