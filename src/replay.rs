use log::{info, warn};

use crate::config::ReplayConfig;
use crate::error::ReplayError;
use crate::game::{Game, MoveResult, Outcome, Player};

/// One column fed to the engine and what came of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub index: usize,
    pub column: usize,
    /// Player to move when the column was fed
    pub player: Player,
    /// Landing row, when the piece was placed
    pub row: Option<usize>,
    pub result: MoveResult,
}

/// Ordered record of a replayed move sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    moves: Vec<MoveRecord>,
    outcome: Option<Outcome>,
}

impl Transcript {
    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    /// How the game stood when the replay finished
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn last_result(&self) -> Option<MoveResult> {
        self.moves.last().map(|m| m.result)
    }
}

/// Feed `columns` to `game` in order, recording each result.
///
/// Out-of-range columns always fail. Rejected moves fail in strict mode and
/// are recorded and skipped otherwise.
pub fn replay(
    game: &mut Game,
    columns: &[usize],
    config: &ReplayConfig,
) -> Result<Transcript, ReplayError> {
    let mut transcript = Transcript::default();

    for (index, &column) in columns.iter().enumerate() {
        if config.stop_at_terminal && game.is_over() {
            info!(
                "game over after move {}, ignoring {} remaining move(s)",
                index,
                columns.len() - index
            );
            break;
        }

        let player = game.active_player();
        let row = game
            .find_landing_row(column)
            .map_err(|source| ReplayError::Engine { index, source })?;
        let result = game
            .drop_piece(column)
            .map_err(|source| ReplayError::Engine { index, source })?;

        if !result.is_accepted() {
            if config.strict {
                return Err(ReplayError::Rejected {
                    index,
                    column,
                    result,
                });
            }
            warn!("move {index}: column {column} rejected ({result})");
        }

        transcript.moves.push(MoveRecord {
            index,
            column,
            player,
            row: row.filter(|_| result.is_accepted()),
            result,
        });
    }

    transcript.outcome = game.outcome();
    match transcript.outcome {
        Some(Outcome::Winner(player)) => info!("{player} won"),
        Some(Outcome::Tie) => info!("game tied"),
        None => info!("game still in progress, {} to move", game.active_player()),
    }

    Ok(transcript)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    fn config(strict: bool, stop_at_terminal: bool) -> ReplayConfig {
        ReplayConfig {
            strict,
            stop_at_terminal,
        }
    }

    #[test]
    fn test_replay_records_each_move() {
        let mut game = Game::new();
        let transcript = replay(&mut game, &[3, 3, 4], &ReplayConfig::default()).unwrap();

        let moves = transcript.moves();
        assert_eq!(moves.len(), 3);
        assert_eq!(moves[0].player, Player::One);
        assert_eq!(moves[0].row, Some(5));
        assert_eq!(moves[1].player, Player::Two);
        assert_eq!(moves[1].row, Some(4));
        assert_eq!(moves[2].column, 4);
        assert_eq!(transcript.outcome(), None);
        assert_eq!(transcript.last_result(), Some(MoveResult::Continue));
        assert_eq!(game.pieces_placed(), 3);
    }

    #[test]
    fn test_replay_reports_win() {
        let mut game = Game::new();
        let transcript =
            replay(&mut game, &[0, 0, 1, 1, 2, 2, 3], &ReplayConfig::default()).unwrap();
        assert_eq!(transcript.outcome(), Some(Outcome::Winner(Player::One)));
        assert_eq!(transcript.last_result(), Some(MoveResult::Win(Player::One)));
    }

    #[test]
    fn test_stop_at_terminal_ignores_trailing_moves() {
        let mut game = Game::new();
        let transcript =
            replay(&mut game, &[0, 0, 1, 1, 2, 2, 3, 5, 5], &config(true, true)).unwrap();
        assert_eq!(transcript.moves().len(), 7);
        assert_eq!(game.pieces_placed(), 7);
    }

    #[test]
    fn test_strict_rejects_moves_after_game_over() {
        let mut game = Game::new();
        let err = replay(&mut game, &[0, 0, 1, 1, 2, 2, 3, 5], &config(true, false)).unwrap_err();
        assert!(matches!(
            err,
            ReplayError::Rejected {
                index: 7,
                column: 5,
                result: MoveResult::GameAlreadyOver
            }
        ));
    }

    #[test]
    fn test_strict_rejects_full_column() {
        let mut game = Game::new();
        let columns = [3; 7];
        let err = replay(&mut game, &columns, &config(true, true)).unwrap_err();
        assert!(matches!(
            err,
            ReplayError::Rejected {
                index: 6,
                column: 3,
                result: MoveResult::ColumnFull
            }
        ));
        assert_eq!(game.pieces_placed(), 6);
    }

    #[test]
    fn test_lenient_records_rejections_and_continues() {
        let mut game = Game::new();
        let transcript = replay(&mut game, &[3, 3, 3, 3, 3, 3, 3, 4], &config(false, true)).unwrap();

        let moves = transcript.moves();
        assert_eq!(moves.len(), 8);
        assert_eq!(moves[6].result, MoveResult::ColumnFull);
        assert_eq!(moves[6].row, None);
        // Rejected move does not consume player 1's turn
        assert_eq!(moves[6].player, Player::One);
        assert_eq!(moves[7].player, Player::One);
        assert_eq!(moves[7].row, Some(5));
    }

    #[test]
    fn test_out_of_range_column_always_fails() {
        let mut game = Game::new();
        let err = replay(&mut game, &[2, 9], &config(false, true)).unwrap_err();
        assert!(matches!(
            err,
            ReplayError::Engine {
                index: 1,
                source: EngineError::ColumnOutOfRange { column: 9, .. }
            }
        ));
        assert_eq!(game.pieces_placed(), 1);
    }
}
