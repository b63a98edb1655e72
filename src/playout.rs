//! Random games.
//!
//! Plays uniformly random legal moves for alternating players. Used by the
//! `random` subcommand and by the consistency tests, which need long games
//! with plenty of merges and captures.

use crate::board::Point;
use crate::constants::MAX_GAME_LEN_FACTOR;
use crate::game::Game;

/// Summary of a random game.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlayoutStats {
    /// Moves accepted.
    pub moves: usize,
    /// Opposing stones removed over the whole game.
    pub captured: usize,
    /// Suicide attempts that were rejected and retried elsewhere.
    pub rejected: usize,
}

/// Play up to `max_moves` random legal moves on `game`.
///
/// Stops early when the player to move has no legal point left (there is no
/// passing), or after three times the board area. `after_move` is called
/// after every accepted move.
pub fn random_game_with<F>(
    game: &mut Game,
    rng: &mut fastrand::Rng,
    max_moves: usize,
    mut after_move: F,
) -> PlayoutStats
where
    F: FnMut(&Game),
{
    let size = usize::from(game.size());
    let limit = max_moves.min(size * size * MAX_GAME_LEN_FACTOR);
    let mut stats = PlayoutStats::default();

    while stats.moves < limit {
        let mut candidates: Vec<Point> = game
            .board()
            .points()
            .filter(|&p| game.board().get(p).is_none())
            .collect();
        rng.shuffle(&mut candidates);

        let mut played = false;
        for p in candidates {
            let (x, y) = (p.x + 1, p.y + 1);
            match game.play_next(x, y) {
                Ok(outcome) => {
                    stats.moves += 1;
                    stats.captured += outcome.captured.len();
                    after_move(game);
                    played = true;
                    break;
                }
                Err(_) => stats.rejected += 1,
            }
        }
        if !played {
            break;
        }
    }
    tracing::debug!(
        game = game.id(),
        moves = stats.moves,
        captured = stats.captured,
        "random game finished"
    );
    stats
}

/// [`random_game_with`] without a per-move callback.
pub fn random_game(game: &mut Game, rng: &mut fastrand::Rng, max_moves: usize) -> PlayoutStats {
    random_game_with(game, rng, max_moves, |_| {})
}
