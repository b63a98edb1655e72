//! A game handle that can be shared between submitters on different threads.
//!
//! All access goes through one mutex, so the turn check, the board update and
//! the log append of a move happen as a single step with respect to any other
//! submission.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::board::Color;
use crate::error::MoveError;
use crate::game::{Game, MoveOutcome, PlayerId};

#[derive(Clone, Debug)]
pub struct SharedGame {
    inner: Arc<Mutex<Game>>,
}

impl SharedGame {
    pub fn new(game: Game) -> Self {
        Self {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    // A move's state changes all happen before anything that can panic, so a
    // poisoned game is still consistent.
    fn lock(&self) -> MutexGuard<'_, Game> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`Game::submit_move`].
    pub fn submit_move(&self, x: u8, y: u8, player: &PlayerId) -> Result<MoveOutcome, MoveError> {
        self.lock().submit_move(x, y, player)
    }

    pub fn board_state(&self) -> Vec<Vec<Option<Color>>> {
        self.lock().board_state()
    }

    pub fn move_count(&self) -> usize {
        self.lock().moves().len()
    }

    /// A copy of the game as of now.
    pub fn snapshot(&self) -> Game {
        self.lock().clone()
    }
}
