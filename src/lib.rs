//! Go-Referee: a rules engine for two-player Go.
//!
//! This crate tracks the board of a Go game, validates moves against turn
//! order and game membership, and maintains groups, liberties and captures
//! incrementally as stones are played.
//!
//! ## Modules
//!
//! - [`constants`] - Default sizes, cell codes and playout limits
//! - [`board`] - Points, stone colors and the cell grid
//! - [`groups`] - Group arena and point-to-group index
//! - [`liberties`] - Liberty counting
//! - [`capture`] - Capture resolution and suicide detection
//! - [`error`] - Move, game and replay errors
//! - [`game`] - Move validation, sequencing and the move log
//! - [`shared`] - Mutex-guarded game handle for concurrent submitters
//! - [`playout`] - Random games
//! - [`console`] - Text command session over a game
//!
//! ## Example
//!
//! ```
//! use go_referee::game::{Game, PlayerId};
//!
//! let mut game = Game::new(1, "alice", "bob", 3).unwrap();
//! game.submit_move(1, 1, &PlayerId::from("alice")).unwrap();
//! game.submit_move(2, 1, &PlayerId::from("bob")).unwrap();
//! assert_eq!(game.board_codes(), vec![vec![1, 2, 0], vec![0, 0, 0], vec![0, 0, 0]]);
//! ```

pub mod board;
pub mod capture;
pub mod console;
pub mod constants;
pub mod error;
pub mod game;
pub mod groups;
pub mod liberties;
pub mod playout;
pub mod shared;
