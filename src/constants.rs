//! Constants for board geometry, cell encoding and playout limits.
//!
//! Board size is a runtime parameter of each game; the values here are the
//! defaults used by the command-line front end.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN) when none is given on the command line.
pub const DEFAULT_BOARD_SIZE: u8 = 19;

/// Size of the board used by the capture regression demo.
pub const DEMO_BOARD_SIZE: u8 = 13;

// =============================================================================
// Cell Encoding
// =============================================================================

/// Numeric code of an empty point in `board_state` projections.
pub const EMPTY_CODE: u8 = 0;

/// Numeric code of a stone owned by player A (the first mover).
pub const PLAYER_A_CODE: u8 = 1;

/// Numeric code of a stone owned by player B.
pub const PLAYER_B_CODE: u8 = 2;

// =============================================================================
// Playout Parameters
// =============================================================================

/// Upper bound on moves in a random game, as a multiple of the board area.
/// Captures free points again, so a game can run longer than the area.
pub const MAX_GAME_LEN_FACTOR: usize = 3;

/// Default number of moves attempted by the `random` subcommand.
pub const DEFAULT_RANDOM_MOVES: usize = 200;

// =============================================================================
// Neighbor Offsets
// =============================================================================

/// Offsets to the orthogonal neighbors of a point as (dx, dy).
/// Order: North, South, East, West
pub const DELTA: [(i16, i16); 4] = [(0, -1), (0, 1), (1, 0), (-1, 0)];
