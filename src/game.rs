//! Game sequencing: turn order, membership and the move log.
//!
//! A [`Game`] owns the board, the group tracker and the append-only log of
//! accepted moves. Moves enter through [`Game::submit_move`], which takes
//! 1-indexed coordinates and either applies the move completely or rejects it
//! without changing anything.

use std::fmt;
use std::time::SystemTime;

use crate::board::{Board, Color, Point, cell_code};
use crate::capture::{PlacementKind, resolve_captures, simulate_placement};
use crate::error::{GameError, MoveError, ReplayError};
use crate::groups::{Group, GroupTracker};
use crate::liberties::count_liberties;

/// Opaque player identifier supplied by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An accepted move. Immutable once logged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    point: Point,
    player: PlayerId,
    timestamp: SystemTime,
}

impl Move {
    /// A move at the 0-indexed point `point`. Whether it is legal is decided
    /// when it is submitted or replayed.
    pub fn new(point: Point, player: impl Into<PlayerId>, timestamp: SystemTime) -> Self {
        Self {
            point,
            player: player.into(),
            timestamp,
        }
    }

    /// Board point of the stone (0-indexed).
    pub fn point(&self) -> Point {
        self.point
    }

    /// 1-indexed (column, row) of the stone, as accepted by
    /// [`Game::submit_move`].
    pub fn coords(&self) -> (u16, u16) {
        self.point.to_one_based()
    }

    pub fn player(&self) -> &PlayerId {
        &self.player
    }

    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }
}

/// What an accepted move did to the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub point: Point,
    pub color: Color,
    /// Opposing stones removed by this move.
    pub captured: Vec<Point>,
}

#[derive(Clone, Debug)]
pub struct Game {
    id: u64,
    player_a: PlayerId,
    player_b: PlayerId,
    moves: Vec<Move>,
    board: Board,
    groups: GroupTracker,
}

impl Game {
    /// Start a game on an empty `size`x`size` board. Player A moves first.
    pub fn new(
        id: u64,
        player_a: impl Into<PlayerId>,
        player_b: impl Into<PlayerId>,
        size: u8,
    ) -> Result<Self, GameError> {
        if size == 0 {
            return Err(GameError::InvalidSize(size));
        }
        let game = Game {
            id,
            player_a: player_a.into(),
            player_b: player_b.into(),
            moves: Vec::new(),
            board: Board::new(size),
            groups: GroupTracker::new(size),
        };
        tracing::info!(
            game = id,
            size,
            player_a = %game.player_a,
            player_b = %game.player_b,
            "new game"
        );
        Ok(game)
    }

    /// Rebuild a game by submitting every move of `log` in order.
    ///
    /// Timestamps are carried over from the log.
    pub fn replay(
        id: u64,
        player_a: impl Into<PlayerId>,
        player_b: impl Into<PlayerId>,
        size: u8,
        log: &[Move],
    ) -> Result<Self, ReplayError> {
        let mut game = Game::new(id, player_a, player_b, size)?;
        for (index, mv) in log.iter().enumerate() {
            game.apply(Some(mv.point), &mv.player, mv.timestamp)
                .map_err(|source| ReplayError::Move { index, source })?;
        }
        Ok(game)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn size(&self) -> u8 {
        self.board.size()
    }

    pub fn player_a(&self) -> &PlayerId {
        &self.player_a
    }

    pub fn player_b(&self) -> &PlayerId {
        &self.player_b
    }

    /// Accepted moves, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn groups(&self) -> &GroupTracker {
        &self.groups
    }

    /// Stone color played by `player`, or `None` for an outsider.
    pub fn color_of(&self, player: &PlayerId) -> Option<Color> {
        if *player == self.player_a {
            Some(Color::Black)
        } else if *player == self.player_b {
            Some(Color::White)
        } else {
            None
        }
    }

    /// Player expected to move next: the one who did not make the last move,
    /// or player A on an empty log.
    ///
    /// A convenience for callers; [`Game::submit_move`] enforces turn order on
    /// its own.
    pub fn next_player(&self) -> &PlayerId {
        match self.moves.last() {
            Some(last) if last.player == self.player_a => &self.player_b,
            _ => &self.player_a,
        }
    }

    /// Read-only projection of the board, `board_state()[y][x]`.
    pub fn board_state(&self) -> Vec<Vec<Option<Color>>> {
        self.board.rows()
    }

    /// The board as cell codes: 0 empty, 1 player A, 2 player B.
    pub fn board_codes(&self) -> Vec<Vec<u8>> {
        self.board
            .rows()
            .into_iter()
            .map(|row| row.into_iter().map(cell_code).collect())
            .collect()
    }

    /// The group containing the 0-indexed point `p`, if occupied.
    pub fn group_at(&self, p: Point) -> Option<&Group> {
        if !self.board.contains(p) {
            return None;
        }
        self.groups.group_at(p).and_then(|id| self.groups.get(id))
    }

    /// Liberties of the group at the 0-indexed point `p` (0 if empty).
    pub fn liberties_at(&self, p: Point) -> usize {
        self.group_at(p)
            .map_or(0, |g| count_liberties(&self.board, g))
    }

    /// Play a stone for `player` at the 1-indexed point (`x`, `y`), where
    /// (1, 1) is the top-left corner.
    pub fn submit_move(
        &mut self,
        x: u8,
        y: u8,
        player: &PlayerId,
    ) -> Result<MoveOutcome, MoveError> {
        self.apply(Point::from_one_based(x, y), player, SystemTime::now())
    }

    /// Build a move at the 1-indexed point (`x`, `y`) for whoever is next to
    /// move, stamped with the current time. The game is not changed.
    pub fn new_move(&self, x: u8, y: u8) -> Result<Move, MoveError> {
        let p = Point::from_one_based(x, y)
            .filter(|&p| self.board.contains(p))
            .ok_or(MoveError::OutOfBounds)?;
        Ok(Move::new(p, self.next_player().clone(), SystemTime::now()))
    }

    /// Play the 1-indexed point (`x`, `y`) for whoever is next to move.
    pub fn play_next(&mut self, x: u8, y: u8) -> Result<MoveOutcome, MoveError> {
        let player = self.next_player().clone();
        self.submit_move(x, y, &player)
    }

    fn check_player(&self, player: &PlayerId) -> Result<Color, MoveError> {
        let color = self.color_of(player).ok_or(MoveError::PlayerNotInGame)?;
        let in_turn = match self.moves.last() {
            Some(last) => last.player != *player,
            None => *player == self.player_a,
        };
        if !in_turn {
            return Err(MoveError::OutOfTurn);
        }
        Ok(color)
    }

    /// Validate and apply a move at the 0-indexed point `p`; `None` stands
    /// for a coordinate that could not be translated.
    ///
    /// Every check runs before the first mutation, so an error leaves the
    /// game untouched.
    fn apply(
        &mut self,
        p: Option<Point>,
        player: &PlayerId,
        timestamp: SystemTime,
    ) -> Result<MoveOutcome, MoveError> {
        let result = self.try_apply(p, player, timestamp);
        if let Err(err) = &result {
            tracing::debug!(game = self.id, player = %player, at = ?p, %err, "move rejected");
        }
        result
    }

    fn try_apply(
        &mut self,
        p: Option<Point>,
        player: &PlayerId,
        timestamp: SystemTime,
    ) -> Result<MoveOutcome, MoveError> {
        let color = self.check_player(player)?;
        let p = p
            .filter(|&p| self.board.contains(p))
            .ok_or(MoveError::OutOfBounds)?;
        if self.board.get(p).is_some() {
            return Err(MoveError::PointOccupied);
        }
        let plan = simulate_placement(&self.board, &self.groups, p, color);
        if plan.kind == PlacementKind::Suicide {
            return Err(MoveError::SuicideMove);
        }

        self.board.place(p, color)?;
        let own = self.groups.add_stone(&self.board, p, color);
        let captured = resolve_captures(&mut self.board, &mut self.groups, p, color);
        self.moves.push(Move::new(p, player.clone(), timestamp));
        debug_assert!(
            self.groups
                .get(own)
                .is_some_and(|g| count_liberties(&self.board, g) > 0),
            "accepted move left its own group without liberties"
        );
        tracing::debug!(
            game = self.id,
            n = self.moves.len(),
            player = %player,
            at = %p,
            captured = captured.len(),
            "move accepted"
        );
        Ok(MoveOutcome {
            point: p,
            color,
            captured,
        })
    }
}
