//! Capture resolution and suicide detection.
//!
//! [`simulate_placement`] predicts what a stone would do without touching the
//! board, so an illegal move can be rejected before any state changes.
//! [`resolve_captures`] runs after the stone has been placed and removes every
//! adjacent opposing group left without liberties.

use crate::board::{Board, Color, Point};
use crate::groups::{GroupId, GroupTracker};
use crate::liberties::{group_liberties, has_liberty_besides};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlacementKind {
    /// The stone is legal and captures nothing.
    Normal,
    /// The stone is legal and removes at least one opposing group.
    Capture,
    /// The stone's group would have no liberties and nothing is captured.
    Suicide,
}

/// Predicted effect of placing a stone on an empty point.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Placement {
    pub point: Point,
    pub color: Color,
    pub kind: PlacementKind,
    /// Friendly groups the stone joins.
    pub merge_friendly: Vec<GroupId>,
    /// Opposing groups whose last liberty is `point`.
    pub clear_enemy: Vec<GroupId>,
}

/// Work out what placing `color` on the empty point `p` would do.
///
/// `p` is assumed in bounds and empty. An opposing neighbor group dies when
/// `p` is its only liberty. The move is suicide when it captures nothing, has
/// no empty neighbor and every friendly neighbor group would lose its last
/// liberty too.
pub fn simulate_placement(board: &Board, tracker: &GroupTracker, p: Point, color: Color) -> Placement {
    let merge_friendly = tracker.adjacent_groups(board, p, color);
    let clear_enemy: Vec<GroupId> = tracker
        .adjacent_groups(board, p, color.opponent())
        .into_iter()
        .filter(|&id| {
            tracker
                .get(id)
                .is_some_and(|g| !has_liberty_besides(board, g, p))
        })
        .collect();

    let kind = if !clear_enemy.is_empty() {
        PlacementKind::Capture
    } else {
        let open_neighbor = board.neighbors(p).any(|n| board.get(n).is_none());
        let friend_breathes = merge_friendly.iter().any(|&id| {
            tracker
                .get(id)
                .is_some_and(|g| has_liberty_besides(board, g, p))
        });
        if open_neighbor || friend_breathes {
            PlacementKind::Normal
        } else {
            PlacementKind::Suicide
        }
    };

    Placement {
        point: p,
        color,
        kind,
        merge_friendly,
        clear_enemy,
    }
}

/// Remove every opposing group adjacent to `p` that has no liberties left.
///
/// Called after a stone of `color` has been placed on `p` and incorporated into
/// the tracker. Several disjoint groups may die at once. Returns all removed
/// points.
pub fn resolve_captures(
    board: &mut Board,
    tracker: &mut GroupTracker,
    p: Point,
    color: Color,
) -> Vec<Point> {
    let mut captured = Vec::new();
    for id in tracker.adjacent_groups(board, p, color.opponent()) {
        if group_liberties(board, tracker, id) == 0 {
            let removed = tracker.remove_group(board, id);
            tracing::debug!(at = %p, stones = removed.len(), "captured group");
            captured.extend(removed);
        }
    }
    captured
}
