//! Liberty counting.
//!
//! Liberties are always recomputed from the current board and group
//! membership; nothing here is cached across moves.

use std::collections::HashSet;

use crate::board::{Board, Point};
use crate::groups::{Group, GroupId, GroupTracker};

/// Distinct empty points adjacent to any stone of `group`.
pub fn liberty_points(board: &Board, group: &Group) -> HashSet<Point> {
    let mut libs = HashSet::new();
    for &p in group.stones() {
        for n in board.neighbors(p) {
            if board.get(n).is_none() {
                libs.insert(n);
            }
        }
    }
    libs
}

/// Number of liberties of `group`; a point shared by several stones counts once.
pub fn count_liberties(board: &Board, group: &Group) -> usize {
    liberty_points(board, group).len()
}

/// Liberties of the group with id `id`, or 0 for an unknown id.
pub fn group_liberties(board: &Board, tracker: &GroupTracker, id: GroupId) -> usize {
    tracker.get(id).map_or(0, |g| count_liberties(board, g))
}

/// Whether `group` has at least one liberty other than `except`.
///
/// Stops at the first such point instead of enumerating all of them.
pub fn has_liberty_besides(board: &Board, group: &Group, except: Point) -> bool {
    group.stones().iter().any(|&p| {
        board
            .neighbors(p)
            .any(|n| n != except && board.get(n).is_none())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    fn setup(size: u8, stones: &[(u8, u8, Color)]) -> (Board, GroupTracker) {
        let mut board = Board::new(size);
        let mut tracker = GroupTracker::new(size);
        for &(x, y, c) in stones {
            let p = Point::new(x, y);
            board.place(p, c).unwrap();
            tracker.add_stone(&board, p, c);
        }
        (board, tracker)
    }

    #[test]
    fn test_single_stone_liberties() {
        let (board, tracker) = setup(5, &[(2, 2, Color::Black)]);
        let id = tracker.group_at(Point::new(2, 2)).unwrap();
        assert_eq!(group_liberties(&board, &tracker, id), 4);
    }

    #[test]
    fn test_edge_and_corner_liberties() {
        let (board, tracker) = setup(5, &[(0, 0, Color::Black), (2, 0, Color::White)]);
        let corner = tracker.group_at(Point::new(0, 0)).unwrap();
        let edge = tracker.group_at(Point::new(2, 0)).unwrap();
        assert_eq!(group_liberties(&board, &tracker, corner), 2);
        assert_eq!(group_liberties(&board, &tracker, edge), 3);
    }

    #[test]
    fn test_shared_liberty_counts_once() {
        // L-shape: (1,1),(2,1),(2,2); (1,2) touches two members.
        let (board, tracker) = setup(
            5,
            &[(1, 1, Color::Black), (2, 1, Color::Black), (2, 2, Color::Black)],
        );
        let id = tracker.group_at(Point::new(1, 1)).unwrap();
        let libs = liberty_points(&board, tracker.get(id).unwrap());
        assert!(libs.contains(&Point::new(1, 2)));
        assert_eq!(libs.len(), 7);
    }

    #[test]
    fn test_opponent_stones_take_liberties() {
        let (board, tracker) = setup(
            3,
            &[(0, 0, Color::Black), (1, 0, Color::White), (0, 1, Color::White)],
        );
        let id = tracker.group_at(Point::new(0, 0)).unwrap();
        assert_eq!(group_liberties(&board, &tracker, id), 0);
    }

    #[test]
    fn test_has_liberty_besides() {
        let (board, tracker) = setup(3, &[(0, 0, Color::Black), (1, 0, Color::White)]);
        let g = tracker.get(tracker.group_at(Point::new(0, 0)).unwrap()).unwrap();
        assert!(!has_liberty_besides(&board, g, Point::new(0, 1)));
        assert!(has_liberty_besides(&board, g, Point::new(2, 2)));
    }
}
