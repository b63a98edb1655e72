//! Incremental tracking of connected groups of stones.
//!
//! Groups live in an arena of slots addressed by [`GroupId`]; a per-point
//! index maps every occupied point to the id of its group. Placing a stone
//! creates, extends or merges groups; removing a captured group clears its
//! points. Neither operation rescans the board.

use crate::board::{Board, Color, Point};

/// Handle to a group in a [`GroupTracker`]. Ids of removed groups are reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(usize);

/// A maximal 4-connected set of same-colored stones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    color: Color,
    stones: Vec<Point>,
}

impl Group {
    pub fn color(&self) -> Color {
        self.color
    }

    /// Member points, in no particular order.
    pub fn stones(&self) -> &[Point] {
        &self.stones
    }

    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.stones.contains(&p)
    }
}

#[derive(Clone, Debug)]
pub struct GroupTracker {
    size: u8,
    /// Group arena; `None` marks a free slot.
    slots: Vec<Option<Group>>,
    /// Free slot indices, reused before the arena grows.
    free: Vec<usize>,
    /// Point -> group, row-major like the board.
    index: Vec<Option<GroupId>>,
}

impl GroupTracker {
    pub fn new(size: u8) -> Self {
        let n = usize::from(size);
        Self {
            size,
            slots: Vec::new(),
            free: Vec::new(),
            index: vec![None; n * n],
        }
    }

    fn idx(&self, p: Point) -> usize {
        usize::from(p.y) * usize::from(self.size) + usize::from(p.x)
    }

    /// The group occupying `p`, or `None` if the point is empty.
    pub fn group_at(&self, p: Point) -> Option<GroupId> {
        self.index.get(self.idx(p)).copied().flatten()
    }

    pub fn get(&self, id: GroupId) -> Option<&Group> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// All live groups.
    pub fn groups(&self) -> impl Iterator<Item = (GroupId, &Group)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|g| (GroupId(i), g)))
    }

    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distinct groups of `color` touching `p`.
    pub fn adjacent_groups(&self, board: &Board, p: Point, color: Color) -> Vec<GroupId> {
        let mut ids = Vec::with_capacity(4);
        for n in board.neighbors(p) {
            if board.get(n) != Some(color) {
                continue;
            }
            if let Some(id) = self.group_at(n) {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
        ids
    }

    /// Incorporate a stone of `color` just placed on `p`.
    ///
    /// With no friendly neighbor the stone becomes a new singleton group.
    /// Otherwise every neighboring friendly group is merged, together with
    /// `p`, into the largest of them and the absorbed points are re-indexed.
    /// Returns the id of the group now containing `p`.
    pub fn add_stone(&mut self, board: &Board, p: Point, color: Color) -> GroupId {
        debug_assert_eq!(board.get(p), Some(color), "stone must be on the board first");
        debug_assert!(self.group_at(p).is_none(), "point {p:?} already indexed");

        let adjacent = self.adjacent_groups(board, p, color);
        let Some(survivor) = adjacent
            .iter()
            .copied()
            .max_by_key(|&id| self.get(id).map_or(0, Group::len))
        else {
            let id = self.alloc(Group {
                color,
                stones: vec![p],
            });
            self.set_index(p, Some(id));
            return id;
        };

        let mut joined = vec![p];
        for id in adjacent.into_iter().filter(|&id| id != survivor) {
            if let Some(absorbed) = self.release(id) {
                joined.extend(absorbed.stones);
            }
        }
        for &q in &joined {
            self.set_index(q, Some(survivor));
        }
        if joined.len() > 1 {
            tracing::debug!(group = ?survivor, absorbed = joined.len() - 1, "merged groups");
        }
        if let Some(group) = self.slots.get_mut(survivor.0).and_then(Option::as_mut) {
            group.stones.extend(joined);
        }
        survivor
    }

    /// Remove a whole group from the tracker and the board.
    ///
    /// Returns the points that were cleared. An unknown id removes nothing.
    pub fn remove_group(&mut self, board: &mut Board, id: GroupId) -> Vec<Point> {
        let Some(group) = self.release(id) else {
            return Vec::new();
        };
        for &p in &group.stones {
            board.clear(p);
            self.set_index(p, None);
        }
        group.stones
    }

    /// Check the tracker against a full flood-fill of `board`: every occupied
    /// point is indexed, and every group is exactly one maximal component.
    pub fn is_consistent_with(&self, board: &Board) -> bool {
        let mut seen = 0;
        for p in board.points() {
            match (board.get(p), self.group_at(p)) {
                (None, None) => {}
                (Some(color), Some(id)) => {
                    let Some(group) = self.get(id) else {
                        return false;
                    };
                    if group.color != color || !group.contains(p) {
                        return false;
                    }
                    seen += 1;
                }
                _ => return false,
            }
        }
        let indexed: usize = self.groups().map(|(_, g)| g.len()).sum();
        if indexed != seen {
            return false;
        }
        self.groups().all(|(_, g)| {
            let mut component = collect_group(board, g.stones[0]);
            let mut members = g.stones.clone();
            component.sort();
            members.sort();
            component == members
        })
    }

    fn alloc(&mut self, group: Group) -> GroupId {
        if let Some(i) = self.free.pop() {
            self.slots[i] = Some(group);
            GroupId(i)
        } else {
            self.slots.push(Some(group));
            GroupId(self.slots.len() - 1)
        }
    }

    fn release(&mut self, id: GroupId) -> Option<Group> {
        let group = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        Some(group)
    }

    fn set_index(&mut self, p: Point, id: Option<GroupId>) {
        let i = self.idx(p);
        self.index[i] = id;
    }
}

/// Collect all stones connected to `start` by flood fill over the board.
///
/// This is the from-scratch reference the incremental tracker is checked
/// against; move handling never calls it.
pub fn collect_group(board: &Board, start: Point) -> Vec<Point> {
    let Some(color) = board.get(start) else {
        return Vec::new();
    };
    let n = usize::from(board.size());
    let mut visited = vec![false; n * n];
    let idx = |p: Point| usize::from(p.y) * n + usize::from(p.x);
    let mut stack = vec![start];
    let mut out = Vec::new();

    while let Some(pt) = stack.pop() {
        if visited[idx(pt)] {
            continue;
        }
        visited[idx(pt)] = true;
        out.push(pt);
        for nb in board.neighbors(pt) {
            if !visited[idx(nb)] && board.get(nb) == Some(color) {
                stack.push(nb);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, tracker: &mut GroupTracker, x: u8, y: u8, c: Color) -> GroupId {
        let p = Point::new(x, y);
        board.place(p, c).unwrap();
        tracker.add_stone(board, p, c)
    }

    fn sorted(g: &Group) -> Vec<Point> {
        let mut v = g.stones().to_vec();
        v.sort();
        v
    }

    #[test]
    fn test_singleton_group() {
        let mut board = Board::new(5);
        let mut tracker = GroupTracker::new(5);
        let id = place(&mut board, &mut tracker, 2, 2, Color::Black);

        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.group_at(Point::new(2, 2)), Some(id));
        let g = tracker.get(id).unwrap();
        assert_eq!(g.color(), Color::Black);
        assert_eq!(g.stones(), &[Point::new(2, 2)]);
    }

    #[test]
    fn test_diagonal_stones_stay_separate() {
        let mut board = Board::new(5);
        let mut tracker = GroupTracker::new(5);
        let a = place(&mut board, &mut tracker, 1, 1, Color::Black);
        let b = place(&mut board, &mut tracker, 2, 2, Color::Black);
        assert_ne!(a, b);
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn test_expand_group() {
        let mut board = Board::new(5);
        let mut tracker = GroupTracker::new(5);
        let a = place(&mut board, &mut tracker, 1, 1, Color::Black);
        let b = place(&mut board, &mut tracker, 1, 2, Color::Black);
        assert_eq!(a, b);
        assert_eq!(tracker.get(a).unwrap().len(), 2);
        assert!(tracker.is_consistent_with(&board));
    }

    #[test]
    fn test_opponent_stones_do_not_join() {
        let mut board = Board::new(5);
        let mut tracker = GroupTracker::new(5);
        let a = place(&mut board, &mut tracker, 1, 1, Color::Black);
        let b = place(&mut board, &mut tracker, 1, 2, Color::White);
        assert_ne!(a, b);
        assert!(tracker.is_consistent_with(&board));
    }

    #[test]
    fn test_merge_four_groups() {
        let mut board = Board::new(5);
        let mut tracker = GroupTracker::new(5);
        place(&mut board, &mut tracker, 2, 1, Color::White);
        place(&mut board, &mut tracker, 2, 3, Color::White);
        place(&mut board, &mut tracker, 1, 2, Color::White);
        place(&mut board, &mut tracker, 3, 2, Color::White);
        place(&mut board, &mut tracker, 4, 2, Color::White);
        assert_eq!(tracker.len(), 4);

        let id = place(&mut board, &mut tracker, 2, 2, Color::White);
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.get(id).unwrap().len(), 6);
        for p in tracker.get(id).unwrap().stones() {
            assert_eq!(tracker.group_at(*p), Some(id));
        }
        assert!(tracker.is_consistent_with(&board));
    }

    #[test]
    fn test_merge_is_order_independent() {
        // Left arm {(0,1),(1,1)}, right arm {(3,1)}, bridged by (2,1).
        let arms = [(0, 1), (1, 1), (3, 1)];
        let orders: [[usize; 3]; 3] = [[0, 1, 2], [2, 1, 0], [1, 2, 0]];
        let mut results = Vec::new();
        for order in orders {
            let mut board = Board::new(4);
            let mut tracker = GroupTracker::new(4);
            for i in order {
                let (x, y) = arms[i];
                place(&mut board, &mut tracker, x, y, Color::Black);
            }
            let id = place(&mut board, &mut tracker, 2, 1, Color::Black);
            assert_eq!(tracker.len(), 1);
            results.push(sorted(tracker.get(id).unwrap()));
        }
        let expected = vec![
            Point::new(0, 1),
            Point::new(1, 1),
            Point::new(2, 1),
            Point::new(3, 1),
        ];
        for r in results {
            assert_eq!(r, expected);
        }
    }

    #[test]
    fn test_remove_group_clears_board_and_index() {
        let mut board = Board::new(5);
        let mut tracker = GroupTracker::new(5);
        let id = place(&mut board, &mut tracker, 0, 0, Color::White);
        place(&mut board, &mut tracker, 0, 1, Color::White);
        place(&mut board, &mut tracker, 3, 3, Color::Black);

        let mut removed = tracker.remove_group(&mut board, id);
        removed.sort();
        assert_eq!(removed, vec![Point::new(0, 0), Point::new(0, 1)]);
        assert_eq!(board.get(Point::new(0, 0)), None);
        assert_eq!(tracker.group_at(Point::new(0, 1)), None);
        assert!(tracker.get(id).is_none());
        assert_eq!(tracker.len(), 1);
        assert!(tracker.is_consistent_with(&board));

        // Removing again is a no-op.
        assert!(tracker.remove_group(&mut board, id).is_empty());
    }

    #[test]
    fn test_slot_reuse_after_removal() {
        let mut board = Board::new(5);
        let mut tracker = GroupTracker::new(5);
        let a = place(&mut board, &mut tracker, 0, 0, Color::White);
        tracker.remove_group(&mut board, a);
        let b = place(&mut board, &mut tracker, 4, 4, Color::Black);
        assert_eq!(a, b);
        assert_eq!(tracker.get(b).unwrap().color(), Color::Black);
    }

    #[test]
    fn test_inconsistency_detected() {
        let mut board = Board::new(3);
        let tracker = GroupTracker::new(3);
        board.place(Point::new(1, 1), Color::Black).unwrap();
        assert!(!tracker.is_consistent_with(&board));
    }

    #[test]
    fn test_collect_group() {
        let mut board = Board::new(3);
        board.place(Point::new(0, 0), Color::Black).unwrap();
        board.place(Point::new(1, 0), Color::Black).unwrap();
        board.place(Point::new(1, 1), Color::White).unwrap();
        let mut g = collect_group(&board, Point::new(0, 0));
        g.sort();
        assert_eq!(g, vec![Point::new(0, 0), Point::new(1, 0)]);
        assert!(collect_group(&board, Point::new(2, 2)).is_empty());
    }
}
