//! Search-scoped node storage.
//!
//! Nodes live in a flat `Vec` and refer to their parent by [`NodeIndex`].
//! The arena is created at the start of one search and dropped with it, so
//! no node ever outlives the call that allocated it.

use navgrid_core::GridCoord;
use std::collections::HashMap;

/// Position of a node in a [`NodeArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    /// The index as a `usize` for slice access.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One visited cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathNode {
    /// Cell this node stands for.
    pub cell: GridCoord,
    /// Cost of the best known route from the start.
    pub g: f32,
    /// Heuristic estimate of the remaining cost.
    pub h: f32,
    /// Predecessor on the best known route. `None` for the start.
    pub parent: Option<NodeIndex>,
    /// Expanded already; never reopened.
    pub closed: bool,
}

impl PathNode {
    /// `g + h`.
    pub fn f(&self) -> f32 {
        self.g + self.h
    }
}

/// Arena of [`PathNode`]s with a cell lookup.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<PathNode>,
    by_cell: HashMap<GridCoord, NodeIndex>,
}

impl NodeArena {
    /// An empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty arena with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            by_cell: HashMap::with_capacity(capacity),
        }
    }

    /// Allocate a node for `cell`. The cell must not already have one.
    pub fn insert(&mut self, cell: GridCoord, g: f32, h: f32, parent: Option<NodeIndex>) -> NodeIndex {
        debug_assert!(!self.by_cell.contains_key(&cell), "{cell} allocated twice");
        let index = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(PathNode {
            cell,
            g,
            h,
            parent,
            closed: false,
        });
        self.by_cell.insert(cell, index);
        index
    }

    /// Node already allocated for `cell`.
    pub fn find(&self, cell: GridCoord) -> Option<NodeIndex> {
        self.by_cell.get(&cell).copied()
    }

    /// Shared access to a node.
    pub fn get(&self, index: NodeIndex) -> Option<&PathNode> {
        self.nodes.get(index.index())
    }

    /// Mutable access to a node.
    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut PathNode> {
        self.nodes.get_mut(index.index())
    }

    /// Number of nodes allocated.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// No nodes allocated.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Cells from the start to `last`, following parent links.
    pub fn trace(&self, last: NodeIndex) -> Vec<GridCoord> {
        let mut cells = Vec::new();
        let mut cursor = Some(last);
        while let Some(index) = cursor {
            let Some(node) = self.get(index) else { break };
            cells.push(node.cell);
            cursor = node.parent;
        }
        cells.reverse();
        cells
    }

    /// All nodes in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &PathNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeIndex(i as u32), n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_find() {
        let mut arena = NodeArena::new();
        let a = arena.insert(GridCoord::new(0, 0), 0.0, 4.0, None);
        let b = arena.insert(GridCoord::new(1, 0), 1.0, 3.0, Some(a));
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.find(GridCoord::new(1, 0)), Some(b));
        assert_eq!(arena.find(GridCoord::new(2, 0)), None);
        assert_eq!(arena.get(b).unwrap().f(), 4.0);
    }

    #[test]
    fn reserved_arena_starts_empty_and_grows() {
        let mut arena = NodeArena::with_capacity(2);
        assert!(arena.is_empty());
        for x in 0..5 {
            arena.insert(GridCoord::new(x, 0), x as f32, 0.0, None);
        }
        assert_eq!(arena.len(), 5);
        assert_eq!(arena.find(GridCoord::new(4, 0)), Some(NodeIndex(4)));
    }

    #[test]
    fn trace_walks_parents_in_order() {
        let mut arena = NodeArena::new();
        let a = arena.insert(GridCoord::new(0, 0), 0.0, 0.0, None);
        let b = arena.insert(GridCoord::new(0, 1), 1.0, 0.0, Some(a));
        let _side = arena.insert(GridCoord::new(5, 5), 1.0, 0.0, Some(a));
        let c = arena.insert(GridCoord::new(0, 2), 2.0, 0.0, Some(b));
        assert_eq!(
            arena.trace(c),
            vec![
                GridCoord::new(0, 0),
                GridCoord::new(0, 1),
                GridCoord::new(0, 2)
            ]
        );
        assert_eq!(arena.trace(a), vec![GridCoord::new(0, 0)]);
    }

    #[test]
    fn reparenting_changes_trace() {
        let mut arena = NodeArena::new();
        let a = arena.insert(GridCoord::new(0, 0), 0.0, 0.0, None);
        let b = arena.insert(GridCoord::new(1, 0), 5.0, 0.0, Some(a));
        let c = arena.insert(GridCoord::new(2, 0), 1.0, 0.0, Some(a));
        let node = arena.get_mut(b).unwrap();
        node.parent = Some(c);
        node.g = 2.0;
        assert_eq!(arena.trace(b).len(), 3);
        assert_eq!(arena.iter().count(), 3);
    }
}
