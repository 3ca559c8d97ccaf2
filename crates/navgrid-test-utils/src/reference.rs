//! Reference solver and path checks.
//!
//! [`reference_cost`] is a plain Dijkstra over the same neighbour and cost
//! model as the A* search, with no heuristic and no iteration cap.

use navgrid_core::{GridCoord, LayerId};
use navgrid_space::CoordinateTransform;
use navgrid_store::TileStore;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

struct Frontier {
    cost: f32,
    cell: GridCoord,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.cell.cmp(&self.cell))
    }
}

/// Least total entry cost from `start` to `goal`, or `None` if either end
/// is not traversable or no route exists.
pub fn reference_cost(
    store: &TileStore,
    transform: &dyn CoordinateTransform,
    start: GridCoord,
    goal: GridCoord,
    layer: LayerId,
) -> Option<f32> {
    if !store.is_navigable(start, layer) || !store.is_navigable(goal, layer) {
        return None;
    }
    let mut dist: HashMap<GridCoord, f32> = HashMap::new();
    let mut heap = BinaryHeap::new();
    dist.insert(start, 0.0);
    heap.push(Frontier {
        cost: 0.0,
        cell: start,
    });
    while let Some(Frontier { cost, cell }) = heap.pop() {
        if cell == goal {
            return Some(cost);
        }
        if dist.get(&cell).is_some_and(|d| cost > *d) {
            continue;
        }
        for next in transform.neighbours(cell) {
            if !store.is_navigable(next, layer) {
                continue;
            }
            let candidate = cost + store.traversal_cost(next, layer);
            if dist.get(&next).is_none_or(|d| candidate < *d) {
                dist.insert(next, candidate);
                heap.push(Frontier {
                    cost: candidate,
                    cell: next,
                });
            }
        }
    }
    None
}

/// Sum of the entry costs of every cell after the first.
pub fn path_cost(store: &TileStore, cells: &[GridCoord], layer: LayerId) -> f32 {
    cells
        .iter()
        .skip(1)
        .map(|c| store.traversal_cost(*c, layer))
        .sum()
}

/// Assert that `cells` is a connected route of traversable tiles.
///
/// # Panics
///
/// If any cell is not traversable or two consecutive cells are not
/// neighbours under `transform`.
pub fn assert_path_valid(
    store: &TileStore,
    transform: &dyn CoordinateTransform,
    cells: &[GridCoord],
    layer: LayerId,
) {
    assert!(!cells.is_empty(), "empty path");
    for cell in cells {
        assert!(
            store.is_navigable(*cell, layer),
            "path crosses untraversable {cell}"
        );
    }
    for pair in cells.windows(2) {
        assert!(
            transform.neighbours(pair[0]).contains(&pair[1]),
            "{} -> {} is not a single step",
            pair[0],
            pair[1]
        );
    }
}
