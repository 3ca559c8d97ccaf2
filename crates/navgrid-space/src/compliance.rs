//! CoordinateTransform compliance test helpers.
//!
//! These functions verify that a strategy satisfies the invariants the path
//! search relies on. Reused by every strategy's test module. Cells are
//! enumerated over a `width × height` box anchored at the origin.

use crate::transform::CoordinateTransform;
use indexmap::{IndexMap, IndexSet};
use navgrid_core::GridCoord;
use std::collections::VecDeque;

fn cells(width: i32, height: i32) -> Vec<GridCoord> {
    let mut out = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            out.push(GridCoord::new(x, y));
        }
    }
    out
}

/// Unit-cost BFS distances from `source` to every cell of the box.
fn bfs_distances(
    t: &dyn CoordinateTransform,
    source: GridCoord,
    width: i32,
    height: i32,
) -> IndexMap<GridCoord, u32> {
    let in_box = |c: GridCoord| c.x >= 0 && c.y >= 0 && c.x < width && c.y < height;
    let mut dist = IndexMap::new();
    let mut queue = VecDeque::new();
    dist.insert(source, 0u32);
    queue.push_back(source);
    while let Some(cur) = queue.pop_front() {
        let d = dist[&cur];
        for nb in t.neighbours(cur) {
            if in_box(nb) && !dist.contains_key(&nb) {
                dist.insert(nb, d + 1);
                queue.push_back(nb);
            }
        }
    }
    dist
}

/// Assert `world_to_grid(grid_to_world(c)) == c` for every cell.
pub fn assert_round_trip(t: &dyn CoordinateTransform, width: i32, height: i32) {
    for c in cells(width, height) {
        let w = t.grid_to_world(c);
        let back = t.world_to_grid(w);
        assert_eq!(back, c, "round trip of {c} via {w:?} returned {back}");
        // Repeating the round trip is idempotent.
        assert_eq!(t.grid_to_world(back), w);
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(t: &dyn CoordinateTransform, width: i32, height: i32) {
    for c in cells(width, height) {
        for nb in t.neighbours(c) {
            assert!(
                t.neighbours(nb).contains(&c),
                "neighbour symmetry violated: {nb} in N({c}) but {c} not in N({nb})"
            );
        }
    }
}

/// Assert that neighbour lists contain no duplicates and never the cell itself.
pub fn assert_neighbours_distinct(t: &dyn CoordinateTransform, width: i32, height: i32) {
    for c in cells(width, height) {
        let n = t.neighbours(c);
        let unique: IndexSet<GridCoord> = n.iter().copied().collect();
        assert_eq!(unique.len(), n.len(), "duplicate neighbours of {c}: {n:?}");
        assert!(!unique.contains(&c), "{c} lists itself as a neighbour");
    }
}

/// Assert `h(a, a) == 0` and `h(a, b) == h(b, a)`.
pub fn assert_heuristic_metric(t: &dyn CoordinateTransform, width: i32, height: i32) {
    let all = cells(width, height);
    for a in &all {
        assert_eq!(t.heuristic(*a, *a), 0.0, "h({a}, {a}) is not zero");
        for b in &all {
            assert_eq!(
                t.heuristic(*a, *b),
                t.heuristic(*b, *a),
                "heuristic not symmetric for {a}, {b}"
            );
        }
    }
}

/// Assert `h(a, b) <=` the unit-cost BFS distance for every pair.
pub fn assert_heuristic_admissible(t: &dyn CoordinateTransform, width: i32, height: i32) {
    for a in cells(width, height) {
        let dist = bfs_distances(t, a, width, height);
        for (b, d) in &dist {
            let h = t.heuristic(*b, a);
            assert!(
                h <= *d as f32,
                "heuristic overestimates: h({b}, {a}) = {h} > true distance {d}"
            );
        }
    }
}

/// Assert `h(a, g) <= 1 + h(n, g)` for every neighbour `n` of `a`.
pub fn assert_heuristic_consistent(t: &dyn CoordinateTransform, width: i32, height: i32) {
    let all = cells(width, height);
    for goal in &all {
        for a in &all {
            let ha = t.heuristic(*a, *goal);
            for n in t.neighbours(*a) {
                let hn = t.heuristic(n, *goal);
                assert!(
                    ha <= 1.0 + hn,
                    "heuristic inconsistent: h({a})={ha} > 1 + h({n})={hn} towards {goal}"
                );
            }
        }
    }
}

/// Assert the heuristic equals the BFS distance (exact on an open grid).
pub fn assert_heuristic_exact(t: &dyn CoordinateTransform, width: i32, height: i32) {
    for a in cells(width, height) {
        for (b, d) in bfs_distances(t, a, width, height) {
            assert_eq!(t.heuristic(a, b), d as f32, "h({a}, {b}) != {d}");
        }
    }
}

/// Run all compliance checks.
pub fn run_full_compliance(t: &dyn CoordinateTransform, width: i32, height: i32) {
    assert_round_trip(t, width, height);
    assert_neighbours_symmetric(t, width, height);
    assert_neighbours_distinct(t, width, height);
    assert_heuristic_metric(t, width, height);
    assert_heuristic_admissible(t, width, height);
    assert_heuristic_consistent(t, width, height);
}
