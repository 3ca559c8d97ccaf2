//! A* path search over one layer of a [`TileStore`].

use crate::filter::NeighbourFilter;
use crate::node_arena::{NodeArena, NodeIndex};
use crate::open_set::OpenSet;
use crate::stats::SearchStats;
use navgrid_core::{GridCoord, LayerId, PathError, UnreachableReason};
use navgrid_space::{CoordinateTransform, Vec2};
use navgrid_store::TileStore;
use tracing::{debug, trace, warn};

/// Node expansions allowed when the caller has no better budget.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Upper bound on the nodes reserved up front for one search.
const ARENA_RESERVE: usize = 1024;

/// A route from start to goal, both inclusive.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    /// Tile centres in world space, start first.
    pub waypoints: Vec<Vec2>,
    /// The same route as grid cells.
    pub cells: Vec<GridCoord>,
    /// Sum of the traversal costs of every cell entered (the start is free).
    pub cost: f32,
    /// Search counters.
    pub stats: SearchStats,
}

impl Path {
    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Never true for a path returned by a successful search.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Whether the route enters `cell`.
    pub fn crosses(&self, cell: GridCoord) -> bool {
        self.cells.contains(&cell)
    }
}

/// Runs A* searches against a store through one projection.
///
/// The finder borrows its inputs and keeps no state between calls, so any
/// number of finders may search the same store concurrently.
///
/// # Examples
///
/// ```
/// use navgrid_core::{GridConfig, GridCoord, LayerId, Projection, TileProperties};
/// use navgrid_search::{PathFinder, DEFAULT_MAX_ITERATIONS};
/// use navgrid_space::transform_for;
/// use navgrid_store::TileStore;
///
/// let config = GridConfig::new(5, 5, Projection::Orthogonal);
/// let mut store = TileStore::new(config).unwrap();
/// store.fill_layer(LayerId::GROUND, TileProperties::open(1.0)).unwrap();
/// let transform = transform_for(&config);
///
/// let finder = PathFinder::new(&store, transform.as_ref());
/// let path = finder
///     .find_path(GridCoord::new(0, 0), GridCoord::new(4, 4), LayerId::GROUND, DEFAULT_MAX_ITERATIONS)
///     .unwrap();
/// assert_eq!(path.len(), 9);
/// assert_eq!(path.cost, 8.0);
/// ```
#[derive(Clone, Copy)]
pub struct PathFinder<'a> {
    store: &'a TileStore,
    transform: &'a dyn CoordinateTransform,
    filter: Option<&'a dyn NeighbourFilter>,
}

impl std::fmt::Debug for PathFinder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathFinder")
            .field("projection", &self.transform.projection())
            .field("filtered", &self.filter.is_some())
            .finish()
    }
}

impl<'a> PathFinder<'a> {
    /// A finder without a neighbour filter.
    pub fn new(store: &'a TileStore, transform: &'a dyn CoordinateTransform) -> Self {
        Self {
            store,
            transform,
            filter: None,
        }
    }

    /// Consult `filter` for every candidate move.
    pub fn with_filter(mut self, filter: &'a dyn NeighbourFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Find a least-cost route from `start` to `goal` on `layer`.
    ///
    /// # Errors
    ///
    /// * [`PathError::InvalidPosition`] if either cell is outside the grid
    ///   or `layer` does not exist.
    /// * [`PathError::Unreachable`] if either cell is not traversable or
    ///   the reachable region is exhausted without meeting the goal.
    /// * [`PathError::SearchExhausted`] after `max_iterations` node
    ///   expansions without resolution.
    pub fn find_path(
        &self,
        start: GridCoord,
        goal: GridCoord,
        layer: LayerId,
        max_iterations: usize,
    ) -> Result<Path, PathError> {
        self.check_position(start, layer)?;
        self.check_position(goal, layer)?;
        if !self.store.is_navigable(start, layer) {
            return Err(PathError::Unreachable {
                reason: UnreachableReason::StartBlocked,
            });
        }
        if !self.store.is_navigable(goal, layer) {
            return Err(PathError::Unreachable {
                reason: UnreachableReason::GoalBlocked,
            });
        }
        if start == goal {
            return Ok(Path {
                waypoints: vec![self.transform.grid_to_world(start)],
                cells: vec![start],
                cost: 0.0,
                stats: SearchStats::default(),
            });
        }
        self.search(start, goal, layer, max_iterations)
    }

    fn check_position(&self, coord: GridCoord, layer: LayerId) -> Result<(), PathError> {
        if self.store.has_layer(layer) && self.store.in_bounds(coord) {
            Ok(())
        } else {
            Err(PathError::InvalidPosition { coord, layer })
        }
    }

    fn search(
        &self,
        start: GridCoord,
        goal: GridCoord,
        layer: LayerId,
        max_iterations: usize,
    ) -> Result<Path, PathError> {
        let floor = self.store.cost_floor(layer);
        let h = |cell: GridCoord| self.transform.heuristic(cell, goal) * floor;

        let mut arena = NodeArena::with_capacity(max_iterations.min(ARENA_RESERVE));
        let mut open = OpenSet::new();
        let mut iterations = 0usize;

        let h0 = h(start);
        let root = arena.insert(start, 0.0, h0, None);
        open.push(root, h0, 0.0);

        while let Some(popped) = open.pop() {
            let Some(node) = arena.get(popped.node).copied() else {
                continue;
            };
            if node.closed || popped.g > node.g {
                continue;
            }
            if node.cell == goal {
                let stats = SearchStats {
                    iterations,
                    nodes_allocated: arena.len(),
                    pushes: open.pushes(),
                    peak_open: open.peak_len(),
                };
                let path = self.finish(&arena, popped.node, node.g, stats);
                trace!(
                    %start,
                    %goal,
                    %layer,
                    cost = path.cost,
                    waypoints = path.len(),
                    iterations,
                    "path found"
                );
                return Ok(path);
            }
            if iterations >= max_iterations {
                warn!(
                    %start,
                    %goal,
                    %layer,
                    iterations,
                    nodes = arena.len(),
                    "path search hit its iteration cap"
                );
                return Err(PathError::SearchExhausted { iterations });
            }
            iterations += 1;
            if let Some(n) = arena.get_mut(popped.node) {
                n.closed = true;
            }

            let from_tile = self.store.tile_properties(node.cell, layer);
            for next in self.transform.neighbours(node.cell) {
                let to_tile = self.store.tile_properties(next, layer);
                if !to_tile.is_traversable() {
                    continue;
                }
                let existing = arena.find(next);
                if let Some(index) = existing {
                    if arena.get(index).is_some_and(|n| n.closed) {
                        continue;
                    }
                }
                if let Some(filter) = self.filter {
                    if !filter.allows(node.cell, &from_tile, next, &to_tile) {
                        continue;
                    }
                }

                let tentative = node.g + to_tile.traversal_cost;
                match existing {
                    Some(index) => {
                        if let Some(n) = arena.get_mut(index) {
                            if tentative < n.g {
                                n.g = tentative;
                                n.parent = Some(popped.node);
                                let f = tentative + n.h;
                                open.push(index, f, tentative);
                            }
                        }
                    }
                    None => {
                        let hn = h(next);
                        let index = arena.insert(next, tentative, hn, Some(popped.node));
                        open.push(index, tentative + hn, tentative);
                    }
                }
            }
        }

        debug!(
            %start,
            %goal,
            %layer,
            iterations,
            nodes = arena.len(),
            "open set exhausted without reaching goal"
        );
        Err(PathError::Unreachable {
            reason: UnreachableReason::Disconnected,
        })
    }

    fn finish(&self, arena: &NodeArena, last: NodeIndex, cost: f32, stats: SearchStats) -> Path {
        let cells = arena.trace(last);
        let waypoints = cells
            .iter()
            .map(|c| self.transform.grid_to_world(*c))
            .collect();
        Path {
            waypoints,
            cells,
            cost,
            stats,
        }
    }
}
