//! Traversal and shortest-path algorithms.
//!
//! Every algorithm here is written against the [`Graph`] primitives
//! (`has_vertex`, `neighbors`, `edge_weight`) and never touches a
//! representation's storage directly, so the matrix and the list share one
//! implementation.
//!
//! - [`dfs`]: depth-first order using an explicit stack
//! - [`bfs`]: breadth-first (level) order using a FIFO queue
//! - [`dijkstra`]: single-source single-target shortest path

use super::Graph;
use crate::domain::{CityId, PathResult};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

/// Depth-first visitation order starting at `start`.
///
/// Uses an explicit stack rather than recursion, so deep or cyclic graphs
/// cannot exhaust the call stack. Neighbors are pushed in reverse so they
/// pop in their original order. A vertex is marked when it is pushed and is
/// never visited twice.
///
/// Returns an empty vector if `start` is absent.
pub fn dfs<G: Graph + ?Sized>(graph: &G, start: CityId) -> Vec<CityId> {
    let mut order = Vec::new();
    if !graph.has_vertex(start) {
        return order;
    }

    let mut visited = HashSet::from([start]);
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        order.push(current);

        for neighbor in graph.neighbors(current).into_iter().rev() {
            if visited.insert(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    order
}

/// Breadth-first visitation order starting at `start`.
///
/// Vertices are marked on enqueue so none is queued twice.
///
/// Returns an empty vector if `start` is absent.
pub fn bfs<G: Graph + ?Sized>(graph: &G, start: CityId) -> Vec<CityId> {
    let mut order = Vec::new();
    if !graph.has_vertex(start) {
        return order;
    }

    let mut visited = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        order.push(current);

        for neighbor in graph.neighbors(current) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    order
}

/// Frontier entry ordered so that `BinaryHeap` pops the smallest distance.
///
/// Equal distances pop the smaller id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    distance: u64,
    id: CityId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest path from `start` to `end`.
///
/// Lazy-deletion Dijkstra: improved candidates are pushed again instead of
/// decreasing a key, and stale entries are skipped when popped. The search
/// stops as soon as `end` is finalized.
///
/// Edge weights are [`Weight`](crate::domain::Weight)s and therefore never
/// negative. Distances accumulate in `u64` and saturate instead of
/// overflowing.
///
/// # Results
///
/// - `start` or `end` absent: not found
/// - `start == end`: `[start]` with weight 0, no edge is examined
/// - `end` unreachable: not found
///
/// # Tie-breaking
///
/// Among equal tentative distances the frontier pops the smaller id, and a
/// vertex keeps the first predecessor that reached its final distance. When
/// several shortest paths exist, which one is returned therefore depends on
/// the order `neighbors` yields, which differs between representations. The
/// total weight is the same either way.
pub fn dijkstra<G: Graph + ?Sized>(graph: &G, start: CityId, end: CityId) -> PathResult {
    if !graph.has_vertex(start) || !graph.has_vertex(end) {
        return PathResult::not_found();
    }
    if start == end {
        return PathResult::trivial(start);
    }

    let mut distances: HashMap<CityId, u64> = HashMap::from([(start, 0)]);
    let mut predecessors: HashMap<CityId, CityId> = HashMap::new();
    let mut finalized: HashSet<CityId> = HashSet::new();
    let mut frontier = BinaryHeap::from([FrontierEntry {
        distance: 0,
        id: start,
    }]);

    while let Some(FrontierEntry {
        distance,
        id: current,
    }) = frontier.pop()
    {
        if !finalized.insert(current) {
            continue;
        }
        if current == end {
            break;
        }

        for neighbor in graph.neighbors(current) {
            if finalized.contains(&neighbor) {
                continue;
            }
            let Some(weight) = graph.edge_weight(current, neighbor) else {
                continue;
            };

            let candidate = distance.saturating_add(u64::from(weight.get()));
            let best = distances.get(&neighbor).copied().unwrap_or(u64::MAX);
            if candidate < best {
                tracing::trace!(%current, %neighbor, candidate, "Relaxed edge");
                distances.insert(neighbor, candidate);
                predecessors.insert(neighbor, current);
                frontier.push(FrontierEntry {
                    distance: candidate,
                    id: neighbor,
                });
            }
        }
    }

    if !finalized.contains(&end) {
        tracing::debug!(%start, %end, "No path found");
        return PathResult::not_found();
    }

    let mut path = vec![end];
    let mut cursor = end;
    while cursor != start {
        match predecessors.get(&cursor) {
            Some(&previous) => {
                path.push(previous);
                cursor = previous;
            }
            None => return PathResult::not_found(),
        }
    }
    path.reverse();

    let total = distances[&end];
    tracing::debug!(%start, %end, total, hops = path.len() - 1, "Shortest path found");
    PathResult::found(path, total)
}
