//! Property-based tests for representation equivalence.
//!
//! Random mutation sequences are applied to a matrix and a list graph in
//! lockstep. Both must accept and reject the same operations and agree on
//! every query up to representation-defined ordering. Shortest-path
//! distances are also checked against petgraph.

use citygraph::domain::{City, CityId, Representation, Weight};
use citygraph::graph::{copy_into, create_graph, Graph};
use petgraph::algo::dijkstra as petgraph_dijkstra;
use petgraph::graph::{Graph as PetGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, EdgeType, Undirected};
use proptest::prelude::*;
use std::collections::HashMap;

// =============================================================================
// GENERATORS
// =============================================================================

const MAX_ID: u32 = 12;

#[derive(Debug, Clone)]
enum Mutation {
    AddCity(u32),
    RemoveCity(u32),
    AddRoute(u32, u32, u32),
    RemoveRoute(u32, u32),
    Rename(u32),
}

fn mutation_strategy() -> impl Strategy<Value = Mutation> {
    prop_oneof![
        3 => (0..MAX_ID).prop_map(Mutation::AddCity),
        1 => (0..MAX_ID).prop_map(Mutation::RemoveCity),
        5 => (0..MAX_ID, 0..MAX_ID, 0u32..100)
            .prop_map(|(from, to, weight)| Mutation::AddRoute(from, to, weight)),
        1 => (0..MAX_ID, 0..MAX_ID).prop_map(|(from, to)| Mutation::RemoveRoute(from, to)),
        1 => (0..MAX_ID).prop_map(Mutation::Rename),
    ]
}

fn mutations_strategy() -> impl Strategy<Value = Vec<Mutation>> {
    prop::collection::vec(mutation_strategy(), 0..80)
}

// =============================================================================
// HELPERS
// =============================================================================

fn apply(graph: &mut dyn Graph, mutation: &Mutation) -> String {
    let outcome = match *mutation {
        Mutation::AddCity(id) => graph.add_vertex(City::new(CityId(id), format!("C{id}"))),
        Mutation::RemoveCity(id) => graph.remove_vertex(CityId(id)).map(|_| ()),
        Mutation::AddRoute(from, to, weight) => {
            graph.add_edge(CityId(from), CityId(to), Weight::from(weight))
        }
        Mutation::RemoveRoute(from, to) => graph.remove_edge(CityId(from), CityId(to)).map(|_| ()),
        Mutation::Rename(id) => graph.rename_vertex(CityId(id), format!("R{id}")),
    };
    format!("{outcome:?}")
}

fn build_pair(directed: bool, mutations: &[Mutation]) -> (Box<dyn Graph>, Box<dyn Graph>) {
    let mut matrix = create_graph(Representation::Matrix, directed);
    let mut list = create_graph(Representation::List, directed);

    for mutation in mutations {
        let left = apply(matrix.as_mut(), mutation);
        let right = apply(list.as_mut(), mutation);
        assert_eq!(left, right, "outcome diverged on {mutation:?}");
    }

    (matrix, list)
}

fn sorted(mut ids: Vec<CityId>) -> Vec<CityId> {
    ids.sort();
    ids
}

/// Shortest distances from `start` computed by petgraph.
fn oracle_distances<Ty: EdgeType>(graph: &dyn Graph, start: CityId) -> HashMap<CityId, u64> {
    let mut reference: PetGraph<CityId, u64, Ty> = PetGraph::default();
    let mut nodes: HashMap<CityId, NodeIndex> = HashMap::new();

    for id in graph.vertex_ids() {
        nodes.insert(id, reference.add_node(id));
    }
    for route in graph.edges() {
        reference.add_edge(
            nodes[&route.from],
            nodes[&route.to],
            u64::from(route.weight.get()),
        );
    }

    petgraph_dijkstra(&reference, nodes[&start], None, |edge| *edge.weight())
        .into_iter()
        .map(|(node, distance)| (reference[node], distance))
        .collect()
}

fn check_against_oracle(graph: &dyn Graph) -> Result<(), TestCaseError> {
    for start in graph.vertex_ids() {
        let expected = if graph.is_directed() {
            oracle_distances::<Directed>(graph, start)
        } else {
            oracle_distances::<Undirected>(graph, start)
        };

        for end in graph.vertex_ids() {
            let result = graph.dijkstra(start, end);
            prop_assert_eq!(result.distance(), expected.get(&end).copied());

            if result.found {
                prop_assert_eq!(result.path.first(), Some(&start));
                prop_assert_eq!(result.path.last(), Some(&end));
                let walked: u64 = result
                    .path
                    .windows(2)
                    .map(|pair| graph.edge_weight(pair[0], pair[1]).map_or(0, |w| u64::from(w.get())))
                    .sum();
                prop_assert_eq!(walked, result.total_weight);
            }
        }
    }
    Ok(())
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_representations_answer_alike(
        directed in any::<bool>(),
        mutations in mutations_strategy(),
    ) {
        let (matrix, list) = build_pair(directed, &mutations);

        prop_assert_eq!(matrix.vertex_ids(), list.vertex_ids());
        prop_assert_eq!(matrix.edge_count(), list.edge_count());

        for from in matrix.vertex_ids() {
            prop_assert_eq!(
                matrix.vertex(from).map(|c| c.name),
                list.vertex(from).map(|c| c.name)
            );
            prop_assert_eq!(sorted(matrix.neighbors(from)), sorted(list.neighbors(from)));
            prop_assert_eq!(sorted(matrix.dfs(from)), sorted(list.dfs(from)));
            prop_assert_eq!(sorted(matrix.bfs(from)), sorted(list.bfs(from)));

            for to in 0..MAX_ID {
                let to = CityId(to);
                prop_assert_eq!(matrix.has_edge(from, to), list.has_edge(from, to));
                prop_assert_eq!(matrix.edge_weight(from, to), list.edge_weight(from, to));
                prop_assert_eq!(
                    matrix.dijkstra(from, to).distance(),
                    list.dijkstra(from, to).distance()
                );
            }
        }
    }

    #[test]
    fn prop_traversals_visit_each_reachable_city_once(
        directed in any::<bool>(),
        mutations in mutations_strategy(),
    ) {
        let (matrix, list) = build_pair(directed, &mutations);

        for graph in [&matrix, &list] {
            for start in graph.vertex_ids() {
                let order = graph.dfs(start);
                let unique = sorted(order.clone());
                let mut deduped = unique.clone();
                deduped.dedup();

                prop_assert_eq!(order.first(), Some(&start));
                prop_assert_eq!(unique.len(), deduped.len());
                prop_assert_eq!(&unique, &sorted(graph.bfs(start)));

                // Reachability agrees with the shortest-path search.
                for end in graph.vertex_ids() {
                    prop_assert_eq!(unique.contains(&end), graph.dijkstra(start, end).found);
                }
            }
        }
    }

    #[test]
    fn prop_dijkstra_matches_petgraph(
        directed in any::<bool>(),
        mutations in mutations_strategy(),
    ) {
        let (matrix, list) = build_pair(directed, &mutations);

        check_against_oracle(matrix.as_ref())?;
        check_against_oracle(list.as_ref())?;
    }

    #[test]
    fn prop_copy_preserves_counts_and_weights(
        directed in any::<bool>(),
        mutations in mutations_strategy(),
    ) {
        let (matrix, _) = build_pair(directed, &mutations);

        let mut list = create_graph(Representation::List, directed);
        copy_into(matrix.as_ref(), list.as_mut()).unwrap();
        let mut back = create_graph(Representation::Matrix, directed);
        copy_into(list.as_ref(), back.as_mut()).unwrap();

        for graph in [&list, &back] {
            prop_assert_eq!(graph.vertex_count(), matrix.vertex_count());
            prop_assert_eq!(graph.edge_count(), matrix.edge_count());
            for route in matrix.edges() {
                prop_assert_eq!(graph.edge_weight(route.from, route.to), Some(route.weight));
            }
        }
    }
}
