//! Randomized differential tests: the list and matrix storages must answer
//! every query identically after any sequence of edits.

use std::collections::BTreeSet;

use petgraph::algo::kosaraju_scc;
use petgraph::graph::DiGraph;
use proptest::prelude::*;

use modgraph_core::{GraphError, ListDigraph, MatrixDigraph};

#[derive(Debug, Clone)]
enum Op {
    Add(usize, usize),
    Remove(usize, usize),
    SetWeight(usize, usize, f64),
}

fn arb_op(n: usize) -> impl Strategy<Value = Op> {
    // Indices may exceed `n` so invalid-vertex paths are exercised too.
    let idx = 0..n + 2;
    prop_oneof![
        4 => (idx.clone(), idx.clone()).prop_map(|(u, v)| Op::Add(u, v)),
        2 => (idx.clone(), idx.clone()).prop_map(|(u, v)| Op::Remove(u, v)),
        1 => (idx.clone(), idx, -5.0..5.0f64).prop_map(|(u, v, w)| Op::SetWeight(u, v, w)),
    ]
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<Op>)> {
    (0usize..10).prop_flat_map(|n| (Just(n), prop::collection::vec(arb_op(n), 0..80)))
}

fn apply(list: &mut ListDigraph, matrix: &mut MatrixDigraph, model: &mut BTreeSet<(usize, usize)>, op: &Op) {
    match *op {
        Op::Add(u, v) => {
            let a = list.add_edge(u, v);
            let b = matrix.add_edge(u, v);
            assert_eq!(a, b);
            if a.is_ok() {
                model.insert((u, v));
            }
        }
        Op::Remove(u, v) => {
            let a = list.remove_edge(u, v);
            let b = matrix.remove_edge(u, v);
            assert_eq!(a, b);
            if a.is_ok() {
                model.remove(&(u, v));
            }
        }
        Op::SetWeight(u, v, w) => {
            assert_eq!(list.set_edge_weight(u, v, w), matrix.set_edge_weight(u, v, w));
        }
    }
}

fn petgraph_strongly_connected(n: usize, edges: &[(usize, usize)]) -> bool {
    if n <= 1 {
        return true;
    }
    let mut g = DiGraph::<(), ()>::new();
    let nodes: Vec<_> = (0..n).map(|_| g.add_node(())).collect();
    for &(u, v) in edges {
        g.add_edge(nodes[u], nodes[v], ());
    }
    kosaraju_scc(&g).len() == 1
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn list_and_matrix_agree_on_every_query((n, ops) in arb_scenario()) {
        let mut list = ListDigraph::new(n);
        let mut matrix = MatrixDigraph::new(n);
        let mut model = BTreeSet::new();

        for op in &ops {
            apply(&mut list, &mut matrix, &mut model, op);
        }

        prop_assert_eq!(list.edge_count(), model.len());
        prop_assert_eq!(matrix.edge_count(), model.len());
        prop_assert_eq!(list.edges(), model.iter().copied().collect::<Vec<_>>());
        prop_assert_eq!(matrix.edges(), list.edges());

        for u in 0..n + 1 {
            prop_assert_eq!(list.in_degree(u), matrix.in_degree(u));
            prop_assert_eq!(list.out_degree(u), matrix.out_degree(u));
            prop_assert_eq!(list.successors(u), matrix.successors(u));
            prop_assert_eq!(list.predecessors(u), matrix.predecessors(u));
            for v in 0..n + 1 {
                prop_assert_eq!(list.has_edge(u, v), matrix.has_edge(u, v));
                prop_assert_eq!(list.edge_weight(u, v), matrix.edge_weight(u, v));
            }
        }

        prop_assert_eq!(list.is_empty(), matrix.is_empty());
        prop_assert_eq!(list.is_complete(), matrix.is_complete());
        prop_assert_eq!(list.is_strongly_connected(), matrix.is_strongly_connected());
    }

    #[test]
    fn self_loops_always_fail(n in 1usize..12, pick in any::<prop::sample::Index>()) {
        let u = pick.index(n);
        let mut list = ListDigraph::new(n);
        let mut matrix = MatrixDigraph::new(n);
        prop_assert_eq!(list.add_edge(u, u), Err(GraphError::InvalidEdge { vertex: u }));
        prop_assert_eq!(matrix.add_edge(u, u), Err(GraphError::InvalidEdge { vertex: u }));
        prop_assert_eq!(list.edge_count(), 0);
        prop_assert_eq!(matrix.edge_count(), 0);
    }

    #[test]
    fn strong_connectivity_matches_petgraph((n, ops) in arb_scenario()) {
        let mut list = ListDigraph::new(n);
        let mut matrix = MatrixDigraph::new(n);
        let mut model = BTreeSet::new();
        for op in &ops {
            apply(&mut list, &mut matrix, &mut model, op);
        }
        let edges: Vec<_> = model.into_iter().collect();
        prop_assert_eq!(list.is_strongly_connected(), petgraph_strongly_connected(n, &edges));
    }
}

#[test]
fn edge_count_tracks_distinct_pairs_under_repeated_edits() {
    let mut g = MatrixDigraph::new(4);
    for _ in 0..3 {
        g.add_edge(0, 1).expect("add");
        g.add_edge(1, 2).expect("add");
    }
    g.remove_edge(3, 0).expect("missing");
    g.remove_edge(1, 2).expect("remove");
    g.remove_edge(1, 2).expect("remove again");
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.edges(), vec![(0, 1)]);
}
