use dijkstra_paths::{reconstruct_path, AdjacencyGraph, Dijkstra, ShortestPathAlgorithm};
use std::collections::HashMap;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_source_equals_target() {
    let empty: HashMap<u32, Option<u32>> = HashMap::new();
    assert_eq!(reconstruct_path(&empty, &1, &1), Some(vec![1]));

    let predecessors = HashMap::from([(1, None), (2, Some(1))]);
    assert_eq!(reconstruct_path(&predecessors, &2, &2), Some(vec![2]));
}

#[test]
fn test_follows_chain_back_to_source() {
    let predecessors = HashMap::from([
        ("s", None),
        ("a", Some("s")),
        ("b", Some("a")),
        ("c", Some("b")),
        ("x", None),
    ]);

    assert_eq!(
        reconstruct_path(&predecessors, &"s", &"c"),
        Some(vec!["s", "a", "b", "c"])
    );
    assert_eq!(
        reconstruct_path(&predecessors, &"s", &"a"),
        Some(vec!["s", "a"])
    );
    // A chain may stop at an intermediate source
    assert_eq!(
        reconstruct_path(&predecessors, &"a", &"c"),
        Some(vec!["a", "b", "c"])
    );
}

#[test]
fn test_unreachable_target_is_no_path() {
    let predecessors = HashMap::from([
        ("s", None),
        ("a", Some("s")),
        ("x", None),
        ("y", Some("x")),
    ]);

    assert_eq!(reconstruct_path(&predecessors, &"s", &"x"), None);
    // Never a partial sequence, even when the chain is non-trivial
    assert_eq!(reconstruct_path(&predecessors, &"s", &"y"), None);
    assert_eq!(reconstruct_path(&predecessors, &"s", &"missing"), None);
}

#[test]
fn test_source_missing_from_map() {
    let predecessors = HashMap::from([("a", Some("s")), ("b", Some("a"))]);
    assert_eq!(
        reconstruct_path(&predecessors, &"s", &"b"),
        Some(vec!["s", "a", "b"])
    );
}

#[test]
fn test_cyclic_predecessors_are_rejected() {
    init_logging();
    let predecessors = HashMap::from([("s", None), ("a", Some("b")), ("b", Some("a"))]);
    assert_eq!(reconstruct_path(&predecessors, &"s", &"a"), None);

    let self_loop = HashMap::from([("s", None), ("a", Some("a"))]);
    assert_eq!(reconstruct_path(&self_loop, &"s", &"a"), None);
}

#[test]
fn test_get_path_delegates_to_reconstruction() {
    init_logging();
    let graph: AdjacencyGraph<u32, u32> =
        AdjacencyGraph::from_adjacency([
            (0, vec![(1, 1)]),
            (1, vec![(2, 1)]),
            (3, vec![(0, 1)]),
        ]);
    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, 0).unwrap();

    let get_path = |target: u32| {
        <Dijkstra as ShortestPathAlgorithm<u32, u32, AdjacencyGraph<u32, u32>>>::get_path(
            &dijkstra, &result, &target,
        )
    };

    assert_eq!(get_path(2), Some(vec![0, 1, 2]));
    assert_eq!(get_path(3), None);
    assert_eq!(get_path(0), Some(vec![0]));
}
