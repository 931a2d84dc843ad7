mod common;

use std::collections::{HashMap, VecDeque};

use common::trail;
use squallywood_lib::{build_graph, find_route, RouteGraph, TrailCatalog, TrailRecord};

/// Reference hop distance computed with a plain level-by-level BFS.
fn reference_distance(graph: &RouteGraph, start: &str, goal: &str) -> Option<usize> {
    let mut distance: HashMap<&str, usize> = HashMap::from([(start, 0)]);
    let mut frontier = VecDeque::from([start]);
    while let Some(current) = frontier.pop_front() {
        let next_distance = distance[current] + 1;
        for neighbour in graph.neighbours(current) {
            if !distance.contains_key(neighbour.as_str()) {
                distance.insert(neighbour.as_str(), next_distance);
                frontier.push_back(neighbour.as_str());
            }
        }
    }
    distance.get(goal).copied()
}

/// Deterministic pseudo-random graphs with self-loops, multi-edges and
/// dangling neighbours.
fn generated_records(seed: u64, trails: usize) -> Vec<TrailRecord> {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as usize
    };

    (0..trails)
        .map(|index| {
            let degree = next() % 4;
            let connections: Vec<String> = (0..degree)
                .map(|_| format!("T{}", next() % (trails + 2)))
                .collect();
            TrailRecord::new(format!("T{index}"), connections)
        })
        .collect()
}

fn assert_valid_route(graph: &RouteGraph, steps: &[String], start: &str, goal: &str) {
    assert_eq!(steps.first().map(String::as_str), Some(start));
    assert_eq!(steps.last().map(String::as_str), Some(goal));
    for pair in steps.windows(2) {
        assert!(
            graph.neighbours(&pair[0]).contains(&pair[1]),
            "{} -> {} is not an edge",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn routes_exist_exactly_when_reachable_and_are_shortest() {
    for seed in 1..=25 {
        let records = generated_records(seed, 12);
        let graph = build_graph(&records);
        let names = graph.catalog().sorted_names();

        for start in &names {
            for goal in &names {
                let expected = reference_distance(&graph, start, goal);
                let found = find_route(&graph, start, goal);

                match (expected, found) {
                    (Some(hops), Some(route)) => {
                        assert_eq!(route.hop_count(), hops, "seed {seed}: {start} -> {goal}");
                        assert_valid_route(&graph, route.steps(), start, goal);
                    }
                    (None, None) => {}
                    (expected, found) => panic!(
                        "seed {seed}: {start} -> {goal} expected {expected:?}, found {found:?}"
                    ),
                }
            }
        }
    }
}

#[test]
fn every_known_trail_routes_to_itself() {
    let graph = build_graph(&generated_records(7, 10));
    for name in graph.catalog().sorted_names() {
        let route = find_route(&graph, &name, &name).expect("reflexive route");
        assert_eq!(route.steps(), [name.as_str()]);
    }
}

#[test]
fn unknown_endpoints_have_no_route_even_when_referenced() {
    let graph = build_graph(&[trail("A", &["Ghost"]), trail("B", &["A"])]);

    assert!(find_route(&graph, "A", "Ghost").is_none());
    assert!(find_route(&graph, "Ghost", "A").is_none());
    assert!(find_route(&graph, "Nowhere", "Nowhere").is_none());
    assert!(find_route(&graph, "B", "A").is_some());
}

#[test]
fn one_way_connection_only_routes_downhill() {
    let graph = build_graph(&[trail("A", &["B"]), trail("B", &[])]);

    assert_eq!(
        find_route(&graph, "A", "B").map(|route| route.into_steps()),
        Some(vec!["A".to_string(), "B".to_string()])
    );
    assert!(find_route(&graph, "B", "A").is_none());
}

#[test]
fn rebuilding_from_same_records_is_identical() {
    let records = generated_records(42, 15);

    assert_eq!(TrailCatalog::build(&records), TrailCatalog::build(&records));
}

#[test]
fn top_mid_bottom_scenario() {
    let graph = build_graph(&[
        trail("Top", &["Mid"]),
        trail("Mid", &["Bottom"]),
        trail("Bottom", &[]),
    ]);

    let route = graph.find_route("Top", "Bottom").expect("route exists");
    assert_eq!(route.steps(), ["Top", "Mid", "Bottom"]);
    assert!(graph.find_route("Bottom", "Top").is_none());
}

#[test]
fn diamond_prefers_first_listed_branch() {
    let graph = build_graph(&[
        trail("A", &["B", "C"]),
        trail("B", &["D"]),
        trail("C", &["D"]),
        trail("D", &[]),
    ]);
    assert_eq!(
        graph.find_route("A", "D").expect("route").steps(),
        ["A", "B", "D"]
    );

    let swapped = build_graph(&[
        trail("A", &["C", "B"]),
        trail("B", &["D"]),
        trail("C", &["D"]),
        trail("D", &[]),
    ]);
    assert_eq!(
        swapped.find_route("A", "D").expect("route").steps(),
        ["A", "C", "D"]
    );
}

#[test]
fn shorter_route_beats_earlier_longer_branch() {
    let graph = build_graph(&[
        trail("Start", &["Long1", "Goal"]),
        trail("Long1", &["Long2"]),
        trail("Long2", &["Goal"]),
        trail("Goal", &[]),
    ]);

    assert_eq!(
        graph.find_route("Start", "Goal").expect("route").steps(),
        ["Start", "Goal"]
    );
}
