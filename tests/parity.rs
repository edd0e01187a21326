use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use sssp_bidir::{
    path_cost, BidirectionalDijkstra, Dijkstra, DirectedGraph, NodeExpander, SearchConfig, SearchError,
};

type Graph = DirectedGraph<usize, u64>;

fn path_graph(n: usize, w: u64) -> Graph {
    let mut g = Graph::new();
    g.add_node(0);
    for u in 1..n {
        g.add_arc(u - 1, u, w);
    }
    g
}

/// Center 0, leaves 1..=k.
fn star_graph(k: usize, w: u64) -> Graph {
    let mut g = Graph::new();
    for leaf in 1..=k {
        g.add_arc(0, leaf, w);
    }
    g
}

/// Two cliques joined by the single arc a-1 -> a.
fn bridge_cliques(a: usize, b: usize, w: u64) -> Graph {
    let mut g = Graph::new();
    for (lo, hi) in [(0, a), (a, a + b)] {
        for u in lo..hi {
            for v in lo..hi {
                if u != v {
                    g.add_arc(u, v, w);
                }
            }
        }
    }
    g.add_arc(a - 1, a, w);
    g
}

fn run_dijkstra(g: &Graph, s: usize, t: usize) -> Result<Vec<usize>, SearchError> {
    Dijkstra::new().find_shortest_path(&s, &t, &g.children(), g, u64::cmp)
}

fn run_bidi(g: &Graph, s: usize, t: usize) -> Result<Vec<usize>, SearchError> {
    BidirectionalDijkstra::new().find_shortest_path(&s, &t, &g.children(), &g.parents(), g, u64::cmp)
}

/// Minimum cost over all simple paths; exhaustive, so only for tiny graphs.
fn brute_force_cost(g: &Graph, s: usize, t: usize) -> Option<u64> {
    fn dfs(g: &Graph, u: usize, t: usize, cost: u64, on_path: &mut Vec<bool>, best: &mut Option<u64>) {
        if u == t {
            *best = Some(best.map_or(cost, |b| b.min(cost)));
            return;
        }
        for v in g.children().expand(&u) {
            if on_path[v] {
                continue;
            }
            on_path[v] = true;
            let w = g.arc_weight(&u, &v).unwrap_or(u64::MAX);
            dfs(g, v, t, cost.saturating_add(w), on_path, best);
            on_path[v] = false;
        }
    }
    let mut on_path = vec![false; g.node_count()];
    on_path[s] = true;
    let mut best = None;
    dfs(g, s, t, 0, &mut on_path, &mut best);
    best
}

fn assert_valid_path(g: &Graph, path: &[usize], s: usize, t: usize) {
    assert_eq!(path.first(), Some(&s));
    assert_eq!(path.last(), Some(&t));
    for arc in path.windows(2) {
        assert!(g.arc_weight(&arc[0], &arc[1]).is_some(), "no arc {} -> {} in {:?}", arc[0], arc[1], path);
    }
}

#[test]
fn parity_core_small_graphs() {
    let g = path_graph(10, 2);
    for run in [run_dijkstra, run_bidi] {
        let p = run(&g, 0, 9).unwrap();
        assert_eq!(p, (0..10).collect::<Vec<_>>());
        assert_eq!(path_cost(&p, &g), 18);
        assert_eq!(run(&g, 9, 0), Err(SearchError::Unreachable));
    }

    let g = star_graph(12, 1);
    for run in [run_dijkstra, run_bidi] {
        assert_eq!(run(&g, 0, 5).unwrap(), vec![0, 5]);
        assert_eq!(run(&g, 1, 2), Err(SearchError::Unreachable));
    }

    let g = bridge_cliques(4, 4, 1);
    for run in [run_dijkstra, run_bidi] {
        assert_eq!(run(&g, 0, 7).unwrap(), vec![0, 3, 4, 7]);
        assert_eq!(run(&g, 7, 0), Err(SearchError::Unreachable));
    }
}

#[test]
fn source_equal_to_target_is_single_node() {
    let g = bridge_cliques(3, 3, 5);
    for n in 0..g.node_count() {
        for run in [run_dijkstra, run_bidi] {
            let p = run(&g, n, n).unwrap();
            assert_eq!(p, vec![n]);
            assert_eq!(path_cost(&p, &g), 0);
        }
    }
}

#[test]
fn brute_force_small_random_graphs() {
    for seed in 1..=60u64 {
        let mut rng = SmallRng::seed_from_u64(seed * 7919);
        let n = rng.gen_range(2..=8);
        let m = rng.gen_range(0..=n * 3);
        let g = Graph::random(n, m, &mut rng, |r| r.gen_range(1..10));
        for s in 0..n {
            for t in 0..n {
                let expected = brute_force_cost(&g, s, t);
                for (name, got) in [("dijkstra", run_dijkstra(&g, s, t)), ("bidirectional", run_bidi(&g, s, t))] {
                    match (expected, got) {
                        (None, Err(SearchError::Unreachable)) => {}
                        (Some(cost), Ok(path)) => {
                            assert_valid_path(&g, &path, s, t);
                            assert_eq!(path_cost(&path, &g), cost, "{name} seed {seed} {s}->{t}");
                        }
                        (e, r) => panic!("{name} seed {seed} {s}->{t}: expected {e:?}, got {r:?}"),
                    }
                }
            }
        }
    }
}

#[test]
fn parity_random_large_graph() {
    let mut rng = SmallRng::seed_from_u64(13);
    let g = Graph::random(2_000, 10_000, &mut rng, |r| r.gen_range(1..100));
    let mut unreachable = 0;
    for _ in 0..25 {
        let s = rng.gen_range(0..g.node_count());
        let t = rng.gen_range(0..g.node_count());
        match (run_dijkstra(&g, s, t), run_bidi(&g, s, t)) {
            (Ok(p1), Ok(p2)) => {
                assert_valid_path(&g, &p2, s, t);
                assert_eq!(path_cost(&p1, &g), path_cost(&p2, &g), "{s}->{t}");
            }
            (Err(e1), Err(e2)) => {
                assert_eq!(e1, SearchError::Unreachable);
                assert_eq!(e2, SearchError::Unreachable);
                unreachable += 1;
            }
            (r1, r2) => panic!("{s}->{t}: dijkstra {r1:?} vs bidirectional {r2:?}"),
        }
    }
    assert!(unreachable < 25);
}

#[test]
fn parity_random_float_weights() {
    let mut rng = SmallRng::seed_from_u64(42);
    let g = DirectedGraph::<usize, f64>::random(500, 2_500, &mut rng, |r| 100.0 * r.gen::<f64>());
    for _ in 0..20 {
        let s = rng.gen_range(0..500);
        let t = rng.gen_range(0..500);
        let d = Dijkstra::new().find_shortest_path(&s, &t, &g.children(), &g, f64::total_cmp);
        let b = BidirectionalDijkstra::new().find_shortest_path(&s, &t, &g.children(), &g.parents(), &g, f64::total_cmp);
        match (d, b) {
            (Ok(p1), Ok(p2)) => {
                let (c1, c2) = (path_cost(&p1, &g), path_cost(&p2, &g));
                assert!((c1 - c2).abs() <= 1e-9 * c1.max(1.0), "{s}->{t}: {c1} vs {c2}");
            }
            (Err(_), Err(_)) => {}
            (r1, r2) => panic!("{s}->{t}: dijkstra {r1:?} vs bidirectional {r2:?}"),
        }
    }
}

#[test]
fn repeated_searches_are_identical() {
    let mut rng = SmallRng::seed_from_u64(5);
    let g = Graph::random(300, 1_500, &mut rng, |r| r.gen_range(1..50));
    let bidi = BidirectionalDijkstra::new();
    for (s, t) in [(0, 299), (17, 4), (123, 21)] {
        let first = bidi.search(&s, &t, &g.children(), &g.parents(), &g, u64::cmp);
        let second = bidi.search(&s, &t, &g.children(), &g.parents(), &g, u64::cmp);
        assert_eq!(first, second);
        assert_eq!(run_dijkstra(&g, s, t), run_dijkstra(&g, s, t));
    }
}

#[test]
fn skipping_stale_entries_preserves_costs() {
    let mut rng = SmallRng::seed_from_u64(99);
    let g = Graph::random(400, 2_400, &mut rng, |r| r.gen_range(1..30));
    let skipping = SearchConfig { skip_settled_on_pop: true, ..SearchConfig::default() };
    for _ in 0..20 {
        let s = rng.gen_range(0..400);
        let t = rng.gen_range(0..400);
        let plain = run_bidi(&g, s, t).map(|p| path_cost(&p, &g));
        let skipped = BidirectionalDijkstra::with_config(skipping)
            .search(&s, &t, &g.children(), &g.parents(), &g, u64::cmp)
            .map(|o| path_cost(&o.path, &g));
        let oracle = Dijkstra::with_config(skipping)
            .find_shortest_path(&s, &t, &g.children(), &g, u64::cmp)
            .map(|p| path_cost(&p, &g));
        assert_eq!(plain, skipped);
        assert_eq!(plain, oracle);
    }
}

#[test]
fn stats_serialize_to_json() {
    let g = bridge_cliques(4, 4, 1);
    let out = BidirectionalDijkstra::new()
        .search(&0, &7, &g.children(), &g.parents(), &g, u64::cmp)
        .unwrap();
    let json = serde_json::to_value(out.stats).unwrap();
    assert!(json["forward"]["pushes"].as_u64().unwrap() >= 1);
    assert!(json["backward"]["pops"].as_u64().unwrap() >= 1);
    assert!(json["meeting_updates"].as_u64().unwrap() >= 1);
}
