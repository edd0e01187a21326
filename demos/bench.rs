use rand::{rngs::SmallRng, Rng, SeedableRng};
use sssp_bidir::{path_cost, BidirectionalDijkstra, Dijkstra, DirectedGraph, SearchConfig, SearchError, SearchOutcome};
use std::fs::File;
use std::io::Write;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

type Graph = DirectedGraph<usize, f32>;

fn clock_seed() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_millis() as u64).unwrap_or(0)
}

fn parse_seed(raw: Option<&String>) -> u64 {
    match raw {
        None => clock_seed(),
        Some(v) => v.parse().unwrap_or_else(|_| {
            warn!(value = %v, "could not parse seed, falling back to the clock");
            clock_seed()
        }),
    }
}

fn summarize(result: &Result<SearchOutcome<usize>, SearchError>, g: &Graph, ms: f64) -> serde_json::Value {
    match result {
        Ok(o) => serde_json::json!({
            "ms": ms,
            "hops": o.path.len() - 1,
            "cost": path_cost(&o.path, g),
            "stats": o.stats,
        }),
        Err(e) => serde_json::json!({ "ms": ms, "error": e.to_string() }),
    }
}

fn run_trial(g: &Graph, rng: &mut SmallRng, config: SearchConfig) -> serde_json::Value {
    let source = rng.gen_range(0..g.node_count());
    let target = rng.gen_range(0..g.node_count());
    info!(source, target, "trial");

    let t0 = Instant::now();
    let uni = Dijkstra::with_config(config).search(&source, &target, &g.children(), g, f32::total_cmp);
    let dt_uni = t0.elapsed().as_secs_f64() * 1000.0;

    let t1 = Instant::now();
    let bidi = BidirectionalDijkstra::with_config(config).search(
        &source,
        &target,
        &g.children(),
        &g.parents(),
        g,
        f32::total_cmp,
    );
    let dt_bidi = t1.elapsed().as_secs_f64() * 1000.0;

    let agree = match (&uni, &bidi) {
        (Ok(a), Ok(b)) => {
            let (ca, cb) = (path_cost(&a.path, g), path_cost(&b.path, g));
            (ca - cb).abs() <= 1e-3 * ca.max(1.0)
        }
        (Err(a), Err(b)) => a == b,
        _ => false,
    };
    if !agree {
        warn!(source, target, "searches disagree");
    }
    serde_json::json!({
        "source": source,
        "target": target,
        "agree": agree,
        "dijkstra": summarize(&uni, g, dt_uni),
        "bidirectional": summarize(&bidi, g, dt_bidi),
        "speedup": dt_uni / dt_bidi.max(1e-9),
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help") {
        eprintln!("Usage: bench [--nodes 100000] [--arcs 1000000] [--trials 1] [--seed N] [--out report.json]");
        return Ok(());
    }
    let flag = |name: &str| args.iter().position(|a| a == name).and_then(|i| args.get(i + 1));
    let nodes: usize = flag("--nodes").and_then(|v| v.parse().ok()).unwrap_or(100_000);
    let arcs: usize = flag("--arcs").and_then(|v| v.parse().ok()).unwrap_or(1_000_000);
    let trials: usize = flag("--trials").and_then(|v| v.parse().ok()).unwrap_or(1);
    let seed = parse_seed(flag("--seed"));
    let config = SearchConfig::from_env();
    info!(seed, nodes, arcs, trials, ?config, "starting");

    let mut rng = SmallRng::seed_from_u64(seed);
    let t0 = Instant::now();
    let g = Graph::random(nodes, arcs, &mut rng, |r| 100.0 * r.gen::<f32>());
    let build_ms = t0.elapsed().as_secs_f64() * 1000.0;
    info!(build_ms, "graph built");

    let results: Vec<serde_json::Value> = if nodes == 0 {
        Vec::new()
    } else {
        (0..trials).map(|_| run_trial(&g, &mut rng, config)).collect()
    };
    let report = serde_json::json!({
        "seed": seed,
        "nodes": nodes,
        "arcs": g.arc_count(),
        "build_ms": build_ms,
        "config": config,
        "trials": results,
    });

    let text = serde_json::to_string_pretty(&report)?;
    match flag("--out") {
        Some(out_path) => {
            if let Some(dir) = std::path::Path::new(out_path).parent() {
                std::fs::create_dir_all(dir)?;
            }
            File::create(out_path)?.write_all(text.as_bytes())?;
            info!(path = %out_path, "wrote report");
        }
        None => println!("{text}"),
    }
    Ok(())
}
