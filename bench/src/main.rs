use clap::{Parser, ValueEnum};
use graph_explorer_core::{Graph, SpanningTree};
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(
    name = "graph-explorer-bench",
    about = "Time traversal, MST and shortest-path algorithms on generated graphs"
)]
struct Args {
    #[arg(value_enum, default_value_t = Mode::All)]
    mode: Mode,

    /// Vertex count per generated graph. Prim and the scan Dijkstra are
    /// O(V²), so keep this modest.
    #[arg(long, default_value_t = 5_000)]
    nodes: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Run every generator
    All,
    /// Random recursive tree (exactly V-1 edges)
    Tree,
    /// Watts-Strogatz ring lattice + shortcuts
    Smallworld,
    /// Random spanning tree plus uniform extra edges
    Random,
    /// Two dense clusters joined by a thin bridge
    Barbell,
    /// Square lattice (many equal-length paths)
    Grid,
}

type Generator = fn(usize) -> Graph;

fn main() {
    let args = Args::parse();

    println!("graph-explorer-bench");
    println!("====================");
    println!();

    let generators: Vec<(&str, Generator)> = match args.mode {
        Mode::Tree => vec![("Random tree", gen_tree)],
        Mode::Smallworld => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        Mode::Random => vec![("Random connected", gen_random)],
        Mode::Barbell => vec![("Barbell (cluster-bridge-cluster)", gen_barbell)],
        Mode::Grid => vec![("Grid lattice", gen_grid)],
        Mode::All => vec![
            ("Random tree", gen_tree as Generator),
            ("Small-world (Watts-Strogatz)", gen_small_world),
            ("Random connected", gen_random),
            ("Barbell (cluster-bridge-cluster)", gen_barbell),
            ("Grid lattice", gen_grid),
        ],
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, args.nodes.max(2));
    }
}

fn ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let t = Instant::now();
    let out = f();
    (out, t.elapsed())
}

fn run_benchmark(name: &str, generator: Generator, node_count: usize) {
    println!("--- {} ---", name);
    println!("Target: {} vertices", node_count);

    let (graph, gen_time) = timed(|| generator(node_count));
    println!(
        "Generated in {:.2}s: {} vertices, {} arcs, ~{:.1}MB",
        gen_time.as_secs_f64(),
        graph.size(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    println!();
    println!("{:<16} {:>12} {:>10}", "algorithm", "result", "time");
    println!("{:-<16} {:->12} {:->10}", "", "", "");

    let (tree, t) = timed(|| graph_explorer_core::dfs(&graph, 0));
    println!("{:<16} {:>12} {:>8.1}ms", "dfs", tree.vertices_found(), ms(t));

    let (tree, t) = timed(|| graph_explorer_core::bfs(&graph, 0));
    println!("{:<16} {:>12} {:>8.1}ms", "bfs", tree.vertices_found(), ms(t));

    let (kruskal, t) = timed(|| graph_explorer_core::kruskal_graph(&graph));
    print_mst("kruskal", &kruskal, t);

    let (prim, t) = timed(|| graph_explorer_core::minimum_spanning_tree(&graph));
    print_mst("prim", &prim, t);

    let far = graph.size() - 1;
    let (scan, t) = timed(|| graph_explorer_core::shortest_paths(&graph, 0));
    println!("{:<16} {:>12.1} {:>8.1}ms", "dijkstra (scan)", scan.cost(far), ms(t));

    let (heap, t) = timed(|| graph_explorer_core::shortest_paths_heap(&graph, 0));
    println!("{:<16} {:>12.1} {:>8.1}ms", "dijkstra (heap)", heap.cost(far), ms(t));

    println!();
    match (&kruskal, &prim) {
        (Ok(k), Ok(p)) => {
            let agree = (k.total_weight - p.total_weight).abs() < 1e-6;
            println!(
                "MST weights {}: kruskal {:.1}, prim {:.1}",
                if agree { "agree" } else { "DIFFER" },
                k.total_weight,
                p.total_weight
            );
        }
        _ => println!("MST weights: not comparable (graph not connected)"),
    }
    let costs_agree = scan
        .costs()
        .iter()
        .zip(heap.costs())
        .all(|(a, b)| a == b || (a - b).abs() < 1e-6);
    println!(
        "Dijkstra costs {}",
        if costs_agree { "agree" } else { "DIFFER" }
    );
    println!();
}

fn print_mst(label: &str, result: &graph_explorer_core::Result<SpanningTree>, t: Duration) {
    match result {
        Ok(mst) => println!("{:<16} {:>12.1} {:>8.1}ms", label, mst.total_weight, ms(t)),
        Err(e) => println!("{:<16} {:>12} {:>8.1}ms ({})", label, "error", ms(t), e),
    }
}

// ---------------------------------------------------------------------------
// Generators: deterministic, connected, undirected, integer weights 1..=100
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
    fn index(&mut self, max: usize) -> usize {
        self.next(max as u64) as usize
    }
    fn weight(&mut self) -> f64 {
        (self.next(100) + 1) as f64
    }
}

/// Insert `u -> v` and `v -> u`. Self-loops and repeats are skipped.
fn connect(graph: &mut Graph, rng: &mut FastRng, u: usize, v: usize) {
    if u == v {
        return;
    }
    let w = rng.weight();
    if graph.add_weighted_edge(u, v, w) {
        graph.add_weighted_edge(v, u, w);
    }
}

fn labelled(node_count: usize) -> Graph {
    let mut graph = Graph::with_capacity(node_count);
    for i in 0..node_count {
        graph.add_vertex(i);
    }
    graph
}

/// Each new vertex attaches to a uniformly chosen earlier one.
fn gen_tree(node_count: usize) -> Graph {
    let mut graph = labelled(node_count);
    let mut rng = FastRng::new(42);
    for v in 1..node_count {
        let parent = rng.index(v);
        connect(&mut graph, &mut rng, parent, v);
    }
    graph
}

/// Ring lattice with `k` neighbours per side. Each lattice edge is kept and,
/// with probability `p`, joined by a random shortcut.
fn gen_small_world(node_count: usize) -> Graph {
    let k = 5usize;
    let p = 0.05f64;
    let mut graph = labelled(node_count);
    let mut rng = FastRng::new(67890);

    for i in 0..node_count {
        for j in 1..=k {
            connect(&mut graph, &mut rng, i, (i + j) % node_count);
            if rng.next_f64() < p {
                let shortcut = rng.index(node_count);
                connect(&mut graph, &mut rng, i, shortcut);
            }
        }
    }
    graph
}

/// Random tree for connectivity, then ~4 extra uniform edges per vertex.
fn gen_random(node_count: usize) -> Graph {
    let mut graph = gen_tree(node_count);
    let mut rng = FastRng::new(54321);
    for _ in 0..node_count * 4 {
        let from = rng.index(node_count);
        let to = rng.index(node_count);
        connect(&mut graph, &mut rng, from, to);
    }
    graph
}

/// Two clusters joined by a chain of bridge vertices. Each cluster vertex
/// links to its predecessor, which keeps the cluster connected, plus up to
/// 10 random peers.
fn gen_barbell(node_count: usize) -> Graph {
    let bridge_len = 10usize.min(node_count / 3);
    let cluster = (node_count - bridge_len) / 2;
    let mut graph = labelled(node_count);
    let mut rng = FastRng::new(99999);

    fill_cluster(&mut graph, &mut rng, 0, cluster);

    // Chain from the last vertex of cluster A through the bridge vertices
    // to the first vertex of cluster B.
    let b_start = cluster + bridge_len;
    for v in cluster..=b_start {
        connect(&mut graph, &mut rng, v - 1, v);
    }

    fill_cluster(&mut graph, &mut rng, b_start, node_count - b_start);
    graph
}

fn fill_cluster(graph: &mut Graph, rng: &mut FastRng, base: usize, size: usize) {
    for i in 1..size {
        connect(graph, rng, base + i - 1, base + i);
        for _ in 0..10usize.min(size - 1) {
            let peer = rng.index(size);
            connect(graph, rng, base + i, base + peer);
        }
    }
}

/// Square lattice, row-major. The last row may be partial.
fn gen_grid(node_count: usize) -> Graph {
    let side = ((node_count as f64).sqrt().ceil() as usize).max(1);
    let mut graph = labelled(node_count);
    let mut rng = FastRng::new(31337);
    for v in 0..node_count {
        if (v + 1) % side != 0 && v + 1 < node_count {
            connect(&mut graph, &mut rng, v, v + 1);
        }
        if v + side < node_count {
            connect(&mut graph, &mut rng, v, v + side);
        }
    }
    graph
}
