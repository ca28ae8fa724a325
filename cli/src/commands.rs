use anyhow::{bail, Context, Result};
use graph_explorer_core::{self as algo, Graph, VertexId};

use crate::args::{Cli, Command};
use crate::config::{MstAlgorithm, Settings, TraversalOrder};
use crate::load;
use crate::report::{
    AdjacencyEntry, MstReport, PathEntry, PathReport, PathsReport, Report, SummaryReport,
    TraversalReport,
};

/// Load the command's input file and run it. `--directed` overrides the
/// settings file in either direction.
pub fn run(cli: &Cli, settings: &Settings) -> Result<Report> {
    let settings = Settings {
        directed: cli.directed.unwrap_or(settings.directed),
        ..settings.clone()
    };
    let file = cli.command.file();
    let list = load::load_file(file)
        .with_context(|| format!("cannot load graph from {}", file.display()))?;
    let graph = list.to_graph(settings.directed);
    execute(&cli.command, &graph, &settings)
}

/// Run a command against an already-built graph. `settings.directed` must
/// describe how `graph` was loaded.
pub fn execute(command: &Command, graph: &Graph, settings: &Settings) -> Result<Report> {
    match command {
        Command::Summary { .. } => summary(graph, settings.directed).map(Report::Summary),
        Command::Traverse { order, start, .. } => {
            let start = start.unwrap_or(settings.start_vertex);
            check_vertex(graph, start, "start")?;
            let tree = match order {
                TraversalOrder::Dfs => algo::dfs(graph, start),
                TraversalOrder::Bfs => algo::bfs(graph, start),
            };
            Ok(Report::Traversal(TraversalReport {
                order: *order,
                tree,
            }))
        }
        Command::Mst {
            algorithm, start, ..
        } => {
            if settings.directed {
                bail!("minimum spanning trees need undirected input; drop --directed");
            }
            let algorithm = algorithm.unwrap_or(settings.mst_algorithm);
            let mst = match algorithm {
                MstAlgorithm::Kruskal => algo::kruskal_graph(graph),
                MstAlgorithm::Prim => {
                    let start = start.unwrap_or(settings.start_vertex);
                    check_vertex(graph, start, "start")?;
                    algo::prim(graph, start)
                }
            }
            .context("cannot build minimum spanning tree")?;
            Ok(Report::Mst(MstReport { algorithm, mst }))
        }
        Command::Path { from, to, .. } => {
            if !graph.is_connected() {
                bail!("Graph is not connected");
            }
            check_vertex(graph, *from, "Cannot find path:")?;
            check_vertex(graph, *to, "Cannot find path:")?;
            let path = algo::shortest_path(graph, *from, *to).context("Cannot find path")?;
            Ok(Report::Path(PathReport {
                from: *from,
                to: *to,
                path,
            }))
        }
        Command::Paths { source, .. } => {
            let source = source.unwrap_or(settings.start_vertex);
            check_vertex(graph, source, "source")?;
            Ok(Report::Paths(all_paths(graph, source)))
        }
    }
}

fn check_vertex(graph: &Graph, v: VertexId, what: &str) -> Result<()> {
    if v >= graph.size() {
        bail!("{} vertex {} out of range for {} vertices", what, v, graph.size());
    }
    Ok(())
}

/// The MST is left out when the graph is disconnected, empty or directed.
fn summary(graph: &Graph, directed: bool) -> Result<SummaryReport> {
    let adjacency = graph
        .vertices()
        .iter()
        .enumerate()
        .map(|(vertex, label)| AdjacencyEntry {
            vertex,
            label: label.to_string(),
            arcs: graph
                .edges(vertex)
                .iter()
                .map(|e| algo::WeightedEdge::new(vertex, e.target, e.weight))
                .collect(),
        })
        .collect();

    let connected = graph.is_connected();
    let mst = if connected && !directed && !graph.is_empty() {
        Some(algo::kruskal_graph(graph).context("cannot build minimum spanning tree")?)
    } else {
        None
    };

    Ok(SummaryReport {
        vertex_count: graph.size(),
        adjacency,
        connected,
        mst,
    })
}

fn all_paths(graph: &Graph, source: VertexId) -> PathsReport {
    let spt = algo::shortest_paths(graph, source);
    let labels = graph.vertices();

    let paths = (0..graph.size())
        .map(|v| PathEntry {
            target: labels[v].to_string(),
            path: spt
                .is_reachable(v)
                .then(|| spt.tree.path_labels(v, labels))
                .flatten()
                .map(|p| p.into_iter().map(|l| l.to_string()).collect()),
            cost: spt.cost(v),
        })
        .collect();

    PathsReport {
        source: labels[source].to_string(),
        paths,
    }
}
