use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{MstAlgorithm, OutputFormat, TraversalOrder};

#[derive(Parser, Debug)]
#[command(
    name = "graph-explorer",
    version,
    about = "Connectivity, minimum spanning trees and shortest paths for edge-list files"
)]
pub struct Cli {
    /// Settings file (default: ./graph-explorer.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Treat each triple as a single arc u -> v. `--directed=false` forces
    /// undirected loading over the settings file.
    #[arg(
        long,
        global = true,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub directed: Option<bool>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Vertex count, adjacency lists, connectivity and Kruskal MST
    Summary { file: PathBuf },

    /// Depth- or breadth-first search tree
    Traverse {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = TraversalOrder::Dfs)]
        order: TraversalOrder,
        #[arg(long)]
        start: Option<usize>,
    },

    /// Minimum spanning tree (undirected input only)
    Mst {
        file: PathBuf,
        #[arg(long, value_enum)]
        algorithm: Option<MstAlgorithm>,
        /// Root vertex (Prim only)
        #[arg(long)]
        start: Option<usize>,
    },

    /// Shortest path between two vertices
    Path {
        file: PathBuf,
        from: usize,
        to: usize,
    },

    /// Shortest paths from one vertex to every other
    Paths {
        file: PathBuf,
        #[arg(long)]
        source: Option<usize>,
    },
}

impl Command {
    pub fn file(&self) -> &PathBuf {
        match self {
            Command::Summary { file }
            | Command::Traverse { file, .. }
            | Command::Mst { file, .. }
            | Command::Path { file, .. }
            | Command::Paths { file, .. } => file,
        }
    }
}
