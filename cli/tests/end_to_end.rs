use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use graph_explorer_cli::args::Cli;
use graph_explorer_cli::commands;
use graph_explorer_cli::config::{MstAlgorithm, OutputFormat, Settings, DEFAULT_CONFIG_FILE};
use tempfile::TempDir;

const SCENARIO: &str = "4\n0,1,4|0,2,1\n2,3,2\n";

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Parse `args` the way the binary does, then run and render.
fn run_in(dir: &Path, args: &[&str]) -> anyhow::Result<String> {
    let mut argv = vec!["graph-explorer"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv)?;
    let settings = Settings::discover(cli.config.as_deref(), dir)?;
    let report = commands::run(&cli, &settings)?;
    Ok(report.render(cli.format.unwrap_or(settings.format))?)
}

#[test]
fn test_summary_text() {
    let dir = TempDir::new().unwrap();
    let file = write(dir.path(), "g.txt", SCENARIO);

    let out = run_in(dir.path(), &["summary", file.to_str().unwrap()]).unwrap();
    assert!(out.starts_with("The number of vertices is 4\n"));
    assert!(out.contains("0 (0): (0, 1, 4) (0, 2, 1)"));
    assert!(out.contains("The graph is connected"));
    assert!(out.contains("MST total weight: 7"));
}

#[test]
fn test_summary_disconnected() {
    let dir = TempDir::new().unwrap();
    let file = write(dir.path(), "g.txt", "4\n0,1,4\n2,3,2\n");

    let out = run_in(dir.path(), &["summary", file.to_str().unwrap()]).unwrap();
    assert!(out.contains("The graph is not connected"));
    assert!(!out.contains("MST"));
}

#[test]
fn test_mst_json() {
    let dir = TempDir::new().unwrap();
    let file = write(dir.path(), "g.txt", SCENARIO);

    let out = run_in(dir.path(), &["mst", file.to_str().unwrap(), "--format", "json"]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["report"], "mst");
    assert_eq!(json["algorithm"], "kruskal");
    assert_eq!(json["mst"]["total_weight"], 7.0);
    assert_eq!(json["mst"]["edges"].as_array().unwrap().len(), 3);
    assert_eq!(json["mst"]["tree"]["root"], 0);
}

#[test]
fn test_path_text() {
    let dir = TempDir::new().unwrap();
    let file = write(dir.path(), "g.txt", SCENARIO);

    let out = run_in(dir.path(), &["path", file.to_str().unwrap(), "1", "3"]).unwrap();
    assert!(out.contains("The shortest path from (1) to (3) is: 1, 0, 2, 3"));
    assert!(out.contains("Shortest path total weight: 7"));
}

#[test]
fn test_path_on_disconnected_graph_fails() {
    let dir = TempDir::new().unwrap();
    let file = write(dir.path(), "g.txt", "3\n0,1,1\n");

    let err = run_in(dir.path(), &["path", file.to_str().unwrap(), "0", "1"]).unwrap_err();
    assert_eq!(err.to_string(), "Graph is not connected");
}

#[test]
fn test_paths_from_source() {
    let dir = TempDir::new().unwrap();
    let file = write(dir.path(), "g.txt", SCENARIO);

    let out = run_in(dir.path(), &["paths", file.to_str().unwrap(), "--source", "2"]).unwrap();
    assert!(out.starts_with("All shortest paths from 2 with costs are:"));
    assert!(out.contains("A path from 2 to 1: 2 0 1 (cost: 5)"));
    assert!(out.contains("A path from 2 to 3: 2 3 (cost: 2)"));
}

#[test]
fn test_traverse_bfs_from_start() {
    let dir = TempDir::new().unwrap();
    let file = write(dir.path(), "g.txt", SCENARIO);

    let out = run_in(
        dir.path(),
        &["traverse", file.to_str().unwrap(), "--order", "bfs", "--start", "2"],
    )
    .unwrap();
    assert!(out.starts_with("BFS from 2\n"));
    assert!(out.contains("Search order: 2 0 3 1"));
    assert!(out.contains("Found 4 of 4 vertices: the graph is connected"));
}

#[test]
fn test_directed_flag_limits_reach() {
    let dir = TempDir::new().unwrap();
    let file = write(dir.path(), "g.txt", "3\n1,0,1|1,2,1\n");

    let out = run_in(dir.path(), &["traverse", file.to_str().unwrap(), "--directed"]).unwrap();
    assert!(out.contains("Found 1 of 3 vertices: the graph is not connected"));
}

#[test]
fn test_default_config_file_is_discovered() {
    let dir = TempDir::new().unwrap();
    let file = write(dir.path(), "g.txt", SCENARIO);
    write(
        dir.path(),
        DEFAULT_CONFIG_FILE,
        "mst_algorithm = \"prim\"\nstart_vertex = 3\nformat = \"json\"\n",
    );

    let settings = Settings::discover(None, dir.path()).unwrap();
    assert_eq!(settings.mst_algorithm, MstAlgorithm::Prim);
    assert_eq!(settings.format, OutputFormat::Json);

    let out = run_in(dir.path(), &["mst", file.to_str().unwrap()]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["algorithm"], "prim");
    assert_eq!(json["mst"]["tree"]["root"], 3);
    assert_eq!(json["mst"]["total_weight"], 7.0);
}

#[test]
fn test_command_line_overrides_config() {
    let dir = TempDir::new().unwrap();
    let file = write(dir.path(), "g.txt", SCENARIO);
    let config = write(dir.path(), "other.toml", "mst_algorithm = \"prim\"\nformat = \"json\"\n");

    let out = run_in(
        dir.path(),
        &[
            "--config",
            config.to_str().unwrap(),
            "--format",
            "text",
            "mst",
            file.to_str().unwrap(),
            "--algorithm",
            "kruskal",
        ],
    )
    .unwrap();
    assert!(out.starts_with("Root is: 0\n"));
    assert!(out.contains("Total weight: 7"));
}

#[test]
fn test_command_line_can_force_undirected() {
    let dir = TempDir::new().unwrap();
    let file = write(dir.path(), "g.txt", "3\n1,0,1|1,2,1\n");
    write(dir.path(), DEFAULT_CONFIG_FILE, "directed = true\n");
    let file = file.to_str().unwrap();

    let out = run_in(dir.path(), &["traverse", file]).unwrap();
    assert!(out.contains("Search order: 0\n"));
    assert!(out.contains("Found 1 of 3 vertices: the graph is not connected"));

    let out = run_in(dir.path(), &["traverse", file, "--directed=false"]).unwrap();
    assert!(out.contains("Search order: 0 1 2"));
    assert!(out.contains("Found 3 of 3 vertices: the graph is connected"));
}

#[test]
fn test_mst_on_directed_input_is_refused() {
    let dir = TempDir::new().unwrap();
    let file = write(dir.path(), "g.txt", "3\n1,0,1|1,2,1\n");
    let file = file.to_str().unwrap();

    for algorithm in ["kruskal", "prim"] {
        let err = run_in(dir.path(), &["mst", file, "--directed", "--algorithm", algorithm])
            .unwrap_err();
        assert!(err.to_string().contains("need undirected input"));
    }

    let out = run_in(dir.path(), &["mst", file, "--algorithm", "prim"]).unwrap();
    assert!(out.contains("Total weight: 2"));
}

#[test]
fn test_unknown_config_key_rejected() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), DEFAULT_CONFIG_FILE, "colour = \"blue\"\n");
    assert!(Settings::discover(None, dir.path()).is_err());
}

#[test]
fn test_missing_explicit_config_is_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(Settings::discover(Some(&missing), dir.path()).is_err());
}

#[test]
fn test_bad_input_reports_line() {
    let dir = TempDir::new().unwrap();
    let file = write(dir.path(), "g.txt", "3\n0,1,1\n0,7,2\n");

    let err = run_in(dir.path(), &["summary", file.to_str().unwrap()]).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("cannot load graph from"));
    assert!(msg.contains("line 3: vertex 7 out of range for 3 vertices"));
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.txt");
    assert!(run_in(dir.path(), &["summary", missing.to_str().unwrap()]).is_err());
}
