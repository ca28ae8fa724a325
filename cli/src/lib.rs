//! graph-explorer: command-line front end for graph-explorer-core.
//!
//! Loads an edge-list file, builds the graph and reports connectivity,
//! minimum spanning trees and shortest paths as text or JSON.

pub mod args;
pub mod commands;
pub mod config;
pub mod load;
pub mod report;
