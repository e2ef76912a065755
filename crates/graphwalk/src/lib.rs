//! Graphwalk - directed graph traversal, path search, and ancestry lookup.
//!
//! The library exposes a generic adjacency-set [`graph::Graph`] with
//! breadth-first and depth-first traversals and searches, an
//! [`ancestry::Lineage`] for earliest-ancestor queries, and JSONL
//! persistence for both. The `graphwalk` binary wraps these in a CLI.

#![forbid(unsafe_code)]

pub mod ancestry;
pub mod domain;
pub mod error;
pub mod graph;
pub mod storage;

// Public CLI module (needed by binary)
pub mod cli;

// Command implementations
pub mod commands;

pub mod app;
pub mod output;
