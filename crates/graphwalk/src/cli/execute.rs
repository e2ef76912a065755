//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands.

use anyhow::Result;
use serde_json::json;

use super::args::{
    AddEdgeArgs, AddParentArgs, AddVertexArgs, AncestorArgs, DemoArgs, InfoArgs, InitArgs,
    NeighborsArgs, SearchArgs, TraverseArgs,
};
use crate::app::App;
use crate::domain::{SearchStrategy, TraversalOrder};
use crate::error::Error;
use crate::output::{self, OutputMode};

/// Execute the init command
pub async fn execute_init(args: &InitArgs) -> Result<()> {
    use crate::commands::init;

    let current_dir = std::env::current_dir()?;

    if !args.quiet {
        println!("Initializing graphwalk repository...");
    }

    let result = init::init(&current_dir).await?;

    if !args.quiet {
        println!("Initialized graphwalk in {}", result.graphwalk_dir.display());
        println!("  Config:  {}", result.config_file.display());
        println!("  Graph:   {}", result.graph_file.display());
        println!("  Lineage: {}", result.lineage_file.display());
    }

    Ok(())
}

/// Execute the info command
pub async fn execute_info(app: &App, _args: &InfoArgs, output_mode: OutputMode) -> Result<()> {
    let graph = app.graph();
    let components = graph.strongly_connected_components();
    let cyclic = graph.is_cyclic();

    match output_mode {
        OutputMode::Json => {
            output::print_json(&json!({
                "root": app.root_dir().display().to_string(),
                "graph_file": app.graph_path().display().to_string(),
                "lineage_file": app.lineage_path().display().to_string(),
                "graph": {
                    "vertices": graph.vertex_count(),
                    "edges": graph.edge_count(),
                    "cyclic": cyclic,
                    "strongly_connected_components": components.len(),
                },
                "lineage": {
                    "individuals": app.lineage().len(),
                    "pairs": app.lineage().pairs().count(),
                },
                "defaults": app.config().defaults,
            }))?;
        }
        OutputMode::Text => {
            println!("Graphwalk Repository Information");
            println!("================================");
            println!();
            println!("Graph file:   {}", app.graph_path().display());
            println!("Lineage file: {}", app.lineage_path().display());
            println!();
            println!(
                "Graph: {} vertices, {} edges, {}, {} strongly connected components",
                graph.vertex_count(),
                graph.edge_count(),
                if cyclic { "cyclic" } else { "acyclic" },
                components.len()
            );
            println!(
                "Lineage: {} individuals, {} parent links",
                app.lineage().len(),
                app.lineage().pairs().count()
            );
            println!(
                "Defaults: order={}, strategy={}",
                app.config().defaults.order,
                app.config().defaults.strategy
            );
        }
    }

    Ok(())
}

/// Execute the add-vertex command
pub async fn execute_add_vertex(
    app: &mut App,
    args: &AddVertexArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let mut results = Vec::with_capacity(args.ids.len());
    for &id in &args.ids {
        let added = app.graph_mut().add_vertex(id);
        tracing::debug!(vertex = id, added, "Added vertex");
        results.push((id, added));
    }
    app.save_graph().await?;

    match output_mode {
        OutputMode::Json => {
            let vertices: Vec<_> = results
                .iter()
                .map(|&(id, added)| json!({ "id": id, "added": added }))
                .collect();
            output::print_json(&json!({ "vertices": vertices }))?;
        }
        OutputMode::Text => {
            for (id, added) in results {
                if added {
                    output::print_success(&format!("Added vertex {id}"))?;
                } else {
                    println!("Reset vertex {id} (outgoing edges cleared)");
                }
            }
        }
    }

    Ok(())
}

/// Execute the add-edge command
pub async fn execute_add_edge(
    app: &mut App,
    args: &AddEdgeArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let added = app.graph_mut().add_edge(args.from, args.to)?;
    if added {
        app.save_graph().await?;
    }

    match output_mode {
        OutputMode::Json => {
            output::print_json(&json!({
                "from": args.from,
                "to": args.to,
                "added": added,
            }))?;
        }
        OutputMode::Text => {
            if added {
                output::print_success(&format!("Added edge {} -> {}", args.from, args.to))?;
            } else {
                println!("Edge {} -> {} already exists", args.from, args.to);
            }
        }
    }

    Ok(())
}

/// Execute the neighbors command
pub async fn execute_neighbors(
    app: &App,
    args: &NeighborsArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let neighbors = app
        .graph()
        .neighbors(&args.id)
        .ok_or_else(|| Error::VertexNotFound(args.id.to_string()))?;
    output::print_neighbors(args.id, neighbors, output_mode)?;
    Ok(())
}

/// Execute the traverse command
pub async fn execute_traverse(
    app: &App,
    args: &TraverseArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let order = args
        .order
        .map_or(app.config().defaults.order, TraversalOrder::from);
    let visited = app.graph().traverse(order, &args.start)?;
    output::print_traversal(order, args.start, &visited, output_mode)?;
    Ok(())
}

/// Execute the search command
pub async fn execute_search(app: &App, args: &SearchArgs, output_mode: OutputMode) -> Result<()> {
    let strategy = args
        .strategy
        .map_or(app.config().defaults.strategy, SearchStrategy::from);
    let path = app.graph().search(strategy, &args.start, &args.dest)?;
    output::print_path(
        strategy,
        args.start,
        args.dest,
        path.as_deref(),
        output_mode,
    )?;
    Ok(())
}

/// Execute the add-parent command
pub async fn execute_add_parent(
    app: &mut App,
    args: &AddParentArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let added = app.lineage_mut().add_pair(args.parent, args.child);
    if added {
        app.save_lineage().await?;
    }

    match output_mode {
        OutputMode::Json => {
            output::print_json(&json!({
                "parent": args.parent,
                "child": args.child,
                "added": added,
            }))?;
        }
        OutputMode::Text => {
            if added {
                output::print_success(&format!(
                    "Recorded {} as a parent of {}",
                    args.parent, args.child
                ))?;
            } else {
                println!(
                    "{} is already recorded as a parent of {}",
                    args.parent, args.child
                );
            }
        }
    }

    Ok(())
}

/// Execute the ancestor command
pub async fn execute_ancestor(
    app: &App,
    args: &AncestorArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let ancestor = app.lineage().earliest_ancestor(&args.id);
    output::print_ancestor(args.id, ancestor, output_mode)?;
    Ok(())
}

/// Execute the demo command
pub async fn execute_demo(_args: &DemoArgs, output_mode: OutputMode) -> Result<()> {
    use crate::commands::demo;

    let report = demo::run()?;

    match output_mode {
        OutputMode::Json => output::print_json(&report)?,
        OutputMode::Text => {
            println!("Graph: {}", report.adjacency);
            println!();
            for run in &report.traversals {
                output::print_traversal(run.order, run.start, &run.visited, output_mode)?;
            }
            println!();
            for run in &report.searches {
                output::print_path(
                    run.strategy,
                    run.start,
                    run.dest,
                    run.path.as_deref(),
                    output_mode,
                )?;
            }
            println!();
            println!("Earliest ancestors:");
            for run in &report.ancestors {
                let ancestor = run
                    .earliest_ancestor
                    .map_or_else(|| output::NO_ANCESTOR.to_string(), |a| a.to_string());
                println!("  {:>2}: {ancestor}", run.individual);
            }
        }
    }

    Ok(())
}
