use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use fx_catalog::{BuiltNetwork, NetworkDef, build};
use fx_driver::{DriverState, FlowDriver, StepSize};
use fx_graph::{FlowGraph, NetworkEvent};
use fx_solver::compute_max_flow;

#[derive(Parser)]
#[command(name = "fx-cli")]
#[command(about = "fluxnet CLI - max-flow computation over capacitated networks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in example networks
    Presets,
    /// Print a network definition as JSON
    Show {
        /// Preset name, or a JSON file path with --file
        network: String,
        /// Treat NETWORK as a file path
        #[arg(long)]
        file: bool,
    },
    /// Compute the maximum flow in one batch run
    Solve {
        /// Preset name, or a JSON file path with --file
        network: String,
        /// Treat NETWORK as a file path
        #[arg(long)]
        file: bool,
    },
    /// Step the augmentation driver, printing every event
    Trace {
        /// Preset name, or a JSON file path with --file
        network: String,
        /// Treat NETWORK as a file path
        #[arg(long)]
        file: bool,
        /// Push one unit per traversal instead of the whole bottleneck
        #[arg(long)]
        unit: bool,
        /// Push a fixed amount per traversal (clamped to the bottleneck)
        #[arg(long, conflicts_with = "unit")]
        step: Option<i64>,
    },
    /// Write a network definition as JSON
    Export {
        /// Preset name
        preset: String,
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Error, Debug)]
enum CliError {
    #[error("unknown preset {0:?} (try `fx-cli presets`)")]
    UnknownPreset(String),

    #[error("catalog error: {0}")]
    Catalog(#[from] fx_catalog::CatalogError),

    #[error("solve error: {0}")]
    Solve(#[from] fx_solver::SolveError),

    #[error("driver error: {0}")]
    Driver(#[from] fx_driver::DriverError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Presets => cmd_presets(),
        Commands::Show { network, file } => cmd_show(&network, file),
        Commands::Solve { network, file } => cmd_solve(&network, file),
        Commands::Trace {
            network,
            file,
            unit,
            step,
        } => cmd_trace(&network, file, unit, step),
        Commands::Export { preset, output } => cmd_export(&preset, output.as_deref()),
    }
}

fn load_def(network: &str, from_file: bool) -> Result<NetworkDef, CliError> {
    if from_file {
        let json = fs::read_to_string(network)?;
        Ok(NetworkDef::from_json_str(&json)?)
    } else {
        fx_catalog::preset(network).ok_or_else(|| CliError::UnknownPreset(network.to_string()))
    }
}

fn cmd_presets() -> Result<(), CliError> {
    for def in fx_catalog::presets() {
        println!(
            "{:16} {:3} nodes {:3} edges  {} -> {}",
            def.name,
            def.nodes.len(),
            def.edges.len(),
            def.source,
            def.sink
        );
    }
    Ok(())
}

fn cmd_show(network: &str, from_file: bool) -> Result<(), CliError> {
    let def = load_def(network, from_file)?;
    println!("{}", def.to_json_string()?);
    Ok(())
}

fn cmd_solve(network: &str, from_file: bool) -> Result<(), CliError> {
    let def = load_def(network, from_file)?;
    let BuiltNetwork {
        mut graph,
        source,
        sink,
    } = build(&def)?;

    let total = compute_max_flow(&mut graph, source, sink)?;

    let paths = graph
        .take_events()
        .iter()
        .filter(|e| matches!(e, NetworkEvent::PathFound { .. }))
        .count();
    println!("network:       {}", def.name);
    println!("augmentations: {paths}");
    println!("max flow:      {total}");
    Ok(())
}

fn cmd_trace(
    network: &str,
    from_file: bool,
    unit: bool,
    step: Option<i64>,
) -> Result<(), CliError> {
    let def = load_def(network, from_file)?;
    let BuiltNetwork {
        mut graph,
        source,
        sink,
    } = build(&def)?;
    graph.take_events(); // trace shows the computation, not construction

    let step = match (unit, step) {
        (true, _) => StepSize::Unit,
        (false, Some(n)) => StepSize::Fixed(n),
        (false, None) => StepSize::Bottleneck,
    };
    let mut driver = FlowDriver::with_step(&mut graph, step);

    driver.start(source, sink)?;
    loop {
        for event in driver.take_events() {
            print_event(driver.graph(), &event);
        }
        if driver.state() != DriverState::Augmenting {
            break;
        }
        driver.advance()?;
    }
    println!("max flow: {}", driver.total_flow());
    Ok(())
}

fn cmd_export(preset: &str, output: Option<&Path>) -> Result<(), CliError> {
    let def =
        fx_catalog::preset(preset).ok_or_else(|| CliError::UnknownPreset(preset.to_string()))?;
    let json = def.to_json_string()?;
    match output {
        Some(path) => fs::write(path, json)?,
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Render an edge as `from->to` using node names.
fn edge_label(graph: &FlowGraph, edge: fx_core::EdgeId) -> String {
    match graph.edge(edge) {
        Some(e) => {
            let name = |id| {
                graph
                    .node(id)
                    .map(|n| n.name.clone())
                    .unwrap_or_else(|| id.to_string())
            };
            format!("{}->{}", name(e.from), name(e.to))
        }
        None => edge.to_string(),
    }
}

fn print_event(graph: &FlowGraph, event: &NetworkEvent) {
    match event {
        NetworkEvent::NodeAdded { node } => println!("node added: {node}"),
        NetworkEvent::EdgeAdded {
            edge,
            capacity,
            ..
        } => println!("edge added: {} cap {capacity}", edge_label(graph, *edge)),
        NetworkEvent::PathFound { edges } => {
            let labels: Vec<String> = edges.iter().map(|&e| edge_label(graph, e)).collect();
            println!("path found: {}", labels.join(" "));
        }
        NetworkEvent::FlowPushed {
            edge,
            new_flow,
            new_residual,
        } => println!(
            "pushed on {}: flow {new_flow}, residual {new_residual}",
            edge_label(graph, *edge)
        ),
        NetworkEvent::NoAugmentingPath { total } => {
            println!("no augmenting path remains (total {total})");
        }
        NetworkEvent::Completed { total } => println!("completed: max flow {total}"),
    }
}
