use clap::Parser;
use color_eyre::Result;
use env_logger::Env;
use log::{info, warn};
use std::path::PathBuf;

use routesim::config::{self, SimulationConfig};
use routesim::network::NetworkModel;
use routesim::report::{self, RoutingReport};
use routesim::topology::{generate_topology, seeded_rng};

/// Shortest-path routing simulator for fully connected host networks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the simulation configuration YAML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of hosts in the network (overrides the configuration file)
    #[arg(short = 'n', long)]
    hosts: Option<usize>,

    /// Seed for reproducible topology generation
    #[arg(long)]
    seed: Option<u64>,

    /// Smallest random link distance (overrides the configuration file)
    #[arg(long)]
    min_distance: Option<u32>,

    /// Largest random link distance (overrides the configuration file)
    #[arg(long)]
    max_distance: Option<u32>,

    /// Source host for a route trace
    #[arg(short, long, requires = "dest")]
    source: Option<usize>,

    /// Destination host for a route trace
    #[arg(short, long, requires = "source")]
    dest: Option<usize>,

    /// Print every host's routing table
    #[arg(long)]
    show_tables: bool,

    /// Write a JSON report of all routing tables to this path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Starting routesim");

    // Load configuration, then apply CLI overrides
    let mut config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(hosts) = args.hosts {
        config.network.hosts = hosts;
    }
    if let Some(seed) = args.seed {
        config.network.seed = Some(seed);
    }
    if let Some(min_distance) = args.min_distance {
        config.network.min_distance = min_distance;
    }
    if let Some(max_distance) = args.max_distance {
        config.network.max_distance = max_distance;
    }
    config.validate()?;

    info!(
        "Simulating {} hosts with link distances {}..={}",
        config.network.hosts, config.network.min_distance, config.network.max_distance
    );
    if config.network.seed.is_none() {
        warn!("No seed configured; this run is not reproducible");
    }

    // Generate the topology and build all routing tables
    let mut rng = seeded_rng(config.network.seed);
    let topology = generate_topology(
        config.network.hosts,
        config.network.distance_range(),
        &mut rng,
    )?;

    println!("{}", report::render_topology(&topology));

    let model = NetworkModel::build(topology);

    if args.show_tables {
        for table in model.tables() {
            println!("{}", report::render_table(table));
        }
    }

    if let (Some(source), Some(dest)) = (args.source, args.dest) {
        let hops = model.trace_route(source, dest)?;
        println!("{}", report::render_trace(source, dest, &hops));
    }

    if let Some(output) = &args.output {
        RoutingReport::from_model(&model).write_report(output)?;
    }

    info!("Simulation completed successfully");
    Ok(())
}
