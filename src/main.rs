use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use campus_route::{CampusConfig, RoutePlanner};


#[derive(Parser)]
#[command(name = "campus-route", version, about = "Shortest walking routes between campus landmarks")]
struct Cli {
    /// TOML map to use instead of the built-in campus
    #[arg(long, global = true, value_name = "PATH")]
    map: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the shortest route between two landmarks (id or name)
    Route {
        from: String,
        to: String,

        /// Reserve the direct edge A -> B before routing, removing it from the map
        #[arg(long, num_args = 2, value_names = ["A", "B"])]
        reserve: Option<Vec<String>>,
    },

    /// List landmark ids and names
    Landmarks,
}

fn setup_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

/// Landmark argument as a node id, falling back to a name lookup
fn resolve(planner: &RoutePlanner, landmark: &str) -> Result<usize> {
    match landmark.parse::<usize>() {
        Ok(id) => Ok(id),
        Err(_) => Ok(planner.graph().id_of(landmark)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = match &cli.map {
        Some(path) => CampusConfig::load(path)
            .with_context(|| format!("failed to load map {}", path.display()))?,
        None => CampusConfig::sample(),
    };
    let mut planner = RoutePlanner::from_config(&config).context("invalid map")?;

    match cli.command {
        Command::Landmarks => {
            for (id, name) in planner.graph().landmarks() {
                println!("{id:>3}  {name}");
            }
        }
        Command::Route { from, to, reserve } => {
            if let Some(pair) = reserve {
                let a = resolve(&planner, &pair[0])?;
                let b = resolve(&planner, &pair[1])?;
                planner.request_reservation(a, b).context("invalid reservation")?;
                if let Some(reservation) = planner.apply_pending_reservation()? {
                    let graph = planner.graph();
                    let (from_name, to_name) = (graph.name(a)?, graph.name(b)?);
                    match reservation.weight {
                        Some(weight) => println!("Reserved {from_name} -> {to_name} ({weight})"),
                        None => println!("Reserved {from_name} -> {to_name} (already removed)"),
                    }
                }
            }

            let source = resolve(&planner, &from)?;
            let destination = resolve(&planner, &to)?;
            let route = planner.route(source, destination)
                .with_context(|| format!("cannot route from {from} to {to}"))?;
            println!("{route}");
        }
    }

    Ok(())
}
