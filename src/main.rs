use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use hexroute::commands::{self, CommonOpts, GraphSource};
use hexroute::util;

#[derive(Parser, Debug)]
#[command(name = "hexroute", version, about = "Hex map adjacency, routes and bearings")]
struct Cli {
    #[command(flatten)]
    common: CommonOpts,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the adjacency graph from cell geometry and write it as JSON
    Adjacency {
        /// Cells JSON (defaults to data/cells.json)
        #[arg(long)]
        cells: Option<PathBuf>,
        /// Output adjacency JSON (defaults to data/adjacency.json)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Find the shortest route between two cells
    Route {
        /// Start cell id
        #[arg(long)]
        from: String,
        /// End cell id
        #[arg(long)]
        to: String,
        /// Build the graph from this cells JSON
        #[arg(long)]
        cells: Option<PathBuf>,
        /// Use this precomputed adjacency JSON
        #[arg(long)]
        adjacency: Option<PathBuf>,
        /// Cells the route may not pass through (comma-separated or repeated)
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<String>,
        /// Print the route as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Classify a direction into one of eight compass labels
    Bearing {
        /// Horizontal displacement
        #[arg(long, allow_negative_numbers = true, requires = "dy", conflicts_with_all = ["from", "to"])]
        dx: Option<f64>,
        /// Vertical displacement (north is positive)
        #[arg(long, allow_negative_numbers = true, requires = "dx")]
        dy: Option<f64>,
        /// Cells JSON used with --from/--to (defaults to data/cells.json)
        #[arg(long)]
        cells: Option<PathBuf>,
        /// Cell to look from
        #[arg(long, requires = "to")]
        from: Option<String>,
        /// Cell to look towards
        #[arg(long, requires = "from")]
        to: Option<String>,
    },

    /// Report asymmetric entries, isolated cells and component count
    Check {
        #[arg(long)]
        cells: Option<PathBuf>,
        #[arg(long)]
        adjacency: Option<PathBuf>,
        /// Fail when any asymmetric neighbor entry is found
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = commands::prepare(&cli.common);
    match cli.command {
        Commands::Adjacency { cells, out } => {
            let (def_cells, def_adj) = util::default_paths();
            let cells_path = cells.unwrap_or(def_cells);
            let out_path = out.unwrap_or(def_adj);
            commands::adjacency::cmd_adjacency(&cells_path, &out_path, &cfg).map(|_| ())
        }
        Commands::Route { from, to, cells, adjacency, exclude, json } => {
            let source = GraphSource::resolve(cells, adjacency)?;
            commands::route::cmd_route(&source, &from, &to, &exclude, json, &cfg).map(|_| ())
        }
        Commands::Bearing { dx, dy, cells, from, to } => match (dx, dy, from, to) {
            (Some(dx), Some(dy), _, _) => {
                commands::bearing::cmd_bearing_vector(dx, dy);
                Ok(())
            }
            (_, _, Some(from), Some(to)) => {
                let cells_path = cells.unwrap_or_else(|| util::default_paths().0);
                commands::bearing::cmd_bearing_cells(&cells_path, &from, &to).map(|_| ())
            }
            _ => bail!("pass either --dx/--dy or --from/--to"),
        },
        Commands::Check { cells, adjacency, strict } => {
            let source = GraphSource::resolve(cells, adjacency)?;
            commands::check::cmd_check(&source, strict, &cfg).map(|_| ())
        }
    }
}
