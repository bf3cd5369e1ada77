use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use tradelane_cli::commands::nearest::handle_nearest_command;
use tradelane_cli::commands::nodes::handle_nodes_command;
use tradelane_cli::commands::path::handle_path_command;
use tradelane_cli::commands::route::{handle_route_command, RouteCommandArgs};
use tradelane_cli::commands::load_graph;
use tradelane_cli::output::OutputFormat;
use tradelane_lib::{Coordinate, ServiceType};

#[derive(Parser, Debug)]
#[command(author, version, about = "Trade-lane route geometry tools")]
struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Load the waypoint catalogue from a JSON file instead of the built-in one.
    #[arg(long, global = true)]
    catalogue: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose a route between two coordinates.
    Route {
        /// Service type: air, sea, land or rail.
        #[arg(long)]
        service: ServiceType,
        /// Origin as LAT,LNG.
        #[arg(long = "from", allow_hyphen_values = true)]
        from: Coordinate,
        /// Destination as LAT,LNG.
        #[arg(long = "to", allow_hyphen_values = true)]
        to: Coordinate,
        /// Points sampled along air arcs.
        #[arg(long)]
        points: Option<usize>,
        /// Offshore point used when no lane path exists, as LAT,LNG.
        #[arg(long, allow_hyphen_values = true)]
        fallback: Option<Coordinate>,
    },
    /// Find the lane path between two named waypoints.
    Path {
        /// Starting waypoint name.
        #[arg(long = "from")]
        from: String,
        /// Destination waypoint name.
        #[arg(long = "to")]
        to: String,
    },
    /// Snap a coordinate onto the closest waypoint.
    Nearest {
        /// Query point as LAT,LNG.
        #[arg(long, allow_hyphen_values = true)]
        at: Coordinate,
    },
    /// List catalogue waypoints and their lanes.
    Nodes,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let graph = load_graph(cli.catalogue.as_deref())?;

    match cli.command {
        Command::Route {
            service,
            from,
            to,
            points,
            fallback,
        } => {
            let args = RouteCommandArgs {
                service,
                from,
                to,
                points,
                fallback,
            };
            handle_route_command(&graph, &args, cli.format)
        }
        Command::Path { from, to } => handle_path_command(&graph, &from, &to, cli.format),
        Command::Nearest { at } => handle_nearest_command(&graph, at, cli.format),
        Command::Nodes => handle_nodes_command(&graph, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
