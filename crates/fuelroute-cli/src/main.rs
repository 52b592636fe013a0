use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use fuelroute_lib::{find_path, load_roadmap, RoadMap, RouteSummary, Truck, TruckState};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Least-fuel-cost route planning over a roadmap document",
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Clone)]
struct GlobalOptions {
    /// Path to the roadmap document (JSON).
    #[arg(long)]
    map: PathBuf,

    /// Select the output format for CLI responses.
    #[arg(long, value_enum, default_value_t = OutputFormat::default())]
    format: OutputFormat,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the cheapest route between two named points.
    Route(RouteCommandArgs),
    /// Report the size and stations of a roadmap document.
    Inspect,
}

#[derive(Args, Debug, Clone)]
struct RouteCommandArgs {
    /// Starting point name.
    #[arg(long = "from")]
    from: String,

    /// Destination point name.
    #[arg(long = "to")]
    to: String,

    /// Mandatory waypoint names. Repeat for multiple waypoints.
    #[arg(long = "via")]
    via: Vec<String>,

    #[command(flatten)]
    truck: TruckArgs,
}

#[derive(Args, Debug, Clone)]
struct TruckArgs {
    /// Tank capacity in volume units.
    #[arg(long)]
    capacity: Decimal,

    /// Reserve volume that is never spendable.
    #[arg(long = "min-volume", default_value = "0")]
    min_volume: Decimal,

    /// Distance covered per volume unit of fuel.
    #[arg(long)]
    mpg: Decimal,

    /// Fuel volume in the tank at departure, reserve included.
    #[arg(long)]
    volume: Decimal,
}

impl TruckArgs {
    fn to_state(&self) -> TruckState {
        TruckState {
            truck: Truck {
                capacity: self.capacity,
                min_volume: self.min_volume,
                mpg: self.mpg,
            },
            volume: self.volume,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    fn render_route(self, summary: &RouteSummary) -> Result<()> {
        match self {
            OutputFormat::Text => {
                print!("{}", summary.render_plain());
            }
            OutputFormat::Json => {
                let mut stdout = io::stdout();
                serde_json::to_writer_pretty(&mut stdout, summary)?;
                stdout.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    fn render_inspect(self, report: &InspectReport) -> Result<()> {
        match self {
            OutputFormat::Text => {
                println!(
                    "Roadmap: {} points, {} roads, {} stations",
                    report.points, report.roads, report.stations.len()
                );
                for station in &report.stations {
                    println!("  {} @ {}", station.name, station.price);
                }
            }
            OutputFormat::Json => {
                let mut stdout = io::stdout();
                serde_json::to_writer_pretty(&mut stdout, report)?;
                stdout.write_all(b"\n")?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, serde::Serialize)]
struct InspectReport {
    points: usize,
    roads: usize,
    stations: Vec<StationReport>,
}

#[derive(Debug, Clone, serde::Serialize)]
struct StationReport {
    name: String,
    price: Decimal,
}

impl InspectReport {
    fn new(roadmap: &RoadMap) -> Self {
        Self {
            points: roadmap.point_count(),
            roads: roadmap.road_count(),
            stations: roadmap
                .stations()
                .map(|(point, station)| StationReport {
                    name: point.name.clone(),
                    price: station.price,
                })
                .collect(),
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let roadmap = load_roadmap_from(&cli.global.map)?;

    match cli.command {
        Command::Route(route_args) => handle_route(&roadmap, &route_args, cli.global.format),
        Command::Inspect => cli.global.format.render_inspect(&InspectReport::new(&roadmap)),
    }
}

fn handle_route(roadmap: &RoadMap, args: &RouteCommandArgs, format: OutputFormat) -> Result<()> {
    let from = roadmap.resolve(&args.from)?;
    let to = roadmap.resolve(&args.to)?;
    let via = args
        .via
        .iter()
        .map(|name| roadmap.resolve(name))
        .collect::<fuelroute_lib::Result<Vec<_>>>()?;

    let route = find_path(roadmap, from, to, via, args.truck.to_state()).with_context(|| {
        format!(
            "failed to compute route between {} and {}",
            args.from, args.to
        )
    })?;

    let summary = RouteSummary::from_route(roadmap, &route);
    format.render_route(&summary)
}

fn load_roadmap_from(path: &Path) -> Result<RoadMap> {
    load_roadmap(path)
        .with_context(|| format!("failed to load roadmap from {}", path.display()))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
