//! # algoviz - Step-by-step pathfinding and sorting
//!
//! See the library docs for usage examples.

use std::io;
use std::path::PathBuf;

use algoviz::{AppConfig, TerminalRenderer};
use algoviz_library::{
    PathfindingAlgorithm, PathfindingVisualizer, Position, SearchOutcome, SortOutcome, SortRun,
    SortingAlgorithm, SortingVisualizer,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser)]
#[command(name = "algoviz")]
#[command(about = "Step-by-step pathfinding and sorting visualizer")]
#[command(version)]
struct Cli {
    /// Configuration file (TOML or YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for obstacle generation and shuffling
    #[arg(long)]
    seed: Option<u64>,

    /// Run without drawing frames
    #[arg(long)]
    headless: bool,

    /// Pause after each drawn frame, in milliseconds
    #[arg(long)]
    frame_delay_ms: Option<u64>,

    /// Draw only every N-th step
    #[arg(long)]
    frames_every: Option<usize>,

    /// Stop the run after this many steps
    #[arg(long)]
    max_steps: Option<usize>,

    /// Print the outcome as JSON on stdout
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a path across the grid
    Pathfind {
        /// a-star, dijkstra, bfs or dfs (or menu number 1-4)
        #[arg(short, long)]
        algorithm: Option<PathfindingAlgorithm>,

        /// Cells per side
        #[arg(long)]
        size: Option<usize>,

        /// Start cell as ROW,COL
        #[arg(long, value_parser = parse_position)]
        start: Option<Position>,

        /// End cell as ROW,COL
        #[arg(long, value_parser = parse_position)]
        end: Option<Position>,

        /// Scatter random barriers before searching
        #[arg(short, long)]
        random_barriers: bool,

        /// Share of cells tried for a barrier
        #[arg(long)]
        density: Option<f64>,

        /// Extra barrier cell as ROW,COL (repeatable)
        #[arg(long = "barrier", value_parser = parse_position)]
        barriers: Vec<Position>,
    },

    /// Sort a shuffled row of bars
    Sort {
        /// merge, quick, heap, insertion, selection or bubble (or menu number 1-6)
        #[arg(short, long)]
        algorithm: Option<SortingAlgorithm>,

        /// Number of bars
        #[arg(short, long)]
        length: Option<u32>,
    },

    /// List the available algorithms with their menu numbers
    List,
}

fn parse_position(value: &str) -> Result<Position, String> {
    let (row, col) = value
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{}'", value))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("invalid row '{}': {}", row, e))?;
    let col = col
        .trim()
        .parse()
        .map_err(|e| format!("invalid column '{}': {}", col, e))?;
    Ok(Position::new(row, col))
}

#[derive(Serialize)]
struct PathfindReport {
    algorithm: PathfindingAlgorithm,
    grid_size: usize,
    barriers: usize,
    steps: usize,
    #[serde(flatten)]
    outcome: SearchOutcome,
}

#[derive(Serialize)]
struct SortReport {
    algorithm: SortingAlgorithm,
    length: usize,
    steps: usize,
    outcome: Option<SortOutcome>,
}

fn main() -> Result<()> {
    // Initialize logging, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            AppConfig::load(path)?
        }
        None => AppConfig::default(),
    };
    apply_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match &cli.command {
        Commands::Pathfind { barriers, .. } => run_pathfind(&config, barriers, &cli, &mut rng),
        Commands::Sort { .. } => run_sort(&config, &cli, &mut rng),
        Commands::List => {
            list_algorithms();
            Ok(())
        }
    }
}

/// Command-line flags win over the config file
fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.headless {
        config.render.headless = true;
    }
    if let Some(delay) = cli.frame_delay_ms {
        config.render.frame_delay_ms = delay;
    }
    if let Some(every) = cli.frames_every {
        config.render.frames_every = every;
    }

    match &cli.command {
        Commands::Pathfind {
            algorithm,
            size,
            start,
            end,
            random_barriers,
            density,
            ..
        } => {
            let pathfinding = &mut config.pathfinding;
            if let Some(algorithm) = algorithm {
                pathfinding.algorithm = *algorithm;
            }
            if let Some(size) = size {
                pathfinding.grid_size = *size;
            }
            if let Some(start) = start {
                pathfinding.start = Some([start.row, start.col]);
            }
            if let Some(end) = end {
                pathfinding.end = Some([end.row, end.col]);
            }
            if *random_barriers {
                pathfinding.random_barriers = true;
            }
            if let Some(density) = density {
                pathfinding.barrier_density = *density;
            }
        }
        Commands::Sort { algorithm, length } => {
            if let Some(algorithm) = algorithm {
                config.sorting.algorithm = *algorithm;
            }
            if let Some(length) = length {
                config.sorting.length = *length;
            }
        }
        Commands::List => {}
    }
}

fn run_pathfind(
    config: &AppConfig,
    barriers: &[Position],
    cli: &Cli,
    rng: &mut StdRng,
) -> Result<()> {
    let settings = &config.pathfinding;
    let grid = settings.build_grid()?;
    let mut session = PathfindingVisualizer::from_grid(grid);
    session.pick_algorithm(settings.algorithm);

    for &position in barriers {
        if !session.paint(position, algoviz_library::CellStatus::Barrier)? {
            warn!(
                "Ignoring barrier on endpoint ({}, {})",
                position.row, position.col
            );
        }
    }
    if settings.random_barriers {
        if let Some(count) =
            session.generate_obstacles(rng, settings.barrier_density, settings.clearance_radius)
        {
            info!("Generated {} random barriers", count);
        }
    }

    let token = session.token();
    ctrlc::set_handler(move || {
        eprintln!("{}", "\nCtrl+C received! Stopping the search...".red());
        token.cancel();
    })
    .context("Failed to set Ctrl+C handler")?;

    info!(
        "Starting {} on a {}x{} grid",
        settings.algorithm.label(),
        settings.grid_size,
        settings.grid_size
    );
    let mut renderer =
        TerminalRenderer::new(io::stdout(), &config.render).with_max_steps(cli.max_steps);
    let outcome = session.start(&mut renderer);
    renderer.take_error().context("Failed to draw the grid")?;

    let report = PathfindReport {
        algorithm: settings.algorithm,
        grid_size: settings.grid_size,
        barriers: session.grid().count(algoviz_library::CellStatus::Barrier),
        steps: renderer.steps(),
        outcome,
    };
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match outcome {
        SearchOutcome::Found(summary) => println!(
            "{} {} moves, {} cells expanded, {} steps",
            "Path found:".green().bold(),
            summary.length,
            summary.expanded,
            report.steps
        ),
        SearchOutcome::Exhausted => println!("{}", "No path found!".red().bold()),
        SearchOutcome::Cancelled => println!("{}", "Search stopped.".yellow()),
    }
    Ok(())
}

fn run_sort(config: &AppConfig, cli: &Cli, rng: &mut StdRng) -> Result<()> {
    let settings = &config.sorting;
    let mut session = SortingVisualizer::new(settings.length);
    session.pick_algorithm(settings.algorithm);
    session.shuffle(rng);

    let token = session.token();
    ctrlc::set_handler(move || {
        eprintln!("{}", "\nCtrl+C received! Stopping the sort...".red());
        token.cancel();
    })
    .context("Failed to set Ctrl+C handler")?;

    info!(
        "Starting {} on {} bars",
        settings.algorithm.label(),
        settings.length
    );
    let mut renderer =
        TerminalRenderer::new(io::stdout(), &config.render).with_max_steps(cli.max_steps);
    let run = session.start(&mut renderer);
    renderer.take_error().context("Failed to draw the bars")?;

    let outcome = match run {
        SortRun::Finished(outcome) => Some(outcome),
        SortRun::AlreadySorted => None,
    };
    let report = SortReport {
        algorithm: settings.algorithm,
        length: session.bars().len(),
        steps: renderer.steps(),
        outcome,
    };
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match outcome {
        Some(SortOutcome::Completed) => println!(
            "{} {} bars in {} steps",
            "Sorted".green().bold(),
            report.length,
            report.steps
        ),
        Some(SortOutcome::Cancelled) => println!("{}", "Sorting stopped.".yellow()),
        None => println!("Bars are already sorted, shuffle first."),
    }
    Ok(())
}

fn list_algorithms() {
    println!("{}", "Pathfinding".bold());
    for (key, algorithm) in PathfindingAlgorithm::ALL.iter().enumerate() {
        println!("  {}. {:<22} {}", key + 1, algorithm.label(), algorithm.name().dimmed());
    }
    println!("{}", "Sorting".bold());
    for (key, algorithm) in SortingAlgorithm::ALL.iter().enumerate() {
        println!("  {}. {:<22} {}", key + 1, algorithm.label(), algorithm.name().dimmed());
    }
}
