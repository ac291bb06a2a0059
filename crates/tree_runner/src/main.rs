//! Tree search runner CLI
//!
//! Run, step through, or compare the search engines on a tree loaded from
//! JSON or generated on the spot.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tree_core::{GameTree, SearchAlgorithm};
use tree_runner::{
    comparison_table, create_engine, random_tree, render_tree, sample_tree, AlgorithmKind,
    Playback, RunnerConfig, StatsReport, TreeSpec,
};

#[derive(Parser, Debug)]
#[command(name = "tree_runner", about = "Resumable minimax / alpha-beta / negamax tree search")]
struct Cli {
    /// TOML file with runner defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one engine to completion and print its statistics
    Run {
        #[command(flatten)]
        source: TreeSource,
        #[command(flatten)]
        engine: EngineArgs,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Step one engine through the tree, printing the state after every step
    Step {
        #[command(flatten)]
        source: TreeSource,
        #[command(flatten)]
        engine: EngineArgs,
        /// Playback speed, 1 (slowest) to 10
        #[arg(long)]
        speed: Option<u8>,
        /// Stop after this many steps
        #[arg(long)]
        max_steps: Option<u64>,
    },
    /// Run every engine on the same tree
    Compare {
        #[command(flatten)]
        source: TreeSource,
        /// Print the reports as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a sample or random tree to a JSON file
    Sample {
        /// Output path
        #[arg(long)]
        out: PathBuf,
        /// Random tree depth (omit for the three-by-two sample tree)
        #[arg(long)]
        depth: Option<usize>,
        /// Maximum children per node for random trees
        #[arg(long, default_value_t = 3)]
        branching: usize,
        /// Random seed
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args, Debug)]
struct TreeSource {
    /// JSON tree file (defaults to a random sample tree)
    #[arg(long)]
    tree: Option<PathBuf>,
    /// Seed for the generated sample tree
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct EngineArgs {
    /// Search algorithm
    #[arg(long, value_enum)]
    algorithm: Option<AlgorithmKind>,
    /// Disable alpha-beta cut-offs
    #[arg(long)]
    no_pruning: bool,
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn load_tree(source: &TreeSource) -> Result<GameTree> {
    match &source.tree {
        Some(path) => {
            let spec = TreeSpec::load(path)?;
            let tree = spec
                .build()
                .with_context(|| format!("invalid tree in {}", path.display()))?;
            info!(path = %path.display(), nodes = tree.node_count(), "loaded tree");
            Ok(tree)
        }
        None => Ok(sample_tree(&mut rng_from(source.seed))),
    }
}

fn load_config(path: Option<&Path>) -> Result<RunnerConfig> {
    match path {
        Some(path) => RunnerConfig::load(path),
        None => Ok(RunnerConfig::default()),
    }
}

fn apply_engine_args(config: &mut RunnerConfig, args: &EngineArgs) {
    if let Some(algorithm) = args.algorithm {
        config.algorithm = algorithm;
    }
    if args.no_pruning {
        config.pruning = false;
    }
}

fn run(config: &RunnerConfig, tree: GameTree, json: bool) -> Result<()> {
    let mut engine = create_engine(config.algorithm, tree, config.pruning);
    engine.run();
    let report = StatsReport::from_engine(engine.as_ref());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    if config.show_tree {
        println!("{}", render_tree(engine.tree(), engine.current()));
    }
    report.print_report();
    Ok(())
}

fn step(config: &RunnerConfig, tree: GameTree, max_steps: Option<u64>) {
    let mut engine = create_engine(config.algorithm, tree, config.pruning);
    let mut playback = Playback::new(config.speed);
    let show_tree = config.show_tree;
    let mut steps = 0u64;

    println!("=== Stepping {} (speed {}) ===", engine.name(), playback.speed());
    playback.play_to_end(engine.as_mut(), |engine| {
        steps += 1;
        if show_tree {
            println!("--- step {steps} ---");
            println!("{}", render_tree(engine.tree(), engine.current()));
        }
        max_steps.map_or(true, |limit| steps < limit)
    });

    StatsReport::from_engine(engine.as_ref()).print_report();
    if !engine.is_finished() {
        println!("Stopped after {steps} steps.");
    }
}

fn compare(tree: GameTree, json: bool) -> Result<()> {
    let mut reports = Vec::new();
    for kind in AlgorithmKind::ALL {
        let mut engine = create_engine(kind, tree.clone(), true);
        engine.run();
        reports.push(StatsReport::from_engine(engine.as_ref()));
    }
    let mut full = create_engine(AlgorithmKind::AlphaBeta, tree, false);
    full.run();
    reports.push(StatsReport::from_engine(full.as_ref()));

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        println!("{}", comparison_table(&reports));
    }
    Ok(())
}

fn sample(out: &Path, depth: Option<usize>, branching: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = rng_from(seed);
    let tree = match depth {
        Some(depth) => random_tree(&mut rng, depth, 1..=branching.max(1), true),
        None => sample_tree(&mut rng),
    };
    TreeSpec::from_tree(&tree).save(out)?;
    println!("Wrote {} nodes to {}", tree.node_count(), out.display());
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Run {
            source,
            engine,
            json,
        } => {
            apply_engine_args(&mut config, &engine);
            run(&config, load_tree(&source)?, json)
        }
        Command::Step {
            source,
            engine,
            speed,
            max_steps,
        } => {
            apply_engine_args(&mut config, &engine);
            if let Some(speed) = speed {
                config.speed = speed;
            }
            step(&config, load_tree(&source)?, max_steps);
            Ok(())
        }
        Command::Compare { source, json } => compare(load_tree(&source)?, json),
        Command::Sample {
            out,
            depth,
            branching,
            seed,
        } => sample(&out, depth, branching, seed),
    }
}
