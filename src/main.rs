use std::collections::BTreeMap;
use std::thread;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;
use traverser::{
    DisplayState, LayoutConfig, NodeIndex, Playback, PlaybackSpeed, Settings, Traversal,
    TraversalOrder, Tree, TreeGenerator, DEFAULT_NODE_COUNT,
};

#[derive(Parser, Debug)]
#[command(name = "traverser", about = "Random binary tree layout and traversal playback")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Flags shared by every subcommand that grows a tree.
#[derive(Args, Debug)]
struct TreeArgs {
    /// Number of nodes to request (the canvas may fit fewer).
    #[arg(long, default_value_t = DEFAULT_NODE_COUNT)]
    nodes: usize,
    /// Seed for a reproducible layout; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Canvas width.
    #[arg(long, default_value_t = 768.0)]
    width: f64,
    /// Canvas height.
    #[arg(long, default_value_t = 864.0)]
    height: f64,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Grow a tree and list its nodes in level order.
    Generate {
        #[command(flatten)]
        tree: TreeArgs,
    },
    /// Grow a tree and print the full step sequence for one order.
    Traverse {
        #[command(flatten)]
        tree: TreeArgs,
        /// in-order, pre-order, post-order or bfs.
        #[arg(long, default_value_t = TraversalOrder::InOrder)]
        order: TraversalOrder,
    },
    /// Grow a tree and replay one order step by step.
    Play {
        #[command(flatten)]
        tree: TreeArgs,
        /// in-order, pre-order, post-order or bfs.
        #[arg(long, default_value_t = TraversalOrder::InOrder)]
        order: TraversalOrder,
        /// fast, medium or slow.
        #[arg(long, default_value_t = PlaybackSpeed::Fast)]
        speed: PlaybackSpeed,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { tree } => run_generate(tree)?,
        Commands::Traverse { tree, order } => run_traverse(tree, order)?,
        Commands::Play { tree, order, speed } => run_play(tree, order, speed)?,
    }

    Ok(())
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn grow_tree(args: &TreeArgs) -> Result<Tree> {
    let layout = LayoutConfig::with_canvas(args.width, args.height);
    let generator = TreeGenerator::new(layout).context("invalid canvas geometry")?;
    let (tree, report) = generator
        .generate_with_rng(args.nodes, &mut seeded_rng(args.seed))
        .with_context(|| format!("failed to generate a tree of {} nodes", args.nodes))?;

    if report.is_partial() {
        println!(
            "placed {} of {} requested nodes (canvas full)",
            report.placed, report.requested
        );
    } else {
        println!("placed {} nodes", report.placed);
    }

    Ok(tree)
}

fn run_generate(args: TreeArgs) -> Result<()> {
    let tree = grow_tree(&args)?;
    let id_of = |index: NodeIndex| tree.node(index).map(|node| node.id.to_string());

    println!("id\tdepth\tx\ty\tleft\tright");
    for (_, node) in tree.breadth_first() {
        println!(
            "{}\t{}\t{:.1}\t{:.1}\t{}\t{}",
            node.id,
            node.depth,
            node.position.x,
            node.position.y,
            node.left().and_then(id_of).unwrap_or_else(|| "-".into()),
            node.right().and_then(id_of).unwrap_or_else(|| "-".into()),
        );
    }

    Ok(())
}

fn run_traverse(args: TreeArgs, order: TraversalOrder) -> Result<()> {
    let tree = grow_tree(&args)?;
    let traversal = Traversal::new(&tree, order);

    println!("{} over {} nodes: {} steps", order, tree.len(), traversal.len());
    for step in &traversal {
        println!("{}", step);
    }

    Ok(())
}

fn run_play(args: TreeArgs, order: TraversalOrder, speed: PlaybackSpeed) -> Result<()> {
    let settings = Settings {
        node_count: args.nodes,
        order,
        speed,
    };
    let layout = LayoutConfig::with_canvas(args.width, args.height);
    let mut playback = Playback::from_settings(&settings, layout, &mut seeded_rng(args.seed))
        .context("failed to start playback")?;

    println!(
        "replaying {} over {} nodes at {} ({:?} per step)",
        playback.order(),
        playback.tree().len(),
        settings.speed,
        settings.speed.delay()
    );

    playback.toggle();
    while let Some(step) = playback.step() {
        println!("[{:>4}/{}] {}", playback.cursor(), playback.traversal().len(), step);
        thread::sleep(settings.speed.delay());
    }

    let mut tally: BTreeMap<DisplayState, usize> = BTreeMap::new();
    for node in playback.tree().nodes() {
        *tally.entry(node.state).or_default() += 1;
    }
    for (state, count) in tally {
        println!("{}: {}", state, count);
    }

    Ok(())
}
