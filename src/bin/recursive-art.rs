use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use recursive_art::{ArtConfig, ChannelTrees, RenderOpts, SplitMix64, Strategy, render_trees};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "recursive-art", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one image as a PNG.
    Render(RenderArgs),
    /// Time the sequential and parallel strategies on the same trees.
    Bench(BenchArgs),
}

#[derive(Args, Debug)]
struct TreeArgs {
    /// Config JSON; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Image width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Minimum tree depth.
    #[arg(long, allow_negative_numbers = true)]
    min_depth: Option<i32>,

    /// Maximum tree depth.
    #[arg(long, allow_negative_numbers = true)]
    max_depth: Option<i32>,

    /// Generator seed (defaults to a clock-derived seed, which is logged).
    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads for the parallel strategy.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    tree: TreeArgs,

    /// Evaluation strategy.
    #[arg(long, value_enum)]
    strategy: Option<StrategyChoice>,

    /// Print the three channel formulas to stdout.
    #[arg(long)]
    print_trees: bool,
}

#[derive(Args, Debug)]
struct BenchArgs {
    #[command(flatten)]
    tree: TreeArgs,

    /// Timed renders per strategy.
    #[arg(long, default_value_t = 3)]
    repeats: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyChoice {
    Auto,
    Sequential,
    Parallel,
}

impl StrategyChoice {
    fn resolve(self) -> Option<Strategy> {
        match self {
            StrategyChoice::Auto => None,
            StrategyChoice::Sequential => Some(Strategy::Sequential),
            StrategyChoice::Parallel => Some(Strategy::Parallel),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("recursive_art=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Bench(args) => cmd_bench(args),
    }
}

fn load_config(args: &TreeArgs) -> anyhow::Result<ArtConfig> {
    let mut cfg = match &args.config {
        Some(path) => ArtConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => ArtConfig::default(),
    };
    if let Some(v) = args.width {
        cfg.width = v;
    }
    if let Some(v) = args.height {
        cfg.height = v;
    }
    if let Some(v) = args.min_depth {
        cfg.min_depth = v;
    }
    if let Some(v) = args.max_depth {
        cfg.max_depth = v;
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    if args.threads.is_some() {
        cfg.threads = args.threads;
    }
    Ok(cfg)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(&args.tree)?;
    if let Some(choice) = args.strategy {
        cfg.strategy = choice.resolve();
    }
    cfg.validate()?;

    let seed = cfg.seed.unwrap_or_else(SplitMix64::seed_from_time);
    tracing::info!(
        seed,
        width = cfg.width,
        height = cfg.height,
        min_depth = cfg.min_depth,
        max_depth = cfg.max_depth,
        "rendering"
    );

    let trees = ChannelTrees::build(cfg.min_depth, cfg.max_depth, &mut SplitMix64::new(seed))?;
    if args.print_trees {
        println!("red   = {}", trees.red);
        println!("green = {}", trees.green);
        println!("blue  = {}", trees.blue);
    }

    let (frame, stats) = render_trees(&trees, cfg.width, cfg.height, &cfg.render_opts())?;
    tracing::info!(
        strategy = ?stats.strategy,
        workers = stats.workers,
        elapsed_ms = stats.elapsed.as_secs_f64() * 1000.0,
        "rendered"
    );

    write_png(&args.out, frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn write_png(out: &Path, frame: recursive_art::FrameRGB) -> anyhow::Result<()> {
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    frame
        .into_rgb_image()?
        .save_with_format(out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", out.display()))
}

fn cmd_bench(args: BenchArgs) -> anyhow::Result<()> {
    if args.repeats == 0 {
        anyhow::bail!("--repeats must be > 0");
    }
    let cfg = load_config(&args.tree)?;
    cfg.validate()?;

    let seed = cfg.seed.unwrap_or_else(SplitMix64::seed_from_time);
    let trees = ChannelTrees::build(cfg.min_depth, cfg.max_depth, &mut SplitMix64::new(seed))?;
    tracing::info!(seed, nodes_red = trees.red.node_count(), "bench trees built");

    println!(
        "{}x{} px, depth {}..{}, seed {seed}, {} repeats",
        cfg.width, cfg.height, cfg.min_depth, cfg.max_depth, args.repeats
    );

    let mut reference = None;
    for strategy in [Strategy::Sequential, Strategy::Parallel] {
        let opts = RenderOpts {
            strategy: Some(strategy),
            threads: cfg.threads,
        };
        let mut best = Duration::MAX;
        let mut total = Duration::ZERO;
        for _ in 0..args.repeats {
            let started = Instant::now();
            let (frame, _) = render_trees(&trees, cfg.width, cfg.height, &opts)?;
            let took = started.elapsed();
            best = best.min(took);
            total += took;

            if let Some(r) = &reference
                && *r != frame
            {
                anyhow::bail!("{strategy:?} produced a different frame than sequential");
            }
            if reference.is_none() {
                reference = Some(frame);
            }
        }
        let mean = total / args.repeats;
        println!(
            "{:<10} best {:>9.3} ms   mean {:>9.3} ms",
            format!("{strategy:?}").to_lowercase(),
            best.as_secs_f64() * 1000.0,
            mean.as_secs_f64() * 1000.0,
        );
    }
    Ok(())
}
