use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use hilbertmap::{ChannelOpts, Grid};

#[derive(Parser, Debug)]
#[command(name = "hilbertmap", version)]
struct Cli {
    /// Log pipeline steps to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Map a JSON array of numbers onto a Hilbert grid.
    Grid(GridArgs),
    /// Prepare, normalize and map several channels (JSON array of arrays).
    Channels(ChannelsArgs),
    /// Print the coordinate of a curve distance.
    D2xy(D2xyArgs),
    /// Report traversal step statistics of a grid of distinct values.
    Path(PathArgs),
}

#[derive(Parser, Debug)]
struct GridArgs {
    /// Input JSON array.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Grid order (power of two). Inferred from the input length when omitted.
    #[arg(long)]
    order: Option<u32>,

    /// Output JSON path. Defaults to stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ChannelsArgs {
    /// Input JSON array of channel arrays.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Channel options JSON; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Map channels in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Keep at most this many normalized values per channel.
    #[arg(long)]
    max_len: Option<usize>,

    /// Grid order (power of two).
    #[arg(long)]
    order: Option<u32>,

    /// Output JSON path. Defaults to stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct D2xyArgs {
    /// Grid order (power of two).
    #[arg(long)]
    order: u32,

    /// Curve distance.
    #[arg(long)]
    distance: u64,
}

#[derive(Parser, Debug)]
struct PathArgs {
    /// Input grid JSON (nested rows, `null` for empty cells).
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(serde::Serialize)]
struct ChannelsOut<'a> {
    grids: &'a [Grid<f64>],
    #[serde(skip_serializing_if = "Option::is_none")]
    rgb: Option<Grid<[u8; 3]>>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
    match cli.cmd {
        Command::Grid(args) => cmd_grid(args),
        Command::Channels(args) => cmd_channels(args),
        Command::D2xy(args) => cmd_d2xy(args),
        Command::Path(args) => cmd_path(args),
    }
}

fn cmd_grid(args: GridArgs) -> anyhow::Result<()> {
    let values: Vec<f64> = read_json(&args.in_path)?;
    let grid = hilbertmap::map_to_grid(&values, args.order)?;
    write_json(args.out.as_deref(), &grid)
}

fn cmd_channels(args: ChannelsArgs) -> anyhow::Result<()> {
    let channels: Vec<Vec<f64>> = read_json(&args.in_path)?;

    let mut opts = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read config '{}'", path.display()))?;
            ChannelOpts::from_json_str(&text)?
        }
        None => ChannelOpts::default(),
    };
    if args.parallel {
        opts.parallel = true;
    }
    if args.threads.is_some() {
        opts.threads = args.threads;
    }
    if args.max_len.is_some() {
        opts.max_len = args.max_len;
    }
    if args.order.is_some() {
        opts.order = args.order;
    }

    let grids = hilbertmap::map_channels(&channels, &opts)?;
    let rgb = match grids.as_slice() {
        [r, g, b] => Some(hilbertmap::stack_rgb8(r, g, b)?),
        _ => None,
    };
    write_json(args.out.as_deref(), &ChannelsOut { grids: &grids, rgb })
}

fn cmd_d2xy(args: D2xyArgs) -> anyhow::Result<()> {
    let p = hilbertmap::d2xy(args.order, args.distance)?;
    println!("{} {}", p.x, p.y);
    Ok(())
}

fn cmd_path(args: PathArgs) -> anyhow::Result<()> {
    let grid: Grid<f64> = read_json(&args.in_path)?;
    let path = hilbertmap::reconstruct_path(&grid)?;
    write_json(None, &path.stats())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse JSON '{}'", path.display()))
}

fn write_json<T: serde::Serialize>(out: Option<&Path>, value: &T) -> anyhow::Result<()> {
    let Some(path) = out else {
        let stdout = std::io::stdout();
        let mut w = stdout.lock();
        serde_json::to_writer(&mut w, value).context("write JSON to stdout")?;
        writeln!(w)?;
        return Ok(());
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer(&mut w, value)
        .with_context(|| format!("write JSON '{}'", path.display()))?;
    w.flush()?;
    eprintln!("wrote {}", path.display());
    Ok(())
}
