mod catalog;
mod config;
mod input;
mod interactive;
mod output;
mod render;
mod selection;

use anyhow::{Context, Result};
use clap::Parser;
use pairsort_core::{Item, Session};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{PairsortConfig, ProgressMode};

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "pairsort", version, about = "Rank characters by voting on every pair")]
struct Cli {
    /// Log engine events to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Pick characters and rank them by voting on each pair
    Rank(RankArgs),
    /// Print the numbered character catalog
    List(CatalogArgs),
    /// Create a default config file at ~/.config/pairsort/config.toml
    Init,
}

#[derive(clap::Args)]
struct CatalogArgs {
    /// Catalog JSON file or http(s) URL
    #[arg(long)]
    catalog: Option<String>,

    /// Only characters with this gender (case-insensitive)
    #[arg(long)]
    gender: Option<String>,

    /// Path to config file (default: ~/.config/pairsort/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(clap::Args)]
struct RankArgs {
    #[command(flatten)]
    source: CatalogArgs,

    /// Characters to rank: numbers, ranges (2-5) or names, comma or space separated (repeatable)
    #[arg(long = "select", short = 's')]
    select: Vec<String>,

    /// Rank every character in the (filtered) catalog
    #[arg(long, conflicts_with = "select")]
    all: bool,

    /// Fixed seed for the pair order
    #[arg(long)]
    seed: Option<u64>,

    /// Progress label next to the bar
    #[arg(long, value_enum)]
    progress: Option<ProgressMode>,

    /// Print the final ranking as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Rank(args) => run_rank(args).await,
        Commands::List(args) => run_list(args).await,
        Commands::Init => run_init(),
    };

    if let Err(e) = result {
        bail(format!("{e:#}"));
    }
}

fn load_config(args: &CatalogArgs) -> Result<(PathBuf, PairsortConfig)> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => config::config_path()?,
    };
    let cfg = config::load_config(&path)?;
    Ok((path, cfg))
}

/// Load the catalog named on the command line or in the config, then apply the gender filter.
async fn load_items(args: &CatalogArgs, cfg: &PairsortConfig, config_path: &Path) -> Result<Vec<Item>> {
    let source = args
        .catalog
        .clone()
        .or_else(|| cfg.catalog.clone())
        .with_context(|| {
            format!(
                "No catalog specified. Pass --catalog or set it in {}",
                config_path.display()
            )
        })?;

    let mut items = catalog::load_catalog(&source).await?;
    info!(count = items.len(), source = %source, "catalog loaded");

    if let Some(gender) = &args.gender {
        items = catalog::filter_by_gender(items, gender);
        if items.is_empty() {
            anyhow::bail!("No characters with gender \"{gender}\" in the catalog");
        }
    }
    Ok(items)
}

async fn run_list(args: CatalogArgs) -> Result<()> {
    let (config_path, cfg) = load_config(&args)?;
    let items = load_items(&args, &cfg, &config_path).await?;
    print!("{}", output::format_catalog(&items));
    Ok(())
}

async fn run_rank(args: RankArgs) -> Result<()> {
    let (config_path, cfg) = load_config(&args.source)?;
    let items = load_items(&args.source, &cfg, &config_path).await?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let selection = if args.all || !args.select.is_empty() {
        selection::select(&items, &args.select, args.all)?
    } else {
        match interactive::prompt_selection(&items, &mut input, &mut out)? {
            Some(selection) => selection,
            None => return Ok(()),
        }
    };

    let mut session = match args.seed.or(cfg.seed) {
        Some(seed) => Session::with_seed(selection, seed)?,
        None => Session::new(selection)?,
    };

    let mode = args.progress.or(cfg.progress).unwrap_or_default();
    let ranking = interactive::run_session(&mut session, &mut input, &mut out, mode)?;

    if let Some(ranking) = ranking {
        if args.json {
            writeln!(out, "{}", output::format_json(&ranking)?)?;
        } else {
            write!(out, "\n{}", output::format_table(&ranking))?;
        }
    }
    Ok(())
}

fn run_init() -> Result<()> {
    let path = config::config_path()?;
    config::create_default_config(&path)?;
    println!("Created config at {}", path.display());
    println!("Edit it to set your default catalog, progress label, etc.");
    Ok(())
}
