use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use ngtrap::config::NgtrapConfig;
use ngtrap::fs_utils::gather_pairs;
use ngtrap::{StopFolders, TrapSet, builtin, expand, extract_pair, report};

/// Suggest Angular module imports for component template/class pairs.
///
/// Every `*.html` under the given folders is paired with the `*.ts` of the
/// same name; the imports the pair needs are printed for manual pasting.
#[derive(Parser, Debug)]
#[command(name = "ngtrap", version, disable_help_flag = true)]
struct Args {
    /// Folders to scan.
    #[arg(value_name = "FOLDER_PATH")]
    folders: Vec<PathBuf>,

    /// Enable component definition scan.
    #[arg(long)]
    scan_component: bool,

    /// Set logging level to DEBUG for more verbose logs.
    #[arg(short = 'v')]
    verbose: bool,

    /// Config file (default: .ngtrap/config.toml in the working directory).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Show this message.
    #[arg(short = 'h', long = "help")]
    help: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .init();
}

fn load_config(args: &Args) -> Result<NgtrapConfig> {
    let config = match &args.config {
        Some(path) => NgtrapConfig::load_from_path(path),
        None => NgtrapConfig::load(Path::new(".")),
    };
    config.context("failed to load configuration")
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

fn run(args: Args) -> Result<()> {
    let folders: Vec<PathBuf> = args.folders.iter().map(|p| absolute(p)).collect();

    let mut catalog = builtin::catalog();
    let mut tables = builtin::trap_tables();
    let mut stop = StopFolders::new(builtin::STOP_FOLDERS.iter().copied());
    load_config(&args)?.apply(&mut catalog, &mut tables, &mut stop);

    if args.scan_component {
        for folder in &folders {
            expand::scan_components(&mut catalog, &mut tables, folder, &stop)
                .with_context(|| format!("component scan failed in {}", folder.display()))?;
        }
    }

    let catalog = catalog.finish();
    tracing::debug!("tier bound = {}", catalog.tier_bound());
    let traps = TrapSet::build(&catalog, &tables);

    for folder in &folders {
        for pair in gather_pairs(folder, &stop) {
            let resolved = extract_pair(&traps, &pair.markup, &pair.logic)?;
            print!("{}", report::render_pair(&pair.markup, &resolved));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    if std::env::args_os().len() < 2 {
        println!("{}", Args::command().render_help());
        return ExitCode::FAILURE;
    }
    let args = Args::parse();
    if args.help {
        println!("{}", Args::command().render_help());
        return ExitCode::FAILURE;
    }

    init_logging(args.verbose);
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
