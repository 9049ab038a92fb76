#![deny(
    warnings,
    missing_debug_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
//! `findup` - Find files and directories by walking up or down the directory
//! tree.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use clap_cargo::style::CLAP_STYLING;
use findup::{Options, PathKind, Result, TraversalOrder, default_options};
use tracing_subscriber::EnvFilter;

/// CLI arguments for `findup`
#[derive(Parser, Debug)]
#[command(author, version, about, styles = CLAP_STYLING)]
struct Cli {
    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Search the start directory and its ancestors
    Up {
        #[command(flatten)]
        common:  CommonArgs,
        /// Stop before scanning this directory
        #[arg(long, value_name = "DIR")]
        stop_at: Option<PathBuf>,
    },
    /// Search the start directory and its descendants
    Down {
        #[command(flatten)]
        common: CommonArgs,
        /// Levels below the start directory to scan (0 for no limit)
        #[arg(long, default_value_t = findup::types::DEFAULT_MAX_DEPTH)]
        depth:  usize,
        /// Order in which descendants are visited
        #[arg(long, value_enum, default_value_t = TraversalOrder::BreadthFirst)]
        order:  TraversalOrder,
    },
}

/// Arguments shared by both directions
#[derive(Args, Debug)]
struct CommonArgs {
    /// File or directory name, or a glob such as '*.toml'
    name:        String,
    /// Directory to start from
    #[arg(long, default_value = ".")]
    cwd:         PathBuf,
    /// Kind of entry to match
    #[arg(short = 't', long = "type", value_enum, default_value_t = PathKind::File)]
    kind:        PathKind,
    /// Do not match symbolic links
    #[arg(long)]
    no_symlinks: bool,
    /// Print every match instead of the first
    #[arg(short, long)]
    all:         bool,
    /// Maximum number of matches printed with --all (0 for no limit)
    #[arg(long, requires = "all")]
    limit:       Option<usize>,
}

impl CommonArgs {
    /// Options shared by both directions
    fn options(&self) -> Options {
        default_options()
            .with_cwd(&self.cwd)
            .with_kind(self.kind)
            .with_symlinks(!self.no_symlinks)
            .with_limit(self.limit)
    }
}

/// Install the stderr log subscriber
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "findup=warn",
        1 => "findup=debug",
        _ => "findup=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Run the search and collect what to print
fn run(command: &Command) -> Result<Vec<PathBuf>> {
    match command {
        Command::Up { common, stop_at } => {
            let mut options = common.options();
            options.stop_at.clone_from(stop_at);
            if common.all {
                findup::find_up_multiple(&common.name, &options)
            } else {
                findup::find_up(&common.name, &options).map(|found| found.into_iter().collect())
            }
        },
        Command::Down { common, depth, order } => {
            let options = common.options().with_max_depth(Some(*depth)).with_order(*order);
            if common.all {
                findup::find_down_multiple(&common.name, &options)
            } else {
                findup::find_down(&common.name, &options).map(|found| found.into_iter().collect())
            }
        },
    }
}

fn print_paths(paths: &[PathBuf]) {
    for path in paths.iter().map(PathBuf::as_path).map(Path::display) {
        println!("{path}");
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli.command) {
        Ok(paths) if paths.is_empty() => ExitCode::from(1),
        Ok(paths) => {
            print_paths(&paths);
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{}", e.user_message());
            ExitCode::from(2)
        },
    }
}
