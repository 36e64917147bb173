use std::io::BufRead;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::config::HostConfig;
use crate::host::{Flow, Host};
use crate::store::FileStore;

mod command;
mod config;
mod feedback;
mod host;
mod store;
mod view;

#[derive(Parser, Debug)]
#[command(version, about = "Spell Hebrew words from shuffled letter tiles", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// TOML file with host settings and game rules
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the saved game and records, overrides the config file
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Start a new game instead of continuing the saved one
    #[arg(long)]
    new: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    let mut config = match &args.config {
        Some(path) => HostConfig::load(path)?,
        None => HostConfig::default(),
    };
    if let Some(dir) = args.data_dir {
        config.data_dir = Some(dir);
    }

    let seed = args.seed.unwrap_or_else(host::clock_seed);
    log::debug!("seed: {}", seed);

    let data_dir = config.data_dir();
    let store =
        FileStore::open(&data_dir).with_context(|| format!("Could not open data directory {}", data_dir.display()))?;

    let mut host = Host::new(&config, store, seed);
    host.begin(args.new);

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        host.prompt();
        let Some(line) = lines.next() else {
            break;
        };
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                host.shutdown();
                return Err(err).context("Could not read input");
            }
        };
        if host.handle_line(&line) == Flow::Quit {
            break;
        }
    }

    host.shutdown();
    Ok(())
}
