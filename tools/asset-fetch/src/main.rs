use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use vks_fetch::prelude::*;

/// Downloads the assets used by the samples into a local data folder.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Names of the assets to download.
    names: Vec<String>,
    /// Download every known asset.
    #[arg(long, default_value_t = false)]
    all: bool,
    /// Print the known assets and exit.
    #[arg(long, default_value_t = false)]
    list: bool,
    /// Folder receiving the downloads.
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,
    /// Log progress. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    vks_log::init(vks_log::verbosity_filter(args.verbose), None)?;

    if args.list {
        for entry in CATALOG {
            println!("{:<20} {}", entry.name, entry.file_name);
        }
        return Ok(());
    }

    let entries = if args.all {
        CATALOG.iter().collect::<Vec<_>>()
    } else {
        if args.names.is_empty() {
            anyhow::bail!("no assets requested, pass asset names or `--all`");
        }
        args.names
            .iter()
            .map(|name| find(name))
            .collect::<Result<Vec<_>, _>>()?
    };

    let source = HttpSource::new()?;
    for entry in entries {
        fetch(entry, &args.data_dir, &source)
            .with_context(|| format!("unable to download `{}`", entry.name))?;
    }

    Ok(())
}
