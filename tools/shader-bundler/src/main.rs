use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use vks_log::info;
use vks_shader::prelude::*;

/// Folds every compiled SPIR-V artifact found in the given folders into one generated header.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Folder to scan for compiled artifacts. May be repeated.
    #[arg(short, long = "dir", required = true)]
    dirs: Vec<PathBuf>,
    /// Path of the generated header.
    #[arg(short, long)]
    out: PathBuf,
    /// RON file overriding the default settings.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log progress. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    vks_log::init(vks_log::verbosity_filter(args.verbose), None)?;

    let config = OvenConfig::load_or_default(args.config.as_deref())?;

    let doc = bundle_shaders(&config, &args.dirs, &args.out)
        .with_context(|| format!("unable to generate `{}`", args.out.display()))?;
    info!("bundled {} shaders", doc.declarations().len());

    Ok(())
}
