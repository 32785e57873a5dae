use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use vks_shader::prelude::*;

/// Compiles one HLSL shader to SPIR-V and embeds it in a generated C++ header.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the shader source. Its file name must carry a stage marker like `_vert`.
    #[arg(long)]
    src: PathBuf,
    /// Folder receiving the compiled artifact and the generated header.
    #[arg(long = "dstDir")]
    dst_dir: PathBuf,
    /// RON file overriding the default settings.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Include folder passed to the compiler.
    #[arg(long)]
    include: Option<PathBuf>,
    /// Declare `foo_vert` as `fooScript` instead of `foo_vertScript`.
    #[arg(long, default_value_t = false)]
    strip_stage_marker: bool,
    /// Log progress. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    vks_log::init(vks_log::verbosity_filter(args.verbose), None)?;

    let mut config = OvenConfig::load_or_default(args.config.as_deref())?;
    if args.include.is_some() {
        config.include_dir = args.include;
    }
    config.header.strip_stage_marker |= args.strip_stage_marker;

    let locator = config.toolchain.locator();
    bake_shader(&config, locator.as_ref(), &args.src, &args.dst_dir)
        .with_context(|| format!("unable to bake `{}`", args.src.display()))?;

    Ok(())
}
