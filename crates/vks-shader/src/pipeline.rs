use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use vks_log::warn;

use crate::{
    compiler::CompilerInvoker,
    config::OvenConfig,
    error::ShaderError,
    header::{scan_artifacts, HeaderDocument},
    name::ShaderSource,
    profile::ShaderIdentity,
    serialize::serialize,
    toolchain::ToolchainLocator,
};

/// Compiles one shader and writes `<dst_dir>/<prefix><name>.h` embedding it. Returns the path of
/// the header.
///
/// Nothing is written when any stage fails. The compiled artifact is left next to the header.
pub fn bake_shader(
    config: &OvenConfig,
    locator: &dyn ToolchainLocator,
    src: &Path,
    dst_dir: &Path,
) -> Result<PathBuf, ShaderError> {
    let source = ShaderSource::new(src, &config.source_extension)?;
    let identity = ShaderIdentity::new(source.name(), &config.markers)?;

    let symbol_root = if config.header.strip_stage_marker {
        config.markers.strip(&identity.name, identity.profile)
    } else {
        identity.name.clone()
    };
    let symbol = config.header.checked_symbol(&symbol_root, source.path())?;

    let invoker = CompilerInvoker::from_config(config, locator)?;
    let bytes = invoker.compile(&source, identity.profile, dst_dir)?.read()?;

    if bytes.is_empty() {
        warn!("compiler produced an empty artifact for `{}`", src.display());
    }

    let mut doc = HeaderDocument::new(&config.header);
    doc.push(serialize(&bytes, &symbol));

    let header_path = dst_dir.join(config.header.header_file_name(&identity.name));
    doc.write(&header_path)?;

    Ok(header_path)
}

/// Folds every compiled artifact inside `dirs` into the single header at `out`.
///
/// Declarations follow file name order. Empty artifacts are left out of the bundle with a
/// warning. File stems that are not C++ identifiers, or two artifacts mapping to the same
/// symbol, are errors.
pub fn bundle_shaders(
    config: &OvenConfig,
    dirs: &[impl AsRef<Path>],
    out: &Path,
) -> Result<HeaderDocument, ShaderError> {
    let artifacts = scan_artifacts(dirs, &config.binary_extension)?;

    let mut doc = HeaderDocument::new(&config.header);
    let mut symbols = HashMap::<String, PathBuf>::default();

    for artifact in artifacts {
        let bytes = std::fs::read(&artifact.path).map_err(|source| ShaderError::ArtifactRead {
            path: artifact.path.clone(),
            source,
        })?;

        if bytes.is_empty() {
            warn!("skipping empty artifact `{}`", artifact.path.display());
            continue;
        }

        let symbol = config.header.checked_symbol(&artifact.stem, &artifact.path)?;
        if let Some(first) = symbols.get(&symbol) {
            return Err(ShaderError::DuplicateSymbol {
                symbol,
                first: first.clone(),
                second: artifact.path,
            });
        }

        doc.push(serialize(&bytes, &symbol));
        symbols.insert(symbol, artifact.path);
    }

    doc.write(out)?;

    Ok(doc)
}
