//! Downloads the static assets (environment maps, meshes) used by the samples.

pub mod catalog;
pub mod source;


use std::path::{Path, PathBuf};

use thiserror::Error;
use vks_log::info;

pub mod prelude {
    pub use crate::{catalog::*, source::*, *};
}

use crate::{catalog::AssetEntry, source::AssetSource};

/// Folder assets land in when none is given.
pub const DEFAULT_DATA_DIR: &str = "./data";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("unknown asset `{0}`")]
    UnknownAsset(String),
    #[error("unable to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request for `{url}` failed: {source}")]
    Http { url: String, source: reqwest::Error },
    #[error("`{url}` answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("unable to write `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Downloads `entry` into `data_dir`, creating the folder if needed and replacing any previous
/// copy. Returns the path of the written file.
pub fn fetch(
    entry: &AssetEntry,
    data_dir: &Path,
    source: &dyn AssetSource,
) -> Result<PathBuf, FetchError> {
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source: std::io::Error| FetchError::Io { path, source }
    };

    std::fs::create_dir_all(data_dir).map_err(io_err(data_dir))?;

    let bytes = source.get(entry.url)?;

    let path = data_dir.join(entry.file_name);
    std::fs::write(&path, &bytes).map_err(io_err(&path))?;

    info!("downloaded `{}` ({} bytes)", path.display(), bytes.len());

    Ok(path)
}
