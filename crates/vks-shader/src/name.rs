use std::path::{Path, PathBuf};

use crate::error::ShaderError;

/// Path to a shader source file together with its logical name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    path: PathBuf,
    name: String,
}

impl ShaderSource {
    pub fn new(path: impl Into<PathBuf>, extension: &str) -> Result<Self, ShaderError> {
        let path = path.into();
        let name = resolve(&path.to_string_lossy(), extension)?.to_owned();
        Ok(Self { path, name })
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Extracts the logical name of a shader from its source path. The name is everything between
/// the last directory separator (`/` or `\`) and the extension marker.
///
/// The directory separator is required so the file name can be told apart from its folder.
pub fn resolve<'a>(path: &'a str, extension: &str) -> Result<&'a str, ShaderError> {
    let separator = path.rfind(&['/', '\\'][..]);

    // The marker only counts when it belongs to the file name itself
    let extension_idx = match path.rfind(extension) {
        Some(idx) if separator.map_or(true, |sep| idx > sep) => idx,
        _ => {
            return Err(ShaderError::InvalidExtension {
                path: path.into(),
                extension: extension.into(),
            })
        }
    };

    let separator = separator.ok_or_else(|| ShaderError::MissingDirectorySeparator {
        path: path.into(),
    })?;

    Ok(&path[separator + 1..extension_idx])
}
