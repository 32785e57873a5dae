use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    error::ShaderError,
    header::HeaderStyle,
    profile::{ProfileTargets, StageMarkers},
    toolchain::Toolchain,
};

/// Settings shared by the shader tools. Every field has a default, so a config file only needs
/// to list what it overrides.
///
/// ```ron
/// (
///     toolchain: Explicit(path: "C:/VulkanSDK/1.3.268.0/Bin/dxc.exe"),
///     header: (namespace: "Samples"),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OvenConfig {
    /// Extension marker every shader source path must carry.
    pub source_extension: String,
    /// Extension of compiled artifacts, without the dot.
    pub binary_extension: String,
    pub markers: StageMarkers,
    pub targets: ProfileTargets,
    /// Entry point symbol passed to the compiler.
    pub entry_point: String,
    /// Include directory passed to the compiler. Defaults to the folder holding the running
    /// tool.
    pub include_dir: Option<PathBuf>,
    pub toolchain: Toolchain,
    pub header: HeaderStyle,
}

impl Default for OvenConfig {
    fn default() -> Self {
        Self {
            source_extension: String::from(".hlsl"),
            binary_extension: String::from("spv"),
            markers: StageMarkers::default(),
            targets: ProfileTargets::default(),
            entry_point: String::from("main"),
            include_dir: None,
            toolchain: Toolchain::default(),
            header: HeaderStyle::default(),
        }
    }
}

impl OvenConfig {
    pub fn load(path: &Path) -> Result<Self, ShaderError> {
        let data = std::fs::read_to_string(path).map_err(|source| ShaderError::ConfigRead {
            path: path.into(),
            source,
        })?;

        ron::de::from_str::<OvenConfig>(&data).map_err(|source| ShaderError::ConfigParse {
            path: path.into(),
            source,
        })
    }

    /// Loads the config at `path` if one was given, otherwise uses the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ShaderError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
