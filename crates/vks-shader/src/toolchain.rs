use std::{
    env::consts::EXE_SUFFIX,
    ffi::OsString,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use vks_log::debug;

use crate::error::ShaderError;

/// How the shader compiler executable is found. Exactly one strategy is used per run; a failed
/// lookup is an error and never falls through to another strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Toolchain {
    /// Scan the search path variable `var` for the last entry containing `marker` and use
    /// `executable` from that folder. The platform executable suffix is appended when
    /// `executable` has no extension.
    SearchPath {
        var: String,
        marker: String,
        executable: String,
    },
    /// Let the OS resolve `executable` from its own search path.
    OnPath { executable: String },
    /// Use the executable at `path` as is.
    Explicit { path: PathBuf },
}

impl Default for Toolchain {
    fn default() -> Self {
        Toolchain::SearchPath {
            var: String::from("PATH"),
            marker: String::from("VulkanSDK"),
            executable: String::from("dxc"),
        }
    }
}

pub trait ToolchainLocator {
    /// Path (or bare name) of the compiler executable to launch.
    fn locate(&self) -> Result<PathBuf, ShaderError>;
}

pub struct SearchPathLocator {
    var: String,
    search_path: Option<OsString>,
    marker: String,
    executable: String,
}

pub struct OnPathLocator {
    executable: String,
}

pub struct ExplicitLocator {
    path: PathBuf,
}

impl Toolchain {
    /// Builds the locator for this strategy, reading the process environment where needed.
    pub fn locator(&self) -> Box<dyn ToolchainLocator> {
        match self {
            Toolchain::SearchPath {
                var,
                marker,
                executable,
            } => Box::new(SearchPathLocator::from_env(var, marker, executable)),
            Toolchain::OnPath { executable } => Box::new(OnPathLocator::new(executable)),
            Toolchain::Explicit { path } => Box::new(ExplicitLocator::new(path)),
        }
    }
}

impl SearchPathLocator {
    pub fn from_env(var: &str, marker: &str, executable: &str) -> Self {
        Self::with_search_path(var, std::env::var_os(var), marker, executable)
    }

    /// Uses `search_path` instead of the environment. `var` is only used for error messages.
    pub fn with_search_path(
        var: &str,
        search_path: Option<impl Into<OsString>>,
        marker: &str,
        executable: &str,
    ) -> Self {
        Self {
            var: var.into(),
            search_path: search_path.map(Into::into),
            marker: marker.into(),
            executable: executable.into(),
        }
    }
}

impl ToolchainLocator for SearchPathLocator {
    fn locate(&self) -> Result<PathBuf, ShaderError> {
        let not_found = || ShaderError::ToolchainNotFound {
            var: self.var.clone(),
            marker: self.marker.clone(),
        };

        let search_path = self.search_path.as_ref().ok_or_else(not_found)?;

        // Later entries win when several match
        let sdk_dir = std::env::split_paths(search_path)
            .filter(|entry| entry.to_string_lossy().contains(self.marker.as_str()))
            .last()
            .ok_or_else(not_found)?;

        // Names already carrying an extension, like `dxc.exe`, are used as given
        let compiler = if Path::new(&self.executable).extension().is_some() {
            sdk_dir.join(&self.executable)
        } else {
            sdk_dir.join(format!("{}{}", self.executable, EXE_SUFFIX))
        };
        debug!("found compiler `{}` through `{}`", compiler.display(), self.var);

        Ok(compiler)
    }
}

impl OnPathLocator {
    pub fn new(executable: &str) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

impl ToolchainLocator for OnPathLocator {
    #[inline]
    fn locate(&self) -> Result<PathBuf, ShaderError> {
        Ok(PathBuf::from(&self.executable))
    }
}

impl ExplicitLocator {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().into(),
        }
    }
}

impl ToolchainLocator for ExplicitLocator {
    #[inline]
    fn locate(&self) -> Result<PathBuf, ShaderError> {
        Ok(self.path.clone())
    }
}
