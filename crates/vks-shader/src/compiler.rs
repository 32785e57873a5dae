use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::Command,
};

use vks_log::{debug, info};

use crate::{
    config::OvenConfig,
    error::ShaderError,
    name::ShaderSource,
    profile::{Profile, ProfileTargets},
    toolchain::ToolchainLocator,
};

/// SPIR-V extensions every shader is compiled with. The samples rely on all of them, so they are
/// not configurable.
pub const SPIRV_EXTENSIONS: [&str; 4] = [
    "SPV_KHR_ray_tracing",
    "SPV_KHR_multiview",
    "SPV_KHR_shader_draw_parameters",
    "SPV_EXT_descriptor_indexing",
];

/// Drives the external shader compiler.
pub struct CompilerInvoker {
    compiler: PathBuf,
    targets: ProfileTargets,
    entry_point: String,
    include_dir: PathBuf,
    binary_extension: String,
}

/// Binary produced by the compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledArtifact {
    path: PathBuf,
}

impl CompilerInvoker {
    pub fn new(
        compiler: impl Into<PathBuf>,
        include_dir: impl Into<PathBuf>,
        config: &OvenConfig,
    ) -> Self {
        Self {
            compiler: compiler.into(),
            targets: config.targets.clone(),
            entry_point: config.entry_point.clone(),
            include_dir: include_dir.into(),
            binary_extension: config.binary_extension.clone(),
        }
    }

    /// Locates the compiler with `locator` and takes the remaining settings from `config`.
    pub fn from_config(
        config: &OvenConfig,
        locator: &dyn ToolchainLocator,
    ) -> Result<Self, ShaderError> {
        let compiler = locator.locate()?;
        let include_dir = match &config.include_dir {
            Some(dir) => dir.clone(),
            None => default_include_dir(),
        };

        Ok(Self::new(compiler, include_dir, config))
    }

    #[inline]
    pub fn compiler(&self) -> &Path {
        &self.compiler
    }

    /// Where the artifact for the shader called `name` lands inside `dest_dir`.
    pub fn artifact_path(&self, name: &str, dest_dir: &Path) -> PathBuf {
        dest_dir.join(format!("{name}.{}", self.binary_extension))
    }

    /// Full argument list passed to the compiler.
    pub fn command_args(
        &self,
        source: &ShaderSource,
        profile: Profile,
        out: &Path,
    ) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::with_capacity(10 + SPIRV_EXTENSIONS.len());
        args.push("-spirv".into());
        args.push("-T".into());
        args.push(self.targets.target(profile).into());
        args.push("-E".into());
        args.push(self.entry_point.as_str().into());
        args.push("-I".into());
        args.push(self.include_dir.as_os_str().into());
        for ext in SPIRV_EXTENSIONS {
            args.push(format!("-fspv-extension={ext}").into());
        }
        args.push(source.path().as_os_str().into());
        args.push("-Fo".into());
        args.push(out.as_os_str().into());
        args
    }

    /// Compiles `source` into `dest_dir`. Blocks until the compiler exits.
    ///
    /// On failure the output file is removed, since the compiler may have left a partial one
    /// behind.
    pub fn compile(
        &self,
        source: &ShaderSource,
        profile: Profile,
        dest_dir: &Path,
    ) -> Result<CompiledArtifact, ShaderError> {
        std::fs::create_dir_all(dest_dir).map_err(|err| ShaderError::DestinationWriteFailed {
            path: dest_dir.into(),
            source: err,
        })?;

        let out = self.artifact_path(source.name(), dest_dir);
        let args = self.command_args(source, profile, &out);
        debug!("running `{}` with {args:?}", self.compiler.display());

        let output = Command::new(&self.compiler)
            .args(&args)
            .output()
            .map_err(|err| ShaderError::CompilerLaunch {
                compiler: self.compiler.clone(),
                source: err,
            })?;

        if !output.status.success() {
            let _ = std::fs::remove_file(&out);

            let mut text = String::from_utf8_lossy(&output.stderr).into_owned();
            text.push_str(&String::from_utf8_lossy(&output.stdout));

            return Err(ShaderError::CompilationFailed {
                shader: source.path().into(),
                exit_code: output.status.code(),
                output: text.trim_end().into(),
            });
        }

        info!("compiled `{}` into `{}`", source.path().display(), out.display());

        Ok(CompiledArtifact { path: out })
    }
}

impl CompiledArtifact {
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the artifact back. Consumes it, since each artifact is serialized once.
    pub fn read(self) -> Result<Vec<u8>, ShaderError> {
        std::fs::read(&self.path).map_err(|source| ShaderError::ArtifactRead {
            path: self.path,
            source,
        })
    }
}

/// The folder holding the running tool. Shared shader includes are shipped next to it.
pub fn default_include_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
