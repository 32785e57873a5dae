use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("`{path}` does not have the `{extension}` extension")]
    InvalidExtension { path: String, extension: String },
    #[error("`{path}` does not have a directory separator")]
    MissingDirectorySeparator { path: String },
    #[error("unrecognized stage for shader `{name}`, expected `{vertex}` or `{fragment}` in its name")]
    UnrecognizedShaderStage {
        name: String,
        vertex: String,
        fragment: String,
    },
    #[error("unable to find `{marker}` in the `{var}` search path")]
    ToolchainNotFound { var: String, marker: String },
    #[error("unable to launch compiler `{}`: {source}", .compiler.display())]
    CompilerLaunch {
        compiler: PathBuf,
        source: std::io::Error,
    },
    #[error("unable to compile `{}` ({}):\n{output}", .shader.display(), exit_text(.exit_code))]
    CompilationFailed {
        shader: PathBuf,
        /// `None` when the compiler was terminated by a signal.
        exit_code: Option<i32>,
        /// Captured stderr followed by stdout.
        output: String,
    },
    #[error("unable to read artifact `{}`: {source}", .path.display())]
    ArtifactRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("`{}` and `{}` both map to symbol `{symbol}`", .first.display(), .second.display())]
    DuplicateSymbol {
        symbol: String,
        first: PathBuf,
        second: PathBuf,
    },
    #[error("`{symbol}` from `{}` is not a valid C++ identifier", .origin.display())]
    InvalidSymbol { symbol: String, origin: PathBuf },
    #[error("unable to write `{}`: {source}", .path.display())]
    DestinationWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unable to read config `{}`: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unable to parse config `{}`: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

fn exit_text(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit code {code}"),
        None => String::from("terminated by signal"),
    }
}
