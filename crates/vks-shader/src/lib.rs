//! Turns HLSL shader sources into SPIR-V and embeds the result as byte arrays inside generated
//! C++ headers.
//!
//! The pipeline is strictly linear: a source path is resolved into a logical name, the name
//! selects a stage profile, an external compiler produces the binary artifact, and the artifact
//! is serialized into a header document.

pub mod compiler;
pub mod config;
pub mod error;
pub mod header;
pub mod name;
pub mod pipeline;
pub mod profile;
pub mod serialize;
pub mod toolchain;


pub mod prelude {
    pub use crate::{
        compiler::*, config::*, error::*, header::*, name::*, pipeline::*, profile::*,
        serialize::*, toolchain::*,
    };
}
