pub mod log {
    pub use vks_log::*;
}

pub mod shader {
    pub use vks_shader::*;
}

pub mod fetch {
    pub use vks_fetch::*;
}
