//! Command implementations that do not depend on the CLI layer.

pub mod demo;
pub mod init;
