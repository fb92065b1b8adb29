//! Utilities shared by the Colloquy binaries.

pub mod logger;
pub mod time;
