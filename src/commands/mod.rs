//! Command implementations

pub mod archive;
