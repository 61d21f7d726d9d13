//! plugin-zip library
//!
//! Utilities for inspecting and packaging the blog-to-video-converter
//! WordPress plugin ZIP archive.

pub mod cli;
pub mod commands;
pub mod utils;
