//! Library side of the `framecut` command-line tool.

pub mod clipboard;
pub mod config;
pub mod input;
pub mod logging;
pub mod render;
