//! Command-line arguments for both tools

mod args;

pub use args::{CleanupArgs, CommonArgs, ConvertArgs};
