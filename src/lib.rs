//! Convert WOFF fonts to WOFF2 and prune WOFF files a WOFF2 supersedes

pub mod cli;
pub mod error;
pub mod font;
pub mod models;
pub mod organizer;
pub mod utils;

pub use error::{Error, Result};
pub use models::{Config, FontPair};
