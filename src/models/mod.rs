//! Plain data shared by the passes

mod config;
mod font;

pub use config::Config;
pub use font::FontPair;
