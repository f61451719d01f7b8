pub mod file;
pub mod naming;
pub mod logging;

pub use file::{remove_file, write_atomically};
pub use naming::{is_woff_name, pair_for, woff2_name_for};
pub use logging::init_logging;
