//! Directory passes: convert WOFF to WOFF2, remove superseded WOFF files

pub mod scan;
pub mod convert;
pub mod cleanup;

pub use scan::scan_woff_files;
pub use convert::{convert_directory, convert_font, ConvertReport};
pub use cleanup::{cleanup_directory, woff2_supersedes, CleanupReport};
