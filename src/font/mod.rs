//! Font loading, validation and WOFF2 output
//!
//! Container decoding is delegated to allsorts and the validity check to
//! ttf-parser; this module only frames the WOFF2 output.

pub mod webfont;
pub mod woff2;
pub mod validate;

pub use validate::{validate_font, FontSummary};
pub use webfont::{Flavor, Table, WebFont};
