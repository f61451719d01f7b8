use std::ffi::{OsStr, OsString};
use std::path::Path;

use lazy_static::lazy_static;
use regex::bytes::Regex;

use crate::models::FontPair;

lazy_static! {
    // Matched on raw bytes; names need not be UTF-8
    static ref WOFF_FILE_NAME: Regex = Regex::new(r"(?s-u)^.+\.woff$").unwrap();
}

/// Whether `file_name` names a WOFF file
///
/// Matching is case-sensitive and the base name must be non-empty, so a
/// file called just `.woff` is not a font.
pub fn is_woff_name(file_name: &OsStr) -> bool {
    WOFF_FILE_NAME.is_match(file_name.as_encoded_bytes())
}

/// Name of the WOFF2 file that pairs with `file_name`
pub fn woff2_name_for(file_name: &OsStr) -> Option<OsString> {
    if !is_woff_name(file_name) {
        return None;
    }
    let mut woff2 = file_name.to_os_string();
    woff2.push("2");
    Some(woff2)
}

/// Pair a WOFF file in `dir` with its same-named WOFF2 sibling
pub fn pair_for(dir: &Path, file_name: &OsStr) -> Option<FontPair> {
    woff2_name_for(file_name).map(|woff2| FontPair::new(dir.join(file_name), dir.join(woff2)))
}
