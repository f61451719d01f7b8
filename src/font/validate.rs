use allsorts::tag;
use ttf_parser::{name_id, Face, RawFaceTables};

use super::webfont::WebFont;
use crate::error::{Error, Result};

/// What the sfnt parser could read from a decoded font
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSummary {
    pub family_name: Option<String>,
    pub num_glyphs: u16,
}

/// Check that the decoded tables parse before anything is written
pub fn validate_font(font: &WebFont) -> Result<FontSummary> {
    let raw = RawFaceTables {
        head: font.table_data(tag::HEAD).unwrap_or_default(),
        hhea: font.table_data(tag::HHEA).unwrap_or_default(),
        maxp: font.table_data(tag::MAXP).unwrap_or_default(),
        cff: font.table_data(tag::CFF),
        cmap: font.table_data(tag::CMAP),
        glyf: font.table_data(tag::GLYF),
        hmtx: font.table_data(tag::HMTX),
        loca: font.table_data(tag::LOCA),
        name: font.table_data(tag::NAME),
        os2: font.table_data(tag::OS_2),
        post: font.table_data(tag::POST),
        ..Default::default()
    };
    let face = Face::from_raw_tables(raw).map_err(|e| Error::Validation(e.to_string()))?;

    let family_name = face
        .names()
        .into_iter()
        .filter(|name| name.name_id == name_id::FAMILY && name.is_unicode())
        .find_map(|name| name.to_string());

    Ok(FontSummary {
        family_name,
        num_glyphs: face.number_of_glyphs(),
    })
}
