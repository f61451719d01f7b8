//! WOFF2 container framing
//!
//! Tables are carried through unchanged: glyf and loca use the null
//! transform (version 3), every other table the default null transform
//! (version 0). All table data goes into a single brotli stream.

use std::io::Write;

use allsorts::tag;
use tracing::debug;

use super::webfont::{Table, WebFont};
use crate::error::{Error, Result};

pub const SIGNATURE: u32 = u32::from_be_bytes(*b"wOF2");

const HEADER_SIZE: usize = 48;
const SFNT_HEADER_SIZE: u32 = 12;
const SFNT_TABLE_RECORD_SIZE: u32 = 16;

const BROTLI_BUFFER_SIZE: usize = 4096;
const BROTLI_QUALITY: u32 = 11;
const BROTLI_WINDOW: u32 = 22;

const ARBITRARY_TAG_INDEX: u8 = 63;
const NULL_TRANSFORM_GLYF_LOCA: u8 = 3;

/// Tags with a one-byte index in the WOFF2 table directory
const KNOWN_TAGS: [[u8; 4]; 63] = [
    *b"cmap", *b"head", *b"hhea", *b"hmtx", *b"maxp", *b"name", *b"OS/2", *b"post",
    *b"cvt ", *b"fpgm", *b"glyf", *b"loca", *b"prep", *b"CFF ", *b"VORG", *b"EBDT",
    *b"EBLC", *b"gasp", *b"hdmx", *b"kern", *b"LTSH", *b"PCLT", *b"VDMX", *b"vhea",
    *b"vmtx", *b"BASE", *b"GDEF", *b"GPOS", *b"GSUB", *b"EBSC", *b"JSTF", *b"MATH",
    *b"CBDT", *b"CBLC", *b"COLR", *b"CPAL", *b"SVG ", *b"sbix", *b"acnt", *b"avar",
    *b"bdat", *b"bloc", *b"bsln", *b"cvar", *b"fdsc", *b"feat", *b"fmtx", *b"fvar",
    *b"gvar", *b"hsty", *b"just", *b"lcar", *b"mort", *b"morx", *b"opbd", *b"prop",
    *b"trak", *b"Zapf", *b"Silf", *b"Glat", *b"Gloc", *b"Feat", *b"Sill",
];

fn pad4(len: usize) -> usize {
    (len + 3) & !3
}

fn known_tag_index(tag: u32) -> Option<u8> {
    let bytes = tag.to_be_bytes();
    KNOWN_TAGS
        .iter()
        .position(|known| *known == bytes)
        .map(|i| i as u8)
}

/// Size of the plain sfnt holding `tables`, header and padding included
fn sfnt_size(tables: &[&Table]) -> u32 {
    let records = SFNT_TABLE_RECORD_SIZE.saturating_mul(tables.len() as u32);
    tables
        .iter()
        .map(|t| pad4(t.data.len()) as u32)
        .fold(SFNT_HEADER_SIZE.saturating_add(records), u32::saturating_add)
}

/// Append `value` in the variable-length UIntBase128 encoding
fn write_base128(out: &mut Vec<u8>, value: u32) {
    let mut groups = [0u8; 5];
    let mut count = 0;
    let mut rest = value;
    loop {
        groups[count] = (rest & 0x7F) as u8;
        count += 1;
        rest >>= 7;
        if rest == 0 {
            break;
        }
    }
    for i in (0..count).rev() {
        let continuation = if i == 0 { 0 } else { 0x80 };
        out.push(groups[i] | continuation);
    }
}

fn write_directory_entry(out: &mut Vec<u8>, tag: u32, length: usize) {
    let transform_version = if tag == tag::GLYF || tag == tag::LOCA {
        NULL_TRANSFORM_GLYF_LOCA
    } else {
        0
    };
    match known_tag_index(tag) {
        Some(index) => out.push(index | (transform_version << 6)),
        None => {
            out.push(ARBITRARY_TAG_INDEX | (transform_version << 6));
            out.extend_from_slice(&tag.to_be_bytes());
        }
    }
    write_base128(out, length as u32);
}

fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut writer = brotli::CompressorWriter::new(
        Vec::with_capacity(data.len() / 2),
        BROTLI_BUFFER_SIZE,
        BROTLI_QUALITY,
        BROTLI_WINDOW,
    );
    writer
        .write_all(data)
        .map_err(|e| Error::Compression(e.to_string()))?;
    Ok(writer.into_inner())
}

/// Encode a font as WOFF2
pub fn write_woff2(font: &WebFont) -> Result<Vec<u8>> {
    let mut tables: Vec<&Table> = font.tables().iter().collect();
    tables.sort_by_key(|t| t.tag);
    if tables.is_empty() {
        return Err(Error::Font("font has no tables".into()));
    }
    let num_tables = u16::try_from(tables.len())
        .map_err(|_| Error::Font(format!("{} tables do not fit a WOFF2 header", tables.len())))?;

    let mut directory = Vec::new();
    let mut stream = Vec::with_capacity(tables.iter().map(|t| t.data.len()).sum());
    for table in &tables {
        write_directory_entry(&mut directory, table.tag, table.data.len());
        stream.extend_from_slice(&table.data);
    }
    let compressed = compress(&stream)?;
    debug!(
        "Compressed {} bytes of table data to {}",
        stream.len(),
        compressed.len()
    );

    let compressed_len = compressed.len();
    let data_start = HEADER_SIZE + directory.len();
    let mut offset = pad4(data_start + compressed_len);
    let mut body = compressed;
    body.resize(offset - data_start, 0);

    let (meta_offset, meta_length, meta_orig_length) = match font.metadata() {
        Some(xml) => {
            let packed = compress(xml.as_bytes())?;
            let meta = (offset, packed.len(), xml.len());
            body.extend_from_slice(&packed);
            offset += packed.len();
            meta
        }
        None => (0, 0, 0),
    };
    let (priv_offset, priv_length) = match font.private_data() {
        Some(data) => {
            let padding = pad4(offset) - offset;
            body.resize(body.len() + padding, 0);
            offset += padding;
            let private = (offset, data.len());
            body.extend_from_slice(data);
            offset += data.len();
            private
        }
        None => (0, 0),
    };
    let total_length = offset;
    let (major_version, minor_version) = font.version();

    let mut out = Vec::with_capacity(total_length);
    out.extend_from_slice(&SIGNATURE.to_be_bytes());
    out.extend_from_slice(&font.sfnt_version().to_be_bytes());
    out.extend_from_slice(&(total_length as u32).to_be_bytes());
    out.extend_from_slice(&num_tables.to_be_bytes());
    out.extend_from_slice(&0u16.to_be_bytes());
    out.extend_from_slice(&sfnt_size(&tables).to_be_bytes());
    out.extend_from_slice(&(compressed_len as u32).to_be_bytes());
    out.extend_from_slice(&major_version.to_be_bytes());
    out.extend_from_slice(&minor_version.to_be_bytes());
    for field in [
        meta_offset,
        meta_length,
        meta_orig_length,
        priv_offset,
        priv_length,
    ] {
        out.extend_from_slice(&(field as u32).to_be_bytes());
    }
    out.extend_from_slice(&directory);
    out.extend_from_slice(&body);
    Ok(out)
}
