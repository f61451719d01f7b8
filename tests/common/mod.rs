#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use flate2::write::ZlibEncoder;
use flate2::Compression;

pub const TRUETYPE_VERSION: u32 = 0x0001_0000;

/// A raw sfnt table: tag and uncompressed bytes
pub type RawTable = ([u8; 4], Vec<u8>);

fn be16(values: &[u16]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_be_bytes()).collect()
}

fn name_table(family: &str) -> Vec<u8> {
    let encoded: Vec<u8> = family.encode_utf16().flat_map(|u| u.to_be_bytes()).collect();
    let mut table = be16(&[0, 1, 18, 3, 1, 0x0409, 1, encoded.len() as u16, 0]);
    table.extend_from_slice(&encoded);
    table
}

/// Tables of a one-glyph TrueType font named "Sample" that ttf-parser accepts
pub fn sample_tables() -> Vec<RawTable> {
    let mut head = be16(&[1, 0, 1, 0, 0, 0, 0x5F0F, 0x3CF5, 0, 1000]);
    head.extend_from_slice(&[0; 24]);
    head.extend_from_slice(&be16(&[0, 8, 2, 0, 0]));

    let mut hhea = be16(&[1, 0, 800, 0xFF38, 0, 500, 0, 0, 500, 1, 0, 0, 0, 0, 0, 0, 0]);
    hhea.extend_from_slice(&be16(&[1]));

    vec![
        (*b"maxp", be16(&[0, 0x5000, 1])),
        (*b"head", head),
        (*b"hhea", hhea),
        (*b"hmtx", be16(&[500, 0])),
        (*b"name", name_table("Sample")),
        (*b"loca", be16(&[0, 300])),
        (*b"glyf", (0..600u32).map(|i| (i % 11) as u8).collect()),
    ]
}

fn pad4(len: usize) -> usize {
    (len + 3) & !3
}

fn checksum(data: &[u8]) -> u32 {
    data.chunks(4).fold(0u32, |sum, chunk| {
        let mut word = [0u8; 4];
        word[..chunk.len()].copy_from_slice(chunk);
        sum.wrapping_add(u32::from_be_bytes(word))
    })
}

fn deflate(data: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Pack tables into a WOFF 1.0 file, deflating each table that shrinks
pub fn pack_woff(tables: &[RawTable], metadata: Option<&str>, private_data: Option<&[u8]>) -> Vec<u8> {
    let mut sorted: Vec<&RawTable> = tables.iter().collect();
    sorted.sort_by_key(|(tag, _)| *tag);

    let header_size = 44 + 20 * sorted.len();
    let mut directory = Vec::new();
    let mut body = Vec::new();
    for (tag, data) in &sorted {
        let compressed = deflate(data);
        let stored = if compressed.len() < data.len() { compressed } else { data.clone() };
        directory.extend_from_slice(tag);
        directory.extend_from_slice(&((header_size + body.len()) as u32).to_be_bytes());
        directory.extend_from_slice(&(stored.len() as u32).to_be_bytes());
        directory.extend_from_slice(&(data.len() as u32).to_be_bytes());
        directory.extend_from_slice(&checksum(data).to_be_bytes());
        body.extend_from_slice(&stored);
        body.resize(pad4(body.len()), 0);
    }

    let mut meta = [0u32; 3];
    if let Some(xml) = metadata {
        let compressed = deflate(xml.as_bytes());
        meta = [
            (header_size + body.len()) as u32,
            compressed.len() as u32,
            xml.len() as u32,
        ];
        body.extend_from_slice(&compressed);
    }
    let mut private = [0u32; 2];
    if let Some(data) = private_data {
        body.resize(pad4(body.len()), 0);
        private = [(header_size + body.len()) as u32, data.len() as u32];
        body.extend_from_slice(data);
    }

    let sfnt_size = 12 + 16 * sorted.len() + sorted.iter().map(|(_, d)| pad4(d.len())).sum::<usize>();
    let mut out = Vec::new();
    out.extend_from_slice(b"wOFF");
    out.extend_from_slice(&TRUETYPE_VERSION.to_be_bytes());
    out.extend_from_slice(&((header_size + body.len()) as u32).to_be_bytes());
    out.extend_from_slice(&(sorted.len() as u16).to_be_bytes());
    out.extend_from_slice(&0u16.to_be_bytes());
    out.extend_from_slice(&(sfnt_size as u32).to_be_bytes());
    out.extend_from_slice(&be16(&[1, 0]));
    for field in meta.iter().chain(&private) {
        out.extend_from_slice(&field.to_be_bytes());
    }
    out.extend_from_slice(&directory);
    out.extend_from_slice(&body);
    out
}

/// The sample font as WOFF
pub fn sample_woff() -> Vec<u8> {
    pack_woff(&sample_tables(), None, None)
}

pub fn write(dir: &Path, name: &str, bytes: &[u8]) {
    fs::write(dir.join(name), bytes).unwrap();
}

/// Every regular file directly inside `dir`, by name
pub fn snapshot(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.is_file())
        .map(|p| {
            let name = p.file_name().unwrap().to_string_lossy().into_owned();
            (name, fs::read(&p).unwrap())
        })
        .collect()
}
