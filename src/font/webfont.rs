use std::fmt;
use std::fs;
use std::path::Path;

use allsorts::binary::read::ReadScope;
use allsorts::font_data::FontData;
use allsorts::tables::{FontTableProvider, OpenTypeData, SfntVersion};
use allsorts::tag::DisplayTag;
use tracing::debug;

use super::woff2;
use crate::error::{Error, Result};
use crate::utils::write_atomically;

/// Container format a font is read from or written as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// Plain TrueType/OpenType
    Sfnt,
    /// WOFF 1.0 (zlib)
    Woff,
    /// WOFF2 (brotli)
    Woff2,
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flavor::Sfnt => write!(f, "sfnt"),
            Flavor::Woff => write!(f, "WOFF"),
            Flavor::Woff2 => write!(f, "WOFF2"),
        }
    }
}

/// One uncompressed font table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub tag: u32,
    pub data: Vec<u8>,
}

/// A decoded font: its sfnt tables plus the WOFF extension blocks
///
/// Decoding is done by allsorts. Loading remembers the container the font
/// came from; saving writes whatever flavor is set at that point, so
/// converting is `load`, `set_flavor`, `save`.
#[derive(Debug, Clone)]
pub struct WebFont {
    flavor: Flavor,
    sfnt_version: u32,
    major_version: u16,
    minor_version: u16,
    tables: Vec<Table>,
    metadata: Option<String>,
    private_data: Option<Vec<u8>>,
}

/// Header fields the WOFF flavors carry on top of the sfnt tables
struct Extensions {
    major_version: u16,
    minor_version: u16,
    metadata: Option<String>,
    private_data: Option<Vec<u8>>,
}

impl Extensions {
    fn none() -> Self {
        Self {
            major_version: 0,
            minor_version: 0,
            metadata: None,
            private_data: None,
        }
    }
}

fn private_block(scope: &ReadScope<'_>, offset: u32, length: u32) -> Result<Option<Vec<u8>>> {
    if offset == 0 || length == 0 {
        return Ok(None);
    }
    let block = scope.offset_length(offset as usize, length as usize)?;
    Ok(Some(block.data().to_vec()))
}

impl WebFont {
    /// Decode a font, detecting its container from the signature
    ///
    /// Font collections are rejected; only the single-font containers are
    /// converted.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let font = ReadScope::new(data).read::<FontData<'_>>()?;

        let (flavor, extensions) = match &font {
            FontData::OpenType(otf) => {
                if let OpenTypeData::Collection(_) = otf.data {
                    return Err(Error::UnsupportedFormat("TrueType collection".into()));
                }
                (Flavor::Sfnt, Extensions::none())
            }
            FontData::Woff(woff) => {
                let header = &woff.woff_header;
                (
                    Flavor::Woff,
                    Extensions {
                        major_version: header._major_version,
                        minor_version: header._minor_version,
                        metadata: woff.extended_metadata()?,
                        private_data: private_block(
                            &woff.scope,
                            header.priv_offset,
                            header.priv_length,
                        )?,
                    },
                )
            }
            FontData::Woff2(woff2) => {
                if woff2.collection_directory.is_some() {
                    return Err(Error::UnsupportedFormat("WOFF2 font collection".into()));
                }
                let header = &woff2.woff_header;
                (
                    Flavor::Woff2,
                    Extensions {
                        major_version: header._major_version,
                        minor_version: header._minor_version,
                        metadata: woff2.extended_metadata()?,
                        private_data: private_block(
                            &woff2.scope,
                            header.priv_offset,
                            header.priv_length,
                        )?,
                    },
                )
            }
        };

        let provider = font.table_provider(0)?;
        let tags = provider
            .table_tags()
            .ok_or_else(|| Error::Font("table directory could not be read".into()))?;
        let mut tables = Vec::with_capacity(tags.len());
        for tag in tags {
            let data = provider
                .read_table_data(tag)
                .map_err(|e| Error::Font(format!("table '{}': {}", DisplayTag(tag), e)))?;
            tables.push(Table {
                tag,
                data: data.into_owned(),
            });
        }

        Ok(Self {
            flavor,
            sfnt_version: provider.sfnt_version(),
            major_version: extensions.major_version,
            minor_version: extensions.minor_version,
            tables,
            metadata: extensions.metadata,
            private_data: extensions.private_data,
        })
    }

    /// Read and decode the font at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read(path)?;
        let font = Self::from_bytes(&data)?;
        debug!(
            "Loaded {} font {} ({} tables)",
            font.flavor,
            path.display(),
            font.tables.len()
        );
        Ok(font)
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Choose the container `to_bytes` and `save` produce
    pub fn set_flavor(&mut self, flavor: Flavor) {
        self.flavor = flavor;
    }

    /// sfnt version of the wrapped font (`0x00010000`, `OTTO` or `true`)
    pub fn sfnt_version(&self) -> u32 {
        self.sfnt_version
    }

    /// Font version from the WOFF header, `(0, 0)` for plain sfnt input
    pub fn version(&self) -> (u16, u16) {
        (self.major_version, self.minor_version)
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn table_data(&self, tag: u32) -> Option<&[u8]> {
        self.tables
            .iter()
            .find(|t| t.tag == tag)
            .map(|t| t.data.as_slice())
    }

    /// Extended metadata XML
    pub fn metadata(&self) -> Option<&str> {
        self.metadata.as_deref()
    }

    pub fn private_data(&self) -> Option<&[u8]> {
        self.private_data.as_deref()
    }

    /// Encode the font in its current flavor
    ///
    /// Only WOFF2 output is written; the other flavors are input only.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        match self.flavor {
            Flavor::Woff2 => woff2::write_woff2(self),
            other => Err(Error::UnsupportedFormat(format!("writing {} output", other))),
        }
    }

    /// Encode the font in its current flavor and write it to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        let bytes = self.to_bytes()?;
        write_atomically(path, &bytes)?;
        debug!("Saved {} font {} ({} bytes)", self.flavor, path.display(), bytes.len());
        Ok(())
    }
}
