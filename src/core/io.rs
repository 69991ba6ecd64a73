//! Chain file opening
//!
//! Chain files are distributed plain or compressed; gzip and bzip2 are
//! detected by extension or magic bytes and decompressed transparently.

use crate::core::chain::GenomeChain;
use crate::core::error::{ChainResult, Result};
use crate::core::parser::GenomeChainParser;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

const BUFFER_SIZE: usize = 128 * 1024;

/// Compression format of a chain file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionFormat {
    Plain,
    Gzip,
    Bzip2,
}

/// Detect compression by extension first, then magic bytes
/// (gzip `1f 8b`, bzip2 `BZh`).
pub fn detect_compression(path: &Path) -> std::io::Result<CompressionFormat> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if extension == "gz" {
        return Ok(CompressionFormat::Gzip);
    }
    if extension == "bz2" {
        return Ok(CompressionFormat::Bzip2);
    }

    let mut file = File::open(path)?;
    let mut magic = [0u8; 3];
    let bytes_read = file.read(&mut magic)?;

    if bytes_read >= 2 && magic[0] == 0x1f && magic[1] == 0x8b {
        return Ok(CompressionFormat::Gzip);
    }
    if bytes_read >= 3 && &magic == b"BZh" {
        return Ok(CompressionFormat::Bzip2);
    }
    Ok(CompressionFormat::Plain)
}

/// Open a chain file as a buffered line source, decompressing if needed.
pub fn open_chain_file(path: &Path) -> std::io::Result<Box<dyn BufRead>> {
    let format = detect_compression(path)?;
    let file = File::open(path)?;
    Ok(match format {
        CompressionFormat::Gzip => Box::new(BufReader::with_capacity(
            BUFFER_SIZE,
            flate2::read::GzDecoder::new(file),
        )),
        CompressionFormat::Bzip2 => Box::new(BufReader::with_capacity(
            BUFFER_SIZE,
            bzip2::read::BzDecoder::new(file),
        )),
        CompressionFormat::Plain => Box::new(BufReader::with_capacity(BUFFER_SIZE, file)),
    })
}

/// Parse a chain file from a path, auto-detecting compression.
pub fn parse_chain_file<P: AsRef<Path>>(path: P) -> Result<GenomeChain> {
    let reader = open_chain_file(path.as_ref())?;
    Ok(parse_chain_reader(reader)?)
}

/// Parse chain-format lines from any buffered reader.
pub fn parse_chain_reader<R: BufRead>(reader: R) -> ChainResult<GenomeChain> {
    GenomeChainParser::new().parse(reader.lines())
}

/// Parse chain-format text held in memory (mostly for tests).
pub fn parse_chain_str(text: &str) -> ChainResult<GenomeChain> {
    GenomeChainParser::new().parse(text.lines().map(|l| Ok(l.to_string())))
}
