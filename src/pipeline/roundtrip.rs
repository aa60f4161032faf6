//! Full self-test: compress a file, decompress it again, compare.

use super::codec::Compressor;
use crate::error::Result;
use crate::files::{write_all_bytes, InputFile};
use crate::format::{load, COMPRESSED_EXTENSION, DECOMPRESSED_EXTENSION};
use crate::lz77::{decode, TokenCounts};
use crate::{bytes_equal, CodecStats, CompressConfig};
use std::ffi::OsString;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Outcome of a compress/decompress self-test
#[derive(Clone, Debug)]
pub struct RoundtripReport {
    /// `<source>.lz77`
    pub compressed_path: PathBuf,
    /// `<source>.dec`
    pub decompressed_path: PathBuf,
    pub compress: CodecStats,
    pub decompress: CodecStats,
    /// Whether the decompressed bytes equal the source
    pub identical: bool,
}

/// Append `.ext` to the full file name (`data.txt` -> `data.txt.lz77`)
fn with_appended_extension(path: &Path, ext: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

/// Compress `path` to `<path>.lz77`, load and decode it to `<path>.dec`, and
/// compare the result with the source bytes.
///
/// Errors from any stage are returned as-is; a completed run that produces
/// different bytes is reported through [`RoundtripReport::identical`].
pub fn verify_roundtrip<P: AsRef<Path>>(path: P, config: CompressConfig) -> Result<RoundtripReport> {
    config.validate()?;

    let path = path.as_ref();
    let compressed_path = with_appended_extension(path, COMPRESSED_EXTENSION);
    let decompressed_path = with_appended_extension(path, DECOMPRESSED_EXTENSION);

    let original = InputFile::open(path)?;

    let compress =
        Compressor::new(config).compress_bytes(&original, File::create(&compressed_path)?)?;

    let tokens = load(&compressed_path)?;
    let decoded = decode(&tokens)?;
    write_all_bytes(&decompressed_path, &decoded)?;

    let decompress = CodecStats {
        input_bytes: compress.output_bytes,
        output_bytes: decoded.len() as u64,
        tokens: TokenCounts::from_tokens(&tokens),
    };

    let identical = bytes_equal(&original, &decoded);
    if !identical {
        log::warn!("Round trip of {} produced different bytes", path.display());
    }

    Ok(RoundtripReport { compressed_path, decompressed_path, compress, decompress, identical })
}
