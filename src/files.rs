//! Whole-file I/O used by the compress/decompress entry points.

use crate::error::Result;
use memmap2::Mmap;
use std::fs::File;
use std::ops::Deref;
use std::path::Path;

/// Read the entire contents of a file.
pub fn read_all_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    Ok(std::fs::read(path)?)
}

/// Write `bytes` to a file, creating or truncating it.
pub fn write_all_bytes<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes)?;
    Ok(())
}

/// A read-only, memory-mapped source file.
///
/// Empty files are not mapped (zero-length mappings are rejected on some
/// platforms) and dereference to an empty slice.
pub struct InputFile {
    map: Option<Mmap>,
}

impl InputFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        if file.metadata()?.len() == 0 {
            return Ok(Self { map: None });
        }

        // SAFETY: the mapping is read-only and lives no longer than this
        // struct. Concurrent truncation of the file by another process is
        // not guarded against.
        let map = unsafe { Mmap::map(&file)? };
        Ok(Self { map: Some(map) })
    }
}

impl Deref for InputFile {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.map.as_deref().unwrap_or(&[])
    }
}
