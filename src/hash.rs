//! BLAKE3 hashing utilities for comparing source and destination files

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use blake3::Hasher;

use crate::error::{Result, fs as fs_error};

/// Hash prefix for BLAKE3 hashes
pub const HASH_PREFIX: &str = "blake3:";

/// Calculate BLAKE3 hash of a file
pub fn hash_file(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| fs_error::read_error(path, &e))?;

    let mut reader = BufReader::new(file);
    let mut hasher = Hasher::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .map_err(|e| fs_error::read_error(path, &e))?;

        if bytes_read == 0 {
            break;
        }

        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex()))
}

/// Whether `target` exists and holds exactly the bytes of `source`
pub fn same_contents(source: &Path, target: &Path) -> Result<bool> {
    let (Ok(source_meta), Ok(target_meta)) = (source.metadata(), target.metadata()) else {
        return Ok(false);
    };
    if !target_meta.is_file() || source_meta.len() != target_meta.len() {
        return Ok(false);
    }

    Ok(hash_file(source)? == hash_file(target)?)
}
