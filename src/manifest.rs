//! Manifest reader: opens an XMind archive and decodes its `content.json`.

use crate::error::ExtractError;
use crate::types::MANIFEST_ENTRY;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use tracing::debug;
use zip::result::ZipError;
use zip::ZipArchive;

/// Upper bound on the declared uncompressed size of the manifest entry.
pub const MAX_MANIFEST_BYTES: u64 = 64 * 1024 * 1024;

/// Read and decode the manifest of the document at `path`.
///
/// The archive handle lives only for the duration of this call.
pub fn read_manifest(path: &Path) -> Result<Value, ExtractError> {
    if !path.exists() {
        return Err(ExtractError::FileNotFound(path.to_path_buf()));
    }

    let bytes = {
        let file = File::open(path).map_err(|e| ExtractError::Archive {
            path: path.to_path_buf(),
            source: ZipError::Io(e),
        })?;
        let mut archive =
            ZipArchive::new(BufReader::new(file)).map_err(|source| ExtractError::Archive {
                path: path.to_path_buf(),
                source,
            })?;
        read_entry(&mut archive, path)?
    };

    debug!(
        path = %path.display(),
        bytes = bytes.len(),
        "Read manifest entry"
    );
    decode_manifest(&bytes)
}

fn read_entry<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    path: &Path,
) -> Result<Vec<u8>, ExtractError> {
    let mut entry = match archive.by_name(MANIFEST_ENTRY) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => {
            return Err(ExtractError::ManifestMissing {
                path: path.to_path_buf(),
                entry: MANIFEST_ENTRY,
            })
        }
        Err(source) => {
            return Err(ExtractError::Archive {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let size = entry.size();
    if size > MAX_MANIFEST_BYTES {
        return Err(ExtractError::ManifestTooLarge {
            entry: MANIFEST_ENTRY,
            size,
            limit: MAX_MANIFEST_BYTES,
        });
    }

    read_bounded(&mut entry, size, MAX_MANIFEST_BYTES)
}

/// Read at most `limit` bytes. The header size is only a capacity hint; an
/// entry that inflates past `limit` is rejected.
fn read_bounded<R: Read>(reader: R, declared: u64, limit: u64) -> Result<Vec<u8>, ExtractError> {
    let mut bytes = Vec::with_capacity(declared.min(limit) as usize);
    reader
        .take(limit + 1)
        .read_to_end(&mut bytes)
        .map_err(|source| ExtractError::Io {
            entry: MANIFEST_ENTRY,
            source,
        })?;

    let read = bytes.len() as u64;
    if read > limit {
        return Err(ExtractError::ManifestTooLarge {
            entry: MANIFEST_ENTRY,
            size: read,
            limit,
        });
    }
    Ok(bytes)
}

/// Decode manifest bytes into a JSON tree.
pub fn decode_manifest(bytes: &[u8]) -> Result<Value, ExtractError> {
    serde_json::from_slice(bytes).map_err(|source| ExtractError::Decode {
        entry: MANIFEST_ENTRY,
        source,
    })
}
