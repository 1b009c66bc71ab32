//! R-Block ledger I/O: atomic, immutable writes and a tamper-detecting
//! reader (spec §4.8/§4.9, glossary "R-Block"/"Chain").
//!
//! Grounded on `vm_io::canonical_json::write_canonical_file`'s atomic-write
//! discipline (temp-or-direct + fsync) and on the original
//! `epgs.core.neurochain.write_rblock`'s existence-check-as-immutability
//! contract — but the file written here is the *canonical* encoding (spec
//! §4.9), not the original's pretty-printed one, so replay produces
//! byte-identical files.

#![forbid(unsafe_code)]

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::canonical_json::to_canonical_json_bytes;
use crate::hasher::chained_hash;
use crate::IoError;

/// A single R-Block as read back off disk: the hash-chain envelope fields
/// plus the undifferentiated payload (subsystem outputs are opaque JSON
/// here — `epgs_pipeline` knows their shape, this crate only knows the
/// chain invariant).
#[derive(Debug, Clone)]
pub struct RBlockRecord {
    pub path: PathBuf,
    pub previous_hash: String,
    pub rblock_hash: String,
    /// The record with `previous_hash` and `rblock_hash` removed — this is
    /// exactly what gets re-canonicalized and re-hashed during verification.
    pub payload: Value,
}

/// Write one R-Block to `ledger_dir/{rblock_id}.json`.
///
/// `payload` MUST NOT itself carry `previous_hash` or `rblock_hash` fields —
/// those are appended by this function, per the NoId → WithId discipline
/// the rest of the workspace uses for hash-bearing records. Fails with
/// [`IoError::ImmutabilityViolation`] if the target path already exists.
pub fn write_rblock<T: Serialize>(
    ledger_dir: &Path,
    rblock_id: &str,
    payload: &T,
    previous_hash: &str,
) -> Result<String, IoError> {
    fs::create_dir_all(ledger_dir)?;

    let payload_value = serde_json::to_value(payload)?;
    let canonical_payload = to_canonical_json_bytes(&payload_value);
    let rblock_hash = chained_hash(&canonical_payload, previous_hash);

    let mut record = match payload_value {
        Value::Object(map) => map,
        _ => {
            return Err(IoError::Path(
                "R-Block payload must serialize to a JSON object".into(),
            ))
        }
    };
    record.insert("previous_hash".into(), Value::String(previous_hash.to_string()));
    record.insert("rblock_hash".into(), Value::String(rblock_hash.clone()));

    let bytes = to_canonical_json_bytes(&Value::Object(record));
    let target = ledger_dir.join(format!("{rblock_id}.json"));
    write_immutable(&target, &bytes)?;

    Ok(rblock_hash)
}

/// Create `path` and write `bytes`, failing atomically if `path` already
/// exists. `create_new` is itself the atomic existence check — no separate
/// `exists()` probe is needed (and one would be racy).
fn write_immutable(path: &Path, bytes: &[u8]) -> Result<(), IoError> {
    let mut f = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(IoError::ImmutabilityViolation(path.display().to_string()))
        }
        Err(e) => return Err(IoError::Path(format!("{}: {e}", path.display()))),
    };
    f.write_all(bytes)?;
    f.sync_all()?;
    drop(f);
    let _ = fsync_dir(path.parent().unwrap_or_else(|| Path::new(".")));
    Ok(())
}

#[cfg(unix)]
fn fsync_dir(dir: &Path) -> io::Result<()> {
    OpenOptions::new().read(true).open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn fsync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}

/// A pure reader over a ledger directory: enumerates, sorts, and parses
/// R-Block files without recomputing the chain (that's the verifier's job,
/// one layer up — this type supplies the primitives it needs).
pub struct LedgerReader;

impl LedgerReader {
    /// Filenames matching the UUID shape `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx.json`
    /// (case-insensitive), lexically sorted. Non-UUID `.json` files are
    /// ignored, as spec §4.9 requires.
    pub fn enumerate(ledger_dir: &Path) -> Result<Vec<PathBuf>, IoError> {
        let mut names: Vec<String> = fs::read_dir(ledger_dir)?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| is_uuid_shaped_json(name))
            .collect();
        names.sort();
        Ok(names.into_iter().map(|n| ledger_dir.join(n)).collect())
    }

    /// Parse one R-Block file, splitting the hash-chain envelope
    /// (`previous_hash`, `rblock_hash`) from the payload.
    pub fn read_record(path: &Path) -> Result<RBlockRecord, IoError> {
        let bytes = fs::read(path)?;
        let value: Value = serde_json::from_slice(&bytes)?;
        let mut map: Map<String, Value> = match value {
            Value::Object(m) => m,
            _ => {
                return Err(IoError::Path(format!(
                    "{}: R-Block must be a JSON object",
                    path.display()
                )))
            }
        };
        let previous_hash = take_string_field(&mut map, "previous_hash", path)?;
        let rblock_hash = take_string_field(&mut map, "rblock_hash", path)?;
        Ok(RBlockRecord {
            path: path.to_path_buf(),
            previous_hash,
            rblock_hash,
            payload: Value::Object(map),
        })
    }
}

fn take_string_field(map: &mut Map<String, Value>, field: &str, path: &Path) -> Result<String, IoError> {
    match map.remove(field) {
        Some(Value::String(s)) => Ok(s),
        _ => Err(IoError::Path(format!(
            "{}: missing or non-string field `{field}`",
            path.display()
        ))),
    }
}

fn is_uuid_shaped_json(name: &str) -> bool {
    let Some(stem) = name.strip_suffix(".json") else {
        return false;
    };
    is_uuid_shaped(stem)
}

fn is_uuid_shaped(s: &str) -> bool {
    let groups: Vec<&str> = s.split('-').collect();
    let expected_lens = [8usize, 4, 4, 4, 12];
    if groups.len() != expected_lens.len() {
        return false;
    }
    groups
        .iter()
        .zip(expected_lens.iter())
        .all(|(g, &len)| g.len() == len && g.bytes().all(|b| b.is_ascii_hexdigit()))
}
