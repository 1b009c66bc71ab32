//! Scenario loading: read a scenario JSON file from disk, deserialize it into
//! `epgs_core::Scenario`, and run domain validation (spec §2 input-validation
//! boundary — schema/shape violations are reported to the caller and the run
//! never begins; no ledger side effect).
//!
//! Grounded on `vm_io::loader`'s read-validate-normalize shape, simplified:
//! EPGS scenarios are a single flat JSON document (no manifest indirection).

#![forbid(unsafe_code)]

use std::fs::File;
use std::io::Read;
use std::path::Path;

use epgs_core::scenario::Scenario;

use crate::IoError;

/// Read a scenario JSON document from `path`, deserialize and validate it.
///
/// Validation failures (malformed JSON, empty `requests`, a request whose
/// `sector_label` disagrees with the scenario's) surface as `IoError` before
/// any hashing or ledger I/O occurs.
pub fn load_scenario(path: &Path) -> Result<Scenario, IoError> {
    let bytes = read_file_with_limit(path, MAX_SCENARIO_BYTES)?;
    let scenario: Scenario = serde_json::from_slice(&bytes).map_err(|e| IoError::Json {
        pointer: "/".into(),
        msg: format!("{path}: {e}", path = path.display()),
    })?;
    scenario.validate()?;
    Ok(scenario)
}

/// Deserialize a scenario from an in-memory buffer (used by the HTTP adapter,
/// which receives the scenario body directly rather than a file path).
pub fn load_scenario_bytes(bytes: &[u8]) -> Result<Scenario, IoError> {
    let scenario: Scenario = serde_json::from_slice(bytes)?;
    scenario.validate()?;
    Ok(scenario)
}

/// Defensive upper bound on scenario document size; scenarios are small,
/// hand-authored fixtures, not bulk data feeds.
const MAX_SCENARIO_BYTES: u64 = 16 * 1024 * 1024;

fn read_file_with_limit(path: &Path, limit: u64) -> Result<Vec<u8>, IoError> {
    let mut f = File::open(path).map_err(|e| IoError::Path(format!("{}: {e}", path.display())))?;
    let len = f
        .metadata()
        .map_err(|e| IoError::Path(format!("{}: {e}", path.display())))?
        .len();
    if len > limit {
        return Err(IoError::Path(format!(
            "{}: {len} bytes exceeds limit of {limit} bytes",
            path.display()
        )));
    }
    let mut buf = Vec::with_capacity(len as usize);
    f.read_to_end(&mut buf)
        .map_err(|e| IoError::Path(format!("{}: {e}", path.display())))?;
    Ok(buf)
}
