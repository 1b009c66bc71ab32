//! crates/epgs_pipeline/src/verifier.rs
//! C10: the chain verifier. An independent reader over a ledger directory
//! that re-derives each block's hash and validates linkage (spec §4.9).
//!
//! Grounded on `epgs.orchestrator.replay.verify_chain` — described in spec
//! §9 as "the original's one clean, non-divergent module" — restructured
//! into a typed outcome instead of a loosely-typed dict.
//!
//! Verifier failures are structural, never raised as errors (spec §7):
//! this function returns `VerifyOutcome`, not a `Result`.

use std::path::Path;

use epgs_core::hashes::GENESIS_HASH;
use epgs_io::canonical_json::to_canonical_json_bytes;
use epgs_io::hasher::chained_hash;
use epgs_io::ledger::LedgerReader;
use serde::Serialize;

/// `{ok, reason?, final_hash?, count?}` per spec §6. Constructed only
/// through [`VerifyOutcome::ok`] / [`VerifyOutcome::fail`] so the two
/// shapes can never mix fields.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VerifyOutcome {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl VerifyOutcome {
    fn ok(final_hash: String, count: usize) -> Self {
        Self { ok: true, reason: None, final_hash: Some(final_hash), count: Some(count) }
    }

    fn fail(reason: impl Into<String>) -> Self {
        Self { ok: false, reason: Some(reason.into()), final_hash: None, count: None }
    }
}

/// Walk `ledger_dir` in lexical filename order, re-deriving each block's
/// hash and checking the chain links. Non-UUID-shaped `.json` files are
/// ignored (spec §4.9 step 1).
pub fn verify_chain(ledger_dir: &Path) -> VerifyOutcome {
    let files = match LedgerReader::enumerate(ledger_dir) {
        Ok(files) => files,
        Err(_) => return VerifyOutcome::fail("No R-Blocks found"),
    };

    if files.is_empty() {
        return VerifyOutcome::fail("No R-Blocks found");
    }

    let mut prev = GENESIS_HASH.to_string();

    for path in &files {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("<unknown>").to_string();

        let record = match LedgerReader::read_record(path) {
            Ok(record) => record,
            Err(e) => return VerifyOutcome::fail(format!("invalid R-Block in {name}: {e}")),
        };

        if record.previous_hash != prev {
            return VerifyOutcome::fail(format!("previous_hash mismatch in {name}"));
        }

        let canonical_payload = to_canonical_json_bytes(&record.payload);
        let recomputed = chained_hash(&canonical_payload, &prev);
        if recomputed != record.rblock_hash {
            return VerifyOutcome::fail(format!("hash mismatch in {name}"));
        }

        prev = record.rblock_hash;
    }

    VerifyOutcome::ok(prev, files.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use epgs_io::ledger::write_rblock;
    use serde_json::json;
    use std::fs;

    #[test]
    fn empty_ledger_fails_with_no_rblocks_found() {
        let dir = tempfile::tempdir().unwrap();
        let out = verify_chain(dir.path());
        assert!(!out.ok);
        assert_eq!(out.reason.as_deref(), Some("No R-Blocks found"));
    }

    #[test]
    fn missing_directory_fails_with_no_rblocks_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let out = verify_chain(&missing);
        assert!(!out.ok);
        assert_eq!(out.reason.as_deref(), Some("No R-Blocks found"));
    }

    #[test]
    fn a_freshly_written_single_block_chain_verifies_ok() {
        let dir = tempfile::tempdir().unwrap();
        let id = "12345678-1234-5678-1234-567812345678";
        write_rblock(dir.path(), id, &json!({"scenario_id": "S-1"}), GENESIS_HASH).unwrap();

        let out = verify_chain(dir.path());
        assert!(out.ok);
        assert_eq!(out.count, Some(1));
        assert!(out.final_hash.is_some());
    }

    #[test]
    fn tampering_with_a_nested_integer_fails_with_hash_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let id = "12345678-1234-5678-1234-567812345678";
        write_rblock(
            dir.path(),
            id,
            &json!({"scenario_id": "S-1", "neuropause": {"tau_ms_observed": 400}}),
            GENESIS_HASH,
        )
        .unwrap();

        let path = dir.path().join(format!("{id}.json"));
        let mut raw: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        raw["neuropause"]["tau_ms_observed"] = json!(401);
        fs::write(&path, serde_json::to_vec(&raw).unwrap()).unwrap();

        let out = verify_chain(dir.path());
        assert!(!out.ok);
        assert!(out.reason.unwrap().contains("hash mismatch"));
    }

    #[test]
    fn tampering_with_previous_hash_fails_with_previous_hash_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let id = "12345678-1234-5678-1234-567812345678";
        write_rblock(dir.path(), id, &json!({"scenario_id": "S-1"}), GENESIS_HASH).unwrap();

        let path = dir.path().join(format!("{id}.json"));
        let mut raw: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        raw["previous_hash"] = json!("f".repeat(64));
        fs::write(&path, serde_json::to_vec(&raw).unwrap()).unwrap();

        let out = verify_chain(dir.path());
        assert!(!out.ok);
        assert!(out.reason.unwrap().contains("previous_hash mismatch"));
    }

    #[test]
    fn non_uuid_json_files_are_ignored_by_the_verifier() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("README.json"), b"{\"not\":\"a block\"}").unwrap();
        let id = "12345678-1234-5678-1234-567812345678";
        write_rblock(dir.path(), id, &json!({"scenario_id": "S-1"}), GENESIS_HASH).unwrap();

        let out = verify_chain(dir.path());
        assert!(out.ok);
        assert_eq!(out.count, Some(1));
    }
}
