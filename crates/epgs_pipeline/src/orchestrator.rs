//! crates/epgs_pipeline/src/orchestrator.rs
//! C9: the orchestrator — `run_scenario`, the single public entry point
//! that sequences C2 (scenario load) through C8 (ledger write) and produces
//! the run result (spec §4.8).
//!
//! Grounded in structure on `vm_pipeline`'s build-then-write split (pure
//! value construction first, filesystem write last), but the concrete
//! pipeline steps below are the authoritative spec §4 pipeline — NOT any of
//! the divergent `orchestrator/run.py` variants in `original_source/`,
//! which spec §9 explicitly rejects.

use std::path::{Path, PathBuf};

use epgs_core::enums::Permission;
use epgs_core::hashes::GENESIS_HASH;
use epgs_core::profile::Profile;
use epgs_core::rblock::RBlockPayload;
use epgs_engine::{aegixa, execution_sink, neuropause, nrrp, ube};
use epgs_io::ledger::write_rblock;
use epgs_io::loader::load_scenario;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::errors::PipelineError;
use crate::ids;

/// The in-memory and serialized run result (spec §4.8 step 6 / §6).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RunResult {
    pub run_id: String,
    pub scenario_id: String,
    pub sector_label: epgs_core::enums::SectorLabel,
    pub permission: Permission,
    pub stop_issued: bool,
    pub terminal_stop: bool,
    pub final_state: epgs_core::enums::FinalState,
    pub rblock_hash: String,
    pub ledger_dir: PathBuf,
}

/// Run one scenario end to end: load + validate, evaluate the pipeline,
/// write exactly one R-Block, and return the result record.
///
/// `output_root/<scenario_id>/ledger/` is the ledger directory for this
/// run. A single-block chain is produced, with `previous_hash = GENESIS`
/// (spec §9 Open Question: one block per run is the authoritative choice).
#[instrument(skip(output_root), fields(scenario_path = %scenario_path.display()))]
pub fn run_scenario(scenario_path: &Path, output_root: &Path) -> Result<RunResult, PipelineError> {
    let scenario = load_scenario(scenario_path)?;
    run_loaded_scenario(&scenario, output_root, &Profile::default())
}

/// Same as [`run_scenario`], but over an already-loaded, already-validated
/// scenario and an explicit profile. Used by the determinism driver (which
/// loads once and runs twice) and by tests.
pub fn run_loaded_scenario(
    scenario: &epgs_core::scenario::Scenario,
    output_root: &Path,
    profile: &Profile,
) -> Result<RunResult, PipelineError> {
    let run_id = ids::run_id(&scenario.scenario_id);
    let rblock_id = ids::rblock_id(&scenario.scenario_id);
    debug!(run_id = %run_id, rblock_id = %rblock_id, "derived deterministic identifiers");

    let temporal = scenario.temporal_sorted();
    let ube_vectors = scenario.ube_vectors_sorted();

    let neuropause_out = neuropause::evaluate_temporal(&temporal);

    let ube_initial = match ube_vectors.first() {
        Some(first) => ube::classify(first, profile),
        // Fail-closed: a scenario with no step vectors can never be
        // affirmed SAFE/CAUTION (spec §7 fail-closed posture).
        None => epgs_core::outputs::UBEOut {
            phi: 0.0,
            degradation_rate: 0.0,
            risk_load: 0.0,
            stability_class: epgs_core::enums::StabilityClass::Unsafe,
            invariant_violation: true,
        },
    };

    let pre_aegixa = aegixa::precheck(&neuropause_out, &ube_initial);

    let aegixa_out = if pre_aegixa.permission == Permission::Block {
        pre_aegixa.clone()
    } else {
        let mut stopped = None;
        for vector in &ube_vectors {
            let step_ube = ube::classify(vector, profile);
            if let Some(stop) = aegixa::mid_execution_monitor(vector.step_index, &step_ube) {
                stopped = Some(stop);
                break;
            }
        }
        stopped.unwrap_or(pre_aegixa.clone())
    };

    let nrrp_out = nrrp::decide(pre_aegixa.permission, aegixa_out.stop_issued, 0, profile);

    let effect_payload = execution_sink::EffectPayload {
        sector_label: scenario.sector_label,
        action_name: "IRREVERSIBLE".to_string(),
        execution_id: scenario.requests[0].execution_id.clone(),
    };
    let sink_out = execution_sink::sink(pre_aegixa.permission, aegixa_out.stop_issued, nrrp_out.terminal_stop, &effect_payload);

    let payload = RBlockPayload {
        rblock_id: rblock_id.clone(),
        run_id: run_id.clone(),
        scenario_id: scenario.scenario_id.clone(),
        step_count: ube_vectors.len() as u32,
        neuropause: neuropause_out,
        ube_initial,
        aegixa: aegixa_out.clone(),
        nrrp: nrrp_out.clone(),
        execution: sink_out.clone(),
    };

    let ledger_dir = output_root.join(&scenario.scenario_id).join("ledger");
    let rblock_hash = write_rblock(&ledger_dir, &rblock_id, &payload, GENESIS_HASH)?;
    info!(scenario_id = %scenario.scenario_id, permission = %pre_aegixa.permission, final_state = %sink_out.final_state, "scenario run complete");

    Ok(RunResult {
        run_id,
        scenario_id: scenario.scenario_id.clone(),
        sector_label: scenario.sector_label,
        permission: pre_aegixa.permission,
        stop_issued: aegixa_out.stop_issued,
        terminal_stop: nrrp_out.terminal_stop,
        final_state: sink_out.final_state,
        rblock_hash,
        ledger_dir,
    })
}
