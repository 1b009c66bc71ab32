// crates/epgs_cli/src/args.rs
//
// Deterministic, offline CLI argument parsing (spec §6 external interfaces).
// Three subcommands, each a thin wrapper over one `epgs_pipeline` entry
// point — no business logic lives here.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "epgs", about = "Execution Permission Gate Simulator — deterministic policy evaluation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Suppress the human-readable summary; always print the JSON result.
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one scenario through the pipeline and write its R-Block.
    Run {
        /// Path to a scenario JSON file (spec §6 scenario file format).
        scenario: PathBuf,

        /// Output root; the ledger is written to `<out>/<scenario_id>/ledger/`.
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },

    /// Walk a ledger directory and re-derive / validate its hash chain.
    Verify {
        /// Ledger directory to verify.
        #[arg(long = "ledger-dir")]
        ledger_dir: PathBuf,
    },

    /// Run every scenario in a directory twice and diff the terminal hashes
    /// (spec's determinism-proof driver). Exits 1 if any scenario's two
    /// runs disagree or either verification fails.
    Prove {
        /// Directory containing one or more scenario JSON files.
        scenario_dir: PathBuf,

        #[arg(long, default_value = "output_proof")]
        out: PathBuf,
    },
}
