// ---------------------------------------------------------------------------
// run_export – Binary export of a finished (or in-progress) scenario run
// ---------------------------------------------------------------------------

use std::path::Path;

use bevy::log::{debug, info};
use bitcode::{Decode, Encode};

use simulation::scenario::{RunState, ScenarioResult, ScenarioRunner};
use simulation::score::Scorecard;
use simulation::state_hash::grid_fingerprint;
use simulation::world_snapshot::GridSnapshot;

use crate::atomic_write::atomic_write;
use crate::file_header::{unwrap_header, wrap_with_header, FLAG_COMPRESSED};
use crate::save_error::SaveError;

/// Everything needed to inspect a run after the process exits.
#[derive(Debug, Clone, PartialEq, Encode, Decode)]
pub struct RunExport {
    /// Seed the exported cycle was initialized from.
    pub seed: u64,
    pub cycle: u64,
    pub state: RunState,
    pub turn: u32,
    pub control: Option<ScenarioResult>,
    pub intervention: Option<ScenarioResult>,
    pub snapshot: GridSnapshot,
    /// xxHash64 of the full grid, including vulnerability.
    pub fingerprint: u64,
}

impl RunExport {
    pub fn from_runner(runner: &ScenarioRunner) -> Self {
        Self {
            seed: runner.current_seed(),
            cycle: runner.cycle(),
            state: runner.state(),
            turn: runner.turn(),
            control: runner.control_result().cloned(),
            intervention: runner.intervention_result().cloned(),
            snapshot: runner.snapshot(),
            fingerprint: grid_fingerprint(runner.grid()),
        }
    }

    /// Comparison of the recorded runs, if both were exported.
    pub fn scorecard(&self) -> Option<Scorecard> {
        match (&self.control, &self.intervention) {
            (Some(control), Some(intervention)) => Some(Scorecard::compare(
                control.final_score,
                intervention.final_score,
            )),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Byte-level encode / decode
// ---------------------------------------------------------------------------

/// Encode, compress and wrap an export in its file header.
pub fn encode_export(export: &RunExport) -> Vec<u8> {
    let encoded = bitcode::encode(export);
    let compressed = lz4_flex::compress_prepend_size(&encoded);
    debug!(
        "Run export: {} bytes encoded, {} compressed",
        encoded.len(),
        compressed.len()
    );
    wrap_with_header(&compressed, FLAG_COMPRESSED, encoded.len() as u64)
}

/// Validate the header, decompress and decode an export.
pub fn decode_export(bytes: &[u8]) -> Result<RunExport, SaveError> {
    let (header, payload) = unwrap_header(bytes)?;

    let decoded = if header.is_compressed() {
        let raw = lz4_flex::decompress_size_prepended(payload)?;
        if raw.len() as u64 != header.uncompressed_size {
            return Err(SaveError::Compression(format!(
                "decompressed {} bytes, header says {}",
                raw.len(),
                header.uncompressed_size
            )));
        }
        bitcode::decode(&raw)?
    } else {
        bitcode::decode(payload)?
    };

    Ok(decoded)
}

// ---------------------------------------------------------------------------
// File I/O
// ---------------------------------------------------------------------------

/// Export the runner's current run to `path`. Returns the bytes written.
pub fn write_export(path: &Path, runner: &ScenarioRunner) -> Result<usize, SaveError> {
    let bytes = encode_export(&RunExport::from_runner(runner));
    atomic_write(path, &bytes)?;
    info!("Exported run to {} ({} bytes)", path.display(), bytes.len());
    Ok(bytes.len())
}

pub fn read_export(path: &Path) -> Result<RunExport, SaveError> {
    let bytes = std::fs::read(path)?;
    decode_export(&bytes)
}
