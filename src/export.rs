//! Run history export
//!
//! Serializes the sampled score/WPM series so an external tool can
//! plot a finished run. Only the JSON encoding lives here; the game
//! itself never touches the filesystem.

use crate::sim::RunHistory;

/// Encode the sampled run history as a JSON object with `score` and
/// `wpm` arrays.
pub fn history_json(history: &RunHistory) -> serde_json::Result<String> {
    serde_json::to_string(history)
}

// TODO: Implement the on-disk sink once the save directory layout is settled
// pub fn save_history(history: &RunHistory, path: &Path) -> std::io::Result<()>
