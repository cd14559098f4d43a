use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::analysis::AnalysisEntry;
use crate::storage::{read_json, write_json, KeyValueStore, StorageError, HISTORY_KEY};

/// Returns the stored history, most recent first.
///
/// A missing or corrupt blob reads as empty history. Individual elements that
/// fail to decode are skipped rather than discarding the whole list.
pub fn get_history(store: &dyn KeyValueStore) -> Vec<AnalysisEntry> {
    let Some(Value::Array(raw_entries)) = read_json::<Value>(store, HISTORY_KEY) else {
        return Vec::new();
    };

    let total = raw_entries.len();
    let entries: Vec<AnalysisEntry> = raw_entries
        .into_iter()
        .filter_map(|raw| serde_json::from_value(raw).ok())
        .collect();

    if entries.len() < total {
        warn!("Skipped {} unreadable history entries", total - entries.len());
    }
    entries
}

fn write_history(store: &dyn KeyValueStore, history: &[AnalysisEntry]) -> Result<(), StorageError> {
    write_json(store, HISTORY_KEY, history)
}

/// Prepends `entry` to the history.
pub fn save_to_history(store: &dyn KeyValueStore, entry: &AnalysisEntry) -> Result<(), StorageError> {
    let mut history = get_history(store);
    history.insert(0, entry.clone());
    write_history(store, &history)?;
    info!("Saved analysis {} ({} in history)", entry.id, history.len());
    Ok(())
}

pub fn get_entry(store: &dyn KeyValueStore, id: Uuid) -> Option<AnalysisEntry> {
    get_history(store).into_iter().find(|e| e.id == id)
}

pub fn get_latest_entry(store: &dyn KeyValueStore) -> Option<AnalysisEntry> {
    get_history(store).into_iter().next()
}

/// Replaces the stored entry with the same id. Returns `false` (and writes
/// nothing) when no such entry exists.
pub fn update_entry(store: &dyn KeyValueStore, updated: &AnalysisEntry) -> Result<bool, StorageError> {
    let mut history = get_history(store);
    let Some(slot) = history.iter_mut().find(|e| e.id == updated.id) else {
        return Ok(false);
    };
    *slot = updated.clone();
    write_history(store, &history)?;
    Ok(true)
}
