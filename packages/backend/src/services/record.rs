use nvld_algo::{aggregate, compare, PerformanceReport, ScoreComparison, VocabularyRecord};
use serde::Serialize;

use crate::db::RecordStore;
use crate::services::ValidationError;

#[derive(Debug, Clone, Serialize)]
pub struct UserReport {
    pub records: Vec<VocabularyRecord>,
    pub statistics: PerformanceReport,
    pub comparison: ScoreComparison,
}

/// Parses a record body. Missing or mistyped fields are rejected instead of
/// being defaulted.
pub fn parse_record(body: &[u8]) -> Result<VocabularyRecord, ValidationError> {
    let record: VocabularyRecord = serde_json::from_slice(body)
        .map_err(|err| ValidationError::new(format!("Invalid record: {err}")))?;

    if record.user_id.trim().is_empty() {
        return Err(ValidationError::new("user_id must not be empty"));
    }
    if !record.score.is_finite() {
        return Err(ValidationError::new("score must be a finite number"));
    }
    Ok(record)
}

pub fn create_record(store: &dyn RecordStore, record: VocabularyRecord) -> usize {
    let user_id = record.user_id.clone();
    let id = store.append(record);
    tracing::debug!(record_id = id, %user_id, "vocabulary record stored");
    id
}

/// Records, statistics and comparison computed from one snapshot of the store.
pub fn user_report(store: &dyn RecordStore, user_id: &str) -> UserReport {
    let all = store.list_all();
    let records: Vec<VocabularyRecord> = all
        .iter()
        .filter(|record| record.user_id == user_id)
        .cloned()
        .collect();

    UserReport {
        statistics: aggregate(&records),
        comparison: compare(user_id, &all),
        records,
    }
}
