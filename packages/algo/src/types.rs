//! Common Types and Constants
//!
//! Shared data structures produced and consumed by the advisor, the
//! aggregator and the quiz generator. Field names are the JSON names the
//! mobile client reads, so renames here are wire changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Questions per quiz when the caller does not ask for a size
pub const DEFAULT_QUIZ_SIZE: usize = 10;

/// Options shown for every multiple-choice question
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Lowest grade the advisor will ever recommend unless configured otherwise
pub const DEFAULT_GRADE_FLOOR: i64 = 1;

/// Message carried by the "no data" statistics sentinel
pub const NO_RECORDS_MESSAGE: &str = "No records found for this user";

// ==================== Record Types ====================

/// One completed learning activity.
///
/// Records are immutable once stored; the store owns them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyRecord {
    pub user_id: String,
    pub activity: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Percentage score, usually 0-100
    pub score: f64,
    /// Seconds spent on the activity
    pub time_taken: i64,
    /// Grade the activity was played at
    pub difficulty: i64,
    #[serde(default)]
    pub suggestions: Option<Vec<String>>,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

// ==================== Difficulty Types ====================

/// Inputs echoed back inside a [`DifficultyResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionInput {
    pub original_grade: i64,
    pub time_taken: i64,
}

/// Next-grade recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyResult {
    pub input_data: PredictionInput,
    /// Grade after the adjustment and the floor/ceiling clamp
    pub adjusted_grade: i64,
    /// One of -1, 0, 1 under the default reporting mode
    pub adjustment: i64,
    pub status: String,
}

impl DifficultyResult {
    pub fn original_grade(&self) -> i64 {
        self.input_data.original_grade
    }

    pub fn time_taken(&self) -> i64 {
        self.input_data.time_taken
    }
}

// ==================== Statistics Types ====================

/// Summary of a user's records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStatistics {
    pub average_score: f64,
    pub highest_score: f64,
    pub lowest_score: f64,
    pub total_activities: usize,
    /// Always exactly one entry
    pub suggestions: Vec<String>,
}

/// Statistics, or the explicit "no data" sentinel when the user has no
/// records. The sentinel never carries zero scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PerformanceReport {
    Summary(UserStatistics),
    NoData { message: String },
}

impl PerformanceReport {
    pub fn no_data() -> Self {
        PerformanceReport::NoData {
            message: NO_RECORDS_MESSAGE.to_string(),
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, PerformanceReport::NoData { .. })
    }

    pub fn statistics(&self) -> Option<&UserStatistics> {
        match self {
            PerformanceReport::Summary(stats) => Some(stats),
            PerformanceReport::NoData { .. } => None,
        }
    }
}

/// How a user's average compares with everyone else's
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComparison {
    pub user_average: Option<f64>,
    pub global_average: Option<f64>,
    /// Share of users (0-100) whose average is at or below this user's
    pub percentile: Option<f64>,
}

// ==================== Quiz Types ====================

/// Single multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// 1-based position in the quiz
    pub id: usize,
    pub word: String,
    pub emoji: String,
    /// Four distinct words, one of them `word`, in random order
    pub options: Vec<String>,
}

/// A generated quiz for one word-bank level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSet {
    pub level: String,
    pub theme: String,
    pub emoji: String,
    pub questions: Vec<QuizQuestion>,
}

/// Level listing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSummary {
    pub theme: String,
    pub emoji: String,
    pub word_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_type_field_name() {
        let json = r#"{
            "user_id": "u1",
            "activity": "matching",
            "type": "quiz",
            "score": 80.0,
            "time_taken": 45,
            "difficulty": 2,
            "timestamp": "2024-03-01T10:00:00Z"
        }"#;
        let record: VocabularyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, "quiz");
        assert!(record.suggestions.is_none());

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "quiz");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_record_timestamp_defaults_to_now() {
        let before = Utc::now();
        let json = r#"{
            "user_id": "u1",
            "activity": "a",
            "type": "t",
            "score": 1,
            "time_taken": 1,
            "difficulty": 1
        }"#;
        let record: VocabularyRecord = serde_json::from_str(json).unwrap();
        assert!(record.timestamp >= before);
    }

    #[test]
    fn test_record_missing_score_rejected() {
        let json = r#"{"user_id":"u1","activity":"a","type":"t","time_taken":1,"difficulty":1}"#;
        let err = serde_json::from_str::<VocabularyRecord>(json).unwrap_err();
        assert!(err.to_string().contains("score"));
    }

    #[test]
    fn test_difficulty_result_wire_shape() {
        let result = DifficultyResult {
            input_data: PredictionInput {
                original_grade: 3,
                time_taken: 20,
            },
            adjusted_grade: 4,
            adjustment: 1,
            status: "increase".to_string(),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["input_data"]["original_grade"], 3);
        assert_eq!(value["input_data"]["time_taken"], 20);
        assert_eq!(value["adjusted_grade"], 4);

        let back: DifficultyResult = serde_json::from_value(value).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_report_sentinel_serialization() {
        let value = serde_json::to_value(PerformanceReport::no_data()).unwrap();
        assert_eq!(value["message"], NO_RECORDS_MESSAGE);
        assert!(value.get("average_score").is_none());

        let back: PerformanceReport = serde_json::from_value(value).unwrap();
        assert!(back.is_no_data());
    }

    #[test]
    fn test_report_summary_round_trip() {
        let report = PerformanceReport::Summary(UserStatistics {
            average_score: 72.5,
            highest_score: 90.0,
            lowest_score: 55.0,
            total_activities: 2,
            suggestions: vec!["Great job! Try more challenging levels".to_string()],
        });
        let json = serde_json::to_string(&report).unwrap();
        let back: PerformanceReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_quiz_set_round_trip() {
        let quiz = QuizSet {
            level: "level1".to_string(),
            theme: "Everyday Objects".to_string(),
            emoji: "🏠".to_string(),
            questions: vec![QuizQuestion {
                id: 1,
                word: "cat".to_string(),
                emoji: "🐱".to_string(),
                options: vec![
                    "dog".to_string(),
                    "cat".to_string(),
                    "pen".to_string(),
                    "car".to_string(),
                ],
            }],
        };
        let json = serde_json::to_string(&quiz).unwrap();
        let back: QuizSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, quiz);
    }
}
