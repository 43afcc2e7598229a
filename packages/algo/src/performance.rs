//! Performance Aggregator
//!
//! Pure summaries over a snapshot of stored records.

use std::collections::BTreeMap;

use crate::types::{PerformanceReport, ScoreComparison, UserStatistics, VocabularyRecord};

const STRUGGLING_BELOW: f64 = 50.0;
const DEVELOPING_BELOW: f64 = 70.0;

pub const SUGGEST_BASICS: &str = "Practice more with level 1 vocabulary";
pub const SUGGEST_SPEED: &str = "Try to improve speed while maintaining accuracy";
pub const SUGGEST_CHALLENGE: &str = "Great job! Try more challenging levels";

/// First matching band wins.
pub fn suggestion_for(average_score: f64) -> &'static str {
    if average_score < STRUGGLING_BELOW {
        SUGGEST_BASICS
    } else if average_score < DEVELOPING_BELOW {
        SUGGEST_SPEED
    } else {
        SUGGEST_CHALLENGE
    }
}

/// Summarize one user's records. An empty slice yields the "no data"
/// sentinel rather than zero scores.
pub fn aggregate(records: &[VocabularyRecord]) -> PerformanceReport {
    let Some(average_score) = mean(records.iter().map(|r| r.score)) else {
        return PerformanceReport::no_data();
    };

    let highest_score = records
        .iter()
        .map(|r| r.score)
        .fold(f64::NEG_INFINITY, f64::max);
    let lowest_score = records.iter().map(|r| r.score).fold(f64::INFINITY, f64::min);

    PerformanceReport::Summary(UserStatistics {
        average_score,
        highest_score,
        lowest_score,
        total_activities: records.len(),
        suggestions: vec![suggestion_for(average_score).to_string()],
    })
}

/// Compare `user_id`'s average against every record in `all_records`.
pub fn compare(user_id: &str, all_records: &[VocabularyRecord]) -> ScoreComparison {
    let global_average = mean(all_records.iter().map(|r| r.score));

    let mut per_user: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for record in all_records {
        let entry = per_user.entry(record.user_id.as_str()).or_insert((0.0, 0));
        entry.0 += record.score;
        entry.1 += 1;
    }

    let user_average = per_user
        .get(user_id)
        .map(|(sum, count)| sum / *count as f64);

    let percentile = user_average.map(|own| {
        let at_or_below = per_user
            .values()
            .filter(|(sum, count)| sum / *count as f64 <= own)
            .count();
        round_one_decimal(at_or_below as f64 * 100.0 / per_user.len() as f64)
    });

    ScoreComparison {
        user_average,
        global_average,
        percentile,
    }
}

fn mean(scores: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = scores.fold((0.0, 0usize), |(sum, count), s| (sum + s, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
