//! Difficulty Advisor
//!
//! Threshold rule that turns "how long did the last activity take" into a
//! next-grade recommendation. Two deployments disagree on the thresholds and
//! on whether grades are capped, so both live here as named profiles:
//!
//! - [`DifficultyPolicy::activity`] - whole-activity timing, 500s / 1000s,
//!   grades capped at 5, reports the applied delta
//! - [`DifficultyPolicy::quick_check`] - per-question timing, 30s / 90s,
//!   no cap, reports the intended delta

use serde::{Deserialize, Serialize};

use crate::error::PolicyError;
use crate::types::{DifficultyResult, PredictionInput, DEFAULT_GRADE_FLOOR};

const ACTIVITY_FAST_MAX: i64 = 500;
const ACTIVITY_SLOW_MIN: i64 = 1000;
const ACTIVITY_CEILING: i64 = 5;

const QUICK_CHECK_FAST_MAX: i64 = 30;
const QUICK_CHECK_SLOW_MIN: i64 = 90;

/// Label written into [`DifficultyResult::status`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusStyle {
    /// "increase" / "decrease" / "same"
    Directional,
    /// Always "success"
    Constant,
}

/// Which delta is reported in [`DifficultyResult::adjustment`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentReport {
    /// The rule's delta before clamping; grade 1 answering slowly reports -1
    /// while staying at 1.
    Intended,
    /// `adjusted_grade - original_grade`
    Applied,
}

/// Outcome of the threshold rule before clamping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    Fast,
    Steady,
    Slow,
}

impl Pace {
    pub fn delta(self) -> i64 {
        match self {
            Pace::Fast => 1,
            Pace::Steady => 0,
            Pace::Slow => -1,
        }
    }

    fn status(self) -> &'static str {
        match self {
            Pace::Fast => "increase",
            Pace::Steady => "same",
            Pace::Slow => "decrease",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyPolicy {
    /// Strictly below this many seconds counts as fast
    pub fast_max: i64,
    /// Strictly above this many seconds counts as slow
    pub slow_min: i64,
    pub floor: i64,
    pub ceiling: Option<i64>,
    pub status_style: StatusStyle,
    pub adjustment_report: AdjustmentReport,
}

impl DifficultyPolicy {
    pub fn activity() -> Self {
        Self {
            fast_max: ACTIVITY_FAST_MAX,
            slow_min: ACTIVITY_SLOW_MIN,
            floor: DEFAULT_GRADE_FLOOR,
            ceiling: Some(ACTIVITY_CEILING),
            status_style: StatusStyle::Directional,
            adjustment_report: AdjustmentReport::Applied,
        }
    }

    pub fn quick_check() -> Self {
        Self {
            fast_max: QUICK_CHECK_FAST_MAX,
            slow_min: QUICK_CHECK_SLOW_MIN,
            floor: DEFAULT_GRADE_FLOOR,
            ceiling: None,
            status_style: StatusStyle::Directional,
            adjustment_report: AdjustmentReport::Intended,
        }
    }

    pub fn with_status_style(mut self, style: StatusStyle) -> Self {
        self.status_style = style;
        self
    }

    pub fn with_adjustment_report(mut self, report: AdjustmentReport) -> Self {
        self.adjustment_report = report;
        self
    }

    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.fast_max > self.slow_min {
            return Err(PolicyError::InvertedThresholds {
                fast_max: self.fast_max,
                slow_min: self.slow_min,
            });
        }
        if let Some(ceiling) = self.ceiling {
            if ceiling < self.floor {
                return Err(PolicyError::CeilingBelowFloor {
                    floor: self.floor,
                    ceiling,
                });
            }
        }
        Ok(())
    }

    pub fn classify(&self, time_taken: i64) -> Pace {
        if time_taken < self.fast_max {
            Pace::Fast
        } else if time_taken > self.slow_min {
            Pace::Slow
        } else {
            Pace::Steady
        }
    }

    fn clamp(&self, grade: i64) -> i64 {
        let raised = grade.max(self.floor);
        match self.ceiling {
            Some(ceiling) => raised.min(ceiling),
            None => raised,
        }
    }
}

impl Default for DifficultyPolicy {
    fn default() -> Self {
        Self::quick_check()
    }
}

/// Stateless advisor bound to one policy.
#[derive(Debug, Clone, Default)]
pub struct DifficultyAdvisor {
    policy: DifficultyPolicy,
}

impl DifficultyAdvisor {
    pub fn new(policy: DifficultyPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &DifficultyPolicy {
        &self.policy
    }

    /// Negative or out-of-range inputs are accepted as-is; the rule is plain
    /// arithmetic.
    pub fn recommend(&self, grade: i64, time_taken: i64) -> DifficultyResult {
        let pace = self.policy.classify(time_taken);
        let adjusted_grade = self.policy.clamp(grade.saturating_add(pace.delta()));

        let adjustment = match self.policy.adjustment_report {
            AdjustmentReport::Intended => pace.delta(),
            AdjustmentReport::Applied => adjusted_grade.saturating_sub(grade),
        };

        let status = match self.policy.status_style {
            StatusStyle::Directional => pace.status(),
            StatusStyle::Constant => "success",
        };

        DifficultyResult {
            input_data: PredictionInput {
                original_grade: grade,
                time_taken,
            },
            adjusted_grade,
            adjustment,
            status: status.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_check_fast_increases() {
        let advisor = DifficultyAdvisor::new(DifficultyPolicy::quick_check());
        let result = advisor.recommend(3, 20);
        assert_eq!(result.adjustment, 1);
        assert_eq!(result.adjusted_grade, 4);
        assert_eq!(result.status, "increase");
        assert_eq!(result.original_grade(), 3);
        assert_eq!(result.time_taken(), 20);
    }

    #[test]
    fn test_quick_check_slow_decreases() {
        let advisor = DifficultyAdvisor::new(DifficultyPolicy::quick_check());
        let result = advisor.recommend(3, 95);
        assert_eq!(result.adjustment, -1);
        assert_eq!(result.adjusted_grade, 2);
        assert_eq!(result.status, "decrease");
    }

    #[test]
    fn test_floor_keeps_intended_adjustment() {
        let advisor = DifficultyAdvisor::new(DifficultyPolicy::quick_check());
        let result = advisor.recommend(1, 95);
        assert_eq!(result.adjusted_grade, 1);
        assert_eq!(result.adjustment, -1);
    }

    #[test]
    fn test_floor_with_applied_report() {
        let policy =
            DifficultyPolicy::quick_check().with_adjustment_report(AdjustmentReport::Applied);
        let result = DifficultyAdvisor::new(policy).recommend(1, 95);
        assert_eq!(result.adjusted_grade, 1);
        assert_eq!(result.adjustment, 0);
    }

    #[test]
    fn test_threshold_boundaries_are_steady() {
        let advisor = DifficultyAdvisor::new(DifficultyPolicy::quick_check());
        assert_eq!(advisor.recommend(3, 30).adjustment, 0);
        assert_eq!(advisor.recommend(3, 90).adjustment, 0);
        assert_eq!(advisor.recommend(3, 60).status, "same");
    }

    #[test]
    fn test_quick_check_has_no_ceiling() {
        let advisor = DifficultyAdvisor::new(DifficultyPolicy::quick_check());
        assert_eq!(advisor.recommend(12, 5).adjusted_grade, 13);
    }

    #[test]
    fn test_activity_ceiling() {
        let advisor = DifficultyAdvisor::new(DifficultyPolicy::activity());
        let result = advisor.recommend(5, 100);
        assert_eq!(result.adjusted_grade, 5);
        assert_eq!(result.adjustment, 0);
        assert_eq!(result.status, "increase");

        let result = advisor.recommend(4, 100);
        assert_eq!(result.adjusted_grade, 5);
        assert_eq!(result.adjustment, 1);
    }

    #[test]
    fn test_activity_reports_applied_delta() {
        let advisor = DifficultyAdvisor::new(DifficultyPolicy::activity());

        let at_floor = advisor.recommend(1, 2000);
        assert_eq!(at_floor.adjusted_grade, 1);
        assert_eq!(at_floor.adjustment, 0);
        assert_eq!(at_floor.status, "decrease");

        let above_ceiling = advisor.recommend(8, 100);
        assert_eq!(above_ceiling.adjusted_grade, 5);
        assert_eq!(above_ceiling.adjustment, -3);
    }

    #[test]
    fn test_activity_thresholds() {
        let advisor = DifficultyAdvisor::new(DifficultyPolicy::activity());
        assert_eq!(advisor.recommend(3, 750).status, "same");
        assert_eq!(advisor.recommend(3, 1001).adjusted_grade, 2);
        assert_eq!(advisor.recommend(3, 499).adjusted_grade, 4);
    }

    #[test]
    fn test_constant_status_style() {
        let policy = DifficultyPolicy::quick_check().with_status_style(StatusStyle::Constant);
        let advisor = DifficultyAdvisor::new(policy);
        for time_taken in [0, 60, 200] {
            assert_eq!(advisor.recommend(2, time_taken).status, "success");
        }
    }

    #[test]
    fn test_negative_inputs_accepted() {
        let advisor = DifficultyAdvisor::new(DifficultyPolicy::quick_check());
        let result = advisor.recommend(-4, -10);
        assert_eq!(result.adjustment, 1);
        assert_eq!(result.adjusted_grade, 1);
    }

    #[test]
    fn test_policy_validation() {
        assert!(DifficultyPolicy::activity().validate().is_ok());
        assert!(DifficultyPolicy::quick_check().validate().is_ok());

        let mut inverted = DifficultyPolicy::quick_check();
        inverted.fast_max = 100;
        assert_eq!(
            inverted.validate(),
            Err(PolicyError::InvertedThresholds {
                fast_max: 100,
                slow_min: 90
            })
        );

        let mut capped = DifficultyPolicy::activity();
        capped.ceiling = Some(0);
        assert!(matches!(
            capped.validate(),
            Err(PolicyError::CeilingBelowFloor { .. })
        ));
    }
}
