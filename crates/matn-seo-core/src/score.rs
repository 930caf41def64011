//! Overall score aggregation.

use crate::checks::{CheckResult, CheckStatus};

/// Aggregate check results into a 0-100 score.
///
/// Only score-affecting checks count; the score is the rounded share of
/// them that succeeded. No results means no evidence, which scores 0.
pub fn calculate_score(checks: &[CheckResult]) -> u8 {
    let scored: Vec<&CheckResult> = checks.iter().filter(|c| c.score_affecting).collect();
    if scored.is_empty() {
        return 0;
    }
    let successes = scored
        .iter()
        .filter(|c| c.status == CheckStatus::Success)
        .count();
    let ratio = successes as f64 / scored.len() as f64;
    (ratio * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(status: CheckStatus, score_affecting: bool) -> CheckResult {
        let result = CheckResult::new(status, "t", "d");
        if score_affecting { result } else { result.advisory() }
    }

    #[test]
    fn empty_input_scores_zero() {
        assert_eq!(calculate_score(&[]), 0);
    }

    #[test]
    fn only_advisory_checks_scores_zero() {
        let checks = vec![check(CheckStatus::Success, false)];
        assert_eq!(calculate_score(&checks), 0);
    }

    #[test]
    fn all_passing_scores_one_hundred() {
        let checks = vec![
            check(CheckStatus::Success, true),
            check(CheckStatus::Success, true),
        ];
        assert_eq!(calculate_score(&checks), 100);
    }

    #[test]
    fn advisory_results_are_excluded() {
        let checks = vec![
            check(CheckStatus::Success, true),
            check(CheckStatus::Error, false),
            check(CheckStatus::Error, false),
        ];
        assert_eq!(calculate_score(&checks), 100);
    }

    #[test]
    fn mixed_results_round_to_nearest() {
        let checks = vec![
            check(CheckStatus::Success, true),
            check(CheckStatus::Success, true),
            check(CheckStatus::Warning, true),
        ];
        assert_eq!(calculate_score(&checks), 67);
    }
}
