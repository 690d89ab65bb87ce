//! Score aggregation and the control-vs-intervention scorecard.

use std::fmt;

use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::grid::GridState;

/// `round(100 * sum of feral intensity)`, accumulated in `f64`.
pub fn score(grid: &GridState) -> i64 {
    let total: f64 = grid.cells.iter().map(|c| c.feral_intensity as f64).sum();
    (total * 100.0).round() as i64
}

/// Percentage reduction of `intervention` relative to `control`, rounded.
///
/// A zero control score has no meaningful percentage and yields
/// [`SimError::DivisionUndefined`] instead of a NaN.
pub fn reduction_percent(control: i64, intervention: i64) -> Result<i64, SimError> {
    if control == 0 {
        return Err(SimError::DivisionUndefined);
    }
    let pct = (control - intervention) as f64 / control as f64 * 100.0;
    Ok(pct.round() as i64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The intervention run ended below the control run.
    Effective,
    Inconclusive,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Effective => write!(f, "EFFECTIVE"),
            Verdict::Inconclusive => write!(f, "INCONCLUSIVE"),
        }
    }
}

/// Side-by-side comparison of the two recorded scenario scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct Scorecard {
    pub control_score: i64,
    pub intervention_score: i64,
    /// `control - intervention`, in score points.
    pub reduction: i64,
    /// `None` when the control score is zero.
    pub reduction_percent: Option<i64>,
    pub verdict: Verdict,
}

impl Scorecard {
    pub fn compare(control_score: i64, intervention_score: i64) -> Self {
        let verdict = if intervention_score < control_score {
            Verdict::Effective
        } else {
            Verdict::Inconclusive
        };
        Self {
            control_score,
            intervention_score,
            reduction: control_score - intervention_score,
            reduction_percent: reduction_percent(control_score, intervention_score).ok(),
            verdict,
        }
    }

    /// Percentage as display text, `"undefined"` for a zero control.
    pub fn percent_label(&self) -> String {
        match self.reduction_percent {
            Some(pct) => format!("{pct}%"),
            None => "undefined".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center_seeded_grid() -> GridState {
        let mut grid = GridState::new(3, 3);
        grid.get_mut(1, 1).feral_intensity = 0.6;
        grid
    }

    #[test]
    fn test_score_of_center_seed() {
        assert_eq!(score(&center_seeded_grid()), 60);
    }

    #[test]
    fn test_score_after_one_step() {
        let next = crate::spread::SpreadEngine::default().step(&center_seeded_grid());
        assert_eq!(score(&next), 68);
    }

    #[test]
    fn test_score_empty_grid_is_zero() {
        assert_eq!(score(&GridState::new(0, 0)), 0);
        assert_eq!(score(&GridState::new(10, 10)), 0);
    }

    #[test]
    fn test_score_rounds_half_away_from_zero() {
        let mut grid = GridState::new(1, 1);
        grid.get_mut(0, 0).feral_intensity = 0.125;
        // 12.5 rounds to 13.
        assert_eq!(score(&grid), 13);
    }

    #[test]
    fn test_reduction_percent() {
        assert_eq!(reduction_percent(200, 150), Ok(25));
        assert_eq!(reduction_percent(300, 301), Ok(0));
        assert_eq!(reduction_percent(100, 150), Ok(-50));
        assert_eq!(reduction_percent(0, 10), Err(SimError::DivisionUndefined));
    }

    #[test]
    fn test_scorecard_effective() {
        let card = Scorecard::compare(1800, 1710);
        assert_eq!(card.reduction, 90);
        assert_eq!(card.reduction_percent, Some(5));
        assert_eq!(card.verdict, Verdict::Effective);
        assert_eq!(card.percent_label(), "5%");
    }

    #[test]
    fn test_scorecard_zero_control_is_undefined() {
        let card = Scorecard::compare(0, 0);
        assert_eq!(card.reduction_percent, None);
        assert_eq!(card.verdict, Verdict::Inconclusive);
        assert_eq!(card.percent_label(), "undefined");
    }

    #[test]
    fn test_verdict_labels() {
        assert_eq!(Verdict::Effective.to_string(), "EFFECTIVE");
        assert_eq!(Scorecard::compare(100, 100).verdict.to_string(), "INCONCLUSIVE");
    }
}
