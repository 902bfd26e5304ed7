//! Persistent search settings.

use std::f64::consts::SQRT_2;

use crate::error::ConfigError;
use crate::heuristic::Heuristic;
use crate::pull::Smoothing;

/// Cost of a single move.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveCosts {
    pub cardinal: f64,
    pub diagonal: f64,
}

impl MoveCosts {
    /// Default costs: 1 for a straight move, √2 for a diagonal one.
    pub const DEFAULT: Self = Self {
        cardinal: 1.0,
        diagonal: SQRT_2,
    };

    /// Cost of moving by `(dx, dy)`, where at most one step is taken per axis.
    #[inline]
    pub fn step(&self, dx: i32, dy: i32) -> f64 {
        if dx != 0 && dy != 0 {
            self.diagonal
        } else {
            self.cardinal
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let ok = |c: f64| c.is_finite() && c > 0.0;
        if ok(self.cardinal) && ok(self.diagonal) {
            Ok(())
        } else {
            Err(ConfigError::InvalidMoveCost {
                cardinal: self.cardinal,
                diagonal: self.diagonal,
            })
        }
    }
}

impl Default for MoveCosts {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Every setting that persists across path queries.
///
/// A cutoff of zero disables it. Build one directly (or deserialize it with
/// the `serde` feature) and hand it to
/// [`Pathfinder::with_config`](crate::Pathfinder::with_config), which
/// validates it first.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Allow 8-way movement.
    pub diagonals: bool,
    /// Try a direct line of sight before searching.
    pub straight_line: bool,
    /// Smooth found paths with string pulling.
    pub string_pulling: bool,
    pub smoothing: Smoothing,
    pub costs: MoveCosts,
    pub heuristic: Heuristic,
    /// Prune moves whose accumulated cost would exceed this.
    pub max_cost: f64,
    /// Prune moves from nodes that already made this many.
    pub max_moves: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            diagonals: true,
            straight_line: false,
            string_pulling: false,
            smoothing: Smoothing::default(),
            costs: MoveCosts::DEFAULT,
            heuristic: Heuristic::default(),
            max_cost: 0.0,
            max_moves: 0,
        }
    }
}

impl SearchConfig {
    /// Check the whole configuration for conflicting or out-of-range settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.diagonals && self.string_pulling {
            return Err(ConfigError::SmoothingRequiresDiagonals);
        }
        if !self.diagonals && self.straight_line {
            return Err(ConfigError::StraightLineRequiresDiagonals);
        }
        check_max_cost(self.max_cost)?;
        self.costs.validate()
    }

    /// The max-cost cutoff, if enabled.
    #[inline]
    pub fn cost_limit(&self) -> Option<f64> {
        (self.max_cost > 0.0).then_some(self.max_cost)
    }

    /// The max-moves cutoff, if enabled.
    #[inline]
    pub fn move_limit(&self) -> Option<u32> {
        (self.max_moves > 0).then_some(self.max_moves)
    }
}

pub(crate) fn check_max_cost(max_cost: f64) -> Result<(), ConfigError> {
    if max_cost >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NegativeMaxCost(max_cost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = SearchConfig::default();
        assert!(cfg.diagonals);
        assert!(!cfg.straight_line);
        assert!(!cfg.string_pulling);
        assert_eq!(cfg.smoothing, Smoothing::TwinPass);
        assert_eq!(cfg.heuristic, Heuristic::Octile);
        assert_eq!(cfg.costs, MoveCosts { cardinal: 1.0, diagonal: SQRT_2 });
        assert_eq!(cfg.cost_limit(), None);
        assert_eq!(cfg.move_limit(), None);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn step_costs() {
        let c = MoveCosts { cardinal: 2.0, diagonal: 3.0 };
        assert_eq!(c.step(1, 0), 2.0);
        assert_eq!(c.step(0, -1), 2.0);
        assert_eq!(c.step(-1, 1), 3.0);
    }

    #[test]
    fn validate_rejects_conflicts() {
        let cfg = SearchConfig {
            diagonals: false,
            string_pulling: true,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::SmoothingRequiresDiagonals));

        let cfg = SearchConfig {
            diagonals: false,
            straight_line: true,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::StraightLineRequiresDiagonals));
    }

    #[test]
    fn validate_rejects_bad_numbers() {
        let cfg = SearchConfig {
            max_cost: -1.0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NegativeMaxCost(-1.0)));

        let cfg = SearchConfig {
            max_cost: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::NegativeMaxCost(_))));

        let cfg = SearchConfig {
            costs: MoveCosts { cardinal: 1.0, diagonal: 0.0 },
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidMoveCost { .. })));
    }

    #[test]
    fn limits_enable_above_zero() {
        let cfg = SearchConfig {
            max_cost: 4.5,
            max_moves: 3,
            ..Default::default()
        };
        assert_eq!(cfg.cost_limit(), Some(4.5));
        assert_eq!(cfg.move_limit(), Some(3));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = SearchConfig {
            string_pulling: true,
            smoothing: Smoothing::Sequential,
            heuristic: Heuristic::Chebyshev,
            max_moves: 12,
            ..Default::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn partial_config_uses_defaults() {
        let cfg: SearchConfig =
            serde_json::from_str(r#"{ "heuristic": "euclidean", "smoothing": "twin-pass" }"#)
                .unwrap();
        assert_eq!(cfg.heuristic, Heuristic::Euclidean);
        assert_eq!(cfg.smoothing, Smoothing::TwinPass);
        assert!(cfg.diagonals);
        assert_eq!(cfg.costs, MoveCosts::DEFAULT);
    }
}
