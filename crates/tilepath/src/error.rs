//! Configuration errors.

use thiserror::Error;

/// A rejected configuration change.
///
/// Returned by the [`Pathfinder`](crate::Pathfinder) setters and by
/// [`SearchConfig::validate`](crate::SearchConfig::validate). A setter that
/// returns an error leaves the configuration untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Diagonals were disabled while string pulling is on.
    #[error("can't prohibit diagonal movement while string pulling is enabled")]
    DiagonalsRequiredBySmoothing,

    /// Diagonals were disabled while straight-line pathing is on.
    #[error("can't prohibit diagonal movement while straight-line pathing is enabled")]
    DiagonalsRequiredByStraightLine,

    /// String pulling was enabled while diagonals are off.
    #[error("string pulling can't be enabled while diagonal movement is prohibited")]
    SmoothingRequiresDiagonals,

    /// Straight-line pathing was enabled while diagonals are off.
    #[error("straight-line pathing can't be enabled while diagonal movement is prohibited")]
    StraightLineRequiresDiagonals,

    /// Maximum path cost below zero (or NaN).
    #[error("maximum path cost must not be negative, got {0}")]
    NegativeMaxCost(f64),

    /// Maximum move count below zero.
    #[error("maximum move count must not be negative, got {0}")]
    NegativeMaxMoves(i64),

    /// Move costs must be finite and strictly positive.
    #[error("invalid move costs: cardinal {cardinal}, diagonal {diagonal}")]
    InvalidMoveCost { cardinal: f64, diagonal: f64 },

    /// Heuristic name not in {manhattan, octile, euclidean, chebyshev}.
    #[error("unrecognised heuristic {0:?}")]
    UnknownHeuristic(String),

    /// Smoothing variant name not recognised.
    #[error("unrecognised smoothing type {0:?}")]
    UnknownSmoothing(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ConfigError::NegativeMaxCost(-2.5);
        assert_eq!(err.to_string(), "maximum path cost must not be negative, got -2.5");

        let err = ConfigError::UnknownHeuristic("taxicab".into());
        assert_eq!(err.to_string(), "unrecognised heuristic \"taxicab\"");

        let err = ConfigError::InvalidMoveCost {
            cardinal: 0.0,
            diagonal: 1.5,
        };
        assert!(err.to_string().contains("cardinal 0"));
    }
}
