use std::f64::consts::SQRT_2;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Manhattan (L1) estimate for absolute deltas `dx`, `dy`.
#[inline]
pub fn manhattan(dx: f64, dy: f64) -> f64 {
    dx + dy
}

/// Euclidean (L2) estimate for absolute deltas `dx`, `dy`.
#[inline]
pub fn euclidean(dx: f64, dy: f64) -> f64 {
    (dx * dx + dy * dy).sqrt()
}

/// Octile estimate: straight moves cost 1, diagonal moves cost √2.
#[inline]
pub fn octile(dx: f64, dy: f64) -> f64 {
    (dx + dy) + (SQRT_2 - 2.0) * dx.min(dy)
}

/// Chebyshev (L∞) estimate for absolute deltas `dx`, `dy`.
#[inline]
pub fn chebyshev(dx: f64, dy: f64) -> f64 {
    dx.max(dy)
}

/// Distance estimate used to rank open nodes.
///
/// Manhattan is only admissible for 4-way movement; the others are admissible
/// for 8-way movement with the default costs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Heuristic {
    Manhattan,
    Euclidean,
    #[default]
    Octile,
    Chebyshev,
}

impl Heuristic {
    /// Every heuristic, in declaration order.
    pub const ALL: [Heuristic; 4] = [
        Heuristic::Manhattan,
        Heuristic::Euclidean,
        Heuristic::Octile,
        Heuristic::Chebyshev,
    ];

    /// Estimate the remaining cost for absolute deltas `dx`, `dy`.
    #[inline]
    pub fn estimate(self, dx: f64, dy: f64) -> f64 {
        match self {
            Self::Manhattan => manhattan(dx, dy),
            Self::Euclidean => euclidean(dx, dy),
            Self::Octile => octile(dx, dy),
            Self::Chebyshev => chebyshev(dx, dy),
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
            Self::Octile => "octile",
            Self::Chebyshev => "chebyshev",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = ConfigError;

    /// Parse a heuristic name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownHeuristic(s.to_string()))
    }
}
