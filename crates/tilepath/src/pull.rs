//! String pulling: straightening a cell-by-cell path.
//!
//! Runs of waypoints that can see each other are replaced by the Bresenham
//! line between their ends, so staircase paths become straight diagonals.

use std::fmt;
use std::str::FromStr;

use tilepath_core::Point;

use crate::bresenham::{line, line_of_sight};
use crate::error::ConfigError;

/// Which string-pulling passes to run over a found path.
///
/// Only [`TwinPass`](Smoothing::TwinPass) reliably gives natural paths; the
/// single-pass variants can leave zig-zags in rare layouts and are kept for
/// experimentation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Smoothing {
    /// An overlapping pass followed by a sequential pass.
    #[default]
    TwinPass,
    /// A single pass that re-anchors one waypoint after each pulled segment.
    Overlapping,
    /// A single pass that re-anchors at the end of each pulled segment.
    Sequential,
}

impl Smoothing {
    /// Apply the selected passes to `path`.
    pub fn apply(self, path: Vec<Point>, walkable: &impl Fn(Point) -> bool) -> Vec<Point> {
        match self {
            Self::TwinPass => {
                let path = string_pull(path, walkable, true);
                string_pull(path, walkable, false)
            }
            Self::Overlapping => string_pull(path, walkable, true),
            Self::Sequential => string_pull(path, walkable, false),
        }
    }
}

impl fmt::Display for Smoothing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TwinPass => "twin-pass",
            Self::Overlapping => "overlapping",
            Self::Sequential => "sequential",
        })
    }
}

impl FromStr for Smoothing {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "twin" | "twinpass" | "twin-pass" | "twin_pass" | "dual" => Ok(Self::TwinPass),
            "skip" | "overlapping" => Ok(Self::Overlapping),
            "noskip" | "no-skip" | "no_skip" | "sequential" => Ok(Self::Sequential),
            _ => Err(ConfigError::UnknownSmoothing(s.to_string())),
        }
    }
}

/// Collapse runs of mutually visible waypoints in `path` into straight lines.
///
/// For each anchor, the furthest following waypoint with line of sight is
/// found and the run between them is replaced by the traced line. With
/// `skip`, the next anchor is the waypoint right after the current one, so
/// segments may overlap; without it, scanning resumes from the end of the
/// segment just pulled. The first and last waypoints are always kept.
pub fn string_pull(
    mut path: Vec<Point>,
    walkable: &impl Fn(Point) -> bool,
    skip: bool,
) -> Vec<Point> {
    let mut i = 0;
    while i < path.len() {
        let mut segment_end = None;
        let mut j = i + 1;
        loop {
            if j == path.len() {
                // Everything from the anchor on is visible: pull the tail.
                if segment_end.is_some() {
                    let last = path[path.len() - 1];
                    if let Some(segment) = line(path[i], last, walkable, true) {
                        log::trace!("pulled tail {} -> {last}", path[i]);
                        path.splice(i.., segment);
                    }
                }
                return path;
            }

            if line_of_sight(path[i], path[j], walkable) {
                segment_end = Some(j);
            } else if let Some(end) = segment_end {
                if let Some(segment) = line(path[i], path[end], walkable, true) {
                    log::trace!("pulled segment {} -> {}", path[i], path[end]);
                    let len = segment.len();
                    path.splice(i..=end, segment);
                    if !skip {
                        // Resume at the segment's end.
                        i += len.saturating_sub(2);
                    }
                }
                break;
            }
            j += 1;
        }
        i += 1;
    }
    path
}
