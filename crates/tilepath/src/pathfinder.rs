use std::collections::HashSet;

use tilepath_core::Point;

use crate::bresenham::{line, line_of_sight};
use crate::config::{MoveCosts, SearchConfig, check_max_cost};
use crate::error::ConfigError;
use crate::heap::ScoredHeap;
use crate::heuristic::Heuristic;
use crate::node::Node;
use crate::pull::Smoothing;

/// A* path search over a grid described by a walkability oracle.
///
/// A `Pathfinder` only holds configuration; every query builds and drops its
/// own open and closed sets. Setters validate the requested change against
/// the current configuration and leave it untouched on error.
#[derive(Clone, Debug, Default)]
pub struct Pathfinder {
    config: SearchConfig,
}

impl Pathfinder {
    /// A pathfinder with the default configuration: 8-way movement, octile
    /// heuristic, no smoothing and no cutoffs.
    pub fn new() -> Self {
        Self::default()
    }

    /// A pathfinder using `config`, if it is consistent.
    pub fn with_config(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The current configuration.
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Compute a path from `from` to `to`.
    ///
    /// The result runs from the cell after `from` up to and including `to`.
    /// Returns `None` if either endpoint is unwalkable or no route exists
    /// within the configured cutoffs. When `from == to` the path is empty.
    pub fn find_path(
        &self,
        from: Point,
        to: Point,
        walkable: impl Fn(Point) -> bool,
    ) -> Option<Vec<Point>> {
        if !walkable(from) || !walkable(to) {
            log::debug!("path {from} -> {to}: endpoint not walkable");
            return None;
        }

        let cfg = &self.config;
        if cfg.straight_line && line_of_sight(from, to, &walkable) {
            if let Some(mut path) = line(from, to, &walkable, true) {
                path.remove(0);
                log::debug!("path {from} -> {to}: straight line, {} steps", path.len());
                return Some(path);
            }
        }

        let mut open = ScoredHeap::new(Node::key, Node::same);
        let mut closed: HashSet<Point> = HashSet::new();
        // Expanded nodes; parent links index into this.
        let mut expanded: Vec<Node> = Vec::new();

        open.push(Node::origin(from));

        while let Some(current) = open.pop() {
            closed.insert(current.pos);
            let ci = expanded.len();
            expanded.push(current);

            if current.pos == to {
                let path = retrace(&expanded, ci);
                log::debug!(
                    "path {from} -> {to}: {} steps, cost {:.3}, {} nodes expanded",
                    path.len(),
                    current.g,
                    expanded.len()
                );
                return Some(self.smooth(from, path, &walkable));
            }

            for dx in -1..=1 {
                for dy in -1..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let diagonal = dx != 0 && dy != 0;
                    if diagonal && !cfg.diagonals {
                        continue;
                    }

                    let np = current.pos.shift(dx, dy);
                    if !walkable(np) || closed.contains(&np) {
                        continue;
                    }

                    let step = cfg.costs.step(dx, dy);
                    if cfg.cost_limit().is_some_and(|limit| current.g + step > limit) {
                        continue;
                    }
                    if cfg.move_limit().is_some_and(|limit| current.m >= limit) {
                        continue;
                    }

                    let mut neighbour = Node::child(np, ci, &current, step);
                    match open.inspect(&neighbour).map(|n| n.g) {
                        Some(g) if g > neighbour.g => {
                            neighbour.score(self.estimate(np, to));
                            open.modify(neighbour);
                        }
                        Some(_) => {}
                        None => {
                            neighbour.score(self.estimate(np, to));
                            open.push(neighbour);
                        }
                    }
                }
            }
        }

        log::debug!(
            "path {from} -> {to}: open set exhausted after {} nodes",
            expanded.len()
        );
        None
    }

    fn estimate(&self, p: Point, to: Point) -> f64 {
        let dx = (i64::from(p.x) - i64::from(to.x)).abs();
        let dy = (i64::from(p.y) - i64::from(to.y)).abs();
        self.config.heuristic.estimate(dx as f64, dy as f64)
    }

    /// String-pull `path` starting from the true origin, if enabled.
    fn smooth(&self, from: Point, path: Vec<Point>, walkable: &impl Fn(Point) -> bool) -> Vec<Point> {
        if !self.config.string_pulling {
            return path;
        }
        let mut full = Vec::with_capacity(path.len() + 1);
        full.push(from);
        full.extend(path);
        let mut pulled = self.config.smoothing.apply(full, walkable);
        pulled.remove(0);
        pulled
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    /// Allow or forbid diagonal moves.
    ///
    /// Diagonals can't be forbidden while string pulling or straight-line
    /// pathing is on.
    pub fn allow_diagonals(&mut self, allow: bool) -> Result<(), ConfigError> {
        if !allow && self.config.string_pulling {
            return reject(ConfigError::DiagonalsRequiredBySmoothing);
        }
        if !allow && self.config.straight_line {
            return reject(ConfigError::DiagonalsRequiredByStraightLine);
        }
        self.config.diagonals = allow;
        Ok(())
    }

    /// Try a direct line of sight before running the grid search.
    ///
    /// Requires diagonal movement.
    pub fn prefer_straight_line(&mut self, prefer: bool) -> Result<(), ConfigError> {
        if prefer && !self.config.diagonals {
            return reject(ConfigError::StraightLineRequiresDiagonals);
        }
        self.config.straight_line = prefer;
        Ok(())
    }

    /// Smooth found paths with string pulling.
    ///
    /// Requires diagonal movement.
    pub fn apply_string_pulling(&mut self, pull: bool) -> Result<(), ConfigError> {
        if pull && !self.config.diagonals {
            return reject(ConfigError::SmoothingRequiresDiagonals);
        }
        self.config.string_pulling = pull;
        Ok(())
    }

    /// Select which string-pulling passes run.
    pub fn set_smoothing(&mut self, smoothing: Smoothing) {
        self.config.smoothing = smoothing;
    }

    /// Select the smoothing passes by name (see [`Smoothing`]'s `FromStr`).
    pub fn set_smoothing_by_name(&mut self, name: &str) -> Result<(), ConfigError> {
        let smoothing = name.parse::<Smoothing>().or_else(reject)?;
        self.set_smoothing(smoothing);
        Ok(())
    }

    pub fn set_heuristic(&mut self, heuristic: Heuristic) {
        self.config.heuristic = heuristic;
    }

    /// Select the heuristic by name: `manhattan`, `octile`, `euclidean` or
    /// `chebyshev`, in any case.
    pub fn set_heuristic_by_name(&mut self, name: &str) -> Result<(), ConfigError> {
        let heuristic = name.parse::<Heuristic>().or_else(reject)?;
        self.set_heuristic(heuristic);
        Ok(())
    }

    /// Set the cost of straight and diagonal moves. Both must be finite and
    /// positive.
    pub fn set_move_costs(&mut self, cardinal: f64, diagonal: f64) -> Result<(), ConfigError> {
        let costs = MoveCosts { cardinal, diagonal };
        let candidate = SearchConfig {
            costs,
            ..self.config
        };
        candidate.validate().or_else(reject)?;
        self.config.costs = costs;
        Ok(())
    }

    /// Set the maximum accumulated path cost. Zero disables the cutoff.
    pub fn set_max_cost(&mut self, max_cost: f64) -> Result<(), ConfigError> {
        check_max_cost(max_cost).or_else(reject)?;
        self.config.max_cost = max_cost;
        Ok(())
    }

    /// Set the maximum number of moves. Zero disables the cutoff.
    pub fn set_max_moves(&mut self, max_moves: i64) -> Result<(), ConfigError> {
        if max_moves < 0 {
            return reject(ConfigError::NegativeMaxMoves(max_moves));
        }
        self.config.max_moves = u32::try_from(max_moves).unwrap_or(u32::MAX);
        Ok(())
    }
}

fn reject<T>(err: ConfigError) -> Result<T, ConfigError> {
    log::debug!("rejected configuration change: {err}");
    Err(err)
}

/// Walk parent links from `expanded[end]` back to the origin, returning the
/// positions in travel order without the origin.
fn retrace(expanded: &[Node], end: usize) -> Vec<Point> {
    let mut path = Vec::new();
    let mut node = &expanded[end];
    while let Some(parent) = node.parent {
        path.push(node.pos);
        node = &expanded[parent];
    }
    path.reverse();
    path
}
