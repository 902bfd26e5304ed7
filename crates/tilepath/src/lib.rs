//! Grid pathfinding with line-of-sight shortcuts and path smoothing.
//!
//! [`Pathfinder`] runs A* over a uniform 2D grid whose cells are described by
//! a caller-supplied walkability oracle `Fn(Point) -> bool`:
//!
//! ```
//! use tilepath::{Pathfinder, Point};
//!
//! let mut pf = Pathfinder::new();
//! pf.apply_string_pulling(true).unwrap();
//! let path = pf
//!     .find_path(Point::new(0, 0), Point::new(4, 4), |p| {
//!         (0..5).contains(&p.x) && (0..5).contains(&p.y)
//!     })
//!     .unwrap();
//! assert_eq!(path.last(), Some(&Point::new(4, 4)));
//! ```
//!
//! The pieces it is built from are public too:
//!
//! - [`Heuristic`] distance estimates (manhattan, euclidean, octile, chebyshev)
//! - [`ScoredHeap`], the open set: a binary min-heap with identity lookup
//! - [`bresenham`] line tracing and line-of-sight tests
//! - [`string_pull`] path smoothing, selected with [`Smoothing`]

pub mod bresenham;
mod config;
mod error;
mod heap;
mod heuristic;
mod node;
mod pathfinder;
mod pull;

pub use config::{MoveCosts, SearchConfig};
pub use error::ConfigError;
pub use heap::ScoredHeap;
pub use heuristic::{Heuristic, chebyshev, euclidean, manhattan, octile};
pub use node::Node;
pub use pathfinder::Pathfinder;
pub use pull::{Smoothing, string_pull};
pub use tilepath_core::{Point, WalkMap};
