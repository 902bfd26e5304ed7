//! **tilepath-core** — geometry primitives for grid pathfinding.
//!
//! This crate provides the foundational types used by the *tilepath* engine:
//! the integer cell coordinate [`Point`] and [`WalkMap`], a dense
//! walkability grid that can be used directly as a walkability oracle.

pub mod geom;
pub mod map;

pub use geom::Point;
pub use map::{MapError, WalkMap};
