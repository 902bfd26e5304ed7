//! Dense walkability grids.
//!
//! A [`WalkMap`] is a rectangular grid of walkable/blocked cells with its
//! top-left corner at (0, 0). It can be built programmatically or parsed from
//! ASCII art, where `#` marks a blocked cell and every other character is
//! walkable:
//!
//! ```
//! use tilepath_core::{Point, WalkMap};
//!
//! let map = WalkMap::parse(
//!     "..#
//!      ..#
//!      ...",
//! )
//! .unwrap();
//! assert!(map.is_walkable(Point::new(0, 0)));
//! assert!(!map.is_walkable(Point::new(2, 1)));
//! // Out of bounds is never walkable.
//! assert!(!map.is_walkable(Point::new(-1, 0)));
//! ```

use std::fmt;

use thiserror::Error;

use crate::geom::Point;

/// Character marking a blocked cell in ASCII maps.
pub const BLOCKED: char = '#';

/// Errors that can occur when parsing a [`WalkMap`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// The input contained no cells.
    #[error("map is empty")]
    Empty,
    /// A line's width differs from the first line's.
    #[error("map line {line} has width {found}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// A rectangular grid of walkable and blocked cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WalkMap {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl WalkMap {
    /// Create a map of the given size with every cell walkable.
    pub fn open(width: usize, height: usize) -> Self {
        Self {
            cells: vec![true; width * height],
            width,
            height,
        }
    }

    /// Parse a map from ASCII art.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string and from
    /// each line, so maps can be written indented inside source code. Every
    /// line must have the same width after trimming.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (line_no, line) in s.trim().lines().map(str::trim).enumerate() {
            let found = line.chars().count();
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(MapError::InconsistentWidth {
                        line: line_no,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            cells.extend(line.chars().map(|ch| ch != BLOCKED));
            height += 1;
        }

        let width = width.unwrap_or(0);
        if width == 0 {
            return Err(MapError::Empty);
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Map width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Map height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `p` lies inside the map.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.index(p).is_some()
    }

    /// Whether `p` is inside the map and walkable.
    ///
    /// Out-of-bounds cells are reported as blocked, so this can be handed to
    /// a pathfinder as-is: `|p| map.is_walkable(p)`.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.cells[i])
    }

    /// Set the walkability of `p`. Out-of-bounds points are ignored.
    pub fn set(&mut self, p: Point, walkable: bool) {
        if let Some(i) = self.index(p) {
            self.cells[i] = walkable;
        }
    }

    /// Iterate over every walkable cell in row-major order.
    pub fn walkable_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w)
            .map(|(i, _)| self.point(i))
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height {
            Some((p.y as usize) * self.width + (p.x as usize))
        } else {
            None
        }
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for WalkMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            cells: Vec<bool>,
            width: usize,
            height: usize,
        }

        let Raw { cells, width, height } = Raw::deserialize(deserializer)?;
        if width.checked_mul(height) != Some(cells.len()) {
            return Err(serde::de::Error::custom(format!(
                "map of {width}x{height} needs {} cells, got {}",
                width.saturating_mul(height),
                cells.len()
            )));
        }
        Ok(Self { cells, width, height })
    }
}

impl fmt::Display for WalkMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.width.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &w in row {
                write!(f, "{}", if w { '.' } else { BLOCKED })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "
        ....
        .##.
        ....
    ";

    #[test]
    fn parse_room() {
        let map = WalkMap::parse(ROOM).unwrap();
        assert_eq!(map.width(), 4);
        assert_eq!(map.height(), 3);
        assert!(map.is_walkable(Point::new(0, 1)));
        assert!(!map.is_walkable(Point::new(1, 1)));
        assert!(!map.is_walkable(Point::new(2, 1)));
        assert!(!map.is_walkable(Point::new(4, 0)));
        assert!(!map.is_walkable(Point::new(0, 3)));
    }

    #[test]
    fn parse_inconsistent_width() {
        let err = WalkMap::parse("...\n..").unwrap_err();
        assert_eq!(
            err,
            MapError::InconsistentWidth {
                line: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(err.to_string(), "map line 1 has width 2, expected 3");
    }

    #[test]
    fn parse_empty() {
        assert_eq!(WalkMap::parse("   \n  ").unwrap_err(), MapError::Empty);
    }

    #[test]
    fn display_round_trips() {
        let map = WalkMap::parse(ROOM).unwrap();
        let again = WalkMap::parse(&map.to_string()).unwrap();
        assert_eq!(map, again);
    }

    #[test]
    fn set_and_walkable_cells() {
        let mut map = WalkMap::open(3, 2);
        map.set(Point::new(1, 0), false);
        map.set(Point::new(9, 9), false);
        let cells: Vec<_> = map.walkable_cells().collect();
        assert_eq!(cells.len(), 5);
        assert_eq!(cells[0], Point::new(0, 0));
        assert_eq!(cells[1], Point::new(2, 0));
        assert!(map.contains(Point::new(2, 1)));
        assert!(!map.contains(Point::new(3, 1)));
    }
}
