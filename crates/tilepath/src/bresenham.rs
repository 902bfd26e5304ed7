//! Bresenham line tracing.
//!
//! Lines are rasterised with integer Bresenham stepping and every visited
//! cell is checked against the walkability oracle. Rasterisation is not
//! symmetric: the line from A to B may pass through different cells than the
//! line from B to A, so the line-of-sight test tries both directions.
//!
//! Deltas and the error term are kept in `i64`, so any two `i32` endpoints
//! can be traced.

use tilepath_core::Point;

/// Hard ceiling on the number of cells [`line`] will enumerate.
pub const MAX_LINE_STEPS: usize = 9999;

/// Iterator over the cells of the Bresenham line from `from` to `to`,
/// both endpoints included.
#[derive(Clone, Debug)]
pub struct BresenhamLine {
    cur: Point,
    end: Point,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl BresenhamLine {
    pub fn new(from: Point, to: Point) -> Self {
        let (dx, dy) = span(from, to);
        Self {
            cur: from,
            end: to,
            dx,
            dy,
            sx: if from.x < to.x { 1 } else { -1 },
            sy: if from.y < to.y { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let p = self.cur;
        if p == self.end {
            self.done = true;
            return Some(p);
        }
        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.cur.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.cur.y += self.sy;
        }
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (dx, dy) = span(self.cur, self.end);
        let n = usize::try_from(dx.max(dy)).map_or(usize::MAX, |n| n.saturating_add(1));
        (n, Some(n))
    }
}

/// Absolute per-axis distance between `a` and `b`.
#[inline]
fn span(a: Point, b: Point) -> (i64, i64) {
    (
        (i64::from(b.x) - i64::from(a.x)).abs(),
        (i64::from(b.y) - i64::from(a.y)).abs(),
    )
}

/// Walk the line from `from` to `to`, failing on the first unwalkable cell
/// (the start cell included).
pub fn trace(from: Point, to: Point, walkable: &impl Fn(Point) -> bool) -> bool {
    BresenhamLine::new(from, to).all(walkable)
}

/// Whether there is an unobstructed straight line between `a` and `b` in
/// either direction.
pub fn line_of_sight(a: Point, b: Point, walkable: &impl Fn(Point) -> bool) -> bool {
    trace(a, b, walkable) || trace(b, a, walkable)
}

/// Enumerate the cells of an unobstructed line from `from` to `to`.
///
/// The destination is probed first. Returns `None` if any cell is
/// unwalkable or the line is longer than [`MAX_LINE_STEPS`] cells. With
/// `bidirectional`, a failed forward attempt is retried from `to`; the result
/// is always ordered from `from` to `to`.
pub fn line(
    from: Point,
    to: Point,
    walkable: &impl Fn(Point) -> bool,
    bidirectional: bool,
) -> Option<Vec<Point>> {
    if let Some(points) = plot(from, to, walkable) {
        return Some(points);
    }
    if !bidirectional {
        return None;
    }
    let mut points = plot(to, from, walkable)?;
    points.reverse();
    Some(points)
}

fn plot(from: Point, to: Point, walkable: &impl Fn(Point) -> bool) -> Option<Vec<Point>> {
    if !walkable(to) {
        return None;
    }
    let mut points = Vec::new();
    for p in BresenhamLine::new(from, to).take(MAX_LINE_STEPS) {
        if !walkable(p) {
            return None;
        }
        points.push(p);
        if p == to {
            return Some(points);
        }
    }
    log::warn!("line {from} -> {to} exceeds {MAX_LINE_STEPS} steps");
    None
}
