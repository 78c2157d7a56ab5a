//! Axis-aligned rectangle helpers and push-back resolution.
//!
//! Rectangles use integer map units with the top-left corner as origin,
//! matching the coordinates stored in level files. Edge semantics follow the
//! usual half-open convention: a rectangle covers `x..x + w` and `y..y + h`,
//! so two rectangles that merely share an edge do not overlap.
//!
//! [`push_back`] is a best-effort heuristic, not a physical resolution. It
//! picks a single axis per obstacle by probing the mover's edge midpoints in
//! a fixed order (top, left, bottom, right). Diagonal overlaps can resolve
//! differently depending on that order; the order is kept stable so that
//! replays are deterministic.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Integer axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// Edge of a mover whose midpoint was found inside an overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Left,
    Bottom,
    Right,
}

impl Side {
    /// Probe order used by [`push_back`].
    pub const PRIORITY: [Side; 4] = [Side::Top, Side::Left, Side::Bottom, Side::Right];

    /// True when resolving this side snaps the vertical coordinate.
    pub fn is_vertical(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }

    pub fn mid_top(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y)
    }

    pub fn mid_left(&self) -> (i32, i32) {
        (self.x, self.y + self.h / 2)
    }

    pub fn mid_bottom(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.bottom())
    }

    pub fn mid_right(&self) -> (i32, i32) {
        (self.right(), self.y + self.h / 2)
    }

    /// Midpoint of the given edge.
    pub fn midpoint(&self, side: Side) -> (i32, i32) {
        match side {
            Side::Top => self.mid_top(),
            Side::Left => self.mid_left(),
            Side::Bottom => self.mid_bottom(),
            Side::Right => self.mid_right(),
        }
    }

    /// Half-open point containment: the right and bottom edges are outside.
    pub fn contains_point(&self, (px, py): (i32, i32)) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Strict overlap test. Shared edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Same rectangle moved by `(dx, dy)`.
    pub fn offset(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Same rectangle with its top-left corner placed at `(x, y)`.
    pub fn at(&self, x: i32, y: i32) -> Rect {
        Rect::new(x, y, self.w, self.h)
    }

    /// Same size, positioned so its bottom-edge midpoint sits on `(mx, my)`.
    pub fn with_mid_bottom(&self, (mx, my): (i32, i32)) -> Rect {
        Rect::new(mx - self.w / 2, my - self.h, self.w, self.h)
    }

    /// Grow width and height by one so that points on the right and bottom
    /// edges test as contained.
    pub fn edge_inclusive(&self) -> Rect {
        Rect::new(self.x, self.y, self.w + 1, self.h + 1)
    }

    /// Move this rectangle the least distance needed to fit inside `area`.
    ///
    /// When the rectangle is larger than `area` on an axis it is centred on
    /// that axis instead.
    pub fn clamp_into(&self, area: &Rect) -> Rect {
        let x = if self.w >= area.w {
            area.x + area.w / 2 - self.w / 2
        } else if self.x < area.x {
            area.x
        } else if self.right() > area.right() {
            area.right() - self.w
        } else {
            self.x
        };
        let y = if self.h >= area.h {
            area.y + area.h / 2 - self.h / 2
        } else if self.y < area.y {
            area.y
        } else if self.bottom() > area.bottom() {
            area.bottom() - self.h
        } else {
            self.y
        };
        self.at(x, y)
    }
}

/// Intersecting region of two rectangles, `None` when they do not overlap.
///
/// Callers doing point tests against the result should widen it with
/// [`Rect::edge_inclusive`]; a mover's bottom and right midpoints lie exactly
/// on the exclusive edge of the region otherwise.
pub fn overlap(a: &Rect, b: &Rect) -> Option<Rect> {
    if !a.intersects(b) {
        return None;
    }
    let x = a.x.max(b.x);
    let y = a.y.max(b.y);
    let right = a.right().min(b.right());
    let bottom = a.bottom().min(b.bottom());
    Some(Rect::new(x, y, right - x, bottom - y))
}

/// Outcome of a [`push_back`] pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PushBack {
    pub position: Vec2,
    /// Last side that matched, `None` when no obstacle moved the mover.
    pub side: Option<Side>,
}

impl PushBack {
    pub fn blocked(&self) -> bool {
        self.side.is_some()
    }
}

/// Snap `position` back toward `previous` out of each obstacle in turn.
///
/// For every obstacle overlapping `mover`, the first edge midpoint (top,
/// left, bottom, right) inside the edge-inclusive overlap decides the axis,
/// and only that coordinate is restored from `previous`. `mover` itself is
/// not moved between obstacles; each obstacle can still further adjust the
/// returned position.
pub fn push_back(mover: &Rect, obstacles: &[Rect], position: Vec2, previous: Vec2) -> PushBack {
    let mut result = PushBack {
        position,
        side: None,
    };

    for obstacle in obstacles {
        let Some(region) = overlap(mover, obstacle) else {
            continue;
        };
        let region = region.edge_inclusive();

        let hit = Side::PRIORITY
            .into_iter()
            .find(|side| region.contains_point(mover.midpoint(*side)));

        if let Some(side) = hit {
            if side.is_vertical() {
                result.position.y = previous.y;
            } else {
                result.position.x = previous.x;
            }
            result.side = Some(side);
        }
    }

    result
}
