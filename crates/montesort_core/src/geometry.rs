//! Circles, axis-aligned rectangles and the containment tests used by the
//! area estimator.

use serde::{Deserialize, Serialize};

use crate::error::{ExperimentError, Result};

/// A sampled point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

impl Circle {
    /// Create a circle, rejecting negative or non-finite parameters
    pub fn new(x: f64, y: f64, r: f64) -> Result<Self> {
        let circle = Self { x, y, r };
        circle.validate()?;
        Ok(circle)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.x.is_finite() && self.y.is_finite()) {
            return Err(ExperimentError::invalid(
                "circle",
                format!("center ({}, {}) is not finite", self.x, self.y),
            ));
        }
        if !self.r.is_finite() || self.r < 0.0 {
            return Err(ExperimentError::invalid(
                "circle",
                format!("radius {} must be finite and non-negative", self.r),
            ));
        }
        Ok(())
    }

    /// Boundary-inclusive containment test on squared distances
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        let dx = p.x - self.x;
        let dy = p.y - self.y;
        dx * dx + dy * dy <= self.r * self.r
    }

    /// Axis-aligned bounding box of the circle
    pub fn bounding_box(&self) -> Rect {
        Rect {
            min_x: self.x - self.r,
            max_x: self.x + self.r,
            min_y: self.y - self.r,
            max_y: self.y + self.r,
        }
    }
}

/// True iff `p` lies in all three circles (boundaries included)
#[inline]
pub fn in_all_three(p: Point, c1: &Circle, c2: &Circle, c3: &Circle) -> bool {
    c1.contains(p) && c2.contains(p) && c3.contains(p)
}

/// Axis-aligned rectangle used as the sampling domain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Rect {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<Self> {
        let rect = Self {
            min_x,
            max_x,
            min_y,
            max_y,
        };
        rect.validate()?;
        Ok(rect)
    }

    pub fn validate(&self) -> Result<()> {
        let finite = [self.min_x, self.max_x, self.min_y, self.max_y]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(ExperimentError::invalid(
                "rectangle",
                format!("{self:?} has non-finite bounds"),
            ));
        }
        if self.min_x > self.max_x || self.min_y > self.max_y {
            return Err(ExperimentError::invalid(
                "rectangle",
                format!("{self:?} has min > max"),
            ));
        }
        Ok(())
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Overlap of two rectangles, `None` when they are disjoint
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let rect = Rect {
            min_x: self.min_x.max(other.min_x),
            max_x: self.max_x.min(other.max_x),
            min_y: self.min_y.max(other.min_y),
            max_y: self.max_y.min(other.max_y),
        };
        (rect.min_x <= rect.max_x && rect.min_y <= rect.max_y).then_some(rect)
    }

    /// Tightest axis-aligned rectangle implied by the circles' bounding boxes.
    ///
    /// The triple intersection lies inside each circle's bounding box, hence
    /// inside their overlap, so this is always a superset of the region being
    /// measured.
    pub fn enclosing_intersection(circles: &[Circle; 3]) -> Result<Rect> {
        let [c1, c2, c3] = circles;
        c1.bounding_box()
            .intersection(&c2.bounding_box())
            .and_then(|r| r.intersection(&c3.bounding_box()))
            .ok_or_else(|| {
                ExperimentError::invalid(
                    "circles",
                    "bounding boxes do not overlap, intersection is empty",
                )
            })
    }
}
