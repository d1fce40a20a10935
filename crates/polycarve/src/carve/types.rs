//! Value types shared by the intersector and the carver.
//!
//! - `CarveCfg`: the single absolute tolerance used for parallel and equality checks.
//! - `Intersection`: one crossing of a drawn-line segment with a polygon edge.
//! - `Outcome`, `Carved`: which reconstruction was returned, and the ring itself.
//! - `PolygonAnnotation`: the `{ coordinates }` record the editor hands over.

use std::borrow::Cow;

use nalgebra::Vector2;

use super::ops;

/// A position in the shared 2D coordinate space of polygon and line.
pub type Point = Vector2<f64>;

/// Carving configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarveCfg {
    /// Absolute epsilon for the parallel test and per-axis point equality.
    pub eps: f64,
}

impl Default for CarveCfg {
    fn default() -> Self {
        Self { eps: 1e-10 }
    }
}

/// Crossing of drawn-line segment `line_segment_index` with a polygon edge.
///
/// `index` is the polygon position where the drawn path is spliced in, i.e.
/// one past the start vertex of the crossed edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub point: Point,
    pub index: usize,
    pub line_segment_index: usize,
}

/// Which branch of the carver produced the returned ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Fewer than two line points; polygon returned unchanged.
    LineTooShort,
    /// The line does not cross the boundary twice; polygon returned unchanged.
    TooFewCrossings,
    /// Arc between the crossings replaced in place.
    Default,
    /// The arc between the crossings, closed by the reversed line.
    SeamForward,
    /// Everything before the far crossing, closed by the line in drawn order.
    SeamReverse,
}

impl Outcome {
    #[inline]
    pub fn is_unchanged(self) -> bool {
        matches!(self, Outcome::LineTooShort | Outcome::TooFewCrossings)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::LineTooShort => "line_too_short",
            Outcome::TooFewCrossings => "too_few_crossings",
            Outcome::Default => "default",
            Outcome::SeamForward => "seam_forward",
            Outcome::SeamReverse => "seam_reverse",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of `carve_with`.
///
/// Invariant: `coordinates` borrows the input polygon iff `outcome.is_unchanged()`.
#[derive(Clone, Debug)]
pub struct Carved<'a> {
    pub coordinates: Cow<'a, [Point]>,
    pub outcome: Outcome,
}

impl<'a> Carved<'a> {
    pub(crate) fn unchanged(polygon: &'a [Point], outcome: Outcome) -> Self {
        debug_assert!(outcome.is_unchanged());
        Self {
            coordinates: Cow::Borrowed(polygon),
            outcome,
        }
    }

    pub fn into_vec(self) -> Vec<Point> {
        self.coordinates.into_owned()
    }
}

/// Closed polygon annotation as owned by the annotation store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolygonAnnotation {
    pub coordinates: Vec<Point>,
}

impl PolygonAnnotation {
    pub fn new(coordinates: Vec<Point>) -> Self {
        Self { coordinates }
    }

    /// Coordinates after cutting with `line`; borrows `self` on a no-op.
    pub fn carved(&self, line: &[Point]) -> Cow<'_, [Point]> {
        ops::carve(&self.coordinates, line)
    }

    /// Cut in place. The record is only rewritten when the carve changed it.
    pub fn apply_cut(&mut self, line: &[Point]) -> Outcome {
        let Carved {
            coordinates,
            outcome,
        } = ops::carve_with(&self.coordinates, line, CarveCfg::default());
        if let Cow::Owned(next) = coordinates {
            self.coordinates = next;
        }
        outcome
    }
}
