//! Carving a closed ring with an open polyline.
//!
//! Purpose
//! - Replace the boundary arc between the first and last crossing of a drawn
//!   line with the drawn path, returning a new closed ring.
//! - Keep numerics explicit: one absolute tolerance (`CarveCfg::eps`) is shared
//!   by the parallel test and the closing-point check.
//!
//! Pipeline
//! - `find_all_intersections` runs `segment_intersection` over every
//!   (line segment, polygon edge) pair.
//! - `carve_with` picks the first/last crossing, normalizes the seam, orients
//!   the line and chooses between candidate rings by vertex-centroid drift.
//!
//! Code cross-refs: `types::{Intersection, CarveCfg, Outcome}`, `ops::centroid`.

mod intersect;
mod ops;
pub mod rand;
mod types;

pub use intersect::{find_all_intersections, segment_intersection};
pub use ops::{carve, carve_with, centroid, points_equal};
pub use types::{CarveCfg, Carved, Intersection, Outcome, Point, PolygonAnnotation};
