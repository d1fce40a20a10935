//! Polygon carving for freehand annotation edits.
//!
//! A closed polygon is reshaped by a drawn polyline: the line crosses the
//! boundary twice and the arc between the crossings is replaced by the drawn
//! path. Everything here is pure value-in/value-out; storing the result back
//! into an annotation record is the caller's job.
//!
//! Layout
//! - `carve::intersect`: segment intersector and the all-pairs scanner.
//! - `carve::ops`: the carver, centroid and point-equality helpers.
//! - `carve::rand`: reproducible random rings and cut lines (tests, benches, CLI).

pub mod carve;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use carve::{carve, carve_with, CarveCfg, Carved, Intersection, Outcome, Point};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::carve::rand::{
        draw_cut_line, draw_ring_radial, CutCfg, ReplayToken, RingCfg, VertexCount,
    };
    pub use crate::carve::{
        carve, carve_with, centroid, find_all_intersections, points_equal, segment_intersection,
        CarveCfg, Carved, Intersection, Outcome, Point, PolygonAnnotation,
    };
    pub use nalgebra::Vector2 as Vec2;
}
