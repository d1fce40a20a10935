use super::types::{Intersection, Point};

/// Intersection of the drawn segment `line_start → line_end` with the polygon
/// edge `seg_start → seg_end`, if any.
///
/// Parallel and collinear segments (`|denom| < eps`) never intersect, even when
/// they overlap. Touching at an endpoint of either segment counts.
pub fn segment_intersection(
    line_start: Point,
    line_end: Point,
    seg_start: Point,
    seg_end: Point,
    eps: f64,
) -> Option<Point> {
    let d_line = line_end - line_start;
    let d_seg = seg_end - seg_start;
    let denom = d_seg.y * d_line.x - d_seg.x * d_line.y;
    if denom.abs() < eps {
        return None;
    }
    let rel = line_start - seg_start;
    // ua runs along the drawn segment, ub along the polygon edge.
    let ua = (d_seg.x * rel.y - d_seg.y * rel.x) / denom;
    let ub = (d_line.x * rel.y - d_line.y * rel.x) / denom;
    if !(0.0..=1.0).contains(&ua) || !(0.0..=1.0).contains(&ub) {
        return None;
    }
    Some(line_start + d_line * ua)
}

/// Every crossing between `line` segments and `polygon` edges.
///
/// Ordered by line segment first, polygon edge second. O(n·m).
pub fn find_all_intersections(polygon: &[Point], line: &[Point], eps: f64) -> Vec<Intersection> {
    let mut out = Vec::new();
    for (i, ls) in line.windows(2).enumerate() {
        for (j, edge) in polygon.windows(2).enumerate() {
            if let Some(point) = segment_intersection(ls[0], ls[1], edge[0], edge[1], eps) {
                out.push(Intersection {
                    point,
                    index: j + 1,
                    line_segment_index: i,
                });
            }
        }
    }
    out
}
