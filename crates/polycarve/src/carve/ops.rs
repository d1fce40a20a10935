use std::borrow::Cow;

use nalgebra::Vector2;

use super::intersect::find_all_intersections;
use super::types::{CarveCfg, Carved, Intersection, Outcome, Point};

/// Per-axis equality within `eps`.
#[inline]
pub fn points_equal(a: Point, b: Point, eps: f64) -> bool {
    (a.x - b.x).abs() < eps && (a.y - b.y).abs() < eps
}

/// Unweighted vertex mean; `None` for an empty slice.
///
/// Not the area centroid, and a repeated closing point counts like any other
/// vertex. The carver's choice between candidate rings depends on exactly this
/// measure.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vector2::zeros(), |acc: Point, p| acc + p);
    Some(sum / points.len() as f64)
}

/// Cut `polygon` with `line` using the default tolerance.
///
/// Returns the polygon itself (borrowed) when the line is too short or does
/// not cross the boundary twice.
pub fn carve<'a>(polygon: &'a [Point], line: &[Point]) -> Cow<'a, [Point]> {
    carve_with(polygon, line, CarveCfg::default()).coordinates
}

/// Cut `polygon` with `line`, reporting which reconstruction was chosen.
///
/// Steps
/// - First crossing: earliest line segment with hits, its first hit. Last
///   crossing: latest line segment with hits, its last hit.
/// - If the cut arc wraps over the seam (`first.index > last.index`), rotate the
///   ring so that `last.index` becomes position 0.
/// - Splice the drawn path in place (default), and build one alternate ring;
///   keep whichever has its vertex centroid closer to the original's.
/// - Close the ring if needed.
pub fn carve_with<'a>(polygon: &'a [Point], line: &[Point], cfg: CarveCfg) -> Carved<'a> {
    if line.len() < 2 {
        return Carved::unchanged(polygon, Outcome::LineTooShort);
    }

    // Scan order is (line segment, polygon edge), so the first record is the
    // first hit of the earliest segment and the last record is the last hit of
    // the latest segment.
    let hits = find_all_intersections(polygon, line, cfg.eps);
    let (mut first, mut last) = match (hits.first(), hits.last()) {
        (Some(f), Some(l)) if hits.len() >= 2 => (*f, *l),
        _ => return Carved::unchanged(polygon, Outcome::TooFewCrossings),
    };

    let ring: Cow<'_, [Point]> = if first.index > last.index {
        let rotated = rotate_to(polygon, last.index);
        first.index -= last.index;
        last.index = 0;
        Cow::Owned(rotated)
    } else {
        Cow::Borrowed(polygon)
    };

    let drawn = drawn_path(line, &first, &last);
    let should_reverse = first.index > last.index;
    let line_points: Vec<Point> = if should_reverse {
        drawn.iter().rev().copied().collect()
    } else {
        drawn.clone()
    };

    let lo = first.index.min(last.index);
    let hi = first.index.max(last.index);
    let default = concat(&[&ring[..lo], &line_points[..], &ring[hi..]]);

    let (alternate, alt_outcome) = if first.index > last.index {
        (concat(&[&ring[..hi], &drawn[..]]), Outcome::SeamReverse)
    } else {
        let reversed: Vec<Point> = line_points.iter().rev().copied().collect();
        (
            concat(&[&ring[first.index..last.index], &reversed[..]]),
            Outcome::SeamForward,
        )
    };

    // Candidates are compared as built, before closure; the original keeps its
    // closing point.
    let (mut chosen, outcome) = match centroid(polygon) {
        Some(target) => {
            if drift(&alternate, target) < drift(&default, target) {
                (alternate, alt_outcome)
            } else {
                (default, Outcome::Default)
            }
        }
        None => (default, Outcome::Default),
    };

    close_ring(&mut chosen, cfg.eps);
    Carved {
        coordinates: Cow::Owned(chosen),
        outcome,
    }
}

/// `polygon[k..] ++ polygon[..k]`.
fn rotate_to(polygon: &[Point], k: usize) -> Vec<Point> {
    let mut out = Vec::with_capacity(polygon.len());
    out.extend_from_slice(&polygon[k..]);
    out.extend_from_slice(&polygon[..k]);
    out
}

/// `[first.point, line vertices between the two crossing segments, last.point]`
/// in drawn order.
fn drawn_path(line: &[Point], first: &Intersection, last: &Intersection) -> Vec<Point> {
    let inner = &line[first.line_segment_index + 1..=last.line_segment_index];
    let mut out = Vec::with_capacity(inner.len() + 2);
    out.push(first.point);
    out.extend_from_slice(inner);
    out.push(last.point);
    out
}

fn concat(parts: &[&[Point]]) -> Vec<Point> {
    let n = parts.iter().map(|p| p.len()).sum();
    let mut out = Vec::with_capacity(n);
    for p in parts {
        out.extend_from_slice(p);
    }
    out
}

fn drift(ring: &[Point], target: Point) -> f64 {
    centroid(ring).map_or(f64::INFINITY, |c| (c - target).norm())
}

fn close_ring(ring: &mut Vec<Point>, eps: f64) {
    if let (Some(&head), Some(&tail)) = (ring.first(), ring.last()) {
        if !points_equal(head, tail, eps) {
            ring.push(head);
        }
    }
}
