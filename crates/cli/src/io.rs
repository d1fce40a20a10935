use anyhow::{bail, Context, Result};
use polycarve::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// `{ "x": .., "y": .. }` as exchanged with the annotation editor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl From<Position> for Point {
    fn from(p: Position) -> Self {
        Vec2::new(p.x, p.y)
    }
}

impl From<Point> for Position {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// Polygon input: a bare position array or an annotation record.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PolygonDoc {
    Bare(Vec<Position>),
    Annotation { coordinates: Vec<Position> },
}

pub fn parse_polygon(text: &str) -> Result<Vec<Point>> {
    let doc: PolygonDoc = serde_json::from_str(text)
        .context("expected an array of positions or an object with `coordinates`")?;
    let positions = match doc {
        PolygonDoc::Bare(p) => p,
        PolygonDoc::Annotation { coordinates } => coordinates,
    };
    into_points(positions, "polygon")
}

pub fn parse_line(text: &str) -> Result<Vec<Point>> {
    let positions: Vec<Position> =
        serde_json::from_str(text).context("expected an array of positions")?;
    into_points(positions, "line")
}

pub fn read_polygon(path: &Path) -> Result<Vec<Point>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_polygon(&text).with_context(|| format!("parsing polygon {}", path.display()))
}

pub fn read_line(path: &Path) -> Result<Vec<Point>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_line(&text).with_context(|| format!("parsing line {}", path.display()))
}

pub fn to_positions(points: &[Point]) -> Vec<Position> {
    points.iter().copied().map(Position::from).collect()
}

/// Pretty-print `value` to `path`, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

fn into_points(positions: Vec<Position>, what: &str) -> Result<Vec<Point>> {
    if let Some((i, p)) = positions
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.x.is_finite() && p.y.is_finite()))
    {
        bail!("{what} position {i} is not finite: ({}, {})", p.x, p.y);
    }
    Ok(positions.into_iter().map(Point::from).collect())
}
