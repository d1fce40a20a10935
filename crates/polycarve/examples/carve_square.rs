//! Cut the unit-ish square with a few lines and print what the carver keeps.
//!
//! Usage:
//!   cargo run -p polycarve --example carve_square
//!   cargo run -p polycarve --example carve_square -- 3.5

use polycarve::prelude::*;

fn main() {
    let x: f64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(4.0);
    let square = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(10.0, 10.0),
        Vec2::new(0.0, 10.0),
        Vec2::new(0.0, 0.0),
    ];
    let lines = [
        ("vertical", vec![Vec2::new(x, -5.0), Vec2::new(x, 15.0)]),
        (
            "corner",
            vec![
                Vec2::new(-1.0, 3.0),
                Vec2::new(1.0, 3.0),
                Vec2::new(3.0, 1.0),
                Vec2::new(3.0, -1.0),
            ],
        ),
        ("miss", vec![Vec2::new(20.0, 0.0), Vec2::new(20.0, 10.0)]),
    ];
    for (name, line) in &lines {
        let out = carve_with(&square, line, CarveCfg::default());
        let c = centroid(&out.coordinates[..out.coordinates.len() - 1]);
        println!(
            "{name}: outcome={}, points={}, centroid={:?}",
            out.outcome,
            out.coordinates.len(),
            c.map(|p| (p.x, p.y))
        );
    }
}
