//! Random rings and cut lines in 2D (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide small, deterministic inputs for property tests, benchmarks and the
//!   CLI `sample` command. Every draw is fully determined by a `ReplayToken`.
//!
//! Model
//! - Ring: `n` equally spaced angles on [0, 2π) with bounded angular and radial
//!   jitter, sorted by angle, so the ring is star-shaped around the origin and
//!   never self-intersects. The first vertex is repeated at the end.
//! - Cut line: starts and ends outside the disc of radius `reach * base_radius`
//!   and wanders through the interior, so it normally crosses the ring at least
//!   twice.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter ring configuration.
#[derive(Clone, Copy, Debug)]
pub struct RingCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii are `base_radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}

impl Default for RingCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}

/// Cut-line configuration.
#[derive(Clone, Copy, Debug)]
pub struct CutCfg {
    /// Vertices strictly between the two outside endpoints.
    pub interior_points: usize,
    /// Endpoint radius as a multiple of `base_radius`; must exceed the ring's
    /// maximal radius (`1 + radial_jitter`) for the endpoints to lie outside.
    pub reach: f64,
    /// Lateral wobble of interior vertices, relative to `base_radius`.
    pub wobble: f64,
    pub base_radius: f64,
}

impl Default for CutCfg {
    fn default() -> Self {
        Self {
            interior_points: 3,
            reach: 2.0,
            wobble: 0.2,
            base_radius: 1.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self, stream: u64) -> StdRng {
        // SplitMix64-style mixing; `stream` separates ring and line draws.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15) ^ mix(stream)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a closed star-shaped ring around the origin.
pub fn draw_ring_radial(cfg: RingCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng(0);
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.99);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            (k as f64) * delta + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mut ring: Vec<Point> = angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            let th = th + phase;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    ring.push(ring[0]);
    ring
}

/// Draw an open cut line from outside the ring, through it, to outside again.
///
/// The endpoints sit on the circle of radius `reach * base_radius` at angles at
/// least a quarter turn apart; interior vertices follow the chord between them
/// pulled towards the origin, plus wobble.
pub fn draw_cut_line(cfg: CutCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng(1);
    let r0 = cfg.base_radius.max(1e-9);
    let reach = cfg.reach.max(1.0) * r0;
    let a0 = rng.gen::<f64>() * std::f64::consts::TAU;
    let a1 = a0 + rng.gen_range(0.5..1.5) * std::f64::consts::PI;
    let start = Vector2::new(a0.cos(), a0.sin()) * reach;
    let end = Vector2::new(a1.cos(), a1.sin()) * reach;
    let steps = cfg.interior_points + 1;
    let mut line = Vec::with_capacity(steps + 1);
    line.push(start);
    for k in 1..steps {
        let t = k as f64 / steps as f64;
        let on_chord = start + (end - start) * t;
        // Bulge towards the origin so the path passes through the interior.
        let pull = 1.0 - 0.8 * (std::f64::consts::PI * t).sin();
        let w = Vector2::new(
            rng.gen::<f64>() * 2.0 - 1.0,
            rng.gen::<f64>() * 2.0 - 1.0,
        ) * (cfg.wobble * r0);
        line.push(on_chord * pull + w);
    }
    line.push(end);
    line
}
