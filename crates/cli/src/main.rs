use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};
use polycarve::carve::rand::{
    draw_cut_line, draw_ring_radial, CutCfg, ReplayToken, RingCfg, VertexCount,
};
use polycarve::{carve_with, CarveCfg};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Carve polygon annotations with drawn lines")]
struct Cmd {
    /// Optional label; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Cut a polygon with a line and write the new coordinates
    Carve {
        /// JSON array of {x,y} positions, or an object with `coordinates`
        #[arg(long)]
        polygon: PathBuf,
        /// JSON array of {x,y} positions
        #[arg(long)]
        line: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Absolute tolerance for parallel segments and closing points
        #[arg(long, default_value_t = CarveCfg::default().eps)]
        eps: f64,
    },
    /// Draw a random ring and cut line, carve, and write all three
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        #[arg(long, default_value_t = 3)]
        interior: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Carve {
            polygon,
            line,
            out,
            eps,
        } => carve(polygon, line, out, eps, cmd.tag),
        Action::Sample {
            seed,
            index,
            vertices,
            interior,
            out,
        } => sample(seed, index, vertices, interior, out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn carve(
    polygon: PathBuf,
    line: PathBuf,
    out: PathBuf,
    eps: f64,
    tag: Option<String>,
) -> Result<()> {
    ensure!(eps.is_finite() && eps > 0.0, "--eps must be positive, got {eps}");
    tracing::info!(
        polygon = %polygon.display(),
        line = %line.display(),
        out = %out.display(),
        eps,
        tag = ?tag,
        "carve"
    );
    let ring = io::read_polygon(&polygon)?;
    let path = io::read_line(&line)?;
    let carved = carve_with(&ring, &path, CarveCfg { eps });
    let outcome = carved.outcome;
    if outcome.is_unchanged() {
        tracing::warn!(%outcome, line_points = path.len(), "line does not cut the polygon");
    }
    tracing::info!(
        %outcome,
        points_in = ring.len(),
        points_out = carved.coordinates.len(),
        "carved"
    );

    io::write_json(&out, &io::to_positions(&carved.coordinates))?;
    let payload = Payload::new(
        serde_json::json!({
            "polygon": polygon,
            "line": line,
            "eps": eps,
            "outcome": outcome.as_str(),
            "points_in": ring.len(),
            "points_out": carved.coordinates.len(),
        }),
        tag,
    );
    let prov = provenance::write_sidecar(&out, payload)?;
    tracing::debug!(provenance = %prov.display(), "sidecar");
    Ok(())
}

fn sample(
    seed: u64,
    index: u64,
    vertices: usize,
    interior: usize,
    out: PathBuf,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(seed, index, vertices, interior, out = %out.display(), tag = ?tag, "sample");
    let tok = ReplayToken { seed, index };
    let ring = draw_ring_radial(
        RingCfg {
            vertex_count: VertexCount::Fixed(vertices),
            ..RingCfg::default()
        },
        tok,
    );
    let line = draw_cut_line(
        CutCfg {
            interior_points: interior,
            ..CutCfg::default()
        },
        tok,
    );
    let carved = carve_with(&ring, &line, CarveCfg::default());
    tracing::info!(
        outcome = %carved.outcome,
        points_in = ring.len(),
        points_out = carved.coordinates.len(),
        "carved"
    );

    let doc = serde_json::json!({
        "polygon": io::to_positions(&ring),
        "line": io::to_positions(&line),
        "result": io::to_positions(&carved.coordinates),
        "outcome": carved.outcome.as_str(),
    });
    io::write_json(&out, &doc)?;
    let payload = Payload::new(
        serde_json::json!({
            "seed": seed,
            "index": index,
            "vertices": vertices,
            "interior": interior,
            "outcome": carved.outcome.as_str(),
        }),
        tag,
    );
    provenance::write_sidecar(&out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let doc = provenance::document(&Payload::new(serde_json::json!({}), tag), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn read_value(path: &Path) -> Value {
        serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
    }

    #[test]
    fn carve_writes_ring_and_sidecar() {
        let dir = tempdir().unwrap();
        let polygon = dir.path().join("square.json");
        let line = dir.path().join("line.json");
        let out = dir.path().join("out/carved.json");
        fs::write(
            &polygon,
            r#"{"coordinates": [{"x":0,"y":0},{"x":10,"y":0},{"x":10,"y":10},{"x":0,"y":10},{"x":0,"y":0}]}"#,
        )
        .unwrap();
        fs::write(&line, r#"[{"x":2,"y":-5},{"x":2,"y":15}]"#).unwrap();

        carve(polygon.clone(), line, out.clone(), 1e-10, Some("e2e".into())).unwrap();

        let ring = io::read_line(&out).unwrap();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring[0], ring[4]);
        assert!(ring.iter().all(|p| p.x >= 2.0));

        let prov = read_value(&dir.path().join("out/carved.provenance.json"));
        assert_eq!(prov["tag"], "e2e");
        assert_eq!(prov["params"]["outcome"], "seam_forward");
        assert_eq!(prov["params"]["points_in"], 5);
        assert_eq!(prov["params"]["points_out"], 5);
        assert_eq!(prov["outputs"][0], out.to_string_lossy().as_ref());
    }

    #[test]
    fn carve_with_missing_line_copies_polygon() {
        let dir = tempdir().unwrap();
        let polygon = dir.path().join("tri.json");
        let line = dir.path().join("line.json");
        let out = dir.path().join("carved.json");
        fs::write(
            &polygon,
            r#"[{"x":0,"y":0},{"x":4,"y":0},{"x":0,"y":4},{"x":0,"y":0}]"#,
        )
        .unwrap();
        fs::write(&line, r#"[{"x":10,"y":10},{"x":20,"y":20}]"#).unwrap();

        carve(polygon.clone(), line, out.clone(), 1e-10, None).unwrap();

        assert_eq!(io::read_line(&out).unwrap(), io::read_polygon(&polygon).unwrap());
        let prov = read_value(&dir.path().join("carved.provenance.json"));
        assert_eq!(prov["params"]["outcome"], "too_few_crossings");
        assert!(prov["tag"].is_null());
    }

    #[test]
    fn carve_rejects_non_positive_eps() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("missing.json");
        let err = carve(p.clone(), p.clone(), p, 0.0, None).unwrap_err();
        assert!(err.to_string().contains("--eps must be positive"));
    }

    #[test]
    fn sample_writes_inputs_result_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("sample.json");
        sample(7, 3, 10, 2, out.clone(), Some("s".into())).unwrap();

        let doc = read_value(&out);
        assert_eq!(doc["polygon"].as_array().unwrap().len(), 11);
        assert_eq!(doc["line"].as_array().unwrap().len(), 4);
        let result = doc["result"].as_array().unwrap();
        assert!(result.len() >= 4);
        let (a, b) = (&result[0], &result[result.len() - 1]);
        assert!((a["x"].as_f64().unwrap() - b["x"].as_f64().unwrap()).abs() < 1e-10);
        assert!((a["y"].as_f64().unwrap() - b["y"].as_f64().unwrap()).abs() < 1e-10);

        let prov = read_value(&dir.path().join("sample.provenance.json"));
        assert_eq!(prov["params"]["outcome"], doc["outcome"]);
        assert_eq!(prov["params"]["seed"], 7);
        assert_eq!(prov["tag"], "s");

        // Same token, same artifact.
        let again = dir.path().join("again.json");
        sample(7, 3, 10, 2, again.clone(), None).unwrap();
        assert_eq!(read_value(&again), doc);
    }

    #[test]
    fn report_succeeds_without_tag() {
        report(None).unwrap();
    }
}
