mod input;
mod provenance;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, Subcommand};
use planesym::angle::{normalize_deg, normalize_line_deg, round_to};
use planesym::symmetry::{
    find_line_match, find_rotation_match, regular_polygon_nontrivial_rotations_deg,
    regular_polygon_reflection_lines,
};
use planesym::{
    reflect, translate, FoundSymmetries, Line2, RationalRotationGroup, Rotation, Shape, SymCfg,
    SymmetryGroup, Transform2, Vec2,
};
use serde_json::{json, Value};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

use input::{load_cfg, parse_amount, parse_point, CfgOverrides};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "planesym")]
#[command(about = "Reflections, rotations, and symmetry checks for plane figures")]
struct Cmd {
    /// JSON file with tolerance settings (fields of `SymCfg`)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Line matching tolerance, radians
    #[arg(long, global = true)]
    eps_line: Option<f64>,

    /// Rotation matching tolerance, degrees
    #[arg(long, global = true)]
    eps_rotation: Option<f64>,

    /// Vertex coincidence tolerance for figure checks
    #[arg(long, global = true)]
    eps_point: Option<f64>,

    /// Decimal digits kept when reading a turn amount as a fraction
    #[arg(long, global = true)]
    precision: Option<u32>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print an angle (degrees, arithmetic allowed) in canonical form
    Normalize {
        #[arg(allow_hyphen_values = true)]
        angle: String,
        /// Reduce as an undirected line angle, (-90, 90]
        #[arg(long)]
        line: bool,
    },
    /// Describe the line through the origin and a point, or with a slope
    Line {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true, conflicts_with = "slope")]
        point: Option<Vec2<f64>>,
        #[arg(long, value_parser = parse_amount, allow_hyphen_values = true)]
        slope: Option<f64>,
    },
    /// Reflect a point about the line through the origin and `--line`
    Reflect {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        line: Vec2<f64>,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        point: Vec2<f64>,
    },
    /// Rotate a point about the origin by `--angle` degrees
    Rotate {
        #[arg(long, value_parser = parse_amount, allow_hyphen_values = true)]
        angle: f64,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        point: Vec2<f64>,
    },
    /// Test typed rotation angles against a regular n-gon's rotations
    CheckRotation {
        #[arg(long)]
        n: usize,
        #[arg(required = true, allow_hyphen_values = true)]
        angles: Vec<String>,
    },
    /// Test clicked points (lines through the origin) against a regular n-gon's mirrors
    CheckLine {
        #[arg(long)]
        n: usize,
        #[arg(long = "point", required = true, allow_hyphen_values = true)]
        points: Vec<String>,
    },
    /// Rotation group generated by a decimal amount of turns
    Group {
        #[arg(long, value_parser = parse_amount, allow_hyphen_values = true)]
        turns: f64,
        /// Report which element (if any) rotates by this many degrees
        #[arg(long, value_parser = parse_amount, allow_hyphen_values = true)]
        angle: Option<f64>,
    },
    /// Apply one transform to a figure file
    #[command(group(ArgGroup::new("op").required(true).args(["reflect", "rotate", "translate"])))]
    Transform {
        #[arg(long)]
        figure: PathBuf,
        /// Mirror line through the origin and this point
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        reflect: Option<Vec2<f64>>,
        /// Rotation angle, degrees
        #[arg(long, value_parser = parse_amount, allow_hyphen_values = true)]
        rotate: Option<f64>,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        translate: Option<Vec2<f64>>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Emit a regular polygon figure
    Ngon {
        #[arg(long)]
        n: usize,
        #[arg(long, default_value_t = 10.0)]
        radius: f64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cmd = Cmd::parse();
    let cfg = load_cfg(
        cmd.config.as_deref(),
        CfgOverrides {
            eps_line: cmd.eps_line,
            eps_rotation: cmd.eps_rotation,
            eps_point: cmd.eps_point,
            precision: cmd.precision,
        },
    )?;
    let out = match cmd.action {
        Action::Normalize { angle, line } => normalize(&angle, line),
        Action::Line { point, slope } => line_info(point, slope),
        Action::Reflect { line, point } => reflect_point(line, point),
        Action::Rotate { angle, point } => rotate_point(angle, point),
        Action::CheckRotation { n, angles } => check_rotation(n, &angles, &cfg),
        Action::CheckLine { n, points } => check_line(n, &points, &cfg),
        Action::Group { turns, angle } => group(turns, angle, &cfg),
        Action::Transform {
            figure,
            reflect,
            rotate,
            translate,
            out,
        } => transform(&figure, reflect, rotate, translate, out.as_deref(), &cfg),
        Action::Ngon { n, radius, out } => ngon(n, radius, out.as_deref()),
    }?;
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn normalize(angle: &str, line: bool) -> Result<Value> {
    let deg = parse_amount(angle).map_err(anyhow::Error::msg)?;
    let canonical = if line {
        normalize_line_deg(deg)
    } else {
        normalize_deg(deg)
    };
    tracing::info!(input = angle, canonical, line, "normalize");
    Ok(json!({ "input": deg, "degrees": canonical }))
}

fn describe_line(l: &Line2) -> Value {
    let eq = l.equation();
    json!({
        "angle_deg": l.angle_deg(),
        "direction": [l.direction().x, l.direction().y],
        "normal": [l.normal().x, l.normal().y],
        "vertical": l.is_vertical(),
        "equation": { "x": eq.x, "y": eq.y, "text": eq.to_string() },
    })
}

fn line_info(point: Option<Vec2<f64>>, slope: Option<f64>) -> Result<Value> {
    let l = match (point, slope) {
        (Some(p), _) => Line2::through_point(p)?,
        (None, Some(m)) => Line2::from_slope(m),
        (None, None) => anyhow::bail!("pass --point x,y or --slope m"),
    };
    Ok(describe_line(&l))
}

fn reflect_point(line: Vec2<f64>, point: Vec2<f64>) -> Result<Value> {
    let l = Line2::through_point(line).context("mirror line")?;
    let q = reflect(l).transform_point(point);
    tracing::info!(line_deg = l.angle_deg(), "reflect");
    Ok(json!({ "line": describe_line(&l), "point": [q.x, q.y] }))
}

fn rotate_point(angle: f64, point: Vec2<f64>) -> Result<Value> {
    let r = Rotation::from_degrees(normalize_deg(angle));
    let q = r.transform_point(point);
    tracing::info!(angle_deg = r.angle_deg(), "rotate");
    Ok(json!({ "angle_deg": r.angle_deg(), "point": [q.x, q.y] }))
}

fn ensure_polygon(n: usize) -> Result<()> {
    if n < 3 {
        anyhow::bail!("--n must be at least 3, got {n}");
    }
    Ok(())
}

fn found_summary(found: usize, total: usize) -> Value {
    let mut display = found.to_string();
    if found == total {
        display.push_str(" = all");
    }
    json!({ "found": found, "total": total, "display": display })
}

fn check_rotation(n: usize, angles: &[String], cfg: &SymCfg) -> Result<Value> {
    ensure_polygon(n)?;
    let group = SymmetryGroup::of_regular_polygon(n);
    let known = regular_polygon_nontrivial_rotations_deg(n);
    let mut found = FoundSymmetries::new();
    let mut results = Vec::with_capacity(angles.len());
    for text in angles {
        // A malformed entry is reported and skipped; earlier finds are kept.
        let deg = match parse_amount(text) {
            Ok(v) => normalize_deg(v),
            Err(e) => {
                tracing::warn!(input = %text, error = %e, "ignoring angle");
                results.push(json!({ "input": text, "error": e }));
                continue;
            }
        };
        match find_rotation_match(deg, &known, cfg.eps_rotation_deg) {
            Some(i) => {
                let first_time = found.record_rotation(known[i], 0.0);
                results.push(json!({
                    "input": text,
                    "degrees": round_to(known[i], 2),
                    "symmetry": true,
                    "first_time": first_time,
                }));
            }
            None => results.push(json!({
                "input": text,
                "degrees": round_to(deg, 2),
                "symmetry": false,
            })),
        }
    }
    Ok(json!({
        "group": group.to_string(),
        "results": results,
        "nonzero_rotations": found_summary(found.len(), known.len()),
    }))
}

fn check_line(n: usize, points: &[String], cfg: &SymCfg) -> Result<Value> {
    ensure_polygon(n)?;
    let group = SymmetryGroup::of_regular_polygon(n);
    let known = regular_polygon_reflection_lines(n);
    let mut found = FoundSymmetries::new();
    let mut results = Vec::with_capacity(points.len());
    for text in points {
        let line = parse_point(text)
            .map_err(anyhow::Error::msg)
            .and_then(|p| Line2::through_point(p).map_err(anyhow::Error::from));
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::warn!(input = %text, error = %e, "ignoring point");
                results.push(json!({ "input": text, "error": e.to_string() }));
                continue;
            }
        };
        match find_line_match(&line, &known, cfg.eps_line_rad) {
            Some(i) => {
                let first_time = found.record_line(known[i], 0.0);
                results.push(json!({
                    "input": text,
                    "line": describe_line(&known[i]),
                    "symmetry": true,
                    "first_time": first_time,
                }));
            }
            None => results.push(json!({
                "input": text,
                "line": describe_line(&line),
                "symmetry": false,
            })),
        }
    }
    Ok(json!({
        "group": group.to_string(),
        "results": results,
        "lines": found_summary(found.len(), known.len()),
    }))
}

fn group(turns: f64, angle: Option<f64>, cfg: &SymCfg) -> Result<Value> {
    let Some(g) = RationalRotationGroup::from_turns(turns, cfg.fraction_precision)? else {
        tracing::info!(turns, "no rotation requested");
        return Ok(json!({ "turns": turns, "group": null }));
    };
    tracing::info!(turns, order = g.order(), "group");
    let mut out = json!({
        "turns": turns,
        "fraction": [g.numerator(), g.denominator()],
        "group": g.symmetry_group().to_string(),
        "order": g.order(),
        "angles_deg": g.angles_deg(),
    });
    if let Some(deg) = angle {
        out["angle_deg"] = json!(deg);
        out["element"] = json!(g.position_of_deg(deg, cfg.eps_rotation_deg));
    }
    Ok(out)
}

fn read_figure(path: &Path) -> Result<Shape> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let shape: Shape =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    shape
        .validate()
        .with_context(|| format!("checking {}", path.display()))?;
    Ok(shape)
}

fn write_figure(path: &Path, shape: &Shape, payload: Payload) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(shape)?)
        .with_context(|| format!("writing {}", path.display()))?;
    write_sidecar(path, payload)
}

fn transform(
    figure: &Path,
    reflect_through: Option<Vec2<f64>>,
    rotate_deg: Option<f64>,
    translate_by: Option<Vec2<f64>>,
    out: Option<&Path>,
    cfg: &SymCfg,
) -> Result<Value> {
    let shape = read_figure(figure)?;
    let (op, t): (Value, Box<dyn Transform2>) = match (reflect_through, rotate_deg, translate_by) {
        (Some(p), _, _) => {
            let l = Line2::through_point(p).context("mirror line")?;
            let t = Box::new(reflect(l)) as Box<dyn Transform2>;
            (json!({ "reflect": describe_line(&l) }), t)
        }
        (None, Some(deg), _) => {
            let deg = normalize_deg(deg);
            let t = Box::new(Rotation::from_degrees(deg)) as Box<dyn Transform2>;
            (json!({ "rotate_deg": deg }), t)
        }
        (None, None, Some(v)) => {
            let t = Box::new(translate(v)) as Box<dyn Transform2>;
            (json!({ "translate": [v.x, v.y] }), t)
        }
        (None, None, None) => anyhow::bail!("pass one of --reflect, --rotate, --translate"),
    };
    let moved = t.transform_shape(&shape);
    let symmetric = shape.is_invariant_under(t.as_ref(), cfg.eps_point);
    tracing::info!(vertices = shape.len(), symmetric, "transform");
    match out {
        Some(path) => {
            let params = json!({ "figure": figure.to_string_lossy(), "op": op });
            let prov = write_figure(path, &moved, Payload::new("transform", params))?;
            Ok(json!({
                "op": op,
                "symmetry": symmetric,
                "out": path.to_string_lossy(),
                "provenance": prov.to_string_lossy(),
            }))
        }
        None => Ok(json!({ "op": op, "symmetry": symmetric, "figure": moved })),
    }
}

fn ngon(n: usize, radius: f64, out: Option<&Path>) -> Result<Value> {
    let shape = Shape::regular_ngon(n, radius)?;
    let group = SymmetryGroup::of_regular_polygon(n).to_string();
    match out {
        Some(path) => {
            let params = json!({ "n": n, "radius": radius });
            let prov = write_figure(path, &shape, Payload::new("ngon", params))?;
            Ok(json!({
                "group": group,
                "out": path.to_string_lossy(),
                "provenance": prov.to_string_lossy(),
            }))
        }
        None => Ok(json!({ "group": group, "figure": shape })),
    }
}
