//! Parsing of user-typed values and tolerance configuration.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use planesym::{expr, SymCfg, Vec2};

/// Evaluate a typed amount (`"30"`, `"360/7"`, `"-pi/4"`).
pub fn parse_amount(s: &str) -> Result<f64, String> {
    expr::eval(s).map_err(|e| format!("{s:?}: {e}"))
}

/// Parse `"x,y"`; each component may be an arithmetic expression.
pub fn parse_point(s: &str) -> Result<Vec2<f64>, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got {s:?}"))?;
    Ok(Vec2::new(parse_amount(x)?, parse_amount(y)?))
}

/// Tolerance overrides collected from the command line.
#[derive(Clone, Copy, Debug, Default)]
pub struct CfgOverrides {
    pub eps_line: Option<f64>,
    pub eps_rotation: Option<f64>,
    pub eps_point: Option<f64>,
    pub precision: Option<u32>,
}

/// Defaults, then the JSON file (if any), then flag overrides.
pub fn load_cfg(path: Option<&Path>, over: CfgOverrides) -> Result<SymCfg> {
    let mut cfg = match path {
        Some(p) => {
            let raw =
                fs::read_to_string(p).with_context(|| format!("reading config {}", p.display()))?;
            serde_json::from_str::<SymCfg>(&raw)
                .with_context(|| format!("parsing config {}", p.display()))?
        }
        None => SymCfg::default(),
    };
    if let Some(v) = over.eps_line {
        cfg.eps_line_rad = v;
    }
    if let Some(v) = over.eps_rotation {
        cfg.eps_rotation_deg = v;
    }
    if let Some(v) = over.eps_point {
        cfg.eps_point = v;
    }
    if let Some(v) = over.precision {
        cfg.fraction_precision = v;
    }
    for (name, v) in [
        ("eps_line_rad", cfg.eps_line_rad),
        ("eps_rotation_deg", cfg.eps_rotation_deg),
        ("eps_point", cfg.eps_point),
    ] {
        if !v.is_finite() || v < 0.0 {
            bail!("{name} must be a non-negative number, got {v}");
        }
    }
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn points_accept_expressions() {
        assert_eq!(parse_point("1,-2").unwrap(), Vec2::new(1.0, -2.0));
        assert_eq!(parse_point(" 3/2 , 2*2 ").unwrap(), Vec2::new(1.5, 4.0));
        assert!(parse_point("1").is_err());
        assert!(parse_point("1,x").is_err());
    }

    #[test]
    fn cfg_layers_file_then_flags() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        fs::write(&path, r#"{"eps_rotation_deg": 0.5, "fraction_precision": 3}"#).unwrap();
        let cfg = load_cfg(
            Some(&path),
            CfgOverrides {
                precision: Some(4),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(cfg.eps_rotation_deg, 0.5);
        assert_eq!(cfg.fraction_precision, 4);
        assert_eq!(cfg.eps_line_rad, SymCfg::default().eps_line_rad);
    }

    #[test]
    fn cfg_rejects_negative_eps() {
        let err = load_cfg(
            None,
            CfgOverrides {
                eps_line: Some(-1.0),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("eps_line_rad"));
    }

    #[test]
    fn cfg_missing_file_reports_path() {
        let err = load_cfg(Some(Path::new("/nonexistent/cfg.json")), CfgOverrides::default())
            .unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/cfg.json"));
    }
}
