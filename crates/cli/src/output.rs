//! SVG emission and per-design JSON records.
//!
//! Each design becomes `<out>/<seed>_<size>.svg` — an A4 page with the loop
//! as a single closed path — plus `<out>/<seed>_<size>.json`, a record of the
//! parameters (most importantly the seed actually used) so a design can be
//! regenerated later.

use anyhow::{Context, Result};
use meander::screen::{trace_loop, Screen};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Parameters behind one written design.
#[derive(Debug, Serialize)]
pub struct DesignRecord {
    pub seed: u64,
    pub size: String,
    pub steps: usize,
    pub svg: String,
}

/// Write the SVG and its JSON record for one finished design.
pub fn write_design(
    out_dir: &Path,
    seed: u64,
    size: &str,
    steps: usize,
    screen: &Screen,
) -> Result<DesignRecord> {
    let base = out_dir.join(format!("{seed}_{size}"));
    let svg_path = base.with_extension("svg");
    let svg = render_svg(screen)?;
    fs::write(&svg_path, svg).with_context(|| format!("writing {}", svg_path.display()))?;

    let record = DesignRecord {
        seed,
        size: size.to_string(),
        steps,
        svg: svg_path.display().to_string(),
    };
    let json_path = base.with_extension("json");
    fs::write(&json_path, serde_json::to_vec_pretty(&record)?)
        .with_context(|| format!("writing {}", json_path.display()))?;
    Ok(record)
}

/// Render the drawn loop as one closed SVG path on an A4 page, 2mm per screen
/// unit, in document coordinates (no transform).
fn render_svg(screen: &Screen) -> Result<String> {
    let tour =
        trace_loop(screen).context("drawn cells do not form a single loop; grid is corrupt")?;
    let mut d = String::from("M");
    for (r, c) in &tour {
        write!(d, " {} {}", c * 2, r * 2)?;
    }
    d.push_str(" Z");
    Ok(format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" baseProfile="tiny" version="1.2" "#,
            r#"width="210mm" height="297mm" viewBox="0 0 210 297">"#,
            "\n",
            r#"<path d="{}" fill="none" stroke="black" stroke-width="0.2"/>"#,
            "\n</svg>\n"
        ),
        d
    ))
}
