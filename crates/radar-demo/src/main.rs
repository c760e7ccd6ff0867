// File: crates/radar-demo/src/main.rs
// Summary: Demo loads radar data (JSON or CSV), lays out the chart and writes an SVG.

use anyhow::{Context, Result};
use radar_core::{ChartInput, ConfigPatch, DataPoint, RadarChart, RadarLayout, Rgba, Series};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let raw = args.next().unwrap_or_else(|| "skills.json".to_string());
    let config_path = args.next();

    let path = PathBuf::from(&raw);
    if !path.exists() {
        anyhow::bail!("file not found: {}", path.display());
    }
    println!("Using input file: {}", path.display());

    let input = load_input(&path).with_context(|| format!("failed to load '{}'", path.display()))?;
    if input.is_empty() {
        anyhow::bail!("no data loaded from {}", path.display());
    }
    let patch = match config_path {
        Some(p) => Some(load_patch(Path::new(&p))?),
        None => None,
    };

    let chart = RadarChart::new(input, patch.as_ref());
    if let Err(e) = chart.config.validate() {
        log::warn!("configuration problem: {e}");
    }
    println!("Loaded {} series", chart.series.len());
    if let Some(first) = chart.series.first() {
        println!("Axes: {}", first.axes().collect::<Vec<_>>().join(", "));
    }

    let layout = chart.layout(radar_core::types::WIDTH, radar_core::types::HEIGHT);

    // Hover check near the first plotted vertex
    if let Some(p) = layout.points.first() {
        match layout.hit(p.x + 3.0, p.y + 4.0) {
            Some(hit) => println!(
                "Nearest to ({:.1}, {:.1}): {} = {:.2} [{}]",
                p.x + 3.0,
                p.y + 4.0,
                hit.data_point.axis,
                hit.data_point.value,
                hit.series.map(|s| s.name.as_str()).unwrap_or("?")
            ),
            None => println!("No point within hover radius"),
        }
    }

    let out = out_name(&path)?;
    std::fs::write(&out, render_svg(&chart, &layout)).with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn load_input(path: &Path) -> Result<ChartInput> {
    let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase()).unwrap_or_default();
    match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
        "csv" => load_csv(path),
        other => anyhow::bail!("unsupported input extension '{other}' (expected .json or .csv)"),
    }
}

fn load_patch(path: &Path) -> Result<ConfigPatch> {
    let text = std::fs::read_to_string(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

/// Load rows of `[series,]axis,value[,description]`. Without a series column the
/// rows form one flat list of points.
fn load_csv(path: &Path) -> Result<ChartInput> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    log::debug!("headers: {:?}", headers);
    let idx = |want: &str| headers.iter().position(|h| h == want);

    let i_axis = idx("axis").context("missing 'axis' column")?;
    let i_value = idx("value").context("missing 'value' column")?;
    let i_series = idx("series");
    let i_desc = idx("description");

    let mut series: Vec<Series> = Vec::new();
    let mut flat: Vec<DataPoint> = Vec::new();

    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let axis = rec.get(i_axis).unwrap_or("").trim();
        let Some(value) = rec.get(i_value).and_then(|s| s.trim().parse::<f64>().ok()) else {
            log::warn!("row {}: unparseable value, skipped", line + 1);
            continue;
        };
        let mut point = DataPoint::new(axis, value);
        if let Some(d) = i_desc.and_then(|i| rec.get(i)).filter(|d| !d.trim().is_empty()) {
            point = point.with_description(d.trim());
        }

        match i_series.and_then(|i| rec.get(i)).map(str::trim) {
            Some(name) => match series.iter_mut().find(|s| s.name == name) {
                Some(s) => s.data.push(point),
                None => series.push(Series::new(name, vec![point])),
            },
            None => flat.push(point),
        }
    }

    Ok(if i_series.is_some() { ChartInput::Series(series) } else { ChartInput::Points(flat) })
}

/// Produce output file name like target/out/radar_<stem>.svg
fn out_name(input: &Path) -> Result<PathBuf> {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).with_context(|| format!("creating {}", out.display()))?;
    out.push(format!("radar_{stem}.svg"));
    Ok(out)
}

/// Fill attribute(s) for a series area: an `rgba(...)` color when the series
/// color is hex, otherwise the raw color with a separate `fill-opacity`.
fn area_fill(color: &str, opacity: f64) -> String {
    match Rgba::from_hex(color) {
        Ok(c) => format!(r#"fill="{}""#, c.with_opacity(opacity).to_css()),
        Err(e) => {
            log::warn!("series color {color:?}: {e}; using fill-opacity");
            format!(r#"fill="{color}" fill-opacity="{opacity}""#)
        }
    }
}

fn render_svg(chart: &RadarChart, layout: &RadarLayout<'_>) -> String {
    let cfg = &chart.config;
    let d = &layout.dimensions;
    let (w, h) = (d.width + cfg.margin.hsum(), d.height + cfg.margin.vsum());
    let (cx, cy) = (cfg.margin.left + d.center_x, cfg.margin.top + d.center_y);

    let mut s = String::new();
    let _ = writeln!(s, r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#);
    let _ = writeln!(s, r#"<g transform="translate({cx},{cy})" font-family="sans-serif" font-size="11">"#);

    for ring in &layout.levels {
        let _ = writeln!(s, r##"<circle r="{:.2}" fill="none" stroke="#cccccc"/>"##, ring.radius);
        if cfg.show_level_labels {
            let _ = writeln!(s, r##"<text x="4" y="{:.2}" fill="#888888">{}</text>"##, -ring.radius, ring.value);
        }
    }
    for spoke in &layout.spokes {
        if cfg.show_axis_lines {
            let _ = writeln!(s, r##"<line x1="0" y1="0" x2="{:.2}" y2="{:.2}" stroke="#cccccc"/>"##, spoke.end.x, spoke.end.y);
        }
        if cfg.show_axis_labels {
            let _ = writeln!(
                s,
                r#"<text x="{:.2}" y="{:.2}" text-anchor="middle">{}</text>"#,
                spoke.label_anchor.x,
                spoke.label_anchor.y,
                escape(spoke.label)
            );
        }
    }
    for shape in &layout.shapes {
        if let Some(area) = &shape.area_path {
            let _ = writeln!(s, r#"<path d="{area}" {}/>"#, area_fill(shape.color, shape.opacity));
        }
        if let Some(line) = &shape.line_path {
            let _ = writeln!(s, r#"<path d="{line}" fill="none" stroke="{}" stroke-width="{}"/>"#, shape.color, cfg.stroke_width);
        }
    }
    s.push_str("</g>\n</svg>\n");
    s
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
