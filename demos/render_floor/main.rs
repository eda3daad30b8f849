//! Prints the wall segments and label boxes of a floor as SVG.
//!
//! Usage:
//! ```text
//! cargo run --example render_floor                           # bundled test floor
//! cargo run --example render_floor -- path/to/floor.json
//! RUST_LOG=roomplan=debug cargo run --example render_floor   # per-room logs
//! ```

use std::error::Error;
use std::fmt::Write as _;

use roomplan::floor::{Floor, FloorPlan};
use roomplan::operations::{RenderCache, RenderFloor};

const DEFAULT_FLOOR: &str = include_str!("../../tests/fixtures/second_floor.json");

fn main() -> Result<(), Box<dyn Error>> {
    // Default: WARN for everything, INFO for roomplan.
    // Override with RUST_LOG env var (e.g. RUST_LOG=roomplan=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("roomplan=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let json = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEFAULT_FLOOR.to_owned(),
    };
    let plan = FloorPlan::from_floor(Floor::from_json(&json)?)?;
    for id in plan.validate() {
        eprintln!("warning: room {} has degenerate shapes", plan.room(id)?.id);
    }

    let mut cache = RenderCache::new();
    let renders = RenderFloor::new(&plan).execute_cached(&mut cache);

    let (width, height) = plan
        .blueprint
        .as_ref()
        .map_or((0.0, 0.0), |b| (b.width, b.height));
    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}">"#
    )?;

    for render in &renders {
        let room = plan.room(render.room)?;
        writeln!(svg, r#"  <g id="{}">"#, escape_xml(&room.id))?;
        for seg in &render.segments {
            let (a, b) = (seg.start(), seg.end());
            writeln!(
                svg,
                r#"    <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black"/>"#,
                a.x, a.y, b.x, b.y
            )?;
        }
        let label = &render.label;
        writeln!(
            svg,
            r#"    <text x="{}" y="{}" font-size="{:.2}" text-anchor="middle">{}</text>"#,
            label.center_x,
            label.center_y,
            label.layout.font_size,
            escape_xml(&room.location)
        )?;
        svg.push_str("  </g>\n");
    }
    svg.push_str("</svg>");

    println!("{svg}");
    eprintln!("{}", serde_json::to_string_pretty(&renders)?);
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_markup_is_escaped() {
        assert_eq!(
            escape_xml(r#"Lab <A & "B">"#),
            "Lab &lt;A &amp; &quot;B&quot;&gt;"
        );
        assert_eq!(escape_xml("Sala d'Ana"), "Sala d&apos;Ana");
    }
}
