use anyhow::{anyhow, Context, Result};

use folio_core::nav::{detect_active_section, NavItem};
use folio_core::viewport::{is_compact, SectionBounds, StaticViewport, ViewportMetrics};
use folio_core::AppConfig;

use super::load_content;

pub fn run(
    config: &AppConfig,
    scroll_y: f64,
    viewport_height: f64,
    width: f64,
    sections: &[String],
) -> Result<()> {
    let content = load_content(config)?;
    let viewport = if sections.is_empty() {
        // One viewport per section, as the preview lays them out at minimum
        StaticViewport::stacked(
            width,
            viewport_height,
            content.sections().map(|s| (s.slice_type(), viewport_height)),
        )
    } else {
        let bounds = sections
            .iter()
            .map(|s| parse_section(s))
            .collect::<Result<Vec<_>>>()?;
        StaticViewport::new(width, viewport_height).with_sections(bounds)
    }
    .scrolled_to(scroll_y);

    let active = detect_active_section(
        viewport.scroll_y(),
        viewport.viewport_height(),
        &viewport.sections(),
    );
    let compact = is_compact(width, config.tracker.nav_breakpoint);

    println!("Probe: {:.1}", scroll_y + viewport_height / 3.0);
    println!("Active: {}", active);
    println!("Layout: {}", if compact { "tab bar" } else { "navbar" });
    println!();

    let items = content.nav_items();
    for item in NavItem::visible(&items, compact) {
        let marker = if item.is_active(active) { "▸" } else { " " };
        println!("  {} {}", marker, item.label);
    }

    Ok(())
}

/// `tag:top:height`
fn parse_section(raw: &str) -> Result<SectionBounds> {
    let mut parts = raw.rsplitn(3, ':');
    let (Some(height), Some(top), Some(tag)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(anyhow!("Section must look like tag:top:height, got {:?}", raw));
    };
    let top: f64 = top
        .parse()
        .with_context(|| format!("Invalid top in section {:?}", raw))?;
    let height: f64 = height
        .parse()
        .with_context(|| format!("Invalid height in section {:?}", raw))?;
    Ok(SectionBounds::new(tag, top, height))
}
