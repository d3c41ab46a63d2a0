//! Plan command - show the page split for a capture size

use crate::context::load_config;
use crate::output::print_json;
use anyhow::Result;
use colored::Colorize;
use minuta_core::pagination::{plan_pages, PagePlan};
use std::path::Path;

pub fn run(width: u32, height: u32, json: bool, config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let page = config.page.page_size()?;
    let plan = plan_pages(width, height, page)?;

    if json {
        print_json(&serde_json::to_string_pretty(&plan)?)?;
    } else {
        render_human(&plan);
    }
    Ok(())
}

fn render_human(plan: &PagePlan) {
    println!(
        "{} {}x{} px on {}x{} mm pages: {:.1} mm tall, {} page(s)",
        "→".cyan(),
        plan.source_width,
        plan.source_height,
        plan.page.width,
        plan.page.height,
        plan.scaled_height,
        plan.page_count()
    );
    for (slice, band) in plan.slices.iter().zip(plan.pixel_bands()) {
        println!(
            "  page {}: {:.1}..{:.1} mm  (rows {}..{})",
            slice.index + 1,
            slice.source_y_offset,
            slice.source_y_offset + slice.source_height,
            band.y,
            band.y + band.height
        );
    }
}
