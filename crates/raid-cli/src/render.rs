//! Plain-text rendering of metrics, layouts, and explanations.

use std::fmt::Write;

use raid_model::layout::block::{Block, BlockKind};
use raid_model::layout::Layout;
use raid_model::level::RaidLevel;
use raid_model::metrics::Metrics;

use crate::explain::Explanation;

const CELL_WIDTH: usize = 8;

#[must_use]
pub fn metrics_table(level: RaidLevel, metrics: &Metrics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{level}: {}", metrics.description);
    let _ = writeln!(out, "total capacity:      {} GB", metrics.total_capacity);
    let _ = writeln!(out, "usable capacity:     {} GB", metrics.usable_capacity);
    let _ = writeln!(
        out,
        "redundancy overhead: {} GB",
        metrics.redundancy_capacity
    );
    let _ = writeln!(out, "efficiency:          {:.1}%", metrics.efficiency * 100.0);
    let _ = writeln!(
        out,
        "fault tolerance:     {} disk(s)",
        metrics.fault_tolerance
    );
    let _ = writeln!(out, "read speed:          {}", metrics.read_speed);
    let _ = writeln!(out, "write speed:         {}", metrics.write_speed);
    out
}

/// Renders the layout as a grid with one column per disk and one row per
/// stripe. Cells without a block (an unpaired trailing disk) show `-`.
#[must_use]
pub fn layout_grid(level: RaidLevel, layout: &Layout) -> String {
    let disks = layout.disk_count();
    let stripes = layout.stripe_count();

    let mut out = String::new();
    let _ = writeln!(out, "{level} layout: {disks} disks x {stripes} stripes");

    let _ = write!(out, "{:<9}", "");
    for disk in 0..disks {
        let _ = write!(out, "{:>CELL_WIDTH$}", format!("disk {disk}"));
    }
    out.push('\n');

    for stripe in 0..stripes {
        let _ = write!(out, "{:<9}", format!("stripe {stripe}"));
        for disk in &layout.disks {
            let cell = disk.stripes[stripe]
                .blocks
                .first()
                .map_or_else(|| "-".to_string(), cell_label);
            let _ = write!(out, "{cell:>CELL_WIDTH$}");
        }
        out.push('\n');
    }
    out
}

#[must_use]
pub fn explanation_text(explanation: &Explanation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", explanation.title);
    let _ = writeln!(out, "{}", "-".repeat(explanation.title.len()));
    let _ = writeln!(out, "{}", explanation.description);
    if !explanation.pros_cons.is_empty() {
        let _ = writeln!(out);
        for entry in &explanation.pros_cons {
            let _ = writeln!(out, "{entry}");
        }
    }
    out
}

fn cell_label(block: &Block) -> String {
    match block.kind {
        BlockKind::Data => format!("D{}", block.id),
        // RAID 4/5 parity ids are bare stripe indices; RAID 6 ids already
        // carry their P/Q prefix.
        BlockKind::Parity => {
            if block.id.starts_with(|c: char| c.is_ascii_alphabetic()) {
                block.id.clone()
            } else {
                format!("P{}", block.id)
            }
        }
        BlockKind::Mirror => block.id.clone(),
        BlockKind::Empty => "-".to_string(),
    }
}
