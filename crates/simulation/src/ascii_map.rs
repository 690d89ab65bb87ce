//! ASCII rendering of a [`GridSnapshot`] for terminals and agent logs.
//!
//! One character per cell, rows are `z`, columns are `x`. Maps are built
//! on demand from a snapshot and never touch engine state.

use crate::world_snapshot::{GridSnapshot, SnapshotCell};

// -----------------------------------------------------------------------
// Character encoding
// -----------------------------------------------------------------------

/// Convert a single snapshot cell to its ASCII character.
///
/// Priority: Intervention > visible intensity > highway > empty.
pub fn cell_to_char(cell: &SnapshotCell) -> char {
    if cell.has_intervention {
        return '@';
    }

    if cell.is_visible() {
        return intensity_char(cell.feral_intensity);
    }

    if cell.is_highway {
        return '=';
    }

    '.'
}

fn intensity_char(intensity: f32) -> char {
    if intensity > 0.8 {
        '#'
    } else if intensity > 0.5 {
        '*'
    } else if intensity > 0.3 {
        '+'
    } else {
        ':'
    }
}

// -----------------------------------------------------------------------
// Full map
// -----------------------------------------------------------------------

/// Build the full-resolution map with coordinate headers and a legend.
pub fn build_map(snapshot: &GridSnapshot) -> String {
    if snapshot.cells.is_empty() {
        return "(empty grid)".to_string();
    }

    let width = snapshot.width as usize;
    let mut lines: Vec<String> = Vec::with_capacity(snapshot.height as usize + 8);

    lines.push(format!(
        "turn {}  state: {}  live score: {}",
        snapshot.turn,
        snapshot.state,
        snapshot.live_score()
    ));
    lines.push(build_col_header(width));

    for (z, row) in snapshot.cells.chunks(width).enumerate() {
        let mut line = format!("{z:>4} | ");
        line.extend(row.iter().map(cell_to_char));
        lines.push(line);
    }

    lines.push(String::new());
    append_legend(&mut lines);

    lines.join("\n")
}

fn build_col_header(width: usize) -> String {
    let margin_str = "       "; // matches row label width "XXXX | "
    let interval = if width > 40 { 10 } else { 5 };

    let mut header = String::from(margin_str);
    let mut col = 0;
    while col < width {
        if col.is_multiple_of(interval) {
            let label = format!("{col}");
            header.push_str(&label);
            col += label.len();
        } else {
            header.push(' ');
            col += 1;
        }
    }
    header.trim_end().to_string()
}

fn append_legend(lines: &mut Vec<String>) {
    lines.push("Legend:".to_string());
    lines.push("  .=Quiet  ==Highway  @=Intervention".to_string());
    lines.push("  :=0.1-0.3  +=0.3-0.5  *=0.5-0.8  #=above 0.8".to_string());
}
