//! `--inspect <path>`: print the contents of a run export.

use std::path::Path;

use save::{read_export, RunExport};
use simulation::ascii_map::build_map;

pub fn run_inspect(path: &Path) -> Result<(), String> {
    let export = read_export(path).map_err(|e| format!("{}: {e}", path.display()))?;
    println!("{}", summarize(&export));
    println!("{}", build_map(&export.snapshot));
    Ok(())
}

fn summarize(export: &RunExport) -> String {
    let mut lines = vec![
        format!("seed {}  cycle {}", export.seed, export.cycle),
        format!("state: {}  turn {}", export.state, export.turn),
        format!("fingerprint: {:016x}", export.fingerprint),
    ];
    for result in [&export.control, &export.intervention].into_iter().flatten() {
        lines.push(format!(
            "{}: {} turns, score {}",
            result.name.as_str(),
            result.turns_run,
            result.final_score
        ));
    }
    if let Some(card) = export.scorecard() {
        lines.push(format!(
            "reduction {} ({})  verdict {}",
            card.reduction,
            card.percent_label(),
            card.verdict
        ));
    }
    lines.join("\n")
}
