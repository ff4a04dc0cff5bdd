pub mod roster;
pub mod run;

use std::path::Path;

use colored::Colorize;

use hs_core::{LoadOutcome, Npc, Pc, load_npcs, load_pcs};

/// Load both rosters, warning on stderr about any skipped files.
fn load_rosters(pc_dir: &Path, npc_dir: &Path) -> (Vec<Pc>, Vec<Npc>) {
    let pcs = warn_skipped(load_pcs(pc_dir));
    let npcs = warn_skipped(load_npcs(npc_dir));
    (pcs, npcs)
}

/// Report skipped files and unwrap the records that did load.
fn warn_skipped<T>(outcome: LoadOutcome<T>) -> Vec<T> {
    for skipped in &outcome.skipped {
        eprintln!("{} skipped {skipped}", "warning:".yellow().bold());
    }
    outcome.records
}
