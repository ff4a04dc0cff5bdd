use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use hs_engine::{
    Encounter, EncounterEvent, EncounterOutcome, EventKind, SimConfig, Simulation,
    SimulationResults,
};

/// Arguments for the `run` subcommand.
pub struct RunArgs {
    /// Directory of PC JSON files.
    pub pcs: PathBuf,
    /// Directory of NPC JSON files.
    pub npcs: PathBuf,
    /// Optional JSON config file.
    pub config: Option<PathBuf>,
    /// Override for the number of fights.
    pub fights: Option<u64>,
    /// Override for the round cap.
    pub max_rounds: Option<u32>,
    /// Override for the master seed.
    pub seed: Option<u64>,
    /// Replay event logs.
    pub verbose: bool,
    /// Skip the detailed breakdown tables.
    pub summary_only: bool,
}

pub fn run(args: RunArgs) -> Result<(), String> {
    let (pcs, npcs) = super::load_rosters(&args.pcs, &args.npcs);

    if pcs.is_empty() || npcs.is_empty() {
        println!("  No PCs or NPCs found. Nothing to simulate.");
        return Ok(());
    }

    let mut config = load_config(args.config.as_deref());
    if let Some(fights) = args.fights {
        config.number_of_fights = fights;
    }
    if let Some(rounds) = args.max_rounds {
        config.max_rounds_per_fight = rounds;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if args.verbose {
        config.verbose_output = true;
    }
    if args.summary_only {
        config.show_detailed_results = false;
    }

    println!(
        "  {} {} PCs vs {} NPCs {}",
        "Simulation".bold(),
        pcs.len(),
        npcs.len(),
        format!(
            "({} fights, max {} rounds, seed={})",
            config.number_of_fights, config.max_rounds_per_fight, config.seed
        )
        .dimmed()
    );
    println!();

    let simulation = Simulation::new(pcs, npcs, config.clone());

    if config.number_of_fights <= 1 {
        let (outcome, encounter) = simulation.run_single();
        if config.verbose_output {
            replay_log(encounter.log());
        }
        print_single_fight(&outcome, &encounter);
    } else {
        let results = run_batch(&simulation, &config);
        print_summary(&results);
        if config.show_detailed_results {
            print_details(&results);
        }
    }

    Ok(())
}

/// Fights between progress lines during a batch run.
const PROGRESS_INTERVAL: u64 = 1000;

/// Run all trials, replaying each fight's log when verbose and
/// reporting progress on stderr during long batches.
fn run_batch(simulation: &Simulation, config: &SimConfig) -> SimulationResults {
    let mut results = SimulationResults::default();
    for trial in 0..config.number_of_fights {
        if config.verbose_output {
            println!("  {}", format!("--- fight {} ---", trial + 1).dimmed());
        }
        let (outcome, encounter) = simulation.run_trial(trial);
        if config.verbose_output {
            replay_log(encounter.log());
        }
        results.record_fight(&outcome, encounter.stats());

        let done = trial + 1;
        if done % PROGRESS_INTERVAL == 0 && done < config.number_of_fights {
            eprintln!("  {}", format!("{done} fights complete").dimmed());
        }
    }
    if config.verbose_output {
        println!();
    }
    results
}

/// Load the config file, falling back to defaults with a warning when
/// it is absent or malformed.
fn load_config(path: Option<&Path>) -> SimConfig {
    let Some(path) = path else {
        return SimConfig::default();
    };

    let parsed = fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|content| serde_json::from_str(&content).map_err(|e| e.to_string()));

    match parsed {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "{} could not load config {}: {e}; using defaults",
                "warning:".yellow().bold(),
                path.display()
            );
            SimConfig::default()
        }
    }
}

fn replay_log(log: &[EncounterEvent]) {
    for event in log {
        let label = format!("[round {:>2}]", event.round).dimmed();
        println!("  {label} {}", colorize_event(event));
    }
}

fn colorize_event(event: &EncounterEvent) -> colored::ColoredString {
    let text = event.to_string();
    match event.kind {
        EventKind::PcHit { .. } => text.green(),
        EventKind::NpcHit { .. } => text.red(),
        EventKind::MinorFallout { .. } => text.yellow(),
        EventKind::MajorFallout { .. } => text.yellow().bold(),
        EventKind::PcDied { .. } => text.red().bold(),
        EventKind::NpcDefeated { .. } => text.green().bold(),
        EventKind::PcMissed { .. } | EventKind::NpcMissed { .. } => text.dimmed(),
    }
}

fn print_single_fight(outcome: &EncounterOutcome, encounter: &Encounter) {
    let stats = encounter.stats();
    println!("  {}", "Combat Results".bold().underline());
    println!("  Rounds fought: {}", outcome.rounds);
    println!("  PCs lost: {}", stats.pc_defeats);
    println!("  NPCs defeated: {}", stats.npc_defeats);
    println!("  Damage to PCs: {}", stats.total_damage_to_pcs);
    println!("  Damage to NPCs: {}", stats.total_damage_to_npcs);
    println!();

    if outcome.pc_won {
        println!("  {}", "PC VICTORY".green().bold());
    } else if outcome.npc_won {
        println!("  {}", "NPC VICTORY".red().bold());
    } else {
        println!("  {}", "DRAW".yellow().bold());
    }
    println!();

    println!("  Surviving PCs: {}", encounter.surviving_pcs().count());
    for pc in encounter.surviving_pcs() {
        println!("    {}: {}", pc.name, pc.resistance);
    }
    println!("  Surviving NPCs: {}", encounter.surviving_npcs().count());
    for npc in encounter.surviving_npcs() {
        println!("    {npc}");
    }
}

fn print_summary(results: &SimulationResults) {
    println!("  {}", "Simulation Summary".bold().underline());
    println!("  Total fights: {}", results.total_fights);
    println!(
        "  PC victories: {} ({:.1}%)",
        results.pc_victories,
        percent(results.pc_victories, results.total_fights)
    );
    println!(
        "  NPC victories: {} ({:.1}%)",
        results.npc_victories,
        percent(results.npc_victories, results.total_fights)
    );
    println!(
        "  Draws: {} ({:.1}%)",
        results.draws,
        percent(results.draws, results.total_fights)
    );
    println!("  Average rounds per fight: {:.1}", results.average_rounds);
    println!();
}

fn print_details(results: &SimulationResults) {
    println!("  {}", "PC Statistics".bold().underline());
    println!("{}", attack_table(&results.pc_stats, "PC"));
    println!();

    println!("  {}", "PC Damage Taken".bold().underline());
    println!("{}", damage_table(results));
    println!();

    println!("  {}", "PC Fallouts".bold().underline());
    println!("{}", fallout_table(results));
    println!();

    println!("  {}", "NPC Statistics".bold().underline());
    println!("{}", attack_table(&results.npc_stats, "NPC"));
    println!();
}

fn attack_table(
    stats: &std::collections::BTreeMap<String, hs_engine::AttackTally>,
    who: &str,
) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        who,
        "Attacks",
        "Hits",
        "Hit rate",
        "Avg damage",
        "Total damage",
    ]);
    for (name, tally) in stats {
        table.add_row(vec![
            name.clone(),
            tally.attacks.to_string(),
            tally.hits.to_string(),
            format!("{:.1}%", tally.hit_rate()),
            format!("{:.2}", tally.average_damage()),
            tally.damage.to_string(),
        ]);
    }
    table
}

fn damage_table(results: &SimulationResults) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "PC", "Blood", "Echo", "Mind", "Fortune", "Supplies", "Total",
    ]);
    for (name, taken) in &results.pc_damage_taken {
        let mut row = vec![name.clone()];
        for kind in hs_core::ResistanceType::ALL {
            row.push(taken.get(kind).to_string());
        }
        row.push(taken.total.to_string());
        table.add_row(row);
    }
    table
}

fn fallout_table(results: &SimulationResults) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["PC", "Minor", "Major", "Deaths"]);
    for (name, tally) in &results.pc_fallouts {
        table.add_row(vec![
            name.clone(),
            tally.minor.to_string(),
            tally.major.to_string(),
            tally.deaths.to_string(),
        ]);
    }
    table
}

fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
