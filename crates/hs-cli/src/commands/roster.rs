use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(pc_dir: &Path, npc_dir: &Path) -> Result<(), String> {
    let (pcs, npcs) = super::load_rosters(pc_dir, npc_dir);

    println!("  {} ({})", "Player Characters".bold().underline(), pcs.len());
    if pcs.is_empty() {
        println!("  {}", "(none)".dimmed());
    } else {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec![
            "Name", "Class", "Calling", "Weapon", "Abilities", "Domains",
        ]);
        for pc in &pcs {
            table.add_row(vec![
                pc.name.clone(),
                pc.class.clone(),
                pc.calling.clone(),
                format!("d{}", pc.weapon),
                join(pc.abilities.iter()),
                join(pc.domains.iter()),
            ]);
        }
        println!("{table}");
    }
    println!();

    println!("  {} ({})", "NPCs".bold().underline(), npcs.len());
    if npcs.is_empty() {
        println!("  {}", "(none)".dimmed());
    } else {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec![
            "Name",
            "Weapon",
            "Resistance",
            "Protection",
            "Domains",
        ]);
        for npc in &npcs {
            table.add_row(vec![
                npc.name.clone(),
                format!("d{}", npc.weapon),
                npc.resistance.to_string(),
                npc.protection.to_string(),
                join(npc.domains.iter()),
            ]);
        }
        println!("{table}");
    }

    Ok(())
}

/// Join displayable items with commas, or a dash when empty.
fn join<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> String {
    let joined: Vec<String> = items.map(|item| item.to_string()).collect();
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined.join(", ")
    }
}
