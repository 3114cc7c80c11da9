use std::env;
use std::process;

use anyhow::Result;
use lumidex_client::{DEFAULT_VERSION_GROUP, DexClient, DexEntry, Type};

#[tokio::main]
async fn main() -> Result<()> {
    let name = env::args().nth(1).unwrap_or_else(|| "gengar".to_string());

    let client = DexClient::new();
    println!("Looking up {}...", name);

    let entry = match client.lookup(&name).await {
        Ok(entry) => entry,
        Err(_) => {
            println!("Pokemon not found.");
            process::exit(1);
        }
    };

    print_entry(&entry);
    Ok(())
}

fn print_entry(entry: &DexEntry) {
    println!("\n┌─ #{} {}", entry.id, entry.name);
    if let Some(sprite) = &entry.sprite {
        println!("│  sprite: {}", sprite);
    }
    println!("│  types: {}", join_types(&entry.types));
    println!("│  weaknesses: {}", join_types(&entry.weaknesses));
    println!("│");

    println!("│  Evolution line");
    for stage in &entry.evolution {
        let mut notes = Vec::new();
        if let Some(level) = stage.min_level {
            notes.push(format!("lvl {}", level));
        }
        if stage.by_trade() {
            notes.push("trade".to_string());
        }
        if let Some(item) = &stage.item {
            notes.push(item.clone());
        }

        if notes.is_empty() {
            println!("│  • {}", stage.name);
        } else {
            println!("│  • {} ({})", stage.name, notes.join(", "));
        }
    }
    println!("│");

    println!("│  Best moveset ({})", DEFAULT_VERSION_GROUP);
    for mv in &entry.best_moves {
        println!("│  • {}", mv);
    }
    println!("│");

    println!("│  How to beat it");
    println!("│  {}", entry.counter_tips);
    println!("│");

    println!("│  Full moveset");
    println!("│  {}", entry.moves.join(", "));
    println!("└─ {} moves", entry.moves.len());
}

fn join_types(types: &[Type]) -> String {
    types
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
