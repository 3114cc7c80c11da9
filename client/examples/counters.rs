use std::env;
use std::process;

use anyhow::Result;
use lumidex_client::DexClient;

#[tokio::main]
async fn main() -> Result<()> {
    let name = env::args().nth(1).unwrap_or_else(|| "gengar".to_string());

    let client = DexClient::new();
    let entry = match client.lookup(&name).await {
        Ok(entry) => entry,
        Err(_) => {
            println!("Pokemon not found.");
            process::exit(1);
        }
    };

    println!("{}", entry.counter_tips);
    Ok(())
}
