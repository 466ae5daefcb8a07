use comfy_table::{ContentArrangement, Table};

use wb_core::BotConfig;
use wb_core::commands::Command;

pub fn run(config: &BotConfig, json: bool) -> Result<(), String> {
    let mut bot = super::load_bot(config)?;

    if json {
        let response = bot.run(Command::Lists, &[]).map_err(|e| e.to_string())?;
        return super::print_response(Command::Lists.name(), &response, true);
    }

    let cache = bot.cache();

    if cache.is_empty() {
        println!("  No word lists found in {}.", bot.store().dir().display());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["List", "Lines"]);
    for (name, count) in cache.counts() {
        table.add_row(vec![name.to_string(), count.to_string()]);
    }

    println!("{table}");
    println!();
    println!("  {} lists, {} lines", cache.len(), cache.total_lines());

    Ok(())
}
