pub mod chat;
pub mod lists;
pub mod prompt;

use std::path::{Path, PathBuf};

use tracing::debug;
use wb_core::{BotConfig, Response, WriterBot};

/// Config file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG_FILE: &str = "writerbot.toml";

/// Build the effective config: file values first, then command-line flags.
pub fn resolve_config(
    path: Option<&Path>,
    data_dir: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<BotConfig, String> {
    let mut config = match path {
        Some(path) => BotConfig::from_file(path).map_err(|e| e.to_string())?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            BotConfig::from_file(Path::new(DEFAULT_CONFIG_FILE)).map_err(|e| e.to_string())?
        }
        None => BotConfig::default(),
    };

    if let Some(dir) = data_dir {
        config = config.with_data_dir(dir);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    debug!(?config, "resolved config");
    Ok(config)
}

/// Load the word lists and create a bot.
fn load_bot(config: &BotConfig) -> Result<WriterBot, String> {
    WriterBot::new(config.clone()).map_err(|e| format!("failed to load word lists: {e}"))
}

/// Print a response as plain lines or as a JSON object.
fn print_response(command: &str, response: &Response, json: bool) -> Result<(), String> {
    if json {
        let value = serde_json::json!({
            "command": command,
            "lines": response.lines,
        });
        let text = serde_json::to_string_pretty(&value).map_err(|e| e.to_string())?;
        println!("{text}");
    } else {
        for line in response.iter() {
            println!("{line}");
        }
    }
    Ok(())
}
