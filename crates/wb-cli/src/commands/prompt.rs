use wb_core::BotConfig;
use wb_core::commands::Command;

pub fn run(
    config: &BotConfig,
    command: Command,
    arg: Option<String>,
    json: bool,
) -> Result<(), String> {
    let mut bot = super::load_bot(config)?;
    let args: Vec<&str> = arg.as_deref().into_iter().collect();
    let response = bot.run(command, &args).map_err(|e| e.to_string())?;
    super::print_response(command.name(), &response, json)
}
