use std::io::{self, BufRead, IsTerminal, Write};

use colored::Colorize;

use wb_core::BotConfig;

pub fn run(config: &BotConfig) -> Result<(), String> {
    let mut bot = super::load_bot(config)?;
    let interactive = io::stdin().is_terminal();

    if interactive {
        println!("  {} WriterBot", "Starting".bold());
        println!(
            "  {} word lists loaded from {}",
            bot.cache().len(),
            bot.store().dir().display()
        );
        println!("  Type 'help' for commands, 'quit' to exit.\n");
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        if interactive {
            print!("> ");
            io::stdout().flush().map_err(|e| e.to_string())?;
        }

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        match bot.process(input) {
            Ok(response) => {
                for chunk in response.iter() {
                    println!("{chunk}");
                }
                if interactive {
                    println!();
                }
            }
            Err(e) => {
                println!("{}", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
