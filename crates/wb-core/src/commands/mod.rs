//! Command dispatch.
//!
//! `WriterBot` owns the word store, the config, and the RNG. Hosts hand it
//! either a raw line of chat input (`process`) or an already-parsed command
//! (`run`) and get a [`Response`] back.

pub mod babble;
pub mod dice;
pub mod names;
pub mod prompts;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::cache::{WordCache, WordStore};
use crate::config::BotConfig;
use crate::error::{BotError, BotResult, CacheError};
use crate::response::Response;

/// Reply sent when a command needs a word list that is not loaded.
pub const MISSING_LIST_MESSAGE: &str = "Sorry, I don't have that list loaded.";

/// Commands understood by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A random story hook, optionally naming the main character.
    PlotBunny,
    /// A random twist to get a stuck story moving.
    PlotNinja,
    /// A random profession.
    RandomProfession,
    /// A random first and last name.
    RandomName,
    /// Nonsense sentences built from word lists.
    Babble,
    /// A dice roll.
    Roll,
    /// The loaded word lists.
    Lists,
    /// Re-read the word lists from disk.
    Reload,
    /// Command summary.
    Help,
}

/// Commands spelled as two words in chat (`plot bunny`).
const TWO_WORD: &[&str] = &[
    "plot bunny",
    "plot ninja",
    "random profession",
    "random job",
    "random name",
];

impl Command {
    /// Look up a command by name. Underscores count as spaces and case is
    /// ignored, so `plot_bunny`, `Plot Bunny`, and `plot bunny` all match.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase().replace('_', " ");
        let cmd = match name.as_str() {
            "plot bunny" | "bunny" => Self::PlotBunny,
            "plot ninja" | "ninja" => Self::PlotNinja,
            "random profession" | "random job" | "profession" | "job" => Self::RandomProfession,
            "random name" | "name" => Self::RandomName,
            "babble" => Self::Babble,
            "roll" => Self::Roll,
            "lists" => Self::Lists,
            "reload" => Self::Reload,
            "help" => Self::Help,
            _ => return None,
        };
        Some(cmd)
    }

    /// The name shown in help text.
    pub fn name(self) -> &'static str {
        match self {
            Self::PlotBunny => "plot bunny",
            Self::PlotNinja => "plot ninja",
            Self::RandomProfession => "random profession",
            Self::RandomName => "random name",
            Self::Babble => "babble",
            Self::Roll => "roll",
            Self::Lists => "lists",
            Self::Reload => "reload",
            Self::Help => "help",
        }
    }
}

/// Split a chat line into a command name and its argument tokens.
///
/// A leading `!` is dropped. Two-word commands may be typed with a space
/// or an underscore.
pub fn split_command(input: &str) -> Option<(String, Vec<&str>)> {
    let input = input.trim();
    let input = input.strip_prefix('!').unwrap_or(input);
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let first = tokens.first()?.to_lowercase();

    if let Some(second) = tokens.get(1) {
        let joined = format!("{first} {}", second.to_lowercase());
        if TWO_WORD.contains(&joined.as_str()) {
            return Some((joined, tokens[2..].to_vec()));
        }
    }
    Some((first, tokens[1..].to_vec()))
}

/// A writing-prompt bot bound to a word store.
pub struct WriterBot {
    store: WordStore,
    config: BotConfig,
    rng: StdRng,
}

impl WriterBot {
    /// Load the word lists named by `config` and create a bot.
    pub fn new(config: BotConfig) -> BotResult<Self> {
        let store = WordStore::open(&config.data_dir)?;
        Ok(Self::with_store(store, config))
    }

    /// Create a bot around an existing store.
    pub fn with_store(store: WordStore, config: BotConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { store, config, rng }
    }

    /// The current word lists.
    pub fn cache(&self) -> &WordCache {
        self.store.cache()
    }

    /// The word store.
    pub fn store(&self) -> &WordStore {
        &self.store
    }

    /// The bot configuration.
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Handle one line of chat input.
    pub fn process(&mut self, input: &str) -> BotResult<Response> {
        let Some((name, args)) = split_command(input) else {
            return Ok(Response::default());
        };
        let cmd = Command::parse(&name).ok_or(BotError::UnknownCommand(name))?;
        self.run(cmd, &args)
    }

    /// Run a parsed command with its argument tokens.
    ///
    /// A missing word list becomes [`MISSING_LIST_MESSAGE`] rather than an
    /// error.
    pub fn run(&mut self, cmd: Command, args: &[&str]) -> BotResult<Response> {
        debug!(command = cmd.name(), ?args, "running command");
        match self.dispatch(cmd, args) {
            Err(BotError::Cache(CacheError::MissingCategory(category))) => {
                debug!(command = cmd.name(), %category, "word list missing");
                Ok(Response::line(MISSING_LIST_MESSAGE))
            }
            other => other,
        }
    }

    fn dispatch(&mut self, cmd: Command, args: &[&str]) -> BotResult<Response> {
        let cfg = &self.config;
        match cmd {
            Command::PlotBunny => {
                prompts::plot_bunny(self.store.cache(), &mut self.rng, &cfg.blank_name, args)
            }
            Command::PlotNinja => prompts::plot_ninja(self.store.cache(), &mut self.rng, args),
            Command::RandomProfession => {
                prompts::random_profession(self.store.cache(), &mut self.rng)
            }
            Command::RandomName => names::random_name(
                self.store.cache(),
                &mut self.rng,
                cfg.double_surname_odds,
                args,
            ),
            Command::Babble => {
                babble::babble(self.store.cache(), &mut self.rng, cfg.max_babble, args)
            }
            Command::Roll => dice::roll(&mut self.rng, args),
            Command::Lists => Ok(self.do_lists()),
            Command::Reload => self.do_reload(),
            Command::Help => Ok(help()),
        }
    }

    fn do_lists(&self) -> Response {
        let cache = self.store.cache();
        if cache.is_empty() {
            return Response::line("No word lists loaded.");
        }
        Response::lines(
            cache
                .counts()
                .into_iter()
                .map(|(name, count)| format!("{name}: {count}")),
        )
    }

    fn do_reload(&mut self) -> BotResult<Response> {
        let summary = self.store.reload()?;
        Ok(Response::line(format!("Reloaded {summary}.")))
    }
}

fn help() -> Response {
    Response::lines([
        "plot bunny [name]   a story hook, starring your main character",
        "plot ninja [count]  a twist to get a stuck story moving",
        "random profession   a job for a character (alias: random job)",
        "random name [m|f]   a first and last name",
        "babble [count]      nonsense sentences",
        "roll [NdM]          roll dice, 1d20 by default",
        "lists               the loaded word lists",
        "reload              re-read the word lists",
    ])
}

/// Uppercase the first character and lowercase the rest.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// A cache holding one or two lines of every list the commands use.
    pub(crate) fn sample_cache() -> WordCache {
        let mut cache = WordCache::new();
        cache.insert("bunnies", ["{mc} risks everything to rescue a stranger."]);
        cache.insert("ninjas", ["A ninja attacks!", "The lights go out.", "A letter arrives."]);
        cache.insert("professions", ["Blacksmith"]);
        cache.insert("names_boys", ["Arthur"]);
        cache.insert("names_girls", ["Beatrice"]);
        cache.insert("names_surnames", ["Smith", "Jones"]);
        cache.insert("babble", ["The {adjective} {noun} sings."]);
        cache.insert("adjective", ["purple"]);
        cache.insert("noun", ["teapot"]);
        cache
    }

    fn make_bot(cache: WordCache) -> WriterBot {
        let store = WordStore::from_cache("unused", cache);
        WriterBot::with_store(store, BotConfig::default().with_seed(42))
    }

    #[test]
    fn command_parse_aliases() {
        assert_eq!(Command::parse("plot_bunny"), Some(Command::PlotBunny));
        assert_eq!(Command::parse("Plot Bunny"), Some(Command::PlotBunny));
        assert_eq!(Command::parse("random job"), Some(Command::RandomProfession));
        assert_eq!(Command::parse("random_profession"), Some(Command::RandomProfession));
        assert_eq!(Command::parse("dance"), None);
    }

    #[test]
    fn split_two_word_command() {
        let (name, args) = split_command("!plot bunny bob").unwrap();
        assert_eq!(name, "plot bunny");
        assert_eq!(args, ["bob"]);

        let (name, args) = split_command("roll 2d6").unwrap();
        assert_eq!(name, "roll");
        assert_eq!(args, ["2d6"]);

        let (name, args) = split_command("plot_ninja 3").unwrap();
        assert_eq!(name, "plot_ninja");
        assert_eq!(args, ["3"]);

        assert!(split_command("   ").is_none());
    }

    #[test]
    fn capitalize_like_a_name() {
        assert_eq!(capitalize("bob"), "Bob");
        assert_eq!(capitalize("mCDONALD"), "Mcdonald");
        assert_eq!(capitalize("élodie"), "Élodie");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn process_plot_bunny_with_name() {
        let mut bot = make_bot(sample_cache());
        let r = bot.process("plot bunny bob").unwrap();
        assert_eq!(r.to_string(), "Bob risks everything to rescue a stranger.");
    }

    #[test]
    fn process_empty_input() {
        let mut bot = make_bot(sample_cache());
        assert!(bot.process("").unwrap().is_empty());
    }

    #[test]
    fn unknown_command_is_error() {
        let mut bot = make_bot(sample_cache());
        let err = bot.process("dance wildly").unwrap_err();
        assert!(matches!(err, BotError::UnknownCommand(ref n) if n == "dance"));
    }

    #[test]
    fn missing_list_is_soft_error() {
        let mut bot = make_bot(WordCache::new());
        for input in ["plot bunny", "plot ninja", "random job", "random name", "babble"] {
            let r = bot.process(input).unwrap();
            assert_eq!(r.to_string(), MISSING_LIST_MESSAGE, "{input}");
        }
    }

    #[test]
    fn empty_list_is_soft_error() {
        let mut cache = WordCache::new();
        cache.insert("professions", Vec::<String>::new());
        let mut bot = make_bot(cache);
        let r = bot.run(Command::RandomProfession, &[]).unwrap();
        assert_eq!(r.to_string(), MISSING_LIST_MESSAGE);
    }

    #[test]
    fn lists_reports_counts() {
        let mut bot = make_bot(sample_cache());
        let r = bot.run(Command::Lists, &[]).unwrap();
        assert!(r.iter().any(|l| l == "ninjas: 3"));
        assert!(r.iter().any(|l| l == "names_surnames: 2"));

        let mut empty = make_bot(WordCache::new());
        let r = empty.run(Command::Lists, &[]).unwrap();
        assert_eq!(r.to_string(), "No word lists loaded.");
    }

    #[test]
    fn reload_through_bot() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("professions.txt"), "Baker\n").unwrap();
        let config = BotConfig::default().with_data_dir(dir.path()).with_seed(1);
        let mut bot = WriterBot::new(config).unwrap();
        assert_eq!(bot.process("random profession").unwrap().to_string(), "Baker");

        fs::write(dir.path().join("professions.txt"), "Cooper\n").unwrap();
        let r = bot.process("reload").unwrap();
        assert_eq!(r.to_string(), "Reloaded 1 list, 1 line.");
        assert_eq!(bot.process("random job").unwrap().to_string(), "Cooper");
    }

    #[test]
    fn new_fails_on_missing_dir() {
        let dir = TempDir::new().unwrap();
        let config = BotConfig::default().with_data_dir(dir.path().join("missing"));
        assert!(matches!(
            WriterBot::new(config),
            Err(BotError::Cache(CacheError::DirNotFound(_)))
        ));
    }

    #[test]
    fn same_seed_same_output() {
        let mut a = make_bot(sample_cache());
        let mut b = make_bot(sample_cache());
        for _ in 0..10 {
            assert_eq!(
                a.process("plot ninja").unwrap(),
                b.process("plot ninja").unwrap()
            );
        }
    }

    #[test]
    fn help_lists_every_command() {
        let mut bot = make_bot(sample_cache());
        let text = bot.process("help").unwrap().to_string();
        for cmd in [
            Command::PlotBunny,
            Command::PlotNinja,
            Command::RandomProfession,
            Command::RandomName,
            Command::Babble,
            Command::Roll,
            Command::Lists,
            Command::Reload,
        ] {
            assert!(text.contains(cmd.name()), "{}", cmd.name());
        }
    }
}
