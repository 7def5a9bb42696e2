mod game_loop;
mod input;
mod terminal_ui;

use std::time::Duration;

use clap::{Parser, ValueEnum};
use tictactoe_common::config::{ConfigManager, DEFAULT_CONFIG_FILE, MatchConfig, Validate};
use tictactoe_common::games::tictactoe::{Difficulty, MatchController};
use tictactoe_common::logger::{self, LogLevel};
use tictactoe_common::{ConfigError, log};
use tokio::io::BufReader;

use game_loop::ConsoleGame;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_console", about = "Play tic-tac-toe against the computer")]
struct Args {
    /// YAML match config; missing file means defaults
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    #[arg(long, value_enum)]
    difficulty: Option<DifficultyArg>,

    #[arg(long)]
    rounds: Option<u32>,

    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective config back to --config before playing
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,
}

impl Args {
    fn apply_overrides(&self, config: &mut MatchConfig) {
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty.into();
        }
        if let Some(rounds) = self.rounds {
            config.total_rounds = rounds;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    let level = if args.verbose { LogLevel::Debug } else { LogLevel::Info };
    logger::init_logger(prefix, level);

    let config_manager: ConfigManager<_, MatchConfig> = ConfigManager::from_yaml_file(&args.config);
    let mut config = config_manager.get_config()?;
    args.apply_overrides(&mut config);
    config.validate().map_err(ConfigError::Invalid)?;

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved config to {}", args.config);
    }

    log!(
        "Starting a {} round match on {} difficulty",
        config.total_rounds,
        config.difficulty
    );

    let controller = MatchController::from_config(&config);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut game = ConsoleGame::new(
        controller,
        stdin,
        std::io::stdout(),
        Duration::from_millis(config.computer_move_delay_ms),
    );
    game.run().await?;

    log!("Session finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_file_values() {
        let args = Args::parse_from([
            "tictactoe_console",
            "--difficulty",
            "easy",
            "--rounds",
            "3",
            "--seed",
            "42",
        ]);
        let mut config = MatchConfig::default();
        args.apply_overrides(&mut config);
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.total_rounds, 3);
        assert_eq!(config.seed, Some(42));
        assert_eq!(args.config, DEFAULT_CONFIG_FILE);
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let args = Args::parse_from(["tictactoe_console"]);
        let mut config = MatchConfig {
            seed: Some(1),
            ..MatchConfig::default()
        };
        args.apply_overrides(&mut config);
        assert_eq!(config.seed, Some(1));
        assert_eq!(config.difficulty, Difficulty::Hard);
    }
}
