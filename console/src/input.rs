use tictactoe_common::games::tictactoe::{CELL_COUNT, Difficulty};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Zero-based cell; players type 1 to 9.
    Place(usize),
    Continue,
    EndMatch,
    Yes,
    No,
    Level(Difficulty),
}

pub fn parse_command(line: &str) -> Option<PlayerCommand> {
    let trimmed = line.trim().to_ascii_lowercase();
    match trimmed.as_str() {
        "" | "n" | "next" => Some(PlayerCommand::Continue),
        "q" | "quit" | "end" => Some(PlayerCommand::EndMatch),
        "y" | "yes" => Some(PlayerCommand::Yes),
        "no" => Some(PlayerCommand::No),
        "easy" | "e" => Some(PlayerCommand::Level(Difficulty::Easy)),
        "medium" | "m" => Some(PlayerCommand::Level(Difficulty::Medium)),
        "hard" | "h" => Some(PlayerCommand::Level(Difficulty::Hard)),
        other => other
            .parse::<usize>()
            .ok()
            .filter(|&number| (1..=CELL_COUNT).contains(&number))
            .map(|number| PlayerCommand::Place(number - 1)),
    }
}
