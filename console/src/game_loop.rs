use std::error::Error;
use std::io::Write;
use std::time::Duration;

use tictactoe_common::games::tictactoe::{
    COMPUTER_MARK, Difficulty, HUMAN_MARK, MatchController, MatchSummary, RoundAdvance,
    RoundResult,
};
use tictactoe_common::{MatchError, log};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::input::{PlayerCommand, parse_command};
use crate::terminal_ui::{render_board, render_summary};

pub type GameResult<T> = Result<T, Box<dyn Error>>;

enum Flow {
    Continue,
    Finished(MatchSummary),
    Closed,
}

/// Drives a `MatchController` from line-based input. Closing the input ends the session.
pub struct ConsoleGame<R, W> {
    controller: MatchController,
    lines: Lines<R>,
    out: W,
    computer_move_delay: Duration,
}

impl<R, W> ConsoleGame<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(controller: MatchController, reader: R, out: W, computer_move_delay: Duration) -> Self {
        Self {
            controller,
            lines: reader.lines(),
            out,
            computer_move_delay,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    pub async fn run(&mut self) -> GameResult<()> {
        loop {
            self.controller.start_round()?;

            let summary = match self.play_match().await? {
                Flow::Finished(summary) => summary,
                Flow::Continue | Flow::Closed => return Ok(()),
            };

            write!(self.out, "{}", render_summary(&summary))?;
            writeln!(self.out, "Play again? (y/no)")?;
            self.out.flush()?;

            match self.next_command().await? {
                Some(PlayerCommand::Yes) => self.controller.reset_match(),
                _ => return Ok(()),
            }

            let Some(difficulty) = self.choose_difficulty().await? else {
                return Ok(());
            };
            self.controller.set_difficulty(difficulty)?;
        }
    }

    /// Enter keeps the previous level. `None` when the input closes.
    async fn choose_difficulty(&mut self) -> GameResult<Option<Difficulty>> {
        let current = self.controller.difficulty();
        let prompt = format!("Choose a difficulty: easy, medium or hard (Enter keeps {})", current);
        writeln!(self.out, "{}", prompt)?;
        self.out.flush()?;

        loop {
            match self.next_command().await? {
                None => return Ok(None),
                Some(PlayerCommand::Level(difficulty)) => return Ok(Some(difficulty)),
                Some(PlayerCommand::Continue) => return Ok(Some(current)),
                Some(_) => writeln!(self.out, "{}", prompt)?,
            }
        }
    }

    async fn play_match(&mut self) -> GameResult<Flow> {
        loop {
            self.show_turn()?;

            let Some(command) = self.next_command().await? else {
                return Ok(Flow::Closed);
            };

            match command {
                PlayerCommand::Place(cell) => {
                    let Some(result) = self.play_turn(cell).await? else {
                        continue;
                    };
                    self.show_round_result(result)?;
                    match self.after_round().await? {
                        Flow::Continue => {}
                        flow => return Ok(flow),
                    }
                }
                PlayerCommand::EndMatch => return Ok(Flow::Finished(self.controller.end_match()?)),
                PlayerCommand::Continue
                | PlayerCommand::Yes
                | PlayerCommand::No
                | PlayerCommand::Level(_) => {
                    writeln!(self.out, "Pick a cell from 1 to 9, or q to end the match")?;
                }
            }
        }
    }

    async fn play_turn(&mut self, cell: usize) -> GameResult<Option<RoundResult>> {
        let report = match self.controller.place_human_mark(cell) {
            Ok(report) => report,
            Err(err) => {
                log!("Rejected move at cell {}: {}", cell + 1, err);
                let reason = match err {
                    MatchError::CellOccupied(_) => "that cell is already marked".to_string(),
                    other => other.to_string(),
                };
                writeln!(self.out, "Can't play cell {}: {}", cell + 1, reason)?;
                return Ok(None);
            }
        };
        if report.round_result.is_some() {
            return Ok(report.round_result);
        }

        write!(self.out, "{}", render_board(self.controller.board(), &[]))?;
        writeln!(self.out, "Player {}'s turn", COMPUTER_MARK)?;
        self.out.flush()?;
        tokio::time::sleep(self.computer_move_delay).await;

        let reply = self.controller.play_computer_turn()?;
        Ok(reply.round_result)
    }

    async fn after_round(&mut self) -> GameResult<Flow> {
        let prompt = if self.controller.is_final_round() {
            "Press Enter to check your score"
        } else {
            "Press Enter for the next round, or q to end the match"
        };
        writeln!(self.out, "{}", prompt)?;
        self.out.flush()?;

        loop {
            match self.next_command().await? {
                None => return Ok(Flow::Closed),
                Some(PlayerCommand::Continue) => {
                    return match self.controller.advance_round()? {
                        RoundAdvance::NextRound(round) => {
                            writeln!(self.out, "Round {} of {}", round, self.controller.total_rounds())?;
                            Ok(Flow::Continue)
                        }
                        RoundAdvance::MatchEnded(summary) => Ok(Flow::Finished(summary)),
                    };
                }
                Some(PlayerCommand::EndMatch) => {
                    return Ok(Flow::Finished(self.controller.end_match()?));
                }
                Some(_) => writeln!(self.out, "{}", prompt)?,
            }
        }
    }

    async fn next_command(&mut self) -> GameResult<Option<PlayerCommand>> {
        while let Some(line) = self.lines.next_line().await? {
            match parse_command(&line) {
                Some(command) => return Ok(Some(command)),
                None => writeln!(self.out, "Unrecognised input: {:?}", line.trim())?,
            }
        }
        Ok(None)
    }

    fn show_turn(&mut self) -> GameResult<()> {
        write!(self.out, "{}", render_board(self.controller.board(), &[]))?;
        writeln!(
            self.out,
            "Round {}/{}  Points: {}",
            self.controller.round(),
            self.controller.total_rounds(),
            self.controller.summary().points
        )?;
        writeln!(self.out, "Player {}'s turn", HUMAN_MARK)?;
        self.out.flush()?;
        Ok(())
    }

    fn show_round_result(&mut self, result: RoundResult) -> GameResult<()> {
        let highlight = self.controller.winning_lines();
        write!(self.out, "{}", render_board(self.controller.board(), &highlight))?;
        writeln!(self.out, "{}", result.headline())?;
        writeln!(self.out, "{}", result.notification())?;
        writeln!(self.out, "Points: {}", self.controller.summary().points)?;
        Ok(())
    }
}
