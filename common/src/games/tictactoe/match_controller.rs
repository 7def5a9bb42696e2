use crate::config::MatchConfig;
use crate::error::MatchError;
use crate::games::SessionRng;
use crate::{debug_log, log};
use super::board::Board;
use super::bot_controller::select_move;
use super::score::{MatchSummary, RoundResult, ScoreBoard};
use super::types::{Difficulty, Mark, TerminalStatus, WinningLine};
use super::win_detector::{evaluate, winning_lines};

pub const HUMAN_MARK: Mark = Mark::X;
pub const COMPUTER_MARK: Mark = Mark::O;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchPhase {
    NotStarted,
    InRound,
    RoundEnded,
    MatchEnded,
}

/// What a single call changed on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnReport {
    pub human_cell: Option<usize>,
    pub computer_cell: Option<usize>,
    /// Set when this call finished the round.
    pub round_result: Option<RoundResult>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundAdvance {
    NextRound(u32),
    MatchEnded(MatchSummary),
}

/// Owns the whole match: board, turn, round counter and scores.
///
/// The human always plays X and moves first; the computer plays O.
pub struct MatchController {
    difficulty: Difficulty,
    total_rounds: u32,
    round: u32,
    phase: MatchPhase,
    board: Board,
    current_mark: Mark,
    scores: ScoreBoard,
    last_result: Option<RoundResult>,
    final_summary: Option<MatchSummary>,
    rng: SessionRng,
}

impl MatchController {
    /// A match always has at least one round; `total_rounds` of 0 is raised to 1.
    pub fn new(difficulty: Difficulty, total_rounds: u32, rng: SessionRng) -> Self {
        Self {
            difficulty,
            total_rounds: total_rounds.max(1),
            round: 1,
            phase: MatchPhase::NotStarted,
            board: Board::new(),
            current_mark: HUMAN_MARK,
            scores: ScoreBoard::default(),
            last_result: None,
            final_summary: None,
            rng,
        }
    }

    pub fn from_config(config: &MatchConfig) -> Self {
        Self::new(
            config.difficulty,
            config.total_rounds,
            SessionRng::from_optional_seed(config.seed),
        )
    }

    pub fn start_round(&mut self) -> Result<(), MatchError> {
        match self.phase {
            MatchPhase::InRound => return Err(MatchError::RoundInProgress),
            MatchPhase::MatchEnded => return Err(MatchError::MatchOver),
            MatchPhase::NotStarted | MatchPhase::RoundEnded => {}
        }

        self.board = Board::new();
        self.current_mark = HUMAN_MARK;
        self.last_result = None;
        self.phase = MatchPhase::InRound;
        log!("Round {}/{} started ({} difficulty)", self.round, self.total_rounds, self.difficulty);
        Ok(())
    }

    /// Places the human mark and, unless that ended the round, answers with the computer's move.
    pub fn apply_human_move(&mut self, cell: usize) -> Result<TurnReport, MatchError> {
        let mut report = self.place_human_mark(cell)?;
        if report.round_result.is_none() {
            let reply = self.play_computer_turn()?;
            report.computer_cell = reply.computer_cell;
            report.round_result = reply.round_result;
        }
        Ok(report)
    }

    /// Human half of `apply_human_move`, for callers that render between the two moves.
    pub fn place_human_mark(&mut self, cell: usize) -> Result<TurnReport, MatchError> {
        self.ensure_in_round()?;
        if self.current_mark != HUMAN_MARK {
            return Err(MatchError::NotHumanTurn);
        }

        self.board.place(cell, HUMAN_MARK)?;
        debug_log!("Player placed {} at cell {}", HUMAN_MARK, cell);

        Ok(TurnReport {
            human_cell: Some(cell),
            computer_cell: None,
            round_result: self.finish_move(),
        })
    }

    pub fn play_computer_turn(&mut self) -> Result<TurnReport, MatchError> {
        self.ensure_in_round()?;
        if self.current_mark != COMPUTER_MARK {
            return Err(MatchError::NotComputerTurn);
        }

        let cell = select_move(&self.board, COMPUTER_MARK, self.difficulty, &mut self.rng)
            .ok_or(MatchError::NoMoveAvailable)?;
        self.board.place(cell, COMPUTER_MARK)?;
        debug_log!("Computer placed {} at cell {}", COMPUTER_MARK, cell);

        Ok(TurnReport {
            human_cell: None,
            computer_cell: Some(cell),
            round_result: self.finish_move(),
        })
    }

    pub fn advance_round(&mut self) -> Result<RoundAdvance, MatchError> {
        match self.phase {
            MatchPhase::RoundEnded => {}
            MatchPhase::MatchEnded => return Err(MatchError::MatchOver),
            MatchPhase::NotStarted | MatchPhase::InRound => return Err(MatchError::RoundNotEnded),
        }

        self.round += 1;
        if self.round > self.total_rounds {
            return Ok(RoundAdvance::MatchEnded(self.finish_match()));
        }

        self.start_round()?;
        Ok(RoundAdvance::NextRound(self.round))
    }

    /// Ends the match early. A round still in progress is not scored.
    pub fn end_match(&mut self) -> Result<MatchSummary, MatchError> {
        match self.phase {
            MatchPhase::InRound | MatchPhase::RoundEnded => Ok(self.finish_match()),
            MatchPhase::NotStarted => Err(MatchError::RoundNotInProgress),
            MatchPhase::MatchEnded => Err(MatchError::MatchOver),
        }
    }

    pub fn reset_match(&mut self) {
        self.round = 1;
        self.phase = MatchPhase::NotStarted;
        self.board = Board::new();
        self.current_mark = HUMAN_MARK;
        self.scores = ScoreBoard::default();
        self.last_result = None;
        self.final_summary = None;
        log!("Match reset");
    }

    /// Only allowed before the first round of a match, i.e. right after `new` or `reset_match`.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), MatchError> {
        if self.phase != MatchPhase::NotStarted {
            return Err(MatchError::MatchStarted);
        }
        self.difficulty = difficulty;
        log!("Difficulty set to {}", difficulty);
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn status(&self) -> TerminalStatus {
        evaluate(&self.board)
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn is_final_round(&self) -> bool {
        self.round == self.total_rounds
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary::from(&self.scores)
    }

    /// Only set once the match has ended.
    pub fn final_summary(&self) -> Option<&MatchSummary> {
        self.final_summary.as_ref()
    }

    pub fn last_result(&self) -> Option<RoundResult> {
        self.last_result
    }

    /// Lines to highlight after a win; empty otherwise.
    pub fn winning_lines(&self) -> Vec<WinningLine> {
        match self.status() {
            TerminalStatus::Win(mark) => winning_lines(&self.board, mark),
            TerminalStatus::Ongoing | TerminalStatus::Draw => Vec::new(),
        }
    }

    fn ensure_in_round(&self) -> Result<(), MatchError> {
        match self.phase {
            MatchPhase::InRound => Ok(()),
            MatchPhase::MatchEnded => Err(MatchError::MatchOver),
            MatchPhase::NotStarted | MatchPhase::RoundEnded => Err(MatchError::RoundNotInProgress),
        }
    }

    fn finish_move(&mut self) -> Option<RoundResult> {
        match self.status().outcome() {
            Some(outcome) => Some(self.end_round(RoundResult::from_outcome(outcome, HUMAN_MARK))),
            None => {
                self.current_mark = self.current_mark.opponent();
                None
            }
        }
    }

    fn end_round(&mut self, result: RoundResult) -> RoundResult {
        self.phase = MatchPhase::RoundEnded;
        self.scores.record(result);
        self.last_result = Some(result);
        log!(
            "Round {}/{} ended: {} Points: {}",
            self.round,
            self.total_rounds,
            result.notification(),
            self.scores.points
        );
        result
    }

    fn finish_match(&mut self) -> MatchSummary {
        let summary = self.summary();
        self.phase = MatchPhase::MatchEnded;
        self.final_summary = Some(summary);
        log!(
            "Match ended: {} player wins, {} computer wins, {} ties, {} points",
            summary.player_wins,
            summary.computer_wins,
            summary.ties,
            summary.points
        );
        summary
    }
}
