use super::types::{Mark, Outcome};

pub const WIN_POINTS: i32 = 5;
pub const TIE_POINTS: i32 = 3;
pub const LOSS_POINTS: i32 = -1;

/// A finished round from the human player's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundResult {
    PlayerWin,
    Tie,
    ComputerWin,
}

impl RoundResult {
    pub fn from_outcome(outcome: Outcome, human_mark: Mark) -> Self {
        match outcome {
            Outcome::Win(mark) if mark == human_mark => RoundResult::PlayerWin,
            Outcome::Win(_) => RoundResult::ComputerWin,
            Outcome::Draw => RoundResult::Tie,
        }
    }

    pub fn points(&self) -> i32 {
        match self {
            RoundResult::PlayerWin => WIN_POINTS,
            RoundResult::Tie => TIE_POINTS,
            RoundResult::ComputerWin => LOSS_POINTS,
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            RoundResult::PlayerWin => "You won!",
            RoundResult::Tie => "It's a tie!",
            RoundResult::ComputerWin => "You lost!",
        }
    }

    /// Headline plus the signed point delta, e.g. "You won! +5 points".
    pub fn notification(&self) -> String {
        let points = self.points();
        let unit = if points.abs() == 1 { "point" } else { "points" };
        format!("{} {:+} {}", self.headline(), points, unit)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    pub player_wins: u32,
    pub computer_wins: u32,
    pub ties: u32,
    pub points: i32,
}

impl ScoreBoard {
    pub fn record(&mut self, result: RoundResult) {
        match result {
            RoundResult::PlayerWin => self.player_wins += 1,
            RoundResult::Tie => self.ties += 1,
            RoundResult::ComputerWin => self.computer_wins += 1,
        }
        self.points += result.points();
    }

    pub fn rounds_scored(&self) -> u32 {
        self.player_wins + self.computer_wins + self.ties
    }
}

/// Final tallies shown once the match is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchSummary {
    pub rounds_played: u32,
    pub player_wins: u32,
    pub computer_wins: u32,
    pub ties: u32,
    pub points: i32,
}

impl From<&ScoreBoard> for MatchSummary {
    fn from(scores: &ScoreBoard) -> Self {
        Self {
            rounds_played: scores.rounds_scored(),
            player_wins: scores.player_wins,
            computer_wins: scores.computer_wins,
            ties: scores.ties,
            points: scores.points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_from_outcome() {
        assert_eq!(RoundResult::from_outcome(Outcome::Win(Mark::X), Mark::X), RoundResult::PlayerWin);
        assert_eq!(RoundResult::from_outcome(Outcome::Win(Mark::O), Mark::X), RoundResult::ComputerWin);
        assert_eq!(RoundResult::from_outcome(Outcome::Draw, Mark::X), RoundResult::Tie);
    }

    #[test]
    fn test_notification_follows_point_values() {
        assert_eq!(RoundResult::PlayerWin.notification(), "You won! +5 points");
        assert_eq!(RoundResult::Tie.notification(), "It's a tie! +3 points");
        assert_eq!(RoundResult::ComputerWin.notification(), "You lost! -1 point");
        for result in [RoundResult::PlayerWin, RoundResult::Tie, RoundResult::ComputerWin] {
            assert!(result.notification().starts_with(result.headline()));
            assert!(result.notification().contains(&format!("{:+}", result.points())));
        }
    }

    #[test]
    fn test_points_can_go_negative() {
        let mut scores = ScoreBoard::default();
        scores.record(RoundResult::ComputerWin);
        scores.record(RoundResult::ComputerWin);
        assert_eq!(scores.points, -2);
        assert_eq!(scores.computer_wins, 2);
    }

    #[test]
    fn test_summary_reflects_every_counter() {
        let mut scores = ScoreBoard::default();
        scores.record(RoundResult::PlayerWin);
        scores.record(RoundResult::Tie);
        scores.record(RoundResult::ComputerWin);
        scores.record(RoundResult::PlayerWin);

        let summary = MatchSummary::from(&scores);
        assert_eq!(
            summary,
            MatchSummary {
                rounds_played: 4,
                player_wins: 2,
                computer_wins: 1,
                ties: 1,
                points: 5 + 3 - 1 + 5,
            }
        );
    }
}
