//! End-of-match results
//!
//! Built from the session right before it resets; never persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sim::{GameSession, GameType, Team};

/// One team's breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamResult {
    pub team: Team,
    /// Scoring events per minigame, Bonus first
    pub counts: Vec<(GameType, u32)>,
    pub total: f64,
}

/// Final results of one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Red first, then Blue
    pub teams: Vec<TeamResult>,
}

impl MatchSummary {
    pub fn from_session(session: &GameSession) -> Self {
        let teams = [Team::Red, Team::Blue]
            .into_iter()
            .map(|team| {
                let scores = session.scores(team);
                TeamResult {
                    team,
                    counts: scores.breakdown().collect(),
                    total: scores.total,
                }
            })
            .collect();
        Self { teams }
    }

    pub fn team(&self, team: Team) -> Option<&TeamResult> {
        self.teams.iter().find(|r| r.team == team)
    }

    /// Higher total wins; None on a tie
    pub fn winner(&self) -> Option<Team> {
        let red = self.team(Team::Red)?.total;
        let blue = self.team(Team::Blue)?.total;
        if red > blue {
            Some(Team::Red)
        } else if blue > red {
            Some(Team::Blue)
        } else {
            None
        }
    }
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.teams {
            writeln!(f, "{} Team", result.team.name())?;
            for (game_type, count) in &result.counts {
                writeln!(f, "{}: {}", game_type, count)?;
            }
            writeln!(f, "Total: {:.2}", result.total)?;
        }
        write!(f, "Game Over!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        let mut session = GameSession::new(11);
        session.scores[Team::Red.index()].add(GameType::Hockey, 1.0);
        session.scores[Team::Red.index()].add(GameType::Hockey, 1.0);
        session.scores[Team::Blue.index()].add(GameType::Bonus, 1.0 / 30.0);

        let text = MatchSummary::from_session(&session).to_string();
        let expected = "\
Red Team
Bonus: 0
Hockey: 2
Ultimate Flying Disc: 0
Dodgeball: 0
Kill The Carrier: 0
Total: 2.00
Blue Team
Bonus: 1
Hockey: 0
Ultimate Flying Disc: 0
Dodgeball: 0
Kill The Carrier: 0
Total: 0.03
Game Over!";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_winner() {
        let mut session = GameSession::new(11);
        assert_eq!(MatchSummary::from_session(&session).winner(), None);
        session.scores[Team::Blue.index()].add(GameType::Dodgeball, 1.0);
        assert_eq!(MatchSummary::from_session(&session).winner(), Some(Team::Blue));
    }
}
