//! Scoreboard and announcement sink
//!
//! Write-only: the session pushes strings out and never reads them back.

use crate::sim::{GameSession, GameType, Team};

/// Presentation surfaces driven by the session
pub trait Presenter {
    /// Live scoreboard line
    fn update_scoreboard(&mut self, text: &str);
    /// Round number + minigame label
    fn update_round_label(&mut self, text: &str);
    /// End-of-match modal
    fn announce(&mut self, text: &str);
}

/// "Blue: 1.00, Red: 0.03"
pub fn scoreboard_text(session: &GameSession) -> String {
    format!(
        "{}: {:.2}, {}: {:.2}",
        Team::Blue.name(),
        session.scores(Team::Blue).total,
        Team::Red.name(),
        session.scores(Team::Red).total
    )
}

/// "3 - Dodgeball" (1-based round)
pub fn round_label(round: u32, game_type: GameType) -> String {
    format!("{} - {}", round + 1, game_type)
}

/// Presenter that writes everything to the log
#[derive(Debug, Default)]
pub struct LogPresenter;

impl Presenter for LogPresenter {
    fn update_scoreboard(&mut self, text: &str) {
        log::info!("Scoreboard: {}", text);
    }

    fn update_round_label(&mut self, text: &str) {
        log::info!("Round: {}", text);
    }

    fn announce(&mut self, text: &str) {
        for line in text.lines() {
            log::info!("{}", line);
        }
    }
}

/// Presenter that keeps every write (for tests and replays of a session)
#[derive(Debug, Default, Clone)]
pub struct RecordingPresenter {
    pub scoreboard: Vec<String>,
    pub round_labels: Vec<String>,
    pub announcements: Vec<String>,
}

impl Presenter for RecordingPresenter {
    fn update_scoreboard(&mut self, text: &str) {
        self.scoreboard.push(text.to_string());
    }

    fn update_round_label(&mut self, text: &str) {
        self.round_labels.push(text.to_string());
    }

    fn announce(&mut self, text: &str) {
        self.announcements.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoreboard_two_decimals() {
        let mut session = GameSession::new(11);
        session.scores[0].add(GameType::Hockey, 1.0);
        session.scores[1].add(GameType::Bonus, 1.0 / 30.0);
        assert_eq!(scoreboard_text(&session), "Blue: 1.00, Red: 0.03");
    }

    #[test]
    fn test_round_label() {
        assert_eq!(round_label(0, GameType::KillTheCarrier), "1 - Kill The Carrier");
        assert_eq!(round_label(10, GameType::Bonus), "11 - Bonus");
    }
}
