//! Session state and core types
//!
//! `GameSession` is the single mutable record of a match. It is created once,
//! reset at the end of every match, and never destroyed while the game runs.

use serde::{Deserialize, Serialize};

use super::pawn::PawnId;

/// One of the two teams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Blue,
    Red,
}

impl Team {
    pub fn index(self) -> usize {
        match self {
            Team::Blue => 0,
            Team::Red => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Team::Blue => "Blue",
            Team::Red => "Red",
        }
    }

    pub fn opponent(self) -> Team {
        match self {
            Team::Blue => Team::Red,
            Team::Red => Team::Blue,
        }
    }

    /// Overlay label color
    pub fn color(self) -> &'static str {
        match self {
            Team::Blue => "blue",
            Team::Red => "darkred",
        }
    }
}

/// Active minigame ruleset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameType {
    Hockey,
    UltimateFlyingDisc,
    Dodgeball,
    KillTheCarrier,
    /// Terminal type, only used for the final round
    Bonus,
}

impl GameType {
    /// Fixed rotation roster (Bonus is never drawn from it)
    pub const ROSTER: [GameType; 4] = [
        GameType::Hockey,
        GameType::UltimateFlyingDisc,
        GameType::Dodgeball,
        GameType::KillTheCarrier,
    ];

    /// Every type, in scoreboard order
    pub const ALL: [GameType; 5] = [
        GameType::Bonus,
        GameType::Hockey,
        GameType::UltimateFlyingDisc,
        GameType::Dodgeball,
        GameType::KillTheCarrier,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GameType::Hockey => "Hockey",
            GameType::UltimateFlyingDisc => "Ultimate Flying Disc",
            GameType::Dodgeball => "Dodgeball",
            GameType::KillTheCarrier => "Kill The Carrier",
            GameType::Bonus => "Bonus",
        }
    }

    fn index(self) -> usize {
        match self {
            GameType::Bonus => 0,
            GameType::Hockey => 1,
            GameType::UltimateFlyingDisc => 2,
            GameType::Dodgeball => 3,
            GameType::KillTheCarrier => 4,
        }
    }

    /// Holding the flag earns points (and the flag can be picked up)
    pub fn is_carrier_style(self) -> bool {
        matches!(self, GameType::KillTheCarrier | GameType::Bonus)
    }

    /// Goals are live
    pub fn uses_goals(self) -> bool {
        matches!(self, GameType::Hockey | GameType::UltimateFlyingDisc)
    }
}

impl std::fmt::Display for GameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One team's record for the match
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamScores {
    /// Scoring events per minigame type (indexed like `GameType::ALL`)
    counts: [u32; 5],
    /// Running sum of every delta applied to this team
    pub total: f64,
}

impl TeamScores {
    pub fn count(&self, game_type: GameType) -> u32 {
        self.counts[game_type.index()]
    }

    /// Record one scoring event worth `value`
    pub fn add(&mut self, game_type: GameType, value: f64) {
        self.counts[game_type.index()] += 1;
        self.total += value;
    }

    /// (type, count) pairs in scoreboard order
    pub fn breakdown(&self) -> impl Iterator<Item = (GameType, u32)> + '_ {
        GameType::ALL.iter().map(|&t| (t, self.count(t)))
    }
}

/// The match record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    /// Active minigame (None until the first rotation)
    pub game_type: Option<GameType>,
    /// Latest simulation time (ms)
    pub timestamp: f64,
    /// When the current minigame started (ms)
    pub last_game_changed_at: f64,
    /// Completed rotations
    pub round: u32,
    /// Rotations per match
    pub total_rounds: u32,
    /// Indexed by `Team::index`
    pub scores: [TeamScores; 2],
    /// Joined players, in join order
    pub players: Vec<PawnId>,
}

impl GameSession {
    pub fn new(total_rounds: u32) -> Self {
        Self {
            game_type: None,
            timestamp: 0.0,
            last_game_changed_at: 0.0,
            round: 0,
            total_rounds,
            scores: Default::default(),
            players: Vec::new(),
        }
    }

    pub fn scores(&self, team: Team) -> &TeamScores {
        &self.scores[team.index()]
    }

    /// Whether the active minigame rewards flag carrying
    pub fn is_carrier_round(&self) -> bool {
        self.game_type.is_some_and(GameType::is_carrier_style)
    }

    /// Back to the start-of-match record (players and clock are kept)
    pub fn reset(&mut self) {
        self.round = 0;
        self.scores = Default::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_excludes_bonus() {
        assert!(!GameType::ROSTER.contains(&GameType::Bonus));
        assert_eq!(GameType::ALL.len(), GameType::ROSTER.len() + 1);
    }

    #[test]
    fn test_carrier_style() {
        assert!(GameType::KillTheCarrier.is_carrier_style());
        assert!(GameType::Bonus.is_carrier_style());
        assert!(!GameType::Hockey.is_carrier_style());
        assert!(!GameType::Dodgeball.is_carrier_style());
    }

    #[test]
    fn test_team_scores_add() {
        let mut s = TeamScores::default();
        s.add(GameType::Bonus, 1.0 / 30.0);
        s.add(GameType::Bonus, 1.0 / 30.0);
        s.add(GameType::Hockey, 1.0);
        assert_eq!(s.count(GameType::Bonus), 2);
        assert_eq!(s.count(GameType::Hockey), 1);
        assert!((s.total - (1.0 + 2.0 / 30.0)).abs() < 1e-9);
    }

    #[test]
    fn test_reset_keeps_players() {
        let mut session = GameSession::new(11);
        session.players.push(PawnId(3));
        session.round = 7;
        session.scores[1].add(GameType::Dodgeball, 1.0);
        session.reset();
        assert_eq!(session.round, 0);
        assert_eq!(session.scores, [TeamScores::default(), TeamScores::default()]);
        assert_eq!(session.players.len(), 1);
    }

    #[test]
    fn test_session_serializes() {
        let session = GameSession::new(11);
        let json = serde_json::to_string(&session).unwrap();
        let back: GameSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}
