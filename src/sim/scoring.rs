//! Scoring gate
//!
//! Points only count in a real match: at least two players, and nobody in
//! the middle of binding a controller. Anything else is a silent no-op.

use super::state::{GameSession, Team};
use crate::consts::MIN_SCORING_PLAYERS;
use crate::ui::{Presenter, scoreboard_text};

/// Whether score mutations (and round progress) are allowed right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringGate {
    pub player_count: usize,
    pub setting_up_player: bool,
}

impl ScoringGate {
    pub fn is_open(&self) -> bool {
        self.player_count >= MIN_SCORING_PLAYERS && !self.setting_up_player
    }
}

impl GameSession {
    pub fn scoring_gate(&self, setting_up_player: bool) -> ScoringGate {
        ScoringGate {
            player_count: self.players.len(),
            setting_up_player,
        }
    }

    /// Credit `team` with `value` under the active minigame
    ///
    /// Returns false (and changes nothing) when the gate is closed or no
    /// minigame has been chosen yet.
    pub fn score(
        &mut self,
        team: Team,
        value: f64,
        setting_up_player: bool,
        display: &mut dyn Presenter,
    ) -> bool {
        if !self.scoring_gate(setting_up_player).is_open() {
            return false;
        }
        let Some(game_type) = self.game_type else {
            log::trace!("Ignoring score before the first minigame");
            return false;
        };

        log::info!("Team {} got a point in {}", team.name(), game_type);
        self.scores[team.index()].add(game_type, value);
        display.update_scoreboard(&scoreboard_text(self));
        true
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::sim::pawn::PawnId;
    use crate::sim::state::GameType;
    use crate::ui::RecordingPresenter;

    fn session_with(players: usize, game_type: GameType) -> GameSession {
        let mut session = GameSession::new(11);
        session.players = (0..players as u32).map(PawnId).collect();
        session.game_type = Some(game_type);
        session
    }

    #[test]
    fn test_score_applies_to_active_type_and_total() {
        let mut session = session_with(2, GameType::Dodgeball);
        let mut display = RecordingPresenter::default();

        assert!(session.score(Team::Red, 1.0, false, &mut display));

        assert_eq!(session.scores(Team::Red).count(GameType::Dodgeball), 1);
        assert_eq!(session.scores(Team::Red).total, 1.0);
        assert_eq!(session.scores(Team::Blue), &Default::default());
        assert_eq!(display.scoreboard, vec!["Blue: 0.00, Red: 1.00"]);
    }

    #[test]
    fn test_solo_session_never_scores() {
        let mut session = session_with(1, GameType::Hockey);
        let mut display = RecordingPresenter::default();
        assert!(!session.score(Team::Blue, 1.0, false, &mut display));
        assert_eq!(session.scores(Team::Blue).total, 0.0);
        assert!(display.scoreboard.is_empty());
    }

    #[test]
    fn test_setup_in_progress_never_scores() {
        let mut session = session_with(4, GameType::Hockey);
        let mut display = RecordingPresenter::default();
        assert!(!session.score(Team::Blue, 1.0, true, &mut display));
        assert!(display.scoreboard.is_empty());
    }

    #[test]
    fn test_no_minigame_yet() {
        let mut session = session_with(2, GameType::Hockey);
        session.game_type = None;
        let mut display = RecordingPresenter::default();
        assert!(!session.score(Team::Blue, 1.0, false, &mut display));
        assert!(display.scoreboard.is_empty());
    }

    proptest! {
        #[test]
        fn closed_gate_is_a_no_op(
            players in 0usize..6,
            setting_up in any::<bool>(),
            red in any::<bool>(),
            value in 0.0f64..10.0,
        ) {
            prop_assume!(players < 2 || setting_up);
            let mut session = session_with(players, GameType::KillTheCarrier);
            let before = session.clone();
            let mut display = RecordingPresenter::default();
            let team = if red { Team::Red } else { Team::Blue };

            prop_assert!(!session.score(team, value, setting_up, &mut display));
            prop_assert_eq!(session, before);
            prop_assert!(display.scoreboard.is_empty());
        }

        #[test]
        fn open_gate_adds_exactly_value(
            players in 2usize..8,
            red in any::<bool>(),
            value in 0.0f64..10.0,
        ) {
            let mut session = session_with(players, GameType::Bonus);
            let mut display = RecordingPresenter::default();
            let team = if red { Team::Red } else { Team::Blue };

            prop_assert!(session.score(team, value, false, &mut display));
            prop_assert_eq!(session.scores(team).total, value);
            prop_assert_eq!(session.scores(team).count(GameType::Bonus), 1);
            prop_assert_eq!(session.scores(team.opponent()).total, 0.0);
        }
    }
}
