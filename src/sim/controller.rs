//! Round controller
//!
//! Polls the attention-span deadline every step. When it passes, either
//! rotate to a new minigame or, once every round is played, end the match,
//! announce the results, and start over.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{GameSession, GameType};
use crate::audio::{AudioSink, CueScheduler, Sound};
use crate::settings::Settings;
use crate::summary::MatchSummary;
use crate::ui::{Presenter, round_label, scoreboard_text};

/// What a rotation check did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundChange {
    /// Current minigame keeps running
    Unchanged,
    /// A new minigame was chosen
    Rotated(GameType),
    /// The match ended and the session was reset
    Ended,
}

/// Output surfaces the controller drives
pub struct Outputs<'a> {
    pub display: &'a mut dyn Presenter,
    pub audio: &'a mut dyn AudioSink,
}

#[derive(Debug)]
pub struct Controller {
    rng: Pcg32,
    attention_span: f64,
    cue_delay: f64,
    cues: CueScheduler,
}

impl Controller {
    pub fn new(settings: &Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Minigame seed: {}", seed);
        Self {
            rng: Pcg32::seed_from_u64(seed),
            attention_span: settings.attention_span_ms,
            cue_delay: settings.cue_delay_ms,
            cues: CueScheduler::new(),
        }
    }

    pub fn cues(&self) -> &CueScheduler {
        &self.cues
    }

    /// Called once per step after every pawn has ticked
    pub fn check_rotation(
        &mut self,
        session: &mut GameSession,
        setting_up_player: bool,
        out: &mut Outputs<'_>,
    ) -> RoundChange {
        if session.game_type.is_some()
            && session.timestamp - session.last_game_changed_at <= self.attention_span
        {
            return RoundChange::Unchanged;
        }

        if session.game_type.is_some() && session.round >= session.total_rounds {
            self.end_game(session, out);
            return RoundChange::Ended;
        }

        RoundChange::Rotated(self.choose_a_game(session, setting_up_player, out))
    }

    /// Pick the next minigame; Bonus is forced for the final round
    pub fn next_game_type(&mut self, session: &GameSession) -> GameType {
        if session.round < session.total_rounds.saturating_sub(1) {
            let i = self.rng.random_range(0..GameType::ROSTER.len());
            GameType::ROSTER[i]
        } else {
            GameType::Bonus
        }
    }

    /// Rotate to a new minigame
    ///
    /// The round only advances while the scoring gate is open, so a solo or
    /// mid-setup session keeps rotating without getting closer to the end.
    pub fn choose_a_game(
        &mut self,
        session: &mut GameSession,
        setting_up_player: bool,
        out: &mut Outputs<'_>,
    ) -> GameType {
        let game_type = self.next_game_type(session);
        session.game_type = Some(game_type);
        session.last_game_changed_at = session.timestamp;
        out.display
            .update_round_label(&round_label(session.round, game_type));

        if session.scoring_gate(setting_up_player).is_open() {
            out.audio.play_sound(&Sound::Whistle.name());
            self.cues
                .schedule(session.timestamp + self.cue_delay, Sound::Minigame(game_type));
            session.round += 1;
            log::info!(
                "Round {}/{}: {}",
                session.round,
                session.total_rounds,
                game_type
            );
        } else {
            log::debug!("Practice minigame: {}", game_type);
        }

        game_type
    }

    /// Announce results and reset the session for the next match
    pub fn end_game(&mut self, session: &mut GameSession, out: &mut Outputs<'_>) -> MatchSummary {
        out.audio.play_sound(&Sound::GameOver.name());

        let summary = MatchSummary::from_session(session);
        match summary.winner() {
            Some(team) => log::info!("Match over, {} team wins", team.name()),
            None => log::info!("Match over, tied"),
        }
        out.display.announce(&summary.to_string());

        session.reset();
        out.display.update_scoreboard(&scoreboard_text(session));
        summary
    }

    /// Play cues that have come due
    pub fn flush_cues(&mut self, now: f64, audio: &mut dyn AudioSink) {
        self.cues.flush(now, audio);
    }
}
