//! Audio sink and delayed cues
//!
//! Sounds are fire-and-forget, addressed by name. The session only decides
//! *what* plays and *when*; playback belongs to the host.

use serde::{Deserialize, Serialize};

use crate::sim::GameType;

/// Sound cues the session emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sound {
    /// New minigame starting
    Whistle,
    /// Match over
    GameOver,
    /// Minigame name callout
    Minigame(GameType),
}

impl Sound {
    /// Asset name, e.g. "whistle" or "killthecarrier"
    pub fn name(&self) -> String {
        match self {
            Sound::Whistle => "whistle".to_string(),
            Sound::GameOver => "gameover".to_string(),
            Sound::Minigame(game_type) => crate::cue_name(game_type.name()),
        }
    }
}

/// Host playback surface
pub trait AudioSink {
    fn play_sound(&mut self, name: &str);
}

/// Audio sink that only logs (native headless runs)
#[derive(Debug, Default)]
pub struct LogAudio {
    played: usize,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sounds played so far
    pub fn played(&self) -> usize {
        self.played
    }
}

impl AudioSink for LogAudio {
    fn play_sound(&mut self, name: &str) {
        self.played += 1;
        log::debug!("Playing sound '{}'", name);
    }
}

/// Audio sink that records names in play order
#[derive(Debug, Default, Clone)]
pub struct RecordingAudio {
    pub played: Vec<String>,
}

impl AudioSink for RecordingAudio {
    fn play_sound(&mut self, name: &str) {
        self.played.push(name.to_string());
    }
}

/// A cue waiting for its time
#[derive(Debug, Clone, Copy, PartialEq)]
struct ScheduledCue {
    at: f64,
    sound: Sound,
}

/// Delayed cues on simulation time, without cancellation
///
/// A rotation that happens before an earlier cue fires does not drop it;
/// both sounds play.
#[derive(Debug, Default, Clone)]
pub struct CueScheduler {
    pending: Vec<ScheduledCue>,
}

impl CueScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Play `sound` once simulation time reaches `at`
    pub fn schedule(&mut self, at: f64, sound: Sound) {
        self.pending.push(ScheduledCue { at, sound });
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Play every cue due at `now`, in scheduling order
    pub fn flush(&mut self, now: f64, audio: &mut dyn AudioSink) {
        self.pending.retain(|cue| {
            if cue.at <= now {
                audio.play_sound(&cue.sound.name());
                false
            } else {
                true
            }
        });
    }
}
