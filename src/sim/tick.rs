//! Per-step dispatch
//!
//! One step runs, in order: input poll, every attached pawn's tick, goal
//! ticks, the rotation check, then any cues that came due. Pawn order within
//! the first phase is whatever the world holds and must not matter.

use glam::Vec2;

use super::controller::{Outputs, RoundChange};
use super::game::Game;
use super::pawn::TickContext;
use super::state::Team;
use super::world::StepEvent;
use crate::audio::AudioSink;
use crate::platform::InputLayer;
use crate::ui::Presenter;

/// Overlay drawn over a player after the world renders
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerMarker {
    /// Join order, drawn as the label
    pub index: usize,
    pub team: Team,
    pub position: Vec2,
    /// Draw the lime carrier ring
    pub carrying_flag: bool,
}

impl PlayerMarker {
    pub fn color(&self) -> &'static str {
        self.team.color()
    }
}

impl<I: InputLayer, P: Presenter, A: AudioSink> Game<I, P, A> {
    /// Physics step callback
    pub fn on_step(&mut self, step: &StepEvent) -> RoundChange {
        self.session.timestamp = step.timestamp;
        self.input.poll_gamepads(step);

        let Self {
            session,
            world,
            pawns,
            goals,
            controller,
            input,
            display,
            audio,
            ..
        } = self;

        let mut ctx = TickContext {
            session,
            input: &*input,
            display,
        };

        for id in world.attached_pawns() {
            let Some(pawn) = pawns.get_mut(id) else {
                log::warn!("World object carries stale pawn {:?}", id);
                continue;
            };
            if let Some(request) = pawn.tick(id, step, &mut ctx) {
                pawns.apply(request);
            }
        }

        for &id in goals.iter() {
            if let Some(goal) = pawns.get_mut(id) {
                goal.tick(id, step, &mut ctx);
            }
        }

        let setting_up = ctx.input.is_setting_up_player();
        let mut out = Outputs {
            display: &mut *ctx.display,
            audio,
        };
        let change = controller.check_rotation(ctx.session, setting_up, &mut out);
        controller.flush_cues(step.timestamp, out.audio);
        change
    }

    /// After-render callback: overlay markers for players done with setup
    pub fn after_render(&self) -> Vec<PlayerMarker> {
        self.session
            .players
            .iter()
            .enumerate()
            .filter_map(|(index, &id)| {
                let player = self.player(id)?;
                if !self.input.setup_complete(player.gamepad) {
                    return None;
                }
                let position = self.world.body(player.body)?.position;
                let carrying_flag = player
                    .equipment
                    .is_some_and(|e| self.flag(e).is_some());
                Some(PlayerMarker {
                    index,
                    team: player.team,
                    position,
                    carrying_flag,
                })
            })
            .collect()
    }
}
