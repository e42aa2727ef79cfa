//! Flag equipment
//!
//! `Free` until a player touches it while `can_equip` holds, then `Held`
//! until dropped, tackled loose, or its carrier leaves. While held during a
//! carrier-style minigame it trickles points to the carrier's team.

use super::pawn::{PawnId, TickContext};
use super::state::{GameSession, Team};
use super::world::StepEvent;
use crate::settings::Settings;

/// Player currently holding the flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carrier {
    pub player: PawnId,
    pub team: Team,
}

/// Possession state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagState {
    Free,
    Held(Carrier),
}

/// Sprite selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlagTexture {
    Active,
    #[default]
    Inactive,
}

impl FlagTexture {
    pub fn asset(&self) -> &'static str {
        match self {
            FlagTexture::Active => "flag-active.png",
            FlagTexture::Inactive => "flag-inactive.png",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub holder: Option<Carrier>,
    /// Last tick it was held during a qualifying minigame (None = never)
    pub last_held: Option<f64>,
    /// Last point grant (ms)
    pub last_point: f64,
    /// Seconds between grants
    pub points_per_second: f64,
    /// Minimum time since last held before it can be picked up again (ms)
    pub pick_up_cooldown: f64,
    /// Points per grant
    pub point_value: f64,
    texture: FlagTexture,
}

impl Flag {
    pub fn new(settings: &Settings) -> Self {
        Self {
            holder: None,
            last_held: None,
            last_point: 0.0,
            points_per_second: settings.flag_points_per_second,
            pick_up_cooldown: settings.flag_pickup_cooldown_ms,
            point_value: settings.flag_point_value(),
            texture: FlagTexture::Inactive,
        }
    }

    pub fn state(&self) -> FlagState {
        match self.holder {
            Some(carrier) => FlagState::Held(carrier),
            None => FlagState::Free,
        }
    }

    pub fn texture(&self) -> FlagTexture {
        self.texture
    }

    /// Carrier-style minigame running and the pickup cooldown has passed
    pub fn can_equip(&self, session: &GameSession) -> bool {
        session.is_carrier_round()
            && self
                .last_held
                .is_none_or(|held| session.timestamp - held > self.pick_up_cooldown)
    }

    pub fn tick(&mut self, step: &StepEvent, ctx: &mut TickContext<'_>) {
        let qualifies = ctx.session.is_carrier_round();
        self.texture = if qualifies {
            FlagTexture::Active
        } else {
            FlagTexture::Inactive
        };

        let Some(carrier) = self.holder else { return };
        if !qualifies {
            return;
        }

        self.last_held = Some(step.timestamp);
        if step.timestamp - self.last_point > self.points_per_second * 1000.0 {
            ctx.score(carrier.team, self.point_value);
            self.last_point = step.timestamp;
        }
    }
}
