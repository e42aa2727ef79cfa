//! Pawns: game-logic entities attached to physics objects
//!
//! A closed set of variants sharing two hooks, `tick` and
//! `handle_collision`, dispatched through one registry. Hooks never reach
//! into other pawns directly; cross-pawn changes (picking up, knocking a
//! flag loose) come back as `Interaction`s for the registry to apply.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::flag::{Carrier, Flag};
use super::state::{GameSession, Team};
use super::world::{BodyId, StepEvent};
use crate::platform::{GamepadId, InputLayer};
use crate::ui::Presenter;

/// Registry slot handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PawnId(pub u32);

/// What a tick hook can see and touch
pub struct TickContext<'a> {
    pub session: &'a mut GameSession,
    pub input: &'a dyn InputLayer,
    pub display: &'a mut dyn Presenter,
}

impl TickContext<'_> {
    /// Request points through the scoring gate
    pub fn score(&mut self, team: Team, value: f64) -> bool {
        let setting_up = self.input.is_setting_up_player();
        self.session.score(team, value, setting_up, self.display)
    }
}

/// Cross-pawn change requested by a hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// Free -> Held
    Equip { player: PawnId, flag: PawnId },
    /// Held -> Free for whatever this player carries
    Release { player: PawnId },
}

/// A team member driven by one gamepad
#[derive(Debug, Clone)]
pub struct Player {
    pub team: Team,
    pub gamepad: GamepadId,
    /// Held equipment (a flag pawn)
    pub equipment: Option<PawnId>,
    pub body: BodyId,
    /// Latest stick input, applied as a force by the host
    pub thrust: Vec2,
}

impl Player {
    pub fn new(team: Team, gamepad: GamepadId, body: BodyId) -> Self {
        Self {
            team,
            gamepad,
            equipment: None,
            body,
            thrust: Vec2::ZERO,
        }
    }

    fn tick(&mut self, me: PawnId, ctx: &mut TickContext<'_>) -> Option<Interaction> {
        let pad = ctx.input.gamepad(self.gamepad);
        self.thrust = pad.stick;
        (pad.drop && self.equipment.is_some()).then_some(Interaction::Release { player: me })
    }

    fn handle_collision(
        &self,
        me: PawnId,
        other_id: PawnId,
        other: &Pawn,
        session: &GameSession,
    ) -> Option<Interaction> {
        match other {
            Pawn::Flag(flag)
                if self.equipment.is_none() && flag.holder.is_none() && flag.can_equip(session) =>
            {
                Some(Interaction::Equip {
                    player: me,
                    flag: other_id,
                })
            }
            Pawn::Player(opponent)
                if opponent.team != self.team
                    && opponent.equipment.is_some()
                    && session.is_carrier_round() =>
            {
                Some(Interaction::Release { player: other_id })
            }
            _ => None,
        }
    }
}

/// Arena-fixed scoring trigger
#[derive(Debug, Clone)]
pub struct Goal {
    /// Team defending this goal
    pub team: Team,
    /// Live during goal-based minigames
    pub lit: bool,
}

impl Goal {
    pub fn new(team: Team) -> Self {
        Self { team, lit: false }
    }

    fn tick(&mut self, ctx: &TickContext<'_>) {
        self.lit = ctx.session.game_type.is_some_and(|t| t.uses_goals());
    }
}

/// Every kind of game-logic entity
#[derive(Debug, Clone)]
pub enum Pawn {
    Player(Player),
    Flag(Flag),
    Goal(Goal),
}

impl Pawn {
    /// Per-step hook
    pub fn tick(
        &mut self,
        me: PawnId,
        step: &StepEvent,
        ctx: &mut TickContext<'_>,
    ) -> Option<Interaction> {
        match self {
            Pawn::Player(player) => player.tick(me, ctx),
            Pawn::Flag(flag) => {
                flag.tick(step, ctx);
                None
            }
            Pawn::Goal(goal) => {
                goal.tick(ctx);
                None
            }
        }
    }

    /// Collision hook: `self` was touched by `other`
    pub fn handle_collision(
        &self,
        me: PawnId,
        other_id: PawnId,
        other: &Pawn,
        session: &GameSession,
    ) -> Option<Interaction> {
        match self {
            Pawn::Player(player) => player.handle_collision(me, other_id, other, session),
            Pawn::Flag(_) | Pawn::Goal(_) => None,
        }
    }

    pub fn as_player(&self) -> Option<&Player> {
        match self {
            Pawn::Player(player) => Some(player),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<&Flag> {
        match self {
            Pawn::Flag(flag) => Some(flag),
            _ => None,
        }
    }

    pub fn as_goal(&self) -> Option<&Goal> {
        match self {
            Pawn::Goal(goal) => Some(goal),
            _ => None,
        }
    }
}

/// Slot storage for every live pawn
///
/// Freed slots are handed out again, so a removed `PawnId` may later name a
/// different pawn. Callers drop their ids on removal.
#[derive(Debug, Default)]
pub struct PawnRegistry {
    slots: Vec<Option<Pawn>>,
    free: Vec<u32>,
    live: usize,
}

impl PawnRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pawn: Pawn) -> PawnId {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            self.slots[index as usize] = Some(pawn);
            return PawnId(index);
        }
        let id = PawnId(self.slots.len() as u32);
        self.slots.push(Some(pawn));
        id
    }

    pub fn get(&self, id: PawnId) -> Option<&Pawn> {
        self.slots.get(id.0 as usize)?.as_ref()
    }

    pub fn get_mut(&mut self, id: PawnId) -> Option<&mut Pawn> {
        self.slots.get_mut(id.0 as usize)?.as_mut()
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn player_mut(&mut self, id: PawnId) -> Option<&mut Player> {
        match self.get_mut(id)? {
            Pawn::Player(player) => Some(player),
            _ => None,
        }
    }

    fn flag_mut(&mut self, id: PawnId) -> Option<&mut Flag> {
        match self.get_mut(id)? {
            Pawn::Flag(flag) => Some(flag),
            _ => None,
        }
    }

    /// Remove a pawn, unlinking any equipment it held or was held by
    pub fn remove(&mut self, id: PawnId) -> Option<Pawn> {
        let pawn = self.slots.get_mut(id.0 as usize)?.take()?;
        self.free.push(id.0);
        self.live -= 1;
        match &pawn {
            Pawn::Player(player) => {
                if let Some(flag) = player.equipment.and_then(|f| self.flag_mut(f)) {
                    flag.holder = None;
                }
            }
            Pawn::Flag(flag) => {
                if let Some(player) = flag.holder.and_then(|c| self.player_mut(c.player)) {
                    player.equipment = None;
                }
            }
            Pawn::Goal(_) => {}
        }
        Some(pawn)
    }

    /// Run both sides of a collision and collect what they asked for
    ///
    /// Both hooks see the state from before either request is applied.
    pub fn collide(&self, a: PawnId, b: PawnId, session: &GameSession) -> Vec<Interaction> {
        let (Some(pawn_a), Some(pawn_b)) = (self.get(a), self.get(b)) else {
            return Vec::new();
        };
        [
            pawn_a.handle_collision(a, b, pawn_b, session),
            pawn_b.handle_collision(b, a, pawn_a, session),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Apply a hook request; false when it no longer makes sense
    pub fn apply(&mut self, interaction: Interaction) -> bool {
        match interaction {
            Interaction::Equip { player, flag } => {
                let Some(team) = self
                    .player_mut(player)
                    .filter(|p| p.equipment.is_none())
                    .map(|p| p.team)
                else {
                    return false;
                };
                let Some(f) = self.flag_mut(flag).filter(|f| f.holder.is_none()) else {
                    return false;
                };
                f.holder = Some(Carrier { player, team });
                if let Some(p) = self.player_mut(player) {
                    p.equipment = Some(flag);
                }
                log::debug!("{:?} picked up {:?}", player, flag);
                true
            }
            Interaction::Release { player } => {
                let Some(flag) = self.player_mut(player).and_then(|p| p.equipment.take()) else {
                    return false;
                };
                if let Some(f) = self.flag_mut(flag) {
                    f.holder = None;
                }
                log::debug!("{:?} released {:?}", player, flag);
                true
            }
        }
    }
}
