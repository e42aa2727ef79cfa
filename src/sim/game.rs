//! The running game: session, world mirror, pawns, and host surfaces
//!
//! The host registers `on_step`, `on_collision` and `after_render` with its
//! physics engine once at startup and calls them on one thread.

use glam::Vec2;

use super::controller::Controller;
use super::flag::Flag;
use super::pawn::{Goal, Pawn, PawnId, PawnRegistry, Player};
use super::state::{GameSession, Team};
use super::world::{BodyId, CompositeId, World};
use crate::audio::AudioSink;
use crate::platform::{GamepadId, InputLayer};
use crate::settings::Settings;
use crate::ui::{Presenter, scoreboard_text};

pub struct Game<I, P, A> {
    pub(super) settings: Settings,
    pub(super) session: GameSession,
    pub(super) world: World,
    pub(super) pawns: PawnRegistry,
    /// Goal pawns, ticked after every attached pawn
    pub(super) goals: Vec<PawnId>,
    pub(super) controller: Controller,
    pub(super) input: I,
    pub(super) display: P,
    pub(super) audio: A,
}

impl<I: InputLayer, P: Presenter, A: AudioSink> Game<I, P, A> {
    pub fn new(settings: Settings, input: I, display: P, audio: A) -> Self {
        let settings = settings.sanitized();
        let mut game = Self {
            session: GameSession::new(settings.total_rounds),
            world: World::new(),
            pawns: PawnRegistry::new(),
            goals: Vec::new(),
            controller: Controller::new(&settings),
            settings,
            input,
            display,
            audio,
        };
        game.display.update_scoreboard(&scoreboard_text(&game.session));
        game
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// For the host to mirror body positions
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn pawns(&self) -> &PawnRegistry {
        &self.pawns
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn display(&self) -> &P {
        &self.display
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn player(&self, id: PawnId) -> Option<&Player> {
        self.pawns.get(id)?.as_player()
    }

    pub fn flag(&self, id: PawnId) -> Option<&Flag> {
        self.pawns.get(id)?.as_flag()
    }

    pub fn goal(&self, id: PawnId) -> Option<&Goal> {
        self.pawns.get(id)?.as_goal()
    }

    /// Attach a pawn to a new body
    pub fn spawn_body(&mut self, pawn: Pawn, position: Vec2) -> (PawnId, BodyId) {
        let id = self.pawns.insert(pawn);
        let body = self.world.add_body(position, Some(id));
        (id, body)
    }

    /// Attach a pawn to a new composite of existing bodies
    pub fn spawn_composite(&mut self, pawn: Pawn, bodies: Vec<BodyId>) -> (PawnId, CompositeId) {
        let id = self.pawns.insert(pawn);
        let composite = self.world.add_composite(bodies, Some(id));
        (id, composite)
    }

    pub fn add_player(&mut self, team: Team, gamepad: GamepadId, position: Vec2) -> PawnId {
        let id = self.pawns.insert(Pawn::Player(Player::new(team, gamepad, BodyId(0))));
        let body = self.world.add_body(position, Some(id));
        if let Some(Pawn::Player(player)) = self.pawns.get_mut(id) {
            player.body = body;
        }
        self.session.players.push(id);
        log::info!(
            "Player {} joined {} team ({} players)",
            id.0,
            team.name(),
            self.session.players.len()
        );
        id
    }

    pub fn spawn_flag(&mut self, position: Vec2) -> PawnId {
        let flag = Flag::new(&self.settings);
        self.spawn_body(Pawn::Flag(flag), position).0
    }

    /// Goals are arena fixtures, not world bodies
    pub fn add_goal(&mut self, team: Team) -> PawnId {
        let id = self.pawns.insert(Pawn::Goal(Goal::new(team)));
        self.goals.push(id);
        id
    }

    /// A body left the world; its pawn goes with it
    pub fn remove_body(&mut self, body: BodyId) -> Option<Pawn> {
        let id = self.world.remove_body(body)?;
        self.forget_pawn(id)
    }

    pub fn remove_composite(&mut self, composite: CompositeId) -> Option<Pawn> {
        let id = self.world.remove_composite(composite)?;
        self.forget_pawn(id)
    }

    /// Remove a player, dropping anything they carried
    pub fn remove_player(&mut self, id: PawnId) -> bool {
        let Some(body) = self.player(id).map(|p| p.body) else {
            return false;
        };
        self.remove_body(body).is_some()
    }

    fn forget_pawn(&mut self, id: PawnId) -> Option<Pawn> {
        let pawn = self.pawns.remove(id)?;
        if matches!(pawn, Pawn::Player(_)) {
            self.session.players.retain(|&p| p != id);
            log::info!(
                "Player {} left ({} players)",
                id.0,
                self.session.players.len()
            );
        }
        self.goals.retain(|&g| g != id);
        Some(pawn)
    }
}
