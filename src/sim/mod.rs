//! Session simulation module
//!
//! All game rules live here. This module must stay free of I/O:
//! - Driven only by step and collision callbacks from the host
//! - Single-threaded; one `GameSession` owned by the running `Game`
//! - Output goes through the `Presenter` and `AudioSink` traits

pub mod collision;
pub mod controller;
pub mod flag;
pub mod game;
pub mod pawn;
pub mod scoring;
pub mod state;
pub mod tick;
pub mod world;

pub use controller::{Controller, Outputs, RoundChange};
pub use flag::{Carrier, Flag, FlagState, FlagTexture};
pub use game::Game;
pub use pawn::{Goal, Interaction, Pawn, PawnId, PawnRegistry, Player, TickContext};
pub use scoring::ScoringGate;
pub use state::{GameSession, GameType, Team, TeamScores};
pub use tick::PlayerMarker;
pub use world::{
    Body, BodyId, CollisionEvent, CollisionPair, Composite, CompositeId, StepEvent, World,
};
