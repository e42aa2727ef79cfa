//! Collision dispatch
//!
//! Every pair whose bodies both carry a pawn is a symmetric double dispatch:
//! A hears about B and B hears about A. Pairs with a bare side (walls, the
//! arena floor) are skipped. Pairs within one event have no defined order.

use super::game::Game;
use super::pawn::PawnId;
use super::world::{BodyId, CollisionEvent};
use crate::audio::AudioSink;
use crate::platform::InputLayer;
use crate::ui::Presenter;

impl<I: InputLayer, P: Presenter, A: AudioSink> Game<I, P, A> {
    /// Collision-start callback; returns how many pawn pairs were dispatched
    pub fn on_collision(&mut self, event: &CollisionEvent) -> usize {
        let mut dispatched = 0;
        for pair in &event.pairs {
            let (Some(a), Some(b)) = (self.pawn_at(pair.body_a), self.pawn_at(pair.body_b)) else {
                continue;
            };
            dispatched += 1;
            for request in self.pawns.collide(a, b, &self.session) {
                self.pawns.apply(request);
            }
        }
        dispatched
    }

    fn pawn_at(&self, body: BodyId) -> Option<PawnId> {
        let Some(found) = self.world.body(body) else {
            log::warn!("Collision names {:?}, which is not in the world", body);
            return None;
        };
        found.pawn
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::platform::GamepadId;
    use crate::sim::flag::FlagState;
    use crate::sim::state::{GameType, Team};
    use crate::sim::test_support::{TestGame, test_game};
    use crate::sim::{CollisionPair, StepEvent};

    struct Arena {
        game: TestGame,
        blue: PawnId,
        red: PawnId,
        flag: PawnId,
    }

    impl Arena {
        fn new(game_type: GameType) -> Self {
            let mut game = test_game();
            let blue = game.add_player(Team::Blue, GamepadId(0), Vec2::ZERO);
            let red = game.add_player(Team::Red, GamepadId(1), Vec2::ZERO);
            let flag = game.spawn_flag(Vec2::ZERO);
            game.on_step(&StepEvent { timestamp: 0.0 });
            game.session.game_type = Some(game_type);
            Self {
                game,
                blue,
                red,
                flag,
            }
        }

        fn body(&self, pawn: PawnId) -> BodyId {
            self.game
                .world()
                .bodies
                .iter()
                .find(|b| b.pawn == Some(pawn))
                .map(|b| b.id)
                .unwrap()
        }

        fn touch(&mut self, a: PawnId, b: PawnId) -> usize {
            let event = CollisionEvent::single(self.body(a), self.body(b));
            self.game.on_collision(&event)
        }

        fn step(&mut self, t: f64) {
            self.game.on_step(&StepEvent { timestamp: t });
        }

        fn flag_state(&self) -> FlagState {
            self.game.flag(self.flag).unwrap().state()
        }
    }

    #[test]
    fn test_pickup_from_either_side_of_pair() {
        let mut arena = Arena::new(GameType::KillTheCarrier);
        assert_eq!(arena.touch(arena.flag, arena.blue), 1);
        assert!(matches!(arena.flag_state(), FlagState::Held(c) if c.player == arena.blue));
        assert_eq!(arena.game.player(arena.blue).unwrap().equipment, Some(arena.flag));
    }

    #[test]
    fn test_no_pickup_in_other_minigames() {
        let mut arena = Arena::new(GameType::UltimateFlyingDisc);
        arena.touch(arena.blue, arena.flag);
        assert_eq!(arena.flag_state(), FlagState::Free);
    }

    #[test]
    fn test_tackle_then_cooldown_then_steal() {
        let mut arena = Arena::new(GameType::KillTheCarrier);
        arena.touch(arena.blue, arena.flag);
        arena.step(100.0);

        // Red knocks it loose
        arena.touch(arena.red, arena.blue);
        assert_eq!(arena.flag_state(), FlagState::Free);
        assert_eq!(arena.game.player(arena.blue).unwrap().equipment, None);

        // Too soon to grab it back
        arena.step(200.0);
        arena.touch(arena.red, arena.flag);
        assert_eq!(arena.flag_state(), FlagState::Free);

        // Cooldown passed
        arena.step(401.0);
        arena.touch(arena.red, arena.flag);
        assert!(matches!(arena.flag_state(), FlagState::Held(c) if c.team == Team::Red));
    }

    #[test]
    fn test_teammates_do_not_tackle() {
        let mut arena = Arena::new(GameType::Bonus);
        let mate = arena.game.add_player(Team::Blue, GamepadId(2), Vec2::ZERO);
        arena.touch(arena.blue, arena.flag);
        arena.touch(mate, arena.blue);
        assert!(matches!(arena.flag_state(), FlagState::Held(c) if c.player == arena.blue));
    }

    #[test]
    fn test_two_players_touch_flag_in_one_event() {
        let mut arena = Arena::new(GameType::KillTheCarrier);
        let flag_body = arena.body(arena.flag);
        let event = CollisionEvent {
            pairs: vec![
                CollisionPair {
                    body_a: arena.body(arena.red),
                    body_b: flag_body,
                },
                CollisionPair {
                    body_a: flag_body,
                    body_b: arena.body(arena.blue),
                },
            ],
        };
        assert_eq!(arena.game.on_collision(&event), 2);
        assert!(matches!(arena.flag_state(), FlagState::Held(c) if c.player == arena.red));
        assert_eq!(arena.game.player(arena.blue).unwrap().equipment, None);
    }

    #[test]
    fn test_pairs_without_pawns_are_skipped() {
        let mut arena = Arena::new(GameType::KillTheCarrier);
        let wall = arena.game.world_mut().add_body(Vec2::ZERO, None);
        let blue = arena.body(arena.blue);
        assert_eq!(arena.game.on_collision(&CollisionEvent::single(wall, blue)), 0);
        assert_eq!(
            arena.game.on_collision(&CollisionEvent::single(BodyId(9999), blue)),
            0
        );
    }
}
