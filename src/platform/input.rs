//! Gamepad input contract

use std::collections::{HashMap, HashSet};

use glam::Vec2;

use crate::sim::StepEvent;

/// Hardware gamepad slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GamepadId(pub u32);

/// Per-step snapshot of one gamepad
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GamepadState {
    /// Left stick, each axis in [-1, 1]
    pub stick: Vec2,
    /// Drop held equipment (edge-triggered)
    pub drop: bool,
}

/// What the session needs from the input layer
pub trait InputLayer {
    /// Called once at the start of every step
    fn poll_gamepads(&mut self, step: &StepEvent);

    /// A controller is currently being bound to a player slot
    fn is_setting_up_player(&self) -> bool;

    /// This gamepad has finished setup
    fn setup_complete(&self, gamepad: GamepadId) -> bool;

    /// Latest snapshot for a gamepad (neutral when unknown)
    fn gamepad(&self, gamepad: GamepadId) -> GamepadState;
}

/// Input layer driven by code instead of hardware (headless runs, tests)
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    /// Setup in progress
    pub setting_up: bool,
    /// Gamepads still walking through setup
    pub unready: HashSet<GamepadId>,
    sticks: HashMap<GamepadId, Vec2>,
    pending_drops: HashSet<GamepadId>,
    current: HashMap<GamepadId, GamepadState>,
    polls: u64,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_stick(&mut self, gamepad: GamepadId, stick: Vec2) {
        self.sticks
            .insert(gamepad, stick.clamp(Vec2::splat(-1.0), Vec2::splat(1.0)));
    }

    /// Press drop for the next polled step only
    pub fn press_drop(&mut self, gamepad: GamepadId) {
        self.pending_drops.insert(gamepad);
    }

    pub fn polls(&self) -> u64 {
        self.polls
    }
}

impl InputLayer for ScriptedInput {
    fn poll_gamepads(&mut self, _step: &StepEvent) {
        self.polls += 1;
        let drops = std::mem::take(&mut self.pending_drops);

        let mut ids: HashSet<GamepadId> = self.sticks.keys().copied().collect();
        ids.extend(drops.iter().copied());

        self.current = ids
            .into_iter()
            .map(|id| {
                let state = GamepadState {
                    stick: self.sticks.get(&id).copied().unwrap_or(Vec2::ZERO),
                    drop: drops.contains(&id),
                };
                (id, state)
            })
            .collect();
    }

    fn is_setting_up_player(&self) -> bool {
        self.setting_up
    }

    fn setup_complete(&self, gamepad: GamepadId) -> bool {
        !self.unready.contains(&gamepad)
    }

    fn gamepad(&self, gamepad: GamepadId) -> GamepadState {
        self.current.get(&gamepad).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_is_one_shot() {
        let mut input = ScriptedInput::new();
        let pad = GamepadId(0);
        input.press_drop(pad);

        input.poll_gamepads(&StepEvent { timestamp: 0.0 });
        assert!(input.gamepad(pad).drop);

        input.poll_gamepads(&StepEvent { timestamp: 33.0 });
        assert!(!input.gamepad(pad).drop);
        assert_eq!(input.polls(), 2);
    }

    #[test]
    fn test_stick_is_clamped_and_sticky() {
        let mut input = ScriptedInput::new();
        let pad = GamepadId(2);
        input.set_stick(pad, Vec2::new(3.0, -0.5));
        input.poll_gamepads(&StepEvent { timestamp: 0.0 });
        input.poll_gamepads(&StepEvent { timestamp: 33.0 });
        assert_eq!(input.gamepad(pad).stick, Vec2::new(1.0, -0.5));
    }

    #[test]
    fn test_unknown_pad_is_neutral() {
        let input = ScriptedInput::new();
        assert_eq!(input.gamepad(GamepadId(9)), GamepadState::default());
        assert!(input.setup_complete(GamepadId(9)));
    }
}
