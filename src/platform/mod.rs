//! Platform abstraction layer
//!
//! The session never touches hardware. It sees:
//! - Input: gamepad snapshots polled once per step, plus the controller setup flag

pub mod input;

pub use input::{GamepadId, GamepadState, InputLayer, ScriptedInput};
