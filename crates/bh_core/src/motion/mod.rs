//! Motion executor interface
//!
//! Motion runs after behaviour in every frame. It reads the published
//! [`BehaviourRequest`] and reports which body action it is executing; the
//! report is what behaviour sees on its next tick.

mod scripted;

pub use scripted::ScriptedMotion;

use crate::blackboard::{BehaviourRequest, Blackboard};
use crate::types::ActionType;

pub trait MotionExecutor {
    /// Consume one frame's request and return the category now executing.
    fn step(&mut self, request: &BehaviourRequest) -> ActionType;

    /// Read the front request buffer and write the motion fields.
    fn update(&mut self, board: &mut Blackboard) {
        let request = *board.behaviour.request();
        board.motion.active = self.step(&request);
        board.motion.uptime_frames += 1;
    }
}
