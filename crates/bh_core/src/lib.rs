//! # bh_core - Tick-Driven Robot Behaviour Engine
//!
//! Decision layer of a legged soccer robot. Once per behaviour frame a task
//! reads perception and motion status from the blackboard, decides which body
//! action to request, and publishes the request for the motion executor.
//!
//! ## Features
//! - Deterministic: timing is counted in ticks, never wall-clock time
//! - Explicit request/acknowledge handshake with motion
//! - Double-buffered blackboard with one writer per field group
//! - YAML/JSON tunable constants with env overrides
//! - Closed-loop simulation with a seeded ball model and JSON-lines traces

// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]

pub mod blackboard;
pub mod config;
pub mod debug_flags;
pub mod error;
pub mod motion;
pub mod runner;
pub mod sim;
pub mod task;
pub mod trace;
pub mod types;

pub use blackboard::{BehaviourRequest, Blackboard, BlackboardSnapshot};
pub use config::BehaviourConfig;
pub use error::{BehaviourError, Result};
pub use motion::{MotionExecutor, ScriptedMotion};
pub use runner::BehaviourRunner;
pub use sim::{SimConfig, Simulation, SimulationOutcome};
pub use task::{
    BehaviourTask, BehaviourTaskState, Handshake, TargetAction, TaskPhase, TaskStatus,
    TickContext, WalkKickDribble,
};
pub use trace::{TickRecord, TraceLog, TraceSummary};
pub use types::{
    ActionType, BodyCommand, LedColour, LedOverride, LedTarget, PerceptionSnapshot, RelPos,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blackboard_round_trip_through_task_and_motion() {
        let mut board = Blackboard::new();
        let task = WalkKickDribble::new(BehaviourConfig::quick()).unwrap();
        let mut runner = BehaviourRunner::activate(task);
        let mut motion = ScriptedMotion::new(1, 1);

        let mut seen = Vec::new();
        for _ in 0..20 {
            board.perception.see_ball(RelPos::new(150.0, 20.0));
            let record = runner.tick(&mut board);
            motion.update(&mut board);
            seen.push((record.request.body.action_type(), board.motion.active));
        }

        // quick config: 5 walk ticks, then kick; motion lines up, kicks, walks
        assert!(seen[..5].iter().all(|(req, _)| *req == ActionType::Walk));
        assert_eq!(seen[5], (ActionType::Kick, ActionType::LineUp));
        assert_eq!(seen[6], (ActionType::Kick, ActionType::Kick));
        assert_eq!(seen[7], (ActionType::Kick, ActionType::Walk));

        // kick done on tick 8, five more walk ticks, then the dribble
        assert!(seen[8..14].iter().all(|(req, _)| *req == ActionType::Walk));
        assert_eq!(seen[14], (ActionType::Dribble, ActionType::LineUp));
        assert_eq!(seen[15], (ActionType::Dribble, ActionType::Dribble));
        assert_eq!(seen[16], (ActionType::Dribble, ActionType::Walk));
        assert!(seen[17..].iter().all(|(req, _)| *req == ActionType::Walk));

        assert_eq!(runner.task().state().target, TargetAction::Kick);
        assert_eq!(motion.actions_performed(), 2);
    }
}
