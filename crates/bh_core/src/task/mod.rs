//! Behaviour tasks
//!
//! A task is activated once, then ticked once per behaviour frame until it is
//! deactivated. Everything a task reads arrives through [`TickContext`];
//! everything it writes leaves as a [`BehaviourRequest`]. Tasks hold no
//! references to the blackboard or to other globals.

mod handshake;
mod walk_kick_dribble;

pub use handshake::Handshake;
pub use walk_kick_dribble::{
    BehaviourTaskState, TargetAction, TaskPhase, TaskStatus, WalkKickDribble,
};

use serde::Serialize;

use crate::blackboard::{BehaviourRequest, BlackboardSnapshot};
use crate::types::{ActionType, PerceptionSnapshot};

/// Inputs for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    /// 0-based frame index since activation
    pub frame: u64,
    pub perception: PerceptionSnapshot,
    /// Category motion reports as currently executing
    pub motion_active: ActionType,
    /// Request published on the previous tick
    pub published: BehaviourRequest,
}

impl TickContext {
    pub fn from_snapshot(frame: u64, snapshot: BlackboardSnapshot) -> Self {
        Self {
            frame,
            perception: snapshot.perception,
            motion_active: snapshot.motion_active,
            published: snapshot.published,
        }
    }
}

/// One behaviour task activation
pub trait BehaviourTask {
    /// Task-specific view of internal state, recorded in traces.
    type Status: Serialize + Clone + std::fmt::Debug;

    fn name(&self) -> &'static str;

    /// Reset task-local state. Called once per activation, before the first tick.
    fn init(&mut self);

    /// Run one frame. Must not block or perform I/O.
    fn tick(&mut self, ctx: &TickContext) -> BehaviourRequest;

    fn status(&self) -> Self::Status;
}
