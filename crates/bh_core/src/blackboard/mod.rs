//! # Blackboard
//!
//! Shared memory between perception, behaviour and motion. Every field group
//! has exactly one writer:
//!
//! | group        | writer     | readers            |
//! |--------------|------------|--------------------|
//! | `perception` | perception | behaviour          |
//! | `motion`     | motion     | behaviour          |
//! | `behaviour`  | behaviour  | motion, LED driver |
//!
//! The behaviour request is double buffered. Behaviour writes the back buffer
//! and then flips `read_buf`, so motion always reads a complete request and
//! the previous frame's request stays visible until the next publish.

use serde::{Deserialize, Serialize};

use crate::types::{ActionType, BodyCommand, LedOverride, PerceptionSnapshot, RelPos};

/// Everything behaviour asks of the rest of the robot for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct BehaviourRequest {
    pub body: BodyCommand,
    /// Hint to perception and motion that the robot is lining up on the ball
    /// and wants a stable ball estimate.
    pub doing_ball_line_up: bool,
    pub led: Option<LedOverride>,
}

#[derive(Debug, Clone, Default)]
pub struct PerceptionBlackboard {
    pub ball_rel_pos: Option<RelPos>,
    pub ball_heading: Option<f32>,
}

impl PerceptionBlackboard {
    /// Perception writer: ball seen this frame.
    pub fn see_ball(&mut self, pos: RelPos) {
        self.ball_rel_pos = Some(pos);
        self.ball_heading = Some(pos.heading());
    }

    /// Perception writer: ball lost.
    pub fn lose_ball(&mut self) {
        self.ball_rel_pos = None;
        self.ball_heading = None;
    }
}

#[derive(Debug, Clone, Default)]
pub struct MotionBlackboard {
    /// What the motion executor is physically doing right now.
    pub active: ActionType,
    pub uptime_frames: u64,
}

#[derive(Debug, Clone, Default)]
pub struct BehaviourBlackboard {
    request: [BehaviourRequest; 2],
    read_buf: usize,
}

impl BehaviourBlackboard {
    /// Front buffer: the last published request.
    pub fn request(&self) -> &BehaviourRequest {
        &self.request[self.read_buf]
    }

    /// Write the back buffer, then make it the front buffer.
    pub fn publish(&mut self, request: BehaviourRequest) {
        let write_buf = 1 - self.read_buf;
        self.request[write_buf] = request;
        self.read_buf = write_buf;
    }

    pub fn read_buf(&self) -> usize {
        self.read_buf
    }
}

/// Read-only inputs for one behaviour tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackboardSnapshot {
    pub perception: PerceptionSnapshot,
    pub motion_active: ActionType,
    /// Request published on the previous tick.
    pub published: BehaviourRequest,
}

#[derive(Debug, Clone, Default)]
pub struct Blackboard {
    pub perception: PerceptionBlackboard,
    pub motion: MotionBlackboard,
    pub behaviour: BehaviourBlackboard,
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> BlackboardSnapshot {
        BlackboardSnapshot {
            perception: PerceptionSnapshot {
                ball_rel_pos: self.perception.ball_rel_pos,
                ball_heading: self.perception.ball_heading,
            },
            motion_active: self.motion.active,
            published: *self.behaviour.request(),
        }
    }
}
