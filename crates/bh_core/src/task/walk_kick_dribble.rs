//! Walk / Kick / Dribble demo task
//!
//! Walks on the spot for a fixed number of frames, then asks motion for a
//! kick. Once motion has kicked and gone back to walking, walks again and asks
//! for a dribble. Kick and dribble alternate forever.
//!
//! ## Phase Flow
//! ```text
//! Warmup ──(walk_phase_frames ticks)──▶ KickAttempt ──(motion done)──▶ Warmup
//!    ▲                                                                   │
//!    └──────(motion done)── DribbleAttempt ◀──(walk_phase_frames ticks)──┘
//! ```
//!
//! Timing is counted in ticks, never in wall-clock time.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::handshake::Handshake;
use super::{BehaviourTask, TickContext};
use crate::blackboard::BehaviourRequest;
use crate::config::BehaviourConfig;
use crate::debug_flags::tick_debug_enabled;
use crate::error::Result;
use crate::types::{ActionType, BodyCommand, LedColour, LedOverride};

/// Ball action attempted after the next warm-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TargetAction {
    #[default]
    Kick,
    Dribble,
}

impl TargetAction {
    /// Alternation flag value: 0 = kick, 1 = dribble
    pub fn flag(&self) -> u8 {
        match self {
            TargetAction::Kick => 0,
            TargetAction::Dribble => 1,
        }
    }

    pub fn other(&self) -> Self {
        match self {
            TargetAction::Kick => TargetAction::Dribble,
            TargetAction::Dribble => TargetAction::Kick,
        }
    }

    pub fn action_type(&self) -> ActionType {
        match self {
            TargetAction::Kick => ActionType::Kick,
            TargetAction::Dribble => ActionType::Dribble,
        }
    }

    pub fn command(&self, turn: f32) -> BodyCommand {
        match self {
            TargetAction::Kick => BodyCommand::Kick { turn },
            TargetAction::Dribble => BodyCommand::Dribble { turn },
        }
    }

    pub fn phase(&self) -> TaskPhase {
        match self {
            TargetAction::Kick => TaskPhase::KickAttempt,
            TargetAction::Dribble => TaskPhase::DribbleAttempt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskPhase {
    #[default]
    Warmup,
    KickAttempt,
    DribbleAttempt,
}

impl TaskPhase {
    /// Indicator colour for the phase
    pub fn colour(&self) -> LedColour {
        match self {
            TaskPhase::Warmup => LedColour::Red,
            TaskPhase::KickAttempt => LedColour::Blue,
            TaskPhase::DribbleAttempt => LedColour::Green,
        }
    }
}

/// Task-local state; lives for one activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BehaviourTaskState {
    /// Frames walked in the current warm-up, `0..=walk_phase_frames`
    pub walk_frames: u32,
    /// Action to attempt when the warm-up ends (the alternation flag)
    pub target: TargetAction,
    pub handshake: Handshake,
}

impl BehaviourTaskState {
    pub fn has_triggered_target_action(&self) -> bool {
        self.handshake.is_triggered()
    }

    pub fn alternation_flag(&self) -> u8 {
        self.target.flag()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatus {
    /// Phase of the last tick
    pub phase: TaskPhase,
    #[serde(flatten)]
    pub state: BehaviourTaskState,
}

pub struct WalkKickDribble {
    config: BehaviourConfig,
    state: BehaviourTaskState,
    phase: TaskPhase,
    /// Last unexpected motion category reported, to warn once per change
    last_unexpected: Option<ActionType>,
}

impl WalkKickDribble {
    /// Fails if the config would make the warm-up never end.
    pub fn new(config: BehaviourConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: BehaviourTaskState::default(),
            phase: TaskPhase::Warmup,
            last_unexpected: None,
        })
    }

    pub fn config(&self) -> &BehaviourConfig {
        &self.config
    }

    pub fn state(&self) -> &BehaviourTaskState {
        &self.state
    }

    pub fn phase(&self) -> TaskPhase {
        self.phase
    }

    fn walk(&mut self, turn: f32) -> BodyCommand {
        self.state.handshake = Handshake::NotTriggered;
        BodyCommand::Walk { turn }
    }

    /// Decision step, run once the warm-up counter has reached the boundary.
    fn attempt(&mut self, ctx: &TickContext, turn: f32) -> BodyCommand {
        let target = self.state.target;
        self.state.handshake =
            self.state.handshake.check_completion(ctx.motion_active, target.action_type());

        if self.state.handshake.is_confirmed() {
            info!(
                frame = ctx.frame,
                completed = target.action_type().name(),
                motion = ctx.motion_active.name(),
                "ball action finished, walking"
            );
            self.state.target = target.other();
            self.state.walk_frames = 0;
            self.last_unexpected = None;
            return self.walk(turn);
        }

        self.report_unexpected(ctx, target);
        target.command(turn)
    }

    fn report_unexpected(&mut self, ctx: &TickContext, target: TargetAction) {
        let active = ctx.motion_active;
        let expected = matches!(active, ActionType::Walk | ActionType::LineUp)
            || active == target.action_type();
        // motion has not seen our request yet on the first attempt tick
        let requested = ctx.published.body.action_type() == target.action_type();

        if expected || !requested {
            self.last_unexpected = None;
            return;
        }
        if self.last_unexpected != Some(active) {
            warn!(
                frame = ctx.frame,
                motion = active.name(),
                attempting = target.action_type().name(),
                "motion reports an action that was not requested; waiting"
            );
            self.last_unexpected = Some(active);
        }
    }
}

impl BehaviourTask for WalkKickDribble {
    type Status = TaskStatus;

    fn name(&self) -> &'static str {
        "WalkKickDribble"
    }

    fn init(&mut self) {
        self.state = BehaviourTaskState::default();
        self.phase = TaskPhase::Warmup;
        self.last_unexpected = None;
    }

    fn tick(&mut self, ctx: &TickContext) -> BehaviourRequest {
        let doing_ball_line_up = ctx.perception.ball_is_near(self.config.near_field_threshold_mm);
        if let (true, Some(ball)) = (doing_ball_line_up, ctx.perception.ball()) {
            if tick_debug_enabled() {
                debug!(frame = ctx.frame, x = ball.x, y = ball.y, "ball near, lining up");
            }
        }

        let turn = ctx.perception.turn_to_ball();
        let body = if self.state.walk_frames < self.config.walk_phase_frames {
            self.state.walk_frames += 1;
            self.walk(turn)
        } else {
            self.attempt(ctx, turn)
        };

        // motion goes LINE_UP → KICK|DRIBBLE → WALK on its own; latch when it
        // starts the action we are asking for
        if !body.is_walk() {
            self.state.handshake =
                self.state.handshake.observe(ctx.motion_active, body.action_type());
        }

        // a walk tick is warm-up even on the tick an attempt completes
        let phase = if body.is_walk() { TaskPhase::Warmup } else { self.state.target.phase() };
        if phase != self.phase {
            info!(frame = ctx.frame, from = ?self.phase, to = ?phase, "phase change");
            self.phase = phase;
        }

        if tick_debug_enabled() {
            debug!(
                frame = ctx.frame,
                ?body,
                walk_frames = self.state.walk_frames,
                handshake = ?self.state.handshake,
                motion = ctx.motion_active.name(),
                "tick"
            );
        }

        BehaviourRequest {
            body,
            doing_ball_line_up,
            led: Some(LedOverride::new(self.config.indicator, phase.colour())),
        }
    }

    fn status(&self) -> TaskStatus {
        TaskStatus { phase: self.phase, state: self.state }
    }
}
