//! Scripted motion executor
//!
//! Deterministic stand-in for the real walk engine, reproducing only the
//! category sequence behaviour depends on:
//!
//! ```text
//! Walking ──(Kick|Dribble requested)──▶ LiningUp ──(lineup_frames)──▶ Performing
//!    ▲                                                                   │
//!    └──────(Walk requested)── Finished ◀──────(action_frames)───────────┘
//! ```
//!
//! `Finished` reports WALK but does not start a new ball action until
//! behaviour has asked for a walk, so a stale kick request is not replayed.

use super::MotionExecutor;
use crate::blackboard::BehaviourRequest;
use crate::types::ActionType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExecState {
    Walking,
    LiningUp { action: ActionType, frames_left: u32 },
    Performing { action: ActionType, frames_left: u32 },
    Finished,
}

#[derive(Debug, Clone)]
pub struct ScriptedMotion {
    lineup_frames: u32,
    action_frames: u32,
    state: ExecState,
    actions_performed: u32,
}

impl ScriptedMotion {
    /// `action_frames` is raised to 1; a ball action is always visible for at
    /// least one frame.
    pub fn new(lineup_frames: u32, action_frames: u32) -> Self {
        Self {
            lineup_frames,
            action_frames: action_frames.max(1),
            state: ExecState::Walking,
            actions_performed: 0,
        }
    }

    /// Kicks and dribbles carried through to the end
    pub fn actions_performed(&self) -> u32 {
        self.actions_performed
    }

    fn start(&self, action: ActionType) -> ExecState {
        if self.lineup_frames > 0 {
            ExecState::LiningUp { action, frames_left: self.lineup_frames }
        } else {
            ExecState::Performing { action, frames_left: self.action_frames }
        }
    }

    fn next_state(&mut self, requested: ActionType) -> ExecState {
        let state = self.state;
        match state {
            ExecState::Walking if requested.is_ball_action() => self.start(requested),
            ExecState::Walking => ExecState::Walking,
            // behaviour changed its mind while lining up
            ExecState::LiningUp { action, .. } if requested != action => ExecState::Walking,
            ExecState::LiningUp { action, frames_left } if frames_left <= 1 => {
                ExecState::Performing { action, frames_left: self.action_frames }
            }
            ExecState::LiningUp { action, frames_left } => {
                ExecState::LiningUp { action, frames_left: frames_left - 1 }
            }
            ExecState::Performing { frames_left, .. } if frames_left <= 1 => {
                self.actions_performed += 1;
                ExecState::Finished
            }
            ExecState::Performing { action, frames_left } => {
                ExecState::Performing { action, frames_left: frames_left - 1 }
            }
            ExecState::Finished if requested == ActionType::Walk => ExecState::Walking,
            ExecState::Finished => ExecState::Finished,
        }
    }
}

impl MotionExecutor for ScriptedMotion {
    fn step(&mut self, request: &BehaviourRequest) -> ActionType {
        self.state = self.next_state(request.body.action_type());
        match self.state {
            ExecState::Walking | ExecState::Finished => ActionType::Walk,
            ExecState::LiningUp { .. } => ActionType::LineUp,
            ExecState::Performing { action, .. } => action,
        }
    }
}
