//! Commands exchanged between behaviour and motion
//!
//! The motion executor owns the body. Behaviour only ever asks for one body
//! command per frame and watches `ActionType` to learn what motion is really
//! doing.

use serde::{Deserialize, Serialize};

/// Body action categories reported by the motion executor.
///
/// Behaviour requests a subset of these (`Walk`, `Kick`, `Dribble`). Motion is
/// free to report anything else, e.g. `LineUp` while it positions the feet
/// behind the ball, or `GetupFront` after a fall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    #[default]
    None,
    Stand,
    Walk,
    Dribble,
    TurnDribble,
    Kick,
    LineUp,
    GetupFront,
    GetupBack,
    Dead,
}

impl ActionType {
    pub fn name(&self) -> &'static str {
        match self {
            ActionType::None => "NONE",
            ActionType::Stand => "STAND",
            ActionType::Walk => "WALK",
            ActionType::Dribble => "DRIBBLE",
            ActionType::TurnDribble => "TURN_DRIBBLE",
            ActionType::Kick => "KICK",
            ActionType::LineUp => "LINE_UP",
            ActionType::GetupFront => "GETUP_FRONT",
            ActionType::GetupBack => "GETUP_BACK",
            ActionType::Dead => "DEAD",
        }
    }

    /// Ball-contact actions the motion executor performs after lining up.
    pub fn is_ball_action(&self) -> bool {
        matches!(self, ActionType::Kick | ActionType::Dribble)
    }
}

/// Body command requested by behaviour for one frame.
///
/// `turn` is the anti-clockwise turn in radians, normally the heading to the
/// ball.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum BodyCommand {
    Walk { turn: f32 },
    Kick { turn: f32 },
    Dribble { turn: f32 },
}

impl Default for BodyCommand {
    fn default() -> Self {
        BodyCommand::Walk { turn: 0.0 }
    }
}

impl BodyCommand {
    /// Category motion will report once it executes this command.
    pub fn action_type(&self) -> ActionType {
        match self {
            BodyCommand::Walk { .. } => ActionType::Walk,
            BodyCommand::Kick { .. } => ActionType::Kick,
            BodyCommand::Dribble { .. } => ActionType::Dribble,
        }
    }

    pub fn turn(&self) -> f32 {
        match *self {
            BodyCommand::Walk { turn }
            | BodyCommand::Kick { turn }
            | BodyCommand::Dribble { turn } => turn,
        }
    }

    pub fn is_walk(&self) -> bool {
        matches!(self, BodyCommand::Walk { .. })
    }
}

/// Indicator colours available to behaviour overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedColour {
    Red,
    Green,
    Blue,
    White,
    Off,
}

/// LED groups that behaviour may override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LedTarget {
    #[default]
    LeftEye,
    RightEye,
    ChestButton,
}

/// One indicator write. Never read back by behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedOverride {
    pub target: LedTarget,
    pub colour: LedColour,
}

impl LedOverride {
    pub fn new(target: LedTarget, colour: LedColour) -> Self {
        Self { target, colour }
    }
}
