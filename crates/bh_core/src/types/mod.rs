//! Shared value types for the behaviour ↔ motion interface

mod action_command;
mod perception;

pub use action_command::{ActionType, BodyCommand, LedColour, LedOverride, LedTarget};
pub use perception::{PerceptionSnapshot, RelPos};
