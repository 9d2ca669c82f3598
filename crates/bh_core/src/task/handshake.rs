//! Request/acknowledge handshake with the motion executor
//!
//! Motion reports `LINE_UP → KICK|DRIBBLE → WALK` on its own while it carries
//! out a ball action. Behaviour cannot tell "not started yet" from "already
//! finished" by looking at a single frame, so the attempt keeps a small latch:
//!
//! ```text
//! NotTriggered ──(motion reports target)──▶ Triggered ──(motion reports WALK or LINE_UP)──▶ Confirmed
//! ```
//!
//! Any other category seen while triggered (a fall, a stand) leaves the latch
//! alone. `Confirmed` is consumed by the task on the same tick it is reached.

use serde::{Deserialize, Serialize};

use crate::types::ActionType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Handshake {
    /// Motion has not been seen performing the attempted action yet.
    #[default]
    NotTriggered,
    /// Motion has been seen performing the attempted action.
    Triggered,
    /// Motion has moved on from the attempted action; it is complete.
    Confirmed,
}

impl Handshake {
    /// Completion check, done before the request for this tick is chosen.
    ///
    /// Only a latched attempt can complete; an unlatched one waits however
    /// long motion takes to start. `target` is never a walk category, so
    /// motion back in WALK or LINE_UP means the action has ended.
    pub fn check_completion(self, active: ActionType, target: ActionType) -> Self {
        match self {
            Handshake::Triggered if active != target && Self::ends_action(active) => {
                Handshake::Confirmed
            }
            other => other,
        }
    }

    fn ends_action(active: ActionType) -> bool {
        matches!(active, ActionType::Walk | ActionType::LineUp)
    }

    /// Latch update, done after the request for this tick is chosen.
    ///
    /// Categories other than `target` leave the latch alone, so motion
    /// reporting an action behaviour never asked for is treated as "not yet".
    pub fn observe(self, active: ActionType, target: ActionType) -> Self {
        match self {
            Handshake::NotTriggered if active == target => Handshake::Triggered,
            other => other,
        }
    }

    pub fn is_triggered(&self) -> bool {
        matches!(self, Handshake::Triggered)
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, Handshake::Confirmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let target = ActionType::Kick;
        let mut hs = Handshake::default();

        // lining up
        hs = hs.check_completion(ActionType::LineUp, target).observe(ActionType::LineUp, target);
        assert_eq!(hs, Handshake::NotTriggered);

        // kicking
        hs = hs.check_completion(ActionType::Kick, target).observe(ActionType::Kick, target);
        assert_eq!(hs, Handshake::Triggered);
        hs = hs.check_completion(ActionType::Kick, target);
        assert_eq!(hs, Handshake::Triggered);

        // back to walking
        hs = hs.check_completion(ActionType::Walk, target);
        assert!(hs.is_confirmed());
    }

    #[test]
    fn test_other_ball_action_does_not_latch() {
        let hs = Handshake::NotTriggered.observe(ActionType::Kick, ActionType::Dribble);
        assert_eq!(hs, Handshake::NotTriggered);
    }

    #[test]
    fn test_untriggered_never_completes() {
        for active in [ActionType::Walk, ActionType::LineUp, ActionType::Stand, ActionType::None] {
            let hs = Handshake::NotTriggered.check_completion(active, ActionType::Kick);
            assert_eq!(hs, Handshake::NotTriggered);
        }
    }

    #[test]
    fn test_unexpected_category_keeps_latch() {
        for active in [
            ActionType::GetupFront,
            ActionType::GetupBack,
            ActionType::Stand,
            ActionType::None,
            ActionType::Dead,
            ActionType::Dribble,
        ] {
            let hs = Handshake::Triggered.check_completion(active, ActionType::Kick);
            assert_eq!(hs, Handshake::Triggered, "{:?}", active);
        }
        let hs = Handshake::Triggered.check_completion(ActionType::LineUp, ActionType::Kick);
        assert!(hs.is_confirmed());
    }

    #[test]
    fn test_confirmed_is_sticky_until_reset() {
        let hs = Handshake::Confirmed
            .check_completion(ActionType::Kick, ActionType::Kick)
            .observe(ActionType::Kick, ActionType::Kick);
        assert!(hs.is_confirmed());
    }
}
