//! Behaviour runner
//!
//! Owns one task activation and connects it to the blackboard:
//!
//! ```text
//! snapshot(blackboard) → task.tick(ctx) → blackboard.behaviour.publish(request)
//! ```
//!
//! The caller guarantees ticks never overlap; the runner takes `&mut
//! Blackboard` for the duration of a tick and holds nothing between ticks.

use tracing::info;

use crate::blackboard::Blackboard;
use crate::task::{BehaviourTask, TickContext};
use crate::trace::{TickRecord, TraceSummary};
use crate::types::BodyCommand;

pub struct BehaviourRunner<T: BehaviourTask> {
    task: T,
    frame: u64,
    last_body: Option<BodyCommand>,
    summary: TraceSummary,
}

impl<T: BehaviourTask> BehaviourRunner<T> {
    /// Activate `task`. Its state is reset before the first tick.
    pub fn activate(mut task: T) -> Self {
        task.init();
        info!(task = task.name(), "behaviour task activated");
        Self { task, frame: 0, last_body: None, summary: TraceSummary::default() }
    }

    /// Run one frame against the blackboard.
    pub fn tick(&mut self, board: &mut Blackboard) -> TickRecord<T::Status> {
        let ctx = TickContext::from_snapshot(self.frame, board.snapshot());
        let request = self.task.tick(&ctx);
        board.behaviour.publish(request);

        self.summary.record(self.last_body.as_ref(), &request);
        self.last_body = Some(request.body);

        let record = TickRecord {
            frame: self.frame,
            motion_active: ctx.motion_active,
            request,
            status: self.task.status(),
        };
        self.frame += 1;
        record
    }

    /// Frames ticked so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn task(&self) -> &T {
        &self.task
    }

    pub fn summary(&self) -> &TraceSummary {
        &self.summary
    }

    /// End the activation. Task state is dropped with the runner.
    pub fn deactivate(self) -> TraceSummary {
        info!(
            task = self.task.name(),
            frames = self.frame,
            kicks = self.summary.kicks_completed,
            dribbles = self.summary.dribbles_completed,
            "behaviour task deactivated"
        );
        self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BehaviourConfig;
    use crate::task::{TaskPhase, WalkKickDribble};
    use crate::types::{ActionType, LedColour, RelPos};

    fn runner() -> BehaviourRunner<WalkKickDribble> {
        BehaviourRunner::activate(WalkKickDribble::new(BehaviourConfig::quick()).unwrap())
    }

    #[test]
    fn test_tick_publishes_request() {
        let mut board = Blackboard::new();
        board.perception.see_ball(RelPos::new(200.0, 0.0));
        let mut r = runner();

        let before = board.behaviour.read_buf();
        let record = r.tick(&mut board);
        assert_ne!(board.behaviour.read_buf(), before);
        assert_eq!(*board.behaviour.request(), record.request);
        assert!(board.behaviour.request().doing_ball_line_up);
        assert_eq!(board.behaviour.request().led.unwrap().colour, LedColour::Red);
        assert_eq!(record.frame, 0);
        assert_eq!(r.frame(), 1);
    }

    #[test]
    fn test_previous_request_is_overwritten() {
        let mut board = Blackboard::new();
        board.perception.see_ball(RelPos::new(200.0, 0.0));
        let mut r = runner();
        r.tick(&mut board);
        assert!(board.behaviour.request().doing_ball_line_up);

        board.perception.lose_ball();
        r.tick(&mut board);
        assert!(!board.behaviour.request().doing_ball_line_up);
    }

    #[test]
    fn test_records_follow_status() {
        let mut board = Blackboard::new();
        let mut r = runner();
        let phase_frames = BehaviourConfig::quick().walk_phase_frames as u64;

        for _ in 0..phase_frames {
            assert_eq!(r.tick(&mut board).status.phase, TaskPhase::Warmup);
        }
        let record = r.tick(&mut board);
        assert_eq!(record.frame, phase_frames);
        assert_eq!(record.status.phase, TaskPhase::KickAttempt);
        assert_eq!(board.behaviour.request().body.action_type(), ActionType::Kick);
    }

    #[test]
    fn test_deactivate_returns_summary() {
        let mut board = Blackboard::new();
        let mut r = runner();
        for _ in 0..10 {
            r.tick(&mut board);
        }
        let summary = r.deactivate();
        assert_eq!(summary.ticks, 10);
        assert_eq!(summary.walk_ticks + summary.kick_ticks + summary.dribble_ticks, 10);
    }
}
