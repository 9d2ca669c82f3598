//! Perception outputs consumed by behaviour

use serde::{Deserialize, Serialize};

/// Ball position relative to the robot, in millimetres.
/// `x` is forward, `y` is to the left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct RelPos {
    pub x: f32,
    pub y: f32,
}

impl RelPos {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Anti-clockwise angle to the point, radians.
    pub fn heading(&self) -> f32 {
        self.y.atan2(self.x)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Read-only copy of the perception fields behaviour looks at in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PerceptionSnapshot {
    /// `None` when the ball has not been seen recently.
    pub ball_rel_pos: Option<RelPos>,
    /// Heading to the ball in radians. `None` follows `ball_rel_pos`.
    pub ball_heading: Option<f32>,
}

impl PerceptionSnapshot {
    pub fn with_ball(pos: RelPos) -> Self {
        Self { ball_rel_pos: Some(pos), ball_heading: Some(pos.heading()) }
    }

    pub fn lost() -> Self {
        Self::default()
    }

    /// Ball position, or `None` if missing or not a number.
    pub fn ball(&self) -> Option<RelPos> {
        self.ball_rel_pos.filter(RelPos::is_finite)
    }

    /// Turn parameter for the next body command. Without a heading the robot
    /// keeps walking straight.
    pub fn turn_to_ball(&self) -> f32 {
        self.ball_heading.filter(|h| h.is_finite()).unwrap_or(0.0)
    }

    /// True when the ball sits closer than `threshold_mm` in front of the
    /// robot. Unknown geometry is treated as far away.
    pub fn ball_is_near(&self, threshold_mm: f32) -> bool {
        self.ball().map(|pos| pos.x < threshold_mm).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_ball_is_far() {
        assert!(!PerceptionSnapshot::lost().ball_is_near(300.0));
    }

    #[test]
    fn test_nan_ball_is_far() {
        let snap = PerceptionSnapshot {
            ball_rel_pos: Some(RelPos::new(f32::NAN, 0.0)),
            ball_heading: Some(0.0),
        };
        assert!(!snap.ball_is_near(300.0));
    }

    #[test]
    fn test_near_threshold_is_strict() {
        assert!(PerceptionSnapshot::with_ball(RelPos::new(299.9, 0.0)).ball_is_near(300.0));
        assert!(!PerceptionSnapshot::with_ball(RelPos::new(300.0, 0.0)).ball_is_near(300.0));
    }

    #[test]
    fn test_ball_behind_robot_counts_as_near() {
        // only the forward offset is compared
        assert!(PerceptionSnapshot::with_ball(RelPos::new(-800.0, 50.0)).ball_is_near(300.0));
    }

    #[test]
    fn test_turn_defaults_to_straight() {
        assert_eq!(PerceptionSnapshot::lost().turn_to_ball(), 0.0);
        let snap = PerceptionSnapshot { ball_rel_pos: None, ball_heading: Some(f32::INFINITY) };
        assert_eq!(snap.turn_to_ball(), 0.0);
    }

    #[test]
    fn test_heading_from_position() {
        let pos = RelPos::new(0.0, 500.0);
        assert!((pos.heading() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((RelPos::new(300.0, 400.0).distance() - 500.0).abs() < 1e-3);
    }
}
