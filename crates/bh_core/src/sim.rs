//! # Closed-loop simulation
//!
//! Runs perception → behaviour → motion once per frame against a shared
//! blackboard, the way the robot's threads do, with a seeded ball model
//! standing in for vision. Same seed → identical trace.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::blackboard::Blackboard;
use crate::config::BehaviourConfig;
use crate::error::{BehaviourError, Result};
use crate::motion::{MotionExecutor, ScriptedMotion};
use crate::runner::BehaviourRunner;
use crate::task::WalkKickDribble;
use crate::trace::{TraceLog, TraceSummary};
use crate::types::{ActionType, RelPos};

/// Closest the ball model lets the ball get, mm
const MIN_BALL_X_MM: f32 = 80.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub frames: u64,
    pub seed: u64,
    /// Frames motion spends in LINE_UP before a ball action
    pub lineup_frames: u32,
    /// Frames motion spends in KICK / DRIBBLE
    pub action_frames: u32,
    /// Chance per frame that vision loses the ball, 0.0..=1.0
    pub dropout: f64,
    /// Initial forward ball distance, mm
    pub start_distance_mm: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            seed: 42,
            lineup_frames: 10,
            action_frames: 20,
            dropout: 0.05,
            start_distance_mm: 600.0,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.dropout) {
            return Err(BehaviourError::InvalidConfig(format!(
                "dropout must be within 0.0..=1.0, got {}",
                self.dropout
            )));
        }
        if !self.start_distance_mm.is_finite() {
            return Err(BehaviourError::InvalidConfig(
                "start_distance_mm must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// Seeded ball relative to the robot
struct BallModel {
    rng: ChaCha8Rng,
    pos: RelPos,
    dropout: f64,
}

impl BallModel {
    fn new(cfg: &SimConfig) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(cfg.seed),
            pos: RelPos::new(cfg.start_distance_mm, 0.0),
            dropout: cfg.dropout,
        }
    }

    /// Move the ball according to what motion did last frame.
    fn advance(&mut self, motion: ActionType) {
        match motion {
            ActionType::Kick => {
                self.pos.x = self.rng.gen_range(800.0f32..1500.0);
                self.pos.y = self.rng.gen_range(-300.0f32..300.0);
            }
            ActionType::Dribble => {
                self.pos.x += self.rng.gen_range(10.0f32..25.0);
            }
            _ => {
                self.pos.x = (self.pos.x - self.rng.gen_range(5.0f32..15.0)).max(MIN_BALL_X_MM);
                self.pos.y = self.pos.y * 0.95 + self.rng.gen_range(-10.0f32..10.0);
            }
        }
    }

    fn write(&mut self, board: &mut Blackboard) {
        if self.rng.gen_bool(self.dropout) {
            board.perception.lose_ball();
        } else {
            board.perception.see_ball(self.pos);
        }
    }
}

pub struct SimulationOutcome {
    pub trace: TraceLog,
    pub summary: TraceSummary,
    /// Ball actions motion carried through to the end
    pub motion_actions: u32,
}

pub struct Simulation {
    board: Blackboard,
    runner: BehaviourRunner<WalkKickDribble>,
    motion: ScriptedMotion,
    ball: BallModel,
    frames: u64,
}

impl Simulation {
    pub fn new(behaviour: BehaviourConfig, sim: &SimConfig) -> Result<Self> {
        sim.validate()?;
        let task = WalkKickDribble::new(behaviour)?;
        Ok(Self {
            board: Blackboard::new(),
            runner: BehaviourRunner::activate(task),
            motion: ScriptedMotion::new(sim.lineup_frames, sim.action_frames),
            ball: BallModel::new(sim),
            frames: sim.frames,
        })
    }

    /// Run every configured frame and deactivate the task.
    pub fn run(mut self) -> SimulationOutcome {
        info!(frames = self.frames, "simulation started");
        let mut trace = TraceLog::new();
        for _ in 0..self.frames {
            self.ball.write(&mut self.board);
            trace.push(self.runner.tick(&mut self.board));
            self.motion.update(&mut self.board);
            self.ball.advance(self.board.motion.active);
        }
        let summary = self.runner.deactivate();
        SimulationOutcome { trace, summary, motion_actions: self.motion.actions_performed() }
    }
}
