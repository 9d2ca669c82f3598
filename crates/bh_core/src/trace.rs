//! # Tick Trace
//!
//! Per-tick record of what behaviour saw and asked for. Used to answer "why
//! did the robot do that?" after a run.
//!
//! ## Usage
//! ```rust,ignore
//! let mut log = TraceLog::new();
//! log.push(runner.tick(&mut board));
//! std::fs::write("trace.jsonl", log.to_json_lines()?)?;
//! println!("{}", log.summary());
//! ```

use std::fmt;

use serde::Serialize;

use crate::blackboard::BehaviourRequest;
use crate::error::Result;
use crate::task::TaskStatus;
use crate::types::{ActionType, BodyCommand};

/// One behaviour tick
#[derive(Debug, Clone, Serialize)]
pub struct TickRecord<S = TaskStatus> {
    pub frame: u64,
    /// Category motion reported when the tick ran
    pub motion_active: ActionType,
    pub request: BehaviourRequest,
    pub status: S,
}

/// Running counts over a task activation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct TraceSummary {
    pub ticks: u64,
    pub walk_ticks: u64,
    pub kick_ticks: u64,
    pub dribble_ticks: u64,
    /// Kick attempts that ended with behaviour walking again
    pub kicks_completed: u64,
    pub dribbles_completed: u64,
    pub lineup_hint_ticks: u64,
}

impl TraceSummary {
    pub fn record(&mut self, previous: Option<&BodyCommand>, request: &BehaviourRequest) {
        self.ticks += 1;
        match request.body {
            BodyCommand::Walk { .. } => self.walk_ticks += 1,
            BodyCommand::Kick { .. } => self.kick_ticks += 1,
            BodyCommand::Dribble { .. } => self.dribble_ticks += 1,
        }
        if request.body.is_walk() {
            match previous {
                Some(BodyCommand::Kick { .. }) => self.kicks_completed += 1,
                Some(BodyCommand::Dribble { .. }) => self.dribbles_completed += 1,
                _ => {}
            }
        }
        if request.doing_ball_line_up {
            self.lineup_hint_ticks += 1;
        }
    }
}

impl fmt::Display for TraceSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "ticks:              {}", self.ticks)?;
        writeln!(f, "walk / kick / drib: {} / {} / {}", self.walk_ticks, self.kick_ticks, self.dribble_ticks)?;
        writeln!(f, "kicks completed:    {}", self.kicks_completed)?;
        writeln!(f, "dribbles completed: {}", self.dribbles_completed)?;
        write!(f, "line-up hint ticks: {}", self.lineup_hint_ticks)
    }
}

#[derive(Debug, Clone)]
pub struct TraceLog<S = TaskStatus> {
    records: Vec<TickRecord<S>>,
}

impl<S> Default for TraceLog<S> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

impl<S: Serialize> TraceLog<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: TickRecord<S>) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[TickRecord<S>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Emitted body commands in tick order
    pub fn bodies(&self) -> impl Iterator<Item = &BodyCommand> {
        self.records.iter().map(|r| &r.request.body)
    }

    pub fn summary(&self) -> TraceSummary {
        let mut summary = TraceSummary::default();
        let mut previous = None;
        for record in &self.records {
            summary.record(previous, &record.request);
            previous = Some(&record.request.body);
        }
        summary
    }

    /// One JSON object per line
    pub fn to_json_lines(&self) -> Result<String> {
        let mut out = String::with_capacity(self.records.len() * 160);
        for record in &self.records {
            out.push_str(&serde_json::to_string(record)?);
            out.push('\n');
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(body: BodyCommand, hint: bool) -> BehaviourRequest {
        BehaviourRequest { body, doing_ball_line_up: hint, led: None }
    }

    #[test]
    fn test_summary_counts_completions() {
        let mut s = TraceSummary::default();
        let walk = BodyCommand::Walk { turn: 0.0 };
        let kick = BodyCommand::Kick { turn: 0.0 };
        let dribble = BodyCommand::Dribble { turn: 0.0 };

        s.record(None, &req(walk, false));
        s.record(Some(&walk), &req(kick, true));
        s.record(Some(&kick), &req(kick, true));
        s.record(Some(&kick), &req(walk, false));
        s.record(Some(&walk), &req(dribble, false));
        s.record(Some(&dribble), &req(walk, false));

        assert_eq!(s.ticks, 6);
        assert_eq!(s.walk_ticks, 3);
        assert_eq!(s.kick_ticks, 2);
        assert_eq!(s.dribble_ticks, 1);
        assert_eq!(s.kicks_completed, 1);
        assert_eq!(s.dribbles_completed, 1);
        assert_eq!(s.lineup_hint_ticks, 2);
    }

    #[test]
    fn test_json_lines_one_per_record() {
        let mut log: TraceLog<u32> = TraceLog::new();
        for frame in 0..3 {
            log.push(TickRecord {
                frame,
                motion_active: ActionType::Walk,
                request: req(BodyCommand::Walk { turn: 0.0 }, false),
                status: frame as u32,
            });
        }
        let text = log.to_json_lines().unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);

        let parsed: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
        assert_eq!(parsed["frame"], 2);
        assert_eq!(parsed["motion_active"], "WALK");
        assert_eq!(parsed["request"]["body"]["action"], "walk");
        assert_eq!(parsed["status"], 2);
    }

    #[test]
    fn test_summary_display() {
        let text = TraceSummary { ticks: 4, kicks_completed: 1, ..Default::default() }.to_string();
        assert!(text.contains("ticks:              4"));
        assert!(text.contains("kicks completed:    1"));
    }
}
