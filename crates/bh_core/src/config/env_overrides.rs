//! Environment overrides for field tuning without editing config files

use super::BehaviourConfig;
use crate::error::{BehaviourError, Result};

pub const ENV_WALK_PHASE_FRAMES: &str = "BH_WALK_PHASE_FRAMES";
pub const ENV_NEAR_FIELD_MM: &str = "BH_NEAR_FIELD_MM";

fn parse_var<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| BehaviourError::InvalidConfig(format!("{name}={raw:?} is not a valid value")))
}

impl BehaviourConfig {
    /// Apply `BH_WALK_PHASE_FRAMES` / `BH_NEAR_FIELD_MM` if set, then validate.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|name| std::env::var(name).ok())
    }

    pub(crate) fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_WALK_PHASE_FRAMES) {
            self.walk_phase_frames = parse_var(ENV_WALK_PHASE_FRAMES, &raw)?;
            tracing::debug!(walk_phase_frames = self.walk_phase_frames, "env override");
        }
        if let Some(raw) = lookup(ENV_NEAR_FIELD_MM) {
            self.near_field_threshold_mm = parse_var(ENV_NEAR_FIELD_MM, &raw)?;
            tracing::debug!(near_field_threshold_mm = self.near_field_threshold_mm, "env override");
        }
        self.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_no_vars_keeps_config() {
        let mut cfg = BehaviourConfig::default();
        cfg.apply_overrides_from(lookup(&[])).unwrap();
        assert_eq!(cfg, BehaviourConfig::default());
    }

    #[test]
    fn test_overrides_applied() {
        let mut cfg = BehaviourConfig::default();
        cfg.apply_overrides_from(lookup(&[
            (ENV_WALK_PHASE_FRAMES, " 45 "),
            (ENV_NEAR_FIELD_MM, "350.5"),
        ]))
        .unwrap();
        assert_eq!(cfg.walk_phase_frames, 45);
        assert!((cfg.near_field_threshold_mm - 350.5).abs() < 0.01);
    }

    #[test]
    fn test_garbage_rejected() {
        let mut cfg = BehaviourConfig::default();
        let err = cfg.apply_overrides_from(lookup(&[(ENV_WALK_PHASE_FRAMES, "sixty")])).unwrap_err();
        assert!(err.to_string().contains(ENV_WALK_PHASE_FRAMES));
    }

    #[test]
    fn test_override_to_zero_fails_validation() {
        let mut cfg = BehaviourConfig::default();
        assert!(cfg.apply_overrides_from(lookup(&[(ENV_WALK_PHASE_FRAMES, "0")])).is_err());
    }
}
