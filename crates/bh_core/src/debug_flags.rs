use std::sync::OnceLock;

pub(crate) fn env_flag_enabled(name: &str) -> bool {
    std::env::var(name)
        .map(|value| {
            matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            )
        })
        .unwrap_or(false)
}

/// Per-tick debug logging. Debug builds only, `BH_DEBUG_TICKS=1`.
pub fn tick_debug_enabled() -> bool {
    if !cfg!(debug_assertions) {
        return false;
    }
    static FLAG: OnceLock<bool> = OnceLock::new();
    *FLAG.get_or_init(|| env_flag_enabled("BH_DEBUG_TICKS"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_flag_is_disabled() {
        assert!(!env_flag_enabled("BH_DEBUG_FLAG_THAT_IS_NEVER_SET"));
    }
}
