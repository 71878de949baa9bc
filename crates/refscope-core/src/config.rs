//! View configuration
//!
//! The only tunable is the presentation depth ceiling. It bounds how far the
//! schema tree expands nested children; it has no effect on resolution,
//! which terminates through cycle detection alone.

use config::{Config, Environment};

use crate::errors::{RefscopeError, Result};

/// Default ceiling for nested expansion in the schema tree
pub const DEFAULT_MAX_DEPTH: usize = 7;

/// Environment prefix, so `REFSCOPE_MAX_DEPTH` sets `max_depth`
pub const ENV_PREFIX: &str = "REFSCOPE";

const KEY_MAX_DEPTH: &str = "max_depth";

/// Presentation settings for [`SchemaView`](crate::view::SchemaView)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    /// Children are expanded only while the current depth is below this
    pub max_depth: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ViewConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Load from the process environment (`REFSCOPE_MAX_DEPTH`)
    ///
    /// # Errors
    /// * `InvalidConfig` - If the variable is set but not a non-negative integer
    pub fn from_env() -> Result<Self> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    /// Load from an explicit environment source
    ///
    /// # Errors
    /// * `InvalidConfig` - If `max_depth` is not a non-negative integer
    pub fn from_environment(env: Environment) -> Result<Self> {
        let settings = Config::builder()
            .set_default(KEY_MAX_DEPTH, DEFAULT_MAX_DEPTH as i64)
            .and_then(|builder| builder.add_source(env).build())
            .map_err(|e| invalid(e.to_string()))?;

        let max_depth = settings
            .get_int(KEY_MAX_DEPTH)
            .map_err(|e| invalid(e.to_string()))?;

        let max_depth = usize::try_from(max_depth)
            .map_err(|_| invalid(format!("must not be negative, got {}", max_depth)))?;

        Ok(Self { max_depth })
    }
}

fn invalid(reason: String) -> RefscopeError {
    RefscopeError::InvalidConfig {
        key: KEY_MAX_DEPTH.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with(pairs: &[(&str, &str)]) -> Environment {
        let source: config::Map<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    #[test]
    fn test_default_max_depth() {
        assert_eq!(ViewConfig::default().max_depth, 7);
        assert_eq!(ViewConfig::default().with_max_depth(2).max_depth, 2);
    }

    #[test]
    fn test_unset_environment_uses_default() {
        let config = ViewConfig::from_environment(env_with(&[])).unwrap();
        assert_eq!(config, ViewConfig::default());
    }

    #[test]
    fn test_environment_override() {
        let config =
            ViewConfig::from_environment(env_with(&[("REFSCOPE_MAX_DEPTH", "3")])).unwrap();
        assert_eq!(config.max_depth, 3);
    }

    #[test]
    fn test_zero_is_allowed() {
        let config =
            ViewConfig::from_environment(env_with(&[("REFSCOPE_MAX_DEPTH", "0")])).unwrap();
        assert_eq!(config.max_depth, 0);
    }

    #[test]
    fn test_non_numeric_rejected() {
        let err = ViewConfig::from_environment(env_with(&[("REFSCOPE_MAX_DEPTH", "deep")]))
            .unwrap_err();
        assert!(matches!(err, RefscopeError::InvalidConfig { ref key, .. } if key == "max_depth"));
    }

    #[test]
    fn test_negative_rejected() {
        let err = ViewConfig::from_environment(env_with(&[("REFSCOPE_MAX_DEPTH", "-1")]))
            .unwrap_err();
        assert!(matches!(err, RefscopeError::InvalidConfig { .. }));
    }
}
