use thiserror::Error;

/// Errors reported by [`PlannerConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("discount factor must be within [0, 1), got {0}")]
    Gamma(f64),
    #[error("convergence threshold must be positive, got {0}")]
    Theta(f64),
}

/// Parameters shared by value iteration and policy iteration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Discount factor applied to the successor value.
    pub gamma: f64,
    /// A sweep whose largest value change is below this ends iteration.
    pub theta: f64,
    /// Sweep cap for value iteration. Policy iteration ignores it.
    pub max_iter: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            gamma: 0.9,
            theta: 1e-4,
            max_iter: 5000,
        }
    }
}

impl PlannerConfig {
    /// Check the parameters.
    ///
    /// Policy evaluation only terminates for `gamma < 1`; value iteration
    /// tolerates `gamma == 1` thanks to `max_iter` but it is rejected here
    /// as well so one config works for both planners.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.gamma) {
            return Err(ConfigError::Gamma(self.gamma));
        }
        if self.theta.is_nan() || self.theta <= 0.0 {
            return Err(ConfigError::Theta(self.theta));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(PlannerConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_parameters() {
        let cfg = PlannerConfig {
            gamma: 1.0,
            ..PlannerConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::Gamma(1.0)));
        let cfg = PlannerConfig {
            theta: 0.0,
            ..PlannerConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::Theta(0.0)));
        let cfg = PlannerConfig {
            theta: f64::NAN,
            ..PlannerConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
