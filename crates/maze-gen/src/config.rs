use crate::error::GenError;

/// Parameters of [`generate`](crate::generate) and
/// [`MazeGen::make_solvable`](crate::MazeGen::make_solvable).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GenConfig {
    /// Chance that each interior wall opens right after carving.
    pub loop_probability: f64,
    /// Chance used by each retry while the goal is unreachable.
    pub retry_loop_probability: f64,
    /// Upper bound on retries before the maze is declared unsolvable.
    pub max_retries: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            loop_probability: 0.1,
            retry_loop_probability: 0.2,
            max_retries: 10,
        }
    }
}

impl GenConfig {
    /// Check that both probabilities lie in `[0, 1]`.
    pub fn validate(&self) -> Result<(), GenError> {
        for (name, value) in [
            ("loop_probability", self.loop_probability),
            ("retry_loop_probability", self.retry_loop_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(GenError::Probability { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(GenConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_probabilities() {
        let cfg = GenConfig {
            retry_loop_probability: 1.5,
            ..GenConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(GenError::Probability { name: "retry_loop_probability", .. })
        ));
        let cfg = GenConfig {
            loop_probability: f64::NAN,
            ..GenConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: GenConfig = serde_json::from_str(r#"{"max_retries": 3}"#).unwrap();
        assert_eq!(cfg.max_retries, 3);
        assert_eq!(cfg.loop_probability, 0.1);
    }
}
