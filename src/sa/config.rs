//! SA configuration.

/// Configuration for one annealing run.
///
/// The cooling schedule is a fixed geometric decay: after every batch of
/// `iterations_per_temperature` inner iterations, `T ← T · cooling_factor`,
/// until `T` drops to `min_temperature`. This gives a deterministic run
/// length of `⌈log(min/initial) / log(factor)⌉` temperature levels.
///
/// # Examples
///
/// ```
/// use cvrp_anneal::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling_factor(0.9)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Terminal temperature. The run converges when T drops to this.
    pub min_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_factor: f64,

    /// Number of inner iterations at each temperature level.
    pub iterations_per_temperature: usize,

    /// Retry bound for the randomized greedy construction.
    pub construction_attempts: usize,

    /// Retry bound for feasible-neighbor generation.
    pub neighbor_attempts: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 2000.0,
            min_temperature: 1e-3,
            cooling_factor: 0.95,
            iterations_per_temperature: 100,
            construction_attempts: 100,
            neighbor_attempts: 1000,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_factor(mut self, factor: f64) -> Self {
        self.cooling_factor = factor;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_construction_attempts(mut self, n: usize) -> Self {
        self.construction_attempts = n;
        self
    }

    pub fn with_neighbor_attempts(mut self, n: usize) -> Self {
        self.neighbor_attempts = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        if self.cooling_factor <= 0.0 || self.cooling_factor >= 1.0 {
            return Err(format!(
                "cooling_factor must be in (0, 1), got {}",
                self.cooling_factor
            ));
        }
        if self.iterations_per_temperature == 0 {
            return Err("iterations_per_temperature must be at least 1".into());
        }
        if self.construction_attempts == 0 || self.neighbor_attempts == 0 {
            return Err("retry bounds must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert!((config.initial_temperature - 2000.0).abs() < 1e-10);
        assert!((config.min_temperature - 1e-3).abs() < 1e-12);
        assert!((config.cooling_factor - 0.95).abs() < 1e-10);
        assert_eq!(config.iterations_per_temperature, 100);
        assert_eq!(config.construction_attempts, 100);
        assert_eq!(config.neighbor_attempts, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperatures() {
        assert!(SaConfig::default()
            .with_initial_temperature(-1.0)
            .validate()
            .is_err());
        assert!(SaConfig::default()
            .with_initial_temperature(1.0)
            .with_min_temperature(2.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_bad_cooling_factor() {
        assert!(SaConfig::default().with_cooling_factor(1.0).validate().is_err());
        assert!(SaConfig::default().with_cooling_factor(0.0).validate().is_err());
    }

    #[test]
    fn test_validate_bad_bounds() {
        assert!(SaConfig::default()
            .with_iterations_per_temperature(0)
            .validate()
            .is_err());
        assert!(SaConfig::default()
            .with_neighbor_attempts(0)
            .validate()
            .is_err());
    }
}
