//! Simulation configuration.

use thiserror::Error;

/// Default number of Monte Carlo trials.
pub const DEFAULT_TRIALS: usize = 100_000;

/// Default number of time steps per path (daily steps over one year).
pub const DEFAULT_STEPS: usize = 252;

/// Errors raised when a configuration is used for pricing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid config: trial count must be positive")]
    ZeroTrials,

    #[error("Invalid config: step count must be positive")]
    ZeroSteps,
}

/// Configuration for a pricing run.
///
/// Set once and reusable across many contracts. Validation happens when a
/// pricing call starts, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of independent trials
    pub n_trials: usize,

    /// Number of time steps per sample path
    pub n_steps: usize,

    /// Random seed for reproducibility (None = seed from OS entropy)
    pub seed: Option<u64>,

    /// Draw a single terminal value per trial for European contracts
    /// instead of a full path. Asian contracts ignore this.
    pub terminal_sampling: bool,
}

impl SimulationConfig {
    pub fn new(n_trials: usize, n_steps: usize, seed: Option<u64>) -> Self {
        Self {
            n_trials,
            n_steps,
            seed,
            terminal_sampling: false,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_trials(mut self, n_trials: usize) -> Self {
        self.n_trials = n_trials;
        self
    }

    pub fn with_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = n_steps;
        self
    }

    pub fn with_terminal_sampling(mut self, enabled: bool) -> Self {
        self.terminal_sampling = enabled;
        self
    }

    /// Check trial and step counts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_trials == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        if self.n_steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TRIALS, DEFAULT_STEPS, None)
    }
}
