use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};

/// default time budget of the genetic algorithm (seconds)
pub const DEFAULT_TIME_LIMIT:f32 = 300.;

/// larger time limits (and infinity) are clamped to this value (seconds, about 31 years)
pub const MAX_TIME_LIMIT:f32 = 1e9;

/// default number of generations without change of the generation best before stopping
pub const DEFAULT_STAGNATION_LIMIT:usize = 4;

/**
Parameters of the optimization pipeline.

Can be read from a json file, missing fields take their default value:
```json
{ "time_limit": 10.0, "population_size": 200, "seed": 42 }
```
*/
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// wall-clock budget of the genetic algorithm in seconds
    pub time_limit: f32,
    /// number of greedy colorings added to the initial population (None: n²)
    pub population_size: Option<usize>,
    /// stop after this many consecutive generations with the same best conflict count (0: disabled)
    pub stagnation_limit: usize,
    /// optional limit on the number of generations
    pub max_generations: Option<usize>,
    /// seed of the random number generator (None: seeded from the OS)
    pub seed: Option<u64>,
    /// applies the 2-opt local search on the result of the genetic algorithm
    pub local_search: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
            population_size: None,
            stagnation_limit: DEFAULT_STAGNATION_LIMIT,
            max_generations: None,
            seed: None,
            local_search: false,
        }
    }
}

impl SolverConfig {
    /// reads a configuration from a json file
    pub fn from_json_file<P:AsRef<Path>>(filename:P) -> Result<Self> {
        let path = filename.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ColorError::io(path, e))?;
        let res:Self = serde_json::from_str(&content)?;
        res.validate()?;
        Ok(res)
    }

    /// sets the time budget (seconds)
    pub fn with_time_limit(mut self, t:f32) -> Self {
        self.time_limit = t;
        self
    }

    /// sets the number of greedy colorings of the initial population
    pub fn with_population_size(mut self, size:usize) -> Self {
        self.population_size = Some(size);
        self
    }

    /// sets the stagnation limit
    pub fn with_stagnation_limit(mut self, limit:usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// sets the maximum number of generations
    pub fn with_max_generations(mut self, limit:usize) -> Self {
        self.max_generations = Some(limit);
        self
    }

    /// sets the random seed
    pub fn with_seed(mut self, seed:u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// enables or disables the final 2-opt
    pub fn with_local_search(mut self, enabled:bool) -> Self {
        self.local_search = enabled;
        self
    }

    /// population size used for a graph with n vertices
    pub fn population_size_for(&self, n:usize) -> usize {
        self.population_size.unwrap_or_else(|| n.saturating_mul(n))
    }

    /// time budget given to the stopping criteria: time_limit clamped to [0, MAX_TIME_LIMIT]
    pub fn time_budget(&self) -> f32 {
        if self.time_limit.is_nan() {
            return 0.;
        }
        self.time_limit.max(0.).min(MAX_TIME_LIMIT)
    }

    /// checks that the parameters can be used by the solver
    pub fn validate(&self) -> Result<()> {
        if !self.time_limit.is_finite() || self.time_limit < 0. {
            return Err(ColorError::InvalidConfig(
                format!("time_limit must be a non-negative number of seconds (got {})", self.time_limit)
            ));
        }
        if self.max_generations == Some(0) {
            return Err(ColorError::InvalidConfig("max_generations must be positive".to_string()));
        }
        Ok(())
    }
}
