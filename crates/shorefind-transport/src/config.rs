use shorefind_paths::{SearchBudget, TraversalMode, WATER_PENALTY};

/// Tuning of the mini-map deployment search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SearchConfig {
    /// Iterations per `compute` call.
    pub iterations: usize,
    /// Number of `compute` calls before giving up.
    pub max_tries: u32,
    /// Adapter used on the coarse map.
    pub mode: TraversalMode,
    /// Added to a step that changes direction. Zero disables it.
    pub direction_change_penalty: i32,
    /// Extra cost of water in [`TraversalMode::LandPreferred`].
    pub water_penalty: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        let budget = SearchBudget::default();
        Self {
            iterations: budget.iterations,
            max_tries: budget.max_tries,
            mode: TraversalMode::default(),
            direction_change_penalty: 0,
            water_penalty: WATER_PENALTY,
        }
    }
}

impl SearchConfig {
    #[inline]
    pub fn budget(&self) -> SearchBudget {
        SearchBudget {
            iterations: self.iterations,
            max_tries: self.max_tries,
        }
    }
}
