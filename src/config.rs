//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Process-visible knobs for one engine value. Independent engines may carry
/// independent configs (useful for isolated subsystems and tests).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Config {
    /// If set and a `step` delta exceeds it, the delta is split into
    /// sequential sub-steps of at most this size. `None` disables splitting.
    pub max_step_seconds: Option<f32>,

    /// Upper bound on the number of sub-steps one `step` call may run. Any
    /// delta left uncovered after this many sub-steps is applied as a single
    /// oversized final step (determinism over exactness for catastrophic
    /// deltas).
    pub max_sub_steps: u32,

    /// Whether `start` writes property values immediately at the current
    /// offset before the first tick.
    pub apply_on_start: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_step_seconds: Some(1.0 / 60.0),
            max_sub_steps: 100,
            apply_on_start: true,
        }
    }
}
