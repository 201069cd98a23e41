use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_GATES: u32 = 50;
pub const DEFAULT_MAX_GATE_HEIGHT: u32 = 10;
pub const DEFAULT_MAX_GATE_WIDTH: u32 = 10;
pub const DEFAULT_MAX_PINS_PER_EDGE: u32 = 2;

/// Bounds for the instance sampler.
///
/// Every field is an inclusive upper bound for a draw whose lower bound is 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of gates is drawn from `1..=max_gates`.
    pub max_gates: u32,
    /// Gate height is drawn from `1..=max_gate_height`.
    pub max_gate_height: u32,
    /// Gate width is drawn from `1..=max_gate_width`.
    pub max_gate_width: u32,
    /// Upper bound for the per-gate edge cap, see [`crate::sampler`].
    pub max_pins_per_edge: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_gates: DEFAULT_MAX_GATES,
            max_gate_height: DEFAULT_MAX_GATE_HEIGHT,
            max_gate_width: DEFAULT_MAX_GATE_WIDTH,
            max_pins_per_edge: DEFAULT_MAX_PINS_PER_EDGE,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} must be at least 1 (got {value})")]
    NonPositive { field: &'static str, value: u32 },
    #[error("max_gates must be at least 2 (got {0}); a lone gate can never be matched")]
    TooFewGates(u32),
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("max_gates", self.max_gates),
            ("max_gate_height", self.max_gate_height),
            ("max_gate_width", self.max_gate_width),
            ("max_pins_per_edge", self.max_pins_per_edge),
        ];
        for (field, value) in fields {
            if value == 0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.max_gates < 2 {
            return Err(ConfigError::TooFewGates(self.max_gates));
        }
        Ok(())
    }
}
