//! Energy-mix type definitions

use serde::{Deserialize, Serialize};

/// Renewable energy mix as percentages of the total energy supply.
///
/// Invariant: each share is in [0, 100] and `solar + wind + hydro <= 100`.
/// The uncovered remainder is implicitly non-renewable. Upheld by the
/// input validator; the calculator does not re-check it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyMix {
    /// Solar share in percent
    pub solar: f64,
    /// Wind share in percent
    pub wind: f64,
    /// Hydro share in percent
    pub hydro: f64,
}

impl EnergyMix {
    pub fn new(solar: f64, wind: f64, hydro: f64) -> Self {
        Self { solar, wind, hydro }
    }

    /// Mix with no renewable coverage at all
    pub fn none() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Combined renewable share in percent
    pub fn total(&self) -> f64 {
        self.solar + self.wind + self.hydro
    }

    /// Whether any renewable source is present
    pub fn has_renewables(&self) -> bool {
        self.total() > 0.0
    }
}
