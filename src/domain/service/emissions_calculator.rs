//! Emissions calculation functions
//!
//! Pure functions mapping transport quantities and a renewable-energy mix
//! to emission totals under three scenarios: no mitigation, coal-equivalent,
//! and green-mitigated. No I/O, no shared state; safe to call repeatedly
//! and reentrantly.
//!
//! Callers must ensure quantities are non-negative and the mix satisfies
//! its invariant (`domain::service::input_validator`); these functions do
//! not re-validate.

use crate::constants::emission_factors::get_emission_factor;
use crate::constants::green_energy::{
    DEFAULT_GREEN_COEF, HYDRO_COEF, SOLAR_COEF, WIND_COEF,
};
use crate::domain::model::{EnergyMix, TransportInput};
use crate::types::{EmissionResult, FootprintSummary};

/// Calculate the blended green coefficient for an energy mix
///
/// # Formula
/// coefficient = (solar/total) x SOLAR + (wind/total) x WIND + (hydro/total) x HYDRO
///
/// where total = solar + wind + hydro. Falls back to `DEFAULT_GREEN_COEF`
/// when the mix has no renewable source at all.
///
/// Only the relative mix of solar/wind/hydro matters, not how much of the
/// footprint renewables cover: {10,10,0} and {50,50,0} yield the same
/// coefficient. Preserved exactly for compatibility with the upstream model.
pub fn green_coefficient(mix: &EnergyMix) -> f64 {
    let total = mix.total();
    if total == 0.0 {
        return DEFAULT_GREEN_COEF;
    }

    (mix.solar / total) * SOLAR_COEF
        + (mix.wind / total) * WIND_COEF
        + (mix.hydro / total) * HYDRO_COEF
}

/// Calculate the green-mitigated emission for a no-mitigation CO2 figure
pub fn green_emission(co2_kg: f64, coefficient: f64) -> f64 {
    co2_kg * coefficient
}

/// Compute the full footprint summary for a set of transport inputs.
///
/// Zero-quantity inputs produce no row. Aggregates each scenario across
/// all rows and derives the reduction percentage, guarded to 0 when there
/// are no emissions. Never fails for well-formed input.
pub fn compute_emissions(inputs: &[TransportInput], mix: &EnergyMix) -> FootprintSummary {
    let coefficient = green_coefficient(mix);

    let mut results = Vec::new();
    let mut total_co2 = 0.0;
    let mut total_coal = 0.0;
    let mut total_green = 0.0;

    for input in inputs.iter().filter(|input| input.quantity > 0) {
        let factor = get_emission_factor(input.kind);
        let quantity = input.quantity as f64;

        let co2_total = quantity * factor.co2_per_unit;
        let coal_total = quantity * factor.coal_per_unit;
        let green_total = green_emission(co2_total, coefficient);

        total_co2 += co2_total;
        total_coal += coal_total;
        total_green += green_total;

        results.push(EmissionResult {
            kind: input.kind,
            quantity: input.quantity,
            co2_total,
            coal_total,
            green_total,
        });
    }

    let reduction_percent = if total_co2 != 0.0 {
        (1.0 - total_green / total_co2) * 100.0
    } else {
        0.0
    };

    FootprintSummary {
        results,
        green_coefficient: coefficient,
        total_co2,
        total_coal,
        total_green,
        reduction_percent,
    }
}
