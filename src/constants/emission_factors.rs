//! Per-unit emission factors for transport categories

use crate::domain::model::{EmissionFactor, TransportKind};
use std::collections::HashMap;
use std::sync::LazyLock;

/// CO2 emitted per car, in kg (no mitigation)
pub const CO2_PER_CAR: f64 = 0.87;
/// CO2 emitted per passenger, in kg (no mitigation)
pub const CO2_PER_PASSENGER: f64 = 0.25;
/// CO2 emitted per container, in kg (no mitigation)
pub const CO2_PER_CONTAINER: f64 = 10.21;

/// CO2 emitted per car if energy were coal-sourced, in kg
pub const COAL_PER_CAR: f64 = 1.25;
/// CO2 emitted per passenger if energy were coal-sourced, in kg
pub const COAL_PER_PASSENGER: f64 = 0.36;
/// CO2 emitted per container if energy were coal-sourced, in kg
pub const COAL_PER_CONTAINER: f64 = 14.71;

/// Emission factors per transport category
pub static EMISSION_FACTORS: LazyLock<HashMap<TransportKind, EmissionFactor>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();

        m.insert(
            TransportKind::Car,
            EmissionFactor {
                name: "Car".to_string(),
                co2_per_unit: CO2_PER_CAR,
                coal_per_unit: COAL_PER_CAR,
            },
        );

        m.insert(
            TransportKind::Passenger,
            EmissionFactor {
                name: "Passenger".to_string(),
                co2_per_unit: CO2_PER_PASSENGER,
                coal_per_unit: COAL_PER_PASSENGER,
            },
        );

        m.insert(
            TransportKind::Container,
            EmissionFactor {
                name: "Container".to_string(),
                co2_per_unit: CO2_PER_CONTAINER,
                coal_per_unit: COAL_PER_CONTAINER,
            },
        );

        m
    });

/// Get the emission factor for a transport category
pub fn get_emission_factor(kind: TransportKind) -> &'static EmissionFactor {
    // Safe: the table covers every TransportKind variant
    &EMISSION_FACTORS[&kind]
}
