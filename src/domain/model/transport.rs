//! Transport-related type definitions

use serde::{Deserialize, Serialize};

/// Transport category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportKind {
    Car,
    Passenger,
    Container,
}

impl TransportKind {
    /// All categories, in display order
    pub const ALL: [TransportKind; 3] = [
        TransportKind::Car,
        TransportKind::Passenger,
        TransportKind::Container,
    ];

    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            TransportKind::Car => "Car",
            TransportKind::Passenger => "Passenger",
            TransportKind::Container => "Container",
        }
    }
}

impl std::fmt::Display for TransportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single transport quantity supplied by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportInput {
    /// Transport category
    pub kind: TransportKind,
    /// Unit count (non-negative by construction)
    pub quantity: u64,
}

impl TransportInput {
    pub fn new(kind: TransportKind, quantity: u64) -> Self {
        Self { kind, quantity }
    }
}

/// Per-unit emission factors for a transport category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmissionFactor {
    /// Display name
    pub name: String,
    /// CO2 emitted per unit with no mitigation, in kg
    pub co2_per_unit: f64,
    /// CO2 emitted per unit if energy were coal-sourced, in kg
    pub coal_per_unit: f64,
}
