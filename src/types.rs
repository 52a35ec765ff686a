//! Core types for footprint estimation

use crate::domain::model::{EnergyMix, TransportInput, TransportKind};
use serde::{Deserialize, Serialize};

/// Emissions for a single transport category under the three scenarios
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionResult {
    /// Transport category
    pub kind: TransportKind,

    /// Unit count
    pub quantity: u64,

    /// Total CO2 with no mitigation, in kg
    pub co2_total: f64,

    /// Total CO2 if energy were coal-sourced, in kg
    pub coal_total: f64,

    /// Total CO2 with the green energy mix applied, in kg
    pub green_total: f64,
}

/// Aggregate footprint over all populated transport categories.
///
/// Derived, read-only output of the calculator. Pure numeric data shaped
/// for tabular and chart rendering; no presentation formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintSummary {
    /// One entry per category with quantity > 0
    pub results: Vec<EmissionResult>,

    /// Blended green coefficient applied to the no-mitigation figures
    pub green_coefficient: f64,

    /// Sum of CO2 totals, in kg
    pub total_co2: f64,

    /// Sum of coal-equivalent totals, in kg
    pub total_coal: f64,

    /// Sum of green-mitigated totals, in kg
    pub total_green: f64,

    /// Percentage decrease from no-mitigation to green-mitigated total.
    /// Zero when there are no emissions at all.
    pub reduction_percent: f64,
}

/// Qualitative band for a reduction percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactGrade {
    /// 0-25% reduction
    Minimal,
    /// 25-50% reduction
    Moderate,
    /// 50-75% reduction
    Strong,
    /// 75% and above
    High,
}

impl ImpactGrade {
    /// Determine grade from a reduction percentage
    pub fn from_reduction(percent: f64) -> Self {
        match percent {
            p if p < 25.0 => ImpactGrade::Minimal,
            p if p < 50.0 => ImpactGrade::Moderate,
            p if p < 75.0 => ImpactGrade::Strong,
            _ => ImpactGrade::High,
        }
    }

    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            ImpactGrade::Minimal => "Minimal Positive Impact",
            ImpactGrade::Moderate => "Moderate Positive Impact",
            ImpactGrade::Strong => "Strong Positive Impact",
            ImpactGrade::High => "High Positive Impact",
        }
    }
}

/// A calculation persisted to disk, with the inputs that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedCalculation {
    /// When the calculation ran
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Transport quantities as supplied
    pub inputs: Vec<TransportInput>,
    /// Renewable mix as supplied
    pub mix: EnergyMix,
    /// Computed summary
    pub summary: FootprintSummary,
}
