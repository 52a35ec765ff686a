//! Footprint Calc Library
//!
//! CO2 footprint estimation for transportation inputs, with a coal-energy
//! baseline, a renewable-mix mitigation model, and AI-assisted analysis.

pub mod chart;
pub mod chat;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod export;
pub mod output;
pub mod types;

pub use domain::model::{EnergyMix, TransportInput, TransportKind};
pub use domain::service::{compute_emissions, green_coefficient};
pub use types::{EmissionResult, FootprintSummary};
