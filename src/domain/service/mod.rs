//! Domain services
//!
//! This module contains business logic services for the domain layer.

pub mod emissions_calculator;
pub mod input_validator;

pub use emissions_calculator::{compute_emissions, green_coefficient, green_emission};
pub use input_validator::{validate, validate_mix, validate_quantities};
