//! Input validation for the calculator
//!
//! The calculator itself is total over its documented domain and performs
//! no validation; everything that could reject user input lives here, so
//! the calculator is never invoked on out-of-invariant data.

use crate::domain::model::{EnergyMix, TransportInput};
use crate::error::{Error, Result};

/// Validate transport quantities and the renewable mix before calculation
pub fn validate(inputs: &[TransportInput], mix: &EnergyMix) -> Result<()> {
    validate_quantities(inputs)?;
    validate_mix(mix)?;
    Ok(())
}

/// At least one transport category must be populated
pub fn validate_quantities(inputs: &[TransportInput]) -> Result<()> {
    if inputs.iter().all(|input| input.quantity == 0) {
        return Err(Error::InvalidInput(
            "provide at least one transportation value (cars, passengers, or containers) greater than 0".to_string(),
        ));
    }
    Ok(())
}

/// Each share must be a percentage and the combined share must not exceed 100%
pub fn validate_mix(mix: &EnergyMix) -> Result<()> {
    for (name, share) in [
        ("solar", mix.solar),
        ("wind", mix.wind),
        ("hydro", mix.hydro),
    ] {
        // NaN fails the range check as well
        if !(0.0..=100.0).contains(&share) {
            return Err(Error::InvalidInput(format!(
                "{} energy percentage must be between 0 and 100 (got {})",
                name, share
            )));
        }
    }

    let total = mix.total();
    if total > 100.0 {
        return Err(Error::InvalidInput(format!(
            "total green energy percentage cannot exceed 100% (current total: {:.1}%)",
            total
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TransportKind;

    #[test]
    fn test_accepts_valid_input() {
        let inputs = [TransportInput::new(TransportKind::Car, 1)];
        let mix = EnergyMix::new(40.0, 40.0, 20.0);
        assert!(validate(&inputs, &mix).is_ok());
    }

    #[test]
    fn test_rejects_all_zero_quantities() {
        let inputs = [
            TransportInput::new(TransportKind::Car, 0),
            TransportInput::new(TransportKind::Passenger, 0),
        ];
        let err = validate(&inputs, &EnergyMix::none()).unwrap_err();
        assert!(err.to_string().contains("at least one transportation value"));
    }

    #[test]
    fn test_rejects_empty_input_list() {
        assert!(validate(&[], &EnergyMix::none()).is_err());
    }

    #[test]
    fn test_rejects_mix_over_100() {
        // {40,40,21} sums to 101 and must never reach the calculator
        let mix = EnergyMix::new(40.0, 40.0, 21.0);
        let err = validate_mix(&mix).unwrap_err();
        assert!(err.to_string().contains("cannot exceed 100%"));
        assert!(err.to_string().contains("101.0%"));
    }

    #[test]
    fn test_rejects_out_of_range_share() {
        assert!(validate_mix(&EnergyMix::new(-1.0, 0.0, 0.0)).is_err());
        assert!(validate_mix(&EnergyMix::new(0.0, 101.0, 0.0)).is_err());
        assert!(validate_mix(&EnergyMix::new(0.0, 0.0, f64::NAN)).is_err());
    }

    #[test]
    fn test_accepts_boundary_mix() {
        assert!(validate_mix(&EnergyMix::new(100.0, 0.0, 0.0)).is_ok());
        assert!(validate_mix(&EnergyMix::new(0.0, 0.0, 0.0)).is_ok());
        assert!(validate_mix(&EnergyMix::new(33.0, 33.0, 34.0)).is_ok());
    }
}
