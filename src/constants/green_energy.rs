//! Green energy CO2 coefficients, in kg per kWh-equivalent

/// Solar power coefficient
pub const SOLAR_COEF: f64 = 0.012;
/// Wind power coefficient
pub const WIND_COEF: f64 = 0.011;
/// Hydro power coefficient
pub const HYDRO_COEF: f64 = 0.004;

/// Fallback coefficient when no renewable source is specified
pub const DEFAULT_GREEN_COEF: f64 = 0.03385;
