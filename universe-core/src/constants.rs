#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Astronomical Unit in kilometers (derived from IAU 2012 definition)
pub const AU_KM: f64 = 149_597_870.7;

/// Light-year in kilometers, as used by the simulation (rounded).
pub const LY_KM: f64 = 9.461e12;

/// Astronomical Unit in light-years (≈ 1.58125e-5).
pub const AU_LY: f64 = AU_KM / LY_KM;

/// Light-years per parsec.
pub const PARSEC_LY: f64 = 3.26156;

pub const EARTH_MASS_KG: f64 = 5.972e24;

pub const SOLAR_MASS_KG: f64 = 1.989e30;

/// Earth mass in solar masses (≈ 3.003e-6).
pub const EARTH_MASS_SOLAR: f64 = EARTH_MASS_KG / SOLAR_MASS_KG;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Nominal solar radius in kilometers.
pub const SOLAR_RADIUS_KM: f64 = 696_340.0;

/// Absolute visual magnitude of the Sun.
pub const SUN_ABSOLUTE_MAGNITUDE: f64 = 4.85;
