//! Pure unit conversions between the simulation's length and mass scales.
//!
//! The simulation works in light-years for positions, kilometers for radii and
//! kilograms for masses. Catalog files arrive in a mix of parsecs, AU, Earth
//! and solar units, so every ingestion path funnels through these helpers.
//!
//! | Quantity | Functions |
//! |----------|-----------|
//! | Length | [`au_to_km`], [`au_to_ly`], [`km_to_ly`], [`ly_to_km`], [`parsecs_to_ly`], [`ly_to_parsecs`] |
//! | Mass | [`earth_masses_to_kg`], [`solar_masses_to_kg`], [`kg_to_solar_masses`], [`kg_to_earth_masses`] |
//! | Radius | [`earth_radii_to_km`], [`solar_radii_to_km`], [`km_to_solar_radii`] |
//!
//! All functions are total: no validation, no failure modes. Callers that need
//! positivity (body construction) check it themselves.

use crate::constants::{
    AU_KM, AU_LY, EARTH_MASS_KG, EARTH_RADIUS_KM, LY_KM, PARSEC_LY, SOLAR_MASS_KG,
    SOLAR_RADIUS_KM,
};

#[inline]
pub fn au_to_km(au: f64) -> f64 {
    au * AU_KM
}

#[inline]
pub fn km_to_au(km: f64) -> f64 {
    km / AU_KM
}

/// Converts AU to light-years using [`AU_LY`](crate::constants::AU_LY).
///
/// Planet placement depends on this factor being exactly reproducible.
#[inline]
pub fn au_to_ly(au: f64) -> f64 {
    au * AU_LY
}

#[inline]
pub fn ly_to_au(ly: f64) -> f64 {
    ly / AU_LY
}

#[inline]
pub fn km_to_ly(km: f64) -> f64 {
    km / LY_KM
}

#[inline]
pub fn ly_to_km(ly: f64) -> f64 {
    ly * LY_KM
}

#[inline]
pub fn parsecs_to_ly(pc: f64) -> f64 {
    pc * PARSEC_LY
}

#[inline]
pub fn ly_to_parsecs(ly: f64) -> f64 {
    ly / PARSEC_LY
}

#[inline]
pub fn earth_masses_to_kg(m: f64) -> f64 {
    m * EARTH_MASS_KG
}

#[inline]
pub fn kg_to_earth_masses(kg: f64) -> f64 {
    kg / EARTH_MASS_KG
}

#[inline]
pub fn solar_masses_to_kg(m: f64) -> f64 {
    m * SOLAR_MASS_KG
}

#[inline]
pub fn kg_to_solar_masses(kg: f64) -> f64 {
    kg / SOLAR_MASS_KG
}

#[inline]
pub fn earth_radii_to_km(r: f64) -> f64 {
    r * EARTH_RADIUS_KM
}

#[inline]
pub fn solar_radii_to_km(r: f64) -> f64 {
    r * SOLAR_RADIUS_KM
}

#[inline]
pub fn km_to_solar_radii(km: f64) -> f64 {
    km / SOLAR_RADIUS_KM
}
