//! Population unit conversion.
//!
//! Populations are carried in millions throughout the workspace; migration
//! counts and housing demand are carried in absolute people / homes.

/// People per million.
pub const MILLION: f64 = 1_000_000.0;

#[inline]
pub fn millions_to_people(millions: f64) -> f64 {
    millions * MILLION
}

#[inline]
pub fn people_to_millions(people: f64) -> f64 {
    people / MILLION
}
