//! Ports the domain needs from the outside world: randomness and the list
//! of candidate location names.

use crate::value_objects::LocationCatalog;

/// Source of randomness for generated points.
#[cfg_attr(test, mockall::automock)]
pub trait RandomPort {
    /// Uniform value in `min..=max`.
    fn gen_f64(&self, min: f64, max: f64) -> f64;

    /// Fair coin flip.
    fn gen_bool(&self) -> bool;

    /// Uniform index in `0..len`. Never called with `len == 0`.
    fn gen_index(&self, len: usize) -> usize;
}

/// Provider of the location-name catalog.
///
/// Implementations resolve the catalog at most once; a missing source stays
/// missing for the lifetime of the provider.
pub trait NameSource {
    fn catalog(&self) -> &LocationCatalog;
}
