//! Value objects - Immutable objects defined by their attributes

mod catalog;
mod coordinates;
mod names;
mod surface;

pub use catalog::{LocationCatalog, EMPTY_PLACEHOLDER, MISSING_PLACEHOLDER};
pub use coordinates::{
    Coordinates, LatitudeHemisphere, LongitudeHemisphere, MAX_LATITUDE, MAX_LONGITUDE,
};
pub use names::LocationName;
pub use surface::Surface;
