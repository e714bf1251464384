//! GeoMap Domain - map points and the collection that owns them.
//!
//! ## Structure
//!
//! - `collections/` - the singly-linked list backing the collection
//! - `value_objects/` - coordinates, hemispheres, names, surfaces, name catalog
//! - `entities/` - the `MapPoint` entity and its manual construction request
//! - `aggregates/` - the bounded `PointCollection`
//! - `ports` - randomness and name-source traits implemented by the engine

pub mod aggregates;
pub mod collections;
pub mod entities;
pub mod error;
pub mod ids;
pub mod ports;
pub mod value_objects;

pub use aggregates::{CollectionSummary, FilterCriterion, PointCollection, MAX_POINTS};
pub use collections::{IndexOutOfRange, LinkedList};
pub use entities::{land_percentage, ManualPoint, MapPoint};
pub use error::DomainError;
pub use ids::{IdCounter, PointId};
pub use ports::{NameSource, RandomPort};
pub use value_objects::{
    Coordinates, LatitudeHemisphere, LocationCatalog, LocationName, LongitudeHemisphere, Surface,
    EMPTY_PLACEHOLDER, MISSING_PLACEHOLDER,
};
