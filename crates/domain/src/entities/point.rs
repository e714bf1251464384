//! Map point entity and its manual construction request

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::ids::PointId;
use crate::ports::{NameSource, RandomPort};
use crate::value_objects::{
    Coordinates, LatitudeHemisphere, LocationName, LongitudeHemisphere, Surface,
};

/// A point on the map.
///
/// # Invariants
///
/// - `id` never changes after construction
/// - `surface` is always `Surface::classify(location_name)`
/// - coordinates are always valid (enforced by `Coordinates`)
///
/// # Example
///
/// ```
/// use geomap_domain::entities::MapPoint;
/// use geomap_domain::ids::PointId;
/// use geomap_domain::value_objects::{Coordinates, LocationName, Surface};
///
/// let coords = Coordinates::parse(53.5, "N", 108.0, "E").unwrap();
/// let point = MapPoint::new(PointId::new(0), coords, LocationName::new("Lake Baikal").unwrap());
///
/// assert_eq!(point.surface(), Surface::Lake);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawMapPoint")]
pub struct MapPoint {
    id: PointId,
    coordinates: Coordinates,
    location_name: LocationName,
    surface: Surface,
}

impl MapPoint {
    // =========================================================================
    // Constructors
    // =========================================================================

    pub fn new(id: PointId, coordinates: Coordinates, location_name: LocationName) -> Self {
        let surface = Surface::classify(location_name.as_str());
        Self {
            id,
            coordinates,
            location_name,
            surface,
        }
    }

    /// Random coordinates and a name drawn from `names`.
    pub fn random(id: PointId, rng: &dyn RandomPort, names: &dyn NameSource) -> Self {
        let coordinates = Coordinates::random(rng);
        let location_name = names.catalog().pick(rng);
        Self::new(id, coordinates, location_name)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> PointId {
        self.id
    }

    #[inline]
    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates.latitude()
    }

    pub fn latitude_hemisphere(&self) -> LatitudeHemisphere {
        self.coordinates.latitude_hemisphere()
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates.longitude()
    }

    pub fn longitude_hemisphere(&self) -> LongitudeHemisphere {
        self.coordinates.longitude_hemisphere()
    }

    #[inline]
    pub fn location_name(&self) -> &LocationName {
        &self.location_name
    }

    #[inline]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Replace the coordinates after validating every component.
    ///
    /// Nothing changes when validation fails.
    pub fn update_coordinates(
        &mut self,
        latitude: f64,
        latitude_hemisphere: &str,
        longitude: f64,
        longitude_hemisphere: &str,
    ) -> Result<(), DomainError> {
        let coordinates =
            Coordinates::parse(latitude, latitude_hemisphere, longitude, longitude_hemisphere)?;
        self.set_coordinates(coordinates);
        Ok(())
    }

    pub fn set_coordinates(&mut self, coordinates: Coordinates) {
        self.coordinates = coordinates;
        self.refresh_surface();
    }

    pub fn set_location_name(&mut self, location_name: LocationName) {
        self.location_name = location_name;
        self.refresh_surface();
    }

    fn refresh_surface(&mut self) {
        self.surface = Surface::classify(self.location_name.as_str());
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Coordinates: {}", self.coordinates)?;
        writeln!(f, "Place: {}", self.location_name)?;
        write!(f, "Surface type: {}", self.surface)
    }
}

/// Deserialized form; the stored surface is ignored and re-derived.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMapPoint {
    id: PointId,
    coordinates: Coordinates,
    location_name: LocationName,
}

impl From<RawMapPoint> for MapPoint {
    fn from(raw: RawMapPoint) -> Self {
        Self::new(raw.id, raw.coordinates, raw.location_name)
    }
}

/// Share of points on land (continent or island), in percent.
///
/// Returns `0.0` for an empty input.
pub fn land_percentage<'a, I>(points: I) -> f64
where
    I: IntoIterator<Item = &'a MapPoint>,
{
    let (total, land) = points.into_iter().fold((0usize, 0usize), |(total, land), p| {
        (total + 1, land + usize::from(p.surface().is_land()))
    });
    if total == 0 {
        return 0.0;
    }
    land as f64 / total as f64 * 100.0
}

// ============================================================================
// Manual construction request
// ============================================================================

/// Caller-supplied data for a manually placed point.
///
/// Every coordinate and hemisphere field is required; a missing or blank
/// `location` is replaced by a name from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualPoint {
    pub latitude: Option<f64>,
    pub latitude_hemisphere: Option<String>,
    pub longitude: Option<f64>,
    pub longitude_hemisphere: Option<String>,
    pub location: Option<String>,
}

impl ManualPoint {
    /// A fully populated request.
    pub fn new(
        latitude: f64,
        latitude_hemisphere: impl Into<String>,
        longitude: f64,
        longitude_hemisphere: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            latitude: Some(latitude),
            latitude_hemisphere: Some(latitude_hemisphere.into()),
            longitude: Some(longitude),
            longitude_hemisphere: Some(longitude_hemisphere.into()),
            location: Some(location.into()),
        }
    }

    /// Validate the request without consuming an id.
    ///
    /// Hemisphere tokens are checked before coordinate ranges. Returns the
    /// coordinates and the explicit name, if one was given.
    pub fn validate(&self) -> Result<(Coordinates, Option<LocationName>), DomainError> {
        let (Some(latitude), Some(lat_hem), Some(longitude), Some(lon_hem)) = (
            self.latitude,
            self.latitude_hemisphere.as_deref(),
            self.longitude,
            self.longitude_hemisphere.as_deref(),
        ) else {
            return Err(DomainError::validation("Incomplete manual point data"));
        };

        let coordinates = Coordinates::parse(latitude, lat_hem, longitude, lon_hem)?;
        let location_name = match self.location.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Some(LocationName::new(name)?),
            _ => None,
        };
        Ok((coordinates, location_name))
    }
}
