//! Filter criteria over map points

use crate::entities::MapPoint;
use crate::value_objects::{LatitudeHemisphere, LongitudeHemisphere, Surface};

/// A single filtering rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterCriterion {
    Surface(Surface),
    LatitudeHemisphere(LatitudeHemisphere),
    LongitudeHemisphere(LongitudeHemisphere),
}

impl FilterCriterion {
    /// Interpret a `(key, value)` pair such as `("hem_lat", "n")`.
    ///
    /// Keys are `surface`, `hem_lat` and `hem_lon` (case-insensitive).
    /// Returns `None` for an unknown key or a value that does not name a
    /// surface/hemisphere; callers treat that as "nothing matches".
    pub fn parse(key: &str, value: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "surface" => value.parse().ok().map(Self::Surface),
            "hem_lat" => value.parse().ok().map(Self::LatitudeHemisphere),
            "hem_lon" => value.parse().ok().map(Self::LongitudeHemisphere),
            _ => None,
        }
    }

    pub fn matches(&self, point: &MapPoint) -> bool {
        match self {
            Self::Surface(surface) => point.surface() == *surface,
            Self::LatitudeHemisphere(hem) => point.latitude_hemisphere() == *hem,
            Self::LongitudeHemisphere(hem) => point.longitude_hemisphere() == *hem,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_keys() {
        assert_eq!(
            FilterCriterion::parse("surface", "Ocean"),
            Some(FilterCriterion::Surface(Surface::Ocean))
        );
        assert_eq!(
            FilterCriterion::parse("HEM_LAT", " s "),
            Some(FilterCriterion::LatitudeHemisphere(LatitudeHemisphere::South))
        );
        assert_eq!(
            FilterCriterion::parse("hem_lon", "w"),
            Some(FilterCriterion::LongitudeHemisphere(LongitudeHemisphere::West))
        );
    }

    #[test]
    fn parse_rejects_unknown_values_and_keys() {
        assert_eq!(FilterCriterion::parse("hem_lat", "X"), None);
        assert_eq!(FilterCriterion::parse("hem_lon", "N"), None);
        assert_eq!(FilterCriterion::parse("surface", "desert"), None);
        assert_eq!(FilterCriterion::parse("altitude", "high"), None);
    }
}
