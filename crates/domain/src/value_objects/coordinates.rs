//! Coordinates on the latitude/longitude grid
//!
//! Magnitudes are unsigned (latitude 0..=90, longitude 0..=180) and the
//! hemisphere tags carry the sign. Stored magnitudes are rounded to four
//! decimal places.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::ports::RandomPort;

pub const MAX_LATITUDE: f64 = 90.0;
pub const MAX_LONGITUDE: f64 = 180.0;

const DECIMAL_SCALE: f64 = 10_000.0;

fn round_to_4(value: f64) -> f64 {
    (value * DECIMAL_SCALE).round() / DECIMAL_SCALE
}

/// Up to four decimals with trailing zeros dropped, always keeping one
/// digit after the point: `10.0`, `12.5`, `40.1234`.
fn format_degrees(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    let mut text = format!("{value:.4}");
    let kept = text.trim_end_matches('0').len();
    text.truncate(kept);
    if text.ends_with('.') {
        text.push('0');
    }
    text
}

// ============================================================================
// Hemispheres
// ============================================================================

/// North/south qualifier of a latitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LatitudeHemisphere {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "S")]
    South,
}

impl LatitudeHemisphere {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::North => "N",
            Self::South => "S",
        }
    }

    /// `1.0` for north, `-1.0` for south
    pub fn sign(&self) -> f64 {
        match self {
            Self::North => 1.0,
            Self::South => -1.0,
        }
    }
}

impl fmt::Display for LatitudeHemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts `N` or `S`, case-insensitive, surrounding whitespace ignored.
impl FromStr for LatitudeHemisphere {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "N" => Ok(Self::North),
            "S" => Ok(Self::South),
            _ => Err(DomainError::validation(format!(
                "Latitude hemisphere must be 'N' or 'S', got '{}'",
                s
            ))),
        }
    }
}

/// East/west qualifier of a longitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LongitudeHemisphere {
    #[serde(rename = "E")]
    East,
    #[serde(rename = "W")]
    West,
}

impl LongitudeHemisphere {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::East => "E",
            Self::West => "W",
        }
    }

    /// `1.0` for east, `-1.0` for west
    pub fn sign(&self) -> f64 {
        match self {
            Self::East => 1.0,
            Self::West => -1.0,
        }
    }
}

impl fmt::Display for LongitudeHemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts `E` or `W`, case-insensitive, surrounding whitespace ignored.
impl FromStr for LongitudeHemisphere {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "E" => Ok(Self::East),
            "W" => Ok(Self::West),
            _ => Err(DomainError::validation(format!(
                "Longitude hemisphere must be 'E' or 'W', got '{}'",
                s
            ))),
        }
    }
}

// ============================================================================
// Coordinates
// ============================================================================

/// A validated coordinate pair with hemisphere tags.
///
/// # Invariants
///
/// - `latitude` is within `0..=90`, `longitude` within `0..=180`
/// - both magnitudes are rounded to 4 decimal digits
///
/// # Example
///
/// ```
/// use geomap_domain::value_objects::{Coordinates, LatitudeHemisphere, LongitudeHemisphere};
///
/// let coords = Coordinates::new(
///     53.50001,
///     LatitudeHemisphere::North,
///     108.0,
///     LongitudeHemisphere::East,
/// )
/// .unwrap();
///
/// assert_eq!(coords.latitude(), 53.5);
/// assert_eq!(coords.to_string(), "53.5°N, 108.0°E");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinates", into = "RawCoordinates")]
pub struct Coordinates {
    latitude: f64,
    latitude_hemisphere: LatitudeHemisphere,
    longitude: f64,
    longitude_hemisphere: LongitudeHemisphere,
}

impl Coordinates {
    /// Validate ranges and round both magnitudes.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when a magnitude is outside its
    /// range or is not a finite number.
    pub fn new(
        latitude: f64,
        latitude_hemisphere: LatitudeHemisphere,
        longitude: f64,
        longitude_hemisphere: LongitudeHemisphere,
    ) -> Result<Self, DomainError> {
        if !(0.0..=MAX_LATITUDE).contains(&latitude) {
            return Err(DomainError::validation(format!(
                "Latitude must be within 0..=90, got {}",
                latitude
            )));
        }
        if !(0.0..=MAX_LONGITUDE).contains(&longitude) {
            return Err(DomainError::validation(format!(
                "Longitude must be within 0..=180, got {}",
                longitude
            )));
        }
        Ok(Self {
            latitude: round_to_4(latitude),
            latitude_hemisphere,
            longitude: round_to_4(longitude),
            longitude_hemisphere,
        })
    }

    /// Validate hemisphere tokens first, then ranges.
    pub fn parse(
        latitude: f64,
        latitude_hemisphere: &str,
        longitude: f64,
        longitude_hemisphere: &str,
    ) -> Result<Self, DomainError> {
        let lat_hem: LatitudeHemisphere = latitude_hemisphere.parse()?;
        let lon_hem: LongitudeHemisphere = longitude_hemisphere.parse()?;
        Self::new(latitude, lat_hem, longitude, lon_hem)
    }

    /// Uniformly random hemispheres and magnitudes.
    pub fn random(rng: &dyn RandomPort) -> Self {
        let latitude_hemisphere = if rng.gen_bool() {
            LatitudeHemisphere::North
        } else {
            LatitudeHemisphere::South
        };
        let latitude = round_to_4(rng.gen_f64(0.0, MAX_LATITUDE)).clamp(0.0, MAX_LATITUDE);
        let longitude_hemisphere = if rng.gen_bool() {
            LongitudeHemisphere::East
        } else {
            LongitudeHemisphere::West
        };
        let longitude = round_to_4(rng.gen_f64(0.0, MAX_LONGITUDE)).clamp(0.0, MAX_LONGITUDE);
        Self {
            latitude,
            latitude_hemisphere,
            longitude,
            longitude_hemisphere,
        }
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn latitude_hemisphere(&self) -> LatitudeHemisphere {
        self.latitude_hemisphere
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    #[inline]
    pub fn longitude_hemisphere(&self) -> LongitudeHemisphere {
        self.longitude_hemisphere
    }

    /// Latitude in -90..=90, south negative.
    pub fn signed_latitude(&self) -> f64 {
        self.latitude * self.latitude_hemisphere.sign()
    }

    /// Longitude in -180..=180, west negative.
    pub fn signed_longitude(&self) -> f64 {
        self.longitude * self.longitude_hemisphere.sign()
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}°{}, {}°{}",
            format_degrees(self.latitude),
            self.latitude_hemisphere,
            format_degrees(self.longitude),
            self.longitude_hemisphere
        )
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCoordinates {
    latitude: f64,
    latitude_hemisphere: LatitudeHemisphere,
    longitude: f64,
    longitude_hemisphere: LongitudeHemisphere,
}

impl TryFrom<RawCoordinates> for Coordinates {
    type Error = DomainError;

    fn try_from(raw: RawCoordinates) -> Result<Self, Self::Error> {
        Self::new(
            raw.latitude,
            raw.latitude_hemisphere,
            raw.longitude,
            raw.longitude_hemisphere,
        )
    }
}

impl From<Coordinates> for RawCoordinates {
    fn from(c: Coordinates) -> Self {
        Self {
            latitude: c.latitude,
            latitude_hemisphere: c.latitude_hemisphere,
            longitude: c.longitude,
            longitude_hemisphere: c.longitude_hemisphere,
        }
    }
}
