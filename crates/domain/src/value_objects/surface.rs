//! Surface classification derived from a location name

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Land/water classification of a map point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    Continent,
    Island,
    Ocean,
    Lake,
}

/// Keyword rules, evaluated top to bottom; the first rule with a keyword
/// contained in the lowercased name wins. Names matching no rule are
/// [`Surface::Continent`].
const CLASSIFICATION_RULES: &[(Surface, &[&str])] = &[
    (
        Surface::Ocean,
        &[
            "ocean",
            "sea",
            "океан",
            "море",
            "морський",
            "моря",
            "атлантичний",
            "тихий",
            "індійський",
        ],
    ),
    (Surface::Lake, &["lake", "baikal", "озеро", "озер", "байкал"]),
    (
        Surface::Island,
        &["island", "isla", "insula", "madagascar", "острів", "мадагаскар"],
    ),
];

impl Surface {
    pub const ALL: [Surface; 4] = [Self::Continent, Self::Island, Self::Ocean, Self::Lake];

    /// Classify a location name.
    ///
    /// # Example
    ///
    /// ```
    /// use geomap_domain::value_objects::Surface;
    ///
    /// assert_eq!(Surface::classify("Pacific Ocean"), Surface::Ocean);
    /// assert_eq!(Surface::classify("Lake Baikal"), Surface::Lake);
    /// assert_eq!(Surface::classify("Madagascar"), Surface::Island);
    /// assert_eq!(Surface::classify("Sahara"), Surface::Continent);
    /// ```
    pub fn classify(name: &str) -> Self {
        let lowered = name.to_lowercase();
        CLASSIFICATION_RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
            .map(|(surface, _)| *surface)
            .unwrap_or(Self::Continent)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Continent => "continent",
            Self::Island => "island",
            Self::Ocean => "ocean",
            Self::Lake => "lake",
        }
    }

    /// Continents and islands count as land.
    pub fn is_land(&self) -> bool {
        matches!(self, Self::Continent | Self::Island)
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive; the Ukrainian labels used by the map UI
/// (материк, острів, океан, озеро) are accepted as aliases.
impl FromStr for Surface {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "continent" | "материк" => Ok(Self::Continent),
            "island" | "острів" => Ok(Self::Island),
            "ocean" | "океан" => Ok(Self::Ocean),
            "lake" | "озеро" => Ok(Self::Lake),
            _ => Err(DomainError::validation(format!("Unknown surface: '{}'", s))),
        }
    }
}
