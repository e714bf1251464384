//! Catalog of candidate location names for randomly generated points

use crate::ports::{NameSource, RandomPort};
use crate::value_objects::LocationName;

/// Name used when the catalog source does not exist
pub const MISSING_PLACEHOLDER: &str = "Unknown place (locations file not found)";

/// Name used when the catalog source exists but holds no usable names
pub const EMPTY_PLACEHOLDER: &str = "Unknown place (locations file is empty)";

/// Ordered list of candidate names, or the reason there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationCatalog {
    /// At least one usable name
    Available(Vec<LocationName>),
    /// The source exists but produced no usable names
    Empty,
    /// The source could not be found
    Missing,
}

impl LocationCatalog {
    /// `Available` when `names` is non-empty, `Empty` otherwise.
    pub fn from_names(names: Vec<LocationName>) -> Self {
        if names.is_empty() {
            Self::Empty
        } else {
            Self::Available(names)
        }
    }

    /// Build from raw lines. Lines are trimmed; blank lines and lines that
    /// are not valid names are dropped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = lines
            .into_iter()
            .filter_map(|line| LocationName::new(line.as_ref()).ok())
            .collect();
        Self::from_names(names)
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Available(names) => names.len(),
            Self::Empty | Self::Missing => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Draw a random name, or the placeholder matching the catalog state.
    pub fn pick(&self, rng: &dyn RandomPort) -> LocationName {
        match self {
            Self::Available(names) if !names.is_empty() => {
                let index = rng.gen_index(names.len()).min(names.len() - 1);
                names[index].clone()
            }
            Self::Missing => LocationName::from_static(MISSING_PLACEHOLDER),
            Self::Available(_) | Self::Empty => LocationName::from_static(EMPTY_PLACEHOLDER),
        }
    }
}

impl NameSource for LocationCatalog {
    fn catalog(&self) -> &LocationCatalog {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockRandomPort;

    #[test]
    fn from_lines_trims_and_skips_blanks() {
        let catalog = LocationCatalog::from_lines(["  Nile ", "", "   ", "Sahara"]);
        assert_eq!(
            catalog,
            LocationCatalog::Available(vec![
                LocationName::new("Nile").unwrap(),
                LocationName::new("Sahara").unwrap(),
            ])
        );
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn from_lines_without_names_is_empty() {
        let catalog = LocationCatalog::from_lines(["", "  "]);
        assert_eq!(catalog, LocationCatalog::Empty);
        assert!(catalog.is_empty());
        assert!(!catalog.is_missing());
    }

    #[test]
    fn pick_uses_random_index() {
        let catalog = LocationCatalog::from_lines(["Nile", "Amazon", "Danube"]);
        let mut rng = MockRandomPort::new();
        rng.expect_gen_index()
            .withf(|len| *len == 3)
            .times(1)
            .returning(|_| 2);
        assert_eq!(catalog.pick(&rng).as_str(), "Danube");
    }

    #[test]
    fn pick_from_missing_returns_placeholder_without_randomness() {
        let rng = MockRandomPort::new();
        assert_eq!(LocationCatalog::Missing.pick(&rng).as_str(), MISSING_PLACEHOLDER);
        assert_eq!(LocationCatalog::Empty.pick(&rng).as_str(), EMPTY_PLACEHOLDER);
    }

    #[test]
    fn placeholders_are_valid_names() {
        assert!(LocationName::new(MISSING_PLACEHOLDER).is_ok());
        assert!(LocationName::new(EMPTY_PLACEHOLDER).is_ok());
    }
}
