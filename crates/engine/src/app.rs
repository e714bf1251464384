//! Application state and composition.
//!
//! `App` is what a front end drives: it owns the point collection wired to
//! system randomness and the file-backed name list, and logs every
//! mutation it performs.

use geomap_domain::{
    CollectionSummary, DomainError, LocationName, ManualPoint, MapPoint, NameSource,
    PointCollection, PointId, RandomPort,
};
use serde::Serialize;

use crate::config::EngineConfig;
use crate::infrastructure::{FileNameSource, SystemRandom};

/// Main application state.
pub struct App {
    points: PointCollection,
}

impl App {
    pub fn new(random: Box<dyn RandomPort>, names: Box<dyn NameSource>) -> Self {
        Self {
            points: PointCollection::new(random, names),
        }
    }

    /// System randomness (seeded when configured) and names read from
    /// `config.locations_file`.
    pub fn from_config(config: &EngineConfig) -> Self {
        let random = match config.seed {
            Some(seed) => SystemRandom::seeded(seed),
            None => SystemRandom::new(),
        };
        let names = FileNameSource::new(config.locations_file.clone());
        Self::new(Box::new(random), Box::new(names))
    }

    /// Read-only access to the collection for every query.
    pub fn points(&self) -> &PointCollection {
        &self.points
    }

    /// True when the location-name file could not be found.
    pub fn locations_missing(&self) -> bool {
        self.points.name_catalog().is_missing()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Discard all points and generate a fresh batch with ids from zero.
    pub fn generate_batch(&mut self, count: usize) -> usize {
        let created = self.points.fill_random_points(count, true);
        tracing::info!(requested = count, created, "Generated point batch");
        created
    }

    pub fn add_point(&mut self, manual: Option<ManualPoint>) -> Result<&MapPoint, DomainError> {
        let is_manual = manual.is_some();
        match self.points.add_point(manual) {
            Ok(point) => {
                tracing::info!(id = %point.id(), manual = is_manual, "Added point");
                Ok(point)
            }
            Err(e) => {
                tracing::warn!(manual = is_manual, error = %e, "Point not added");
                Err(e)
            }
        }
    }

    /// Returns `false` when no point has `id`.
    pub fn remove_point(&mut self, id: PointId) -> bool {
        let removed = self.points.remove_point_by_id(id);
        if removed {
            tracing::info!(%id, "Removed point");
        } else {
            tracing::debug!(%id, "Point to remove not found");
        }
        removed
    }

    pub fn remove_point_at(&mut self, index: usize) -> Result<MapPoint, DomainError> {
        let point = self.points.remove_point_by_index(index)?;
        tracing::info!(id = %point.id(), index, "Removed point by position");
        Ok(point)
    }

    /// Validate and apply new coordinates. `Ok(false)` when no point has `id`.
    pub fn update_coordinates(
        &mut self,
        id: PointId,
        latitude: f64,
        latitude_hemisphere: &str,
        longitude: f64,
        longitude_hemisphere: &str,
    ) -> Result<bool, DomainError> {
        let Some(point) = self.points.get_point_by_id_mut(id) else {
            return Ok(false);
        };
        point.update_coordinates(latitude, latitude_hemisphere, longitude, longitude_hemisphere)?;
        tracing::info!(%id, coordinates = %point.coordinates(), "Updated coordinates");
        Ok(true)
    }

    /// Rename a point. `Ok(false)` when no point has `id`.
    pub fn rename_point(&mut self, id: PointId, name: &str) -> Result<bool, DomainError> {
        let Some(point) = self.points.get_point_by_id_mut(id) else {
            return Ok(false);
        };
        let name = LocationName::new(name)?;
        point.set_location_name(name);
        tracing::info!(%id, name = %point.location_name(), surface = %point.surface(), "Renamed point");
        Ok(true)
    }

    pub fn sort_by_location_name(&mut self) {
        self.points.sort_by_location_name();
        tracing::info!(count = self.points.get_active_count(), "Sorted points by location name");
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn filter(&self, key: &str, value: &str) -> Vec<&MapPoint> {
        let matches = self.points.filter_by(key, value);
        tracing::debug!(key, value, matched = matches.len(), "Filtered points");
        matches
    }

    pub fn summary(&self) -> CollectionSummary {
        self.points.summary()
    }

    /// JSON array of the current points, in list order.
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&Snapshot {
            points: self.points.to_vec(),
            total_created: self.points.total_created(),
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    points: Vec<&'a MapPoint>,
    total_created: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::random::FixedRandom;
    use geomap_domain::{LocationCatalog, Surface};

    fn app() -> App {
        App::new(
            Box::new(FixedRandom),
            Box::new(LocationCatalog::from_lines(["Sahara", "Nile"])),
        )
    }

    #[test]
    fn generate_batch_resets_ids() {
        let mut app = app();
        app.generate_batch(3);
        assert_eq!(app.generate_batch(2), 2);
        let ids: Vec<u64> = app.points().points().map(|p| p.id().value()).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn fixed_random_points_are_south_west_origin() {
        let mut app = app();
        let point = app.add_point(None).unwrap();
        assert_eq!(point.latitude(), 0.0);
        assert_eq!(point.coordinates().to_string(), "0.0°S, 0.0°W");
        assert_eq!(point.location_name().as_str(), "Sahara");
    }

    #[test]
    fn update_and_rename() {
        let mut app = app();
        let id = app.add_point(None).unwrap().id();

        assert_eq!(app.update_coordinates(id, 12.0, "n", 34.0, "e"), Ok(true));
        assert_eq!(app.rename_point(id, "Lake Chad"), Ok(true));

        let point = app.points().get_point_by_id(id).unwrap();
        assert_eq!(point.coordinates().to_string(), "12.0°N, 34.0°E");
        assert_eq!(point.surface(), Surface::Lake);
    }

    #[test]
    fn rename_accepts_long_names() {
        let mut app = app();
        let id = app.add_point(None).unwrap().id();
        let long = "Lake ".repeat(60);

        assert_eq!(app.rename_point(id, &long), Ok(true));
        let point = app.points().get_point_by_id(id).unwrap();
        assert_eq!(point.location_name().as_str(), long.trim());
        assert_eq!(point.surface(), Surface::Lake);
    }

    #[test]
    fn edits_of_unknown_ids_report_not_found() {
        let mut app = app();
        assert_eq!(app.update_coordinates(PointId::new(4), 1.0, "N", 1.0, "E"), Ok(false));
        assert_eq!(app.rename_point(PointId::new(4), "Nile"), Ok(false));
        assert!(!app.remove_point(PointId::new(4)));
    }

    #[test]
    fn invalid_edits_propagate_errors() {
        let mut app = app();
        let id = app.add_point(None).unwrap().id();
        assert!(matches!(
            app.update_coordinates(id, 95.0, "N", 1.0, "E"),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(app.rename_point(id, "  "), Err(DomainError::Validation(_))));
        assert_eq!(
            app.points().get_point_by_id(id).unwrap().location_name().as_str(),
            "Sahara"
        );
    }

    #[test]
    fn snapshot_lists_points_in_order() {
        let mut app = app();
        app.add_point(Some(ManualPoint::new(1.0, "N", 2.0, "E", "Nile"))).unwrap();
        app.add_point(Some(ManualPoint::new(3.0, "S", 4.0, "W", "Amazon"))).unwrap();
        app.sort_by_location_name();

        let json: serde_json::Value = serde_json::from_str(&app.snapshot_json().unwrap()).unwrap();
        assert_eq!(json["totalCreated"], 2);
        assert_eq!(json["points"][0]["locationName"], "Amazon");
        assert_eq!(json["points"][1]["surface"], "continent");
    }

    #[test]
    fn locations_missing_reflects_catalog() {
        let app = App::new(Box::new(FixedRandom), Box::new(LocationCatalog::Missing));
        assert!(app.locations_missing());
        assert!(!self::app().locations_missing());
    }
}
