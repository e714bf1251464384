//! End-to-end flows through `App` with real randomness and a real file.

use std::io::Write;

use geomap_domain::{DomainError, ManualPoint, PointCollection, Surface, MISSING_PLACEHOLDER};
use geomap_engine::infrastructure::{FileNameSource, SystemRandom};
use geomap_engine::{App, EngineConfig};
use tempfile::NamedTempFile;

fn locations_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file
}

fn seeded_app(file: &NamedTempFile, seed: u64) -> App {
    App::new(
        Box::new(SystemRandom::seeded(seed)),
        Box::new(FileNameSource::new(file.path())),
    )
}

#[test]
fn generated_points_use_names_from_file() {
    let file = locations_file(&["Pacific Ocean", "Lake Baikal", "Madagascar", "Sahara"]);
    let mut app = seeded_app(&file, 7);

    assert_eq!(app.generate_batch(20), 20);
    assert!(!app.locations_missing());

    for point in app.points().points() {
        let name = point.location_name().as_str();
        assert!(["Pacific Ocean", "Lake Baikal", "Madagascar", "Sahara"].contains(&name));
        assert_eq!(point.surface(), Surface::classify(name));
        assert!(point.latitude() <= 90.0);
        assert!(point.longitude() <= 180.0);
    }
}

#[test]
fn same_seed_same_points() {
    let file = locations_file(&["Nile", "Alps", "Gobi"]);
    let mut first = seeded_app(&file, 42);
    let mut second = seeded_app(&file, 42);

    first.generate_batch(10);
    second.generate_batch(10);

    assert_eq!(first.snapshot_json().unwrap(), second.snapshot_json().unwrap());
}

#[test]
fn batch_is_clamped_to_capacity() {
    let file = locations_file(&["Nile"]);
    let mut app = seeded_app(&file, 1);

    assert_eq!(app.generate_batch(100), PointCollection::CAPACITY);
    assert!(matches!(
        app.add_point(None),
        Err(DomainError::ContainerFull { .. })
    ));
}

#[test]
fn missing_file_falls_back_to_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let config = EngineConfig {
        locations_file: dir.path().join("absent.txt"),
        initial_points: 3,
        seed: Some(3),
    };
    let mut app = App::from_config(&config);

    app.generate_batch(config.initial_points);

    assert!(app.locations_missing());
    assert!(app
        .points()
        .points()
        .all(|p| p.location_name().as_str() == MISSING_PLACEHOLDER));
}

#[test]
fn session_of_edits() {
    let file = locations_file(&["Sahara"]);
    let mut app = seeded_app(&file, 11);
    app.generate_batch(3);

    let manual = ManualPoint::new(10.0, "N", 20.0, "E", "Atlantic Ocean");
    let id = app.add_point(Some(manual)).unwrap().id();
    assert_eq!(id.value(), 3);
    assert_eq!(app.points().get_order_number(id), Some(4));

    assert_eq!(app.rename_point(id, "Amazon"), Ok(true));
    app.sort_by_location_name();
    assert_eq!(app.points().get_order_number(id), Some(1));

    assert_eq!(app.filter("surface", "ocean").len(), 0);
    assert_eq!(app.filter("surface", "continent").len(), 4);

    let removed = app.remove_point_at(0).unwrap();
    assert_eq!(removed.id(), id);
    assert!(!app.remove_point(id));

    let summary = app.summary();
    assert_eq!(summary.active, 3);
    assert_eq!(summary.total_created, 4);
}
