//! Geomap Engine - Main entry point.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use geomap_engine::{App, EngineConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geomap_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Geomap Engine");

    let config = EngineConfig::from_env()?;
    tracing::info!(
        locations_file = %config.locations_file.display(),
        initial_points = config.initial_points,
        seeded = config.seed.is_some(),
        "Configuration loaded"
    );

    let mut app = App::from_config(&config);
    app.generate_batch(config.initial_points);
    app.sort_by_location_name();

    let summary = app.summary();
    tracing::info!(%summary, "Collection ready");

    println!("{}", app.points());
    println!("{summary}");
    Ok(())
}
