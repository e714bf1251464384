//! Geomap engine library.
//!
//! Wires the pure domain crate to the outside world.
//!
//! ## Structure
//!
//! - `infrastructure/` - Port implementations (randomness, location-name file)
//! - `config` - Environment-driven settings
//! - `app` - Application composition

pub mod app;
pub mod config;
pub mod infrastructure;

pub use app::App;
pub use config::{ConfigError, EngineConfig};
