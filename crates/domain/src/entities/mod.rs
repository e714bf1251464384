//! Entities - objects with identity that outlives attribute changes

mod point;

pub use point::{land_percentage, ManualPoint, MapPoint};
