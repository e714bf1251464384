//! Aggregate roots - domain objects that own their related data
//!
//! `PointCollection` owns every live `MapPoint` through its linked list;
//! callers borrow points from it and never hold list nodes.

mod point_collection;
mod point_filter;

pub use point_collection::{CollectionSummary, PointCollection, MAX_POINTS};
pub use point_filter::FilterCriterion;
