//! Point collection aggregate - the bounded, ordered set of live map points
//!
//! # Ownership
//!
//! The collection is the only owner of its `LinkedList<MapPoint>`, of the
//! `IdCounter` that numbers its points, and of the injected randomness and
//! name ports. Every point is created through `MapPoint`'s constructors.
//!
//! # Ordering
//!
//! Positions (and the 1-based order numbers derived from them) are a view
//! of the current list order. Removals shift later positions and sorting
//! rebuilds the list, so a position is only meaningful until the next
//! mutation. Ids are the stable identity.

use std::fmt;

use crate::collections::LinkedList;
use crate::entities::{land_percentage, ManualPoint, MapPoint};
use crate::error::DomainError;
use crate::ids::{IdCounter, PointId};
use crate::ports::{NameSource, RandomPort};
use crate::value_objects::LocationCatalog;

use super::FilterCriterion;

/// Maximum number of simultaneously live points
pub const MAX_POINTS: usize = 30;

/// Snapshot of the collection's counters for status displays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectionSummary {
    /// Ids issued since the last reset, including removed points
    pub total_created: u64,
    /// Points currently in the collection
    pub active: usize,
    /// Share of active points on land, in percent
    pub land_percentage: f64,
}

impl fmt::Display for CollectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Created: {} | Active: {} | On land: {:.2}%",
            self.total_created, self.active, self.land_percentage
        )
    }
}

/// Bounded collection of map points backed by a singly-linked list.
///
/// # Example
///
/// ```
/// use geomap_domain::aggregates::PointCollection;
/// use geomap_domain::entities::ManualPoint;
/// use geomap_domain::value_objects::{LocationCatalog, Surface};
/// # use geomap_domain::ports::RandomPort;
/// # struct Lowest;
/// # impl RandomPort for Lowest {
/// #     fn gen_f64(&self, min: f64, _max: f64) -> f64 { min }
/// #     fn gen_bool(&self) -> bool { true }
/// #     fn gen_index(&self, _len: usize) -> usize { 0 }
/// # }
///
/// let names = LocationCatalog::from_lines(["Nile"]);
/// let mut points = PointCollection::new(Box::new(Lowest), Box::new(names));
///
/// points.fill_random_points(3, true);
/// let added = points
///     .add_point(Some(ManualPoint::new(53.5, "N", 108.0, "E", "Lake Baikal")))
///     .unwrap();
/// assert_eq!(added.surface(), Surface::Lake);
/// assert_eq!(points.get_active_count(), 4);
/// ```
pub struct PointCollection {
    points: LinkedList<MapPoint>,
    ids: IdCounter,
    random: Box<dyn RandomPort>,
    names: Box<dyn NameSource>,
}

impl PointCollection {
    pub const CAPACITY: usize = MAX_POINTS;

    pub fn new(random: Box<dyn RandomPort>, names: Box<dyn NameSource>) -> Self {
        Self {
            points: LinkedList::new(),
            ids: IdCounter::new(),
            random,
            names,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        Self::CAPACITY
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Replace the whole collection with `count` random points.
    ///
    /// `count` is clamped to the capacity. With `reset_ids` the id counter
    /// restarts at zero before any point is generated. Returns the number of
    /// points created.
    pub fn fill_random_points(&mut self, count: usize, reset_ids: bool) -> usize {
        let count = count.min(Self::CAPACITY);
        if reset_ids {
            self.ids.reset();
        }

        let mut fresh = LinkedList::new();
        for _ in 0..count {
            let id = self.ids.issue();
            fresh.append(MapPoint::random(id, self.random.as_ref(), self.names.as_ref()));
        }
        self.points = fresh;
        count
    }

    /// Create one point and append it.
    ///
    /// Without `manual` the point is random. With `manual` the request is
    /// validated first; a rejected request leaves the collection and the id
    /// counter untouched.
    ///
    /// # Errors
    ///
    /// - `DomainError::ContainerFull` when the collection is at capacity
    /// - `DomainError::Validation` from the manual request
    pub fn add_point(&mut self, manual: Option<ManualPoint>) -> Result<&MapPoint, DomainError> {
        self.ensure_room()?;

        let point = match manual {
            None => {
                let id = self.ids.issue();
                MapPoint::random(id, self.random.as_ref(), self.names.as_ref())
            }
            Some(request) => {
                let (coordinates, location_name) = request.validate()?;
                let location_name = location_name
                    .unwrap_or_else(|| self.names.catalog().pick(self.random.as_ref()));
                MapPoint::new(self.ids.issue(), coordinates, location_name)
            }
        };

        self.points.append(point);
        Ok(self.points.get(self.points.len() - 1)?)
    }

    /// Append an already constructed point.
    ///
    /// # Errors
    ///
    /// - `DomainError::ContainerFull` when the collection is at capacity
    /// - `DomainError::Validation` when a point with the same id is present
    pub fn append_point(&mut self, point: MapPoint) -> Result<(), DomainError> {
        self.ensure_room()?;
        if self.get_point_by_id(point.id()).is_some() {
            return Err(DomainError::validation(format!(
                "Point {} is already in the collection",
                point.id()
            )));
        }
        self.points.append(point);
        Ok(())
    }

    /// Remove the first point with `id`. Returns `false` when absent.
    pub fn remove_point_by_id(&mut self, id: PointId) -> bool {
        match self.position_of(id) {
            Some(index) => self.points.remove(index).is_ok(),
            None => false,
        }
    }

    /// Remove the point at the 0-based `index` and return it.
    pub fn remove_point_by_index(&mut self, index: usize) -> Result<MapPoint, DomainError> {
        Ok(self.points.remove(index)?)
    }

    /// Reorder by ascending location name.
    ///
    /// The list is drained, the points are stably sorted, and a new list is
    /// linked in the sorted order. Equal names keep their relative order.
    pub fn sort_by_location_name(&mut self) {
        if self.points.len() < 2 {
            return;
        }
        let mut drained: Vec<MapPoint> = std::mem::take(&mut self.points).into_iter().collect();
        drained.sort_by(|a, b| a.location_name().as_str().cmp(b.location_name().as_str()));

        let mut rebuilt = LinkedList::new();
        for point in drained {
            rebuilt.append(point);
        }
        self.points = rebuilt;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn get_point_by_id(&self, id: PointId) -> Option<&MapPoint> {
        self.points.iter().find(|p| p.id() == id)
    }

    /// Mutable access for `update_coordinates` / `set_location_name`.
    pub fn get_point_by_id_mut(&mut self, id: PointId) -> Option<&mut MapPoint> {
        self.points.iter_mut().find(|p| p.id() == id)
    }

    pub fn get_point_by_index(&self, index: usize) -> Option<&MapPoint> {
        self.points.get(index).ok()
    }

    /// Current 1-based position of the point with `id`.
    ///
    /// Invalidated by any later mutation or sort.
    pub fn get_order_number(&self, id: PointId) -> Option<usize> {
        self.position_of(id).map(|index| index + 1)
    }

    pub fn get_all_points(&self) -> &LinkedList<MapPoint> {
        &self.points
    }

    pub fn points(&self) -> impl Iterator<Item = &MapPoint> {
        self.points.iter()
    }

    /// Ordered snapshot of the current points.
    pub fn to_vec(&self) -> Vec<&MapPoint> {
        self.points.to_vec()
    }

    /// Snapshot in reverse list order.
    pub fn points_reversed(&self) -> Vec<&MapPoint> {
        let mut points = self.points.to_vec();
        points.reverse();
        points
    }

    /// Points matching `criterion`, in list order.
    pub fn filter(&self, criterion: &FilterCriterion) -> Vec<&MapPoint> {
        self.points.iter().filter(|p| criterion.matches(p)).collect()
    }

    /// String form of [`filter`](Self::filter).
    ///
    /// An unknown key or an unrecognized value yields an empty result, not
    /// an error.
    pub fn filter_by(&self, key: &str, value: &str) -> Vec<&MapPoint> {
        match FilterCriterion::parse(key, value) {
            Some(criterion) => self.filter(&criterion),
            None => Vec::new(),
        }
    }

    #[inline]
    pub fn get_active_count(&self) -> usize {
        self.points.len()
    }

    /// Ids issued since the last reset, including points later removed.
    pub fn total_created(&self) -> u64 {
        self.ids.issued()
    }

    /// The name catalog, resolving it if it has not been loaded yet.
    pub fn name_catalog(&self) -> &LocationCatalog {
        self.names.catalog()
    }

    pub fn land_percentage(&self) -> f64 {
        land_percentage(self.points.iter())
    }

    pub fn summary(&self) -> CollectionSummary {
        CollectionSummary {
            total_created: self.total_created(),
            active: self.get_active_count(),
            land_percentage: self.land_percentage(),
        }
    }

    fn position_of(&self, id: PointId) -> Option<usize> {
        self.points.iter().position(|p| p.id() == id)
    }

    fn ensure_room(&self) -> Result<(), DomainError> {
        let current = self.points.len();
        if current >= Self::CAPACITY {
            return Err(DomainError::container_full(current, Self::CAPACITY));
        }
        Ok(())
    }
}

impl fmt::Debug for PointCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointCollection")
            .field("points", &self.points)
            .field("ids", &self.ids)
            .finish_non_exhaustive()
    }
}

/// Numbered listing of every point.
impl fmt::Display for PointCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.points, f)
    }
}
