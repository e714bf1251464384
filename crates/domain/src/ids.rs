use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a map point.
///
/// Issued in increasing order by an [`IdCounter`]; never reused until the
/// counter is reset for a brand-new batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(u64);

impl PointId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PointId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<PointId> for u64 {
    fn from(value: PointId) -> Self {
        value.0
    }
}

/// Monotonic source of [`PointId`]s.
///
/// One counter backs one point collection. `issue()` hands out the current
/// value and advances; `reset()` rewinds to zero and is only invoked when a
/// whole new batch is generated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdCounter {
    next: u64,
}

impl IdCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next id.
    pub fn issue(&mut self) -> PointId {
        let id = PointId(self.next);
        self.next += 1;
        id
    }

    /// Rewind to zero. Previously issued ids may be handed out again.
    pub fn reset(&mut self) {
        self.next = 0;
    }

    /// Number of ids issued since construction or the last reset.
    pub fn issued(&self) -> u64 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_issues_sequential_ids() {
        let mut counter = IdCounter::new();
        assert_eq!(counter.issue(), PointId::new(0));
        assert_eq!(counter.issue(), PointId::new(1));
        assert_eq!(counter.issue(), PointId::new(2));
        assert_eq!(counter.issued(), 3);
    }

    #[test]
    fn reset_rewinds_to_zero() {
        let mut counter = IdCounter::new();
        counter.issue();
        counter.issue();
        counter.reset();
        assert_eq!(counter.issued(), 0);
        assert_eq!(counter.issue(), PointId::new(0));
    }

    #[test]
    fn point_id_displays_as_number() {
        assert_eq!(PointId::new(17).to_string(), "17");
        assert_eq!(u64::from(PointId::from(5)), 5);
    }
}
