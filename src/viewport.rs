use crate::catalog::model::{Event, Position};

/// Geographic box currently shown on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub south_west: Position,
    pub north_east: Position,
}

impl GeoBounds {
    pub fn new(south_west: Position, north_east: Position) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Builds the box spanned by two opposite corners, in any order.
    pub fn from_corners(a: Position, b: Position) -> Self {
        Self {
            south_west: Position::new(a.lat.min(b.lat), a.lng.min(b.lng)),
            north_east: Position::new(a.lat.max(b.lat), a.lng.max(b.lng)),
        }
    }

    /// Inclusive of the edges.
    pub fn contains(&self, position: Position) -> bool {
        position.lat >= self.south_west.lat
            && position.lat <= self.north_east.lat
            && position.lng >= self.south_west.lng
            && position.lng <= self.north_east.lng
    }
}

/// Keeps the events positioned inside `bounds`, in input order.
pub fn visible_within(events: &[Event], bounds: &GeoBounds) -> Vec<Event> {
    events
        .iter()
        .filter(|event| bounds.contains(event.position))
        .cloned()
        .collect()
}
