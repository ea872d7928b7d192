use crate::error::HeapError;
use crate::heap::IndexedMaxHeap;
use core::cmp::Ordering;
use log::{debug, trace};
use std::fmt;

// x-coordinate or height
pub type Coord = i64;

/// A rectangle standing on the ground line, spanning `left..right`.
///
/// `id` is the building's position in the input and doubles as its heap label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Building {
    pub left: Coord,
    pub height: Coord,
    pub right: Coord,
    pub id: usize,
}

impl Building {
    pub fn new(left: Coord, height: Coord, right: Coord, id: usize) -> Self {
        Self {
            left,
            height,
            right,
            id,
        }
    }

    pub fn events(&self) -> [Event; 2] {
        [
            Event {
                x: self.left,
                building: self.id,
                side: Side::Left,
                height: self.height,
            },
            Event {
                x: self.right,
                building: self.id,
                side: Side::Right,
                height: self.height,
            },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// One edge of a building, as seen by the sweep line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub x: Coord,
    pub building: usize,
    pub side: Side,
    pub height: Coord,
}

/// Events sort by `x`. At the same `x`, left edges come before right edges,
/// taller left edges first and shorter right edges first. Remaining ties are
/// broken by building id.
impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x
            .cmp(&other.x)
            .then_with(|| match (self.side, other.side) {
                (Side::Left, Side::Right) => Ordering::Less,
                (Side::Right, Side::Left) => Ordering::Greater,
                (Side::Left, Side::Left) => other.height.cmp(&self.height),
                (Side::Right, Side::Right) => self.height.cmp(&other.height),
            })
            .then_with(|| self.building.cmp(&other.building))
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A corner of the silhouette: from `x` onwards the skyline is at `height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPoint {
    pub x: Coord,
    pub height: Coord,
}

impl KeyPoint {
    pub const GROUND: KeyPoint = KeyPoint { x: 0, height: 0 };

    pub fn new(x: Coord, height: Coord) -> Self {
        Self { x, height }
    }
}

impl fmt::Display for KeyPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.height)
    }
}

/// Returns both edges of every building in sweep order.
pub fn sorted_events(buildings: &[Building]) -> Vec<Event> {
    let mut events: Vec<Event> = buildings.iter().flat_map(|b| b.events()).collect();
    events.sort();
    events
}

/// Computes the skyline of `buildings`.
///
/// The result always starts with `(0, 0)`, followed by one key point for every
/// x at which the tallest active building changes. All events at the same x
/// are applied before the height is compared, so edges that open and close at
/// one x never produce an intermediate point.
///
/// Building ids are used as heap labels; duplicate or out-of-range ids abort
/// the sweep with the heap's error.
pub fn compute_skyline(buildings: &[Building]) -> Result<Vec<KeyPoint>, HeapError> {
    let events = sorted_events(buildings);
    let mut active: IndexedMaxHeap<Coord> = IndexedMaxHeap::new(buildings.len());
    let mut current_height: Coord = 0;
    let mut skyline = vec![KeyPoint::GROUND];

    for (i, event) in events.iter().enumerate() {
        match event.side {
            Side::Left => active.insert(event.height, event.building)?,
            Side::Right => {
                active.remove(event.building)?;
            }
        }
        let max_height = active.peek_max();
        trace!(
            "x = {}: {:?} edge of b{} (h = {}), max = {}",
            event.x,
            event.side,
            event.building,
            event.height,
            max_height
        );

        let last_at_x = events.get(i + 1).map_or(true, |next| next.x != event.x);
        if last_at_x && max_height != current_height {
            debug!("key point ({}, {})", event.x, max_height);
            skyline.push(KeyPoint::new(event.x, max_height));
            current_height = max_height;
        }
    }

    debug!(
        "swept {} events from {} buildings into {} key points",
        events.len(),
        buildings.len(),
        skyline.len()
    );
    Ok(skyline)
}
