use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::assign::distance_to_elements;
use crate::geometry::{Point, UnsignedLength};

/// A connection point of a net: a net point, a pin or a pad
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor<A> {
    pub id: A,
    pub position: Point,
}

/// A wire between two anchors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetLine<A, L> {
    pub id: L,
    pub start: A,
    pub end: A,
}

impl<A: PartialEq, L> NetLine<A, L> {
    pub fn touches(&self, anchor: &A) -> bool {
        self.start == *anchor || self.end == *anchor
    }

    pub fn is_self_loop(&self) -> bool {
        self.start == self.end
    }
}

/// A free floating net label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetLabel<N> {
    pub id: N,
    pub position: Point,
}

/// One connected piece of a split net segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment<A, L, N> {
    pub anchors: Vec<Anchor<A>>,
    pub lines: Vec<NetLine<A, L>>,
    pub labels: Vec<NetLabel<N>>,
}

impl<A, L, N> Default for Segment<A, L, N> {
    fn default() -> Self {
        Self {
            anchors: vec![],
            lines: vec![],
            labels: vec![],
        }
    }
}

impl<A: Eq + Hash, L, N> Segment<A, L, N> {
    pub fn contains_anchor(&self, id: &A) -> bool {
        self.anchors.iter().any(|anchor| anchor.id == *id)
    }

    /// A lone anchor without any line
    pub fn is_singleton(&self) -> bool {
        self.anchors.len() == 1 && self.lines.is_empty()
    }

    /// Distance from `position` to the nearest anchor or line of this segment.
    ///
    /// Returns `None` only for a segment without anchors.
    pub fn distance_to(&self, position: &Point) -> Option<UnsignedLength> {
        let positions: HashMap<&A, Point> = self
            .anchors
            .iter()
            .map(|anchor| (&anchor.id, anchor.position))
            .collect();
        let lines = self.lines.iter().filter_map(|line| {
            Some((*positions.get(&line.start)?, *positions.get(&line.end)?))
        });
        distance_to_elements(position, positions.values().copied(), lines)
    }
}
