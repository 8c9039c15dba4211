use std::fmt::Display;

use serde::{Deserialize, Serialize};

const NM_PER_MM: f64 = 1_000_000.0;

/// A signed length in nanometres
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Length(pub i64);

impl Length {
    pub const ZERO: Length = Length(0);

    pub fn from_nm(nm: i64) -> Self {
        Self(nm)
    }

    /// Rounds to the nearest nanometre
    pub fn from_mm(mm: f64) -> Self {
        Self((mm * NM_PER_MM).round() as i64)
    }

    pub fn to_nm(self) -> i64 {
        self.0
    }

    pub fn to_mm(self) -> f64 {
        self.0 as f64 / NM_PER_MM
    }
}

impl Display for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}mm", self.to_mm())
    }
}

/// A length that can never be negative, used for distances
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct UnsignedLength(u64);

impl UnsignedLength {
    pub const ZERO: UnsignedLength = UnsignedLength(0);

    pub fn from_nm(nm: u64) -> Self {
        Self(nm)
    }

    pub fn to_nm(self) -> u64 {
        self.0
    }

    pub fn to_mm(self) -> f64 {
        self.0 as f64 / NM_PER_MM
    }
}

impl TryFrom<Length> for UnsignedLength {
    type Error = Length;

    fn try_from(value: Length) -> Result<Self, Self::Error> {
        u64::try_from(value.0).map(UnsignedLength).map_err(|_| value)
    }
}

impl Display for UnsignedLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}mm", self.to_mm())
    }
}

/// A position in the document plane
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Point {
    pub x: Length,
    pub y: Length,
}

impl Point {
    pub const ORIGIN: Point = Point {
        x: Length::ZERO,
        y: Length::ZERO,
    };

    pub fn new(x: Length, y: Length) -> Self {
        Self { x, y }
    }

    pub fn from_nm(x: i64, y: i64) -> Self {
        Self::new(Length(x), Length(y))
    }

    pub fn from_mm(x: f64, y: f64) -> Self {
        Self::new(Length::from_mm(x), Length::from_mm(y))
    }

    /// Euclidean length of the vector from the origin, rounded to whole nanometres
    pub fn length(&self) -> UnsignedLength {
        hypot((i128::from(self.x.0), i128::from(self.y.0)))
    }

    pub fn distance_to(&self, other: &Point) -> UnsignedLength {
        hypot(delta(self, other))
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Component-wise `to - from`, widened so that any two positions can be subtracted
fn delta(from: &Point, to: &Point) -> (i128, i128) {
    (
        i128::from(to.x.0) - i128::from(from.x.0),
        i128::from(to.y.0) - i128::from(from.y.0),
    )
}

/// Exact while the products fit into `i128`, approximated in `f64` beyond.
/// The sign is exact in both cases unless the two products cancel.
fn dot(a: (i128, i128), b: (i128, i128)) -> f64 {
    a.0.checked_mul(b.0)
        .zip(a.1.checked_mul(b.1))
        .and_then(|(x, y)| x.checked_add(y))
        .map(|v| v as f64)
        .unwrap_or_else(|| a.0 as f64 * b.0 as f64 + a.1 as f64 * b.1 as f64)
}

/// Saturates at `u64::MAX` nanometres
fn hypot(v: (i128, i128)) -> UnsignedLength {
    UnsignedLength(dot(v, v).sqrt().round() as u64)
}

/// `start + delta * t` rounded, kept within the line's extent on this axis
fn along(start: Length, end: Length, delta: i128, t: f64) -> Length {
    let offset = (delta as f64 * t).round() as i128;
    let low = i128::from(start.0.min(end.0));
    let high = i128::from(start.0.max(end.0));
    Length((i128::from(start.0) + offset).clamp(low, high) as i64)
}

/// Nearest point to `p` on the finite line from `start` to `end`.
///
/// Degenerate lines collapse to `start`. Projections falling outside the
/// line are clamped to the closer endpoint, interior projections are rounded
/// to whole nanometres.
pub fn nearest_point_on_line(p: &Point, start: &Point, end: &Point) -> Point {
    let a = delta(start, end);
    if a == (0, 0) {
        return *start;
    }
    if dot(delta(end, p), a) > 0.0 {
        return *end;
    }
    let d = dot(delta(start, p), a);
    if d < 0.0 {
        return *start;
    }
    let t = d / dot(a, a);
    if t >= 1.0 {
        return *end;
    }
    Point::new(
        along(start.x, end.x, a.0, t),
        along(start.y, end.y, a.1, t),
    )
}

/// Shortest distance between `p` and the finite line from `start` to `end`
pub fn distance_between_point_and_line(p: &Point, start: &Point, end: &Point) -> UnsignedLength {
    p.distance_to(&nearest_point_on_line(p, start, end))
}
