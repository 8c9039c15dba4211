//! Splitting of schematic and board net segments into connected pieces.
//!
//! A net segment is described by its anchors (net points, pins, pads), the
//! net lines between them and the net labels floating next to them. After
//! an edit such as copying only some of the lines, the remaining graph may
//! fall apart. [`NetSegmentSplitter`] computes the maximal connected pieces
//! and hands every net label to the piece nearest to it.

mod assign;
mod error;
pub mod geometry;
pub mod handle;
mod partition;
mod segment;
mod splitter;

pub use error::SplitError;
pub use geometry::{Length, Point, UnsignedLength};
pub use handle::{Handle, HandleKind};
pub use segment::{Anchor, NetLabel, NetLine, Segment};
pub use splitter::NetSegmentSplitter;
