use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::assign::nearest_component;
use crate::error::SplitError;
use crate::geometry::Point;
use crate::handle::Handle;
use crate::partition::partition;
use crate::segment::{Anchor, NetLabel, NetLine, Segment};

/// Splits one net segment into its connected pieces.
///
/// Fill it with anchors, net lines and net labels, then call
/// [`split`](Self::split) once. Insertion order matters: it decides the order
/// of the resulting segments and which segment wins when a label is equally
/// close to several of them.
///
/// ```
/// use net_segment_splitter::{Handle, NetSegmentSplitter, Point};
///
/// let mut splitter: NetSegmentSplitter = NetSegmentSplitter::new();
/// splitter.add_anchor(Handle::net_point(1), Point::from_mm(0.0, 0.0));
/// splitter.add_anchor(Handle::net_point(2), Point::from_mm(5.0, 0.0));
/// splitter.add_anchor(Handle::symbol_pin(1), Point::from_mm(20.0, 0.0));
/// splitter.add_net_line(Handle::net_line(1), Handle::net_point(1), Handle::net_point(2));
/// splitter.add_net_label(Handle::net_label(1), Point::from_mm(18.0, 1.0));
///
/// let segments = splitter.split().unwrap();
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[1].labels[0].id, Handle::net_label(1));
/// ```
#[derive(Debug, Clone)]
pub struct NetSegmentSplitter<A = Handle, L = Handle, N = Handle> {
    anchors: Vec<Anchor<A>>,
    anchor_index: HashMap<A, usize>,
    lines: Vec<NetLine<A, L>>,
    labels: Vec<NetLabel<N>>,
}

impl<A, L, N> Default for NetSegmentSplitter<A, L, N> {
    fn default() -> Self {
        Self {
            anchors: vec![],
            anchor_index: HashMap::new(),
            lines: vec![],
            labels: vec![],
        }
    }
}

impl<A, L, N> NetSegmentSplitter<A, L, N>
where
    A: Eq + Hash + Clone + Debug,
    L: Eq + Hash + Clone + Debug,
    N: Clone + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an anchor. Adding an already known id is a no-op and keeps the
    /// first position.
    pub fn add_anchor(&mut self, id: A, position: Point) {
        if self.anchor_index.contains_key(&id) {
            tracing::trace!("Anchor {:?} already added", id);
            return;
        }
        self.anchor_index.insert(id.clone(), self.anchors.len());
        self.anchors.push(Anchor { id, position });
    }

    /// Adds a net line. Both ends are checked against the known anchors only
    /// when splitting.
    pub fn add_net_line(&mut self, id: L, start: A, end: A) {
        self.lines.push(NetLine { id, start, end });
    }

    pub fn add_net_label(&mut self, id: N, position: Point) {
        self.labels.push(NetLabel { id, position });
    }

    pub fn anchors(&self) -> &[Anchor<A>] {
        &self.anchors
    }

    pub fn net_lines(&self) -> &[NetLine<A, L>] {
        &self.lines
    }

    pub fn net_labels(&self) -> &[NetLabel<N>] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty() && self.lines.is_empty() && self.labels.is_empty()
    }

    /// Splits into maximal connected segments and attaches every label to its
    /// nearest segment.
    ///
    /// Without any anchor the result is empty and all labels are dropped.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(
            anchors = self.anchors.len(),
            lines = self.lines.len(),
            labels = self.labels.len()
        )
    )]
    pub fn split(self) -> Result<Vec<Segment<A, L, N>>, SplitError<A, L>> {
        let partition = partition(&self.anchors, &self.anchor_index, &self.lines)?;

        let mut label_targets = vec![Vec::new(); partition.components.len()];
        if partition.components.is_empty() {
            if !self.labels.is_empty() {
                tracing::warn!(
                    "Dropping {} net label(s) of a net segment without anchors",
                    self.labels.len()
                );
            }
        } else {
            for (index, label) in self.labels.iter().enumerate() {
                if let Some((nearest, distance)) = nearest_component(
                    &label.position,
                    &partition.components,
                    &self.anchors,
                    &partition.endpoints,
                ) {
                    tracing::trace!(
                        "Net label {:?} goes to segment {} at {}",
                        label.id,
                        nearest,
                        distance
                    );
                    label_targets[nearest].push(index);
                }
            }
        }

        let segments: Vec<_> = partition
            .components
            .iter()
            .zip(label_targets)
            .map(|(component, labels)| Segment {
                anchors: component
                    .anchors
                    .iter()
                    .map(|&i| self.anchors[i].clone())
                    .collect(),
                lines: component
                    .lines
                    .iter()
                    .map(|&i| self.lines[i].clone())
                    .collect(),
                labels: labels.into_iter().map(|i| self.labels[i].clone()).collect(),
            })
            .collect();

        tracing::debug!("Split into {} segment(s)", segments.len());
        Ok(segments)
    }
}
