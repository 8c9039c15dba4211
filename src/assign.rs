use crate::geometry::{distance_between_point_and_line, Point, UnsignedLength};
use crate::partition::Component;
use crate::segment::Anchor;

/// Minimum distance from `position` to any of the given anchor positions
/// and finite lines. `None` when both are empty.
pub(crate) fn distance_to_elements(
    position: &Point,
    anchors: impl IntoIterator<Item = Point>,
    lines: impl IntoIterator<Item = (Point, Point)>,
) -> Option<UnsignedLength> {
    let to_anchors = anchors.into_iter().map(|anchor| position.distance_to(&anchor));
    let to_lines = lines
        .into_iter()
        .map(|(start, end)| distance_between_point_and_line(position, &start, &end));
    to_anchors.chain(to_lines).min()
}

fn distance_to_component<A>(
    position: &Point,
    component: &Component,
    anchors: &[Anchor<A>],
    endpoints: &[(usize, usize)],
) -> Option<UnsignedLength> {
    distance_to_elements(
        position,
        component.anchors.iter().map(|&i| anchors[i].position),
        component.lines.iter().map(|&line| {
            let (start, end) = endpoints[line];
            (anchors[start].position, anchors[end].position)
        }),
    )
}

/// Index of the component nearest to `position`.
///
/// Components are compared in the given order and only a strictly smaller
/// distance replaces the current best, so ties go to the earlier component.
pub(crate) fn nearest_component<A>(
    position: &Point,
    components: &[Component],
    anchors: &[Anchor<A>],
    endpoints: &[(usize, usize)],
) -> Option<(usize, UnsignedLength)> {
    let mut nearest: Option<(usize, UnsignedLength)> = None;
    for (index, component) in components.iter().enumerate() {
        let Some(distance) = distance_to_component(position, component, anchors, endpoints) else {
            continue;
        };
        match nearest {
            Some((_, best)) if best <= distance => {}
            _ => nearest = Some((index, distance)),
        }
    }
    nearest
}
