use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::SplitError;
use crate::segment::{Anchor, NetLine};

/// A connected component, as indices into the splitter's anchors and lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Component {
    pub anchors: Vec<usize>,
    pub lines: Vec<usize>,
}

/// Result of partitioning: the components in discovery order and the
/// resolved `(start, end)` anchor indices of every line
#[derive(Debug)]
pub(crate) struct Partition {
    pub components: Vec<Component>,
    pub endpoints: Vec<(usize, usize)>,
}

/// Resolves line endpoints to anchor indices, rejecting unknown anchors and
/// repeated line identities.
fn resolve_endpoints<A, L>(
    anchor_index: &HashMap<A, usize>,
    lines: &[NetLine<A, L>],
) -> Result<Vec<(usize, usize)>, SplitError<A, L>>
where
    A: Eq + Hash + Clone + Debug,
    L: Eq + Hash + Clone + Debug,
{
    let mut seen = HashSet::with_capacity(lines.len());
    lines
        .iter()
        .map(|line| {
            if !seen.insert(&line.id) {
                return Err(SplitError::DuplicateNetLine {
                    line: line.id.clone(),
                });
            }
            let lookup = |anchor: &A| {
                anchor_index
                    .get(anchor)
                    .copied()
                    .ok_or_else(|| SplitError::UnknownAnchor {
                        line: line.id.clone(),
                        anchor: anchor.clone(),
                    })
            };
            Ok((lookup(&line.start)?, lookup(&line.end)?))
        })
        .collect()
}

/// Splits the anchor/line graph into its maximal connected components.
///
/// Components are emitted in the insertion order of their first anchor.
/// Inside a component anchors are listed in depth-first pre-order and lines
/// in the order they were consumed, scanning each anchor's lines in
/// insertion order.
pub(crate) fn partition<A, L>(
    anchors: &[Anchor<A>],
    anchor_index: &HashMap<A, usize>,
    lines: &[NetLine<A, L>],
) -> Result<Partition, SplitError<A, L>>
where
    A: Eq + Hash + Clone + Debug,
    L: Eq + Hash + Clone + Debug,
{
    let endpoints = resolve_endpoints(anchor_index, lines)?;

    let mut incident: Vec<Vec<usize>> = vec![vec![]; anchors.len()];
    for (line, &(start, end)) in endpoints.iter().enumerate() {
        incident[start].push(line);
        if end != start {
            incident[end].push(line);
        }
    }

    let mut visited = vec![false; anchors.len()];
    let mut consumed = vec![false; lines.len()];
    let mut components = Vec::new();

    for seed in 0..anchors.len() {
        if visited[seed] {
            continue;
        }
        let mut component = Component::default();
        visited[seed] = true;
        component.anchors.push(seed);

        // Each frame is an anchor and the position of the next incident line to scan
        let mut stack = vec![(seed, 0usize)];
        while let Some((anchor, cursor)) = stack.last_mut() {
            let Some(&line) = incident[*anchor].get(*cursor) else {
                stack.pop();
                continue;
            };
            *cursor += 1;
            if consumed[line] {
                continue;
            }
            consumed[line] = true;
            component.lines.push(line);

            let (start, end) = endpoints[line];
            let other = if start == *anchor { end } else { start };
            if !visited[other] {
                visited[other] = true;
                component.anchors.push(other);
                stack.push((other, 0));
            }
        }
        components.push(component);
    }

    debug_assert!(visited.iter().all(|v| *v));
    debug_assert!(consumed.iter().all(|c| *c));

    Ok(Partition {
        components,
        endpoints,
    })
}
