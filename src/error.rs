use std::fmt::Debug;

use thiserror::Error;

/// Contract violations detected while splitting a net segment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplitError<A: Debug, L: Debug> {
    #[error("Net line {line:?} references unknown anchor {anchor:?}")]
    UnknownAnchor { line: L, anchor: A },
    #[error("Net line {line:?} added more than once")]
    DuplicateNetLine { line: L },
}
