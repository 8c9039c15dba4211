use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The kind of document object a [`Handle`] refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandleKind {
    NetPoint,
    SymbolPin,
    BoardPad,
    Via,
    NetLine,
    NetLabel,
}

impl HandleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandleKind::NetPoint => "netpoint",
            HandleKind::SymbolPin => "pin",
            HandleKind::BoardPad => "pad",
            HandleKind::Via => "via",
            HandleKind::NetLine => "netline",
            HandleKind::NetLabel => "netlabel",
        }
    }
}

impl Display for HandleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a caller-owned document object.
///
/// Net points, pins, lines and labels of a schematic or board live in
/// different collections of the caller, so the raw id alone is not unique.
/// Pairing it with its kind keeps a netpoint and a pin with the same raw id
/// apart when both are fed to one splitter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Handle {
    pub kind: HandleKind,
    pub raw: u64,
}

impl Handle {
    pub fn new(kind: HandleKind, raw: u64) -> Self {
        Self { kind, raw }
    }

    pub fn net_point(raw: u64) -> Self {
        Self::new(HandleKind::NetPoint, raw)
    }

    pub fn symbol_pin(raw: u64) -> Self {
        Self::new(HandleKind::SymbolPin, raw)
    }

    pub fn board_pad(raw: u64) -> Self {
        Self::new(HandleKind::BoardPad, raw)
    }

    pub fn via(raw: u64) -> Self {
        Self::new(HandleKind::Via, raw)
    }

    pub fn net_line(raw: u64) -> Self {
        Self::new(HandleKind::NetLine, raw)
    }

    pub fn net_label(raw: u64) -> Self {
        Self::new(HandleKind::NetLabel, raw)
    }
}

impl Display for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.kind, self.raw)
    }
}
