//! Connectedness state of a digital object.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether an object is known to be connected.
///
/// `Unknown` is the state of a freshly built object; only a traversal (or a
/// constructor that knows the answer, such as component decomposition)
/// resolves it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Connectedness {
    Disconnected,
    Connected,
    Unknown,
}

impl Connectedness {
    #[inline]
    pub fn is_known(self) -> bool {
        self != Connectedness::Unknown
    }
}

impl fmt::Display for Connectedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Connectedness::Disconnected => "DISCONNECTED",
            Connectedness::Connected => "CONNECTED",
            Connectedness::Unknown => "UNKNOWN",
        })
    }
}

/// Component counts behind the simple-point test at a point `v`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimplePointCounts {
    /// κ-components of the object inside the neighborhood of `v`.
    pub foreground: usize,
    /// λ-components of the complement inside the neighborhood of `v`.
    pub background: usize,
}

impl SimplePointCounts {
    /// `v` is simple iff both counts are exactly one.
    #[inline]
    pub fn is_simple(self) -> bool {
        self.foreground == 1 && self.background == 1
    }
}
