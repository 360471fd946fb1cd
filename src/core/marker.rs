use serde::{Deserialize, Serialize};

/// Structural marker classes written onto wrapper elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerClass {
    /// Root wrapper placed inside the mount target.
    Visualization,
    /// Every child wrapper.
    Container,
    /// Child wrapper at sequence position 0.
    First,
    /// Child wrapper at the last sequence position.
    Last,
}

impl MarkerClass {
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Visualization => "humble-vis-visualization",
            Self::Container => "humble-vis-child-container",
            Self::First => "humble-vis-first",
            Self::Last => "humble-vis-last",
        }
    }
}

impl std::fmt::Display for MarkerClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.class_name())
    }
}

/// First/last flags for one wrapper in a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoundaryMarkers {
    pub first: bool,
    pub last: bool,
}

impl BoundaryMarkers {
    /// Resolves markers for `index` in a sequence of `len` wrappers.
    ///
    /// Indices outside the sequence carry no markers.
    #[must_use]
    pub fn for_position(index: usize, len: usize) -> Self {
        if index >= len {
            return Self::default();
        }
        Self {
            first: index == 0,
            last: index + 1 == len,
        }
    }
}
