mod memory;
mod snapshot;

pub use memory::{ElementId, MemoryDom};
pub use snapshot::{DOM_SNAPSHOT_JSON_SCHEMA_V1, DomSnapshot, DomSnapshotJsonContractV1};

use std::fmt::Debug;

use crate::core::MarkerClass;
use crate::error::VisResult;

/// Element-tree capability injected into a `Visualization`.
///
/// Bundles the element factory, the tree mutator and the class-list mutator
/// so container logic never reaches for ambient globals. Implementations are
/// handles: methods take `&self` and mutate the shared tree behind them.
pub trait Dom {
    type Element: Clone + PartialEq + Debug;

    fn create_element(&self, tag: &str) -> VisResult<Self::Element>;

    /// Inserts `child` into `parent` before `reference`, or at the end when
    /// `reference` is `None`. An already attached `child` is moved.
    fn insert_before(
        &self,
        parent: &Self::Element,
        child: &Self::Element,
        reference: Option<&Self::Element>,
    ) -> VisResult<()>;

    fn remove_child(&self, parent: &Self::Element, child: &Self::Element) -> VisResult<()>;

    fn add_class(&self, element: &Self::Element, class: &str) -> VisResult<()>;

    fn remove_class(&self, element: &Self::Element, class: &str) -> VisResult<()>;

    fn has_class(&self, element: &Self::Element, class: &str) -> VisResult<bool>;

    fn append_child(&self, parent: &Self::Element, child: &Self::Element) -> VisResult<()> {
        self.insert_before(parent, child, None)
    }

    fn toggle_marker(
        &self,
        element: &Self::Element,
        marker: MarkerClass,
        enabled: bool,
    ) -> VisResult<()> {
        if enabled {
            self.add_class(element, marker.class_name())
        } else {
            self.remove_class(element, marker.class_name())
        }
    }
}
