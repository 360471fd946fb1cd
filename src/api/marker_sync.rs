use crate::core::{BoundaryMarkers, MarkerClass};
use crate::dom::Dom;
use crate::error::VisResult;

use super::Visualization;

impl<D: Dom> Visualization<D> {
    /// Rewrites first/last markers on every existing wrapper.
    pub(super) fn sync_markers(&self) -> VisResult<()> {
        let len = self.wrappers().count();
        for (index, wrapper) in self.wrappers().enumerate() {
            let markers = BoundaryMarkers::for_position(index, len);
            self.dom
                .toggle_marker(wrapper, MarkerClass::First, markers.first)?;
            self.dom
                .toggle_marker(wrapper, MarkerClass::Last, markers.last)?;
        }
        Ok(())
    }

    /// First wrapper after slot `index`, used as the insertion anchor so the
    /// tree order follows the slot order.
    pub(super) fn next_wrapper_after(&self, index: usize) -> Option<D::Element> {
        self.slots
            .get(index + 1..)?
            .iter()
            .find_map(|slot| slot.wrapper.clone())
    }

    /// Moves the wrapper of slot `index` to its place under the root wrapper.
    pub(super) fn place_wrapper(&self, index: usize) -> VisResult<()> {
        let (Some(root), Some(wrapper)) = (
            self.root.as_ref(),
            self.slots.get(index).and_then(|slot| slot.wrapper.as_ref()),
        ) else {
            return Ok(());
        };
        let anchor = self.next_wrapper_after(index);
        self.dom.insert_before(root, wrapper, anchor.as_ref())
    }
}
