use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::core::MarkerClass;
use crate::dom::Dom;
use crate::error::{VisError, VisResult};

use super::Visualization;

const WRAPPER_TAG: &str = "div";

impl<D: Dom> Visualization<D> {
    /// Renders into the configured mount target.
    ///
    /// Fails with `MissingMountTarget` when no target was configured and
    /// `render_into` was never called.
    pub fn render(&mut self) -> VisResult<()> {
        let element = self.element.clone().ok_or(VisError::MissingMountTarget)?;
        self.render_pass(element)
    }

    /// Renders into `element`, which becomes the mount target.
    ///
    /// A different target than the previous one receives the existing root
    /// wrapper; already rendered children are not rendered again.
    pub fn render_into(&mut self, element: D::Element) -> VisResult<()> {
        self.render_pass(element)
    }

    fn render_pass(&mut self, element: D::Element) -> VisResult<()> {
        self.mount_root(&element)?;
        self.element = Some(element);

        let mut created = 0_usize;
        for index in 0..self.slots.len() {
            if self.slots[index].wrapper.is_none() {
                self.render_slot(index)?;
                created += 1;
            }
        }
        self.rendered = true;
        self.sync_markers()?;
        debug!(
            children = self.slots.len(),
            created_wrappers = created,
            "render visualization"
        );
        Ok(())
    }

    fn mount_root(&mut self, element: &D::Element) -> VisResult<()> {
        if let Some(root) = self.root.as_ref() {
            if self.element.as_ref() != Some(element) {
                debug!("move root wrapper to new mount target");
                self.dom.append_child(element, root)?;
            }
            return Ok(());
        }

        let root = self.dom.create_element(WRAPPER_TAG)?;
        self.dom
            .add_class(&root, MarkerClass::Visualization.class_name())?;
        self.dom.append_child(element, &root)?;
        trace!("create root wrapper");
        self.root = Some(root);
        Ok(())
    }

    /// Renders the child of slot `index` into a fresh wrapper placed in order.
    ///
    /// The wrapper is recorded only after the child rendered; on failure it
    /// is detached again so a later render pass retries the slot.
    pub(super) fn render_slot(&mut self, index: usize) -> VisResult<()> {
        let root = self
            .root
            .clone()
            .ok_or_else(|| VisError::InvalidTree("root wrapper missing".to_owned()))?;
        let child = Rc::clone(&self.slots[index].child);
        let mut child = child.try_borrow_mut().map_err(|_| VisError::ChildBusy)?;

        let wrapper = self.dom.create_element(WRAPPER_TAG)?;
        self.dom
            .add_class(&wrapper, MarkerClass::Container.class_name())?;
        let anchor = self.next_wrapper_after(index);
        self.dom.insert_before(&root, &wrapper, anchor.as_ref())?;

        trace!(index, "render child");
        if let Err(err) = child.render(&self.dom, &wrapper) {
            warn!(index, error = %err, "child render failed, detaching wrapper");
            self.dom.remove_child(&root, &wrapper)?;
            return Err(err);
        }
        self.slots[index].wrapper = Some(wrapper);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::api::{Visualization, VisualizationConfig};
    use crate::dom::{ElementId, MemoryDom};
    use crate::error::VisError;
    use crate::render::NullChild;

    #[test]
    fn render_slot_without_root_reports_tree_error() {
        let mut vis = Visualization::new(MemoryDom::new(), VisualizationConfig::new());
        let child = Rc::new(RefCell::new(NullChild::<ElementId>::default()));
        vis.add(child.clone()).expect("add");

        let err = vis.render_slot(0).expect_err("no root yet");
        assert!(matches!(err, VisError::InvalidTree(_)));
        assert_eq!(child.borrow().render_count, 0);
        assert!(vis.wrapper_of(&child).is_none());
    }
}
