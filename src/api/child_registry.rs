use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::core::PositionMove;
use crate::dom::Dom;
use crate::error::VisResult;
use crate::render::ChildRef;

use super::Visualization;
use super::visualization::ChildSlot;

impl<D: Dom> Visualization<D> {
    /// Appends a child to the end of the display order.
    ///
    /// Once the visualization has been rendered, the child gets its wrapper
    /// and renders immediately; before that only the membership is recorded.
    /// A child that fails to render stays in the list without a wrapper and
    /// is retried by the next `render`.
    pub fn add(&mut self, child: ChildRef<D>) -> VisResult<()> {
        self.slots.push(ChildSlot::new(child));
        trace!(
            count = self.slots.len(),
            rendered = self.rendered,
            "add child"
        );
        if !self.rendered {
            return Ok(());
        }

        self.render_slot(self.slots.len() - 1)?;
        self.sync_markers()
    }

    /// Removes the first occurrence of `child`. Returns `true` when removed.
    ///
    /// An absent child is not an error: the call returns `false` and changes
    /// nothing.
    pub fn remove<C: ?Sized>(&mut self, child: &Rc<RefCell<C>>) -> VisResult<bool> {
        let Some(index) = self.index_of(child) else {
            trace!("remove ignored: child not present");
            return Ok(false);
        };

        if let (Some(root), Some(wrapper)) = (self.root.as_ref(), self.slots[index].wrapper.as_ref())
        {
            self.dom.remove_child(root, wrapper)?;
        }
        self.slots.remove(index);
        debug!(index, remaining = self.slots.len(), "remove child");

        if self.rendered {
            self.sync_markers()?;
        }
        Ok(true)
    }

    /// Moves `child` to `index` and returns `true`.
    ///
    /// `index` counts positions with the child already taken out, so the
    /// valid range is `[0, len - 1]`. Out-of-bounds indices and absent
    /// children return `false` and leave the order untouched.
    pub fn set_position<C: ?Sized>(
        &mut self,
        child: &Rc<RefCell<C>>,
        index: usize,
    ) -> VisResult<bool> {
        let Some(from) = self.index_of(child) else {
            trace!(index, "set_position ignored: child not present");
            return Ok(false);
        };
        let Some(position_move) = PositionMove::resolve(self.slots.len(), from, index) else {
            debug!(
                from,
                index,
                len = self.slots.len(),
                "reject out-of-bounds child position"
            );
            return Ok(false);
        };
        if position_move.is_noop() {
            return Ok(true);
        }

        position_move.apply(&mut self.slots);
        trace!(from, to = index, "move child");
        if self.rendered {
            self.place_wrapper(index)?;
            self.sync_markers()?;
        }
        Ok(true)
    }
}
