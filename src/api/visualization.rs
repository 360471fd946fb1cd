use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::dom::Dom;
use crate::render::ChildRef;

use super::VisualizationConfig;

/// One entry of the ordered child list.
///
/// The wrapper is created lazily on the first render pass that sees the slot.
pub(super) struct ChildSlot<D: Dom> {
    pub(super) child: ChildRef<D>,
    pub(super) wrapper: Option<D::Element>,
}

impl<D: Dom> ChildSlot<D> {
    pub(super) fn new(child: ChildRef<D>) -> Self {
        Self {
            child,
            wrapper: None,
        }
    }

    pub(super) fn is<C: ?Sized>(&self, child: &Rc<RefCell<C>>) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.child), Rc::as_ptr(child))
    }
}

/// Ordered container of child renderers mounted into an element tree.
///
/// Children appear in insertion order unless moved with `set_position`.
/// Each child gets its own wrapper element inside a single root wrapper, and
/// the first and last wrappers carry boundary marker classes.
pub struct Visualization<D: Dom> {
    pub(super) dom: D,
    pub(super) element: Option<D::Element>,
    pub(super) root: Option<D::Element>,
    pub(super) slots: Vec<ChildSlot<D>>,
    pub(super) rendered: bool,
}

impl<D: Dom> Visualization<D> {
    #[must_use]
    pub fn new(dom: D, config: VisualizationConfig<D::Element>) -> Self {
        Self {
            dom,
            element: config.element,
            root: None,
            slots: Vec::new(),
            rendered: false,
        }
    }

    #[must_use]
    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// Current mount target, if one was configured or rendered into.
    #[must_use]
    pub fn element(&self) -> Option<&D::Element> {
        self.element.as_ref()
    }

    /// Root wrapper created by the first render pass.
    #[must_use]
    pub fn root(&self) -> Option<&D::Element> {
        self.root.as_ref()
    }

    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Children in display order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = &ChildRef<D>> + '_ {
        self.slots.iter().map(|slot| &slot.child)
    }

    /// Wrapper elements created so far, in display order.
    pub fn wrappers(&self) -> impl Iterator<Item = &D::Element> + '_ {
        self.slots.iter().filter_map(|slot| slot.wrapper.as_ref())
    }

    #[must_use]
    pub fn contains<C: ?Sized>(&self, child: &Rc<RefCell<C>>) -> bool {
        self.slots.iter().any(|slot| slot.is(child))
    }

    /// Zero-based position of the first occurrence of `child`.
    #[must_use]
    pub fn index_of<C: ?Sized>(&self, child: &Rc<RefCell<C>>) -> Option<usize> {
        self.slots.iter().position(|slot| slot.is(child))
    }

    /// Wrapper of the first occurrence of `child`, once it has been rendered.
    #[must_use]
    pub fn wrapper_of<C: ?Sized>(&self, child: &Rc<RefCell<C>>) -> Option<&D::Element> {
        self.slots
            .iter()
            .find(|slot| slot.is(child))
            .and_then(|slot| slot.wrapper.as_ref())
    }
}

impl<D: Dom> fmt::Debug for Visualization<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Visualization")
            .field("element", &self.element)
            .field("root", &self.root)
            .field("children", &self.slots.len())
            .field("rendered", &self.rendered)
            .finish_non_exhaustive()
    }
}
