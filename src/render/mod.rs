mod null_child;

pub use null_child::NullChild;

use std::cell::RefCell;
use std::rc::Rc;

use crate::dom::Dom;
use crate::error::VisResult;

/// Contract implemented by anything a `Visualization` can hold.
///
/// The child draws into `wrapper`, an element the visualization created and
/// owns. Children keep their own state; the container tracks only the
/// child-to-wrapper relation.
pub trait Renderable<D: Dom> {
    fn render(&mut self, dom: &D, wrapper: &D::Element) -> VisResult<()>;
}

/// Shared child handle. Identity is the handle's pointer, so the same child
/// added twice occupies two slots.
pub type ChildRef<D> = Rc<RefCell<dyn Renderable<D>>>;
