use crate::dom::Dom;
use crate::error::VisResult;
use crate::render::Renderable;

/// Child that draws nothing, used by tests and headless hosts.
///
/// It remembers the last wrapper it was rendered into and how many times
/// `render` ran.
#[derive(Debug)]
pub struct NullChild<E> {
    pub container: Option<E>,
    pub render_count: usize,
}

impl<E> Default for NullChild<E> {
    fn default() -> Self {
        Self {
            container: None,
            render_count: 0,
        }
    }
}

impl<D: Dom> Renderable<D> for NullChild<D::Element> {
    fn render(&mut self, _dom: &D, wrapper: &D::Element) -> VisResult<()> {
        self.container = Some(wrapper.clone());
        self.render_count += 1;
        Ok(())
    }
}
