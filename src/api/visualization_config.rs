/// Construction options for a `Visualization`.
///
/// `element` is the only recognized option: a pre-existing mount target.
/// When it is absent, the target has to be passed to `render_into`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizationConfig<E> {
    pub element: Option<E>,
}

impl<E> Default for VisualizationConfig<E> {
    fn default() -> Self {
        Self { element: None }
    }
}

impl<E> VisualizationConfig<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_element(mut self, element: E) -> Self {
        self.element = Some(element);
        self
    }
}
