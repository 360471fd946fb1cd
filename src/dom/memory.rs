use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{VisError, VisResult};

use super::{Dom, DomSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(u32);

impl ElementId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

#[derive(Debug)]
struct Node {
    tag: String,
    classes: IndexSet<String>,
    parent: Option<ElementId>,
    children: SmallVec<[ElementId; 4]>,
}

#[derive(Debug, Default)]
struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    fn node(&self, id: ElementId) -> VisResult<&Node> {
        self.nodes
            .get(id.raw() as usize)
            .ok_or(VisError::UnknownElement { id: id.raw() })
    }

    fn node_mut(&mut self, id: ElementId) -> VisResult<&mut Node> {
        self.nodes
            .get_mut(id.raw() as usize)
            .ok_or(VisError::UnknownElement { id: id.raw() })
    }

    fn push(&mut self, tag: &str) -> VisResult<ElementId> {
        let raw = u32::try_from(self.nodes.len())
            .map_err(|_| VisError::InvalidTree("element capacity exhausted".to_owned()))?;
        self.nodes.push(Node {
            tag: tag.to_owned(),
            classes: IndexSet::new(),
            parent: None,
            children: SmallVec::new(),
        });
        Ok(ElementId::new(raw))
    }

    /// Returns `true` when `ancestor` is `id` itself or one of its parents.
    fn is_inclusive_ancestor(&self, ancestor: ElementId, id: ElementId) -> VisResult<bool> {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if current == ancestor {
                return Ok(true);
            }
            cursor = self.node(current)?.parent;
        }
        Ok(false)
    }

    fn detach(&mut self, id: ElementId) -> VisResult<()> {
        let Some(parent) = self.node(id)?.parent else {
            return Ok(());
        };
        self.node_mut(parent)?.children.retain(|child| *child != id);
        self.node_mut(id)?.parent = None;
        Ok(())
    }

    fn collect_by_classes(
        &self,
        id: ElementId,
        classes: &[&str],
        out: &mut Vec<ElementId>,
    ) -> VisResult<()> {
        for &child in &self.node(id)?.children {
            let node = self.node(child)?;
            if classes.iter().all(|class| node.classes.contains(*class)) {
                out.push(child);
            }
            self.collect_by_classes(child, classes, out)?;
        }
        Ok(())
    }

    fn snapshot(&self, id: ElementId) -> VisResult<DomSnapshot> {
        let node = self.node(id)?;
        let children = node
            .children
            .iter()
            .map(|child| self.snapshot(*child))
            .collect::<VisResult<Vec<_>>>()?;
        Ok(DomSnapshot {
            tag: node.tag.clone(),
            classes: node.classes.iter().cloned().collect(),
            children,
        })
    }
}

/// In-memory element tree used by tests and headless hosts.
///
/// Cloning yields another handle to the same tree, the way browser element
/// handles alias one document.
#[derive(Debug, Clone, Default)]
pub struct MemoryDom {
    tree: Rc<RefCell<Tree>>,
}

impl MemoryDom {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn element_count(&self) -> usize {
        self.tree.borrow().nodes.len()
    }

    pub fn tag(&self, id: ElementId) -> VisResult<String> {
        Ok(self.tree.borrow().node(id)?.tag.clone())
    }

    pub fn parent(&self, id: ElementId) -> VisResult<Option<ElementId>> {
        Ok(self.tree.borrow().node(id)?.parent)
    }

    pub fn children(&self, id: ElementId) -> VisResult<Vec<ElementId>> {
        Ok(self.tree.borrow().node(id)?.children.to_vec())
    }

    pub fn classes(&self, id: ElementId) -> VisResult<Vec<String>> {
        Ok(self.tree.borrow().node(id)?.classes.iter().cloned().collect())
    }

    /// Descendants of `root` carrying every class in `classes`, in document order.
    pub fn find_by_class(&self, root: ElementId, classes: &[&str]) -> VisResult<Vec<ElementId>> {
        let mut found = Vec::new();
        self.tree
            .borrow()
            .collect_by_classes(root, classes, &mut found)?;
        Ok(found)
    }

    /// Returns `true` when some descendant of `root` carries every class in `classes`.
    pub fn contains_class(&self, root: ElementId, classes: &[&str]) -> VisResult<bool> {
        Ok(!self.find_by_class(root, classes)?.is_empty())
    }

    pub fn snapshot(&self, root: ElementId) -> VisResult<DomSnapshot> {
        self.tree.borrow().snapshot(root)
    }
}

impl Dom for MemoryDom {
    type Element = ElementId;

    fn create_element(&self, tag: &str) -> VisResult<ElementId> {
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(VisError::InvalidTree(format!("invalid tag name `{tag}`")));
        }
        self.tree.borrow_mut().push(tag)
    }

    fn insert_before(
        &self,
        parent: &ElementId,
        child: &ElementId,
        reference: Option<&ElementId>,
    ) -> VisResult<()> {
        let mut tree = self.tree.borrow_mut();
        tree.node(*parent)?;
        if tree.is_inclusive_ancestor(*child, *parent)? {
            return Err(VisError::InvalidTree(format!(
                "cannot insert element {} into its own subtree",
                child.raw()
            )));
        }
        if let Some(reference) = reference {
            if tree.node(*reference)?.parent != Some(*parent) {
                return Err(VisError::InvalidTree(format!(
                    "reference element {} is not a child of {}",
                    reference.raw(),
                    parent.raw()
                )));
            }
            if reference == child {
                return Ok(());
            }
        }

        tree.detach(*child)?;
        let parent_node = tree.node_mut(*parent)?;
        let index = reference
            .and_then(|reference| parent_node.children.iter().position(|id| id == reference))
            .unwrap_or(parent_node.children.len());
        parent_node.children.insert(index, *child);
        tree.node_mut(*child)?.parent = Some(*parent);
        Ok(())
    }

    fn remove_child(&self, parent: &ElementId, child: &ElementId) -> VisResult<()> {
        let mut tree = self.tree.borrow_mut();
        tree.node(*parent)?;
        if tree.node(*child)?.parent != Some(*parent) {
            return Err(VisError::InvalidTree(format!(
                "element {} is not a child of {}",
                child.raw(),
                parent.raw()
            )));
        }
        tree.detach(*child)
    }

    fn add_class(&self, element: &ElementId, class: &str) -> VisResult<()> {
        validate_class(class)?;
        self.tree
            .borrow_mut()
            .node_mut(*element)?
            .classes
            .insert(class.to_owned());
        Ok(())
    }

    fn remove_class(&self, element: &ElementId, class: &str) -> VisResult<()> {
        validate_class(class)?;
        self.tree
            .borrow_mut()
            .node_mut(*element)?
            .classes
            .shift_remove(class);
        Ok(())
    }

    fn has_class(&self, element: &ElementId, class: &str) -> VisResult<bool> {
        Ok(self.tree.borrow().node(*element)?.classes.contains(class))
    }
}

fn validate_class(class: &str) -> VisResult<()> {
    if class.is_empty() || class.chars().any(char::is_whitespace) {
        return Err(VisError::InvalidTree(format!(
            "class token `{class}` must be non-empty without whitespace"
        )));
    }
    Ok(())
}
