use std::cell::RefCell;
use std::rc::Rc;

use humble_vis::dom::{ElementId, MemoryDom};
use humble_vis::render::NullChild;
use humble_vis::{Visualization, VisualizationConfig};

type MockChild = NullChild<ElementId>;

fn mock_child() -> Rc<RefCell<MockChild>> {
    Rc::new(RefCell::new(MockChild::default()))
}

fn visualization() -> Visualization<MemoryDom> {
    Visualization::new(MemoryDom::new(), VisualizationConfig::new())
}

#[test]
fn new_visualization_has_no_children() {
    let vis = visualization();
    assert_eq!(vis.len(), 0);
    assert!(vis.is_empty());
    assert!(!vis.is_rendered());
    assert_eq!(vis.children().len(), 0);
}

#[test]
fn adds_children_in_order() {
    let mut vis = visualization();
    let a = mock_child();
    let b = mock_child();

    vis.add(a.clone()).expect("add a");
    vis.add(b.clone()).expect("add b");

    assert!(vis.contains(&a));
    assert!(vis.contains(&b));
    assert_eq!(vis.index_of(&a), Some(0));
    assert_eq!(vis.index_of(&b), Some(1));
}

#[test]
fn index_of_absent_child_is_none() {
    let mut vis = visualization();
    vis.add(mock_child()).expect("add");
    assert_eq!(vis.index_of(&mock_child()), None);
}

#[test]
fn adding_before_render_touches_no_elements() {
    let dom = MemoryDom::new();
    let mut vis = Visualization::new(dom.clone(), VisualizationConfig::new());
    let a = mock_child();
    vis.add(a.clone()).expect("add");

    assert_eq!(dom.element_count(), 0);
    assert!(vis.wrapper_of(&a).is_none());
    assert_eq!(a.borrow().render_count, 0);
}

#[test]
fn removing_absent_child_is_a_no_op() {
    let mut vis = visualization();
    let a = mock_child();
    vis.add(a.clone()).expect("add");

    let removed = vis.remove(&mock_child()).expect("remove absent");
    assert!(!removed);
    assert_eq!(vis.len(), 1);
    assert_eq!(vis.index_of(&a), Some(0));
}

#[test]
fn removes_only_first_occurrence_of_duplicate() {
    let mut vis = visualization();
    let a = mock_child();
    let b = mock_child();
    vis.add(a.clone()).expect("add a");
    vis.add(b.clone()).expect("add b");
    vis.add(a.clone()).expect("add a again");
    assert_eq!(vis.len(), 3);

    assert!(vis.remove(&a).expect("remove a"));
    assert_eq!(vis.len(), 2);
    assert_eq!(vis.index_of(&b), Some(0));
    assert_eq!(vis.index_of(&a), Some(1));
}

#[test]
fn reorders_children() {
    let mut vis = visualization();
    let a = mock_child();
    let b = mock_child();
    let c = mock_child();
    for child in [&a, &b, &c] {
        vis.add(child.clone()).expect("add");
    }

    assert!(vis.set_position(&c, 0).expect("move c"));
    assert_eq!(vis.index_of(&c), Some(0));
    assert_eq!(vis.index_of(&a), Some(1));
    assert_eq!(vis.index_of(&b), Some(2));

    assert!(vis.set_position(&c, 2).expect("move c back"));
    assert_eq!(vis.index_of(&a), Some(0));
    assert_eq!(vis.index_of(&b), Some(1));
    assert_eq!(vis.index_of(&c), Some(2));
}

#[test]
fn fails_to_reorder_when_index_out_of_bounds() {
    let mut vis = visualization();
    let a = mock_child();
    let b = mock_child();
    let c = mock_child();
    for child in [&a, &b, &c] {
        vis.add(child.clone()).expect("add");
    }

    assert!(!vis.set_position(&c, 3).expect("len is out of bounds"));
    assert!(!vis.set_position(&a, 100).expect("far out of bounds"));
    assert_eq!(vis.index_of(&a), Some(0));
    assert_eq!(vis.index_of(&b), Some(1));
    assert_eq!(vis.index_of(&c), Some(2));
}

#[test]
fn set_position_of_absent_child_returns_false() {
    let mut vis = visualization();
    vis.add(mock_child()).expect("add");
    assert!(!vis.set_position(&mock_child(), 0).expect("absent child"));
}

#[test]
fn set_position_to_current_index_succeeds() {
    let mut vis = visualization();
    let a = mock_child();
    let b = mock_child();
    vis.add(a.clone()).expect("add a");
    vis.add(b.clone()).expect("add b");

    assert!(vis.set_position(&b, 1).expect("same index"));
    assert_eq!(vis.index_of(&b), Some(1));
}
