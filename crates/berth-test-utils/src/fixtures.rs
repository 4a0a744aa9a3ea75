//! Ready-made dock layouts for tests and benches.

use berth_core::geometry::Rect;
use berth_dock::{Container, DockTree, DockWindow, Group, NodeId, Orientation, View, ViewId, WindowId};

/// Screen bounds used by the fixtures: with the default 5px divider a
/// horizontal root splits into two 200px halves.
pub const FIXTURE_BOUNDS: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 405.0,
    height: 300.0,
};

/// Add a group holding one view per label. The first view is selected.
pub fn group_with_views(tree: &mut DockTree, group: Group, labels: &[&str]) -> (NodeId, Vec<ViewId>) {
    let group = tree.add_group(group);
    let views: Vec<ViewId> = labels
        .iter()
        .map(|label| {
            let view = tree.add_view(View::new(*label));
            tree.push_view(group, view).expect("fresh group accepts views");
            view
        })
        .collect();
    if let Some(&first) = views.first() {
        tree.select_view(first).expect("view was just added");
    }
    (group, views)
}

/// One window whose root holds a single group.
#[derive(Debug)]
pub struct SingleGroup {
    pub tree: DockTree,
    pub window: WindowId,
    pub root: NodeId,
    pub group: NodeId,
    pub views: Vec<ViewId>,
}

pub fn single_group(labels: &[&str]) -> SingleGroup {
    let mut tree = DockTree::new();
    let root = tree.add_container(Container::new());
    let (group, views) = group_with_views(&mut tree, Group::new(), labels);
    tree.set_left_top(root, Some(group)).expect("root is a container");
    let window = tree
        .add_window(DockWindow::new(root, FIXTURE_BOUNDS))
        .expect("root is unparented");
    SingleGroup {
        tree,
        window,
        root,
        group,
        views,
    }
}

/// One window whose horizontal root holds two groups side by side.
#[derive(Debug)]
pub struct SideBySide {
    pub tree: DockTree,
    pub window: WindowId,
    pub root: NodeId,
    pub left: NodeId,
    pub right: NodeId,
    pub left_views: Vec<ViewId>,
    pub right_views: Vec<ViewId>,
}

pub fn side_by_side(left: &[&str], right: &[&str]) -> SideBySide {
    side_by_side_with(Group::new(), left, Group::new(), right)
}

/// Like [`side_by_side`] with caller-configured groups.
pub fn side_by_side_with(
    left_group: Group,
    left: &[&str],
    right_group: Group,
    right: &[&str],
) -> SideBySide {
    let mut tree = DockTree::new();
    let root = tree.add_container(Container::new().with_orientation(Orientation::Horizontal));
    let (left_id, left_views) = group_with_views(&mut tree, left_group, left);
    let (right_id, right_views) = group_with_views(&mut tree, right_group, right);
    tree.set_left_top(root, Some(left_id)).expect("root is a container");
    tree.set_right_bottom(root, Some(right_id)).expect("root is a container");
    let window = tree
        .add_window(DockWindow::new(root, FIXTURE_BOUNDS))
        .expect("root is unparented");
    SideBySide {
        tree,
        window,
        root,
        left: left_id,
        right: right_id,
        left_views,
        right_views,
    }
}
