//! Dock layout tree: an arena of groups and containers plus the views and
//! windows that hang off them.
//!
//! Nodes are addressed by [`NodeId`], views by [`ViewId`] and windows by
//! [`WindowId`]. Parent links are kept in side tables that every mutating
//! operation maintains, so a node has at most one parent container and a
//! view belongs to at most one group.

use berth_core::alloc::HashMap;
use indexmap::IndexMap;

use crate::arrange::NodeLayout;
use crate::container::{Container, Slot};
use crate::error::{DockError, DockResult};
use crate::group::Group;
use crate::host::Host;
use crate::style::DockStyle;
use crate::types::Side;
use crate::view::View;
use crate::window::DockWindow;

/// Node identifier in the dock tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// View identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub usize);

/// Window identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub usize);

/// A node of the layout tree.
#[derive(Debug, Clone)]
pub enum DockNode {
    Group(Group),
    Container(Container),
}

impl DockNode {
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            DockNode::Group(group) => Some(group),
            DockNode::Container(_) => None,
        }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut Group> {
        match self {
            DockNode::Group(group) => Some(group),
            DockNode::Container(_) => None,
        }
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            DockNode::Container(container) => Some(container),
            DockNode::Group(_) => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut Container> {
        match self {
            DockNode::Container(container) => Some(container),
            DockNode::Group(_) => None,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, DockNode::Group(_))
    }

    pub fn is_container(&self) -> bool {
        matches!(self, DockNode::Container(_))
    }
}

/// The dock layout tree.
#[derive(Debug, Default)]
pub struct DockTree {
    nodes: IndexMap<NodeId, DockNode>,
    views: IndexMap<ViewId, View>,
    pub(crate) windows: IndexMap<WindowId, DockWindow>,
    /// Child node to parent container.
    parents: HashMap<NodeId, NodeId>,
    /// View to owning group.
    owners: HashMap<ViewId, NodeId>,
    pub(crate) layouts: HashMap<NodeId, NodeLayout>,
    style: DockStyle,
    next_id: usize,
}

impl DockTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: DockStyle) -> Self {
        Self {
            style,
            ..Default::default()
        }
    }

    pub fn style(&self) -> &DockStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: DockStyle) {
        self.style = style;
    }

    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Register a view. It starts out in no group.
    pub fn add_view(&mut self, view: View) -> ViewId {
        let id = ViewId(self.next_id());
        self.views.insert(id, view);
        id
    }

    pub fn add_group(&mut self, group: Group) -> NodeId {
        let id = NodeId(self.next_id());
        self.nodes.insert(id, DockNode::Group(group));
        id
    }

    pub fn add_container(&mut self, container: Container) -> NodeId {
        let id = NodeId(self.next_id());
        self.nodes.insert(id, DockNode::Container(container));
        id
    }

    pub(crate) fn allocate_window_id(&mut self) -> WindowId {
        WindowId(self.next_id())
    }

    pub fn node(&self, id: NodeId) -> Option<&DockNode> {
        self.nodes.get(&id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn group(&self, id: NodeId) -> Option<&Group> {
        self.nodes.get(&id).and_then(DockNode::as_group)
    }

    pub fn group_mut(&mut self, id: NodeId) -> Option<&mut Group> {
        self.nodes.get_mut(&id).and_then(DockNode::as_group_mut)
    }

    pub fn container(&self, id: NodeId) -> Option<&Container> {
        self.nodes.get(&id).and_then(DockNode::as_container)
    }

    pub fn container_mut(&mut self, id: NodeId) -> Option<&mut Container> {
        self.nodes.get_mut(&id).and_then(DockNode::as_container_mut)
    }

    pub fn view(&self, id: ViewId) -> Option<&View> {
        self.views.get(&id)
    }

    pub fn view_mut(&mut self, id: ViewId) -> Option<&mut View> {
        self.views.get_mut(&id)
    }

    pub(crate) fn checked_group(&self, id: NodeId) -> DockResult<&Group> {
        match self.nodes.get(&id) {
            Some(DockNode::Group(group)) => Ok(group),
            Some(DockNode::Container(_)) => Err(DockError::NotAGroup(id)),
            None => Err(DockError::NodeNotFound(id)),
        }
    }

    pub(crate) fn checked_group_mut(&mut self, id: NodeId) -> DockResult<&mut Group> {
        match self.nodes.get_mut(&id) {
            Some(DockNode::Group(group)) => Ok(group),
            Some(DockNode::Container(_)) => Err(DockError::NotAGroup(id)),
            None => Err(DockError::NodeNotFound(id)),
        }
    }

    pub(crate) fn checked_container(&self, id: NodeId) -> DockResult<&Container> {
        match self.nodes.get(&id) {
            Some(DockNode::Container(container)) => Ok(container),
            Some(DockNode::Group(_)) => Err(DockError::NotAContainer(id)),
            None => Err(DockError::NodeNotFound(id)),
        }
    }

    pub(crate) fn checked_container_mut(&mut self, id: NodeId) -> DockResult<&mut Container> {
        match self.nodes.get_mut(&id) {
            Some(DockNode::Container(container)) => Ok(container),
            Some(DockNode::Group(_)) => Err(DockError::NotAContainer(id)),
            None => Err(DockError::NodeNotFound(id)),
        }
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &DockNode)> {
        self.nodes.iter().map(|(&id, node)| (id, node))
    }

    pub fn views(&self) -> impl Iterator<Item = (ViewId, &View)> {
        self.views.iter().map(|(&id, view)| (id, view))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Container directly holding `node`.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parents.get(&node).copied()
    }

    /// Group currently holding `view`.
    pub fn group_of(&self, view: ViewId) -> Option<NodeId> {
        self.owners.get(&view).copied()
    }

    /// Whether `ancestor` lies on the parent chain of `node`.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.parent(node);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.parent(parent);
        }
        false
    }

    /// Topmost container above (or equal to) `node`.
    pub fn root_container(&self, node: NodeId) -> Option<NodeId> {
        let mut root = self.container(node).map(|_| node);
        let mut current = self.parent(node);
        while let Some(parent) = current {
            root = Some(parent);
            current = self.parent(parent);
        }
        root
    }

    /// Topmost container above the group holding `view`.
    pub fn root_container_of_view(&self, view: ViewId) -> Option<NodeId> {
        self.group_of(view).and_then(|group| self.root_container(group))
    }

    /// Every group in the subtree rooted at `node`, in slot order.
    pub fn groups_under(&self, node: NodeId) -> Vec<NodeId> {
        let mut groups = Vec::new();
        self.collect_groups(node, &mut groups);
        groups
    }

    fn collect_groups(&self, node: NodeId, out: &mut Vec<NodeId>) {
        match self.nodes.get(&node) {
            Some(DockNode::Group(_)) => out.push(node),
            Some(DockNode::Container(container)) => {
                for child in container.children() {
                    self.collect_groups(child, out);
                }
            }
            None => {}
        }
    }

    /// Every view in the subtree rooted at `node`.
    pub fn views_under(&self, node: NodeId) -> Vec<ViewId> {
        self.groups_under(node)
            .into_iter()
            .filter_map(|group| self.group(group))
            .flat_map(|group| group.views.iter().copied())
            .collect()
    }

    // ---- group membership ----

    /// Insert `view` into `group` at `index`, taking it out of any group it
    /// was in first. `index` counts positions after that removal.
    pub fn insert_view(&mut self, group: NodeId, index: usize, view: ViewId) -> DockResult<()> {
        if !self.views.contains_key(&view) {
            return Err(DockError::ViewNotFound(view));
        }
        let g = self.checked_group(group)?;
        let len = g.views.iter().filter(|&&v| v != view).count();
        if index > len {
            return Err(DockError::IndexOutOfBounds { index, len });
        }
        if let Some(owner) = self.group_of(view) {
            self.remove_view(owner, view);
        }
        self.checked_group_mut(group)?.views.insert(index, view);
        self.owners.insert(view, group);
        Ok(())
    }

    /// Append `view` to `group`.
    pub fn push_view(&mut self, group: NodeId, view: ViewId) -> DockResult<()> {
        let len = self
            .checked_group(group)?
            .views
            .iter()
            .filter(|&&v| v != view)
            .count();
        self.insert_view(group, len, view)
    }

    /// Insert `view` at `index` and make it the selected view.
    pub fn insert_and_select_view(
        &mut self,
        group: NodeId,
        index: usize,
        view: ViewId,
    ) -> DockResult<()> {
        self.insert_view(group, index, view)?;
        self.checked_group_mut(group)?.select(view);
        Ok(())
    }

    /// Remove `view` from `group`. Returns false if it was not a member.
    ///
    /// Selection is positional: the selected index is kept if still in
    /// range, otherwise the last view is selected; an emptied group has no
    /// selection.
    pub fn remove_view(&mut self, group: NodeId, view: ViewId) -> bool {
        let root = self.root_container(group);
        let Some(g) = self.group_mut(group) else {
            return false;
        };
        let Some(index) = g.index_of(view) else {
            return false;
        };
        let selected_index = g.selected_index();
        g.views.remove(index);
        g.selected = match selected_index {
            _ if g.views.is_empty() => None,
            None => None,
            Some(selected) => g.views.get(selected).or(g.views.last()).copied(),
        };
        self.owners.remove(&view);

        if self.views.get(&view).is_some_and(|v| v.maximized)
            && let Some(root) = root
        {
            self.restore_view(root, view);
        }
        true
    }

    /// Remove the view at `index` from `group`.
    pub fn remove_view_at(&mut self, group: NodeId, index: usize) -> DockResult<ViewId> {
        let g = self.checked_group(group)?;
        let view = *g.views.get(index).ok_or(DockError::IndexOutOfBounds {
            index,
            len: g.views.len(),
        })?;
        self.remove_view(group, view);
        Ok(view)
    }

    /// Select `view` in the group holding it.
    pub fn select_view(&mut self, view: ViewId) -> DockResult<()> {
        let group = self
            .group_of(view)
            .ok_or(DockError::InvalidArgument("view is not in a group"))?;
        self.checked_group_mut(group)?.select(view);
        Ok(())
    }

    // ---- container slots ----

    /// Put `child` into `slot` of `container`, detaching it from wherever it
    /// was. `None` clears the slot; a displaced child is left parentless.
    pub fn set_child(
        &mut self,
        container: NodeId,
        slot: Slot,
        child: Option<NodeId>,
    ) -> DockResult<()> {
        let current = self.checked_container(container)?.child(slot);
        if let Some(child) = child {
            if !self.nodes.contains_key(&child) {
                return Err(DockError::NodeNotFound(child));
            }
            if child == container || self.is_ancestor(child, container) {
                return Err(DockError::InvalidArgument(
                    "a container cannot hold one of its ancestors",
                ));
            }
            if current == Some(child) {
                return Ok(());
            }
            self.detach(child);
        }
        let previous = std::mem::replace(self.checked_container_mut(container)?.child_mut(slot), child);
        if let Some(previous) = previous {
            self.parents.remove(&previous);
        }
        if let Some(child) = child {
            self.parents.insert(child, container);
        }
        Ok(())
    }

    pub fn set_left_top(&mut self, container: NodeId, child: Option<NodeId>) -> DockResult<()> {
        self.set_child(container, Slot::LeftTop, child)
    }

    pub fn set_right_bottom(&mut self, container: NodeId, child: Option<NodeId>) -> DockResult<()> {
        self.set_child(container, Slot::RightBottom, child)
    }

    /// Clear whichever slot of `container` holds `child`.
    pub fn remove_child(&mut self, container: NodeId, child: NodeId) -> bool {
        let Some(c) = self.container_mut(container) else {
            return false;
        };
        let Some(slot) = c.slot_of(child) else {
            return false;
        };
        *c.child_mut(slot) = None;
        self.parents.remove(&child);
        true
    }

    /// Take `node` out of its parent container, returning the old parent and
    /// slot.
    pub fn detach(&mut self, node: NodeId) -> Option<(NodeId, Slot)> {
        let parent = self.parent(node)?;
        let slot = self.container(parent)?.slot_of(node)?;
        self.remove_child(parent, node);
        Some((parent, slot))
    }

    /// Reset `container` to hold only `child`, placed against `side`.
    ///
    /// Top and bottom make the container vertical, left and right make it
    /// horizontal; top and left use the leading slot.
    pub fn place_in_container(
        &mut self,
        container: NodeId,
        child: Option<NodeId>,
        side: Side,
    ) -> DockResult<()> {
        self.checked_container_mut(container)?
            .set_orientation(side.split_orientation());
        self.set_child(container, Slot::LeftTop, None)?;
        self.set_child(container, Slot::RightBottom, None)?;
        let slot = if side.is_leading() {
            Slot::LeftTop
        } else {
            Slot::RightBottom
        };
        self.set_child(container, slot, child)
    }

    /// Free a slot next to the child at `slot`.
    ///
    /// With both slots occupied the child at `slot` is wrapped in a new
    /// container from `factory`, placed against `side` inside it, and the
    /// new container is returned. Otherwise `container` itself is rearranged
    /// around its single child (if any) and returned. Either way the
    /// returned container has exactly one empty slot, opposite `side`.
    pub fn split(
        &mut self,
        container: NodeId,
        slot: Slot,
        side: Side,
        factory: impl FnOnce(&mut DockTree) -> NodeId,
    ) -> DockResult<NodeId> {
        let c = self.checked_container(container)?;
        if c.has_both_children() {
            let existing = c.child(slot);
            let wrapper = factory(self);
            self.checked_container(wrapper)?;
            self.place_in_container(wrapper, existing, side)?;
            self.set_child(container, slot, Some(wrapper))?;
            Ok(wrapper)
        } else {
            let single = c.children().next();
            self.place_in_container(container, single, side)?;
            Ok(container)
        }
    }

    pub fn split_left_top(
        &mut self,
        container: NodeId,
        side: Side,
        factory: impl FnOnce(&mut DockTree) -> NodeId,
    ) -> DockResult<NodeId> {
        self.split(container, Slot::LeftTop, side, factory)
    }

    pub fn split_right_bottom(
        &mut self,
        container: NodeId,
        side: Side,
        factory: impl FnOnce(&mut DockTree) -> NodeId,
    ) -> DockResult<NodeId> {
        self.split(container, Slot::RightBottom, side, factory)
    }

    // ---- maximize / restore ----

    /// Let `view` fill `container`, restoring any other maximized view.
    pub fn maximize_view(&mut self, container: NodeId, view: ViewId) -> DockResult<()> {
        if !self.views.contains_key(&view) {
            return Err(DockError::ViewNotFound(view));
        }
        let c = self.checked_container_mut(container)?;
        let previous = c.maximized_view.replace(view);
        if let Some(previous) = previous.filter(|&p| p != view)
            && let Some(previous) = self.views.get_mut(&previous)
        {
            previous.maximized = false;
        }
        if let Some(v) = self.views.get_mut(&view) {
            v.maximized = true;
        }
        tracing::debug!("Maximized {:?} in {:?}", view, container);
        Ok(())
    }

    /// Undo [`maximize_view`](Self::maximize_view) if `view` is the
    /// maximized one.
    pub fn restore_view(&mut self, container: NodeId, view: ViewId) {
        let Some(c) = self.container_mut(container) else {
            return;
        };
        if c.maximized_view != Some(view) {
            return;
        }
        c.maximized_view = None;
        if let Some(v) = self.views.get_mut(&view) {
            v.maximized = false;
        }
    }

    /// Maximize or restore `view` within its root container.
    ///
    /// Returns false without changing anything when maximizing a view that
    /// is not maximizable.
    pub fn set_view_maximized(&mut self, view: ViewId, maximized: bool) -> DockResult<bool> {
        let v = self.views.get(&view).ok_or(DockError::ViewNotFound(view))?;
        if maximized && !v.maximizable {
            return Ok(false);
        }
        let root = self
            .root_container_of_view(view)
            .ok_or(DockError::InvalidArgument("view is not docked in a container"))?;
        if maximized {
            self.maximize_view(root, view)?;
        } else {
            self.restore_view(root, view);
        }
        Ok(true)
    }

    // ---- closing ----

    /// Close `view`: take it out of its group, normalize the tree it lived
    /// in (closing the window if that leaves it empty) and unregister it.
    pub fn close_view(&mut self, view: ViewId, host: &mut dyn Host) -> Option<View> {
        if let Some(group) = self.group_of(view) {
            let root = self.root_container(group);
            self.remove_view(group, view);
            match root {
                Some(root) => {
                    self.normalize_or_close(root, host);
                    host.request_layout(root);
                }
                None => {
                    if self.group(group).is_some_and(|g| g.auto_close && g.is_empty()) {
                        self.discard_node(group);
                    }
                }
            }
        }
        tracing::debug!("Closed view {:?}", view);
        self.views.shift_remove(&view)
    }

    /// Remove a node from the arena. Its children lose their parent and its
    /// views their group; neither is removed.
    pub(crate) fn discard_node(&mut self, node: NodeId) {
        self.detach(node);
        match self.nodes.shift_remove(&node) {
            Some(DockNode::Container(container)) => {
                for child in container.children() {
                    self.parents.remove(&child);
                }
                if let Some(view) = container.maximized_view
                    && let Some(v) = self.views.get_mut(&view)
                {
                    v.maximized = false;
                }
            }
            Some(DockNode::Group(group)) => {
                for view in group.views {
                    self.owners.remove(&view);
                }
            }
            None => {}
        }
        self.layouts.remove(&node);
    }

    /// Remove `node` and every node below it. Views are unregistered from
    /// their groups but stay in the tree.
    pub(crate) fn discard_subtree(&mut self, node: NodeId) {
        if let Some(container) = self.container(node) {
            let children: Vec<NodeId> = container.children().collect();
            for child in children {
                self.discard_subtree(child);
            }
        }
        self.discard_node(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Orientation;

    fn group_with_views(tree: &mut DockTree, labels: &[&str]) -> (NodeId, Vec<ViewId>) {
        let group = tree.add_group(Group::new());
        let views = labels
            .iter()
            .map(|label| {
                let view = tree.add_view(View::new(*label));
                tree.push_view(group, view).unwrap();
                view
            })
            .collect();
        (group, views)
    }

    #[test]
    fn test_remove_keeps_selection_index() {
        let mut tree = DockTree::new();
        let (group, views) = group_with_views(&mut tree, &["A", "B", "C"]);
        tree.select_view(views[0]).unwrap();

        assert!(tree.remove_view(group, views[1]));
        let g = tree.group(group).unwrap();
        assert_eq!(g.views(), &[views[0], views[2]]);
        assert_eq!(g.selected_view(), Some(views[0]));
        assert_eq!(tree.group_of(views[1]), None);
    }

    #[test]
    fn test_remove_selected_last_selects_new_last() {
        let mut tree = DockTree::new();
        let (group, views) = group_with_views(&mut tree, &["A", "B", "C"]);
        tree.select_view(views[2]).unwrap();

        tree.remove_view(group, views[2]);
        assert_eq!(tree.group(group).unwrap().selected_view(), Some(views[1]));

        tree.remove_view(group, views[0]);
        tree.remove_view(group, views[1]);
        assert_eq!(tree.group(group).unwrap().selected_view(), None);
    }

    #[test]
    fn test_remove_non_member_is_noop() {
        let mut tree = DockTree::new();
        let (group, _) = group_with_views(&mut tree, &["A"]);
        let stray = tree.add_view(View::new("X"));
        assert!(!tree.remove_view(group, stray));
        assert_eq!(tree.group(group).unwrap().len(), 1);
    }

    #[test]
    fn test_insert_out_of_bounds() {
        let mut tree = DockTree::new();
        let (group, _) = group_with_views(&mut tree, &["A", "B"]);
        let view = tree.add_view(View::new("C"));
        assert_eq!(
            tree.insert_view(group, 3, view),
            Err(DockError::IndexOutOfBounds { index: 3, len: 2 })
        );
        assert!(tree.insert_view(group, 2, view).is_ok());
    }

    #[test]
    fn test_insert_moves_between_groups() {
        let mut tree = DockTree::new();
        let (first, views) = group_with_views(&mut tree, &["A", "B"]);
        let (second, _) = group_with_views(&mut tree, &["C"]);

        tree.insert_and_select_view(second, 0, views[1]).unwrap();
        assert_eq!(tree.group(first).unwrap().views(), &[views[0]]);
        assert_eq!(tree.group(second).unwrap().views()[0], views[1]);
        assert_eq!(tree.group(second).unwrap().selected_view(), Some(views[1]));
        assert_eq!(tree.group_of(views[1]), Some(second));
    }

    #[test]
    fn test_set_child_moves_node() {
        let mut tree = DockTree::new();
        let a = tree.add_container(Container::new());
        let b = tree.add_container(Container::new());
        let g = tree.add_group(Group::new());

        tree.set_left_top(a, Some(g)).unwrap();
        tree.set_right_bottom(b, Some(g)).unwrap();
        assert_eq!(tree.container(a).unwrap().left_top(), None);
        assert_eq!(tree.container(b).unwrap().right_bottom(), Some(g));
        assert_eq!(tree.parent(g), Some(b));
    }

    #[test]
    fn test_set_child_rejects_cycle() {
        let mut tree = DockTree::new();
        let outer = tree.add_container(Container::new());
        let inner = tree.add_container(Container::new());
        tree.set_left_top(outer, Some(inner)).unwrap();
        assert!(matches!(
            tree.set_left_top(inner, Some(outer)),
            Err(DockError::InvalidArgument(_))
        ));
        assert!(tree.set_left_top(inner, Some(inner)).is_err());
    }

    #[test]
    fn test_split_single_child() {
        let mut tree = DockTree::new();
        let c = tree.add_container(Container::new());
        let g = tree.add_group(Group::new());
        tree.set_left_top(c, Some(g)).unwrap();

        let result = tree
            .split_left_top(c, Side::Bottom, |t| t.add_container(Container::new()))
            .unwrap();
        assert_eq!(result, c);
        let c = tree.container(c).unwrap();
        assert_eq!(c.orientation(), Orientation::Vertical);
        assert_eq!(c.left_top(), None);
        assert_eq!(c.right_bottom(), Some(g));
    }

    #[test]
    fn test_split_wraps_occupied_slot() {
        let mut tree = DockTree::new();
        let c = tree.add_container(Container::new());
        let left = tree.add_group(Group::new());
        let right = tree.add_group(Group::new());
        tree.set_left_top(c, Some(left)).unwrap();
        tree.set_right_bottom(c, Some(right)).unwrap();

        let wrapper = tree
            .split_right_bottom(c, Side::Left, |t| t.add_container(Container::new()))
            .unwrap();
        assert_ne!(wrapper, c);
        assert_eq!(tree.container(c).unwrap().right_bottom(), Some(wrapper));
        let w = tree.container(wrapper).unwrap();
        assert_eq!(w.orientation(), Orientation::Horizontal);
        assert_eq!(w.left_top(), Some(right));
        assert_eq!(w.right_bottom(), None);
        assert_eq!(tree.parent(right), Some(wrapper));
    }

    #[test]
    fn test_maximize_replaces_previous() {
        let mut tree = DockTree::new();
        let root = tree.add_container(Container::new());
        let (group, views) = group_with_views(&mut tree, &["A", "B"]);
        tree.set_left_top(root, Some(group)).unwrap();

        assert!(tree.set_view_maximized(views[0], true).unwrap());
        assert!(tree.set_view_maximized(views[1], true).unwrap());
        assert!(!tree.view(views[0]).unwrap().is_maximized());
        assert!(tree.view(views[1]).unwrap().is_maximized());
        assert_eq!(tree.container(root).unwrap().maximized_view(), Some(views[1]));

        tree.set_view_maximized(views[1], false).unwrap();
        assert_eq!(tree.container(root).unwrap().maximized_view(), None);
    }

    #[test]
    fn test_non_maximizable_view() {
        let mut tree = DockTree::new();
        let root = tree.add_container(Container::new());
        let group = tree.add_group(Group::new());
        let view = tree.add_view(View::new("A").maximizable(false));
        tree.push_view(group, view).unwrap();
        tree.set_left_top(root, Some(group)).unwrap();

        assert!(!tree.set_view_maximized(view, true).unwrap());
        assert_eq!(tree.container(root).unwrap().maximized_view(), None);
    }

    #[test]
    fn test_removing_maximized_view_restores() {
        let mut tree = DockTree::new();
        let root = tree.add_container(Container::new());
        let (group, views) = group_with_views(&mut tree, &["A", "B"]);
        tree.set_left_top(root, Some(group)).unwrap();
        tree.set_view_maximized(views[0], true).unwrap();

        tree.remove_view(group, views[0]);
        assert_eq!(tree.container(root).unwrap().maximized_view(), None);
        assert!(!tree.view(views[0]).unwrap().is_maximized());
    }

    #[test]
    fn test_root_container() {
        let mut tree = DockTree::new();
        let root = tree.add_container(Container::new());
        let inner = tree.add_container(Container::new());
        let group = tree.add_group(Group::new());
        tree.set_left_top(root, Some(inner)).unwrap();
        tree.set_right_bottom(inner, Some(group)).unwrap();

        assert_eq!(tree.root_container(group), Some(root));
        assert_eq!(tree.root_container(root), Some(root));
        let loose = tree.add_group(Group::new());
        assert_eq!(tree.root_container(loose), None);
    }
}
