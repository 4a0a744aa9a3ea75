//! Tree normalization.
//!
//! After structural edits a tree may contain empty auto-closing groups,
//! empty containers, or containers wrapping a single container. The
//! normalizer collapses these bottom-up so that every non-root container
//! has both slots filled and no container holds a lone container child.

use berth_core::profiling::profile_function;

use crate::container::Slot;
use crate::host::Host;
use crate::tree::{DockNode, DockTree, NodeId};

impl DockTree {
    /// Normalize the subtree rooted at `container` in place.
    ///
    /// `container` itself is never discarded, even if it ends up empty.
    /// Discarded nodes are removed from the arena. Running it twice is the
    /// same as running it once.
    pub fn normalize(&mut self, container: NodeId) {
        profile_function!();
        if self.container(container).is_none() {
            return;
        }
        let before = self.node_count();
        self.normalize_container(container);
        let discarded = before - self.node_count();
        if discarded > 0 {
            tracing::debug!("Normalized {:?}, discarded {} nodes", container, discarded);
        }
    }

    fn normalize_container(&mut self, container: NodeId) {
        let (left_top, right_bottom) = match self.container(container) {
            Some(c) => (c.left_top(), c.right_bottom()),
            None => return,
        };
        for child in [left_top, right_bottom].into_iter().flatten() {
            self.remove_child(container, child);
        }

        let left_top = left_top.and_then(|child| self.normalize_child(child));
        let right_bottom = right_bottom.and_then(|child| self.normalize_child(child));

        let (left_top, right_bottom) = match (left_top, right_bottom) {
            (Some(single), None) | (None, Some(single)) => {
                if self.container(single).is_some() {
                    self.hoist(container, single)
                } else {
                    (Some(single), None)
                }
            }
            pair => pair,
        };

        // Slots were emptied above and the children are detached.
        for (slot, child) in [(Slot::LeftTop, left_top), (Slot::RightBottom, right_bottom)] {
            if let Err(e) = self.set_child(container, slot, child) {
                tracing::warn!("Failed to reattach {:?} during normalize: {}", child, e);
            }
        }
    }

    /// Normalize a detached child and return what should take its place.
    fn normalize_child(&mut self, node: NodeId) -> Option<NodeId> {
        match self.node(node)? {
            DockNode::Group(group) => {
                if group.auto_close && group.is_empty() {
                    self.discard_node(node);
                    None
                } else {
                    Some(node)
                }
            }
            DockNode::Container(_) => {
                self.normalize_container(node);
                let children: Vec<NodeId> = self.container(node)?.children().collect();
                match children.as_slice() {
                    [_, _] => Some(node),
                    [single] => {
                        let single = *single;
                        self.discard_node(node);
                        Some(single)
                    }
                    _ => {
                        self.discard_node(node);
                        None
                    }
                }
            }
        }
    }

    /// Adopt the children and divider settings of `child` (a lone container
    /// child of `container`) and discard it.
    fn hoist(&mut self, container: NodeId, child: NodeId) -> (Option<NodeId>, Option<NodeId>) {
        let Some(source) = self.container(child).cloned() else {
            return (Some(child), None);
        };
        self.discard_node(child);

        if let Some(target) = self.container_mut(container) {
            target.set_orientation(source.orientation());
            target.set_divider_drag_mode(source.divider_drag_mode());
            target.set_divider_size(source.divider_size());
            target.set_resize_policy(source.resize_policy());
            target.set_position(source.position());
        }
        (source.left_top(), source.right_bottom())
    }

    /// Normalize, then close the window rooted at `container` if it is now
    /// empty and the window auto-closes.
    pub fn normalize_or_close(&mut self, container: NodeId, host: &mut dyn Host) {
        self.normalize(container);
        let Some(c) = self.container(container) else {
            return;
        };
        if c.child_count() > 0 || self.parent(container).is_some() {
            return;
        }
        if let Some(window) = self.window_of_root(container)
            && self.window(window).is_some_and(|w| w.auto_close)
        {
            tracing::debug!("Closing empty window {:?}", window);
            if let Err(e) = self.close_window(window, host) {
                tracing::warn!("Failed to close empty window {:?}: {}", window, e);
            }
        }
    }

    /// Whether the subtree under `container` is already in normal form.
    pub fn is_normalized(&self, container: NodeId) -> bool {
        let Some(c) = self.container(container) else {
            return false;
        };
        if c.child_count() == 1 && c.children().all(|child| self.container(child).is_some()) {
            return false;
        }
        c.children().all(|child| self.is_normalized_child(child))
    }

    fn is_normalized_child(&self, node: NodeId) -> bool {
        match self.node(node) {
            Some(DockNode::Group(group)) => !(group.auto_close && group.is_empty()),
            Some(DockNode::Container(c)) => c.has_both_children() && self.is_normalized(node),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::container::Container;
    use crate::group::Group;
    use crate::tree::DockTree;
    use crate::types::{Orientation, ResizePolicy};
    use crate::view::View;

    #[test]
    fn test_empty_auto_close_group_removed() {
        let mut tree = DockTree::new();
        let root = tree.add_container(Container::new());
        let empty = tree.add_group(Group::new());
        let kept = tree.add_group(Group::new().auto_close(false));
        tree.set_left_top(root, Some(empty)).unwrap();
        tree.set_right_bottom(root, Some(kept)).unwrap();

        tree.normalize(root);
        let c = tree.container(root).unwrap();
        assert_eq!(c.left_top(), Some(kept));
        assert_eq!(c.right_bottom(), None);
        assert!(!tree.contains_node(empty));
    }

    #[test]
    fn test_single_container_child_hoisted() {
        let mut tree = DockTree::new();
        let root = tree.add_container(Container::new());
        let inner = tree.add_container(
            Container::new()
                .with_orientation(Orientation::Vertical)
                .with_resize_policy(ResizePolicy::KeepLeftTopSize)
                .with_position(0.25),
        );
        let a = tree.add_group(Group::new());
        let b = tree.add_group(Group::new());
        for g in [a, b] {
            let v = tree.add_view(View::new("v"));
            tree.push_view(g, v).unwrap();
        }
        tree.set_right_bottom(root, Some(inner)).unwrap();
        tree.set_left_top(inner, Some(a)).unwrap();
        tree.set_right_bottom(inner, Some(b)).unwrap();

        tree.normalize(root);
        let c = tree.container(root).unwrap();
        assert_eq!(c.left_top(), Some(a));
        assert_eq!(c.right_bottom(), Some(b));
        assert_eq!(c.orientation(), Orientation::Vertical);
        assert_eq!(c.resize_policy(), ResizePolicy::KeepLeftTopSize);
        assert_eq!(c.position(), 0.25);
        assert!(!tree.contains_node(inner));
        assert_eq!(tree.parent(a), Some(root));
    }

    #[test]
    fn test_nested_collapse() {
        let mut tree = DockTree::new();
        let root = tree.add_container(Container::new());
        let mid = tree.add_container(Container::new());
        let leaf_container = tree.add_container(Container::new());
        let group = tree.add_group(Group::new().auto_close(false));
        let empty = tree.add_group(Group::new());
        tree.set_left_top(root, Some(mid)).unwrap();
        tree.set_left_top(mid, Some(leaf_container)).unwrap();
        tree.set_right_bottom(mid, Some(empty)).unwrap();
        tree.set_left_top(leaf_container, Some(group)).unwrap();

        tree.normalize(root);
        let c = tree.container(root).unwrap();
        assert_eq!(c.left_top(), Some(group));
        assert_eq!(c.right_bottom(), None);
        assert_eq!(tree.node_count(), 2);
        assert!(tree.is_normalized(root));
    }

    #[test]
    fn test_idempotent() {
        let mut tree = DockTree::new();
        let root = tree.add_container(Container::new());
        let inner = tree.add_container(Container::new());
        let a = tree.add_group(Group::new().auto_close(false));
        let b = tree.add_group(Group::new());
        tree.set_left_top(root, Some(a)).unwrap();
        tree.set_right_bottom(root, Some(inner)).unwrap();
        tree.set_left_top(inner, Some(b)).unwrap();

        tree.normalize(root);
        let first: Vec<_> = tree.nodes().map(|(id, _)| id).collect();
        let shape = (
            tree.container(root).unwrap().left_top(),
            tree.container(root).unwrap().right_bottom(),
        );
        tree.normalize(root);
        let second: Vec<_> = tree.nodes().map(|(id, _)| id).collect();
        assert_eq!(first, second);
        assert_eq!(
            shape,
            (
                tree.container(root).unwrap().left_top(),
                tree.container(root).unwrap().right_bottom()
            )
        );
    }
}
