//! Drop targets and the tree edits they perform.

use berth_core::geometry::{Rect, Size};
use berth_core::math::Vec2;

use crate::container::Slot;
use crate::coordinator::DockHooks;
use crate::error::{DockError, DockResult};
use crate::host::Host;
use crate::tree::{DockTree, NodeId, ViewId};
use crate::types::{DropTargetKinds, Side, TagSet};

/// Width of the insertion indicator drawn between tabs.
pub(crate) const DROP_INDICATOR_WIDTH: f32 = 2.0;

/// Window size used when the dragged source has never been laid out.
pub const FALLBACK_WINDOW_SIZE: Size = Size {
    width: 400.0,
    height: 300.0,
};

/// What is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragSource {
    /// A single view (tab).
    View(ViewId),
    /// A whole group with all its views.
    Group(NodeId),
}

/// Outcome of a drop at the current pointer position.
///
/// Targets with equal payloads are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropTarget {
    /// Insert into `group` at `index` (reorder or change group).
    MoveToGroup { group: NodeId, index: usize },
    /// Place next to `group` on `side`, splitting its parent.
    SplitGroup { group: NodeId, side: Side },
    /// Detach into a new window centred on `position` (screen coordinates).
    NewWindow { position: Vec2 },
    /// Explicitly nothing: dropping here does not change the layout.
    None,
}

impl DropTarget {
    /// Group highlighted while this target is active.
    pub fn group(&self) -> Option<NodeId> {
        match self {
            DropTarget::MoveToGroup { group, .. } | DropTarget::SplitGroup { group, .. } => {
                Some(*group)
            }
            DropTarget::NewWindow { .. } | DropTarget::None => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, DropTarget::None)
    }

    /// Feedback rectangle in window-local coordinates: the insertion line
    /// for a move, the half of the group that the source will occupy for a
    /// split.
    pub fn feedback_bounds(&self, tree: &DockTree) -> Option<Rect> {
        match *self {
            DropTarget::MoveToGroup { group, index } => {
                let layout = tree.layout(group)?.as_group()?;
                let vertical = layout.is_vertical();
                let edge = match layout.tabs.get(index) {
                    Some(tab) if vertical => tab.y,
                    Some(tab) => tab.x,
                    None => match layout.tabs.last() {
                        Some(tab) if vertical => tab.bottom(),
                        Some(tab) => tab.right(),
                        None if vertical => layout.header.y,
                        None => layout.header.x,
                    },
                };
                let half = DROP_INDICATOR_WIDTH / 2.0;
                Some(if vertical {
                    Rect::new(layout.header.x, edge - half, layout.header.width, DROP_INDICATOR_WIDTH)
                } else {
                    Rect::new(edge - half, layout.header.y, DROP_INDICATOR_WIDTH, layout.header.height)
                })
            }
            DropTarget::SplitGroup { group, side } => {
                let b = tree.layout(group)?.bounds();
                Some(match side {
                    Side::Top => Rect::new(b.x, b.y, b.width, b.height / 2.0),
                    Side::Bottom => Rect::new(b.x, b.y + b.height / 2.0, b.width, b.height / 2.0),
                    Side::Left => Rect::new(b.x, b.y, b.width / 2.0, b.height),
                    Side::Right => Rect::new(b.x + b.width / 2.0, b.y, b.width / 2.0, b.height),
                })
            }
            DropTarget::NewWindow { .. } | DropTarget::None => None,
        }
    }

    /// Perform the drop of `source` onto this target.
    pub fn apply(
        &self,
        tree: &mut DockTree,
        source: DragSource,
        hooks: &mut dyn DockHooks,
        host: &mut dyn Host,
    ) -> DockResult<()> {
        match *self {
            DropTarget::MoveToGroup { group, index } => move_to_group(tree, source, group, index),
            DropTarget::SplitGroup { group, side } => split_group(tree, source, group, side, hooks),
            DropTarget::NewWindow { position } => new_window(tree, source, position, hooks, host),
            DropTarget::None => Ok(()),
        }
    }
}

fn move_to_group(
    tree: &mut DockTree,
    source: DragSource,
    group: NodeId,
    index: usize,
) -> DockResult<()> {
    match source {
        DragSource::View(view) => {
            let mut position = index;
            if tree.group_of(view) == Some(group)
                && let Some(old) = tree.checked_group(group)?.index_of(view)
                && index > old
            {
                position -= 1;
            }
            tree.insert_and_select_view(group, position, view)
        }
        DragSource::Group(source_group) => {
            if source_group == group {
                return Err(DockError::InvalidArgument("cannot move a group into itself"));
            }
            let views = tree.checked_group(source_group)?.views().to_vec();
            let len = tree.checked_group(group)?.len();
            if index > len {
                return Err(DockError::IndexOutOfBounds { index, len });
            }
            for (offset, &view) in views.iter().enumerate() {
                tree.insert_view(group, index + offset, view)?;
            }
            if let Some(&last) = views.last() {
                tree.checked_group_mut(group)?.select(last);
            }
            Ok(())
        }
    }
}

fn split_group(
    tree: &mut DockTree,
    source: DragSource,
    target: NodeId,
    side: Side,
    hooks: &mut dyn DockHooks,
) -> DockResult<()> {
    if source == DragSource::Group(target) {
        return Err(DockError::InvalidArgument("cannot split a group with itself"));
    }
    let source_parent = tree
        .source_parent(source)
        .ok_or(DockError::InvalidArgument("drag source is not docked"))?;
    let target_parent = tree
        .parent(target)
        .ok_or(DockError::InvalidArgument("drop group has no parent container"))?;
    let slot = tree
        .checked_container(target_parent)?
        .slot_of(target)
        .ok_or(DockError::InvalidArgument("drop group left its container"))?;

    // Build and check everything the hooks hand back before touching the
    // source, so a failed drop leaves the tree as it was.
    let moved = match source {
        DragSource::View(_) => {
            let group = hooks.new_group(tree, Some(source_parent));
            fresh_group(tree, group)?
        }
        DragSource::Group(group) => group,
    };
    let sibling_leaves = matches!(source, DragSource::Group(_)) && source_parent == target_parent;
    let wrapper = if tree.checked_container(target_parent)?.has_both_children() && !sibling_leaves {
        let container = hooks.new_container(tree, Some(source_parent), Some(target_parent));
        match fresh_container(tree, container) {
            Ok(container) => Some(container),
            Err(e) => {
                if matches!(source, DragSource::View(_)) {
                    tree.discard_node(moved);
                }
                return Err(e);
            }
        }
    } else {
        None
    };

    match source {
        DragSource::View(view) => {
            tree.push_view(moved, view)?;
            tree.checked_group_mut(moved)?.select(view);
        }
        DragSource::Group(group) => {
            tree.detach(group);
        }
    }

    let container = tree.split(target_parent, slot, side.opposite(), |t| {
        wrapper.unwrap_or_else(|| hooks.new_container(t, Some(source_parent), Some(target_parent)))
    })?;

    let free = match tree.checked_container(container)?.left_top() {
        None => Slot::LeftTop,
        Some(_) => Slot::RightBottom,
    };
    tree.set_child(container, free, Some(moved))?;
    tracing::debug!("Split {:?} on {:?} with {:?}", target, side, source);
    Ok(())
}

fn new_window(
    tree: &mut DockTree,
    source: DragSource,
    position: Vec2,
    hooks: &mut dyn DockHooks,
    host: &mut dyn Host,
) -> DockResult<()> {
    let source_parent = tree
        .source_parent(source)
        .ok_or(DockError::InvalidArgument("drag source is not docked"))?;
    let sized_node = match source {
        DragSource::View(_) => source_parent,
        DragSource::Group(group) => group,
    };
    let size = tree
        .layout(sized_node)
        .map(|layout| layout.bounds().size())
        .unwrap_or(FALLBACK_WINDOW_SIZE);

    let container = hooks.new_container(tree, Some(source_parent), None);
    let container = fresh_container(tree, container)?;
    let group = match source {
        DragSource::View(view) => {
            let group = hooks.new_group(tree, None);
            let group = match fresh_group(tree, group) {
                Ok(group) => group,
                Err(e) => {
                    tree.discard_node(container);
                    return Err(e);
                }
            };
            tree.push_view(group, view)?;
            tree.checked_group_mut(group)?.select(view);
            group
        }
        DragSource::Group(group) => group,
    };
    tree.set_left_top(container, Some(group))?;

    let bounds = Rect::new(
        position.x - size.width / 2.0,
        position.y - size.height / 2.0,
        size.width,
        size.height,
    );
    let window = hooks.new_window(tree, container, bounds, host)?;
    tracing::debug!("Detached {:?} into window {:?}", source, window);
    Ok(())
}

/// Check that a hook returned an empty, unattached container.
fn fresh_container(tree: &DockTree, node: NodeId) -> DockResult<NodeId> {
    if tree.checked_container(node)?.child_count() > 0 || tree.parent(node).is_some() {
        return Err(DockError::InvalidArgument("hook returned a container in use"));
    }
    Ok(node)
}

/// Check that a hook returned an empty, unattached group.
fn fresh_group(tree: &DockTree, node: NodeId) -> DockResult<NodeId> {
    if !tree.checked_group(node)?.is_empty() || tree.parent(node).is_some() {
        return Err(DockError::InvalidArgument("hook returned a group in use"));
    }
    Ok(node)
}

/// Per-source properties used during resolution.
impl DockTree {
    /// Group holding a dragged view, or container holding a dragged group.
    pub fn source_parent(&self, source: DragSource) -> Option<NodeId> {
        match source {
            DragSource::View(view) => self.group_of(view),
            DragSource::Group(group) => self.parent(group),
        }
    }

    /// Root container of the tree the source currently lives in.
    pub fn source_root(&self, source: DragSource) -> Option<NodeId> {
        match source {
            DragSource::View(view) => self.root_container_of_view(view),
            DragSource::Group(group) => self.root_container(group),
        }
    }

    pub fn source_drag_tags(&self, source: DragSource) -> Option<&TagSet> {
        match source {
            DragSource::View(view) => self.view(view).map(|v| &v.drag_tags),
            DragSource::Group(group) => self.group(group).map(|g| &g.drag_tags),
        }
    }

    pub fn source_drop_kinds(&self, source: DragSource) -> DropTargetKinds {
        match source {
            DragSource::View(view) => self
                .view(view)
                .map_or(DropTargetKinds::empty(), |v| v.drop_target_kinds),
            DragSource::Group(group) => self
                .group(group)
                .map_or(DropTargetKinds::empty(), |g| g.drop_target_kinds),
        }
    }

    pub(crate) fn set_source_dragging(&mut self, source: DragSource, dragging: bool) {
        match source {
            DragSource::View(view) => {
                if let Some(v) = self.view_mut(view) {
                    v.dragging = dragging;
                }
            }
            DragSource::Group(group) => {
                if let Some(g) = self.group_mut(group) {
                    g.dragging = dragging;
                }
            }
        }
    }

    pub(crate) fn set_drop_highlight(&mut self, group: NodeId, target: Option<DropTarget>) {
        if let Some(g) = self.group_mut(group) {
            g.drop_target = target;
        }
    }
}
