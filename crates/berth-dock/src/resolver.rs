//! Drop-target resolution.
//!
//! Given a drag source and a pointer in screen coordinates, decide what a
//! drop would do. Resolution is read-only: it inspects the tree and the
//! cached layouts from the last arrangement pass.

use berth_core::geometry::{Rect, Size};
use berth_core::math::Vec2;
use berth_core::profiling::profile_function;

use crate::arrange::GroupLayout;
use crate::drop_target::{DragSource, DropTarget};
use crate::group::Group;
use crate::tree::{DockNode, DockTree, NodeId, WindowId};
use crate::types::{DropTargetKinds, Side, tags_match};

/// Resolve the drop target for `source` at `screen`.
///
/// Inside a window the answer is always `Some`, possibly
/// [`DropTarget::None`]. Outside every window (or over several overlapping
/// unfocused ones) the source may detach into a new window if it allows
/// that; otherwise there is no target at all.
pub fn find_drop_target(tree: &DockTree, source: DragSource, screen: Vec2) -> Option<DropTarget> {
    profile_function!();
    match window_at(tree, screen) {
        Some(window) => Some(find_target_in_window(tree, source, window, screen)),
        None => find_target_outside_windows(tree, source, screen),
    }
}

/// The single window under `screen`, preferring focused windows when
/// several overlap.
pub fn window_at(tree: &DockTree, screen: Vec2) -> Option<WindowId> {
    let candidates: Vec<WindowId> = tree
        .windows()
        .filter(|(_, window)| window.showing && window.bounds.contains(screen))
        .map(|(id, _)| id)
        .collect();
    match candidates.as_slice() {
        [single] => Some(*single),
        [] => None,
        many => {
            let focused: Vec<WindowId> = many
                .iter()
                .copied()
                .filter(|&id| tree.window(id).is_some_and(|w| w.focused))
                .collect();
            match focused.as_slice() {
                [single] => Some(*single),
                _ => None,
            }
        }
    }
}

fn find_target_outside_windows(
    tree: &DockTree,
    source: DragSource,
    screen: Vec2,
) -> Option<DropTarget> {
    tree.source_drop_kinds(source)
        .contains(DropTargetKinds::NEW_WINDOW)
        .then_some(DropTarget::NewWindow { position: screen })
}

fn find_target_in_window(
    tree: &DockTree,
    source: DragSource,
    window: WindowId,
    screen: Vec2,
) -> DropTarget {
    let Some(w) = tree.window(window) else {
        return DropTarget::None;
    };
    let local = w.to_local(screen);
    match group_at(tree, w.root, local) {
        Some(group) => find_group_drop_target(tree, group, source, local),
        None => DropTarget::None,
    }
}

/// Deepest group under `point` (window-local). Dividers and maximized
/// containers hide everything below them.
pub fn group_at(tree: &DockTree, node: NodeId, point: Vec2) -> Option<NodeId> {
    let layout = tree.layout(node)?;
    if !layout.bounds().contains(point) {
        return None;
    }
    match tree.node(node)? {
        DockNode::Group(_) => Some(node),
        DockNode::Container(container) => {
            if container.maximized_view().is_some() {
                return None;
            }
            if layout.divider().is_some_and(|d| d.contains(point)) {
                return None;
            }
            container
                .children()
                .find_map(|child| group_at(tree, child, point))
        }
    }
}

/// Drop target for `source` over `group` at window-local `point`.
pub fn find_group_drop_target(
    tree: &DockTree,
    group: NodeId,
    source: DragSource,
    point: Vec2,
) -> DropTarget {
    let (Some(g), Some(layout)) = (tree.group(group), tree.layout(group).and_then(|l| l.as_group()))
    else {
        return DropTarget::None;
    };
    if layout.header.contains(point) {
        tab_drop_target(tree, group, g, layout, source, point)
    } else {
        split_drop_target(tree, group, g, layout, source, point)
    }
}

fn tab_drop_target(
    tree: &DockTree,
    group: NodeId,
    g: &Group,
    layout: &GroupLayout,
    source: DragSource,
    point: Vec2,
) -> DropTarget {
    let kinds = tree.source_drop_kinds(source);
    let index = drop_index(layout, point);
    match source {
        DragSource::View(view) => {
            let same_group = tree.group_of(view) == Some(group);
            let required = if same_group {
                DropTargetKinds::REORDER
            } else {
                DropTargetKinds::CHANGE_GROUP
            };
            if !kinds.contains(required) {
                return DropTarget::None;
            }
            if same_group {
                if let Some(current) = g.index_of(view)
                    && (index == current || index == current + 1)
                {
                    return DropTarget::None;
                }
            } else if !source_tags_match(tree, source, g) {
                return DropTarget::None;
            }
            DropTarget::MoveToGroup { group, index }
        }
        DragSource::Group(source_group) => {
            if source_group == group
                || !kinds.contains(DropTargetKinds::CHANGE_GROUP)
                || !source_tags_match(tree, source, g)
            {
                return DropTarget::None;
            }
            DropTarget::MoveToGroup { group, index }
        }
    }
}

fn split_drop_target(
    tree: &DockTree,
    group: NodeId,
    g: &Group,
    layout: &GroupLayout,
    source: DragSource,
    point: Vec2,
) -> DropTarget {
    if tree.parent(group).is_none() {
        return DropTarget::None;
    }
    let side = split_side(layout.bounds.to_local(point), layout.bounds.size());
    if !g.drop_split_sides.contains_side(side) {
        return DropTarget::None;
    }
    match source {
        DragSource::View(view) if g.views() == [view] => return DropTarget::None,
        DragSource::Group(source_group) if source_group == group => return DropTarget::None,
        _ => {}
    }
    if !tree
        .source_drop_kinds(source)
        .contains(DropTargetKinds::CHANGE_GROUP)
        || !source_tags_match(tree, source, g)
    {
        return DropTarget::None;
    }
    DropTarget::SplitGroup { group, side }
}

fn source_tags_match(tree: &DockTree, source: DragSource, group: &Group) -> bool {
    tree.source_drag_tags(source)
        .is_some_and(|tags| tags_match(tags, &group.drop_tags))
}

/// Insertion index for a pointer over the header.
///
/// Tabs are compared by their midpoints along the header. A left-side
/// header is read bottom to top, so the comparison is reversed there.
pub fn drop_index(layout: &GroupLayout, point: Vec2) -> usize {
    let header = layout.header;
    let reverse = layout.side == Side::Left;
    let along = |p: Vec2| along_header(layout.side, header, p);
    let pointer = along(point);
    layout
        .tabs
        .iter()
        .position(|tab| {
            let middle = along(tab.center());
            (reverse && middle <= pointer) || (!reverse && middle > pointer)
        })
        .unwrap_or(layout.tabs.len())
}

fn along_header(side: Side, header: Rect, point: Vec2) -> f32 {
    match side {
        Side::Top | Side::Bottom => point.x - header.x,
        Side::Right => point.y - header.y,
        Side::Left => header.bottom() - point.y,
    }
}

/// Side of a `size` rectangle that `point` (local to it) is closest to,
/// splitting the rectangle along its diagonals.
///
/// Points exactly on a diagonal resolve towards top, then right.
pub fn split_side(point: Vec2, size: Size) -> Side {
    let (x, y) = (point.x, point.y);
    let (w, h) = (size.width, size.height);
    let top_or_right = y * w <= x * h;
    let bottom_or_right = (h - y) * w <= x * h;
    match (top_or_right, bottom_or_right) {
        (true, true) => Side::Right,
        (true, false) => Side::Top,
        (false, true) => Side::Bottom,
        (false, false) => Side::Left,
    }
}
