//! Arrangement pass: assigns window-local rectangles to every node.
//!
//! Containers receive their allocated size here, which is what drives the
//! divider controller on resize. The resulting [`NodeLayout`]s are cached
//! on the tree and read by hit-testing and drop-target resolution.

use berth_core::geometry::{Rect, ensure_between};
use berth_core::profiling::profile_function;

use crate::error::{DockError, DockResult};
use crate::host::Host;
use crate::tree::{DockNode, DockTree, NodeId, ViewId, WindowId};
use crate::types::{Orientation, Side};

/// Computed geometry of a container.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerLayout {
    pub bounds: Rect,
    /// Present only when both slots are filled.
    pub divider: Option<Rect>,
    /// View filling the whole container instead of the children.
    pub maximized: Option<ViewId>,
}

/// Computed geometry of a group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupLayout {
    pub bounds: Rect,
    pub side: Side,
    /// Header strip holding the tabs.
    pub header: Rect,
    /// One rectangle per view, in view order.
    pub tabs: Vec<Rect>,
    /// Area showing the selected view's content.
    pub content: Rect,
}

impl GroupLayout {
    /// Whether tabs run top to bottom (header on the left or right).
    pub fn is_vertical(&self) -> bool {
        self.side.is_vertical()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeLayout {
    Container(ContainerLayout),
    Group(GroupLayout),
}

impl NodeLayout {
    pub fn bounds(&self) -> Rect {
        match self {
            NodeLayout::Container(layout) => layout.bounds,
            NodeLayout::Group(layout) => layout.bounds,
        }
    }

    pub fn divider(&self) -> Option<Rect> {
        match self {
            NodeLayout::Container(layout) => layout.divider,
            NodeLayout::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&GroupLayout> {
        match self {
            NodeLayout::Group(layout) => Some(layout),
            NodeLayout::Container(_) => None,
        }
    }

    pub fn as_container(&self) -> Option<&ContainerLayout> {
        match self {
            NodeLayout::Container(layout) => Some(layout),
            NodeLayout::Group(_) => None,
        }
    }
}

impl DockTree {
    /// Cached layout of `node` from the last arrangement pass.
    pub fn layout(&self, node: NodeId) -> Option<&NodeLayout> {
        self.layouts.get(&node)
    }

    /// Arrange every window.
    pub fn layout_all(&mut self, host: &dyn Host) -> DockResult<()> {
        let windows: Vec<WindowId> = self.windows().map(|(id, _)| id).collect();
        for window in windows {
            self.layout_window(window, host)?;
        }
        Ok(())
    }

    /// Arrange one window's tree into its content bounds.
    pub fn layout_window(&mut self, window: WindowId, host: &dyn Host) -> DockResult<()> {
        profile_function!();
        let w = self.window(window).ok_or(DockError::WindowNotFound(window))?;
        let root = w.root;
        let bounds = Rect::from_size(w.bounds.size());
        self.clear_layouts(root);
        self.arrange_node(root, bounds, host);
        Ok(())
    }

    fn clear_layouts(&mut self, node: NodeId) {
        self.layouts.remove(&node);
        let children: Vec<NodeId> = self
            .container(node)
            .map(|c| c.children().collect())
            .unwrap_or_default();
        for child in children {
            self.clear_layouts(child);
        }
    }

    fn arrange_node(&mut self, node: NodeId, bounds: Rect, host: &dyn Host) {
        match self.node(node) {
            Some(DockNode::Container(_)) => self.arrange_container(node, bounds, host),
            Some(DockNode::Group(_)) => {
                if let Some(layout) = self.arrange_group(node, bounds, host) {
                    self.layouts.insert(node, NodeLayout::Group(layout));
                }
            }
            None => {}
        }
    }

    fn arrange_container(&mut self, node: NodeId, bounds: Rect, host: &dyn Host) {
        let Some(c) = self.container_mut(node) else {
            return;
        };
        c.set_size(bounds.size());

        let inner = bounds.inset(c.insets());
        let maximized = c.maximized_view();
        let children = (c.left_top(), c.right_bottom());
        let orientation = c.orientation();
        let divider_size = c.divider_size();
        let offset = c.absolute_position();

        let mut layout = ContainerLayout {
            bounds,
            divider: None,
            maximized,
        };
        if maximized.is_some() {
            self.layouts.insert(node, NodeLayout::Container(layout));
            return;
        }

        match children {
            (Some(left_top), Some(right_bottom)) => {
                let (first, divider, second) =
                    split_rects(bounds, inner, orientation, offset, divider_size);
                layout.divider = Some(divider);
                self.layouts.insert(node, NodeLayout::Container(layout));
                self.arrange_node(left_top, first, host);
                self.arrange_node(right_bottom, second, host);
            }
            (Some(single), None) | (None, Some(single)) => {
                self.layouts.insert(node, NodeLayout::Container(layout));
                self.arrange_node(single, inner, host);
            }
            (None, None) => {
                self.layouts.insert(node, NodeLayout::Container(layout));
            }
        }
    }

    fn arrange_group(&self, node: NodeId, bounds: Rect, host: &dyn Host) -> Option<GroupLayout> {
        let group = self.group(node)?;
        let style = self.style();
        let side = group.side;
        let cross = if side.is_vertical() {
            bounds.width
        } else {
            bounds.height
        };
        let thickness = style.tab_bar_height.min(cross).max(0.0);

        let (header, content) = match side {
            Side::Top => (
                Rect::new(bounds.x, bounds.y, bounds.width, thickness),
                Rect::new(bounds.x, bounds.y + thickness, bounds.width, bounds.height - thickness),
            ),
            Side::Bottom => (
                Rect::new(bounds.x, bounds.bottom() - thickness, bounds.width, thickness),
                Rect::new(bounds.x, bounds.y, bounds.width, bounds.height - thickness),
            ),
            Side::Left => (
                Rect::new(bounds.x, bounds.y, thickness, bounds.height),
                Rect::new(bounds.x + thickness, bounds.y, bounds.width - thickness, bounds.height),
            ),
            Side::Right => (
                Rect::new(bounds.right() - thickness, bounds.y, thickness, bounds.height),
                Rect::new(bounds.x, bounds.y, bounds.width - thickness, bounds.height),
            ),
        };

        let min = group.tab_min_width.unwrap_or(-1.0);
        let max = group.tab_max_width.unwrap_or(-1.0);
        let mut offset = 0.0;
        let tabs = group
            .views()
            .iter()
            .map(|&view| {
                let length = self
                    .view(view)
                    .map_or(0.0, |v| ensure_between(host.tab_length(v, style), min, max));
                let tab = if side.is_vertical() {
                    Rect::new(header.x, header.y + offset, header.width, length)
                } else {
                    Rect::new(header.x + offset, header.y, length, header.height)
                };
                offset += length;
                tab
            })
            .collect();

        Some(GroupLayout {
            bounds,
            side,
            header,
            tabs,
            content,
        })
    }
}

/// Rectangles of the leading child, the divider and the trailing child.
///
/// `offset` is the divider's absolute position relative to `bounds`.
fn split_rects(
    bounds: Rect,
    inner: Rect,
    orientation: Orientation,
    offset: f32,
    divider_size: f32,
) -> (Rect, Rect, Rect) {
    match orientation {
        Orientation::Vertical => {
            let divider_y = bounds.y + offset;
            let second_y = divider_y + divider_size;
            (
                Rect::new(inner.x, inner.y, inner.width, (divider_y - inner.y).max(0.0)),
                Rect::new(inner.x, divider_y, inner.width, divider_size),
                Rect::new(inner.x, second_y, inner.width, (inner.bottom() - second_y).max(0.0)),
            )
        }
        Orientation::Horizontal => {
            let divider_x = bounds.x + offset;
            let second_x = divider_x + divider_size;
            (
                Rect::new(inner.x, inner.y, (divider_x - inner.x).max(0.0), inner.height),
                Rect::new(divider_x, inner.y, divider_size, inner.height),
                Rect::new(second_x, inner.y, (inner.right() - second_x).max(0.0), inner.height),
            )
        }
    }
}
