//! Containers: binary split nodes holding up to two children.

use berth_core::geometry::{Insets, Size};

use crate::style::DEFAULT_DIVIDER_SIZE;
use crate::tree::{NodeId, ViewId};
use crate::types::{DividerDragMode, Orientation, ResizePolicy};

/// Which of a container's two child slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    LeftTop,
    RightBottom,
}

/// A split with a leading (`left_top`) and trailing (`right_bottom`) slot
/// separated by a divider.
///
/// Divider state (relative and absolute position) is kept consistent by the
/// controller methods in [`divider`](crate::divider).
#[derive(Debug, Clone)]
pub struct Container {
    pub(crate) left_top: Option<NodeId>,
    pub(crate) right_bottom: Option<NodeId>,
    pub(crate) maximized_view: Option<ViewId>,
    pub(crate) orientation: Orientation,
    pub(crate) divider_drag_mode: DividerDragMode,
    pub(crate) divider_size: f32,
    pub(crate) resize_policy: ResizePolicy,
    pub(crate) position: f32,
    /// `None` until computed from `position`.
    pub(crate) absolute_position: Option<f32>,
    /// Set when `absolute_position` was assigned while unsized.
    pub(crate) absolute_pending: bool,
    pub(crate) size: Size,
    pub(crate) insets: Insets,
    pub(crate) updating_position: bool,
    pub(crate) drag_offset: Option<f32>,
}

impl Default for Container {
    fn default() -> Self {
        Self {
            left_top: None,
            right_bottom: None,
            maximized_view: None,
            orientation: Orientation::Horizontal,
            divider_drag_mode: DividerDragMode::Free,
            divider_size: DEFAULT_DIVIDER_SIZE,
            resize_policy: ResizePolicy::KeepRatio,
            position: 0.5,
            absolute_position: None,
            absolute_pending: false,
            size: Size::default(),
            insets: Insets::ZERO,
            updating_position: false,
            drag_offset: None,
        }
    }
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty container sharing `template`'s orientation, divider size and
    /// resize policy.
    pub fn from_template(template: &Container) -> Self {
        Self {
            orientation: template.orientation,
            divider_size: template.divider_size,
            resize_policy: template.resize_policy,
            ..Default::default()
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_divider_size(mut self, size: f32) -> Self {
        self.divider_size = size;
        self
    }

    pub fn with_divider_drag_mode(mut self, mode: DividerDragMode) -> Self {
        self.divider_drag_mode = mode;
        self
    }

    pub fn with_resize_policy(mut self, policy: ResizePolicy) -> Self {
        self.resize_policy = policy;
        self
    }

    pub fn with_position(mut self, position: f32) -> Self {
        self.position = position;
        self
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    pub fn left_top(&self) -> Option<NodeId> {
        self.left_top
    }

    pub fn right_bottom(&self) -> Option<NodeId> {
        self.right_bottom
    }

    pub fn child(&self, slot: Slot) -> Option<NodeId> {
        match slot {
            Slot::LeftTop => self.left_top,
            Slot::RightBottom => self.right_bottom,
        }
    }

    pub(crate) fn child_mut(&mut self, slot: Slot) -> &mut Option<NodeId> {
        match slot {
            Slot::LeftTop => &mut self.left_top,
            Slot::RightBottom => &mut self.right_bottom,
        }
    }

    /// Slot holding `child`, if it is a direct child.
    pub fn slot_of(&self, child: NodeId) -> Option<Slot> {
        if self.left_top == Some(child) {
            Some(Slot::LeftTop)
        } else if self.right_bottom == Some(child) {
            Some(Slot::RightBottom)
        } else {
            None
        }
    }

    /// Children in slot order, skipping empty slots.
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.left_top.into_iter().chain(self.right_bottom)
    }

    pub fn child_count(&self) -> usize {
        self.children().count()
    }

    pub fn has_both_children(&self) -> bool {
        self.left_top.is_some() && self.right_bottom.is_some()
    }

    pub fn maximized_view(&self) -> Option<ViewId> {
        self.maximized_view
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn divider_size(&self) -> f32 {
        self.divider_size
    }

    pub fn divider_drag_mode(&self) -> DividerDragMode {
        self.divider_drag_mode
    }

    pub fn resize_policy(&self) -> ResizePolicy {
        self.resize_policy
    }

    pub fn insets(&self) -> Insets {
        self.insets
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_divider_drag_mode(&mut self, mode: DividerDragMode) {
        self.divider_drag_mode = mode;
    }

    pub fn set_resize_policy(&mut self, policy: ResizePolicy) {
        self.resize_policy = policy;
    }
}
