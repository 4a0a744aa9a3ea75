//! Divider/resize controller.
//!
//! A container's divider is described twice: a relative `position` in
//! `[0, 1]` and an absolute pixel offset inside the container's
//! *position span*. Every trigger (resize, divider size, insets,
//! orientation, explicit sets) recomputes exactly one representation from
//! the other. The `updating_position` flag stops the recomputation from
//! triggering itself.
//!
//! Absolute offsets are in container-local coordinates along the
//! orientation axis (y for vertical containers, x for horizontal ones).

use berth_core::geometry::{Insets, Range, Size, ensure_between};
use berth_core::math::Vec2;

use crate::container::Container;
use crate::error::{DockError, DockResult};
use crate::host::Host;
use crate::tree::{DockTree, NodeId};
use crate::types::{Cursor, DividerDragMode, Orientation, ResizePolicy};

impl Container {
    /// Interval the divider's leading edge may occupy.
    pub fn position_span(&self) -> Range {
        self.span_with(self.insets, self.axis_length(), self.divider_size)
    }

    fn span_with(&self, insets: Insets, length: f32, divider_size: f32) -> Range {
        let (leading, trailing) = match self.orientation {
            Orientation::Vertical => (insets.top, insets.bottom),
            Orientation::Horizontal => (insets.left, insets.right),
        };
        Range::new(leading, length - trailing - divider_size)
    }

    fn axis_length(&self) -> f32 {
        axis_extent(self.orientation, self.size)
    }

    fn is_sized(&self) -> bool {
        self.axis_length() > 0.0
    }

    /// Relative position for an absolute offset.
    pub fn compute_position(&self, absolute: f32) -> f32 {
        let span = self.position_span();
        (absolute - span.lower).max(0.0) / span.size().max(1.0)
    }

    /// Absolute offset for a relative position, clamped into `[0, 1]` first.
    pub fn compute_absolute_position(&self, position: f32) -> f32 {
        let span = self.position_span();
        (span.lower + span.size().max(0.0) * ensure_between(position, 0.0, 1.0)).max(0.0)
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    /// Absolute divider offset, computed from `position` while unset.
    pub fn absolute_position(&self) -> f32 {
        self.absolute_position
            .unwrap_or_else(|| self.compute_absolute_position(self.position))
    }

    pub fn is_absolute_position_set(&self) -> bool {
        self.absolute_position.is_some()
    }

    pub fn set_position(&mut self, position: f32) {
        self.position = position;
        if self.updating_position {
            return;
        }
        self.absolute_pending = false;
        self.guarded(|c| {
            c.absolute_position = if c.is_sized() {
                Some(c.compute_absolute_position(position))
            } else {
                None
            };
        });
    }

    pub fn set_absolute_position(&mut self, absolute: f32) {
        self.absolute_position = Some(absolute);
        if self.updating_position {
            return;
        }
        self.guarded(|c| {
            if c.is_sized() {
                c.position = c.compute_position(absolute);
            } else {
                c.absolute_pending = true;
            }
        });
    }

    /// Forget the absolute offset; it is recomputed from `position`.
    pub fn reset_absolute_position(&mut self) {
        self.absolute_position = None;
        self.absolute_pending = false;
    }

    /// Apply a new allocated size. Only the extent along the orientation
    /// axis affects the divider.
    pub fn set_size(&mut self, size: Size) {
        let old_length = self.axis_length();
        self.size = size;
        if self.axis_length() == old_length {
            return;
        }
        let old = self.span_with(self.insets, old_length, self.divider_size);
        self.guarded(|c| c.update_divider_position(old, old_length));
    }

    pub fn set_divider_size(&mut self, divider_size: f32) {
        let old_size = self.divider_size;
        self.divider_size = divider_size;
        if old_size == divider_size {
            return;
        }
        let length = self.axis_length();
        let old = self.span_with(self.insets, length, old_size);
        self.guarded(|c| c.update_divider_position(old, length));
    }

    pub fn set_insets(&mut self, insets: Insets) {
        if self.insets == insets {
            return;
        }
        self.insets = insets;
        self.guarded(Container::sync_absolute_from_position);
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation == orientation {
            return;
        }
        self.orientation = orientation;
        self.guarded(Container::sync_absolute_from_position);
    }

    fn guarded(&mut self, f: impl FnOnce(&mut Self)) {
        self.updating_position = true;
        f(self);
        self.updating_position = false;
    }

    fn sync_absolute_from_position(&mut self) {
        if self.absolute_position.is_some() && self.is_sized() {
            let absolute = self.compute_absolute_position(self.position);
            self.set_absolute_position(absolute);
        }
    }

    /// Re-derive the divider after the span changed from `old`.
    fn update_divider_position(&mut self, old: Range, old_length: f32) {
        if !self.is_sized() {
            return;
        }
        let Some(absolute) = self.absolute_position else {
            let absolute = self.compute_absolute_position(self.position);
            self.set_absolute_position(absolute);
            return;
        };
        if old_length <= 0.0 {
            // An offset set while unsized wins; otherwise `position` was
            // kept across the collapse.
            if std::mem::take(&mut self.absolute_pending) {
                self.position = self.compute_position(absolute);
            } else {
                let absolute = self.compute_absolute_position(self.position);
                self.set_absolute_position(absolute);
            }
            return;
        }

        let span = self.position_span();
        let length = span.size().max(1.0);
        let ratio = match self.resize_policy {
            ResizePolicy::KeepLeftTopSize => {
                let leading = absolute - old.lower;
                ensure_between(leading / length, 0.0, 1.0)
            }
            ResizePolicy::KeepRightBottomSize => {
                let trailing = old.upper - absolute;
                let target = span.upper - trailing;
                ensure_between((target - span.lower) / length, 0.0, 1.0)
            }
            ResizePolicy::KeepRatio => ensure_between(self.position, 0.0, 1.0),
        };
        if self.resize_policy != ResizePolicy::KeepRatio {
            self.set_position(ratio);
        }
        let absolute = self.compute_absolute_position(ratio);
        self.set_absolute_position(absolute);
    }

    /// Range the divider may be dragged within, or `None` when fixed.
    ///
    /// `min_extents` are the minimum sizes of the leading and trailing
    /// children along the axis; only [`DividerDragMode::RespectMinSize`]
    /// uses them.
    pub fn drag_range(&self, min_extents: (f32, f32)) -> Option<Range> {
        let span = self.position_span();
        match self.divider_drag_mode {
            DividerDragMode::Fixed => None,
            DividerDragMode::Free => Some(span),
            DividerDragMode::RespectMinSize => Some(Range::new(
                span.lower + min_extents.0,
                span.upper - min_extents.1,
            )),
        }
    }

    /// Cursor shown over the divider.
    pub fn divider_cursor(&self, min_extents: (f32, f32)) -> Cursor {
        if self.drag_range(min_extents).is_none() {
            return Cursor::Default;
        }
        match self.orientation {
            Orientation::Vertical => Cursor::VResize,
            Orientation::Horizontal => Cursor::HResize,
        }
    }

    /// Start a divider drag at axis coordinate `pointer`.
    pub fn begin_divider_drag(&mut self, pointer: f32, min_extents: (f32, f32)) -> bool {
        if self.drag_range(min_extents).is_none() {
            return false;
        }
        self.drag_offset = Some(pointer - self.absolute_position());
        true
    }

    /// Move the divider so the grab point follows `pointer`.
    ///
    /// Returns whether the divider moved. In min-size mode a pointer that
    /// would leave the allowed range is ignored rather than clamped.
    pub fn drag_divider(&mut self, pointer: f32, min_extents: (f32, f32)) -> bool {
        let Some(offset) = self.drag_offset else {
            return false;
        };
        let Some(range) = self.drag_range(min_extents) else {
            return false;
        };
        if range.is_empty() {
            return false;
        }
        let target = pointer - offset;
        if self.divider_drag_mode == DividerDragMode::RespectMinSize && !range.contains(target) {
            return false;
        }
        self.set_absolute_position(ensure_between(target, range.lower, range.upper));
        true
    }

    pub fn end_divider_drag(&mut self) {
        self.drag_offset = None;
    }

    pub fn is_divider_dragging(&self) -> bool {
        self.drag_offset.is_some()
    }
}

fn axis_extent(orientation: Orientation, size: Size) -> f32 {
    match orientation {
        Orientation::Vertical => size.height,
        Orientation::Horizontal => size.width,
    }
}

fn axis_coordinate(orientation: Orientation, point: Vec2) -> f32 {
    match orientation {
        Orientation::Vertical => point.y,
        Orientation::Horizontal => point.x,
    }
}

/// Pointer interaction with dividers, in window-local coordinates.
impl DockTree {
    /// Container whose divider lies under `point`, searching from `root`.
    pub fn divider_at(&self, root: NodeId, point: Vec2) -> Option<NodeId> {
        let container = self.container(root)?;
        if container.maximized_view.is_some() {
            return None;
        }
        if let Some(divider) = self.layout(root).and_then(|l| l.divider())
            && divider.contains(point)
        {
            return Some(root);
        }
        container
            .children()
            .find_map(|child| self.divider_at(child, point))
    }

    fn child_min_extents(&self, container: NodeId, host: &dyn Host) -> DockResult<(f32, f32)> {
        let c = self.container(container).ok_or(DockError::NotAContainer(container))?;
        let extent = |child: Option<NodeId>| {
            child.map_or(0.0, |child| host.min_extent(self, child, c.orientation))
        };
        Ok((extent(c.left_top), extent(c.right_bottom)))
    }

    fn local_axis_pointer(&self, container: NodeId, point: Vec2) -> DockResult<f32> {
        let c = self.container(container).ok_or(DockError::NotAContainer(container))?;
        let bounds = self
            .layout(container)
            .map(|l| l.bounds())
            .ok_or(DockError::InvalidArgument("container has not been laid out"))?;
        Ok(axis_coordinate(c.orientation, bounds.to_local(point)))
    }

    /// Update the cursor for a pointer hovering `container`'s divider.
    pub fn hover_divider(&self, container: NodeId, host: &mut dyn Host) -> DockResult<()> {
        let min_extents = self.child_min_extents(container, host)?;
        let cursor = self
            .container(container)
            .ok_or(DockError::NotAContainer(container))?
            .divider_cursor(min_extents);
        host.set_cursor(cursor);
        Ok(())
    }

    /// Begin dragging `container`'s divider. Returns false when the divider
    /// is fixed.
    pub fn press_divider(
        &mut self,
        container: NodeId,
        point: Vec2,
        host: &mut dyn Host,
    ) -> DockResult<bool> {
        let min_extents = self.child_min_extents(container, host)?;
        let pointer = self.local_axis_pointer(container, point)?;
        let c = self
            .container_mut(container)
            .ok_or(DockError::NotAContainer(container))?;
        let started = c.begin_divider_drag(pointer, min_extents);
        host.set_cursor(c.divider_cursor(min_extents));
        Ok(started)
    }

    /// Follow the pointer during a divider drag.
    pub fn drag_divider(
        &mut self,
        container: NodeId,
        point: Vec2,
        host: &mut dyn Host,
    ) -> DockResult<bool> {
        let min_extents = self.child_min_extents(container, host)?;
        let pointer = self.local_axis_pointer(container, point)?;
        let moved = self
            .container_mut(container)
            .ok_or(DockError::NotAContainer(container))?
            .drag_divider(pointer, min_extents);
        if moved {
            host.request_layout(container);
        }
        Ok(moved)
    }

    /// Finish a divider drag. The cursor stays a resize cursor while the
    /// pointer is still over the divider.
    pub fn release_divider(
        &mut self,
        container: NodeId,
        point: Vec2,
        host: &mut dyn Host,
    ) -> DockResult<()> {
        let min_extents = self.child_min_extents(container, host)?;
        let over_divider = self
            .layout(container)
            .and_then(|l| l.divider())
            .is_some_and(|divider| divider.contains(point));
        let c = self
            .container_mut(container)
            .ok_or(DockError::NotAContainer(container))?;
        c.end_divider_drag();
        let cursor = if over_divider {
            c.divider_cursor(min_extents)
        } else {
            Cursor::Default
        };
        host.set_cursor(cursor);
        Ok(())
    }
}
