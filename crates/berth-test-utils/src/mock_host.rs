//! Mock implementation of [`Host`] for testing.

use berth_core::alloc::HashMap;
use berth_core::geometry::Rect;
use berth_dock::{Cursor, DockStyle, DockTree, Host, NodeId, Orientation, View, WindowId};

/// Records a host call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    SetCursor(Cursor),
    RequestLayout(NodeId),
    ShowWindow { window: WindowId, bounds: Rect },
    CloseWindow(WindowId),
    Focus(NodeId),
}

/// Host that draws nothing and remembers what it was asked to do.
///
/// Tab lengths default to the engine's estimate; a fixed length makes tab
/// rectangles easy to predict. Minimum extents are configured per node.
#[derive(Debug, Default)]
pub struct MockHost {
    calls: Vec<HostCall>,
    cursor: Cursor,
    tab_length: Option<f32>,
    min_extents: HashMap<NodeId, f32>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every tab is exactly `length` long.
    pub fn with_tab_length(mut self, length: f32) -> Self {
        self.tab_length = Some(length);
        self
    }

    pub fn set_min_extent(&mut self, node: NodeId, extent: f32) {
        self.min_extents.insert(node, extent);
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn cursor_changes(&self) -> Vec<Cursor> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::SetCursor(cursor) => Some(*cursor),
                _ => None,
            })
            .collect()
    }

    pub fn shown_windows(&self) -> Vec<(WindowId, Rect)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::ShowWindow { window, bounds } => Some((*window, *bounds)),
                _ => None,
            })
            .collect()
    }

    pub fn closed_windows(&self) -> Vec<WindowId> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::CloseWindow(window) => Some(*window),
                _ => None,
            })
            .collect()
    }

    pub fn count_layout_requests(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, HostCall::RequestLayout(_)))
            .count()
    }
}

impl Host for MockHost {
    fn cursor(&self) -> Cursor {
        self.cursor
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
        self.calls.push(HostCall::SetCursor(cursor));
    }

    fn request_layout(&mut self, node: NodeId) {
        self.calls.push(HostCall::RequestLayout(node));
    }

    fn show_window(&mut self, window: WindowId, bounds: Rect) {
        self.calls.push(HostCall::ShowWindow { window, bounds });
    }

    fn close_window(&mut self, window: WindowId) {
        self.calls.push(HostCall::CloseWindow(window));
    }

    fn focus(&mut self, node: NodeId) {
        self.calls.push(HostCall::Focus(node));
    }

    fn min_extent(&self, _tree: &DockTree, node: NodeId, _orientation: Orientation) -> f32 {
        self.min_extents.get(&node).copied().unwrap_or(0.0)
    }

    fn tab_length(&self, view: &View, style: &DockStyle) -> f32 {
        self.tab_length
            .unwrap_or_else(|| style.estimate_tab_width(view))
    }
}
