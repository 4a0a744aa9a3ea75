//! Boundary between the engine and the UI toolkit hosting it.

use berth_core::geometry::Rect;

use crate::style::DockStyle;
use crate::tree::{DockTree, NodeId, WindowId};
use crate::types::{Cursor, Orientation};
use crate::view::View;

/// Services the engine needs from the host toolkit.
///
/// The engine never draws anything. It asks the host for cursor changes,
/// relayouts and window lifecycle, and for the few measurements it cannot
/// make itself.
pub trait Host {
    /// Cursor currently shown, so a drag can restore it afterwards.
    fn cursor(&self) -> Cursor;

    fn set_cursor(&mut self, cursor: Cursor);

    /// The subtree under `node` changed and must be laid out again.
    fn request_layout(&mut self, _node: NodeId) {}

    fn show_window(&mut self, _window: WindowId, _bounds: Rect) {}

    fn close_window(&mut self, _window: WindowId) {}

    /// Give keyboard focus to the widget presenting `node`.
    fn focus(&mut self, _node: NodeId) {}

    /// Minimum extent of `node` along `orientation`'s axis.
    fn min_extent(&self, _tree: &DockTree, _node: NodeId, _orientation: Orientation) -> f32 {
        0.0
    }

    /// Length of a view's tab along the header.
    fn tab_length(&self, view: &View, style: &DockStyle) -> f32 {
        style.estimate_tab_width(view)
    }
}
