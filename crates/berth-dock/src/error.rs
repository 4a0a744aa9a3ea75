//! Error types for structural dock operations.

use crate::tree::{NodeId, ViewId, WindowId};

/// Error types for dock operations.
///
/// Drag-and-drop policy rejections never surface here; they resolve to
/// [`DropTarget::None`](crate::DropTarget::None) instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockError {
    /// Node not found in tree.
    NodeNotFound(NodeId),
    /// View not registered in tree.
    ViewNotFound(ViewId),
    /// Window not registered in tree.
    WindowNotFound(WindowId),
    /// Node exists but is not a group.
    NotAGroup(NodeId),
    /// Node exists but is not a container.
    NotAContainer(NodeId),
    /// Index outside the group's view sequence.
    IndexOutOfBounds { index: usize, len: usize },
    /// Contract violation by the caller.
    InvalidArgument(&'static str),
}

impl std::fmt::Display for DockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DockError::NodeNotFound(id) => write!(f, "Node {:?} not found", id),
            DockError::ViewNotFound(id) => write!(f, "View {:?} not found", id),
            DockError::WindowNotFound(id) => write!(f, "Window {:?} not found", id),
            DockError::NotAGroup(id) => write!(f, "Node {:?} is not a group", id),
            DockError::NotAContainer(id) => write!(f, "Node {:?} is not a container", id),
            DockError::IndexOutOfBounds { index, len } => {
                write!(f, "Index {} out of bounds for {} views", index, len)
            }
            DockError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for DockError {}

/// Result type for dock operations.
pub type DockResult<T> = Result<T, DockError>;
