//! Top-level windows hosting a root container.

use berth_core::geometry::Rect;
use berth_core::math::Vec2;

use crate::error::{DockError, DockResult};
use crate::host::Host;
use crate::tree::{DockTree, NodeId, WindowId};

/// A window whose content is one root container.
///
/// The host owns the real window; it reports bounds, visibility and focus
/// changes back through the setters on [`DockTree`].
#[derive(Debug, Clone, PartialEq)]
pub struct DockWindow {
    pub root: NodeId,
    /// Content bounds in screen coordinates.
    pub bounds: Rect,
    pub showing: bool,
    pub focused: bool,
    /// Close automatically once the root container is empty.
    pub auto_close: bool,
    pub title: Option<String>,
}

impl DockWindow {
    pub fn new(root: NodeId, bounds: Rect) -> Self {
        Self {
            root,
            bounds,
            showing: true,
            focused: false,
            auto_close: true,
            title: None,
        }
    }

    pub fn auto_close(mut self, auto_close: bool) -> Self {
        self.auto_close = auto_close;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Translate a screen position into window-local coordinates.
    pub fn to_local(&self, screen: Vec2) -> Vec2 {
        self.bounds.to_local(screen)
    }
}

impl DockTree {
    /// Register a window for an existing root container.
    pub fn add_window(&mut self, window: DockWindow) -> DockResult<WindowId> {
        self.checked_container(window.root)?;
        if self.parent(window.root).is_some() {
            return Err(DockError::InvalidArgument("window root must not have a parent"));
        }
        if self.window_of_root(window.root).is_some() {
            return Err(DockError::InvalidArgument("container already roots a window"));
        }
        let id = self.allocate_window_id();
        self.windows.insert(id, window);
        Ok(id)
    }

    /// Register a window and ask the host to show it.
    pub fn open_window(
        &mut self,
        window: DockWindow,
        host: &mut dyn Host,
    ) -> DockResult<WindowId> {
        let bounds = window.bounds;
        let id = self.add_window(window)?;
        tracing::debug!("Opening window {:?} at {:?}", id, bounds);
        host.show_window(id, bounds);
        Ok(id)
    }

    pub fn window(&self, id: WindowId) -> Option<&DockWindow> {
        self.windows.get(&id)
    }

    pub fn window_mut(&mut self, id: WindowId) -> Option<&mut DockWindow> {
        self.windows.get_mut(&id)
    }

    pub fn windows(&self) -> impl Iterator<Item = (WindowId, &DockWindow)> {
        self.windows.iter().map(|(&id, window)| (id, window))
    }

    /// Window whose root is `root`.
    pub fn window_of_root(&self, root: NodeId) -> Option<WindowId> {
        self.windows
            .iter()
            .find(|(_, window)| window.root == root)
            .map(|(&id, _)| id)
    }

    /// Window displaying `node`.
    pub fn window_of_node(&self, node: NodeId) -> Option<WindowId> {
        self.root_container(node)
            .and_then(|root| self.window_of_root(root))
    }

    pub fn set_window_bounds(&mut self, id: WindowId, bounds: Rect) -> DockResult<()> {
        self.windows
            .get_mut(&id)
            .ok_or(DockError::WindowNotFound(id))?
            .bounds = bounds;
        Ok(())
    }

    pub fn set_window_showing(&mut self, id: WindowId, showing: bool) -> DockResult<()> {
        self.windows
            .get_mut(&id)
            .ok_or(DockError::WindowNotFound(id))?
            .showing = showing;
        Ok(())
    }

    /// Mark `id` as the focused window; every other window loses focus.
    pub fn focus_window(&mut self, id: WindowId) -> DockResult<()> {
        if !self.windows.contains_key(&id) {
            return Err(DockError::WindowNotFound(id));
        }
        for (&other, window) in self.windows.iter_mut() {
            window.focused = other == id;
        }
        Ok(())
    }

    /// Close a window unconditionally. Its nodes are discarded; views still
    /// inside it are left without a group.
    pub fn close_window(&mut self, id: WindowId, host: &mut dyn Host) -> DockResult<()> {
        let window = self
            .windows
            .shift_remove(&id)
            .ok_or(DockError::WindowNotFound(id))?;
        self.discard_subtree(window.root);
        host.close_window(id);
        tracing::debug!("Closed window {:?}", id);
        Ok(())
    }

    /// Handle a user request to close a window.
    ///
    /// If any view inside refuses to close, nothing happens and false is
    /// returned. Otherwise every view is closed and the window goes away.
    pub fn request_close_window(&mut self, id: WindowId, host: &mut dyn Host) -> DockResult<bool> {
        let root = self.window(id).ok_or(DockError::WindowNotFound(id))?.root;
        let views = self.views_under(root);
        if views
            .iter()
            .any(|&view| self.view(view).is_some_and(|v| !v.can_close))
        {
            tracing::debug!("Window {:?} close vetoed by a view", id);
            return Ok(false);
        }
        for view in views {
            self.close_view(view, host);
        }
        if self.windows.contains_key(&id) {
            self.close_window(id, host)?;
        }
        Ok(true)
    }
}
