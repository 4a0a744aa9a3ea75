//! Drag-and-drop coordinator.
//!
//! Owns the state of one drag gesture: the source, the currently resolved
//! target and the cursor to restore afterwards. The host feeds it pointer
//! and key events; on confirm it applies the target and normalizes the
//! tree the source came from.

use std::fmt;

use berth_core::config::Config;
use berth_core::geometry::Rect;
use berth_core::math::Vec2;

use crate::container::Container;
use crate::drop_target::{DragSource, DropTarget};
use crate::error::DockResult;
use crate::group::Group;
use crate::host::Host;
use crate::resolver;
use crate::tree::{DockTree, NodeId, WindowId};
use crate::types::{Cursor, Key};
use crate::window::DockWindow;

/// Customization points for drag-and-drop.
///
/// Every method has a default; applications override the ones they need
/// and install the hooks with [`DragContext::with_hooks`].
pub trait DockHooks {
    /// Open a window holding `root`.
    fn new_window(
        &mut self,
        tree: &mut DockTree,
        root: NodeId,
        bounds: Rect,
        host: &mut dyn Host,
    ) -> DockResult<WindowId> {
        tree.open_window(DockWindow::new(root, bounds), host)
    }

    /// Create a container for a drop. `template` is the container whose
    /// orientation, divider size and resize policy should carry over.
    fn new_container(
        &mut self,
        tree: &mut DockTree,
        _source_parent: Option<NodeId>,
        template: Option<NodeId>,
    ) -> NodeId {
        let container = match template.and_then(|t| tree.container(t)) {
            Some(template) => Container::from_template(template),
            None => Container::new().with_divider_size(tree.style().divider_size),
        };
        tree.add_container(container)
    }

    /// Create a group for a dropped view, configured like `template`.
    fn new_group(&mut self, tree: &mut DockTree, template: Option<NodeId>) -> NodeId {
        let group = match template.and_then(|t| tree.group(t)) {
            Some(template) => Group::from_template(template),
            None => Group::new(),
        };
        tree.add_group(group)
    }

    /// Last word on a resolved target; may veto or replace it.
    fn filter_drop_target(
        &self,
        _tree: &DockTree,
        _source: DragSource,
        target: Option<DropTarget>,
    ) -> Option<DropTarget> {
        target
    }
}

/// Hooks with every default in place.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultHooks;

impl DockHooks for DefaultHooks {}

/// State of the current drag gesture.
pub struct DragContext {
    hooks: Box<dyn DockHooks>,
    source: Option<DragSource>,
    target: Option<DropTarget>,
    previous_cursor: Cursor,
    trace_drop_targets: bool,
}

impl fmt::Debug for DragContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragContext")
            .field("source", &self.source)
            .field("target", &self.target)
            .field("previous_cursor", &self.previous_cursor)
            .finish_non_exhaustive()
    }
}

impl Default for DragContext {
    fn default() -> Self {
        Self::new()
    }
}

impl DragContext {
    pub fn new() -> Self {
        Self::with_hooks(DefaultHooks)
    }

    pub fn with_hooks(hooks: impl DockHooks + 'static) -> Self {
        Self {
            hooks: Box::new(hooks),
            source: None,
            target: None,
            previous_cursor: Cursor::Default,
            trace_drop_targets: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut context = Self::new();
        context.trace_drop_targets = config.trace_drop_targets;
        context
    }

    /// Replace the hooks. Takes effect for the next resolution.
    pub fn set_hooks(&mut self, hooks: impl DockHooks + 'static) {
        self.hooks = Box::new(hooks);
    }

    pub fn is_dragging(&self) -> bool {
        self.source.is_some()
    }

    pub fn drag_source(&self) -> Option<DragSource> {
        self.source
    }

    pub fn drop_target(&self) -> Option<DropTarget> {
        self.target
    }

    /// Begin dragging `source`. Ignored while another drag is running or if
    /// the source is not docked anywhere.
    pub fn start(
        &mut self,
        tree: &mut DockTree,
        host: &mut dyn Host,
        source: DragSource,
        screen: Vec2,
    ) -> bool {
        if self.is_dragging() {
            return false;
        }
        let Some(parent) = tree.source_parent(source) else {
            tracing::warn!("Ignoring drag of undocked {:?}", source);
            return false;
        };
        tracing::debug!("Drag started: {:?}", source);
        self.previous_cursor = host.cursor();
        self.source = Some(source);
        tree.set_source_dragging(source, true);
        let focus = match source {
            DragSource::View(_) => parent,
            DragSource::Group(group) => group,
        };
        host.focus(focus);
        self.update(tree, host, screen);
        true
    }

    /// Re-resolve the target for a pointer move.
    pub fn update(&mut self, tree: &mut DockTree, host: &mut dyn Host, screen: Vec2) {
        let Some(source) = self.source else {
            return;
        };
        let target = resolver::find_drop_target(tree, source, screen);
        let target = self.hooks.filter_drop_target(tree, source, target);
        if self.trace_drop_targets {
            tracing::trace!("Drop target for {:?} at {:?}: {:?}", source, screen, target);
        }
        self.set_target(tree, host, target);
    }

    /// Drop at `screen`. Returns whether a drop was applied.
    pub fn confirm(&mut self, tree: &mut DockTree, host: &mut dyn Host, screen: Vec2) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.update(tree, host, screen);
        let target = self.target;
        let source = self.source;
        self.end(tree, host);

        let (Some(target), Some(source)) = (target, source) else {
            return false;
        };
        if target.is_none() {
            return false;
        }

        let root = tree.source_root(source);
        let target_root = target.group().and_then(|group| tree.root_container(group));
        let applied = match target.apply(tree, source, &mut *self.hooks, host) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Drop of {:?} onto {:?} failed: {}", source, target, e);
                false
            }
        };
        if let Some(root) = root {
            tree.normalize_or_close(root, host);
        }
        for root in [root, target_root].into_iter().flatten() {
            if tree.contains_node(root) {
                host.request_layout(root);
            }
        }
        tracing::debug!("Dropped {:?} onto {:?}", source, target);
        applied
    }

    /// Abort the drag without changing the layout.
    pub fn cancel(&mut self, tree: &mut DockTree, host: &mut dyn Host) {
        if self.is_dragging() {
            tracing::debug!("Drag cancelled");
        }
        self.end(tree, host);
    }

    /// Key handler active during a drag; escape cancels it.
    pub fn key_pressed(&mut self, tree: &mut DockTree, host: &mut dyn Host, key: Key) -> bool {
        if self.is_dragging() && key == Key::Escape {
            self.cancel(tree, host);
            true
        } else {
            false
        }
    }

    fn end(&mut self, tree: &mut DockTree, host: &mut dyn Host) {
        if let Some(source) = self.source.take() {
            tree.set_source_dragging(source, false);
            host.set_cursor(self.previous_cursor);
        }
        self.set_target(tree, host, None);
    }

    fn set_target(&mut self, tree: &mut DockTree, host: &mut dyn Host, target: Option<DropTarget>) {
        if self.source.is_some() {
            let cursor = match target {
                Some(t) if !t.is_none() => Cursor::Dnd,
                _ => Cursor::NoDrop,
            };
            host.set_cursor(cursor);
        }

        let old_group = self.target.and_then(|t| t.group());
        let new_group = target.and_then(|t| t.group());
        if old_group != new_group
            && let Some(old_group) = old_group
        {
            tree.set_drop_highlight(old_group, None);
        }
        self.target = target;
        if let Some(new_group) = new_group {
            tree.set_drop_highlight(new_group, target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_context() {
        let context = DragContext::new();
        assert!(!context.is_dragging());
        assert_eq!(context.drop_target(), None);
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            trace_drop_targets: true,
            ..Default::default()
        };
        let context = DragContext::from_config(&config);
        assert!(context.trace_drop_targets);
        assert!(!DragContext::default().trace_drop_targets);
    }
}
