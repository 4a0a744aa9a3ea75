//! Views: the leaf content units shown as tabs.

use std::fmt;
use std::rc::Rc;

use crate::types::{DropTargetKinds, Side, TabActionVisibility, TagSet};

/// Opaque handle to a host widget (content, graphic, context menu).
///
/// The engine never inspects it; the host maps it back to its own widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostWidget(pub u64);

/// Callback producing a custom tab widget for the header side it sits on.
#[derive(Clone)]
pub struct TabNodeFactory(Rc<dyn Fn(Side) -> HostWidget>);

impl TabNodeFactory {
    pub fn new(f: impl Fn(Side) -> HostWidget + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn create(&self, side: Side) -> HostWidget {
        (self.0)(side)
    }
}

impl fmt::Debug for TabNodeFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TabNodeFactory(..)")
    }
}

/// A single dockable unit of content.
///
/// A view belongs to at most one group at a time; membership is tracked by
/// [`DockTree`](crate::DockTree).
#[derive(Debug, Clone)]
pub struct View {
    /// Tab label.
    pub label: String,
    /// Host style class applied to the tab.
    pub style: Option<String>,
    pub graphic: Option<HostWidget>,
    pub tooltip: Option<String>,
    pub context_menu: Option<HostWidget>,
    pub content: Option<HostWidget>,
    /// Custom tab widget, replacing label and graphic.
    pub tab_node: Option<TabNodeFactory>,
    pub close_action: TabActionVisibility,
    pub maximize_action: TabActionVisibility,
    /// Tags matched against a target group's drop tags.
    pub drag_tags: TagSet,
    /// Kinds of drop this view accepts while being dragged.
    pub drop_target_kinds: DropTargetKinds,
    pub maximizable: bool,
    /// Veto for window-level close requests.
    pub can_close: bool,
    pub(crate) dragging: bool,
    pub(crate) maximized: bool,
}

impl Default for View {
    fn default() -> Self {
        Self {
            label: String::new(),
            style: None,
            graphic: None,
            tooltip: None,
            context_menu: None,
            content: None,
            tab_node: None,
            close_action: TabActionVisibility::MouseOver,
            maximize_action: TabActionVisibility::Never,
            drag_tags: TagSet::default(),
            drop_target_kinds: DropTargetKinds::all(),
            maximizable: true,
            can_close: true,
            dragging: false,
            maximized: false,
        }
    }
}

impl View {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn graphic(mut self, graphic: HostWidget) -> Self {
        self.graphic = Some(graphic);
        self
    }

    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn context_menu(mut self, menu: HostWidget) -> Self {
        self.context_menu = Some(menu);
        self
    }

    pub fn content(mut self, content: HostWidget) -> Self {
        self.content = Some(content);
        self
    }

    pub fn tab_node(mut self, factory: TabNodeFactory) -> Self {
        self.tab_node = Some(factory);
        self
    }

    pub fn close_action(mut self, visibility: TabActionVisibility) -> Self {
        self.close_action = visibility;
        self
    }

    pub fn maximize_action(mut self, visibility: TabActionVisibility) -> Self {
        self.maximize_action = visibility;
        self
    }

    pub fn drag_tags(mut self, tags: TagSet) -> Self {
        self.drag_tags = tags;
        self
    }

    pub fn drop_target_kinds(mut self, kinds: DropTargetKinds) -> Self {
        self.drop_target_kinds = kinds;
        self
    }

    pub fn maximizable(mut self, maximizable: bool) -> Self {
        self.maximizable = maximizable;
        self
    }

    pub fn can_close(mut self, can_close: bool) -> Self {
        self.can_close = can_close;
        self
    }

    /// True while this view is the active drag source.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }
}
