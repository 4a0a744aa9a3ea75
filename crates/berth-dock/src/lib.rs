//! Berth Dock
//!
//! A docking layout engine: views are grouped into tabbed [`Group`]s, groups
//! are arranged in a binary split tree of [`Container`]s, and whole trees
//! live in top-level windows. The engine owns the tree, keeps it normalized,
//! resolves drag-and-drop targets and runs the divider math. Rendering and
//! input delivery stay with the host toolkit behind the [`Host`] trait.
//!
//! # Quick Start
//!
//! ```
//! use berth_core::geometry::Rect;
//! use berth_dock::{Container, DockTree, DockWindow, Group, View};
//!
//! let mut tree = DockTree::new();
//! let root = tree.add_container(Container::new());
//! let group = tree.add_group(Group::new());
//! let view = tree.add_view(View::new("Explorer"));
//! tree.push_view(group, view).unwrap();
//! tree.set_left_top(root, Some(group)).unwrap();
//! let window = tree
//!     .add_window(DockWindow::new(root, Rect::new(0.0, 0.0, 800.0, 600.0)))
//!     .unwrap();
//! assert_eq!(tree.window_of_node(group), Some(window));
//! ```

pub mod arrange;
pub mod container;
pub mod coordinator;
pub mod divider;
pub mod drop_target;
pub mod error;
pub mod group;
pub mod host;
pub mod normalize;
pub mod resolver;
pub mod style;
pub mod tree;
pub mod types;
pub mod view;
pub mod window;

pub use arrange::{ContainerLayout, GroupLayout, NodeLayout};
pub use container::{Container, Slot};
pub use coordinator::{DefaultHooks, DockHooks, DragContext};
pub use drop_target::{DragSource, DropTarget};
pub use error::{DockError, DockResult};
pub use group::Group;
pub use host::Host;
pub use resolver::find_drop_target;
pub use style::DockStyle;
pub use tree::{DockNode, DockTree, NodeId, ViewId, WindowId};
pub use types::{
    Cursor, DividerDragMode, DropTargetKinds, Key, Orientation, ResizePolicy, Side, SideSet,
    TabActionVisibility, TagSet, ViewSelectorControls, tag_set, tags_match,
};
pub use view::{HostWidget, TabNodeFactory, View};
pub use window::DockWindow;
