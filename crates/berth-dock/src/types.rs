//! Shared enums and flag sets for the docking system.

use berth_core::alloc::HashSet;
use bitflags::bitflags;

/// Axis along which a container stacks its two children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Children side by side (vertical divider line).
    #[default]
    Horizontal,
    /// Children stacked (horizontal divider line).
    Vertical,
}

impl Orientation {
    /// Get the perpendicular orientation.
    pub fn perpendicular(&self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Orientation::Horizontal)
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Orientation::Vertical)
    }
}

/// One of the four edges of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    #[default]
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub fn opposite(&self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Left and right are the vertical edges.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Side::Left | Side::Right)
    }

    /// Container orientation that places a child against this side.
    pub fn split_orientation(&self) -> Orientation {
        if self.is_vertical() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// True when a child placed on this side occupies the leading slot.
    pub fn is_leading(&self) -> bool {
        matches!(self, Side::Top | Side::Left)
    }
}

/// How the divider of a container may be dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DividerDragMode {
    /// Divider cannot be dragged.
    Fixed,
    /// Divider moves anywhere within the container's span.
    #[default]
    Free,
    /// Divider stops short of the children's minimum extents.
    RespectMinSize,
}

/// Which part of a container keeps its size when the container is resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResizePolicy {
    KeepLeftTopSize,
    KeepRightBottomSize,
    #[default]
    KeepRatio,
}

/// Affordance used to pick a view when tabs overflow the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewSelectorControls {
    /// Dropdown listing every view of the group.
    #[default]
    Dropdown,
    /// Previous / next arrows.
    Arrows,
    /// Arrows and dropdown together.
    Both,
}

/// When a per-tab action button (close, maximize) is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabActionVisibility {
    Never,
    Always,
    Selected,
    #[default]
    MouseOver,
}

impl TabActionVisibility {
    /// Whether the button is shown for a tab in the given state.
    pub fn is_visible(&self, selected: bool, hovered: bool) -> bool {
        match self {
            TabActionVisibility::Never => false,
            TabActionVisibility::Always => true,
            TabActionVisibility::Selected => selected,
            TabActionVisibility::MouseOver => hovered,
        }
    }
}

bitflags! {
    /// Kinds of drop a drag source accepts.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DropTargetKinds: u8 {
        /// Reorder within the source's own group.
        const REORDER = 1 << 0;
        /// Move into (or split next to) another group.
        const CHANGE_GROUP = 1 << 1;
        /// Detach into a new window.
        const NEW_WINDOW = 1 << 2;
    }
}

impl Default for DropTargetKinds {
    fn default() -> Self {
        DropTargetKinds::all()
    }
}

bitflags! {
    /// Set of [`Side`]s, used for a group's permitted split sides.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SideSet: u8 {
        const TOP = 1 << 0;
        const RIGHT = 1 << 1;
        const BOTTOM = 1 << 2;
        const LEFT = 1 << 3;
    }
}

impl SideSet {
    pub fn contains_side(&self, side: Side) -> bool {
        self.contains(SideSet::from(side))
    }
}

impl From<Side> for SideSet {
    fn from(side: Side) -> Self {
        match side {
            Side::Top => SideSet::TOP,
            Side::Right => SideSet::RIGHT,
            Side::Bottom => SideSet::BOTTOM,
            Side::Left => SideSet::LEFT,
        }
    }
}

impl Default for SideSet {
    fn default() -> Self {
        SideSet::all()
    }
}

/// Opaque tag set used to match drag sources against drop groups.
pub type TagSet = HashSet<String>;

/// Build a [`TagSet`] from anything string-like.
pub fn tag_set<I, S>(tags: I) -> TagSet
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    tags.into_iter().map(Into::into).collect()
}

/// Whether a source carrying `drag_tags` may land in a group with `drop_tags`.
///
/// Untagged sources go anywhere; an untagged group only takes untagged
/// sources; otherwise every drag tag must be among the drop tags.
pub fn tags_match(drag_tags: &TagSet, drop_tags: &TagSet) -> bool {
    if drag_tags.is_empty() {
        return true;
    }
    if drop_tags.is_empty() {
        return false;
    }
    drag_tags.iter().all(|tag| drop_tags.contains(tag))
}

/// Pointer cursor requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cursor {
    #[default]
    Default,
    /// Drag in progress with a valid drop.
    Dnd,
    /// Drag in progress over nothing droppable.
    NoDrop,
    /// Horizontal resize (divider of a horizontal container).
    HResize,
    /// Vertical resize (divider of a vertical container).
    VResize,
}

/// Keys the drag coordinator reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opposite() {
        for side in Side::ALL {
            assert_eq!(side.opposite().opposite(), side);
            assert_ne!(side.opposite(), side);
        }
    }

    #[test]
    fn test_split_orientation() {
        assert_eq!(Side::Top.split_orientation(), Orientation::Vertical);
        assert_eq!(Side::Bottom.split_orientation(), Orientation::Vertical);
        assert_eq!(Side::Left.split_orientation(), Orientation::Horizontal);
        assert_eq!(Side::Right.split_orientation(), Orientation::Horizontal);
    }

    #[test]
    fn test_tags_match() {
        let empty = TagSet::default();
        let ab = tag_set(["a", "b"]);
        let a = tag_set(["a"]);

        assert!(tags_match(&empty, &empty));
        assert!(tags_match(&empty, &ab));
        assert!(!tags_match(&a, &empty));
        assert!(tags_match(&a, &ab));
        assert!(!tags_match(&ab, &a));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(DropTargetKinds::default(), DropTargetKinds::all());
        assert!(SideSet::default().contains_side(Side::Left));
        assert_eq!(ResizePolicy::default(), ResizePolicy::KeepRatio);
        assert_eq!(DividerDragMode::default(), DividerDragMode::Free);
    }

    #[test]
    fn test_action_visibility() {
        assert!(!TabActionVisibility::Never.is_visible(true, true));
        assert!(TabActionVisibility::Always.is_visible(false, false));
        assert!(TabActionVisibility::Selected.is_visible(true, false));
        assert!(!TabActionVisibility::MouseOver.is_visible(true, false));
    }
}
