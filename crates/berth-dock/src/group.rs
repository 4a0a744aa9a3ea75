//! Groups: tab sets of views with a selection and drop policy.

use crate::drop_target::DropTarget;
use crate::tree::ViewId;
use crate::types::{DropTargetKinds, Side, SideSet, TagSet, ViewSelectorControls};

/// An ordered set of views shown as tabs, exactly one of which (or none)
/// is selected.
///
/// View membership changes go through [`DockTree`](crate::DockTree) so the
/// one-group-per-view invariant holds.
#[derive(Debug, Clone)]
pub struct Group {
    pub(crate) views: Vec<ViewId>,
    pub(crate) selected: Option<ViewId>,
    /// Edge the header sits on.
    pub side: Side,
    /// Lower clamp for tab length; `None` means unbounded.
    pub tab_min_width: Option<f32>,
    /// Upper clamp for tab length; `None` means unbounded.
    pub tab_max_width: Option<f32>,
    pub selector_controls: ViewSelectorControls,
    /// Tags carried when the whole group is dragged.
    pub drag_tags: TagSet,
    /// Tags a source must carry to land here.
    pub drop_tags: TagSet,
    /// Kinds of drop this group accepts while being dragged.
    pub drop_target_kinds: DropTargetKinds,
    /// Sides on which other sources may split this group.
    pub drop_split_sides: SideSet,
    /// Discard the group when its last view leaves.
    pub auto_close: bool,
    pub(crate) dragging: bool,
    pub(crate) drop_target: Option<DropTarget>,
}

impl Default for Group {
    fn default() -> Self {
        Self {
            views: Vec::new(),
            selected: None,
            side: Side::Top,
            tab_min_width: None,
            tab_max_width: None,
            selector_controls: ViewSelectorControls::Dropdown,
            drag_tags: TagSet::default(),
            drop_tags: TagSet::default(),
            drop_target_kinds: DropTargetKinds::all(),
            drop_split_sides: SideSet::all(),
            auto_close: true,
            dragging: false,
            drop_target: None,
        }
    }
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty group configured like `template`: tab limits, side, selector
    /// controls, tags, drop kinds and split sides are copied.
    pub fn from_template(template: &Group) -> Self {
        Self {
            side: template.side,
            tab_min_width: template.tab_min_width,
            tab_max_width: template.tab_max_width,
            selector_controls: template.selector_controls,
            drag_tags: template.drag_tags.clone(),
            drop_tags: template.drop_tags.clone(),
            drop_target_kinds: template.drop_target_kinds,
            drop_split_sides: template.drop_split_sides,
            ..Default::default()
        }
    }

    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn tab_min_width(mut self, width: f32) -> Self {
        self.tab_min_width = Some(width);
        self
    }

    pub fn tab_max_width(mut self, width: f32) -> Self {
        self.tab_max_width = Some(width);
        self
    }

    pub fn selector_controls(mut self, controls: ViewSelectorControls) -> Self {
        self.selector_controls = controls;
        self
    }

    pub fn drag_tags(mut self, tags: TagSet) -> Self {
        self.drag_tags = tags;
        self
    }

    pub fn drop_tags(mut self, tags: TagSet) -> Self {
        self.drop_tags = tags;
        self
    }

    pub fn drop_target_kinds(mut self, kinds: DropTargetKinds) -> Self {
        self.drop_target_kinds = kinds;
        self
    }

    pub fn drop_split_sides(mut self, sides: SideSet) -> Self {
        self.drop_split_sides = sides;
        self
    }

    pub fn auto_close(mut self, auto_close: bool) -> Self {
        self.auto_close = auto_close;
        self
    }

    pub fn views(&self) -> &[ViewId] {
        &self.views
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn contains(&self, view: ViewId) -> bool {
        self.views.contains(&view)
    }

    pub fn index_of(&self, view: ViewId) -> Option<usize> {
        self.views.iter().position(|&v| v == view)
    }

    pub fn selected_view(&self) -> Option<ViewId> {
        self.selected
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected.and_then(|view| self.index_of(view))
    }

    /// Select `view`; returns false if it is not a member.
    pub fn select(&mut self, view: ViewId) -> bool {
        if self.contains(view) {
            self.selected = Some(view);
            true
        } else {
            false
        }
    }

    /// Select by index; out-of-range indices clear the selection.
    pub fn select_index(&mut self, index: usize) {
        self.selected = self.views.get(index).copied();
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Select the tab after the current one, wrapping around.
    pub fn select_next(&mut self) {
        if self.views.is_empty() {
            return;
        }
        let next = match self.selected_index() {
            Some(index) => (index + 1) % self.views.len(),
            None => 0,
        };
        self.select_index(next);
    }

    /// Select the tab before the current one, wrapping around.
    pub fn select_previous(&mut self) {
        if self.views.is_empty() {
            return;
        }
        let len = self.views.len();
        let previous = match self.selected_index() {
            Some(index) => (index + len - 1) % len,
            None => len - 1,
        };
        self.select_index(previous);
    }

    /// True while this group is the active drag source.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Drop target currently highlighted on this group, if any.
    pub fn drop_target(&self) -> Option<DropTarget> {
        self.drop_target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::tag_set;

    fn group_with(n: usize) -> Group {
        let mut group = Group::new();
        group.views = (0..n).map(ViewId).collect();
        group
    }

    #[test]
    fn test_defaults() {
        let group = Group::new();
        assert_eq!(group.side, Side::Top);
        assert!(group.auto_close);
        assert_eq!(group.tab_min_width, None);
        assert_eq!(group.drop_target_kinds, DropTargetKinds::all());
        assert_eq!(group.drop_split_sides, SideSet::all());
        assert_eq!(group.selected_view(), None);
    }

    #[test]
    fn test_from_template_copies_policy_not_views() {
        let mut template = Group::new()
            .side(Side::Left)
            .tab_max_width(120.0)
            .drag_tags(tag_set(["editor"]))
            .drop_split_sides(SideSet::LEFT | SideSet::RIGHT)
            .auto_close(false);
        template.views.push(ViewId(3));

        let group = Group::from_template(&template);
        assert_eq!(group.side, Side::Left);
        assert_eq!(group.tab_max_width, Some(120.0));
        assert_eq!(group.drag_tags, tag_set(["editor"]));
        assert_eq!(group.drop_split_sides, SideSet::LEFT | SideSet::RIGHT);
        assert!(group.is_empty());
        // auto-close is not part of the template
        assert!(group.auto_close);
    }

    #[test]
    fn test_select_next_previous_wrap() {
        let mut group = group_with(3);
        group.select_next();
        assert_eq!(group.selected_index(), Some(0));
        group.select_previous();
        assert_eq!(group.selected_index(), Some(2));
        group.select_next();
        assert_eq!(group.selected_index(), Some(0));
    }

    #[test]
    fn test_select_rejects_non_member() {
        let mut group = group_with(2);
        assert!(!group.select(ViewId(7)));
        assert!(group.select(ViewId(1)));
        assert_eq!(group.selected_index(), Some(1));
    }
}
