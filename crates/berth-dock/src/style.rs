//! Sizing defaults shared by every dock node.

use crate::types::TabActionVisibility;
use crate::view::View;

/// Default divider thickness in pixels.
pub const DEFAULT_DIVIDER_SIZE: f32 = 5.0;

/// Default header (tab bar) thickness in pixels.
pub const DEFAULT_TAB_BAR_HEIGHT: f32 = 22.0;

/// Default horizontal padding on each side of a tab label.
pub const DEFAULT_TAB_PADDING: f32 = 8.0;

/// Default size of the close button on tabs.
pub const DEFAULT_CLOSE_BUTTON_SIZE: f32 = 12.0;

/// Margin between tab text and an action button.
pub(crate) const ACTION_BUTTON_MARGIN: f32 = 4.0;

/// Approximate character width factor relative to font size.
pub(crate) const CHAR_WIDTH_FACTOR: f32 = 0.6;

/// Centralized sizing defaults for the docking system.
///
/// Set on [`DockTree`](crate::DockTree); the arrangement pass and the default
/// tab measurement read from it. New containers take their divider size from
/// here unless a template says otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct DockStyle {
    /// Divider thickness for new containers.
    pub divider_size: f32,
    /// Thickness of a group's header strip.
    pub tab_bar_height: f32,
    /// Padding on each side of a tab label.
    pub tab_padding: f32,
    /// Tab label font size, used for width estimation.
    pub tab_font_size: f32,
    /// Size of the per-tab action buttons.
    pub close_button_size: f32,
}

impl Default for DockStyle {
    fn default() -> Self {
        Self {
            divider_size: DEFAULT_DIVIDER_SIZE,
            tab_bar_height: DEFAULT_TAB_BAR_HEIGHT,
            tab_padding: DEFAULT_TAB_PADDING,
            tab_font_size: 11.0,
            close_button_size: DEFAULT_CLOSE_BUTTON_SIZE,
        }
    }
}

impl DockStyle {
    /// Set the divider size.
    pub fn divider_size(mut self, size: f32) -> Self {
        self.divider_size = size;
        self
    }

    /// Set the tab bar height.
    pub fn tab_bar_height(mut self, height: f32) -> Self {
        self.tab_bar_height = height;
        self
    }

    /// Set the tab padding.
    pub fn tab_padding(mut self, padding: f32) -> Self {
        self.tab_padding = padding;
        self
    }

    /// Set the tab font size.
    pub fn tab_font_size(mut self, size: f32) -> Self {
        self.tab_font_size = size;
        self
    }

    /// Estimate a tab's length along the header without a text shaper.
    pub fn estimate_tab_width(&self, view: &View) -> f32 {
        let char_width = self.tab_font_size * CHAR_WIDTH_FACTOR;
        let text_width = view.label.chars().count() as f32 * char_width;
        let button_width = self.close_button_size + ACTION_BUTTON_MARGIN;
        let mut width = text_width + self.tab_padding * 2.0;
        if view.close_action != TabActionVisibility::Never {
            width += button_width;
        }
        if view.maximizable && view.maximize_action != TabActionVisibility::Never {
            width += button_width;
        }
        width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(actual: f32, expected: f32) {
        assert!((actual - expected).abs() < 1e-3, "expected {expected}, got {actual}");
    }

    #[test]
    fn test_estimate_counts_action_buttons() {
        let style = DockStyle::default().tab_font_size(10.0).tab_padding(5.0);
        let plain = View::new("abcd")
            .close_action(TabActionVisibility::Never)
            .maximize_action(TabActionVisibility::Never);
        // 4 chars * 6px + 2 * 5px padding
        assert_near(style.estimate_tab_width(&plain), 34.0);

        let closable = plain.close_action(TabActionVisibility::Always);
        assert_near(style.estimate_tab_width(&closable), 34.0 + 16.0);

        let both = closable.maximize_action(TabActionVisibility::Selected);
        assert_near(style.estimate_tab_width(&both), 34.0 + 32.0);

        let not_maximizable = both.maximizable(false);
        assert_near(style.estimate_tab_width(&not_maximizable), 34.0 + 16.0);
    }
}
