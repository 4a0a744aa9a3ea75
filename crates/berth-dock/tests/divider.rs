//! Divider tests: pointer interaction and resize policies on laid-out
//! windows.

use berth_core::geometry::Rect;
use berth_core::math::Vec2;
use berth_dock::{
    Container, Cursor, DividerDragMode, DockTree, DockWindow, Group, Host, Orientation,
    ResizePolicy,
};
use berth_test_utils::{FIXTURE_BOUNDS, MockHost, SideBySide, group_with_views, side_by_side};

fn assert_near(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}

fn laid_out() -> (SideBySide, MockHost) {
    let mut fx = side_by_side(&["A"], &["B"]);
    let host = MockHost::new();
    fx.tree.layout_window(fx.window, &host).unwrap();
    (fx, host)
}

fn resize(fx: &mut SideBySide, host: &MockHost, width: f32) {
    let bounds = Rect::new(0.0, 0.0, width, FIXTURE_BOUNDS.height);
    fx.tree.set_window_bounds(fx.window, bounds).unwrap();
    fx.tree.layout_window(fx.window, host).unwrap();
}

#[test]
fn test_divider_hit_testing() {
    let (fx, _) = laid_out();
    assert_eq!(fx.tree.divider_at(fx.root, Vec2::new(202.0, 150.0)), Some(fx.root));
    assert_eq!(fx.tree.divider_at(fx.root, Vec2::new(100.0, 150.0)), None);
    assert_eq!(fx.tree.divider_at(fx.root, Vec2::new(300.0, 150.0)), None);
}

#[test]
fn test_drag_divider_moves_children() {
    let (mut fx, mut host) = laid_out();

    fx.tree.hover_divider(fx.root, &mut host).unwrap();
    assert_eq!(host.cursor(), Cursor::HResize);

    assert!(fx.tree.press_divider(fx.root, Vec2::new(202.0, 150.0), &mut host).unwrap());
    assert!(fx.tree.container(fx.root).unwrap().is_divider_dragging());

    // The grab point 2px into the divider is preserved.
    assert!(fx.tree.drag_divider(fx.root, Vec2::new(252.0, 150.0), &mut host).unwrap());
    let root = fx.tree.container(fx.root).unwrap();
    assert_near(root.absolute_position(), 250.0);
    assert_near(root.position(), 0.625);
    assert_eq!(host.count_layout_requests(), 1);

    fx.tree.release_divider(fx.root, Vec2::new(252.0, 150.0), &mut host).unwrap();
    assert!(!fx.tree.container(fx.root).unwrap().is_divider_dragging());
    // Still hit-testing against the layout from before the drag.
    assert_eq!(host.cursor(), Cursor::Default);

    fx.tree.layout_window(fx.window, &host).unwrap();
    assert_eq!(
        fx.tree.layout(fx.left).unwrap().bounds(),
        Rect::new(0.0, 0.0, 250.0, 300.0)
    );
    assert_eq!(
        fx.tree.layout(fx.right).unwrap().bounds(),
        Rect::new(255.0, 0.0, 150.0, 300.0)
    );
}

#[test]
fn test_free_drag_clamps_to_span() {
    let (mut fx, mut host) = laid_out();
    fx.tree.press_divider(fx.root, Vec2::new(200.0, 150.0), &mut host).unwrap();
    fx.tree.drag_divider(fx.root, Vec2::new(900.0, 150.0), &mut host).unwrap();
    assert_near(fx.tree.container(fx.root).unwrap().absolute_position(), 400.0);
    fx.tree.drag_divider(fx.root, Vec2::new(-50.0, 150.0), &mut host).unwrap();
    assert_near(fx.tree.container(fx.root).unwrap().absolute_position(), 0.0);
}

#[test]
fn test_fixed_divider_cannot_be_dragged() {
    let (mut fx, mut host) = laid_out();
    fx.tree
        .container_mut(fx.root)
        .unwrap()
        .set_divider_drag_mode(DividerDragMode::Fixed);

    fx.tree.hover_divider(fx.root, &mut host).unwrap();
    assert_eq!(host.cursor(), Cursor::Default);
    assert!(!fx.tree.press_divider(fx.root, Vec2::new(202.0, 150.0), &mut host).unwrap());
    assert!(!fx.tree.drag_divider(fx.root, Vec2::new(252.0, 150.0), &mut host).unwrap());
    assert_near(fx.tree.container(fx.root).unwrap().absolute_position(), 200.0);
}

#[test]
fn test_min_size_drag_ignores_out_of_range() {
    let (mut fx, mut host) = laid_out();
    fx.tree
        .container_mut(fx.root)
        .unwrap()
        .set_divider_drag_mode(DividerDragMode::RespectMinSize);
    host.set_min_extent(fx.right, 150.0);

    fx.tree.press_divider(fx.root, Vec2::new(202.0, 150.0), &mut host).unwrap();
    assert!(!fx.tree.drag_divider(fx.root, Vec2::new(302.0, 150.0), &mut host).unwrap());
    assert_near(fx.tree.container(fx.root).unwrap().absolute_position(), 200.0);

    assert!(fx.tree.drag_divider(fx.root, Vec2::new(242.0, 150.0), &mut host).unwrap());
    assert_near(fx.tree.container(fx.root).unwrap().absolute_position(), 240.0);
}

#[test]
fn test_resize_keeps_ratio() {
    let (mut fx, host) = laid_out();
    resize(&mut fx, &host, 605.0);
    let root = fx.tree.container(fx.root).unwrap();
    assert_near(root.absolute_position(), 300.0);
    assert_near(root.position(), 0.5);
}

#[test]
fn test_resize_keeps_left_top_size() {
    let (mut fx, host) = laid_out();
    fx.tree
        .container_mut(fx.root)
        .unwrap()
        .set_resize_policy(ResizePolicy::KeepLeftTopSize);

    resize(&mut fx, &host, 605.0);
    let root = fx.tree.container(fx.root).unwrap();
    assert_near(root.absolute_position(), 200.0);
    assert_near(root.position(), 200.0 / 600.0);
    assert_near(fx.tree.layout(fx.left).unwrap().bounds().width, 200.0);
}

#[test]
fn test_resize_keeps_right_bottom_size() {
    let (mut fx, host) = laid_out();
    fx.tree
        .container_mut(fx.root)
        .unwrap()
        .set_resize_policy(ResizePolicy::KeepRightBottomSize);

    resize(&mut fx, &host, 605.0);
    let root = fx.tree.container(fx.root).unwrap();
    assert_near(root.absolute_position(), 400.0);
    assert_near(fx.tree.layout(fx.right).unwrap().bounds().width, 200.0);
}

#[test]
fn test_vertical_container_shrinks_with_ratio() {
    let mut tree = DockTree::new();
    let root = tree.add_container(
        Container::new()
            .with_orientation(Orientation::Vertical)
            .with_divider_size(10.0),
    );
    let (top, _) = group_with_views(&mut tree, Group::new(), &["A"]);
    let (bottom, _) = group_with_views(&mut tree, Group::new(), &["B"]);
    tree.set_left_top(root, Some(top)).unwrap();
    tree.set_right_bottom(root, Some(bottom)).unwrap();
    let window = tree
        .add_window(DockWindow::new(root, Rect::new(0.0, 0.0, 100.0, 400.0)))
        .unwrap();
    let host = MockHost::new();

    tree.layout_window(window, &host).unwrap();
    assert_near(tree.container(root).unwrap().absolute_position(), 195.0);

    tree.set_window_bounds(window, Rect::new(0.0, 0.0, 100.0, 200.0)).unwrap();
    tree.layout_window(window, &host).unwrap();
    assert_near(tree.container(root).unwrap().absolute_position(), 95.0);
    assert_eq!(
        tree.layout(root).unwrap().divider(),
        Some(Rect::new(0.0, 95.0, 100.0, 10.0))
    );
    assert_eq!(tree.layout(bottom).unwrap().bounds(), Rect::new(0.0, 105.0, 100.0, 95.0));
}

#[test]
fn test_window_collapsed_to_zero_keeps_ratio() {
    let (mut fx, host) = laid_out();
    resize(&mut fx, &host, 0.0);
    assert_near(fx.tree.container(fx.root).unwrap().position(), 0.5);

    resize(&mut fx, &host, 805.0);
    let root = fx.tree.container(fx.root).unwrap();
    assert_near(root.position(), 0.5);
    assert_near(root.absolute_position(), 400.0);
    assert_eq!(
        fx.tree.layout(fx.right).unwrap().bounds(),
        Rect::new(405.0, 0.0, 400.0, 300.0)
    );
}
