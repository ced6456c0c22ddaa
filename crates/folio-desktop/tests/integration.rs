//! Integration tests for DesktopShell
//!
//! These tests drive the shell the way a host would:
//! - Window lifecycle through dock clicks and chrome buttons
//! - Drag release snapping and keep-visible clamping
//! - Fly-to-dock minimize, with and without a live dock icon
//! - Home screen icon order surviving a reload

use std::cell::Cell;
use std::rc::Rc;
use folio_desktop::{
    DesktopShell, DockElement, IconGrid, InputResult, JsonFileStore, MemoryStore, Rect, ResizeDirection,
    Size, Transform, Vec2, ICON_ORDER_KEY, MENU_BAR_HEIGHT,
};

const VIEWPORT: Size = Size::new(1440.0, 900.0);

struct FakeIcon {
    bounds: Rect,
    connected: Cell<bool>,
}

impl DockElement for FakeIcon {
    fn is_connected(&self) -> bool {
        self.connected.get()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

fn dock_icon(x: f32) -> Rc<FakeIcon> {
    Rc::new(FakeIcon {
        bounds: Rect::new(x, 850.0, 48.0, 48.0),
        connected: Cell::new(true),
    })
}

/// Run frames every 16ms until the shell is idle
fn settle(shell: &mut DesktopShell, mut now: f64) -> f64 {
    for _ in 0..500 {
        now += 16.0;
        if !shell.animation_frame(now) {
            break;
        }
    }
    now
}

// =============================================================================
// Window Lifecycle Tests
// =============================================================================

#[test]
fn test_window_lifecycle_full() {
    let mut shell = DesktopShell::with_default_apps(VIEWPORT);

    shell.dock_click("about", 0.0);
    let window = shell.window("about").unwrap();
    assert!(window.is_visible());
    let rect = window.rect();

    // Maximize via the traffic light
    let maximize = rect.position() + Vec2::new(58.0, 18.0);
    assert_eq!(shell.pointer_down(maximize, 10.0), InputResult::Handled);
    assert!(shell.window("about").unwrap().is_maximized);
    let now = settle(&mut shell, 10.0);
    let frame = &shell.frames(now)[0];
    assert_eq!(frame.rect, Rect::new(0.0, MENU_BAR_HEIGHT, 1440.0, 900.0 - MENU_BAR_HEIGHT));

    // Restore reinstates the untouched geometry
    shell.toggle_maximize("about", now);
    let now = settle(&mut shell, now);
    assert_eq!(shell.frames(now)[0].rect, rect);

    // Close via the traffic light
    let close = rect.position() + Vec2::new(18.0, 18.0);
    shell.pointer_down(close, now);
    assert!(!shell.window("about").unwrap().is_open);
    assert!(shell.frames(now).is_empty());

    // Reopen keeps the last geometry
    shell.dock_click("about", now);
    assert_eq!(shell.window("about").unwrap().rect(), rect);
}

#[test]
fn test_drag_clamps_to_keep_visible_bounds() {
    let mut shell = DesktopShell::with_default_apps(VIEWPORT);
    shell.dock_click("blog", 0.0);
    let start = shell.window("blog").unwrap().position;
    let grab = start + Vec2::new(200.0, 18.0);

    assert!(shell.begin_drag("blog", grab, 0.0));
    // Fling far up and to the right, then stop
    shell.pointer_move(grab + Vec2::new(3000.0, -2000.0), 16.0);
    shell.pointer_move(grab + Vec2::new(3000.0, -2000.0), 200.0);
    shell.pointer_up(400.0);
    settle(&mut shell, 400.0);

    let w = shell.window("blog").unwrap();
    assert!(w.position.x <= VIEWPORT.width - 80.0 + 0.001);
    assert!(w.position.y >= MENU_BAR_HEIGHT - 0.001);
}

#[test]
fn test_snap_needs_proximity_and_direction() {
    let mut shell = DesktopShell::with_default_apps(VIEWPORT);
    shell.dock_click("about", 0.0);
    let start = shell.window("about").unwrap().position;
    let grab = start + Vec2::new(300.0, 18.0);

    // Move to x = 10 heading left: snaps to the left edge
    let to_left = Vec2::new(10.0 - start.x, 300.0);
    assert!(shell.begin_drag("about", grab, 0.0));
    shell.pointer_move(grab + to_left * 0.5, 16.0);
    shell.pointer_move(grab + to_left, 32.0);
    shell.pointer_up(40.0);
    let now = settle(&mut shell, 40.0);
    assert!(shell.window("about").unwrap().position.x.abs() < 0.001);

    // Near the left edge but moving right: no snap
    let pos = shell.window("about").unwrap().position;
    let grab = pos + Vec2::new(300.0, 18.0);
    assert!(shell.begin_drag("about", grab, now));
    shell.pointer_move(grab + Vec2::new(6.0, 0.0), now + 16.0);
    shell.pointer_move(grab + Vec2::new(12.0, 0.0), now + 32.0);
    shell.pointer_up(now + 40.0);
    let now = settle(&mut shell, now + 40.0);
    assert!((shell.window("about").unwrap().position.x - 12.0).abs() < 0.001);

    // Near the top in any direction: sits just under the menu bar
    let pos = shell.window("about").unwrap().position;
    let grab = pos + Vec2::new(300.0, 18.0);
    let up = Vec2::new(0.0, MENU_BAR_HEIGHT + 10.0 - pos.y);
    assert!(shell.begin_drag("about", grab, now));
    shell.pointer_move(grab + up, now + 16.0);
    shell.pointer_up(now + 300.0);
    settle(&mut shell, now + 300.0);
    assert!((shell.window("about").unwrap().position.y - (MENU_BAR_HEIGHT + 8.0)).abs() < 0.001);
}

#[test]
fn test_viewport_shrink_during_settle_keeps_window_visible() {
    let mut shell = DesktopShell::with_default_apps(VIEWPORT);
    shell.dock_click("about", 0.0);
    let start = shell.window("about").unwrap().position;
    let grab = start + Vec2::new(300.0, 18.0);

    // Fling toward the bottom right corner; the right snap starts a settle
    let delta = Vec2::new(1300.0, 780.0) - start;
    assert!(shell.begin_drag("about", grab, 0.0));
    shell.pointer_move(grab + delta * 0.5, 16.0);
    shell.pointer_move(grab + delta, 32.0);
    shell.pointer_up(40.0);
    shell.animation_frame(56.0);
    assert!(shell.controller("about").unwrap().is_settling());

    let small = Size::new(800.0, 600.0);
    shell.resize_viewport(small);
    settle(&mut shell, 56.0);

    let w = shell.window("about").unwrap();
    assert!(!shell.controller("about").unwrap().is_settling());
    assert!(w.position.x <= small.width - 80.0 + 0.001);
    assert!(w.position.y <= small.height - 80.0 + 0.001);
    assert!(w.position.x + w.size.width >= 80.0 - 0.001);
    assert!(w.position.y >= MENU_BAR_HEIGHT - 0.001);
}

#[test]
fn test_north_resize_stops_below_menu_bar() {
    let mut shell = DesktopShell::with_default_apps(VIEWPORT);
    shell.dock_click("about", 0.0);
    let before = shell.window("about").unwrap().clone();
    let top_edge = before.position + Vec2::new(200.0, 0.0);

    assert!(shell.begin_resize("about", ResizeDirection::N, top_edge));
    shell.pointer_move(Vec2::new(top_edge.x, 0.0), 16.0);
    shell.pointer_up(32.0);

    let w = shell.window("about").unwrap();
    assert!((w.position.y - MENU_BAR_HEIGHT).abs() < 0.001);
    let bottom = w.position.y + w.size.height;
    assert!((bottom - (before.position.y + before.size.height)).abs() < 0.001);

    // The title bar is still under the pointer's reach for dragging
    let grab = w.position + Vec2::new(200.0, 18.0);
    assert!(shell.begin_drag("about", grab, 40.0));
}

// =============================================================================
// Minimize Tests
// =============================================================================

#[test]
fn test_minimize_flies_to_dock_and_resets_transform() {
    let mut shell = DesktopShell::with_default_apps(VIEWPORT);
    let icon = dock_icon(700.0);
    let element: Rc<dyn DockElement> = icon.clone();
    shell.dock_mut().register("music", &element);

    shell.dock_click("music", 0.0);
    let position = shell.window("music").unwrap().position;

    shell.minimize("music", 100.0);
    // Not hidden until the animation completes
    assert!(!shell.window("music").unwrap().is_minimized);
    assert!(shell.frames(300.0)[0].transform.scale < 1.0);

    // Input during the animation is ignored
    assert!(!shell.begin_drag("music", position + Vec2::new(100.0, 18.0), 150.0));

    let now = settle(&mut shell, 100.0);
    let w = shell.window("music").unwrap();
    assert!(w.is_minimized);
    assert_eq!(w.position, position);
    assert_eq!(shell.dock().minimized(), ["music".to_string()]);
    assert_eq!(shell.controller("music").unwrap().transform(now), Transform::IDENTITY);

    // Restoring shows the window at its original place, untransformed
    shell.dock_click("music", now);
    let frame = &shell.frames(now)[0];
    assert_eq!(frame.transform, Transform::IDENTITY);
    assert_eq!(frame.rect.position(), position);
}

#[test]
fn test_minimize_with_stale_dock_icon_hides_instantly() {
    let mut shell = DesktopShell::with_default_apps(VIEWPORT);
    let icon = dock_icon(700.0);
    let element: Rc<dyn DockElement> = icon.clone();
    shell.dock_mut().register("blog", &element);
    icon.connected.set(false);

    shell.dock_click("blog", 0.0);
    shell.minimize("blog", 10.0);
    assert!(shell.window("blog").unwrap().is_minimized);
    assert_eq!(shell.controller("blog").unwrap().transform(10.0), Transform::IDENTITY);

    // Dropped element behaves the same
    drop(element);
    drop(icon);
    shell.dock_click("blog", 20.0);
    shell.minimize("blog", 30.0);
    assert!(shell.window("blog").unwrap().is_minimized);
}

#[test]
fn test_minimize_maximized_window_restores_normal_geometry() {
    let mut shell = DesktopShell::with_default_apps(VIEWPORT);
    shell.dock_click("contact", 0.0);
    let rect = shell.window("contact").unwrap().rect();

    shell.toggle_maximize("contact", 0.0);
    let now = settle(&mut shell, 0.0);
    shell.minimize("contact", now);

    let w = shell.window("contact").unwrap();
    assert!(w.is_minimized);
    assert!(!w.is_maximized);

    shell.dock_click("contact", now + 10.0);
    let frame = &shell.frames(now + 10.0)[0];
    assert!(!frame.maximized);
    assert_eq!(frame.rect, rect);
    assert!(shell.menu_bar_visible());
}

#[test]
fn test_dock_observers_see_minimized_changes() {
    use std::cell::RefCell;

    let mut shell = DesktopShell::with_default_apps(VIEWPORT);
    let seen: Rc<RefCell<Vec<Vec<String>>>> = Rc::default();
    let sink = seen.clone();
    shell.dock_mut().subscribe(move |ids| sink.borrow_mut().push(ids.to_vec()));

    shell.dock_click("about", 0.0);
    shell.dock_click("blog", 0.0);
    shell.minimize("about", 0.0);
    shell.minimize("blog", 0.0);
    shell.dock_click("about", 0.0);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[1], vec!["about".to_string(), "blog".to_string()]);
    assert_eq!(seen[2], vec!["blog".to_string()]);
}

// =============================================================================
// Home Screen Tests
// =============================================================================

#[test]
fn test_icon_order_survives_reload() {
    let dir = std::env::temp_dir().join(format!("folio-home-{}", uuid::Uuid::new_v4()));
    let path = dir.join("prefs.json");
    let known: Vec<String> = ["about", "blog", "contact", "music"].iter().map(|s| s.to_string()).collect();

    let mut grid = IconGrid::load(JsonFileStore::new(&path), &known, 4);
    grid.pointer_down(3, 0.0);
    assert!(grid.tick(450.0));
    assert!(grid.begin_drag(3));
    assert!(grid.drop_at(Vec2::new(10.0, 10.0), 400.0, 100.0));
    grid.click_away();
    assert_eq!(grid.ids(), ["music", "about", "blog", "contact"]);

    let reloaded = IconGrid::load(JsonFileStore::new(&path), &known, 4);
    assert_eq!(reloaded.ids(), ["music", "about", "blog", "contact"]);
    assert!(!reloaded.is_editing());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_icon_order_saves_over_corrupt_file() {
    let dir = std::env::temp_dir().join(format!("folio-home-{}", uuid::Uuid::new_v4()));
    let path = dir.join("prefs.json");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(&path, "{oops").unwrap();
    let known: Vec<String> = ["about", "blog", "contact"].iter().map(|s| s.to_string()).collect();

    let mut grid = IconGrid::load(JsonFileStore::new(&path), &known, 4);
    assert_eq!(grid.ids(), ["about", "blog", "contact"]);
    grid.pointer_down(0, 0.0);
    assert!(grid.tick(450.0));
    assert!(grid.begin_drag(0));
    assert!(grid.drop_at(Vec2::new(210.0, 10.0), 400.0, 100.0));

    let reloaded = IconGrid::load(JsonFileStore::new(&path), &known, 4);
    assert_eq!(reloaded.ids(), ["blog", "contact", "about"]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_icon_order_reconciles_with_new_apps() {
    use folio_desktop::PreferenceStore;

    let mut store = MemoryStore::new();
    store.save(ICON_ORDER_KEY, r#"["blog","retired","blog"]"#).unwrap();
    let known: Vec<String> = ["about", "blog", "contact"].iter().map(|s| s.to_string()).collect();

    let grid = IconGrid::load(store, &known, 4);
    assert_eq!(grid.ids(), ["blog", "about", "contact"]);
}
