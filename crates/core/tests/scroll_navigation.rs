//! Integration test: drive the navigation controller through a full page
//! visit — manual jumps, scroll events during and after the suppression
//! window, and re-navigation — and verify the active section at each step.

use folio_core::{NavController, SectionId, SectionLayout};

/// The worked layout: anchors every 800 logical pixels.
fn layout() -> SectionLayout {
    let mut layout = SectionLayout::new();
    for (i, id) in SectionId::ALL.iter().enumerate() {
        layout.set(*id, i as f32 * 800.0);
    }
    layout
}

#[test]
fn full_page_visit() {
    let layout = layout();
    let mut nav = NavController::new();
    assert_eq!(nav.active(), SectionId::About);

    // The user scrolls down the page by hand.
    nav.on_scroll(0.0, &layout, 0.0);
    assert_eq!(nav.active(), SectionId::About);
    nav.on_scroll(750.0, &layout, 1.0);
    assert_eq!(nav.active(), SectionId::Experience);
    nav.on_scroll(1700.0, &layout, 2.0);
    assert_eq!(nav.active(), SectionId::Projects);

    // Clicks "Skills" in the header. The highlight moves instantly even
    // though the viewport is still around the projects section.
    let req = nav.navigate_to(SectionId::Skills, 3.0);
    assert_eq!(req.target, SectionId::Skills);
    assert_eq!(nav.active(), SectionId::Skills);

    // The smooth scroll streams intermediate offsets past education; all
    // of them land inside the window and are dropped.
    for (dt, offset) in [(0.1, 1900.0), (0.4, 2500.0), (0.9, 3150.0)] {
        nav.on_scroll(offset, &layout, 3.0 + dt);
        assert_eq!(nav.active(), SectionId::Skills);
    }

    // The animation has settled at the skills anchor when the window
    // closes; the first live event agrees with the commanded section.
    nav.on_scroll(3200.0, &layout, 4.2);
    assert_eq!(nav.active(), SectionId::Skills);

    // Scrolling back up by hand is live again.
    nav.on_scroll(900.0, &layout, 5.0);
    assert_eq!(nav.active(), SectionId::Experience);

    // A second click while a window is already open re-arms it.
    let _ = nav.navigate_to(SectionId::Extras, 6.0);
    let _ = nav.navigate_to(SectionId::About, 6.5);
    nav.on_scroll(4000.0, &layout, 7.4);
    assert_eq!(nav.active(), SectionId::About, "window re-armed at 6.5s");
    nav.on_scroll(4000.0, &layout, 7.6);
    assert_eq!(nav.active(), SectionId::Extras);
}

#[test]
fn scroll_to_top_overscroll_keeps_last_section() {
    let mut layout = SectionLayout::new();
    for (i, id) in SectionId::ALL.iter().enumerate() {
        // First anchor below the fold, as when a tall hero precedes it.
        layout.set(*id, 600.0 + i as f32 * 800.0);
    }

    let mut nav = NavController::new();
    nav.on_scroll(1350.0, &layout, 0.0);
    assert_eq!(nav.active(), SectionId::Experience);

    // Rubber-band overscroll above the hero: no anchor qualifies, the
    // highlight stays put rather than clearing or panicking.
    nav.on_scroll(-80.0, &layout, 0.5);
    assert_eq!(nav.active(), SectionId::Experience);
}
