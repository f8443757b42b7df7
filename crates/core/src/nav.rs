use crate::section::{SectionId, SectionLayout};

/// Lookahead bias added to the scroll offset so a section counts as active
/// slightly before its anchor reaches the top of the viewport.
pub const SCROLL_BIAS: f32 = 100.0;

/// How long scroll-driven recomputation stays disabled after a manual
/// navigation. A fixed window, not an animation-completion signal: the
/// hosts' smooth scrolls settle well inside a second, and the window simply
/// swallows the transient offsets they produce.
pub const SUPPRESS_WINDOW: f64 = 1.0;

/// A request for the host to smooth-scroll the viewport to a section's
/// anchor. Fire-and-forget: the host resolves the anchor itself and drops
/// the request silently if it does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "the host performs the actual scroll"]
pub struct ScrollRequest {
    pub target: SectionId,
}

/// Owns "which section is currently active".
///
/// Two mutation entry points: [`NavController::navigate_to`] for explicit
/// navigation commands and [`NavController::on_scroll`] for passive
/// scroll-driven recomputation. Time is caller-supplied seconds (egui's
/// `Input::time`, or `Instant`-derived in the terminal host), so the
/// suppression window needs no timer of its own; it is cleared lazily by
/// the first event at or after expiry.
#[derive(Debug, Clone, Copy)]
pub struct NavController {
    active: SectionId,
    suppress_until: Option<f64>,
}

impl NavController {
    pub fn new() -> Self {
        Self {
            active: SectionId::ALL[0],
            suppress_until: None,
        }
    }

    /// The section currently highlighted in the navigation affordance.
    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Whether a programmatic scroll is considered in flight at `now`.
    pub fn is_suppressed(&self, now: f64) -> bool {
        self.suppress_until.is_some_and(|until| now < until)
    }

    /// Jump to a section: the active section changes immediately,
    /// scroll-driven recomputation is disabled for [`SUPPRESS_WINDOW`]
    /// seconds, and a smooth-scroll request is handed to the host.
    ///
    /// Calling again while suppressed overwrites the active section and
    /// re-arms a fresh window; there is no cancellation of the previous
    /// scroll beyond the host starting a new one.
    pub fn navigate_to(&mut self, target: SectionId, now: f64) -> ScrollRequest {
        self.active = target;
        self.suppress_until = Some(now + SUPPRESS_WINDOW);
        ScrollRequest { target }
    }

    /// Recompute the active section from the current scroll offset.
    ///
    /// Events inside the suppression window are dropped entirely.
    /// Otherwise the section list is scanned in reverse declared order and
    /// the first section whose top is at or above `offset + SCROLL_BIAS`
    /// wins: the lowest section on the page whose top has been scrolled
    /// past. If none qualify (viewport above the first anchor, or no
    /// anchors recorded yet), the active section keeps its previous value.
    pub fn on_scroll(&mut self, offset: f32, layout: &SectionLayout, now: f64) {
        if self.is_suppressed(now) {
            return;
        }
        self.suppress_until = None;

        let effective_y = offset + SCROLL_BIAS;
        for id in SectionId::ALL.iter().rev() {
            let Some(top) = layout.top(*id) else {
                continue;
            };
            if top <= effective_y {
                self.active = *id;
                return;
            }
        }
    }
}

impl Default for NavController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Anchors every 800 logical pixels, about at the very top.
    fn page_layout() -> SectionLayout {
        let mut layout = SectionLayout::new();
        for (i, id) in SectionId::ALL.iter().enumerate() {
            layout.set(*id, i as f32 * 800.0);
        }
        layout
    }

    #[test]
    fn initial_state_is_first_section() {
        let nav = NavController::new();
        assert_eq!(nav.active(), SectionId::About);
        assert!(!nav.is_suppressed(0.0));
    }

    #[test]
    fn scroll_picks_lowest_section_scrolled_past() {
        let mut nav = NavController::new();
        let layout = page_layout();

        // 750 + 100 = 850: past experience (800), short of projects (1600).
        nav.on_scroll(750.0, &layout, 0.0);
        assert_eq!(nav.active(), SectionId::Experience);

        nav.on_scroll(0.0, &layout, 0.1);
        assert_eq!(nav.active(), SectionId::About);

        nav.on_scroll(3950.0, &layout, 0.2);
        assert_eq!(nav.active(), SectionId::Extras);
    }

    #[test]
    fn navigate_sets_active_immediately_regardless_of_offset() {
        let mut nav = NavController::new();
        for id in SectionId::ALL {
            let req = nav.navigate_to(id, 0.0);
            assert_eq!(req.target, id);
            assert_eq!(nav.active(), id);
        }
    }

    #[test]
    fn scroll_events_inside_window_are_dropped() {
        let mut nav = NavController::new();
        let layout = page_layout();

        let _ = nav.navigate_to(SectionId::Skills, 10.0);
        assert_eq!(nav.active(), SectionId::Skills);

        // The smooth scroll is still near the top of the page; these
        // offsets would otherwise select About.
        nav.on_scroll(50.0, &layout, 10.05);
        nav.on_scroll(120.0, &layout, 10.5);
        nav.on_scroll(400.0, &layout, 10.999);
        assert_eq!(nav.active(), SectionId::Skills);
        assert!(nav.is_suppressed(10.999));
    }

    #[test]
    fn first_scroll_after_expiry_recomputes() {
        let mut nav = NavController::new();
        let layout = page_layout();

        let _ = nav.navigate_to(SectionId::Skills, 10.0);
        nav.on_scroll(750.0, &layout, 11.0);
        assert!(!nav.is_suppressed(11.0));
        assert_eq!(nav.active(), SectionId::Experience);
    }

    #[test]
    fn renavigation_rearms_the_window() {
        let mut nav = NavController::new();
        let layout = page_layout();

        let _ = nav.navigate_to(SectionId::Projects, 10.0);
        let _ = nav.navigate_to(SectionId::Extras, 10.8);
        assert_eq!(nav.active(), SectionId::Extras);

        // 10.8 + 1.0 > 11.5: still inside the fresh window.
        nav.on_scroll(0.0, &layout, 11.5);
        assert_eq!(nav.active(), SectionId::Extras);

        nav.on_scroll(0.0, &layout, 11.81);
        assert_eq!(nav.active(), SectionId::About);
    }

    #[test]
    fn navigate_is_idempotent() {
        let mut nav = NavController::new();
        let _ = nav.navigate_to(SectionId::Education, 0.0);
        let _ = nav.navigate_to(SectionId::Education, 0.2);
        assert_eq!(nav.active(), SectionId::Education);
    }

    #[test]
    fn offsets_above_every_anchor_keep_previous_value() {
        let mut layout = SectionLayout::new();
        for (i, id) in SectionId::ALL.iter().enumerate() {
            layout.set(*id, 500.0 + i as f32 * 800.0);
        }

        let mut nav = NavController::new();
        nav.on_scroll(2000.0, &layout, 0.0);
        assert_eq!(nav.active(), SectionId::Projects);

        // Negative offset (overscroll / page not yet rendered): nothing
        // qualifies at effective_y = -400, so the value is kept.
        nav.on_scroll(-500.0, &layout, 0.1);
        assert_eq!(nav.active(), SectionId::Projects);
    }

    #[test]
    fn unrecorded_anchors_are_skipped() {
        let mut layout = SectionLayout::new();
        layout.set(SectionId::About, 0.0);
        layout.set(SectionId::Projects, 1600.0);

        let mut nav = NavController::new();
        nav.on_scroll(900.0, &layout, 0.0);
        // Experience has no anchor; About is the lowest qualifying one.
        assert_eq!(nav.active(), SectionId::About);

        nav.on_scroll(1600.0, &layout, 0.1);
        assert_eq!(nav.active(), SectionId::Projects);
    }

    #[test]
    fn empty_layout_never_changes_active() {
        let layout = SectionLayout::new();
        let mut nav = NavController::new();
        nav.on_scroll(5000.0, &layout, 0.0);
        assert_eq!(nav.active(), SectionId::About);
    }
}
