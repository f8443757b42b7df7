use crate::section::SectionId;

/// Duration of one item's entrance, in seconds.
pub const REVEAL_DURATION: f64 = 0.5;

/// Delay between consecutive items within a section.
pub const REVEAL_STAGGER: f64 = 0.1;

/// Entrance-animation state: each section fades in the first time it
/// scrolls into view, and only that once. Purely time-parameterized; the
/// renderer asks for a progress value each frame and applies it however it
/// draws (opacity in egui, nothing in the terminal host).
#[derive(Debug, Clone, Copy, Default)]
pub struct Reveal {
    first_seen: [Option<f64>; SectionId::ALL.len()],
}

impl Reveal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a section entered the viewport at `now`. Later sightings
    /// of an already-revealed section are ignored.
    pub fn mark_visible(&mut self, id: SectionId, now: f64) {
        let slot = &mut self.first_seen[index(id)];
        if slot.is_none() {
            *slot = Some(now);
        }
    }

    /// Entrance progress in 0..=1 for the `item`-th element of a section.
    /// 0.0 before the section has ever been visible; items start
    /// [`REVEAL_STAGGER`] apart and ease out over [`REVEAL_DURATION`].
    pub fn progress(&self, id: SectionId, item: usize, now: f64) -> f32 {
        let Some(seen) = self.first_seen[index(id)] else {
            return 0.0;
        };
        let local = now - seen - item as f64 * REVEAL_STAGGER;
        let t = (local / REVEAL_DURATION).clamp(0.0, 1.0);
        ease_out_cubic(t as f32)
    }

    /// Whether any entrance is still running at `now` (the renderer keeps
    /// repainting while this holds).
    pub fn animating(&self, now: f64) -> bool {
        // Generous per-section bound; item counts are small.
        const MAX_ITEMS: f64 = 12.0;
        self.first_seen.iter().flatten().any(|seen| {
            now - seen < REVEAL_DURATION + MAX_ITEMS * REVEAL_STAGGER
        })
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

fn index(id: SectionId) -> usize {
    SectionId::ALL
        .iter()
        .position(|s| *s == id)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_sections_have_zero_progress() {
        let reveal = Reveal::new();
        assert_eq!(reveal.progress(SectionId::Projects, 0, 100.0), 0.0);
        assert!(!reveal.animating(100.0));
    }

    #[test]
    fn progress_runs_from_zero_to_one() {
        let mut reveal = Reveal::new();
        reveal.mark_visible(SectionId::About, 10.0);

        assert_eq!(reveal.progress(SectionId::About, 0, 10.0), 0.0);
        let mid = reveal.progress(SectionId::About, 0, 10.25);
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(reveal.progress(SectionId::About, 0, 10.5), 1.0);
        assert_eq!(reveal.progress(SectionId::About, 0, 99.0), 1.0);
    }

    #[test]
    fn progress_is_monotone() {
        let mut reveal = Reveal::new();
        reveal.mark_visible(SectionId::Skills, 0.0);
        let mut prev = 0.0;
        for step in 0..=20 {
            let p = reveal.progress(SectionId::Skills, 0, f64::from(step) * 0.05);
            assert!(p >= prev);
            prev = p;
        }
    }

    #[test]
    fn later_items_are_staggered() {
        let mut reveal = Reveal::new();
        reveal.mark_visible(SectionId::Projects, 0.0);
        let first = reveal.progress(SectionId::Projects, 0, 0.3);
        let third = reveal.progress(SectionId::Projects, 2, 0.3);
        assert!(first > third);
        // Item 2 starts at 0.2s and has not finished by 0.3s.
        assert!(third < 1.0);
    }

    #[test]
    fn reveal_happens_once() {
        let mut reveal = Reveal::new();
        reveal.mark_visible(SectionId::About, 10.0);
        reveal.mark_visible(SectionId::About, 50.0);
        // Re-sighting must not restart the animation.
        assert_eq!(reveal.progress(SectionId::About, 0, 50.0), 1.0);
    }
}
