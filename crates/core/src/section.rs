use serde::{Deserialize, Serialize};

/// One labeled content region of the page. The declared order is the
/// navigation order; the scroll scan walks it in reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionId {
    About,
    Experience,
    Projects,
    Education,
    Skills,
    Extras,
}

impl SectionId {
    /// All sections in declared (navigation) order.
    pub const ALL: [SectionId; 6] = [
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Education,
        SectionId::Skills,
        SectionId::Extras,
    ];

    /// Display label for navigation affordances.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Education => "Education",
            SectionId::Skills => "Skills",
            SectionId::Extras => "Extras",
        }
    }

    /// Stable string key, used as the anchor identifier in every host.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Education => "education",
            SectionId::Skills => "skills",
            SectionId::Extras => "extras",
        }
    }

    fn index(self) -> usize {
        match self {
            SectionId::About => 0,
            SectionId::Experience => 1,
            SectionId::Projects => 2,
            SectionId::Education => 3,
            SectionId::Skills => 4,
            SectionId::Extras => 5,
        }
    }
}

/// Top offsets of each section's anchor in the host's logical-pixel space.
///
/// The hosting renderer records offsets as it lays sections out; a section
/// it never recorded behaves like a missing anchor and is skipped by the
/// scroll scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionLayout {
    tops: [Option<f32>; SectionId::ALL.len()],
}

impl SectionLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the top offset of a section's anchor.
    pub fn set(&mut self, id: SectionId, top: f32) {
        self.tops[id.index()] = Some(top);
    }

    /// Top offset of a section, if its anchor exists.
    pub fn top(&self, id: SectionId) -> Option<f32> {
        self.tops[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_order_matches_anchor_order() {
        let anchors: Vec<&str> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(
            anchors,
            ["about", "experience", "projects", "education", "skills", "extras"]
        );
    }

    #[test]
    fn layout_returns_none_for_unrecorded_sections() {
        let mut layout = SectionLayout::new();
        layout.set(SectionId::Projects, 1600.0);
        assert_eq!(layout.top(SectionId::Projects), Some(1600.0));
        assert_eq!(layout.top(SectionId::Skills), None);
    }
}
