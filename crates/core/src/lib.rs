pub mod content;
pub mod nav;
pub mod reveal;
pub mod section;
pub mod theme;

pub use content::{Content, ContentError, Project};
pub use nav::{NavController, ScrollRequest};
pub use reveal::Reveal;
pub use section::{SectionId, SectionLayout};
pub use theme::ThemeToken;
