pub mod resume;

pub use resume::{
    Content, ContentError, Education, Experience, Extra, PersonalInfo, Project, Skill,
    SocialLinks,
};
