use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid content document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("content document has no projects")]
    NoProjects,
}

/// Identity block shown in the hero and footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub first_name: String,
    pub nickname: String,
    pub last_name: String,
    pub title: String,
    pub university: String,
    pub year: String,
    pub location: String,
    pub email: String,
}

impl PersonalInfo {
    /// "First 'Nick' Last" as rendered in the hero banner.
    pub fn display_name(&self) -> String {
        format!(
            "{} '{}' {}",
            self.first_name, self.nickname, self.last_name
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub repo: String,
    /// Deployed URL, when one exists.
    pub link: Option<String>,
}

impl Project {
    /// Initials placeholder drawn in place of a project screenshot; the
    /// page ships no image assets.
    pub fn initials(&self) -> String {
        self.title
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub duration: String,
    pub credential: String,
    pub coursework: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
}

/// One "beyond the code" item in the extras section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extra {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
}

/// Everything the page renders. Compiled in by default; the terminal host
/// also accepts a JSON document with the same shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub personal: PersonalInfo,
    pub tagline: Vec<String>,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub extras: Vec<Extra>,
    pub links: SocialLinks,
}

impl Content {
    /// Parse a content document from JSON bytes.
    pub fn from_json(data: &[u8]) -> Result<Self, ContentError> {
        let content: Content = serde_json::from_slice(data)?;
        if content.projects.is_empty() {
            return Err(ContentError::NoProjects);
        }
        Ok(content)
    }

    /// The compiled-in portfolio data.
    pub fn builtin() -> Self {
        Self {
            personal: PersonalInfo {
                first_name: "Alex".to_string(),
                nickname: "Lex".to_string(),
                last_name: "Carter".to_string(),
                title: "Software Engineering".to_string(),
                university: "University of Washington".to_string(),
                year: "Junior".to_string(),
                location: "Seattle, WA".to_string(),
                email: "alex.lex.carter@example.com".to_string(),
            },
            tagline: vec![
                "Passion, work-ethic, ambition: table stakes. What sets me \
                 apart is that every project here started as a problem I \
                 personally ran into and refused to live with."
                    .to_string(),
                "Unranked pickup leagues and scattered workout plans both \
                 got the same treatment: a tool anyone with the same itch \
                 can pick up."
                    .to_string(),
                "I want to build things that show up in people's everyday \
                 routines, with my name in the credits."
                    .to_string(),
            ],
            experiences: vec![Experience {
                title: "Software Engineering Intern".to_string(),
                company: "TBA".to_string(),
                duration: "Fall 2026".to_string(),
                description: "Incoming internship, details to be announced."
                    .to_string(),
                technologies: vec![
                    "Rust".to_string(),
                    "TypeScript".to_string(),
                    "PostgreSQL".to_string(),
                ],
            }],
            projects: vec![
                Project {
                    title: "TrailKit".to_string(),
                    description: "Workout routine generator driven by the \
                                  user's biometrics and preferences."
                        .to_string(),
                    technologies: vec![
                        "Rust".to_string(),
                        "egui".to_string(),
                        "WebAssembly".to_string(),
                    ],
                    repo: "https://github.com/alexcarter/trailkit".to_string(),
                    link: Some("https://trailkit.example.com".to_string()),
                },
                Project {
                    title: "RankBot".to_string(),
                    description: "Competitive league essential: match \
                                  tracking, leaderboards, and player stats \
                                  inside your chat server."
                        .to_string(),
                    technologies: vec![
                        "Python".to_string(),
                        "Discord Bot API".to_string(),
                    ],
                    repo: "https://github.com/alexcarter/rankbot".to_string(),
                    link: None,
                },
            ],
            education: vec![Education {
                degree: "Data Science + Computer Engineering".to_string(),
                school: "University of Washington".to_string(),
                duration: "2023 - 2027".to_string(),
                credential: "B.S.E.".to_string(),
                coursework: vec![
                    "Data Structures & Algorithms".to_string(),
                    "Discrete Mathematics".to_string(),
                    "Computer Organization".to_string(),
                    "Linear Algebra".to_string(),
                ],
            }],
            skills: vec![
                Skill { name: "Rust".to_string() },
                Skill { name: "C++".to_string() },
                Skill { name: "Python".to_string() },
                Skill { name: "JavaScript".to_string() },
                Skill { name: "Java".to_string() },
                Skill { name: "CSS".to_string() },
                Skill { name: "SQL".to_string() },
            ],
            extras: vec![
                Extra {
                    title: "Pickup basketball".to_string(),
                    detail: "Weekend league regular; RankBot exists because \
                             our scorekeeping was a group chat."
                        .to_string(),
                },
                Extra {
                    title: "Trail running".to_string(),
                    detail: "Slowly working through the state's 100 best \
                             trails list."
                        .to_string(),
                },
                Extra {
                    title: "Mechanical keyboards".to_string(),
                    detail: "Three builds deep. It is not a problem yet."
                        .to_string(),
                },
            ],
            links: SocialLinks {
                github: "https://github.com/alexcarter".to_string(),
                linkedin: "https://www.linkedin.com/in/alex-lex-carter".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_content_is_complete() {
        let content = Content::builtin();
        assert!(!content.tagline.is_empty());
        assert!(!content.experiences.is_empty());
        assert!(!content.projects.is_empty());
        assert!(!content.education.is_empty());
        assert!(!content.skills.is_empty());
        assert!(!content.extras.is_empty());
        assert_eq!(content.personal.display_name(), "Alex 'Lex' Carter");
    }

    #[test]
    fn project_initials_fall_back_for_missing_images() {
        let project = Project {
            title: "Rank Bot".to_string(),
            description: String::new(),
            technologies: Vec::new(),
            repo: String::new(),
            link: None,
        };
        assert_eq!(project.initials(), "RB");
    }

    #[test]
    fn from_json_round_trips_builtin() {
        let json = serde_json::to_vec(&Content::builtin()).unwrap();
        let parsed = Content::from_json(&json).unwrap();
        assert_eq!(parsed.projects.len(), 2);
    }

    #[test]
    fn from_json_rejects_garbage_and_empty_documents() {
        assert!(matches!(
            Content::from_json(b"not json"),
            Err(ContentError::Json(_))
        ));

        let mut empty = Content::builtin();
        empty.projects.clear();
        let json = serde_json::to_vec(&empty).unwrap();
        assert!(matches!(
            Content::from_json(&json),
            Err(ContentError::NoProjects)
        ));
    }
}
