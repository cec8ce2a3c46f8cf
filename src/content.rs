use std::sync::LazyLock;

use chrono::{DateTime, Datelike};
use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

pub static EXPERIENCE: LazyLock<Vec<Position>> =
    LazyLock::new(|| load("experience.json").expect("Should be able to parse experience.json"));
pub static SKILLS: LazyLock<Vec<SkillCategory>> =
    LazyLock::new(|| load("skills.json").expect("Should be able to parse skills.json"));
pub static HIGHLIGHTS: LazyLock<Vec<Highlight>> =
    LazyLock::new(|| load("highlights.json").expect("Should be able to parse highlights.json"));

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

/// Contact details of the person the site belongs to.
#[derive(Debug, Clone, Copy)]
pub struct SiteOwner {
    pub name: &'static str,
    pub initials: &'static str,
    pub role: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub phone_link: &'static str,
}

pub const OWNER: SiteOwner = SiteOwner {
    name: "Dylan Frehner",
    initials: "DF",
    role: "GenAI / AI Platform Engineer",
    email: "hi@dylanfrehner.com",
    phone: "(561)-327-3633",
    phone_link: "tel:+15613273633",
};

pub const ACHIEVEMENTS: [&str; 3] = [
    "#1 rank on Bittensor Subnet 62 (Ridges) with agentic software-engineering agent",
    "Shipped production medical-imaging inference pipeline (Subnet 76)",
    "End-to-end ownership of GenAI products with strong Python + cloud-native delivery",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub tech: Vec<String>,
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub icon: String,
    pub accent: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub accent: String,
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Parses an embedded JSON file from the `content` folder.
pub fn load<T: DeserializeOwned>(name: &str) -> Result<T, ContentError> {
    let file = Content::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    serde_json::from_slice(&file.data).map_err(|source| ContentError::Parse {
        name: name.to_string(),
        source,
    })
}

/// Year the site was built, used for the copyright line.
pub fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or(2025)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_loads_in_order() {
        let companies = EXPERIENCE
            .iter()
            .map(|p| p.company.as_str())
            .collect::<Vec<_>>();
        assert_eq!(companies, vec!["Bittensor Network", "Azumo", "Lambda"]);
        assert!(EXPERIENCE.iter().all(|p| !p.achievements.is_empty()));
    }

    #[test]
    fn test_skills_and_highlights_load() {
        assert_eq!(SKILLS.len(), 7);
        assert_eq!(SKILLS[0].title, "Generative AI / Agents");
        assert_eq!(HIGHLIGHTS.len(), 4);
        assert!(HIGHLIGHTS.iter().any(|h| h.title == "Production Ready"));
    }

    #[test]
    fn test_missing_content_file() {
        let res = load::<Vec<Highlight>>("nope.json");
        assert!(matches!(res, Err(ContentError::NotFound(name)) if name == "nope.json"));
    }

    #[test]
    fn test_malformed_content_file() {
        // experience entries don't have the shape of a highlight
        let res = load::<Vec<Highlight>>("experience.json");
        assert!(matches!(res, Err(ContentError::Parse { .. })));
    }

    #[test]
    fn test_build_year_is_plausible() {
        assert!(build_year() >= 2025);
    }
}
