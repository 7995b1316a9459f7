//! Typed shapes for the embedded portfolio data.
//!
//! These mirror the JSON files under `data/` one-to-one. Deserialization
//! happens once at startup, before the terminal enters raw mode, so a
//! malformed data file fails loudly instead of corrupting the session.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub philosophy: Vec<String>,
    pub timeline: Vec<TimelineEntry>,
    pub education: Vec<Education>,
    pub contact: ContactLinks,
    pub stats: Stats,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub year: i32,
    pub event: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactLinks {
    pub linkedin: String,
    pub github: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub years_experience: u32,
    pub engineers_led: u32,
    pub developers_impacted: u32,
    pub clients_served: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub title: String,
    pub start_year: i32,
    /// `None` = current position ("Present").
    pub end_year: Option<i32>,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

impl Experience {
    /// "2019–Present" style year range for subtitles.
    pub fn year_range(&self) -> String {
        match self.end_year {
            Some(end) => format!("{}–{}", self.start_year, end),
            None => format!("{}–Present", self.start_year),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub description: String,
    pub technologies: Vec<String>,
    pub role: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenSourceProject {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub language: String,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experience_year_range_formats_present() {
        let exp: Experience = serde_json::from_str(
            r#"{"id":"x","company":"Acme","title":"Engineer","startYear":2019,
                "endYear":null,"description":"","achievements":[],"technologies":[]}"#,
        )
        .unwrap();
        assert_eq!(exp.year_range(), "2019–Present");
    }

    #[test]
    fn experience_year_range_formats_closed() {
        let exp: Experience = serde_json::from_str(
            r#"{"id":"x","company":"Acme","title":"Engineer","startYear":2016,
                "endYear":2019,"description":"","achievements":[],"technologies":[]}"#,
        )
        .unwrap();
        assert_eq!(exp.year_range(), "2016–2019");
    }
}
