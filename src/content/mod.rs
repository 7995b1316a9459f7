//! # Content
//!
//! The portfolio's actual substance: typed records deserialized from the
//! JSON files under `data/` (embedded at compile time) plus the markdown
//! writing posts, shaped into the [`Catalog`] the navigation layer moves
//! over.
//!
//! Deserialization failures here are programming errors (the data ships
//! inside the binary), so the builder fails loudly — and it runs before
//! the terminal enters raw mode.

pub mod types;
pub mod writings;

use crate::core::catalog::{Catalog, Category, CategoryId, Item, Payload, SettingKind};
use crate::core::settings::Settings;
use self::types::{Experience, OpenSourceProject, Profile, Project, Skill};

static PROFILE_JSON: &str = include_str!("../../data/profile.json");
static EXPERIENCE_JSON: &str = include_str!("../../data/experience.json");
static PROJECTS_JSON: &str = include_str!("../../data/projects.json");
static OPENSOURCE_JSON: &str = include_str!("../../data/opensource.json");
static SKILLS_JSON: &str = include_str!("../../data/skills.json");

/// The profile record alone (the boot screen needs the name before the
/// catalog exists).
pub fn load_profile() -> Profile {
    serde_json::from_str(PROFILE_JSON).expect("data/profile.json is malformed")
}

/// Build the session catalog. `settings` feeds the settings items'
/// subtitles, so callers rebuild (and re-sync the navigator) after a
/// settings change; the shape is identical every time.
pub fn build_catalog(settings: &Settings) -> Catalog {
    let profile = load_profile();
    let experiences: Vec<Experience> =
        serde_json::from_str(EXPERIENCE_JSON).expect("data/experience.json is malformed");
    let projects: Vec<Project> =
        serde_json::from_str(PROJECTS_JSON).expect("data/projects.json is malformed");
    let opensource: Vec<OpenSourceProject> =
        serde_json::from_str(OPENSOURCE_JSON).expect("data/opensource.json is malformed");
    let skills: Vec<Skill> =
        serde_json::from_str(SKILLS_JSON).expect("data/skills.json is malformed");

    Catalog::new(vec![
        profile_category(profile, skills),
        experience_category(experiences),
        projects_category(projects),
        opensource_category(opensource),
        writing_category(),
        settings_category(settings),
    ])
}

fn profile_category(profile: Profile, skills: Vec<Skill>) -> Category {
    let mut items = vec![
        Item {
            id: "about".into(),
            label: profile.name.clone(),
            subtitle: Some(profile.title.clone()),
            icon: None,
            payload: Some(Payload::Profile(profile.clone())),
        },
        Item {
            id: "philosophy".into(),
            label: "Philosophy".into(),
            subtitle: Some("Guiding principles".into()),
            icon: Some("brain".into()),
            payload: Some(Payload::Philosophy(profile.philosophy.clone())),
        },
        Item {
            id: "education".into(),
            label: "Education".into(),
            subtitle: profile.education.first().map(|e| e.institution.clone()),
            icon: None,
            payload: Some(Payload::Education(profile.education.clone())),
        },
        Item {
            id: "contact".into(),
            label: "Contact".into(),
            subtitle: Some("Get in touch".into()),
            icon: None,
            payload: Some(Payload::Contact(profile.contact.clone())),
        },
    ];
    items.extend(skills.into_iter().map(|skill| Item {
        id: skill.id.clone(),
        label: skill.name.clone(),
        subtitle: Some(truncate(&skill.description, 50)),
        icon: skill.icon.clone(),
        payload: Some(Payload::Skill(skill)),
    }));
    Category {
        id: CategoryId::Profile,
        label: "Profile",
        icon: "user",
        items,
    }
}

fn experience_category(experiences: Vec<Experience>) -> Category {
    Category {
        id: CategoryId::Experience,
        label: "Experience",
        icon: "briefcase",
        items: experiences
            .into_iter()
            .map(|exp| Item {
                id: exp.id.clone(),
                label: exp.title.clone(),
                subtitle: Some(format!("{} · {}", exp.company, exp.year_range())),
                icon: None,
                payload: Some(Payload::Experience(exp)),
            })
            .collect(),
    }
}

fn projects_category(projects: Vec<Project>) -> Category {
    Category {
        id: CategoryId::Projects,
        label: "Projects",
        icon: "folder",
        items: projects
            .into_iter()
            .map(|project| Item {
                id: project.id.clone(),
                label: project.name.clone(),
                subtitle: Some(format!("{} · {}", project.role, project.year)),
                icon: None,
                payload: Some(Payload::Project(project)),
            })
            .collect(),
    }
}

fn opensource_category(projects: Vec<OpenSourceProject>) -> Category {
    Category {
        id: CategoryId::OpenSource,
        label: "Open Source",
        icon: "globe",
        items: projects
            .into_iter()
            .map(|project| Item {
                id: project.id.clone(),
                label: project.name.clone(),
                subtitle: Some(project.language.clone()),
                icon: None,
                payload: Some(Payload::OpenSource(project)),
            })
            .collect(),
    }
}

fn writing_category() -> Category {
    Category {
        id: CategoryId::Writing,
        label: "Writing",
        icon: "pencil",
        items: writings::ALL
            .iter()
            .map(|post| Item {
                id: post.id.into(),
                label: post.title.into(),
                subtitle: Some(post.description.into()),
                icon: None,
                payload: Some(Payload::Writing(*post)),
            })
            .collect(),
    }
}

fn settings_category(settings: &Settings) -> Category {
    let sound_state = if settings.sound_enabled {
        "Enabled"
    } else {
        "Disabled"
    };
    Category {
        id: CategoryId::Settings,
        label: "Settings",
        icon: "gear",
        items: vec![
            Item {
                id: "theme".into(),
                label: "Theme".into(),
                subtitle: Some(settings.theme.label().into()),
                icon: None,
                payload: Some(Payload::Setting(SettingKind::Theme)),
            },
            Item {
                id: "sound".into(),
                label: "Sound".into(),
                subtitle: Some(sound_state.into()),
                icon: None,
                payload: Some(Payload::Setting(SettingKind::Sound)),
            },
            Item {
                id: "credits".into(),
                label: "Credits".into(),
                subtitle: Some("About this app".into()),
                icon: None,
                payload: Some(Payload::Setting(SettingKind::Credits)),
            },
        ],
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}
