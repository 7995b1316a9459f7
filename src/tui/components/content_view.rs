//! # Content Views
//!
//! Payload-directed rendering for the detail panel: each content class
//! gets its own layout, all produced as plain `Text` so the panel can
//! measure and scroll it. Nothing here errors — an item with no payload
//! renders a placeholder.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

use crate::content::types::{
    ContactLinks, Education, Experience, OpenSourceProject, Profile, Project, Skill,
};
use crate::content::writings::WritingPost;
use crate::core::catalog::{Item, Payload, SettingKind};
use crate::core::settings::Settings;
use crate::tui::markdown;

const BODY_FG: Color = Color::White;

/// Render an item's payload. The theme setting is handled separately (it
/// embeds the interactive swatch grid, not static text).
pub fn render(item: &Item, settings: &Settings) -> Text<'static> {
    match &item.payload {
        Some(Payload::Profile(profile)) => profile_view(profile),
        Some(Payload::Philosophy(lines)) => philosophy_view(lines),
        Some(Payload::Education(entries)) => education_view(entries),
        Some(Payload::Contact(contact)) => contact_view(contact),
        Some(Payload::Skill(skill)) => skill_view(skill),
        Some(Payload::Experience(exp)) => experience_view(exp),
        Some(Payload::Project(project)) => project_view(project),
        Some(Payload::OpenSource(project)) => opensource_view(project),
        Some(Payload::Writing(post)) => writing_view(post),
        Some(Payload::Setting(SettingKind::Sound)) => sound_view(settings),
        Some(Payload::Setting(SettingKind::Credits)) => credits_view(),
        // Theme gets the swatch grid; this text only shows if it's ever
        // rendered statically.
        Some(Payload::Setting(SettingKind::Theme)) => {
            plain(vec![dim_line("Choose a theme from the grid.")])
        }
        None => plain(vec![dim_line("Content coming soon...")]),
    }
}

fn plain(lines: Vec<Line<'static>>) -> Text<'static> {
    Text::from(lines)
}

fn dim_line(s: &str) -> Line<'static> {
    Line::from(Span::styled(
        s.to_owned(),
        Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
    ))
}

fn heading(s: &str) -> Line<'static> {
    Line::from(Span::styled(
        s.to_owned(),
        Style::default()
            .fg(BODY_FG)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}

fn body(s: &str) -> Line<'static> {
    Line::from(Span::styled(s.to_owned(), Style::default().fg(BODY_FG)))
}

fn labeled(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        ),
        Span::styled(value.to_owned(), Style::default().fg(BODY_FG)),
    ])
}

fn bullet(s: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("- ", Style::default().fg(Color::DarkGray)),
        Span::styled(s.to_owned(), Style::default().fg(BODY_FG)),
    ])
}

/// "[rust] [kafka] [cli]"-style tag row.
fn tag_row(tags: &[String]) -> Line<'static> {
    let mut spans = Vec::new();
    for tag in tags {
        spans.push(Span::styled(
            format!("[{tag}]"),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn blank() -> Line<'static> {
    Line::default()
}

fn profile_view(profile: &Profile) -> Text<'static> {
    let mut lines = vec![
        body(&profile.bio),
        blank(),
        heading("Stats"),
        labeled("Years in the field", &profile.stats.years_experience.to_string()),
        labeled("Engineers led", &profile.stats.engineers_led.to_string()),
        labeled(
            "Developers impacted",
            &format!("{}+", profile.stats.developers_impacted),
        ),
        labeled("Clients served", &profile.stats.clients_served.to_string()),
        blank(),
        heading("Timeline"),
    ];
    for entry in &profile.timeline {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}  ", entry.year),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(entry.event.clone(), Style::default().fg(BODY_FG)),
        ]));
    }
    plain(lines)
}

fn philosophy_view(principles: &[String]) -> Text<'static> {
    let mut lines = vec![dim_line("Guiding principles, in no particular order."), blank()];
    for principle in principles {
        lines.push(bullet(principle));
        lines.push(blank());
    }
    plain(lines)
}

fn education_view(entries: &[Education]) -> Text<'static> {
    let mut lines = Vec::new();
    for entry in entries {
        lines.push(body(&entry.degree));
        lines.push(dim_line(&format!("{} · {}", entry.institution, entry.year)));
        lines.push(blank());
    }
    plain(lines)
}

fn contact_view(contact: &ContactLinks) -> Text<'static> {
    plain(vec![
        labeled("Email", &contact.email),
        labeled("GitHub", &contact.github),
        labeled("LinkedIn", &contact.linkedin),
        blank(),
        dim_line("Always happy to talk systems."),
    ])
}

fn skill_view(skill: &Skill) -> Text<'static> {
    plain(vec![body(&skill.description)])
}

fn experience_view(exp: &Experience) -> Text<'static> {
    let mut lines = vec![
        labeled("Company", &exp.company),
        labeled("Years", &exp.year_range()),
        blank(),
        body(&exp.description),
        blank(),
        heading("Highlights"),
    ];
    for achievement in &exp.achievements {
        lines.push(bullet(achievement));
    }
    lines.push(blank());
    lines.push(tag_row(&exp.technologies));
    plain(lines)
}

fn project_view(project: &Project) -> Text<'static> {
    plain(vec![
        labeled("Role", &project.role),
        labeled("Year", &project.year.to_string()),
        blank(),
        body(&project.description),
        blank(),
        tag_row(&project.technologies),
    ])
}

fn opensource_view(project: &OpenSourceProject) -> Text<'static> {
    plain(vec![
        labeled("Language", &project.language),
        labeled("Repo", &project.url),
        blank(),
        body(&project.description),
        blank(),
        tag_row(&project.tags),
    ])
}

fn writing_view(post: &WritingPost) -> Text<'static> {
    let mut text = Text::from(vec![
        dim_line(&format!("{} · {}", post.date, post.tags.join(", "))),
        blank(),
    ]);
    text.lines.extend(markdown::render(post.body, BODY_FG).lines);
    text
}

fn sound_view(settings: &Settings) -> Text<'static> {
    let state = if settings.sound_enabled {
        Span::styled(
            "Enabled",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            "Disabled",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    };
    plain(vec![
        Line::from(vec![
            Span::styled("Navigation sounds: ", Style::default().fg(BODY_FG)),
            state,
        ]),
        blank(),
        dim_line("Enter toggles. Cues use the terminal bell."),
    ])
}

fn credits_view() -> Text<'static> {
    plain(vec![
        body("An homage to the PlayStation 3's XrossMediaBar, rebuilt for the terminal."),
        blank(),
        bullet("Navigate with arrows, mouse, wheel, or drag"),
        bullet("Share a view by copying the window title's #/fragment"),
        bullet("Launch with --link '#/projects/ledgerline' to jump straight in"),
        blank(),
        dim_line("Built with ratatui."),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use crate::core::catalog::CategoryId;

    #[test]
    fn every_real_item_renders_nonempty_content() {
        let settings = Settings::default();
        let catalog = content::build_catalog(&settings);
        for category in catalog.categories() {
            for item in &category.items {
                if matches!(item.payload, Some(Payload::Setting(SettingKind::Theme))) {
                    continue; // interactive grid, not static text
                }
                let text = render(item, &settings);
                assert!(
                    !text.lines.is_empty(),
                    "{}/{} rendered empty",
                    category.label,
                    item.id
                );
            }
        }
    }

    #[test]
    fn missing_payload_renders_placeholder() {
        let item = Item {
            id: "x".into(),
            label: "X".into(),
            subtitle: None,
            icon: None,
            payload: None,
        };
        let text = render(&item, &Settings::default());
        let rendered: String = text
            .lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.as_ref())
            .collect();
        assert!(rendered.contains("coming soon"));
    }

    #[test]
    fn sound_view_tracks_the_flag() {
        let catalog = content::build_catalog(&Settings::default());
        let settings_cat = &catalog.categories()[CategoryId::Settings.index()];
        let sound = settings_cat.items.iter().find(|i| i.id == "sound").unwrap();

        let on = render(sound, &Settings::default());
        let on_text: String = on
            .lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.as_ref())
            .collect();
        assert!(on_text.contains("Enabled"));

        let muted = Settings {
            sound_enabled: false,
            ..Settings::default()
        };
        let off = render(sound, &muted);
        let off_text: String = off
            .lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.as_ref())
            .collect();
        assert!(off_text.contains("Disabled"));
    }
}
