//! # Settings
//!
//! The only state that outlives a session: `{theme, sound_enabled}`,
//! persisted as JSON at `~/.xmbfolio/settings.json`.
//!
//! Loading is forgiving per field: an unknown theme string or a
//! wrong-typed flag falls back to that field's default without discarding
//! the rest of the record. Saving is atomic (`.tmp` + rename) and
//! non-fatal on failure — a read-only home directory costs persistence,
//! never the session.
//!
//! There is no ambient settings singleton; the value is loaded once in
//! `main`, owned by the app state, and passed down.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Serialize;

/// PS3-style background themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColor {
    #[default]
    Blue,
    Red,
    Green,
    Purple,
    Orange,
    Pink,
}

impl ThemeColor {
    pub const ALL: [ThemeColor; 6] = [
        ThemeColor::Blue,
        ThemeColor::Red,
        ThemeColor::Green,
        ThemeColor::Purple,
        ThemeColor::Orange,
        ThemeColor::Pink,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeColor::Blue => "blue",
            ThemeColor::Red => "red",
            ThemeColor::Green => "green",
            ThemeColor::Purple => "purple",
            ThemeColor::Orange => "orange",
            ThemeColor::Pink => "pink",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }

    /// Display name for menu subtitles ("Blue", "Pink", ...).
    pub fn label(self) -> &'static str {
        match self {
            ThemeColor::Blue => "Blue",
            ThemeColor::Red => "Red",
            ThemeColor::Green => "Green",
            ThemeColor::Purple => "Purple",
            ThemeColor::Orange => "Orange",
            ThemeColor::Pink => "Pink",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub theme: ThemeColor,
    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeColor::Blue,
            sound_enabled: true,
        }
    }
}

/// Returns the path to `~/.xmbfolio/settings.json`.
pub fn settings_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".xmbfolio").join("settings.json"))
}

/// Decode a settings record, falling back per field.
///
/// The record is read as a loose JSON value rather than a typed struct so
/// one bad field ("theme": "mauve") can't invalidate the other.
fn decode(contents: &str) -> Settings {
    let defaults = Settings::default();
    let Ok(value) = serde_json::from_str::<serde_json::Value>(contents) else {
        return defaults;
    };
    Settings {
        theme: value
            .get("theme")
            .and_then(|v| v.as_str())
            .and_then(ThemeColor::parse)
            .unwrap_or(defaults.theme),
        sound_enabled: value
            .get("sound_enabled")
            .and_then(|v| v.as_bool())
            .unwrap_or(defaults.sound_enabled),
    }
}

/// Load settings, substituting defaults for anything missing or corrupt.
pub fn load() -> Settings {
    let Some(path) = settings_path() else {
        warn!("could not determine home directory, using default settings");
        return Settings::default();
    };
    match fs::read_to_string(&path) {
        Ok(contents) => {
            let settings = decode(&contents);
            debug!("settings loaded from {}", path.display());
            settings
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Settings::default(),
        Err(e) => {
            warn!("failed to read {}: {}", path.display(), e);
            Settings::default()
        }
    }
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Save settings. Failure is logged and otherwise swallowed.
pub fn save(settings: &Settings) {
    let Some(path) = settings_path() else {
        warn!("could not determine home directory, settings not saved");
        return;
    };
    if let Err(e) = atomic_write_json(&path, settings) {
        warn!("failed to save settings to {}: {}", path.display(), e);
    } else {
        debug!("settings saved to {}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_well_formed_record() {
        let s = decode(r#"{"theme":"purple","sound_enabled":false}"#);
        assert_eq!(s.theme, ThemeColor::Purple);
        assert!(!s.sound_enabled);
    }

    #[test]
    fn decode_unknown_theme_falls_back_alone() {
        let s = decode(r#"{"theme":"mauve","sound_enabled":false}"#);
        assert_eq!(s.theme, ThemeColor::Blue);
        assert!(!s.sound_enabled); // the valid field survives
    }

    #[test]
    fn decode_wrong_typed_flag_falls_back_alone() {
        let s = decode(r#"{"theme":"green","sound_enabled":"yes"}"#);
        assert_eq!(s.theme, ThemeColor::Green);
        assert!(s.sound_enabled);
    }

    #[test]
    fn decode_missing_fields_use_defaults() {
        assert_eq!(decode(r#"{}"#), Settings::default());
        assert_eq!(decode(r#"{"theme":"red"}"#).theme, ThemeColor::Red);
    }

    #[test]
    fn decode_garbage_uses_defaults() {
        assert_eq!(decode("not json at all"), Settings::default());
        assert_eq!(decode(""), Settings::default());
        assert_eq!(decode("[1,2,3]"), Settings::default());
    }

    #[test]
    fn encode_decode_round_trip() {
        let original = Settings {
            theme: ThemeColor::Orange,
            sound_enabled: false,
        };
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(decode(&json), original);
    }

    #[test]
    fn theme_color_round_trips_through_str() {
        for theme in ThemeColor::ALL {
            assert_eq!(ThemeColor::parse(theme.as_str()), Some(theme));
        }
        assert_eq!(ThemeColor::parse("chartreuse"), None);
    }
}
