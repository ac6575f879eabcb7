use std::fs;
use std::path::Path;

use super::config::SETTINGS_SKELETON_CONTENT;
use super::parsing::{parse_key_chord_list, split_assignment};
use super::paths::{config_dir, resolve_config_file};
use super::types::Settings;

/// Upper bound the registry accepts for the `size` parameter.
const MAX_RESULTS_LIMIT: u16 = 250;

/// What: Load user settings from `settings.conf`.
///
/// Output:
/// - Parsed [`Settings`]; `Settings::default()` when the file is missing or unreadable.
///
/// Details:
/// - When no settings file exists, a commented skeleton is written to the
///   config directory so users have something to edit.
#[must_use]
pub fn settings() -> Settings {
    let Some(path) = resolve_config_file("settings.conf") else {
        let target = config_dir().join("settings.conf");
        if !target.exists() {
            match fs::write(&target, SETTINGS_SKELETON_CONTENT) {
                Ok(()) => tracing::info!(path = %target.display(), "wrote default settings skeleton"),
                Err(e) => tracing::warn!(path = %target.display(), error = %e, "failed to write settings skeleton"),
            }
        }
        return Settings::default();
    };
    load_settings_from(&path)
}

/// What: Load settings from an explicit file path.
///
/// Inputs:
/// - `path`: Location of a `key = value` settings file
///
/// Output:
/// - Parsed settings, or defaults when the file cannot be read.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => {
            tracing::debug!(path = %path.display(), "loaded settings");
            parse_settings(&content)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
            Settings::default()
        }
    }
}

/// What: Parse `settings.conf` text into [`Settings`].
///
/// Inputs:
/// - `content`: Full file contents
///
/// Output:
/// - Settings with recognized keys applied over the defaults.
///
/// Details:
/// - Unknown keys and unparsable values are ignored.
/// - `results_limit` is clamped to 1..=250 and `dropdown_max_rows` to at least 1.
/// - A keybind line that parses to no chords keeps the default binding.
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for line in content.lines() {
        let Some((key, val)) = split_assignment(line) else {
            continue;
        };
        match key.as_str() {
            "debounce_ms" | "debounce" => {
                if let Ok(v) = val.parse::<u64>() {
                    out.debounce_ms = v;
                }
            }
            "registry_url" | "registry" => {
                let trimmed = val.trim_end_matches('/');
                if !trimmed.is_empty() {
                    out.registry_url = trimmed.to_string();
                }
            }
            "results_limit" | "size" => {
                if let Ok(v) = val.parse::<u16>() {
                    out.results_limit = v.clamp(1, MAX_RESULTS_LIMIT);
                }
            }
            "dropdown_max_rows" => {
                if let Ok(v) = val.parse::<u16>() {
                    out.dropdown_max_rows = v.max(1);
                }
            }
            "keybind_exit" => {
                let chords = parse_key_chord_list(val);
                if !chords.is_empty() {
                    out.keymap.exit = chords;
                }
            }
            "keybind_toggle_focus" => {
                let chords = parse_key_chord_list(val);
                if !chords.is_empty() {
                    out.keymap.toggle_focus = chords;
                }
            }
            "keybind_remove_tag" => {
                let chords = parse_key_chord_list(val);
                if !chords.is_empty() {
                    out.keymap.remove_tag = chords;
                }
            }
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    /// What: The shipped skeleton parses back to the defaults.
    ///
    /// Inputs:
    /// - `SETTINGS_SKELETON_CONTENT`.
    ///
    /// Output:
    /// - Every value equals `Settings::default()`.
    fn settings_skeleton_matches_defaults() {
        let parsed = parse_settings(SETTINGS_SKELETON_CONTENT);
        let def = Settings::default();
        assert_eq!(parsed.debounce_ms, def.debounce_ms);
        assert_eq!(parsed.registry_url, def.registry_url);
        assert_eq!(parsed.results_limit, def.results_limit);
        assert_eq!(parsed.dropdown_max_rows, def.dropdown_max_rows);
        assert_eq!(parsed.keymap.exit, def.keymap.exit);
        assert_eq!(parsed.keymap.remove_tag, def.keymap.remove_tag);
    }

    #[test]
    /// What: Values are applied, clamped, and invalid lines ignored.
    ///
    /// Inputs:
    /// - Overrides with an out-of-range limit, a trailing-slash URL, a bogus keybind.
    ///
    /// Output:
    /// - Clamped limit, trimmed URL, default keybind kept where parsing failed.
    fn settings_parse_overrides_and_clamps() {
        let s = parse_settings(
            "debounce_ms = 250\n\
             registry_url = http://localhost:4873/ # verdaccio\n\
             results_limit = 9999\n\
             dropdown_max_rows = 0\n\
             keybind_exit = Ctrl+Q\n\
             keybind_toggle_focus = ???\n\
             unknown_key = 1\n",
        );
        assert_eq!(s.debounce_ms, 250);
        assert_eq!(s.registry_url, "http://localhost:4873");
        assert_eq!(s.results_limit, 250);
        assert_eq!(s.dropdown_max_rows, 1);
        assert_eq!(s.keymap.exit[0].code, KeyCode::Char('q'));
        assert_eq!(s.keymap.exit[0].mods, KeyModifiers::CONTROL);
        assert_eq!(s.keymap.toggle_focus[0].code, KeyCode::Tab);
    }

    #[test]
    /// What: Settings load from a file on disk and fall back to defaults when missing.
    ///
    /// Inputs:
    /// - A temp file with `debounce_ms = 120`; a nonexistent path.
    ///
    /// Output:
    /// - 120 from the file; 500 for the missing path.
    fn settings_load_from_file_and_missing_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.conf");
        std::fs::write(&path, "debounce_ms = 120\n").expect("write settings");
        assert_eq!(load_settings_from(&path).debounce_ms, 120);
        assert_eq!(
            load_settings_from(&dir.path().join("missing.conf")).debounce_ms,
            500
        );
    }
}
