use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use super::config::THEME_SKELETON_CONTENT;
use super::parsing::{parse_color_value, split_assignment};
use super::paths::{config_dir, resolve_config_file};
use super::types::Theme;

/// Process-wide palette, loaded once on first use.
static THEME_STORE: OnceLock<Theme> = OnceLock::new();

fn load_initial_theme() -> Theme {
    if let Some(path) = resolve_config_file("theme.conf") {
        return load_theme_from_file(&path);
    }
    let target = config_dir().join("theme.conf");
    if !target.exists() {
        let _ = fs::write(&target, THEME_SKELETON_CONTENT);
    }
    Theme::default()
}

/// What: Read a `theme.conf` file and apply its colors over the default palette.
///
/// Inputs:
/// - `path`: Theme file location
///
/// Output:
/// - Resulting palette; defaults when the file cannot be read.
pub(crate) fn load_theme_from_file(path: &Path) -> Theme {
    match fs::read_to_string(path) {
        Ok(content) => {
            tracing::info!(path = %path.display(), "loaded theme configuration");
            parse_theme(&content)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read theme; using defaults");
            Theme::default()
        }
    }
}

/// What: Parse theme file text over the default palette.
///
/// Inputs:
/// - `content`: `key = color` lines
///
/// Output:
/// - Palette with recognized keys replaced.
///
/// Details:
/// - Accepts both descriptive names (`text_primary`) and short names (`text`).
/// - Unknown keys and unparsable colors are logged and skipped.
pub(crate) fn parse_theme(content: &str) -> Theme {
    let mut th = Theme::default();
    for line in content.lines() {
        let Some((key, val)) = split_assignment(line) else {
            continue;
        };
        let Some(color) = parse_color_value(val) else {
            tracing::warn!(key = %key, value = %val, "invalid theme color");
            continue;
        };
        let slot = match key.as_str() {
            "base" | "background_base" => &mut th.base,
            "mantle" | "background_mantle" => &mut th.mantle,
            "crust" | "background_crust" => &mut th.crust,
            "surface1" | "surface_level1" => &mut th.surface1,
            "surface2" | "surface_level2" => &mut th.surface2,
            "overlay1" | "overlay_primary" => &mut th.overlay1,
            "overlay2" | "overlay_secondary" => &mut th.overlay2,
            "text" | "text_primary" => &mut th.text,
            "subtext0" | "text_secondary" => &mut th.subtext0,
            "subtext1" | "text_tertiary" => &mut th.subtext1,
            "sapphire" | "accent_interactive" => &mut th.sapphire,
            "mauve" | "accent_heading" => &mut th.mauve,
            "lavender" | "accent_emphasis" => &mut th.lavender,
            "green" | "semantic_success" => &mut th.green,
            "yellow" | "semantic_warning" => &mut th.yellow,
            "red" | "semantic_error" => &mut th.red,
            _ => {
                tracing::warn!(key = %key, "unknown theme key");
                continue;
            }
        };
        *slot = color;
    }
    th
}

/// Return the application's theme palette.
///
/// Loaded from `theme.conf` in the config directory on first call; missing
/// keys keep the Catppuccin Mocha defaults.
pub fn theme() -> Theme {
    *THEME_STORE.get_or_init(load_initial_theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    /// What: Theme overrides apply to both key spellings and skip bad values.
    ///
    /// Inputs:
    /// - `text_primary` hex, `red` decimal, an invalid color and an unknown key.
    ///
    /// Output:
    /// - Overridden colors set; all others remain default.
    fn theme_parse_applies_known_keys() {
        let th = parse_theme(
            "text_primary = #ffffff\nred = 255,0,0\nmauve = nope\nsparkle = #000000\n",
        );
        let def = Theme::default();
        assert_eq!(th.text, Color::Rgb(255, 255, 255));
        assert_eq!(th.red, Color::Rgb(255, 0, 0));
        assert_eq!(th.mauve, def.mauve);
        assert_eq!(th.base, def.base);
    }
}
