//! Default configuration file contents written on first run.

/// Commented `settings.conf` written when no settings file exists yet.
pub const SETTINGS_SKELETON_CONTENT: &str = "# npmtag settings\n\
#\n\
# Format: key = value\n\
# Lines starting with # are comments. Inline comments need a space before # or //.\n\
#\n\
# Quiet period after the last keystroke before the registry is queried (milliseconds)\n\
debounce_ms = 500\n\
#\n\
# Registry base URL; the search endpoint is <registry_url>/-/v1/search\n\
registry_url = https://registry.npmjs.org\n\
#\n\
# Results requested per search (1-250)\n\
results_limit = 20\n\
#\n\
# Dropdown height in rows before it scrolls\n\
dropdown_max_rows = 8\n\
#\n\
# Key bindings (comma-separated chords, e.g. Ctrl+C, Shift+Tab, Del)\n\
keybind_exit = Ctrl+C\n\
keybind_toggle_focus = Tab\n\
keybind_remove_tag = Delete, Backspace\n";

/// Commented `theme.conf` documenting the recognized color keys.
pub const THEME_SKELETON_CONTENT: &str = "# npmtag theme\n\
#\n\
# Format: key = value, colors as #RRGGBB or R,G,B. Missing keys keep the\n\
# Catppuccin Mocha default.\n\
#\n\
# background_base = #1e1e2e\n\
# background_mantle = #181825\n\
# background_crust = #11111b\n\
# surface_level1 = #45475a\n\
# surface_level2 = #585b70\n\
# overlay_primary = #7f849c\n\
# overlay_secondary = #9399b2\n\
# text_primary = #cdd6f4\n\
# text_secondary = #a6adc8\n\
# text_tertiary = #bac2de\n\
# accent_interactive = #74c7ec\n\
# accent_heading = #cba6f7\n\
# accent_emphasis = #b4befe\n\
# semantic_success = #a6e3a1\n\
# semantic_warning = #f9e2af\n\
# semantic_error = #f38ba8\n";
