use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind the dropdown.
    pub mantle: Color,
    /// Darkest background shade, used as text on highlighted rows.
    pub crust: Color,
    /// Subtle surface color for chips and inactive borders.
    pub surface1: Color,
    /// Secondary surface color for borders.
    pub surface2: Color,
    /// Muted overlay line/border color (primary).
    pub overlay1: Color,
    /// Muted overlay line/border color (secondary).
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Tertiary text for captions and low-emphasis content.
    pub subtext1: Color,
    /// Accent color for interactive highlights.
    pub sapphire: Color,
    /// Accent color for headings and the focused border.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Error/danger state color, used by chip removal markers.
    pub red: Color,
    /// Accent color for the highlighted dropdown row.
    pub lavender: Color,
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            mantle: Color::Rgb(0x18, 0x18, 0x25),
            crust: Color::Rgb(0x11, 0x11, 0x1b),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            surface2: Color::Rgb(0x58, 0x5b, 0x70),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            overlay2: Color::Rgb(0x93, 0x99, 0xb2),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            subtext1: Color::Rgb(0xba, 0xc2, 0xde),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
        }
    }
}

/// User-configurable settings parsed from `settings.conf`.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Quiet period before a query is dispatched, in milliseconds.
    pub debounce_ms: u64,
    /// Registry base URL, without trailing slash.
    pub registry_url: String,
    /// Number of results requested per search (registry caps this at 250).
    pub results_limit: u16,
    /// Maximum dropdown height in rows before it scrolls.
    pub dropdown_max_rows: u16,
    /// Configurable key bindings.
    pub keymap: KeyMap,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            registry_url: "https://registry.npmjs.org".to_string(),
            results_limit: 20,
            dropdown_max_rows: 8,
            keymap: KeyMap::default(),
        }
    }
}

/// A single keyboard chord (modifiers + key).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyChord {
    /// Return a short display label such as "Ctrl+C", "Tab", "Del".
    #[must_use]
    pub fn label(&self) -> String {
        let mut parts: Vec<&'static str> = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl");
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt");
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift");
        }
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(ch) => ch.to_ascii_uppercase().to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Delete => "Del".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => "?".to_string(),
        };
        if parts.is_empty() || matches!(self.code, KeyCode::BackTab) {
            key
        } else {
            format!("{}+{}", parts.join("+"), key)
        }
    }

    /// Whether this chord matches a pressed key and modifier set.
    #[must_use]
    pub fn matches(&self, code: KeyCode, mods: KeyModifiers) -> bool {
        self.code == code && self.mods == mods
    }
}

/// Application key bindings.
/// Each action can have multiple chords.
#[derive(Clone, Debug)]
pub struct KeyMap {
    /// Quit the application.
    pub exit: Vec<KeyChord>,
    /// Move focus between the query input and the tag row.
    pub toggle_focus: Vec<KeyChord>,
    /// Remove the focused tag while the tag row has focus.
    pub remove_tag: Vec<KeyChord>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let none = KeyModifiers::empty();
        Self {
            exit: vec![KeyChord {
                code: KeyCode::Char('c'),
                mods: KeyModifiers::CONTROL,
            }],
            toggle_focus: vec![KeyChord {
                code: KeyCode::Tab,
                mods: none,
            }],
            remove_tag: vec![
                KeyChord {
                    code: KeyCode::Delete,
                    mods: none,
                },
                KeyChord {
                    code: KeyCode::Backspace,
                    mods: none,
                },
            ],
        }
    }
}

impl KeyMap {
    /// What: Test whether any chord in `list` matches a key press.
    ///
    /// Inputs:
    /// - `list`: Chords bound to one action
    /// - `code`/`mods`: Pressed key and modifiers
    ///
    /// Output:
    /// - `true` on the first matching chord.
    #[must_use]
    pub fn any(list: &[KeyChord], code: KeyCode, mods: KeyModifiers) -> bool {
        list.iter().any(|c| c.matches(code, mods))
    }
}
