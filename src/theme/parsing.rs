use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

use super::types::KeyChord;

/// What: Parse a single key identifier (e.g., "F5", "Esc", "Del", "q") into a [`KeyCode`].
///
/// Inputs:
/// - `s`: Raw key token from a configuration string.
///
/// Output:
/// - `Some(KeyCode)` on success; `None` when the input token is unsupported.
///
/// Details:
/// - Supports function keys, navigation keys, and single printable characters.
/// - Normalizes character keys to lowercase for consistent matching.
pub(crate) fn parse_key_identifier(s: &str) -> Option<KeyCode> {
    let t = s.trim();
    if let Some(num) = t
        .strip_prefix('F')
        .or_else(|| t.strip_prefix('f'))
        .and_then(|x| x.parse::<u8>().ok())
    {
        return Some(KeyCode::F(num));
    }
    match t.to_ascii_uppercase().as_str() {
        "ESC" => Some(KeyCode::Esc),
        "ENTER" | "RETURN" => Some(KeyCode::Enter),
        "TAB" => Some(KeyCode::Tab),
        "BACKTAB" => Some(KeyCode::BackTab),
        "BACKSPACE" => Some(KeyCode::Backspace),
        "DELETE" | "DEL" => Some(KeyCode::Delete),
        "HOME" => Some(KeyCode::Home),
        "END" => Some(KeyCode::End),
        "PAGEUP" | "PGUP" => Some(KeyCode::PageUp),
        "PAGEDOWN" | "PGDN" => Some(KeyCode::PageDown),
        "UP" => Some(KeyCode::Up),
        "DOWN" => Some(KeyCode::Down),
        "LEFT" => Some(KeyCode::Left),
        "RIGHT" => Some(KeyCode::Right),
        "SPACE" => Some(KeyCode::Char(' ')),
        _ => {
            let mut chars = t.chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                Some(KeyCode::Char(ch.to_ascii_lowercase()))
            } else {
                None
            }
        }
    }
}

/// What: Parse a full key chord such as "Ctrl+C" or "Shift+Tab" into a [`KeyChord`].
///
/// Inputs:
/// - `chord`: Text combining optional modifiers with a key token.
///
/// Output:
/// - `Some(KeyChord)` when parsing succeeds; `None` on an unknown key token.
///
/// Details:
/// - Recognizes Ctrl/Alt/Shift modifiers in any case.
/// - Normalizes `Shift+Tab` to the dedicated `BackTab` key code and clears modifiers.
pub(crate) fn parse_key_chord(chord: &str) -> Option<KeyChord> {
    let mut mods = KeyModifiers::empty();
    let mut key_part: Option<String> = None;
    for part in chord.split('+') {
        let p = part.trim();
        if p.is_empty() {
            continue;
        }
        match p.to_ascii_uppercase().as_str() {
            "CTRL" | "CONTROL" => mods |= KeyModifiers::CONTROL,
            "ALT" => mods |= KeyModifiers::ALT,
            "SHIFT" => mods |= KeyModifiers::SHIFT,
            other => key_part = Some(other.to_string()),
        }
    }
    if key_part.as_deref() == Some("TAB") && mods.contains(KeyModifiers::SHIFT) {
        return Some(KeyChord {
            code: KeyCode::BackTab,
            mods: KeyModifiers::empty(),
        });
    }
    let code = parse_key_identifier(key_part.as_deref().unwrap_or(""))?;
    Some(KeyChord { code, mods })
}

/// What: Parse a comma-separated list of chords, skipping invalid entries.
///
/// Inputs:
/// - `s`: Value such as `"Delete, Backspace"`.
///
/// Output:
/// - Parsed chords; empty when nothing parsed.
pub(crate) fn parse_key_chord_list(s: &str) -> Vec<KeyChord> {
    s.split(',').filter_map(parse_key_chord).collect()
}

/// What: Parse a color literal from configuration text into a [`Color`].
///
/// Inputs:
/// - `s`: Color text (comments already stripped).
///
/// Output:
/// - `Some(Color)` for `#RRGGBB` hex or `R,G,B` decimal triplets; `None` otherwise.
pub(crate) fn parse_color_value(s: &str) -> Option<Color> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    let h = t.strip_prefix('#').unwrap_or(t);
    if h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()) {
        let r = u8::from_str_radix(&h[0..2], 16).ok()?;
        let g = u8::from_str_radix(&h[2..4], 16).ok()?;
        let b = u8::from_str_radix(&h[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    let parts: Vec<&str> = t.split(',').collect();
    if parts.len() != 3 {
        return None;
    }
    let r = parts[0].trim().parse::<u8>().ok()?;
    let g = parts[1].trim().parse::<u8>().ok()?;
    let b = parts[2].trim().parse::<u8>().ok()?;
    Some(Color::Rgb(r, g, b))
}

/// What: Strip a trailing `// ...` or `# ...` comment from a config value.
///
/// Inputs:
/// - `s`: Raw value text after the `=`.
///
/// Output:
/// - Trimmed value without the comment.
///
/// Details:
/// - A marker only starts a comment when preceded by whitespace, so hex colors
///   (`#1e1e2e`) and URLs (`https://...`) survive intact.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    let s = s.trim();
    if s.starts_with("//") {
        return "";
    }
    let bytes = s.as_bytes();
    let cut = s
        .char_indices()
        .find(|&(i, ch)| {
            i > 0
                && bytes[i - 1].is_ascii_whitespace()
                && (ch == '#' || s[i..].starts_with("//"))
        })
        .map_or(s.len(), |(i, _)| i);
    s[..cut].trim()
}

/// What: Split a config line into a normalized key and a comment-free value.
///
/// Inputs:
/// - `line`: One raw line of a `key = value` file.
///
/// Output:
/// - `Some((key, value))` for assignments; `None` for blanks, comments, and malformed lines.
///
/// Details:
/// - Keys are lowercased with `.`, `-` and spaces folded to `_`.
pub(crate) fn split_assignment(line: &str) -> Option<(String, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }
    let (raw_key, raw_val) = trimmed.split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    Some((key, strip_inline_comment(raw_val.trim())))
}
