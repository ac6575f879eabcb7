use ratatui::{
    Frame,
    prelude::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{AppState, Focus};
use crate::theme::{KeyChord, theme};

fn first_label(list: &[KeyChord]) -> String {
    list.first().map_or_else(|| "-".to_string(), KeyChord::label)
}

/// What: Render a one-line keybinding hint bar.
///
/// Details:
/// - Hints follow the focused part; labels come from the configured keymap.
pub fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let km = &app.keymap;
    let hints: Vec<(String, &str)> = match app.focus {
        Focus::Search => vec![
            ("↑/↓".to_string(), "move"),
            ("Enter".to_string(), "add"),
            ("Esc".to_string(), "clear"),
            (first_label(&km.toggle_focus), "tags"),
            (first_label(&km.exit), "quit"),
        ],
        Focus::Tags => vec![
            ("←/→".to_string(), "move"),
            (first_label(&km.remove_tag), "remove"),
            (first_label(&km.toggle_focus), "search"),
            (first_label(&km.exit), "quit"),
        ],
    };
    let mut spans: Vec<Span> = Vec::new();
    for (i, (key, what)) in hints.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default().fg(th.overlay1)));
        }
        spans.push(Span::styled(key, Style::default().fg(th.sapphire)));
        spans.push(Span::styled(format!(" {what}"), Style::default().fg(th.subtext1)));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(th.base)),
        area,
    );
}
