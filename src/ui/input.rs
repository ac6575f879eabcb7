use ratatui::{
    Frame,
    prelude::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Focus};
use crate::theme::theme;
use crate::util::char_to_byte;

/// Text shown in the empty input.
pub const PLACEHOLDER: &str = "Search for a package";
/// Title suffix shown while a dispatched query has not been answered.
pub const SEARCHING: &str = "searching…";

/// What: Render the query input and place the terminal cursor.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (input, caret, focus, pending flag)
/// - `area`: Rectangle for the bordered input
///
/// Details:
/// - Shows "> " prefix; the placeholder replaces the text when the input is empty.
/// - The cursor is only placed while the input has focus.
pub fn render_input(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Search;

    let mut spans = vec![Span::styled(
        "> ",
        Style::default().fg(if focused { th.sapphire } else { th.overlay1 }),
    )];
    if app.input.is_empty() {
        spans.push(Span::styled(
            PLACEHOLDER,
            Style::default()
                .fg(th.overlay1)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::styled(
            app.input.as_str(),
            Style::default().fg(if focused { th.text } else { th.subtext0 }),
        ));
    }

    let mut block = Block::default()
        .title(Span::styled(
            " Search ",
            Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.mauve } else { th.surface2 }));
    if app.awaiting_results {
        block = block.title(
            Line::from(Span::styled(
                format!(" {SEARCHING} "),
                Style::default().fg(th.yellow),
            ))
            .right_aligned(),
        );
    }
    f.render_widget(
        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(th.base))
            .block(block),
        area,
    );

    if focused && area.width > 2 && area.height > 2 {
        let before = &app.input[..char_to_byte(&app.input, app.caret)];
        let offset = u16::try_from(before.width()).unwrap_or(u16::MAX);
        let max_x = area.x + area.width - 2;
        let x = (area.x + 3).saturating_add(offset).min(max_x);
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}
