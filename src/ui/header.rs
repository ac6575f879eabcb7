use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::theme::theme;

/// Card title shown above the widget.
pub const TITLE: &str = "Tags Input Component with NPM Search";
/// Caption shown under the title.
pub const DESCRIPTION: &str = "Add NPM packages as tags to your project!";

/// What: Render the header card with title and caption.
pub fn render_header(f: &mut Frame, area: Rect) {
    let th = theme();
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(DESCRIPTION, Style::default().fg(th.subtext0))),
    ];
    let card = Paragraph::new(lines).style(Style::default().bg(th.base)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface2)),
    );
    f.render_widget(card, area);
}
