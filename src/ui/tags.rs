use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Focus};
use crate::theme::theme;
use crate::util::truncate_to_width;

/// Removal marker drawn at the end of every chip.
pub const REMOVE_MARKER: &str = "✕";

/// One chip placed on a row of the tag area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChipSlot {
    /// Index into `AppState::tags`.
    pub index: usize,
    /// Text shown for the tag (possibly truncated).
    pub label: String,
    /// Column offset of the chip inside the row.
    pub x: u16,
    /// Column offset of the removal marker inside the row.
    pub marker_x: u16,
}

fn width_u16(s: &str) -> u16 {
    u16::try_from(s.width()).unwrap_or(u16::MAX)
}

/// What: Flow chips left to right, wrapping onto new rows.
///
/// Inputs:
/// - `names`: Tag names in insertion order
/// - `width`: Inner width of the tag area
///
/// Output:
/// - Rows of placed chips. Each chip is ` label ✕` followed by a one-cell gap.
///
/// Details:
/// - Labels too wide for a row on their own are truncated with an ellipsis.
#[must_use]
pub fn layout_chips(names: &[&str], width: u16) -> Vec<Vec<ChipSlot>> {
    let mut rows: Vec<Vec<ChipSlot>> = Vec::new();
    if width < 5 {
        return rows;
    }
    let mut row: Vec<ChipSlot> = Vec::new();
    let mut cursor: u16 = 0;
    for (index, name) in names.iter().enumerate() {
        let label = truncate_to_width(name, usize::from(width - 4));
        let chip_w = width_u16(&label) + 4;
        if cursor > 0 && cursor + chip_w > width {
            rows.push(std::mem::take(&mut row));
            cursor = 0;
        }
        let marker_x = cursor + width_u16(&label) + 2;
        row.push(ChipSlot {
            index,
            label,
            x: cursor,
            marker_x,
        });
        cursor += chip_w + 1;
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

/// What: Height of the tag area for the current tags, borders included.
///
/// Output:
/// - `0` when there are no tags (the row is not drawn at all).
#[must_use]
pub fn row_height(app: &AppState, width: u16) -> u16 {
    if app.tags.is_empty() {
        return 0;
    }
    let names: Vec<&str> = app.tags.iter().map(|t| t.name.as_str()).collect();
    let rows = layout_chips(&names, width.saturating_sub(2)).len();
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
}

/// What: Render selected tags as removable chips and record marker rectangles.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (tags, focus, chip cursor)
/// - `area`: Area reserved by the layout; empty when there are no tags
///
/// Details:
/// - The focused chip is highlighted while the tag row has focus.
/// - Only markers on visible rows are recorded in `tag_remove_rects`.
pub fn render_tags(f: &mut Frame, app: &mut AppState, area: Rect) {
    app.tag_remove_rects.clear();
    if app.tags.is_empty() || area.height < 3 {
        return;
    }
    let th = theme();
    let focused = app.focus == Focus::Tags;
    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    let names: Vec<&str> = app.tags.iter().map(|t| t.name.as_str()).collect();
    let rows = layout_chips(&names, inner.width);

    let mut lines: Vec<Line> = Vec::with_capacity(rows.len());
    for (ri, row) in rows.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        for slot in row {
            let current = focused && slot.index == app.tag_cursor;
            let chip_style = if current {
                Style::default()
                    .fg(th.crust)
                    .bg(th.lavender)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(th.text).bg(th.surface1)
            };
            spans.push(Span::styled(format!(" {} ", slot.label), chip_style));
            spans.push(Span::styled(REMOVE_MARKER, chip_style.fg(th.red)));
            spans.push(Span::raw(" "));
            if let Ok(dy) = u16::try_from(ri)
                && dy < inner.height
                && let Some(tag) = app.tags.get(slot.index)
            {
                app.tag_remove_rects.push((
                    (inner.x + slot.marker_x, inner.y + dy, 1, 1),
                    tag.name.clone(),
                ));
            }
        }
        lines.push(Line::from(spans));
    }

    let title = format!(" Tags ({}) ", app.tags.len());
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.mauve } else { th.surface2 }));
    f.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(th.mantle))
            .block(block),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Chips wrap once a row is full and markers sit after each label.
    ///
    /// Inputs:
    /// - `react` (9 cells), `vue` (7 cells), `lodash` (10 cells) in a 20-cell row.
    ///
    /// Output:
    /// - Two rows; marker offsets follow the label widths.
    fn tags_layout_wraps() {
        let rows = layout_chips(&["react", "vue", "lodash"], 20);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[0][0].marker_x, 7);
        assert_eq!(rows[0][1].x, 10);
        assert_eq!(rows[0][1].marker_x, 15);
        assert_eq!(rows[1][0].label, "lodash");
        assert_eq!(rows[1][0].x, 0);
    }

    #[test]
    /// What: Oversized labels are truncated to fit a row.
    fn tags_layout_truncates_long_names() {
        let rows = layout_chips(&["a-very-long-package-name"], 12);
        assert_eq!(rows.len(), 1);
        assert!(rows[0][0].label.width() <= 8);
        assert!(rows[0][0].label.ends_with('…'));
    }

    #[test]
    /// What: No tags means no row.
    fn tags_row_height_zero_when_empty() {
        assert_eq!(row_height(&AppState::default(), 40), 0);
    }
}
