use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Package};
use crate::theme::{Theme, theme};
use crate::util::truncate_to_width;

/// Marker appended to rows whose package is already a tag.
pub const ADDED_MARKER: &str = "added";

/// What: Height of the dropdown for `count` candidates, borders included.
///
/// Inputs:
/// - `count`: Number of candidates
/// - `max_rows`: Configured row cap
/// - `room`: Rows available below the input
#[must_use]
pub fn dropdown_height(count: usize, max_rows: u16, room: u16) -> u16 {
    let rows = u16::try_from(count).unwrap_or(u16::MAX).min(max_rows.max(1));
    rows.saturating_add(2).min(room)
}

/// What: Build one dropdown row.
///
/// Details:
/// - Name, version, then as much of the description as fits.
/// - Already-tagged packages are dimmed and carry [`ADDED_MARKER`].
fn row<'a>(pkg: &'a Package, disabled: bool, width: u16, th: &Theme) -> ListItem<'a> {
    let (name_style, meta_style) = if disabled {
        let dim = Style::default().fg(th.overlay1).add_modifier(Modifier::DIM);
        (dim, dim)
    } else {
        (
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            Style::default().fg(th.overlay2),
        )
    };
    let mut segs = vec![
        Span::styled(pkg.name.as_str(), name_style),
        Span::styled(format!("  {}", pkg.version), meta_style),
    ];
    let used = pkg.name.width() + pkg.version.width() + 2;
    let tail = if disabled { ADDED_MARKER.width() + 2 } else { 0 };
    // Two cells go to the highlight symbol.
    let budget = usize::from(width).saturating_sub(used + tail + 2);
    if !pkg.description.is_empty() && budget > 4 {
        let desc = truncate_to_width(&pkg.description, budget - 2);
        segs.push(Span::styled(
            format!("  {desc}"),
            Style::default().fg(if disabled { th.overlay1 } else { th.subtext0 }),
        ));
    }
    if disabled {
        segs.push(Span::raw("  "));
        segs.push(Span::styled(
            ADDED_MARKER,
            Style::default().fg(th.green).add_modifier(Modifier::ITALIC),
        ));
    }
    ListItem::new(Line::from(segs))
}

/// What: Render the candidate dropdown as an overlay.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (candidates, selection, tags)
/// - `room`: Free area directly below the input
///
/// Output:
/// - Outer rectangle of the drawn dropdown, or `None` when hidden.
///
/// Details:
/// - Clears its background so it sits above anything underneath.
/// - Records the inner list area in `results_rect` for click and scroll hit-testing.
pub fn render_results(f: &mut Frame, app: &mut AppState, room: Rect) -> Option<Rect> {
    app.results_rect = None;
    if !app.results_visible || app.candidates.is_empty() {
        return None;
    }
    let h = dropdown_height(app.candidates.len(), app.dropdown_max_rows, room.height);
    if h < 3 {
        return None;
    }
    let th = theme();
    let rect = Rect {
        x: room.x,
        y: room.y,
        width: room.width,
        height: h,
    };
    let inner_w = rect.width.saturating_sub(2);
    app.results_rect = Some((rect.x + 1, rect.y + 1, inner_w, h - 2));

    let items: Vec<ListItem> = app
        .candidates
        .iter()
        .map(|p| row(p, app.is_tagged(&p.name), inner_w, &th))
        .collect();
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" Results ({}) ", app.candidates.len()),
                    Style::default().fg(th.overlay1),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface2)),
        )
        .highlight_style(Style::default().fg(th.crust).bg(th.lavender))
        .highlight_symbol("> ");

    app.list_state.select(Some(app.selected));
    f.render_widget(Clear, rect);
    f.render_stateful_widget(list, rect, &mut app.list_state);
    Some(rect)
}
