//! Rendering for the tag picker.
//!
//! [`ui`] draws one frame and records the hit-test rectangles the mouse
//! handler needs in [`AppState`].

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
};

use crate::state::{AppState, CellRect};
use crate::theme::theme;

mod footer;
mod header;
mod input;
pub mod results;
pub mod tags;

/// Widest the widget column grows on large terminals.
const MAX_WIDGET_WIDTH: u16 = 76;
/// Header card height (borders + title + description).
const HEADER_HEIGHT: u16 = 4;
/// Query input height (borders + one line).
const INPUT_HEIGHT: u16 = 3;

fn to_cell_rect(r: Rect) -> CellRect {
    (r.x, r.y, r.width, r.height)
}

/// What: Centre the widget column inside `area`.
fn widget_column(area: Rect) -> Rect {
    let width = area.width.min(MAX_WIDGET_WIDTH);
    let x = area.x + (area.width - width) / 2;
    Rect {
        x,
        y: area.y,
        width,
        height: area.height,
    }
}

/// What: Draw one frame of the widget.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state; hit-test rectangles are rewritten every frame
///
/// Details:
/// - Layout top to bottom: header card, tag row (only when tags exist),
///   query input, then the keybinding footer on the last line.
/// - The dropdown is drawn last as an overlay below the input.
/// - `widget_rect` spans the tag row, input and open dropdown; mouse-downs
///   outside it dismiss the search.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let column = widget_column(area);
    let tags_h = tags::row_height(app, column.width);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(tags_h),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(column);

    header::render_header(f, chunks[0]);
    tags::render_tags(f, app, chunks[1]);
    input::render_input(f, app, chunks[2]);
    footer::render_footer(f, app, chunks[4]);

    // Dropdown may cover the free space below the input but never the footer.
    let room = Rect {
        x: chunks[2].x,
        y: chunks[3].y,
        width: chunks[2].width,
        height: chunks[3].height,
    };
    let dropdown = results::render_results(f, app, room);

    let top = if tags_h > 0 { chunks[1].y } else { chunks[2].y };
    let bottom = dropdown.map_or(chunks[2].bottom(), |r| r.bottom());
    app.widget_rect = Some(to_cell_rect(Rect {
        x: column.x,
        y: top,
        width: column.width,
        height: bottom.saturating_sub(top),
    }));
    app.input_rect = Some(to_cell_rect(chunks[2]));
}
