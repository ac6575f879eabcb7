//! Central `AppState` container for the search-and-tag widget.

use ratatui::widgets::ListState;

use crate::state::types::{Focus, Package};
use crate::theme::KeyMap;

/// Hit-test rectangle as `(x, y, width, height)` in terminal cells.
pub type CellRect = (u16, u16, u16, u16);

/// Widget state shared by the event, dispatch, and UI layers.
///
/// Owned exclusively by the event loop. Background tasks never touch it
/// directly; they send messages that the loop applies through the handlers.
#[derive(Debug)]
pub struct AppState {
    /// Current query text. Empty means no active search.
    pub input: String,
    /// Caret position in `input`, counted in characters.
    pub caret: usize,
    /// Packages returned by the latest accepted response.
    pub candidates: Vec<Package>,
    /// Whether the dropdown is currently shown.
    pub results_visible: bool,
    /// Index into `candidates` that is highlighted.
    pub selected: usize,
    /// List selection state for the dropdown.
    pub list_state: ListState,
    /// Selected packages in insertion order.
    pub tags: Vec<Package>,
    /// Index into `tags` of the focused chip.
    pub tag_cursor: usize,
    /// Which part of the widget has keyboard focus.
    pub focus: Focus,

    // Search coordination
    /// Identifier of the latest query; responses carrying any other id are stale.
    pub latest_query_id: u64,
    /// Next query identifier to allocate.
    pub next_query_id: u64,
    /// True between dispatching a non-empty query and receiving its response.
    pub awaiting_results: bool,

    // Settings applied at startup
    /// Configurable key bindings.
    pub keymap: KeyMap,
    /// Maximum number of dropdown rows shown before scrolling.
    pub dropdown_max_rows: u16,

    // Mouse hit-test rectangles (updated during rendering)
    /// Bounding rectangle of the whole widget; clicks outside dismiss.
    pub widget_rect: Option<CellRect>,
    /// Inner rectangle of the query input.
    pub input_rect: Option<CellRect>,
    /// Inner rectangle of the dropdown list.
    pub results_rect: Option<CellRect>,
    /// Removal markers of the rendered chips, with the tag name each removes.
    pub tag_remove_rects: Vec<(CellRect, String)>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            input: String::new(),
            caret: 0,
            candidates: Vec::new(),
            results_visible: false,
            selected: 0,
            list_state: ListState::default(),
            tags: Vec::new(),
            tag_cursor: 0,
            focus: Focus::Search,
            latest_query_id: 0,
            next_query_id: 1,
            awaiting_results: false,
            keymap: KeyMap::default(),
            dropdown_max_rows: 8,
            widget_rect: None,
            input_rect: None,
            results_rect: None,
            tag_remove_rects: Vec::new(),
        }
    }
}

impl AppState {
    /// What: Check whether a package with `name` is already in the tag collection.
    ///
    /// Inputs:
    /// - `name`: Package name to look up
    ///
    /// Output:
    /// - `true` when any tag carries that exact name.
    ///
    /// Details:
    /// - Matching is by name so that a refetched copy of an already-selected
    ///   package is still recognized.
    #[must_use]
    pub fn is_tagged(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.name == name)
    }

    /// Currently highlighted candidate, if the dropdown has any rows.
    #[must_use]
    pub fn highlighted(&self) -> Option<&Package> {
        self.candidates.get(self.selected)
    }
}
