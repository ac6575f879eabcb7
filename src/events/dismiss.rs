//! Dismissal of the transient search state (Escape and outside clicks).
//!
//! Key and mouse events come from the terminal, which is shared by the
//! whole process. A widget must hold the single [`ListenerClaim`] before it
//! reacts to them, so two widgets can never both dismiss on the same event.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::logic::{QuerySink, clear_query};
use crate::state::{AppState, CellRect};

static CLAIMED: AtomicBool = AtomicBool::new(false);

/// Exclusive claim on the process-wide input listeners.
///
/// Acquired when the widget activates and released when dropped.
#[derive(Debug)]
pub struct ListenerClaim {
    _private: (),
}

impl ListenerClaim {
    /// What: Try to take the process-wide listener claim.
    ///
    /// Output:
    /// - `Some(claim)` if no other claim is live; `None` otherwise.
    #[must_use]
    pub fn acquire() -> Option<Self> {
        CLAIMED
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| {
                tracing::debug!("input listener claim acquired");
                Self { _private: () }
            })
    }

    /// Whether some widget currently holds the claim.
    #[must_use]
    pub fn is_held() -> bool {
        CLAIMED.load(Ordering::Acquire)
    }
}

impl Drop for ListenerClaim {
    fn drop(&mut self) {
        CLAIMED.store(false, Ordering::Release);
        tracing::debug!("input listener claim released");
    }
}

/// Whether `(x, y)` falls inside `rect`.
#[must_use]
pub const fn hit(rect: CellRect, x: u16, y: u16) -> bool {
    let (rx, ry, rw, rh) = rect;
    x >= rx && x < rx.saturating_add(rw) && y >= ry && y < ry.saturating_add(rh)
}

/// What: Decide whether a pointer-down at `(x, y)` lands outside the widget.
///
/// Inputs:
/// - `app`: State holding the last rendered widget rectangle
/// - `x`, `y`: Cell coordinates of the pointer
///
/// Output:
/// - `true` when the widget has been rendered and the point is outside it.
#[must_use]
pub fn is_outside(app: &AppState, x: u16, y: u16) -> bool {
    app.widget_rect.is_some_and(|r| !hit(r, x, y))
}

/// What: Clear the query and hide the dropdown.
///
/// Inputs:
/// - `app`: Application state
/// - `sink`: Dispatcher notified of the cleared query
/// - `_claim`: Proof that this widget owns the input listeners
///
/// Details:
/// - Applies whatever the candidate list holds; a no-op when there is
///   nothing to dismiss.
pub fn dismiss(app: &mut AppState, sink: &dyn QuerySink, _claim: &ListenerClaim) {
    if app.input.is_empty() && !app.results_visible {
        return;
    }
    tracing::debug!(query = %app.input, "dismissing search");
    clear_query(app, sink);
}

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize tests that take the listener claim.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Package, QueryInput};
    use tokio::sync::mpsc;

    #[test]
    /// What: Only one claim can be live; dropping it frees the slot.
    ///
    /// Inputs:
    /// - Two acquisitions, then a drop and a re-acquisition.
    ///
    /// Output:
    /// - Second acquisition fails while the first is held; succeeds after drop.
    fn listener_claim_is_exclusive() {
        let _guard = test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let first = ListenerClaim::acquire().expect("first claim");
        assert!(ListenerClaim::is_held());
        assert!(ListenerClaim::acquire().is_none());
        drop(first);
        assert!(!ListenerClaim::is_held());
        assert!(ListenerClaim::acquire().is_some());
    }

    #[test]
    /// What: Hit-testing treats the right and bottom edges as exclusive.
    fn hit_edges() {
        let r = (2, 3, 4, 2);
        assert!(hit(r, 2, 3));
        assert!(hit(r, 5, 4));
        assert!(!hit(r, 6, 4));
        assert!(!hit(r, 5, 5));
        assert!(!hit(r, 1, 3));
    }

    #[test]
    /// What: Dismissal clears the query and hides results regardless of candidates.
    ///
    /// Inputs:
    /// - Visible dropdown with candidates; then an already-idle state.
    ///
    /// Output:
    /// - Query cleared once; idle state submits nothing.
    fn dismiss_clears_and_hides() {
        let _guard = test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let claim = ListenerClaim::acquire().expect("claim");
        let (tx, mut rx) = mpsc::unbounded_channel::<QueryInput>();
        let mut app = AppState {
            input: "rea".into(),
            caret: 3,
            results_visible: true,
            candidates: vec![Package::named("react", "18.3.1")],
            ..Default::default()
        };
        dismiss(&mut app, &tx, &claim);
        assert!(app.input.is_empty());
        assert!(!app.results_visible);
        assert_eq!(rx.try_recv().expect("submitted").text, "");

        dismiss(&mut app, &tx, &claim);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    /// What: Outside detection requires a rendered widget rectangle.
    fn is_outside_requires_rect() {
        let mut app = AppState::default();
        assert!(!is_outside(&app, 0, 0));
        app.widget_rect = Some((0, 0, 10, 5));
        assert!(!is_outside(&app, 3, 3));
        assert!(is_outside(&app, 3, 7));
    }
}
