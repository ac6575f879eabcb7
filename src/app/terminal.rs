use std::io::Write;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Put the terminal into raw mode on the alternate screen with mouse capture.
///
/// Output:
/// - `Err` when raw mode or the escape sequences cannot be applied.
///
/// Details:
/// - Mouse capture is what lets the widget see button-downs outside its area.
/// - If the escape sequences fail after raw mode was enabled, the terminal is
///   restored before the error is returned.
pub fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    if let Err(e) = execute!(std::io::stdout(), EnterAlternateScreen, EnableMouseCapture) {
        tracing::warn!(error = %e, "terminal setup failed; restoring");
        let _ = restore_terminal();
        return Err(e.into());
    }
    tracing::debug!("terminal set up (raw mode, alternate screen, mouse capture)");
    Ok(())
}

/// What: Undo [`setup_terminal`].
///
/// Output:
/// - The first error hit, if any.
///
/// Details:
/// - Both steps are always attempted, so a partial setup is fully undone.
pub fn restore_terminal() -> Result<()> {
    let raw = disable_raw_mode();
    finish_restore(&mut std::io::stdout(), raw)?;
    tracing::debug!("terminal restored");
    Ok(())
}

/// Leave the alternate screen and release the mouse on `out`, then report
/// `raw` (the outcome of leaving raw mode) ahead of any write error.
fn finish_restore<W: Write>(out: &mut W, raw: std::io::Result<()>) -> Result<()> {
    let screen = execute!(out, DisableMouseCapture, LeaveAlternateScreen);
    raw?;
    screen?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: A failure leaving raw mode does not skip the screen reset.
    ///
    /// Inputs:
    /// - In-memory writer; raw-mode step already failed.
    ///
    /// Output:
    /// - Escape sequences still written; the raw-mode error is returned.
    fn restore_writes_screen_reset_after_raw_mode_error() {
        let mut out: Vec<u8> = Vec::new();
        let raw = Err(std::io::Error::other("no tty"));
        let res = finish_restore(&mut out, raw);
        assert!(res.is_err());
        assert!(!out.is_empty());
    }

    #[test]
    /// What: With raw mode left cleanly, restore succeeds and writes the reset.
    fn restore_succeeds_when_both_steps_succeed() {
        let mut out: Vec<u8> = Vec::new();
        assert!(finish_restore(&mut out, Ok(())).is_ok());
        assert!(!out.is_empty());
    }
}
