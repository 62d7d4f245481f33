use ratatui::DefaultTerminal;
use std::io;

/// Puts the terminal back into cooked mode on the main screen when dropped.
///
/// Panics are handled by the hook `ratatui::try_init` installs; the guard
/// covers early `?` returns out of the UI loop.
pub struct TerminalGuard {
    _restore_on_drop: (),
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        ratatui::restore();
    }
}

/// Enter raw mode and the alternate screen.
pub fn setup_terminal() -> io::Result<(DefaultTerminal, TerminalGuard)> {
    let terminal = ratatui::try_init()?;
    Ok((
        terminal,
        TerminalGuard {
            _restore_on_drop: (),
        },
    ))
}
