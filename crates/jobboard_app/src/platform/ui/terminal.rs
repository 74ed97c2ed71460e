use std::io::{self, stdout, Stdout};
use std::panic;

use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switches to raw mode on the alternate screen.
///
/// A panic hook is installed so a crash leaves the shell usable; on a
/// failed setup raw mode is switched off again before returning.
pub fn enter() -> io::Result<Tui> {
    enable_raw_mode()?;
    undo_on_error(stdout().execute(EnterAlternateScreen).map(drop), || {
        let _ = disable_raw_mode();
    })?;
    let terminal = undo_on_error(Terminal::new(CrosstermBackend::new(stdout())), restore)?;
    install_panic_hook();
    Ok(terminal)
}

pub fn leave(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()
}

fn undo_on_error<T>(result: io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore();
        previous(info);
    }));
}

/// Best effort; used where there is no terminal handle to go through.
fn restore() {
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
}
