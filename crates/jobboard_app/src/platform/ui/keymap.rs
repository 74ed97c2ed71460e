use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use jobboard_core::{AppViewModel, Msg, View};

const PAGE: isize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Browse,
    Search,
}

/// What a key press asks the app loop to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Dispatch(Msg),
    SetMode(InputMode),
    /// Leave search mode and dispatch the final search term.
    LeaveSearch(Option<Msg>),
    Quit,
    Ignored,
}

pub fn map_key(key: KeyEvent, mode: InputMode, view: &AppViewModel) -> KeyOutcome {
    if key.kind != KeyEventKind::Press {
        return KeyOutcome::Ignored;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyOutcome::Quit;
    }
    match mode {
        InputMode::Search => map_search_key(key, view),
        InputMode::Browse => map_browse_key(key, view),
    }
}

fn map_search_key(key: KeyEvent, view: &AppViewModel) -> KeyOutcome {
    match key.code {
        KeyCode::Enter => KeyOutcome::LeaveSearch(None),
        KeyCode::Esc => {
            KeyOutcome::LeaveSearch(Some(Msg::SearchChanged(String::new())))
        }
        KeyCode::Backspace => {
            let mut term = view.search_term.clone();
            if term.pop().is_none() {
                return KeyOutcome::Ignored;
            }
            KeyOutcome::Dispatch(Msg::SearchChanged(term))
        }
        KeyCode::Char(c) => {
            let mut term = view.search_term.clone();
            term.push(c);
            KeyOutcome::Dispatch(Msg::SearchChanged(term))
        }
        _ => KeyOutcome::Ignored,
    }
}

fn map_browse_key(key: KeyEvent, view: &AppViewModel) -> KeyOutcome {
    let msg = match key.code {
        KeyCode::Char('q') => return KeyOutcome::Quit,
        KeyCode::Char('/') => return KeyOutcome::SetMode(InputMode::Search),
        KeyCode::Esc if !view.search_term.is_empty() => Msg::SearchChanged(String::new()),
        KeyCode::Tab | KeyCode::BackTab => Msg::ViewSwitched(view.view.toggled()),
        KeyCode::Char('1') => Msg::ViewSwitched(View::All),
        KeyCode::Char('2') => Msg::ViewSwitched(View::Saved),
        KeyCode::Char('c') => Msg::CategorySelected(view.cycle_category(1)),
        KeyCode::Char('C') => Msg::CategorySelected(view.cycle_category(-1)),
        KeyCode::Down | KeyCode::Char('j') => Msg::CursorMoved(1),
        KeyCode::Up | KeyCode::Char('k') => Msg::CursorMoved(-1),
        KeyCode::PageDown => Msg::CursorMoved(PAGE),
        KeyCode::PageUp => Msg::CursorMoved(-PAGE),
        KeyCode::Char('s') | KeyCode::Char(' ') => match view.selected_card() {
            Some(card) => Msg::SaveToggled {
                job_id: card.job_id.clone(),
            },
            None => return KeyOutcome::Ignored,
        },
        _ => return KeyOutcome::Ignored,
    };
    KeyOutcome::Dispatch(msg)
}
