use std::time::Duration;

use anyhow::Context;
use board_logging::{board_error, board_info};
use crossterm::event::{self, Event};
use jobboard_core::{update, AppState, Msg, SavedStore};
use jobboard_engine::EngineHandle;

use super::config::BoardConfig;
use super::effects::EffectRunner;
use super::persistence::FileSavedStore;
use super::ui::keymap::{map_key, InputMode, KeyOutcome};
use super::ui::{self, terminal::Tui};
use super::logging;

pub fn run_app() -> anyhow::Result<()> {
    let config = BoardConfig::default();
    logging::initialize(&config.log_file, config.log_level);
    board_info!("Starting job board, endpoint={}", config.endpoint);

    let store = FileSavedStore::new(config.data_dir.clone(), &config.saved_key);
    let saved = store.load();
    let engine = EngineHandle::new(config.fetch.clone()).context("starting fetch engine")?;
    let runner = EffectRunner::new(engine, store, config.endpoint.clone());

    let mut app = App::new(runner);
    app.dispatch(Msg::SavedRestored(saved));

    let mut terminal = ui::terminal::enter().context("entering terminal UI")?;
    let result = app.run(&mut terminal, config.poll_interval);
    if let Err(err) = ui::terminal::leave(&mut terminal) {
        board_error!("Failed to restore terminal: {}", err);
    }
    board_info!("Job board stopped");
    result
}

struct App<S> {
    state: AppState,
    runner: EffectRunner<S>,
    mode: InputMode,
    redraw: bool,
    quit: bool,
}

impl<S: SavedStore> App<S> {
    fn new(runner: EffectRunner<S>) -> Self {
        Self {
            state: AppState::new(),
            runner,
            mode: InputMode::default(),
            redraw: true,
            quit: false,
        }
    }

    fn run(&mut self, terminal: &mut Tui, poll_interval: Duration) -> anyhow::Result<()> {
        self.dispatch(Msg::Started);

        while !self.quit {
            if std::mem::take(&mut self.redraw) {
                let view = self.state.view();
                terminal.draw(|frame| ui::render::draw(frame, &view, self.mode))?;
            }

            if event::poll(poll_interval)? {
                match event::read()? {
                    Event::Key(key) => {
                        let view = self.state.view();
                        let outcome = map_key(key, self.mode, &view);
                        self.apply(outcome);
                    }
                    Event::Resize(..) => self.redraw = true,
                    _ => {}
                }
            }

            for msg in self.runner.drain_events() {
                self.dispatch(msg);
            }
        }
        Ok(())
    }

    fn apply(&mut self, outcome: KeyOutcome) {
        match outcome {
            KeyOutcome::Dispatch(msg) => self.dispatch(msg),
            KeyOutcome::SetMode(mode) => self.set_mode(mode),
            KeyOutcome::LeaveSearch(msg) => {
                self.set_mode(InputMode::Browse);
                if let Some(msg) = msg {
                    self.dispatch(msg);
                }
            }
            KeyOutcome::Quit => self.quit = true,
            KeyOutcome::Ignored => {}
        }
    }

    fn set_mode(&mut self, mode: InputMode) {
        if self.mode != mode {
            self.mode = mode;
            self.redraw = true;
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.redraw = true;
        }
        self.state = state;
        self.runner.enqueue(effects);
    }
}
