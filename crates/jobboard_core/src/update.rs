use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            // A single load per session; later starts are ignored.
            if state.request_fetch() {
                state.mark_dirty();
                vec![Effect::FetchJobs]
            } else {
                Vec::new()
            }
        }
        Msg::SavedRestored(saved) => {
            state.restore_saved(saved);
            Vec::new()
        }
        Msg::JobsLoaded(jobs) => {
            state.replace_jobs(jobs);
            Vec::new()
        }
        Msg::JobsFailed { message, detail } => {
            state.fail_load(message, detail);
            Vec::new()
        }
        Msg::SearchChanged(term) => {
            state.set_search_term(term);
            Vec::new()
        }
        Msg::CategorySelected(category) => {
            state.set_category(category);
            Vec::new()
        }
        Msg::ViewSwitched(view) => {
            state.set_view(view);
            Vec::new()
        }
        Msg::SaveToggled { job_id } => {
            state.toggle_saved(&job_id);
            vec![Effect::PersistSaved {
                saved: state.saved().clone(),
            }]
        }
        Msg::CursorMoved(delta) => {
            state.move_cursor(delta);
            Vec::new()
        }
    };

    (state, effects)
}
