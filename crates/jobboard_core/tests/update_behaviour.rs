use jobboard_core::{
    update, AppState, CategoryFilter, Effect, Job, LoadState, Msg, SavedSet, View,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    board_logging::initialize_for_tests();
}

fn sample_jobs() -> Vec<Job> {
    vec![
        Job::new("a")
            .with_title("Remote Writer")
            .with_company("Acme")
            .with_category("Writing"),
        Job::new("b")
            .with_title("Data Entry")
            .with_company("Acme")
            .with_category("Admin"),
    ]
}

fn loaded_state() -> AppState {
    let (state, _) = update(AppState::new(), Msg::Started);
    let (mut state, _) = update(state, Msg::JobsLoaded(sample_jobs()));
    state.consume_dirty();
    state
}

fn visible_ids(state: &AppState) -> Vec<String> {
    state.view().cards.into_iter().map(|card| card.job_id).collect()
}

#[test]
fn started_requests_a_single_fetch() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Started);
    assert_eq!(effects, vec![Effect::FetchJobs]);
    assert_eq!(state.view().load, LoadState::Loading);

    let (_state, effects) = update(state, Msg::Started);
    assert!(effects.is_empty());
}

#[test]
fn jobs_loaded_replaces_list_and_derives_categories() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Started);
    let (mut state, effects) = update(state, Msg::JobsLoaded(sample_jobs()));

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert_eq!(state.view().load, LoadState::Ready);
    assert_eq!(state.categories(), ["Admin", "Writing"]);
    assert_eq!(visible_ids(&state), vec!["a", "b"]);

    let (state, _) = update(state, Msg::JobsLoaded(vec![Job::new("z").with_category("Sales")]));
    assert_eq!(visible_ids(&state), vec!["z"]);
    assert_eq!(state.categories(), ["Sales"]);
}

#[test]
fn failed_fetch_keeps_previous_jobs_and_shows_error() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Started);
    let (mut state, effects) = update(
        state,
        Msg::JobsFailed {
            message: "Failed to load jobs.".to_string(),
            detail: Some("http status 500".to_string()),
        },
    );

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert!(state.jobs().is_empty());
    let view = state.view();
    assert!(view.cards.is_empty());
    assert!(!view.shows_no_jobs());
    assert_eq!(
        view.load,
        LoadState::Failed {
            message: "Failed to load jobs.".to_string(),
            detail: Some("http status 500".to_string()),
        }
    );
}

#[test]
fn search_change_filters_and_marks_dirty_once() {
    init_logging();
    let state = loaded_state();
    let (mut state, effects) = update(state, Msg::SearchChanged("writer".to_string()));
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert_eq!(visible_ids(&state), vec!["a"]);

    let (mut state, _) = update(state, Msg::SearchChanged("writer".to_string()));
    assert!(!state.consume_dirty());
}

#[test]
fn category_selection_filters() {
    init_logging();
    let state = loaded_state();
    let (state, _) = update(
        state,
        Msg::CategorySelected(CategoryFilter::Only("Admin".to_string())),
    );
    assert_eq!(visible_ids(&state), vec!["b"]);

    let (state, _) = update(state, Msg::CategorySelected(CategoryFilter::All));
    assert_eq!(visible_ids(&state), vec!["a", "b"]);
}

#[test]
fn toggle_save_emits_persist_effect_with_new_set() {
    init_logging();
    let state = loaded_state();
    let (mut state, effects) = update(
        state,
        Msg::SaveToggled {
            job_id: "b".to_string(),
        },
    );

    let expected: SavedSet = ["b"].into_iter().collect();
    assert_eq!(effects, vec![Effect::PersistSaved { saved: expected }]);
    assert!(state.consume_dirty());
    assert_eq!(state.view().saved_count, 1);
    assert!(state.view().cards[1].is_saved);

    let (state, effects) = update(
        state,
        Msg::SaveToggled {
            job_id: "b".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::PersistSaved {
            saved: SavedSet::new()
        }]
    );
    assert_eq!(state.view().saved_count, 0);
}

#[test]
fn saved_view_tracks_toggles() {
    init_logging();
    let state = loaded_state();
    let (state, _) = update(
        state,
        Msg::SavedRestored(["b"].into_iter().collect()),
    );
    let (state, _) = update(state, Msg::ViewSwitched(View::Saved));
    assert_eq!(visible_ids(&state), vec!["b"]);

    let (state, _) = update(
        state,
        Msg::SaveToggled {
            job_id: "b".to_string(),
        },
    );
    let view = state.view();
    assert!(view.cards.is_empty());
    assert!(view.shows_no_jobs());
    assert_eq!(view.selected, None);
}

#[test]
fn view_switch_is_free_in_both_directions() {
    init_logging();
    let state = loaded_state();
    let (state, _) = update(state, Msg::ViewSwitched(View::Saved));
    assert_eq!(state.view().view, View::Saved);
    let (state, _) = update(state, Msg::ViewSwitched(View::All));
    assert_eq!(state.view().view, View::All);
    let (mut state, _) = update(state, Msg::ViewSwitched(View::All));
    assert_eq!(state.view().view, View::All);
    state.consume_dirty();
    let (mut state, _) = update(state, Msg::ViewSwitched(View::All));
    assert!(!state.consume_dirty());
}

#[test]
fn bookmarks_for_unknown_jobs_are_kept() {
    init_logging();
    let state = loaded_state();
    let (state, _) = update(
        state,
        Msg::SavedRestored(["gone"].into_iter().collect()),
    );
    let (state, _) = update(state, Msg::JobsLoaded(sample_jobs()));
    assert!(state.saved().contains("gone"));
    assert_eq!(state.view().saved_count, 1);
}

#[test]
fn cursor_moves_within_visible_cards() {
    init_logging();
    let state = loaded_state();
    assert_eq!(state.view().selected, Some(0));

    let (state, _) = update(state, Msg::CursorMoved(5));
    assert_eq!(state.view().selected, Some(1));
    assert_eq!(state.view().selected_card().map(|c| c.job_id.as_str()), Some("b"));

    let (state, _) = update(state, Msg::CursorMoved(-9));
    assert_eq!(state.view().selected, Some(0));

    let (state, _) = update(state, Msg::CursorMoved(1));
    let (state, _) = update(state, Msg::SearchChanged("data".to_string()));
    assert_eq!(state.view().selected, Some(0));
    assert_eq!(state.view().selected_card().map(|c| c.job_id.as_str()), Some("b"));
}
