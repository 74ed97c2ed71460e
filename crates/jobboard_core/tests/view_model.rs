use jobboard_core::{
    update, AppState, CategoryFilter, Job, Msg, ScamAnalysis, ScoreClass, NO_FLAGS_TEXT,
    UNCATEGORIZED,
};
use pretty_assertions::assert_eq;

fn view_of(jobs: Vec<Job>) -> jobboard_core::AppViewModel {
    let (state, _) = update(AppState::new(), Msg::JobsLoaded(jobs));
    state.view()
}

#[test]
fn card_carries_score_class_and_flags() {
    let view = view_of(vec![Job::new("a")
        .with_title("Remote Writer")
        .with_company("Acme")
        .with_category("Writing")
        .with_summary("Write things.")
        .with_original_url("https://jobs.example.com/a")
        .with_posted_date("2024-05-01")
        .with_scam_analysis(90, vec!["clear application process".into(), "no red flags".into()])]);

    let card = &view.cards[0];
    assert_eq!(card.title, "Remote Writer");
    assert_eq!(card.company, "Acme");
    assert_eq!(card.category, "Writing");
    assert_eq!(card.summary, "Write things.");
    assert_eq!(card.original_url.as_deref(), Some("https://jobs.example.com/a"));
    assert_eq!(card.posted_date.as_deref(), Some("2024-05-01"));
    assert_eq!(card.score, Some(90));
    assert_eq!(card.score_class, Some(ScoreClass::High));
    assert_eq!(card.flags_text, "clear application process, no red flags");
    assert!(!card.is_saved);
}

#[test]
fn missing_fields_are_substituted() {
    let view = view_of(vec![Job::new("bare")
        .with_original_url("N/A")
        .with_scam_analysis(40, Vec::new())]);

    let card = &view.cards[0];
    assert_eq!(card.category, UNCATEGORIZED);
    assert_eq!(card.flags_text, NO_FLAGS_TEXT);
    assert_eq!(card.score_class, Some(ScoreClass::Low));
    assert_eq!(card.original_url, None);
    assert!(!card.title.is_empty());
    assert!(!card.summary.is_empty());
}

#[test]
fn unscored_job_still_renders() {
    let view = view_of(vec![Job::new("x").with_title("Cook")]);
    assert_eq!(view.cards.len(), 1);
    assert_eq!(view.cards[0].score, None);
    assert_eq!(view.cards[0].score_class, None);
}

#[test]
fn flags_without_score_are_shown_unscored() {
    let mut job = Job::new("x").with_title("Cook");
    job.scam_analysis = Some(ScamAnalysis {
        score: None,
        flags: vec!["unverified employer".into()],
    });
    let view = view_of(vec![job]);

    let card = &view.cards[0];
    assert_eq!(card.score, None);
    assert_eq!(card.score_class, None);
    assert_eq!(card.flags_text, "unverified employer");
}

#[test]
fn cycle_category_wraps_both_ways() {
    let view = view_of(vec![
        Job::new("1").with_category("Writing"),
        Job::new("2").with_category("Admin"),
    ]);
    assert_eq!(view.cycle_category(1), CategoryFilter::Only("Admin".to_string()));
    assert_eq!(view.cycle_category(-1), CategoryFilter::Only("Writing".to_string()));
    assert_eq!(view.cycle_category(3), CategoryFilter::All);
}

#[test]
fn no_jobs_state_only_after_load() {
    let loading = AppState::new().view();
    assert!(!loading.shows_no_jobs());

    let empty = view_of(Vec::new());
    assert!(empty.shows_no_jobs());
    assert_eq!(empty.total_jobs, 0);
}
