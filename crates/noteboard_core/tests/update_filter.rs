use std::sync::Once;

use noteboard_core::{
    update, CourseIndex, Effect, FormFields, Msg, PageState, ALL_FILTER,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(page_logging::initialize_for_tests);
}

fn sample_index() -> CourseIndex {
    CourseIndex::from_codes([
        "CS124", "CS128", "CS173", "MATH221", "MATH231", "ENG100", "CS100", "RHET105", "PHY211",
        "PHY212",
    ])
}

fn fresh_state(active_filter: &str) -> PageState {
    PageState::new(sample_index(), active_filter, FormFields::default(), 1)
}

#[test]
fn active_filter_preselects_subject_and_number() {
    init_logging();
    let state = fresh_state("CS124");
    let view = state.view();

    let subject = view.subject_options.iter().find(|o| o.selected).unwrap();
    assert_eq!(subject.value, "CS");
    let number = view.number_options.iter().find(|o| o.selected).unwrap();
    assert_eq!(number.value, "124");
}

#[test]
fn all_filter_selects_only_the_sentinels() {
    init_logging();
    let state = fresh_state(ALL_FILTER);
    let view = state.view();

    assert!(view.subject_options[0].selected);
    assert_eq!(view.subject_options[0].value, "");
    assert_eq!(view.subject_options[0].label, "All Subjects");
    // No subject selected, so the number dropdown holds just its sentinel.
    assert_eq!(view.number_options.len(), 1);
    assert!(view.number_options[0].selected);
}

#[test]
fn unknown_active_filter_is_ignored() {
    init_logging();
    let state = fresh_state("BIO101");
    assert_eq!(state.filter().selected_subject(), None);
    assert_eq!(state.filter().combined(), ALL_FILTER);
}

#[test]
fn subject_options_follow_index_order() {
    init_logging();
    let view = fresh_state(ALL_FILTER).view();
    let values: Vec<&str> = view
        .subject_options
        .iter()
        .map(|o| o.value.as_str())
        .collect();
    assert_eq!(values, ["", "CS", "ENG", "MATH", "PHY", "RHET"]);
}

#[test]
fn number_options_are_numeric_ascending() {
    init_logging();
    let view = fresh_state("CS124").view();
    let values: Vec<&str> = view
        .number_options
        .iter()
        .map(|o| o.value.as_str())
        .collect();
    assert_eq!(values, ["", "100", "124", "128", "173"]);
}

#[test]
fn selecting_a_subject_resets_number_and_stays_pending() {
    init_logging();
    let state = fresh_state("CS124");
    let (state, effects) = update(state, Msg::SubjectChanged("MATH".to_string()));

    assert!(effects.is_empty());
    assert_eq!(state.filter().selected_subject(), Some("MATH"));
    assert_eq!(state.filter().selected_number(), None);

    // The rebuilt number dropdown must not carry the old selection over.
    let view = state.view();
    assert!(view.number_options[0].selected);
    let values: Vec<&str> = view
        .number_options
        .iter()
        .map(|o| o.value.as_str())
        .collect();
    assert_eq!(values, ["", "221", "231"]);
}

#[test]
fn clearing_the_subject_submits_all_immediately() {
    init_logging();
    let state = fresh_state("CS124");
    let (state, effects) = update(state, Msg::SubjectChanged(String::new()));

    assert_eq!(
        effects,
        vec![Effect::SubmitFilter {
            combined: ALL_FILTER.to_string()
        }]
    );
    assert_eq!(state.filter().selected_subject(), None);
    assert_eq!(state.filter().selected_number(), None);
}

#[test]
fn picking_a_number_submits_the_combined_code() {
    init_logging();
    let state = fresh_state(ALL_FILTER);
    let (state, _) = update(state, Msg::SubjectChanged("CS".to_string()));
    let (state, effects) = update(state, Msg::NumberChanged("124".to_string()));

    assert_eq!(
        effects,
        vec![Effect::SubmitFilter {
            combined: "CS124".to_string()
        }]
    );
    assert_eq!(state.filter().combined(), "CS124");
}

#[test]
fn clearing_the_number_collapses_to_all() {
    init_logging();
    let state = fresh_state("CS124");
    // Subject stays selected; the subject-only case is not expressible in
    // the backend contract and collapses to "All".
    let (state, effects) = update(state, Msg::NumberChanged(String::new()));

    assert_eq!(
        effects,
        vec![Effect::SubmitFilter {
            combined: ALL_FILTER.to_string()
        }]
    );
    assert_eq!(state.filter().selected_subject(), Some("CS"));
    assert_eq!(state.filter().combined(), ALL_FILTER);
}

#[test]
fn combined_truth_table() {
    init_logging();
    let state = fresh_state(ALL_FILTER);
    assert_eq!(state.filter().combined(), ALL_FILTER);

    let (state, _) = update(state, Msg::SubjectChanged("CS".to_string()));
    assert_eq!(state.filter().combined(), ALL_FILTER);

    let (state, _) = update(state, Msg::NumberChanged("124".to_string()));
    assert_eq!(state.filter().combined(), "CS124");
}
