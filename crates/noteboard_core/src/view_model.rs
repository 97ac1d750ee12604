use crate::state::{CreateDraft, NoteId, PageState};

pub const ALL_SUBJECTS_LABEL: &str = "All Subjects";
pub const ALL_NUMBERS_LABEL: &str = "All Numbers";

/// One entry of a dropdown. The sentinel rows carry an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl OptionRow {
    fn sentinel(label: &str, selected: bool) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
            selected,
        }
    }

    fn entry(value: &str, selected: bool) -> Self {
        Self {
            value: value.to_string(),
            label: value.to_string(),
            selected,
        }
    }
}

/// Everything the page binding needs to render, projected from state.
/// Rebuilding widgets from these rows must be idempotent: the adapter owns
/// listener lifecycle, the rows only describe the desired option set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageViewModel {
    pub subject_options: Vec<OptionRow>,
    pub number_options: Vec<OptionRow>,
    /// Fragments appended since page load, oldest first.
    pub fragments: Vec<String>,
    pub load_more_visible: bool,
    pub load_more_enabled: bool,
    pub create_modal_open: bool,
    pub scroll_locked: bool,
    pub create_draft: CreateDraft,
    pub open_editors: Vec<NoteId>,
}

impl PageViewModel {
    pub(crate) fn project(state: &PageState) -> Self {
        let selected_subject = state.filter.selected_subject();
        let selected_number = state.filter.selected_number();

        let mut subject_options =
            vec![OptionRow::sentinel(ALL_SUBJECTS_LABEL, selected_subject.is_none())];
        for subject in state.index.subjects() {
            subject_options.push(OptionRow::entry(
                subject,
                selected_subject == Some(subject.as_str()),
            ));
        }

        let mut number_options =
            vec![OptionRow::sentinel(ALL_NUMBERS_LABEL, selected_number.is_none())];
        if let Some(subject) = selected_subject {
            for number in state.index.numbers(subject) {
                number_options.push(OptionRow::entry(
                    number,
                    selected_number == Some(number.as_str()),
                ));
            }
        }

        Self {
            subject_options,
            number_options,
            fragments: state.fragments.clone(),
            load_more_visible: state.pagination.has_more,
            load_more_enabled: !state.pagination.in_flight,
            create_modal_open: state.create_modal_open,
            scroll_locked: state.create_modal_open,
            create_draft: state.create_draft.clone(),
            open_editors: state.open_editors.iter().copied().collect(),
        }
    }
}
