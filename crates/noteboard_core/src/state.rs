use std::collections::BTreeSet;

use crate::catalog::{decompose, CourseIndex};
use crate::view_model::PageViewModel;

pub type NoteId = u64;

/// Sentinel submitted when no subject+number restriction applies.
pub const ALL_FILTER: &str = "All";

/// The non-filter fields of the notes filter form, mirrored client-side so
/// pagination requests and filter submissions carry the same parameters the
/// page was rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFields {
    pub search: String,
    pub author_filter: String,
    pub date_filter: String,
    pub sort_by: String,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            search: String::new(),
            author_filter: ALL_FILTER.to_string(),
            date_filter: ALL_FILTER.to_string(),
            sort_by: "recent".to_string(),
        }
    }
}

/// Current two-level dropdown selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub(crate) selected_subject: Option<String>,
    pub(crate) selected_number: Option<String>,
}

impl FilterState {
    /// Combination rule for the submitted filter value: a subject alone is
    /// not expressible in the backend contract, so it collapses to "All"
    /// just like no selection at all.
    pub fn combined(&self) -> String {
        match (&self.selected_subject, &self.selected_number) {
            (Some(subject), Some(number)) => format!("{subject}{number}"),
            _ => ALL_FILTER.to_string(),
        }
    }

    pub fn selected_subject(&self) -> Option<&str> {
        self.selected_subject.as_deref()
    }

    pub fn selected_number(&self) -> Option<&str> {
        self.selected_number.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PaginationState {
    pub(crate) current_page: u32,
    pub(crate) has_more: bool,
    pub(crate) in_flight: bool,
}

/// Draft contents of the create-note form, kept in state so dismissing the
/// modal can clear every field through one code path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateDraft {
    pub author: String,
    pub title: String,
    pub body: String,
    pub class_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub(crate) index: CourseIndex,
    pub(crate) form: FormFields,
    /// The filter the server rendered this page with; pagination keeps
    /// using it even while a new dropdown selection is pending.
    pub(crate) active_filter: String,
    pub(crate) filter: FilterState,
    pub(crate) pagination: PaginationState,
    pub(crate) create_modal_open: bool,
    pub(crate) create_draft: CreateDraft,
    pub(crate) open_editors: BTreeSet<NoteId>,
    pub(crate) fragments: Vec<String>,
}

impl PageState {
    /// Builds the initial page state from the server-supplied bootstrap
    /// values. The active filter is decomposed to pre-select the subject
    /// dropdown, and the number dropdown too when the number exists under
    /// that subject (the preserve-selection path; a later subject change
    /// resets the number instead).
    pub fn new(index: CourseIndex, active_filter: &str, form: FormFields, current_page: u32) -> Self {
        let mut filter = FilterState::default();
        if active_filter != ALL_FILTER {
            if let Some((subject, number)) = decompose(active_filter) {
                if index.contains_subject(subject) {
                    if index.numbers(subject).iter().any(|n| n == number) {
                        filter.selected_number = Some(number.to_string());
                    }
                    filter.selected_subject = Some(subject.to_string());
                }
            }
        }
        Self {
            index,
            form,
            active_filter: active_filter.to_string(),
            filter,
            pagination: PaginationState {
                current_page,
                has_more: true,
                in_flight: false,
            },
            create_modal_open: false,
            create_draft: CreateDraft::default(),
            open_editors: BTreeSet::new(),
            fragments: Vec::new(),
        }
    }

    pub fn index(&self) -> &CourseIndex {
        &self.index
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn form(&self) -> &FormFields {
        &self.form
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    pub fn current_page(&self) -> u32 {
        self.pagination.current_page
    }

    pub fn view(&self) -> PageViewModel {
        PageViewModel::project(self)
    }
}
