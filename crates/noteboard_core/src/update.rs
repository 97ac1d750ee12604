use crate::{DraftField, Effect, Msg, PageState, ALL_FILTER};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PageState, msg: Msg) -> (PageState, Vec<Effect>) {
    let effects = match msg {
        Msg::SubjectChanged(value) => {
            // Changing subject always resets the number selection.
            state.filter.selected_number = None;
            if value.is_empty() {
                // "All Subjects" bypasses the number dropdown entirely.
                state.filter.selected_subject = None;
                vec![Effect::SubmitFilter {
                    combined: ALL_FILTER.to_string(),
                }]
            } else {
                state.filter.selected_subject = Some(value);
                // Selection is pending until a number is picked.
                Vec::new()
            }
        }
        Msg::NumberChanged(value) => {
            state.filter.selected_number = if value.is_empty() { None } else { Some(value) };
            vec![Effect::SubmitFilter {
                combined: state.filter.combined(),
            }]
        }
        Msg::LoadMoreClicked => {
            if state.pagination.in_flight || !state.pagination.has_more {
                return (state, Vec::new());
            }
            state.pagination.in_flight = true;
            state.pagination.current_page += 1;
            vec![Effect::FetchPage {
                page: state.pagination.current_page,
                class_filter: state.active_filter.clone(),
                form: state.form.clone(),
            }]
        }
        Msg::PageLoaded {
            page: _,
            html,
            has_more,
        } => {
            // Append-only: earlier fragments are never replaced.
            state.fragments.push(html);
            state.pagination.has_more = has_more;
            state.pagination.in_flight = false;
            Vec::new()
        }
        Msg::PageLoadFailed { page: _ } => {
            // Roll the counter back so a retry fetches the page that
            // actually failed instead of skipping it.
            state.pagination.current_page = state.pagination.current_page.saturating_sub(1);
            state.pagination.in_flight = false;
            Vec::new()
        }
        Msg::CreateModalOpened => {
            state.create_modal_open = true;
            Vec::new()
        }
        Msg::CreateModalDismissed => {
            close_create_modal(&mut state);
            Vec::new()
        }
        Msg::EscapePressed => {
            // Escape only dismisses the overlay while it is active.
            if state.create_modal_open {
                close_create_modal(&mut state);
            }
            Vec::new()
        }
        Msg::DraftFieldEdited { field, value } => {
            let slot = match field {
                DraftField::Author => &mut state.create_draft.author,
                DraftField::Title => &mut state.create_draft.title,
                DraftField::Body => &mut state.create_draft.body,
                DraftField::ClassCode => &mut state.create_draft.class_code,
            };
            *slot = value;
            Vec::new()
        }
        Msg::EditToggled { note_id } => {
            // Per-note toggles are independent of each other.
            if !state.open_editors.remove(&note_id) {
                state.open_editors.insert(note_id);
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Single cleanup path shared by every dismissal route: backdrop click,
/// close button and Escape all end up here.
fn close_create_modal(state: &mut PageState) {
    state.create_modal_open = false;
    state.create_draft = Default::default();
}
