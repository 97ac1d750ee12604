use crate::state::NoteId;

/// Field of the create-note form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Author,
    Title,
    Body,
    ClassCode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked an entry in the subject dropdown. The empty string is
    /// the "All Subjects" sentinel.
    SubjectChanged(String),
    /// User picked an entry in the number dropdown. The empty string is
    /// the "All Numbers" sentinel.
    NumberChanged(String),
    /// User clicked the "load more" control.
    LoadMoreClicked,
    /// A next-page fetch completed.
    PageLoaded {
        page: u32,
        html: String,
        has_more: bool,
    },
    /// A next-page fetch failed (network error or bad response).
    PageLoadFailed { page: u32 },
    /// User opened the create-note modal.
    CreateModalOpened,
    /// Backdrop click or explicit close on the create-note modal.
    CreateModalDismissed,
    /// Escape pressed anywhere on the page.
    EscapePressed,
    /// User edited a field of the create-note form.
    DraftFieldEdited { field: DraftField, value: String },
    /// User toggled one note's inline edit form.
    EditToggled { note_id: NoteId },
    /// Fallback for placeholder wiring.
    NoOp,
}
