//! Noteboard core: pure state machine and view-model helpers.
mod catalog;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use catalog::{decompose, CourseIndex};
pub use effect::Effect;
pub use msg::{DraftField, Msg};
pub use state::{CreateDraft, FilterState, FormFields, NoteId, PageState, ALL_FILTER};
pub use update::update;
pub use view_model::{
    OptionRow, PageViewModel, ALL_NUMBERS_LABEL, ALL_SUBJECTS_LABEL,
};
