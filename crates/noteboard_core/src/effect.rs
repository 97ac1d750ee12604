use crate::state::FormFields;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Submit the filter form: a full-page GET navigation carrying the
    /// combined filter value, not an in-place update.
    SubmitFilter { combined: String },
    /// Fetch the next page of note fragments with the page's active
    /// filter and form fields.
    FetchPage {
        page: u32,
        class_filter: String,
        form: FormFields,
    },
}
