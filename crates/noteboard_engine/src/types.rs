use std::fmt;

use serde::Deserialize;

/// Query parameters for one notes-page request, mirroring the filter form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub class_filter: String,
    pub search: String,
    pub author_filter: String,
    pub date_filter: String,
    pub sort_by: String,
    pub page: u32,
}

impl PageQuery {
    /// The filter-form fields, in the order the form submits them.
    pub fn form_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("class_filter", self.class_filter.clone()),
            ("search", self.search.clone()),
            ("author_filter", self.author_filter.clone()),
            ("date_filter", self.date_filter.clone()),
            ("sort_by", self.sort_by.clone()),
        ]
    }

    /// Form fields plus the requested page number.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.form_pairs();
        pairs.push(("page", self.page.to_string()));
        pairs
    }
}

/// One server-rendered page of note listings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageFragment {
    pub html: String,
    pub has_more: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    PageCompleted {
        page: u32,
        result: Result<PageFragment, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    /// Response body did not match the `{html, has_more}` contract.
    MalformedResponse,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
