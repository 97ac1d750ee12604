use page_logging::{page_info, page_warn};

use noteboard_core::{Effect, FormFields, Msg};
use noteboard_engine::{
    filter_submit_url, EngineEvent, EngineHandle, FetchSettings, PageQuery,
};

/// Executes core effects against the engine and translates engine events
/// back into core messages.
pub struct EffectRunner {
    base_url: String,
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let engine = EngineHandle::new(base_url.clone(), FetchSettings::default());
        Self { base_url, engine }
    }

    /// Runs the effects. A `SubmitFilter` effect is a full-page navigation;
    /// its target URL is returned for the caller to perform.
    pub fn run(&self, effects: Vec<Effect>, form: &FormFields) -> Option<url::Url> {
        let mut navigation = None;
        for effect in effects {
            match effect {
                Effect::SubmitFilter { combined } => {
                    let query = page_query(combined, form, 1);
                    match filter_submit_url(&self.base_url, &query) {
                        Ok(url) => {
                            page_info!("SubmitFilter class_filter={} -> {url}", query.class_filter);
                            navigation = Some(url);
                        }
                        Err(err) => {
                            page_warn!("SubmitFilter failed to build URL: {}", err.kind);
                        }
                    }
                }
                Effect::FetchPage {
                    page,
                    class_filter,
                    form,
                } => {
                    page_info!("FetchPage page={page} class_filter={class_filter}");
                    self.engine.fetch_page(page_query(class_filter, &form, page));
                }
            }
        }
        navigation
    }

    /// Polls the engine once. Fetch failures are logged here and surface to
    /// the state machine only as a counter rollback; the page shows no
    /// error to the user.
    pub fn poll(&self) -> Option<Msg> {
        match self.engine.try_recv()? {
            EngineEvent::PageCompleted {
                page,
                result: Ok(fragment),
            } => Some(Msg::PageLoaded {
                page,
                html: fragment.html,
                has_more: fragment.has_more,
            }),
            EngineEvent::PageCompleted {
                page,
                result: Err(err),
            } => {
                page_warn!("Page {page} failed: {}: {}", err.kind, err.message);
                Some(Msg::PageLoadFailed { page })
            }
        }
    }
}

fn page_query(class_filter: String, form: &FormFields, page: u32) -> PageQuery {
    PageQuery {
        class_filter,
        search: form.search.clone(),
        author_filter: form.author_filter.clone(),
        date_filter: form.date_filter.clone(),
        sort_by: form.sort_by.clone(),
        page,
    }
}
