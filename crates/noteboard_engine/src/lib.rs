//! Noteboard engine: page fetch IO and bootstrap decoding.
mod bootstrap;
mod engine;
mod fetch;
mod types;

pub use bootstrap::{decode_bootstrap, BootstrapError, CatalogSource, PageBootstrap, PageDataAttrs};
pub use engine::EngineHandle;
pub use fetch::{filter_submit_url, notes_page_url, FetchSettings, PageFetcher, ReqwestPageFetcher};
pub use types::{EngineEvent, FailureKind, FetchError, PageFragment, PageQuery};
