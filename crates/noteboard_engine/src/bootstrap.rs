use serde_json::Value;

/// Raw `data-*` attributes read off the page element that carries the
/// initial client state.
#[derive(Debug, Clone, Default)]
pub struct PageDataAttrs {
    /// `data-page`: server-rendered page number, integer string.
    pub page: String,
    /// `data-classes`: JSON array of course codes (flat path).
    pub classes: Option<String>,
    /// `data-catalog`: JSON object subject -> number array (structured
    /// path, key order significant).
    pub catalog: Option<String>,
    /// `data-subjects`: JSON array overriding the catalog's subject order.
    pub subjects: Option<String>,
    /// `data-active-filter`: "All" or a course code.
    pub active_filter: String,
    pub search: Option<String>,
    pub author_filter: Option<String>,
    pub date_filter: Option<String>,
    pub sort_by: Option<String>,
}

/// Course catalog as the server supplied it, before index construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Flat list of course codes.
    Codes(Vec<String>),
    /// Subject -> numbers pairs, order as supplied.
    Catalog(Vec<(String, Vec<String>)>),
}

/// Decoded initial page state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBootstrap {
    pub current_page: u32,
    pub active_filter: String,
    pub catalog: CatalogSource,
    pub search: String,
    pub author_filter: String,
    pub date_filter: String,
    pub sort_by: String,
}

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("data-page is not a positive integer: {value:?}")]
    InvalidPage { value: String },
    #[error("invalid JSON in {attr}: {source}")]
    InvalidJson {
        attr: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{attr} must be a JSON array of strings")]
    NotAStringArray { attr: &'static str },
    #[error("data-catalog must be a JSON object of subject -> number arrays")]
    MalformedCatalog,
    #[error("neither data-classes nor data-catalog supplied")]
    MissingCatalog,
}

/// Decodes the bootstrap attributes, failing fast on anything the page
/// cannot sensibly start without. The structured catalog wins over the
/// flat code list when both are present.
pub fn decode_bootstrap(attrs: &PageDataAttrs) -> Result<PageBootstrap, BootstrapError> {
    let current_page: u32 = attrs
        .page
        .trim()
        .parse()
        .ok()
        .filter(|page| *page >= 1)
        .ok_or_else(|| BootstrapError::InvalidPage {
            value: attrs.page.clone(),
        })?;

    let catalog = match (&attrs.catalog, &attrs.classes) {
        (Some(raw), _) => {
            let mut pairs = parse_catalog(raw)?;
            if let Some(subjects_raw) = &attrs.subjects {
                let order = parse_string_array(subjects_raw, "data-subjects")?;
                pairs = reorder_subjects(pairs, &order);
            }
            CatalogSource::Catalog(pairs)
        }
        (None, Some(raw)) => CatalogSource::Codes(parse_string_array(raw, "data-classes")?),
        (None, None) => return Err(BootstrapError::MissingCatalog),
    };

    Ok(PageBootstrap {
        current_page,
        active_filter: attrs.active_filter.clone(),
        catalog,
        search: attrs.search.clone().unwrap_or_default(),
        author_filter: or_all(&attrs.author_filter),
        date_filter: or_all(&attrs.date_filter),
        sort_by: attrs
            .sort_by
            .clone()
            .unwrap_or_else(|| "recent".to_string()),
    })
}

fn or_all(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "All".to_string())
}

fn parse_string_array(raw: &str, attr: &'static str) -> Result<Vec<String>, BootstrapError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|source| BootstrapError::InvalidJson { attr, source })?;
    let Value::Array(items) = value else {
        return Err(BootstrapError::NotAStringArray { attr });
    };
    items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Ok(s),
            _ => Err(BootstrapError::NotAStringArray { attr }),
        })
        .collect()
}

/// Parses the structured catalog object. serde_json is built with
/// `preserve_order`, so iteration follows the source key order.
fn parse_catalog(raw: &str) -> Result<Vec<(String, Vec<String>)>, BootstrapError> {
    let value: Value = serde_json::from_str(raw).map_err(|source| BootstrapError::InvalidJson {
        attr: "data-catalog",
        source,
    })?;
    let Value::Object(map) = value else {
        return Err(BootstrapError::MalformedCatalog);
    };
    map.into_iter()
        .map(|(subject, numbers)| {
            let Value::Array(items) = numbers else {
                return Err(BootstrapError::MalformedCatalog);
            };
            let numbers = items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    _ => Err(BootstrapError::MalformedCatalog),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok((subject, numbers))
        })
        .collect()
}

/// Applies the `data-subjects` ordering: listed subjects first in the given
/// order, anything unlisted after in source order. Names without a catalog
/// entry are ignored.
fn reorder_subjects(
    pairs: Vec<(String, Vec<String>)>,
    order: &[String],
) -> Vec<(String, Vec<String>)> {
    let mut remaining = pairs;
    let mut reordered = Vec::with_capacity(remaining.len());
    for subject in order {
        if let Some(pos) = remaining.iter().position(|(s, _)| s == subject) {
            reordered.push(remaining.remove(pos));
        }
    }
    reordered.extend(remaining);
    reordered
}
