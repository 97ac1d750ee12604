use noteboard_engine::{decode_bootstrap, BootstrapError, CatalogSource, PageDataAttrs};
use pretty_assertions::assert_eq;

fn base_attrs() -> PageDataAttrs {
    PageDataAttrs {
        page: "1".to_string(),
        classes: Some(r#"["CS124","MATH221"]"#.to_string()),
        active_filter: "All".to_string(),
        ..PageDataAttrs::default()
    }
}

#[test]
fn decodes_the_flat_class_list() {
    let bootstrap = decode_bootstrap(&base_attrs()).unwrap();

    assert_eq!(bootstrap.current_page, 1);
    assert_eq!(bootstrap.active_filter, "All");
    assert_eq!(
        bootstrap.catalog,
        CatalogSource::Codes(vec!["CS124".to_string(), "MATH221".to_string()])
    );
    // Absent form fields take the backend's defaults.
    assert_eq!(bootstrap.search, "");
    assert_eq!(bootstrap.author_filter, "All");
    assert_eq!(bootstrap.date_filter, "All");
    assert_eq!(bootstrap.sort_by, "recent");
}

#[test]
fn structured_catalog_wins_over_the_flat_list() {
    let mut attrs = base_attrs();
    attrs.catalog = Some(r#"{"MATH":["241","221"],"CS":["124"]}"#.to_string());

    let bootstrap = decode_bootstrap(&attrs).unwrap();
    assert_eq!(
        bootstrap.catalog,
        CatalogSource::Catalog(vec![
            ("MATH".to_string(), vec!["241".to_string(), "221".to_string()]),
            ("CS".to_string(), vec!["124".to_string()]),
        ])
    );
}

#[test]
fn subject_list_overrides_catalog_order() {
    let mut attrs = base_attrs();
    attrs.catalog = Some(r#"{"MATH":["221"],"CS":["124"],"PHY":["211"]}"#.to_string());
    attrs.subjects = Some(r#"["CS","BIO","PHY"]"#.to_string());

    let bootstrap = decode_bootstrap(&attrs).unwrap();
    let CatalogSource::Catalog(pairs) = bootstrap.catalog else {
        panic!("expected structured catalog");
    };
    let subjects: Vec<&str> = pairs.iter().map(|(s, _)| s.as_str()).collect();
    // Listed subjects first in the given order ("BIO" has no catalog entry
    // and is dropped), unlisted ones after in source order.
    assert_eq!(subjects, ["CS", "PHY", "MATH"]);
}

#[test]
fn form_fields_pass_through_when_present() {
    let mut attrs = base_attrs();
    attrs.page = "3".to_string();
    attrs.active_filter = "CS124".to_string();
    attrs.search = Some("pointers".to_string());
    attrs.author_filter = Some("Ada".to_string());
    attrs.date_filter = Some("Week".to_string());
    attrs.sort_by = Some("title".to_string());

    let bootstrap = decode_bootstrap(&attrs).unwrap();
    assert_eq!(bootstrap.current_page, 3);
    assert_eq!(bootstrap.active_filter, "CS124");
    assert_eq!(bootstrap.search, "pointers");
    assert_eq!(bootstrap.author_filter, "Ada");
    assert_eq!(bootstrap.date_filter, "Week");
    assert_eq!(bootstrap.sort_by, "title");
}

#[test]
fn rejects_a_non_numeric_page() {
    let mut attrs = base_attrs();
    attrs.page = "first".to_string();
    assert!(matches!(
        decode_bootstrap(&attrs),
        Err(BootstrapError::InvalidPage { .. })
    ));
}

#[test]
fn rejects_page_zero() {
    let mut attrs = base_attrs();
    attrs.page = "0".to_string();
    assert!(matches!(
        decode_bootstrap(&attrs),
        Err(BootstrapError::InvalidPage { .. })
    ));
}

#[test]
fn rejects_invalid_json_in_classes() {
    let mut attrs = base_attrs();
    attrs.classes = Some("[not json".to_string());
    assert!(matches!(
        decode_bootstrap(&attrs),
        Err(BootstrapError::InvalidJson {
            attr: "data-classes",
            ..
        })
    ));
}

#[test]
fn rejects_a_catalog_that_is_not_an_object() {
    let mut attrs = base_attrs();
    attrs.catalog = Some(r#"["CS124"]"#.to_string());
    assert!(matches!(
        decode_bootstrap(&attrs),
        Err(BootstrapError::MalformedCatalog)
    ));
}

#[test]
fn rejects_catalog_values_that_are_not_string_arrays() {
    let mut attrs = base_attrs();
    attrs.catalog = Some(r#"{"CS":[124]}"#.to_string());
    assert!(matches!(
        decode_bootstrap(&attrs),
        Err(BootstrapError::MalformedCatalog)
    ));
}

#[test]
fn rejects_a_page_with_no_catalog_at_all() {
    let mut attrs = base_attrs();
    attrs.classes = None;
    assert!(matches!(
        decode_bootstrap(&attrs),
        Err(BootstrapError::MissingCatalog)
    ));
}
