use noteboard_core::{decompose, CourseIndex};

#[test]
fn decompose_splits_subject_and_number() {
    assert_eq!(decompose("CS124"), Some(("CS", "124")));
    assert_eq!(decompose("MATH241"), Some(("MATH", "241")));
    assert_eq!(decompose("PHY212"), Some(("PHY", "212")));
}

#[test]
fn decompose_recomposes_to_the_original_code() {
    for code in ["CS124", "RHET105", "ENG100", "A1"] {
        let (subject, number) = decompose(code).unwrap();
        assert_eq!(format!("{subject}{number}"), code);
    }
}

#[test]
fn decompose_rejects_malformed_codes() {
    for code in ["", "CS", "124", "cs124", "CS-124", "CS124X", "ÉCO101"] {
        assert_eq!(decompose(code), None, "{code:?} should not decompose");
    }
}

#[test]
fn from_codes_sorts_subjects_lexicographically() {
    let index = CourseIndex::from_codes(["CS225", "MATH241", "CS124"]);
    assert_eq!(index.subjects(), ["CS", "MATH"]);
}

#[test]
fn from_codes_drops_malformed_codes_silently() {
    let index = CourseIndex::from_codes(["CS124", "not a code", "cs128", "ENG100"]);
    assert_eq!(index.subjects(), ["CS", "ENG"]);
    assert_eq!(index.numbers("CS"), ["124"]);
    assert!(index
        .subjects()
        .iter()
        .all(|s| s.chars().all(|c| c.is_ascii_uppercase())));
}

#[test]
fn numbers_sort_numerically_not_lexicographically() {
    let index = CourseIndex::from_codes(["CS124", "CS9", "CS10"]);
    assert_eq!(index.numbers("CS"), ["9", "10", "124"]);
}

#[test]
fn numeric_sort_handles_long_digit_strings_and_leading_zeroes() {
    let index = CourseIndex::from_catalog([(
        "CS".to_string(),
        vec![
            "100000000000000000000".to_string(),
            "9".to_string(),
            "007".to_string(),
        ],
    )]);
    assert_eq!(index.numbers("CS"), ["007", "9", "100000000000000000000"]);
}

#[test]
fn duplicate_numbers_persist_as_given() {
    let index = CourseIndex::from_codes(["CS124", "CS124", "CS9"]);
    assert_eq!(index.numbers("CS"), ["9", "124", "124"]);
}

#[test]
fn from_catalog_preserves_supplied_subject_order() {
    let index = CourseIndex::from_catalog([
        ("MATH".to_string(), vec!["241".to_string(), "221".to_string()]),
        ("CS".to_string(), vec!["124".to_string()]),
    ]);
    // No re-sort on this path; the flat-list path would yield ["CS", "MATH"].
    assert_eq!(index.subjects(), ["MATH", "CS"]);
    assert_eq!(index.numbers("MATH"), ["221", "241"]);
}

#[test]
fn unknown_subject_yields_empty_numbers() {
    let index = CourseIndex::from_codes(["CS124"]);
    assert!(index.numbers("MATH").is_empty());
    assert!(!index.contains_subject("MATH"));
}

#[test]
fn empty_input_builds_an_empty_index() {
    let index = CourseIndex::from_codes(Vec::<String>::new());
    assert!(index.is_empty());
    assert!(index.subjects().is_empty());
}
